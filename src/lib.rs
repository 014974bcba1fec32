//! Résumé template engine.
//!
//! A résumé ([`Resume`]) and a theme ([`Theme`]) go in; a styled document
//! tree ([`RenderNode`]) comes out. The tree is handed to a document host
//! (DOM, canvas, PDF) that this crate knows nothing about.
//!
//! ```no_run
//! use vitae::{Resume, Theme, global_registry};
//!
//! let resume = Resume::from_json_str(r#"{"person":{"firstName":"Ada"}}"#)?;
//! let tree = global_registry().render("onyx", &resume, &Theme::default())?;
//! println!("{}", serde_json::to_string_pretty(&tree)?);
//! # Ok::<(), vitae::EngineError>(())
//! ```

pub mod config;
pub mod error;
pub mod registry;

pub use config::{EngineConfig, MarkdownMode};
pub use error::EngineError;
pub use registry::{RegistryBuilder, TemplateRegistry, global_registry};

pub use vitae_idf::{InlineNode, NodeMetadata, RenderNode};
pub use vitae_model::{Resume, SchemaViolation, SectionKey, Theme};
pub use vitae_template_core::{RenderContext, Template, TemplateError};

/// Building blocks for templates defined outside this crate.
pub use vitae_template_dsl as dsl;
pub use vitae_style as style;
pub use vitae_types as types;

use std::fs;
use std::io;
use std::path::Path;

/// Renders through the process-wide registry.
pub fn render(key: &str, resume: &Resume, theme: &Theme) -> Result<RenderNode, TemplateError> {
    global_registry().render(key, resume, theme)
}

fn read_input(path: &Path, what: &str) -> Result<String, EngineError> {
    fs::read_to_string(path).map_err(|e| {
        EngineError::Io(io::Error::new(
            e.kind(),
            format!("Failed to read {} from '{}': {}", what, path.display(), e),
        ))
    })
}

/// Reads a résumé file in either the canonical or the legacy `basics` shape.
pub fn load_resume<P: AsRef<Path>>(path: P) -> Result<Resume, EngineError> {
    let source = read_input(path.as_ref(), "résumé")?;
    Ok(Resume::from_json_str(&source)?)
}

pub fn load_theme<P: AsRef<Path>>(path: P) -> Result<Theme, EngineError> {
    let source = read_input(path.as_ref(), "theme")?;
    Ok(Theme::from_json_str(&source)?)
}
