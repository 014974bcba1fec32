//! Core abstractions for template rendering.
//!
//! This crate defines the contract between the template registry and the
//! individual template renderers.
//!
//! ## Key Abstractions
//!
//! - **`Template`**: A pure transform from a [`RenderContext`] to a render tree
//! - **`RenderContext`**: The résumé and theme snapshots plus the markdown capability
//! - **`Palette`**: Theme colors resolved once per render, including the accent tint
//! - **`SectionComposer`**: The shared enable/filter/order algorithm for sections
//! - **`TemplateError`**: Structural failures surfaced to the caller

mod compose;
mod context;
mod error;
mod palette;

pub use compose::{ObjectiveComposer, SECTION_CLASS, SectionComposer};
pub use context::RenderContext;
pub use error::TemplateError;
pub use palette::{DEFAULT_TINT_ALPHA, Palette};

use vitae_idf::RenderNode;

/// A single visual layout strategy.
///
/// Implementations must be pure: the same context always yields the same
/// tree, and nothing outside the returned tree is touched.
pub trait Template: Send + Sync {
    fn render(&self, ctx: &RenderContext<'_>) -> Result<RenderNode, TemplateError>;
}

impl<F> Template for F
where
    F: Fn(&RenderContext<'_>) -> Result<RenderNode, TemplateError> + Send + Sync,
{
    fn render(&self, ctx: &RenderContext<'_>) -> Result<RenderNode, TemplateError> {
        self(ctx)
    }
}
