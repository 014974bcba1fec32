// src/error.rs
use thiserror::Error;
use vitae_model::SchemaViolation;
use vitae_template_core::TemplateError;

/// Errors raised by the host-facing layer: loading inputs and rendering them.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Template failed: {0}")]
    Template(#[from] TemplateError),

    #[error("Résumé data is invalid: {0}")]
    Schema(#[from] SchemaViolation),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Engine configuration is invalid: {0}")]
    Config(String),
}
