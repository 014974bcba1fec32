use thiserror::Error;
use vitae_model::SchemaViolation;

/// Errors that can occur while rendering a template.
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Schema violation: {0}")]
    SchemaViolation(#[from] SchemaViolation),

    #[error("Template '{key}' is not registered")]
    NotFound { key: String },

    #[error("Template rendering failed: {0}")]
    Render(String),
}
