use thiserror::Error;

/// A résumé or theme is missing structure the renderers depend on.
///
/// This is always an upstream contract breach and is never recovered from.
#[derive(Error, Debug)]
pub enum SchemaViolation {
    #[error("Required field '{field}' is missing")]
    MissingField { field: String },

    #[error("Duplicate item id '{id}' in section '{section}'")]
    DuplicateId { section: &'static str, id: String },

    #[error("Item id '{id}' in section '{section}' is reserved for layout containers")]
    ReservedId { section: &'static str, id: String },

    #[error("An item in section '{section}' has an empty id")]
    EmptyId { section: &'static str },

    #[error("Malformed document: {0}")]
    Json(#[from] serde_json::Error),
}

impl SchemaViolation {
    pub fn missing(field: impl Into<String>) -> Self {
        SchemaViolation::MissingField { field: field.into() }
    }
}
