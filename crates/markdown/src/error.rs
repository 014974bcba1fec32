use thiserror::Error;

/// Errors raised by an inline markdown backend.
///
/// The core absorbs these by falling back to plain text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MarkdownError {
    #[error("Input of {len} bytes exceeds the {limit} byte limit")]
    InputTooLarge { len: usize, limit: usize },

    #[error("Unbalanced markup: unexpected end of {0}")]
    Unbalanced(&'static str),

    #[error("Markdown backend error: {0}")]
    Backend(String),
}
