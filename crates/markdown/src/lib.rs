//! Inline markdown capability.
//!
//! Templates never parse markdown themselves. They hand free text to an
//! [`InlineRenderer`] and receive an [`InlineSequence`] of render tree inline
//! nodes back. Two backends are provided:
//!
//! - [`CommonMarkRenderer`]: CommonMark via `pulldown-cmark`
//! - [`PlainTextRenderer`]: no formatting, paragraphs split on blank lines

mod commonmark;
mod error;
mod plain;

pub use commonmark::{CommonMarkRenderer, DEFAULT_MAX_INPUT_LEN};
pub use error::MarkdownError;
pub use plain::PlainTextRenderer;

use std::fmt::Debug;
use vitae_idf::InlineNode;

/// A finite, restartable sequence of inline nodes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InlineSequence(Vec<InlineNode>);

impl InlineSequence {
    pub fn new(nodes: Vec<InlineNode>) -> Self {
        Self(nodes)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, InlineNode> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_nodes(self) -> Vec<InlineNode> {
        self.0
    }
}

impl IntoIterator for InlineSequence {
    type Item = InlineNode;
    type IntoIter = std::vec::IntoIter<InlineNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a InlineSequence {
    type Item = &'a InlineNode;
    type IntoIter = std::slice::Iter<'a, InlineNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<InlineNode> for InlineSequence {
    fn from_iter<T: IntoIterator<Item = InlineNode>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Converts a free-text field into inline render nodes.
pub trait InlineRenderer: Send + Sync + Debug {
    /// Renders `text` into inline nodes (bold, italic, links, paragraph breaks).
    fn render_inline(&self, text: &str) -> Result<InlineSequence, MarkdownError>;

    /// Returns a human-readable name for this backend (for logging).
    fn name(&self) -> &'static str;
}

/// Renders `text`, falling back to unformatted text if the backend fails.
///
/// Formatting problems in one field must never abort a whole render.
pub fn render_or_plain(renderer: &dyn InlineRenderer, text: &str) -> InlineSequence {
    match renderer.render_inline(text) {
        Ok(seq) => seq,
        Err(e) => {
            log::warn!(
                "markdown backend '{}' failed ({}); using plain text",
                renderer.name(),
                e
            );
            plain::paragraphs(text)
        }
    }
}
