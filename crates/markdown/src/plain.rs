use crate::{InlineRenderer, InlineSequence, MarkdownError};
use vitae_idf::InlineNode;

/// Treats text as unformatted prose. Blank lines separate paragraphs.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainTextRenderer;

impl InlineRenderer for PlainTextRenderer {
    fn render_inline(&self, text: &str) -> Result<InlineSequence, MarkdownError> {
        Ok(paragraphs(text))
    }

    fn name(&self) -> &'static str {
        "plain"
    }
}

pub(crate) fn paragraphs(text: &str) -> InlineSequence {
    let mut nodes = Vec::new();
    let mut in_paragraph = false;
    for line in text.lines().map(str::trim_end) {
        if line.trim().is_empty() {
            in_paragraph = false;
            continue;
        }
        if in_paragraph {
            nodes.push(InlineNode::LineBreak);
        } else if !nodes.is_empty() {
            nodes.push(InlineNode::ParagraphBreak);
        }
        let line = if in_paragraph { line } else { line.trim_start() };
        nodes.push(InlineNode::text(line));
        in_paragraph = true;
    }
    InlineSequence::new(nodes)
}
