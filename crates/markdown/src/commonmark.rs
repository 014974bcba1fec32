use crate::{InlineRenderer, InlineSequence, MarkdownError};
use pulldown_cmark::{Event, Parser, Tag, TagEnd};
use vitae_idf::InlineNode;

/// Default cap on input size, in bytes.
pub const DEFAULT_MAX_INPUT_LEN: usize = 16 * 1024;

/// CommonMark backend built on `pulldown-cmark`.
///
/// Block structure collapses to inline form: paragraphs and headings are
/// separated by `ParagraphBreak`, list items become bullet-prefixed lines.
#[derive(Debug, Clone, Copy)]
pub struct CommonMarkRenderer {
    max_input_len: usize,
}

impl Default for CommonMarkRenderer {
    fn default() -> Self {
        Self { max_input_len: DEFAULT_MAX_INPUT_LEN }
    }
}

impl CommonMarkRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_input_len(mut self, max_input_len: usize) -> Self {
        self.max_input_len = max_input_len;
        self
    }
}

impl InlineRenderer for CommonMarkRenderer {
    fn render_inline(&self, text: &str) -> Result<InlineSequence, MarkdownError> {
        if text.len() > self.max_input_len {
            return Err(MarkdownError::InputTooLarge {
                len: text.len(),
                limit: self.max_input_len,
            });
        }
        let mut builder = InlineBuilder::default();
        for event in Parser::new(text) {
            builder.handle(event)?;
        }
        builder.finish()
    }

    fn name(&self) -> &'static str {
        "commonmark"
    }
}

enum FrameKind {
    Root,
    Strong,
    Emphasis,
    Link(String),
    /// Image alt text is kept as plain inline content.
    Image,
}

struct Frame {
    kind: FrameKind,
    children: Vec<InlineNode>,
}

impl Frame {
    fn new(kind: FrameKind) -> Self {
        Self { kind, children: Vec::new() }
    }
}

struct InlineBuilder {
    stack: Vec<Frame>,
    /// One entry per open list; `Some(n)` is the next ordinal of an ordered list.
    lists: Vec<Option<u64>>,
}

impl Default for InlineBuilder {
    fn default() -> Self {
        Self { stack: vec![Frame::new(FrameKind::Root)], lists: Vec::new() }
    }
}

impl InlineBuilder {
    fn top(&mut self) -> &mut Vec<InlineNode> {
        // The root frame is never popped by `close`, so the stack is never empty.
        let last = self.stack.len() - 1;
        &mut self.stack[last].children
    }

    fn push_text(&mut self, text: &str) {
        let top = self.top();
        if let Some(InlineNode::Text { text: prev }) = top.last_mut() {
            prev.push_str(text);
        } else {
            top.push(InlineNode::text(text));
        }
    }

    fn push(&mut self, node: InlineNode) {
        self.top().push(node);
    }

    /// Separates a new block from whatever came before it.
    fn block_break(&mut self, separator: InlineNode) {
        let root = &mut self.stack[0].children;
        match root.last() {
            None | Some(InlineNode::ParagraphBreak) | Some(InlineNode::LineBreak) => {}
            Some(_) => root.push(separator),
        }
    }

    fn open(&mut self, kind: FrameKind) {
        self.stack.push(Frame::new(kind));
    }

    fn close(&mut self, expected: &'static str) -> Result<(), MarkdownError> {
        if self.stack.len() < 2 {
            return Err(MarkdownError::Unbalanced(expected));
        }
        let frame = self.stack.pop().ok_or(MarkdownError::Unbalanced(expected))?;
        let node = match (frame.kind, expected) {
            (FrameKind::Strong, "strong") => InlineNode::Strong { children: frame.children },
            (FrameKind::Emphasis, "emphasis") => InlineNode::Emphasis { children: frame.children },
            (FrameKind::Link(href), "link") => InlineNode::Hyperlink { href, children: frame.children },
            (FrameKind::Image, "image") => {
                for child in frame.children {
                    self.push(child);
                }
                return Ok(());
            }
            _ => return Err(MarkdownError::Unbalanced(expected)),
        };
        self.push(node);
        Ok(())
    }

    fn handle(&mut self, event: Event<'_>) -> Result<(), MarkdownError> {
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(tag) => return self.end(tag),
            Event::Text(text) => self.push_text(&text),
            Event::Code(code) => self.push(InlineNode::Code { text: code.to_string() }),
            Event::Html(html) | Event::InlineHtml(html) => self.push_text(&html),
            Event::SoftBreak => self.push_text(" "),
            Event::HardBreak => self.push(InlineNode::LineBreak),
            Event::Rule => self.block_break(InlineNode::ParagraphBreak),
            Event::TaskListMarker(done) => self.push_text(if done { "[x] " } else { "[ ] " }),
            _ => {}
        }
        Ok(())
    }

    fn start(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Paragraph if self.lists.is_empty() => self.block_break(InlineNode::ParagraphBreak),
            Tag::Heading { .. } => {
                self.block_break(InlineNode::ParagraphBreak);
                self.open(FrameKind::Strong);
            }
            Tag::List(first) => {
                if self.lists.is_empty() {
                    self.block_break(InlineNode::ParagraphBreak);
                }
                self.lists.push(first);
            }
            Tag::Item => {
                self.block_break(InlineNode::LineBreak);
                let marker = match self.lists.last_mut() {
                    Some(Some(n)) => {
                        let marker = format!("{}. ", n);
                        *n += 1;
                        marker
                    }
                    _ => "• ".to_string(),
                };
                self.push_text(&marker);
            }
            Tag::Emphasis => self.open(FrameKind::Emphasis),
            Tag::Strong => self.open(FrameKind::Strong),
            Tag::Link { dest_url, .. } => self.open(FrameKind::Link(dest_url.to_string())),
            Tag::Image { .. } => self.open(FrameKind::Image),
            Tag::CodeBlock(_) | Tag::BlockQuote(_) => self.block_break(InlineNode::ParagraphBreak),
            _ => {}
        }
    }

    fn end(&mut self, tag: TagEnd) -> Result<(), MarkdownError> {
        match tag {
            TagEnd::Heading(_) => self.close("strong"),
            TagEnd::Emphasis => self.close("emphasis"),
            TagEnd::Strong => self.close("strong"),
            TagEnd::Link => self.close("link"),
            TagEnd::Image => self.close("image"),
            TagEnd::List(_) => {
                self.lists.pop().ok_or(MarkdownError::Unbalanced("list"))?;
                Ok(())
            }
            _ => Ok(()),
        }
    }

    fn finish(mut self) -> Result<InlineSequence, MarkdownError> {
        if self.stack.len() != 1 {
            return Err(MarkdownError::Unbalanced("document"));
        }
        let mut nodes = self.stack.pop().map(|f| f.children).unwrap_or_default();
        // Code blocks end with a newline that would otherwise leave a trailing space.
        if let Some(InlineNode::Text { text }) = nodes.last_mut() {
            let trimmed = text.trim_end().len();
            text.truncate(trimmed);
        }
        Ok(InlineSequence::new(nodes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(text: &str) -> Vec<InlineNode> {
        CommonMarkRenderer::default().render_inline(text).unwrap().into_nodes()
    }

    #[test]
    fn emphasis_and_strong() {
        assert_eq!(
            render("Led **three** teams, _remotely_"),
            vec![
                InlineNode::text("Led "),
                InlineNode::Strong { children: vec![InlineNode::text("three")] },
                InlineNode::text(" teams, "),
                InlineNode::Emphasis { children: vec![InlineNode::text("remotely")] },
            ]
        );
    }

    #[test]
    fn links_keep_their_target() {
        assert_eq!(
            render("[site](https://example.com)"),
            vec![InlineNode::Hyperlink {
                href: "https://example.com".into(),
                children: vec![InlineNode::text("site")],
            }]
        );
    }

    #[test]
    fn paragraphs_are_separated() {
        assert_eq!(
            render("one\n\ntwo"),
            vec![InlineNode::text("one"), InlineNode::ParagraphBreak, InlineNode::text("two")]
        );
    }

    #[test]
    fn bullet_lists_become_lines() {
        assert_eq!(
            render("- a\n- b"),
            vec![InlineNode::text("• a"), InlineNode::LineBreak, InlineNode::text("• b")]
        );
        assert_eq!(
            render("1. x\n2. y"),
            vec![InlineNode::text("1. x"), InlineNode::LineBreak, InlineNode::text("2. y")]
        );
    }

    #[test]
    fn oversized_input_is_rejected() {
        let renderer = CommonMarkRenderer::default().with_max_input_len(4);
        assert_eq!(
            renderer.render_inline("too long"),
            Err(MarkdownError::InputTooLarge { len: 8, limit: 4 })
        );
    }
}
