//! Render tree: the host-agnostic output of a template render.
//!
//! A template produces a single [`RenderNode::Root`] whose descendants are
//! regions, blocks and text runs with attached [`ElementStyle`]s. The node
//! set is small and fixed so a document host (DOM, canvas, PDF) can map each
//! variant onto one of its own primitives without knowing which template
//! produced the tree.

use serde::Serialize;
use vitae_style::ElementStyle;

/// Metadata shared by every block-level node.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct NodeMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,
    #[serde(skip_serializing_if = "ElementStyle::is_empty")]
    pub style: ElementStyle,
}

impl NodeMetadata {
    pub fn with_id(id: impl Into<String>) -> Self {
        Self { id: Some(id.into()), ..Default::default() }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// A block-level element in the render tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum RenderNode {
    /// The document root. Carries the theme font and colors.
    Root { meta: NodeMetadata, children: Vec<RenderNode> },
    /// A top-level layout area such as a sidebar, header band or main column.
    Region { meta: NodeMetadata, children: Vec<RenderNode> },
    /// A generic vertical container.
    Block { meta: NodeMetadata, children: Vec<RenderNode> },
    /// A flexbox container; direction and wrapping live in the style.
    Flex { meta: NodeMetadata, children: Vec<RenderNode> },
    /// An evenly divided grid with a fixed number of columns.
    Grid { meta: NodeMetadata, columns: u8, children: Vec<RenderNode> },
    Heading { meta: NodeMetadata, level: u8, children: Vec<InlineNode> },
    /// A run of inline content produced by the template itself.
    Paragraph { meta: NodeMetadata, children: Vec<InlineNode> },
    /// Inline content produced by the markdown capability from free text.
    Markdown { meta: NodeMetadata, children: Vec<InlineNode> },
    List { meta: NodeMetadata, ordered: bool, children: Vec<RenderNode> },
    ListItem { meta: NodeMetadata, children: Vec<RenderNode> },
    /// A horizontal separator.
    Rule { meta: NodeMetadata },
}

/// An inline element inside a `Heading`, `Paragraph` or `Markdown` node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum InlineNode {
    Text { text: String },
    Strong { children: Vec<InlineNode> },
    Emphasis { children: Vec<InlineNode> },
    Code { text: String },
    Hyperlink { href: String, children: Vec<InlineNode> },
    /// A styled inline container.
    Span {
        #[serde(skip_serializing_if = "ElementStyle::is_empty")]
        style: ElementStyle,
        children: Vec<InlineNode>,
    },
    /// A named glyph from the host's icon set (e.g. `phone`, `github`).
    Icon { name: String },
    LineBreak,
    ParagraphBreak,
}

impl InlineNode {
    pub fn text(text: impl Into<String>) -> Self {
        InlineNode::Text { text: text.into() }
    }

    /// Appends the plain text of this node to `out`, dropping all formatting.
    pub fn write_plain_text(&self, out: &mut String) {
        match self {
            InlineNode::Text { text } | InlineNode::Code { text } => out.push_str(text),
            InlineNode::Strong { children }
            | InlineNode::Emphasis { children }
            | InlineNode::Hyperlink { children, .. }
            | InlineNode::Span { children, .. } => {
                children.iter().for_each(|c| c.write_plain_text(out))
            }
            InlineNode::LineBreak | InlineNode::ParagraphBreak => out.push('\n'),
            InlineNode::Icon { .. } => {}
        }
    }

    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.write_plain_text(&mut out);
        out
    }
}

impl RenderNode {
    pub fn meta(&self) -> &NodeMetadata {
        match self {
            RenderNode::Root { meta, .. }
            | RenderNode::Region { meta, .. }
            | RenderNode::Block { meta, .. }
            | RenderNode::Flex { meta, .. }
            | RenderNode::Grid { meta, .. }
            | RenderNode::Heading { meta, .. }
            | RenderNode::Paragraph { meta, .. }
            | RenderNode::Markdown { meta, .. }
            | RenderNode::List { meta, .. }
            | RenderNode::ListItem { meta, .. }
            | RenderNode::Rule { meta } => meta,
        }
    }

    pub fn meta_mut(&mut self) -> &mut NodeMetadata {
        match self {
            RenderNode::Root { meta, .. }
            | RenderNode::Region { meta, .. }
            | RenderNode::Block { meta, .. }
            | RenderNode::Flex { meta, .. }
            | RenderNode::Grid { meta, .. }
            | RenderNode::Heading { meta, .. }
            | RenderNode::Paragraph { meta, .. }
            | RenderNode::Markdown { meta, .. }
            | RenderNode::List { meta, .. }
            | RenderNode::ListItem { meta, .. }
            | RenderNode::Rule { meta } => meta,
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.meta().id.as_deref()
    }

    pub fn style(&self) -> &ElementStyle {
        &self.meta().style
    }

    /// Block-level children. Empty for nodes that only hold inline content.
    pub fn children(&self) -> &[RenderNode] {
        match self {
            RenderNode::Root { children, .. }
            | RenderNode::Region { children, .. }
            | RenderNode::Block { children, .. }
            | RenderNode::Flex { children, .. }
            | RenderNode::Grid { children, .. }
            | RenderNode::List { children, .. }
            | RenderNode::ListItem { children, .. } => children,
            RenderNode::Heading { .. }
            | RenderNode::Paragraph { .. }
            | RenderNode::Markdown { .. }
            | RenderNode::Rule { .. } => &[],
        }
    }

    /// Inline children. Empty for container nodes.
    pub fn inline_children(&self) -> &[InlineNode] {
        match self {
            RenderNode::Heading { children, .. }
            | RenderNode::Paragraph { children, .. }
            | RenderNode::Markdown { children, .. } => children,
            _ => &[],
        }
    }

    /// A string identifier for the node type, matching its serialized tag.
    pub fn kind(&self) -> &'static str {
        match self {
            RenderNode::Root { .. } => "root",
            RenderNode::Region { .. } => "region",
            RenderNode::Block { .. } => "block",
            RenderNode::Flex { .. } => "flex",
            RenderNode::Grid { .. } => "grid",
            RenderNode::Heading { .. } => "heading",
            RenderNode::Paragraph { .. } => "paragraph",
            RenderNode::Markdown { .. } => "markdown",
            RenderNode::List { .. } => "list",
            RenderNode::ListItem { .. } => "list-item",
            RenderNode::Rule { .. } => "rule",
        }
    }

    /// Visits this node and all block descendants in document order.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a RenderNode)) {
        visit(self);
        for child in self.children() {
            child.walk(visit);
        }
    }

    /// This node and all block descendants in document order.
    pub fn descendants(&self) -> Vec<&RenderNode> {
        let mut nodes = Vec::new();
        self.walk(&mut |n| nodes.push(n));
        nodes
    }

    pub fn find_by_id(&self, id: &str) -> Option<&RenderNode> {
        self.descendants().into_iter().find(|n| n.id() == Some(id))
    }

    pub fn count_by_id(&self, id: &str) -> usize {
        self.descendants().iter().filter(|n| n.id() == Some(id)).count()
    }

    /// All text under this node, one line per text-bearing block.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.walk(&mut |node| {
            let inline = node.inline_children();
            if !inline.is_empty() {
                inline.iter().for_each(|i| i.write_plain_text(&mut out));
                out.push('\n');
            }
        });
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RenderNode {
        RenderNode::Root {
            meta: NodeMetadata::default(),
            children: vec![
                RenderNode::Block {
                    meta: NodeMetadata::with_id("work"),
                    children: vec![
                        RenderNode::Heading {
                            meta: NodeMetadata::default(),
                            level: 6,
                            children: vec![InlineNode::text("Experience")],
                        },
                        RenderNode::Markdown {
                            meta: NodeMetadata::with_id("w1"),
                            children: vec![
                                InlineNode::text("Built "),
                                InlineNode::Strong { children: vec![InlineNode::text("things")] },
                            ],
                        },
                    ],
                },
                RenderNode::Rule { meta: NodeMetadata::default() },
            ],
        }
    }

    #[test]
    fn walks_in_document_order() {
        let tree = sample();
        let kinds: Vec<_> = tree.descendants().iter().map(|n| n.kind()).collect();
        assert_eq!(kinds, ["root", "block", "heading", "markdown", "rule"]);
    }

    #[test]
    fn finds_nodes_by_id() {
        let tree = sample();
        assert_eq!(tree.find_by_id("w1").map(|n| n.kind()), Some("markdown"));
        assert_eq!(tree.count_by_id("work"), 1);
        assert!(tree.find_by_id("missing").is_none());
    }

    #[test]
    fn text_content_drops_formatting() {
        assert_eq!(sample().text_content(), "Experience\nBuilt things\n");
    }

    #[test]
    fn serializes_with_type_tags() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["type"], "root");
        assert_eq!(value["children"][0]["meta"]["id"], "work");
        assert_eq!(value["children"][0]["children"][1]["children"][1]["type"], "strong");
        assert_eq!(value["children"][1]["type"], "rule");
    }
}
