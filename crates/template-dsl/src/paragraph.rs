use crate::node::{InlineBuilder, TemplateBuilder};
use crate::style::impl_styled_widget;
use vitae_idf::{InlineNode, NodeMetadata, RenderNode};
use vitae_style::ElementStyle;

/// Builder for a `Paragraph` node.
#[derive(Default, Clone, Debug)]
pub struct Paragraph {
    id: Option<String>,
    classes: Vec<String>,
    style_override: ElementStyle,
    children: Vec<InlineNode>,
}

impl Paragraph {
    /// Creates a new Paragraph containing an initial piece of content.
    /// The content can be a `&str`, `String`, `Text`, `Span` or `Hyperlink`.
    pub fn new(content: impl InlineBuilder) -> Self {
        Self { children: vec![content.into_inline()], ..Default::default() }
    }

    /// Creates a new, empty Paragraph.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn class(mut self, name: &str) -> Self {
        self.classes.push(name.to_string());
        self
    }

    /// Adds a child node (e.g., `Text`, `Span`, `Hyperlink`).
    pub fn child(mut self, child: impl InlineBuilder) -> Self {
        self.children.push(child.into_inline());
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = InlineNode>) -> Self {
        self.children.extend(children);
        self
    }

    /// Convenience method to add a simple text node.
    pub fn text(self, content: &str) -> Self {
        self.child(content)
    }
}

impl TemplateBuilder for Paragraph {
    fn build(self: Box<Self>) -> RenderNode {
        RenderNode::Paragraph {
            meta: NodeMetadata { id: self.id, classes: self.classes, style: self.style_override },
            children: self.children,
        }
    }
}

/// Builder for a `Heading` node.
#[derive(Clone, Debug)]
pub struct Heading {
    level: u8,
    classes: Vec<String>,
    style_override: ElementStyle,
    children: Vec<InlineNode>,
}

impl Heading {
    pub fn new(level: u8, content: impl InlineBuilder) -> Self {
        Self {
            level: level.clamp(1, 6),
            classes: vec![],
            style_override: Default::default(),
            children: vec![content.into_inline()],
        }
    }

    pub fn class(mut self, name: &str) -> Self {
        self.classes.push(name.to_string());
        self
    }

    pub fn child(mut self, child: impl InlineBuilder) -> Self {
        self.children.push(child.into_inline());
        self
    }
}

impl TemplateBuilder for Heading {
    fn build(self: Box<Self>) -> RenderNode {
        RenderNode::Heading {
            meta: NodeMetadata { id: None, classes: self.classes, style: self.style_override },
            level: self.level,
            children: self.children,
        }
    }
}

impl_styled_widget!(Paragraph, Heading);
