use crate::node::InlineBuilder;
use crate::style::impl_styled_widget;
use vitae_idf::InlineNode;
use vitae_style::ElementStyle;

/// Builder for an inline `Text` node.
#[derive(Clone, Debug)]
pub struct Text {
    content: String,
}

impl Text {
    pub fn new(content: &str) -> Self {
        Self { content: content.to_string() }
    }
}

impl InlineBuilder for Text {
    fn build_inline(self: Box<Self>) -> InlineNode {
        InlineNode::Text { text: self.content }
    }
}

/// Builder for a styled inline `Span`.
#[derive(Default, Clone, Debug)]
pub struct Span {
    style_override: ElementStyle,
    children: Vec<InlineNode>,
}

impl Span {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn child(mut self, child: impl InlineBuilder) -> Self {
        self.children.push(child.into_inline());
        self
    }

    pub fn text(self, content: &str) -> Self {
        self.child(Text::new(content))
    }
}

impl InlineBuilder for Span {
    fn build_inline(self: Box<Self>) -> InlineNode {
        InlineNode::Span { style: self.style_override, children: self.children }
    }
}

/// Builder for a `Hyperlink` node.
#[derive(Clone, Debug)]
pub struct Hyperlink {
    href: String,
    children: Vec<InlineNode>,
}

impl Hyperlink {
    pub fn new(href: &str) -> Self {
        Self { href: href.to_string(), children: vec![] }
    }

    pub fn child(mut self, child: impl InlineBuilder) -> Self {
        self.children.push(child.into_inline());
        self
    }

    pub fn text(self, content: &str) -> Self {
        self.child(Text::new(content))
    }
}

impl InlineBuilder for Hyperlink {
    fn build_inline(self: Box<Self>) -> InlineNode {
        InlineNode::Hyperlink { href: self.href, children: self.children }
    }
}

/// A named glyph from the host icon set.
#[derive(Clone, Debug)]
pub struct Icon {
    name: String,
}

impl Icon {
    pub fn new(name: &str) -> Self {
        Self { name: name.to_string() }
    }
}

impl InlineBuilder for Icon {
    fn build_inline(self: Box<Self>) -> InlineNode {
        InlineNode::Icon { name: self.name }
    }
}

/// Builder for an inline `LineBreak`.
#[derive(Clone, Copy, Default, Debug)]
pub struct LineBreak;

impl InlineBuilder for LineBreak {
    fn build_inline(self: Box<Self>) -> InlineNode {
        InlineNode::LineBreak
    }
}

impl_styled_widget!(Span);
