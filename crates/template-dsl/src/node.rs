use vitae_idf::{InlineNode, RenderNode};

/// The central trait for all block-level builder structs.
///
/// It allows for polymorphic composition, enabling different builders
/// (like `Paragraph` or `Block`) to be placed as children of containers.
pub trait TemplateBuilder {
    /// Consumes the builder and returns a render tree node.
    fn build(self: Box<Self>) -> RenderNode;

    fn into_node(self) -> RenderNode
    where
        Self: Sized,
    {
        Box::new(self).build()
    }
}

/// Counterpart of [`TemplateBuilder`] for inline content.
pub trait InlineBuilder {
    fn build_inline(self: Box<Self>) -> InlineNode;

    fn into_inline(self) -> InlineNode
    where
        Self: Sized,
    {
        Box::new(self).build_inline()
    }
}

// Already-built nodes (e.g. from the section composer or markdown) can be
// placed anywhere a builder is accepted.

impl TemplateBuilder for RenderNode {
    fn build(self: Box<Self>) -> RenderNode {
        *self
    }
}

impl InlineBuilder for InlineNode {
    fn build_inline(self: Box<Self>) -> InlineNode {
        *self
    }
}

impl InlineBuilder for &str {
    fn build_inline(self: Box<Self>) -> InlineNode {
        InlineNode::text(*self)
    }
}

impl InlineBuilder for String {
    fn build_inline(self: Box<Self>) -> InlineNode {
        InlineNode::Text { text: *self }
    }
}
