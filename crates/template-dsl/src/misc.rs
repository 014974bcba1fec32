use crate::node::TemplateBuilder;
use crate::style::impl_styled_widget;
use vitae_idf::{NodeMetadata, RenderNode};
use vitae_style::ElementStyle;

/// Builder for a horizontal `Rule`.
#[derive(Clone, Default, Debug)]
pub struct Rule {
    style_override: ElementStyle,
}

impl Rule {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TemplateBuilder for Rule {
    fn build(self: Box<Self>) -> RenderNode {
        RenderNode::Rule { meta: NodeMetadata { style: self.style_override, ..Default::default() } }
    }
}

impl_styled_widget!(Rule);
