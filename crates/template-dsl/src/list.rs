use crate::builders::ListItem;
use crate::node::TemplateBuilder;
use crate::style::impl_styled_widget;
use vitae_idf::{NodeMetadata, RenderNode};
use vitae_style::ElementStyle;

/// Builder for a `List` node.
#[derive(Default, Clone, Debug)]
pub struct List {
    id: Option<String>,
    ordered: bool,
    style_override: ElementStyle,
    children: Vec<RenderNode>,
}

impl List {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ordered() -> Self {
        Self { ordered: true, ..Self::default() }
    }

    pub fn id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    /// Adds a list item to the list.
    pub fn item(mut self, item: ListItem) -> Self {
        self.children.push(item.into_node());
        self
    }

    /// Adds already-built nodes, wrapping any that are not list items.
    pub fn nodes(mut self, nodes: impl IntoIterator<Item = RenderNode>) -> Self {
        for node in nodes {
            let node = match node {
                item @ RenderNode::ListItem { .. } => item,
                other => ListItem::new().child(other).into_node(),
            };
            self.children.push(node);
        }
        self
    }
}

impl TemplateBuilder for List {
    fn build(self: Box<Self>) -> RenderNode {
        RenderNode::List {
            meta: NodeMetadata { id: self.id, classes: vec![], style: self.style_override },
            ordered: self.ordered,
            children: self.children,
        }
    }
}

impl_styled_widget!(List);
