use crate::node::TemplateBuilder;
use crate::style::impl_styled_widget;
use vitae_idf::{NodeMetadata, RenderNode};
use vitae_style::ElementStyle;

macro_rules! define_container_builder {
    ($name:ident, $node_variant:ident) => {
        #[derive(Default, Clone, Debug)]
        pub struct $name {
            id: Option<String>,
            classes: Vec<String>,
            style_override: ElementStyle,
            children: Vec<RenderNode>,
        }

        impl $name {
            pub fn new() -> Self {
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

            pub fn child(mut self, child: impl TemplateBuilder) -> Self {
                self.children.push(child.into_node());
                self
            }

            /// Adds the child if present; absent children leave no trace.
            pub fn maybe_child(self, child: Option<impl TemplateBuilder>) -> Self {
                match child {
                    Some(child) => self.child(child),
                    None => self,
                }
            }

            pub fn children<B: TemplateBuilder>(mut self, children: impl IntoIterator<Item = B>) -> Self {
                self.children.extend(children.into_iter().map(TemplateBuilder::into_node));
                self
            }
        }

        impl TemplateBuilder for $name {
            fn build(self: Box<Self>) -> RenderNode {
                RenderNode::$node_variant {
                    meta: NodeMetadata {
                        id: self.id,
                        classes: self.classes,
                        style: self.style_override,
                    },
                    children: self.children,
                }
            }
        }
    };
}

define_container_builder!(Root, Root);
define_container_builder!(Region, Region);
define_container_builder!(Block, Block);
define_container_builder!(Flex, Flex);
define_container_builder!(ListItem, ListItem);

impl_styled_widget!(Root, Region, Block, Flex, ListItem);

/// Builder for an evenly divided grid.
#[derive(Clone, Debug)]
pub struct Grid {
    id: Option<String>,
    classes: Vec<String>,
    style_override: ElementStyle,
    columns: u8,
    children: Vec<RenderNode>,
}

impl Grid {
    pub fn new(columns: u8) -> Self {
        Self {
            id: None,
            classes: vec![],
            style_override: Default::default(),
            columns: columns.max(1),
            children: vec![],
        }
    }

    pub fn id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn class(mut self, name: &str) -> Self {
        self.classes.push(name.to_string());
        self
    }

    pub fn child(mut self, child: impl TemplateBuilder) -> Self {
        self.children.push(child.into_node());
        self
    }

    pub fn maybe_child(self, child: Option<impl TemplateBuilder>) -> Self {
        match child {
            Some(child) => self.child(child),
            None => self,
        }
    }

    pub fn children<B: TemplateBuilder>(mut self, children: impl IntoIterator<Item = B>) -> Self {
        self.children.extend(children.into_iter().map(TemplateBuilder::into_node));
        self
    }
}

impl TemplateBuilder for Grid {
    fn build(self: Box<Self>) -> RenderNode {
        RenderNode::Grid {
            meta: NodeMetadata { id: self.id, classes: self.classes, style: self.style_override },
            columns: self.columns,
            children: self.children,
        }
    }
}

impl_styled_widget!(Grid);
