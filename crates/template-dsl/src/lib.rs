//! Builders that renderers use to assemble a render tree.
//!
//! Every builder owns its children as finished [`vitae_idf::RenderNode`]s, so
//! a layout reads top-down as a chain of calls and `into_node()` at the end
//! hands back the tree. Style setters come from [`builders::StyledWidget`].
//!
//! Shared layout pieces are plain functions returning a builder:
//!
//! ```ignore
//! use vitae_template_dsl::builders::*;
//! use vitae_template_dsl::TemplateBuilder;
//!
//! fn titled(title: &str, body: impl TemplateBuilder) -> Block {
//!     Block::new()
//!         .class("section")
//!         .child(Heading::new(2, title).font_size(14.0))
//!         .child(body)
//! }
//!
//! let page = Root::new().child(titled("Skills", Paragraph::new("Rust"))).into_node();
//! ```

mod block;
mod list;
mod misc;
mod node;
mod paragraph;
mod style;
mod text;
mod widgets;


/// The builder types, meant for glob import.
pub mod builders {
    pub use super::block::{Block, Flex, Grid, ListItem, Region, Root};
    pub use super::list::List;
    pub use super::misc::Rule;
    pub use super::paragraph::{Heading, Paragraph};
    pub use super::style::StyledWidget;
    pub use super::text::{Hyperlink, Icon, LineBreak, Span, Text};
}

pub use self::node::{InlineBuilder, TemplateBuilder};
pub use self::widgets::*;
