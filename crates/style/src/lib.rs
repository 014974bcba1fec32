//! Style attributes attached to render tree nodes.
//!
//! The vocabulary is deliberately close to CSS so a document host can map it
//! onto its own presentation primitives without per-template special cases.

pub mod dimension;
pub mod flex;
pub mod font;
pub mod stylesheet;
pub mod text;

pub use dimension::{Border, Dimension, Margins};
pub use flex::{AlignItems, FlexDirection, FlexWrap, JustifyContent};
pub use font::FontWeight;
pub use stylesheet::ElementStyle;
pub use text::{ListStyleType, TextAlign, TextTransform};
