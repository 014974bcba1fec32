use crate::builders::*;
use crate::style::StyledWidget;
use vitae_style::{FlexDirection, FlexWrap, FontWeight, Margins};
use vitae_types::Color;

// Semantic text elements

pub fn h1(text: &str) -> Heading {
    Heading::new(1, text).font_size(28.0).font_weight(FontWeight::Bold)
}

pub fn h2(text: &str) -> Heading {
    Heading::new(2, text).font_size(14.0).font_weight(FontWeight::Bold)
}

pub fn p(text: &str) -> Paragraph {
    Paragraph::new(text).font_size(10.0)
}

pub fn subtitle(text: &str) -> Paragraph {
    Paragraph::new(text).font_size(10.0).opacity(0.75)
}

pub fn caption(text: &str) -> Paragraph {
    Paragraph::new(text).font_size(8.0)
}

/// A rounded label with a solid background, used for skills.
pub fn pill(text: &str, background: Color, foreground: Color) -> Block {
    Block::new()
        .padding(Margins::xy(8.0, 2.0))
        .border_radius(4.0)
        .background_color(background)
        .child(Paragraph::new(text).font_size(9.0).font_weight(FontWeight::Medium).color(foreground))
}

/// A wrapping row of children.
pub fn wrap_row(gap: f32) -> Flex {
    Flex::new().flex_direction(FlexDirection::Row).flex_wrap(FlexWrap::Wrap).gap(gap)
}

pub fn column(gap: f32) -> Flex {
    Flex::new().flex_direction(FlexDirection::Column).gap(gap)
}
