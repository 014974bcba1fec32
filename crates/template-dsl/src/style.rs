use vitae_style::{
    AlignItems, Border, Dimension, FlexDirection, FlexWrap, FontWeight, JustifyContent, ListStyleType,
    Margins, TextAlign, TextTransform,
};
use vitae_types::Color;

/// The core trait for adding inline styles fluently.
pub trait StyledWidget: Sized {
    fn style_override_mut(&mut self) -> &mut vitae_style::ElementStyle;

    fn font_family(mut self, family: &str) -> Self {
        self.style_override_mut().font_family = Some(family.to_string());
        self
    }

    fn font_size(mut self, size: f32) -> Self {
        self.style_override_mut().font_size = Some(size);
        self
    }

    fn font_weight(mut self, weight: FontWeight) -> Self {
        self.style_override_mut().font_weight = Some(weight);
        self
    }

    fn line_height(mut self, height: f32) -> Self {
        self.style_override_mut().line_height = Some(height);
        self
    }

    fn letter_spacing(mut self, spacing: f32) -> Self {
        self.style_override_mut().letter_spacing = Some(spacing);
        self
    }

    fn color(mut self, color: Color) -> Self {
        self.style_override_mut().color = Some(color);
        self
    }

    fn opacity(mut self, opacity: f32) -> Self {
        self.style_override_mut().opacity = Some(opacity);
        self
    }

    fn text_align(mut self, align: TextAlign) -> Self {
        self.style_override_mut().text_align = Some(align);
        self
    }

    fn text_transform(mut self, transform: TextTransform) -> Self {
        self.style_override_mut().text_transform = Some(transform);
        self
    }

    fn padding(mut self, margins: Margins) -> Self {
        self.style_override_mut().padding = Some(margins);
        self
    }

    fn margin(mut self, margins: Margins) -> Self {
        self.style_override_mut().margin = Some(margins);
        self
    }

    fn width(mut self, width: Dimension) -> Self {
        self.style_override_mut().width = Some(width);
        self
    }

    fn min_height(mut self, height: Dimension) -> Self {
        self.style_override_mut().min_height = Some(height);
        self
    }

    fn background_color(mut self, color: Color) -> Self {
        self.style_override_mut().background_color = Some(color);
        self
    }

    /// Sets the background only when a color is available.
    fn background_opt(self, color: Option<Color>) -> Self {
        match color {
            Some(color) => self.background_color(color),
            None => self,
        }
    }

    fn border(mut self, border: Border) -> Self {
        self.style_override_mut().border = Some(border);
        self
    }

    fn border_top(mut self, border: Border) -> Self {
        self.style_override_mut().border_top = Some(border);
        self
    }

    fn border_bottom(mut self, border: Border) -> Self {
        self.style_override_mut().border_bottom = Some(border);
        self
    }

    fn border_radius(mut self, radius: f32) -> Self {
        self.style_override_mut().border_radius = Some(radius);
        self
    }

    fn list_style_type(mut self, style: ListStyleType) -> Self {
        self.style_override_mut().list_style_type = Some(style);
        self
    }

    // Flex container properties
    fn flex_direction(mut self, direction: FlexDirection) -> Self {
        self.style_override_mut().flex_direction = Some(direction);
        self
    }

    fn flex_wrap(mut self, wrap: FlexWrap) -> Self {
        self.style_override_mut().flex_wrap = Some(wrap);
        self
    }

    fn justify_content(mut self, justify: JustifyContent) -> Self {
        self.style_override_mut().justify_content = Some(justify);
        self
    }

    fn align_items(mut self, align: AlignItems) -> Self {
        self.style_override_mut().align_items = Some(align);
        self
    }

    fn gap(mut self, gap: f32) -> Self {
        self.style_override_mut().gap = Some(gap);
        self
    }
}

/// A macro to easily implement the trait for any builder struct that has
/// a `style_override: ElementStyle` field.
macro_rules! impl_styled_widget {
    ($($t:ty),+) => {
        $(
            impl $crate::style::StyledWidget for $t {
                fn style_override_mut(&mut self) -> &mut vitae_style::ElementStyle {
                    &mut self.style_override
                }
            }
        )+
    };
}

pub(crate) use impl_styled_widget;
