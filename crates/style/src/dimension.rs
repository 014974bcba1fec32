//! Lengths, box spacing and borders.
use serde::Serialize;
use std::hash::{Hash, Hasher};
use vitae_types::Color;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub enum Dimension {
    Pt(f32),
    Percent(f32),
    #[default]
    Auto,
}

impl Dimension {
    /// Width of `span` columns out of a `total`-column grid.
    pub fn columns(span: u8, total: u8) -> Self {
        if total == 0 {
            return Dimension::Auto;
        }
        Dimension::Percent(f32::from(span) * 100.0 / f32::from(total))
    }
}

impl Hash for Dimension {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Dimension::Pt(v) => {
                0u8.hash(state);
                v.to_bits().hash(state);
            }
            Dimension::Percent(v) => {
                1u8.hash(state);
                v.to_bits().hash(state);
            }
            Dimension::Auto => 2u8.hash(state),
        }
    }
}

impl Eq for Dimension {}

/// Spacing around or inside a box, in points.
#[derive(Serialize, Debug, Default, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Margins {
    pub fn all(value: f32) -> Self {
        Self { top: value, right: value, bottom: value, left: value }
    }

    /// Horizontal spacing only.
    pub fn x(value: f32) -> Self {
        Self { left: value, right: value, ..Self::default() }
    }

    /// Vertical spacing only.
    pub fn y(value: f32) -> Self {
        Self { top: value, bottom: value, ..Self::default() }
    }

    pub fn xy(x: f32, y: f32) -> Self {
        Self { top: y, right: x, bottom: y, left: x }
    }

    pub fn top(value: f32) -> Self {
        Self { top: value, ..Self::default() }
    }

    pub fn bottom(value: f32) -> Self {
        Self { bottom: value, ..Self::default() }
    }
}

/// A solid border line.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Border {
    pub width: f32,
    pub color: Color,
}

impl Border {
    pub fn solid(width: f32, color: Color) -> Self {
        Self { width, color }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_column_widths() {
        assert_eq!(Dimension::columns(4, 12), Dimension::Percent(100.0 / 3.0));
        assert_eq!(Dimension::columns(1, 0), Dimension::Auto);
    }

    #[test]
    fn axis_helpers_leave_other_sides_zero() {
        let m = Margins::x(6.0);
        assert_eq!((m.top, m.right, m.bottom, m.left), (0.0, 6.0, 0.0, 6.0));
        let m = Margins::xy(2.0, 4.0);
        assert_eq!((m.top, m.left), (4.0, 2.0));
    }
}
