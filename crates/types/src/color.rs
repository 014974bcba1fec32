//! Color primitives and the hex → RGB conversion the templates rely on.

use nom::branch::alt;
use nom::bytes::complete::take_while_m_n;
use nom::character::complete::char;
use nom::combinator::{all_consuming, map, map_res, opt};
use nom::sequence::preceded;
use nom::{IResult, Parser};
use serde::Serialize;
use std::fmt;
use std::hash::{Hash, Hasher};
use thiserror::Error;

fn is_one(num: &f32) -> bool {
    *num == 1.0
}

/// Errors produced when a color string cannot be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("Invalid hex color '{0}': expected #RGB or #RRGGBB")]
    InvalidHex(String),

    #[error("Alpha must be within 0.0..=1.0, got {0}")]
    AlphaOutOfRange(String),
}

/// The red, green and blue components of an opaque color.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Converts a 3- or 6-digit hex string (leading `#` optional) into its components.
///
/// Returns `None` for anything else; callers treat that as "no tint".
pub fn hex_to_components(hex: &str) -> Option<Rgb> {
    all_consuming(hex_rgb).parse(hex.trim()).ok().map(|(_, rgb)| rgb)
}

fn from_hex(input: &str) -> Result<u8, std::num::ParseIntError> {
    u8::from_str_radix(input, 16)
}

fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}

fn hex_primary(input: &str) -> IResult<&str, u8> {
    map_res(take_while_m_n(2, 2, is_hex_digit), from_hex).parse(input)
}

fn hex_short(input: &str) -> IResult<&str, u8> {
    // A single digit `f` expands to `ff`, i.e. 0xf * 17.
    map_res(take_while_m_n(1, 1, is_hex_digit), |s: &str| {
        from_hex(s).map(|v| v * 17)
    })
    .parse(input)
}

fn hex_color_6(input: &str) -> IResult<&str, Rgb> {
    map((hex_primary, hex_primary, hex_primary), |(r, g, b)| Rgb { r, g, b }).parse(input)
}

fn hex_color_3(input: &str) -> IResult<&str, Rgb> {
    map((hex_short, hex_short, hex_short), |(r, g, b)| Rgb { r, g, b }).parse(input)
}

fn hex_rgb(input: &str) -> IResult<&str, Rgb> {
    preceded(
        opt(char('#')),
        alt((all_consuming(hex_color_6), all_consuming(hex_color_3))),
    )
    .parse(input)
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(skip_serializing_if = "is_one")]
    pub a: f32,
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.r.hash(state);
        self.g.hash(state);
        self.b.hash(state);
        self.a.to_bits().hash(state);
    }
}

impl Default for Color {
    fn default() -> Self {
        Self { r: 0, g: 0, b: 0, a: 1.0 }
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Self { r: rgb.r, g: rgb.g, b: rgb.b, a: 1.0 }
    }
}

impl Color {
    pub const WHITE: Color = Color { r: 255, g: 255, b: 255, a: 1.0 };
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0, a: 1.0 };

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn gray(value: u8) -> Self {
        Self { r: value, g: value, b: value, a: 1.0 }
    }

    /// Parses `#RGB`, `#RRGGBB`, or either without the `#`.
    pub fn from_hex(s: &str) -> Result<Color, ColorParseError> {
        hex_to_components(s)
            .map(Color::from)
            .ok_or_else(|| ColorParseError::InvalidHex(s.to_string()))
    }

    /// Returns the same color with a different alpha channel.
    pub fn with_alpha(&self, alpha: f32) -> Result<Color, ColorParseError> {
        if !(0.0..=1.0).contains(&alpha) {
            return Err(ColorParseError::AlphaOutOfRange(alpha.to_string()));
        }
        Ok(Color { a: alpha, ..self.clone() })
    }

    pub fn components(&self) -> Rgb {
        Rgb { r: self.r, g: self.g, b: self.b }
    }

    pub fn is_opaque(&self) -> bool {
        is_one(&self.a)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }
}
