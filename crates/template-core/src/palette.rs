use vitae_model::Theme;
use vitae_types::{Color, hex_to_components};

/// Alpha applied to the accent color for tinted backgrounds.
pub const DEFAULT_TINT_ALPHA: f32 = 0.1;

const FALLBACK_PRIMARY: Color = Color { r: 0x21, g: 0x21, b: 0x21, a: 1.0 };

/// Theme colors resolved for one render.
///
/// Malformed colors never fail a render. `background` and `primary` fall back
/// to white and near-black; a malformed `accent` falls back to the primary
/// color for text and produces no tint at all.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub font_family: String,
    pub background: Color,
    pub primary: Color,
    pub accent: Color,
    /// Translucent accent for region backgrounds, if the accent parsed.
    pub tint: Option<Color>,
}

impl Palette {
    pub fn resolve(theme: &Theme, tint_alpha: f32) -> Self {
        let colors = &theme.colors;
        let background = parse_or(&colors.background, "background", Color::WHITE);
        let primary = parse_or(&colors.primary, "primary", FALLBACK_PRIMARY);

        let (accent, tint) = match hex_to_components(&colors.accent) {
            Some(rgb) => {
                let accent = Color::from(rgb);
                let tint = match accent.with_alpha(tint_alpha) {
                    Ok(tint) => Some(tint),
                    Err(e) => {
                        log::warn!("Accent tint disabled: {}", e);
                        None
                    }
                };
                (accent, tint)
            }
            None => {
                log::warn!(
                    "Theme color 'accent' is not a hex color ({:?}); rendering without tint",
                    colors.accent
                );
                (primary.clone(), None)
            }
        };

        Self { font_family: theme.font.family.clone(), background, primary, accent, tint }
    }
}

fn parse_or(value: &str, field: &str, fallback: Color) -> Color {
    Color::from_hex(value).unwrap_or_else(|e| {
        log::warn!("Theme color '{}' is invalid ({}); using {}", field, e, fallback);
        fallback
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn red_accent_tints_at_default_alpha() {
        let palette = Palette::resolve(&Theme::default().with_accent("#ff0000"), DEFAULT_TINT_ALPHA);
        let tint = palette.tint.expect("tint");
        assert_eq!((tint.r, tint.g, tint.b), (255, 0, 0));
        assert_eq!(tint.a, 0.1);
        assert_eq!(tint.to_string(), "rgba(255, 0, 0, 0.1)");
    }

    #[test]
    fn malformed_accent_has_no_tint() {
        let palette = Palette::resolve(&Theme::default().with_accent("zzz"), DEFAULT_TINT_ALPHA);
        assert_eq!(palette.tint, None);
        assert_eq!(palette.accent, palette.primary);
    }

    #[test]
    fn malformed_primary_and_background_fall_back() {
        let mut theme = Theme::default();
        theme.colors.primary = "nope".into();
        theme.colors.background = "".into();
        let palette = Palette::resolve(&theme, DEFAULT_TINT_ALPHA);
        assert_eq!(palette.primary, Color::rgb(0x21, 0x21, 0x21));
        assert_eq!(palette.background, Color::WHITE);
    }

    #[test]
    fn out_of_range_alpha_disables_tint() {
        let palette = Palette::resolve(&Theme::default(), 2.0);
        assert_eq!(palette.tint, None);
    }
}
