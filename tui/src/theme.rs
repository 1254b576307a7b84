//! Color theme and glyphs for the Seatmap TUI.
//!
//! Uses Kanagawa Wave palette by default with an optional high-contrast
//! override. Table fill colors come from the appearance data file and are
//! parsed here at the rendering boundary.

use ratatui::style::{Color, Modifier, Style};

use seatmap_types::UiOptions;

/// Kanagawa Wave color palette constants.
mod colors {
    use super::Color;

    pub const BG_DARK: Color = Color::Rgb(22, 22, 29); // sumiInk0
    pub const BG_HIGHLIGHT: Color = Color::Rgb(42, 42, 55); // sumiInk4
    pub const BG_POPUP: Color = Color::Rgb(54, 54, 70); // sumiInk5
    pub const BG_BORDER: Color = Color::Rgb(84, 84, 109); // sumiInk6

    pub const TEXT_PRIMARY: Color = Color::Rgb(220, 215, 186); // fujiWhite
    pub const TEXT_SECONDARY: Color = Color::Rgb(200, 192, 147); // oldWhite
    pub const TEXT_MUTED: Color = Color::Rgb(114, 113, 105); // fujiGray

    pub const ACCENT: Color = Color::Rgb(127, 180, 202); // springBlue
    pub const SUCCESS: Color = Color::Rgb(152, 187, 108); // springGreen
    pub const WARNING: Color = Color::Rgb(230, 195, 132); // carpYellow
    pub const ERROR: Color = Color::Rgb(255, 93, 98); // peachRed
}

/// Resolved theme palette used by the UI.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_dark: Color,
    pub bg_highlight: Color,
    pub bg_popup: Color,
    pub bg_border: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub accent: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
}

impl Palette {
    #[must_use]
    pub fn standard() -> Self {
        Self {
            bg_dark: colors::BG_DARK,
            bg_highlight: colors::BG_HIGHLIGHT,
            bg_popup: colors::BG_POPUP,
            bg_border: colors::BG_BORDER,
            text_primary: colors::TEXT_PRIMARY,
            text_secondary: colors::TEXT_SECONDARY,
            text_muted: colors::TEXT_MUTED,
            accent: colors::ACCENT,
            success: colors::SUCCESS,
            warning: colors::WARNING,
            error: colors::ERROR,
        }
    }

    #[must_use]
    pub fn high_contrast() -> Self {
        Self {
            bg_dark: Color::Black,
            bg_highlight: Color::DarkGray,
            bg_popup: Color::Black,
            bg_border: Color::Gray,
            text_primary: Color::White,
            text_secondary: Color::Gray,
            text_muted: Color::DarkGray,
            accent: Color::Cyan,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
        }
    }
}

/// Palette for the active UI options.
#[must_use]
pub fn palette(options: UiOptions) -> Palette {
    if options.high_contrast {
        Palette::high_contrast()
    } else {
        Palette::standard()
    }
}

/// Icon set. The ASCII variant keeps the UI usable on terminals without
/// good glyph coverage.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub chair: &'static str,
    pub pointer: &'static str,
}

#[must_use]
pub fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        Glyphs {
            chair: "o",
            pointer: ">",
        }
    } else {
        Glyphs {
            chair: "♟",
            pointer: "▸",
        }
    }
}

/// Shared text styles.
pub mod styles {
    use super::{Modifier, Palette, Style};

    #[must_use]
    pub fn table_label(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn selected_label(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn help(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn status(palette: &Palette) -> Style {
        Style::default().fg(palette.success)
    }

    /// Rejection messages ("no places left") read as errors.
    #[must_use]
    pub fn feedback(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.error)
            .add_modifier(Modifier::BOLD)
    }
}

/// Parse a data-file color: `#rrggbb` hex or a small set of CSS names.
/// Unknown strings fall back to `None` and the caller picks a palette
/// color.
#[must_use]
pub fn parse_color(value: &str) -> Option<Color> {
    let value = value.trim();
    if let Some(hex) = value.strip_prefix('#') {
        // Byte-range slicing below requires an all-ASCII payload.
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        return Some(Color::Rgb(r, g, b));
    }
    match value.to_ascii_lowercase().as_str() {
        "black" => Some(Color::Black),
        "white" => Some(Color::White),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "blue" => Some(Color::Blue),
        "yellow" => Some(Color::Yellow),
        "cyan" => Some(Color::Cyan),
        "magenta" => Some(Color::Magenta),
        "gray" | "grey" => Some(Color::Gray),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hex_color() {
        assert_eq!(parse_color("#7e9cd8"), Some(Color::Rgb(0x7e, 0x9c, 0xd8)));
        assert_eq!(parse_color(" #FFFFFF "), Some(Color::Rgb(255, 255, 255)));
    }

    #[test]
    fn parse_named_color() {
        assert_eq!(parse_color("Blue"), Some(Color::Blue));
        assert_eq!(parse_color("grey"), Some(Color::Gray));
    }

    #[test]
    fn reject_malformed_color() {
        assert_eq!(parse_color("#fff"), None);
        assert_eq!(parse_color("#zzzzzz"), None);
        assert_eq!(parse_color("chartreuse-ish"), None);
    }

    #[test]
    fn reject_multibyte_color_without_panicking() {
        // Six bytes but not six ASCII chars; must not slice mid-character.
        assert_eq!(parse_color("#aébcd"), None);
        assert_eq!(parse_color("#ééé"), None);
    }

    #[test]
    fn feedback_style_uses_the_error_color() {
        for palette in [Palette::standard(), Palette::high_contrast()] {
            assert_eq!(styles::feedback(&palette).fg, Some(palette.error));
        }
    }

    #[test]
    fn ascii_glyphs_are_ascii() {
        let g = glyphs(UiOptions {
            ascii_only: true,
            high_contrast: false,
        });
        assert!(g.chair.is_ascii());
        assert!(g.pointer.is_ascii());
    }
}
