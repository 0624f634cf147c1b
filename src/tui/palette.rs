// Render palette derived from the resolved theme.
//
// The theme layer only ever hands the TUI a concrete light/dark value; this
// module maps it to the colors every widget draws with.

use ratatui::style::Color;

use crate::theme::ResolvedTheme;

/// Concrete colors for one resolved theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Panel background.
    pub bg: Color,
    /// Primary text.
    pub fg: Color,
    /// Highlights: active navigation entry, focused field, metric values.
    pub accent: Color,
    /// De-emphasized text: hints, timestamps, inactive entries.
    pub dim: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
}

impl Palette {
    pub fn for_theme(theme: ResolvedTheme) -> Self {
        match theme {
            ResolvedTheme::Dark => Palette {
                bg: Color::Black,
                fg: Color::White,
                accent: Color::Cyan,
                dim: Color::DarkGray,
                success: Color::Green,
                warning: Color::Yellow,
                error: Color::Red,
            },
            ResolvedTheme::Light => Palette {
                bg: Color::White,
                fg: Color::Black,
                accent: Color::Blue,
                dim: Color::Gray,
                success: Color::Green,
                warning: Color::Magenta,
                error: Color::Red,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palettes_differ_between_themes() {
        let dark = Palette::for_theme(ResolvedTheme::Dark);
        let light = Palette::for_theme(ResolvedTheme::Light);
        assert_ne!(dark.bg, light.bg);
        assert_ne!(dark.fg, light.fg);
        assert_ne!(dark.accent, light.accent);
    }

    #[test]
    fn text_contrasts_with_background() {
        for theme in [ResolvedTheme::Dark, ResolvedTheme::Light] {
            let palette = Palette::for_theme(theme);
            assert_ne!(palette.fg, palette.bg);
        }
    }
}
