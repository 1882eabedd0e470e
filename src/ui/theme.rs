//! Color palettes for the foodsense UI.
//!
//! One palette per [`Theme`]; the verdict tones map onto the palette's
//! semantic colours.

use ratatui::style::{Color, Style};

use crate::presenter::Tone;
use crate::startup::Theme;

// ============================================================================
// Verdict Colors (shared by both palettes)
// ============================================================================

/// Safe verdicts and safe ingredients - green #22C55E
pub const COLOR_SAFE: Color = Color::Rgb(34, 197, 94);

/// Caution - amber #EAB308
pub const COLOR_CAUTION: Color = Color::Rgb(234, 179, 8);

/// Avoid verdicts and risky ingredients - red #EF4444
pub const COLOR_DANGER: Color = Color::Rgb(239, 68, 68);

/// Unknown verdicts - gray
pub const COLOR_NEUTRAL: Color = Color::Gray;

/// Semantic colours for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub text_dim: Color,
    pub accent: Color,
    pub border: Color,
    pub banner_bg: Color,
    pub banner_fg: Color,
}

pub const DARK: Palette = Palette {
    background: Color::Rgb(10, 10, 15),
    text: Color::White,
    text_dim: Color::Gray,
    accent: Color::Rgb(16, 185, 129),
    border: Color::DarkGray,
    banner_bg: Color::Rgb(127, 29, 29),
    banner_fg: Color::White,
};

pub const LIGHT: Palette = Palette {
    background: Color::Rgb(248, 250, 252),
    text: Color::Rgb(15, 23, 42),
    text_dim: Color::Rgb(71, 85, 105),
    accent: Color::Rgb(5, 150, 105),
    border: Color::Rgb(203, 213, 225),
    banner_bg: Color::Rgb(254, 226, 226),
    banner_fg: Color::Rgb(153, 27, 27),
};

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => DARK,
            Theme::Light => LIGHT,
        }
    }

    pub fn tone(&self, tone: Tone) -> Color {
        match tone {
            Tone::Positive => COLOR_SAFE,
            Tone::Warning => COLOR_CAUTION,
            Tone::Negative => COLOR_DANGER,
            Tone::Neutral => COLOR_NEUTRAL,
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    pub fn dim(&self) -> Style {
        Style::default().fg(self.text_dim)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_per_theme() {
        assert_eq!(Palette::for_theme(Theme::Dark), DARK);
        assert_eq!(Palette::for_theme(Theme::Light), LIGHT);
        assert_ne!(DARK.background, LIGHT.background);
    }

    #[test]
    fn test_tone_colors() {
        assert_eq!(DARK.tone(Tone::Positive), COLOR_SAFE);
        assert_eq!(LIGHT.tone(Tone::Negative), COLOR_DANGER);
        assert_eq!(DARK.tone(Tone::Neutral), COLOR_NEUTRAL);
    }
}
