//! Color theme configuration.
//!
//! The palette layout mirrors the usual terminal theme files: a `primary`
//! table with the default foreground/background, plus `normal` and `bright`
//! tables with one `#rrggbb` entry per ANSI color name.

mod palette;

pub use palette::{PaletteColors, PrimaryColors};

use serde::{Deserialize, Serialize};
use stellar_common::{AnsiColor, Theme};

/// A complete terminal color theme. Implements [`Theme`] directly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ThemeConfig {
    pub name: String,
    pub primary: PrimaryColors,
    pub normal: PaletteColors,
    pub bright: PaletteColors,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: "tokyo-night".into(),
            primary: PrimaryColors::default(),
            normal: PaletteColors::default(),
            bright: PaletteColors::tokyo_night_bright(),
        }
    }
}

impl ThemeConfig {
    /// Every `(key, value)` pair, for validation and diagnostics.
    pub fn entries(&self) -> Vec<(String, &str)> {
        let mut out = vec![
            ("primary.foreground".to_string(), self.primary.foreground.as_str()),
            ("primary.background".to_string(), self.primary.background.as_str()),
        ];
        for name in AnsiColor::ALL {
            out.push((format!("normal.{name}"), self.normal.get(name)));
            out.push((format!("bright.{name}"), self.bright.get(name)));
        }
        out
    }
}

impl Theme for ThemeConfig {
    fn normal_color(&self, name: AnsiColor) -> &str {
        self.normal.get(name)
    }

    fn bright_color(&self, name: AnsiColor) -> &str {
        self.bright.get(name)
    }

    fn default_fg(&self) -> &str {
        &self.primary.foreground
    }

    fn default_bg(&self) -> &str {
        &self.primary.background
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use stellar_common::Rgb;

    #[test]
    fn default_theme_is_tokyo_night() {
        let theme = ThemeConfig::default();
        assert_eq!(theme.name, "tokyo-night");
        assert_eq!(theme.default_fg(), "#c0caf5");
        assert_eq!(theme.default_bg(), "#1a1b26");
        assert_eq!(theme.normal_color(AnsiColor::Red), "#f7768e");
        assert_eq!(theme.bright_color(AnsiColor::Black), "#414868");
    }

    #[test]
    fn theme_resolves_through_hex_to_rgb() {
        let theme = ThemeConfig::default();
        assert_eq!(
            theme.hex_to_rgb(theme.normal_color(AnsiColor::Blue)),
            Rgb::new(0x7a, 0xa2, 0xf7)
        );
    }

    #[test]
    fn partial_theme_toml_keeps_defaults() {
        let toml_str = r##"
name = "custom"

[primary]
background = "#000000"

[normal]
red = "#ff0000"
"##;
        let theme: ThemeConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(theme.name, "custom");
        assert_eq!(theme.default_bg(), "#000000");
        assert_eq!(theme.default_fg(), "#c0caf5");
        assert_eq!(theme.normal_color(AnsiColor::Red), "#ff0000");
        assert_eq!(theme.normal_color(AnsiColor::Green), "#9ece6a");
        assert_eq!(theme.bright_color(AnsiColor::Black), "#414868");
    }

    #[test]
    fn entries_cover_every_color() {
        let theme = ThemeConfig::default();
        // 2 primary + 8 normal + 8 bright
        assert_eq!(theme.entries().len(), 18);
    }
}
