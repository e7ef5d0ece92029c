//! Palette tables and the built-in Tokyo Night values.

use serde::{Deserialize, Serialize};
use stellar_common::AnsiColor;

/// Default foreground and background.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PrimaryColors {
    pub foreground: String,
    pub background: String,
}

impl Default for PrimaryColors {
    fn default() -> Self {
        Self {
            foreground: "#c0caf5".into(),
            background: "#1a1b26".into(),
        }
    }
}

/// Eight named colors. Entries missing from a theme file fall back to the
/// built-in normal palette.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PaletteColors {
    pub black: String,
    pub red: String,
    pub green: String,
    pub yellow: String,
    pub blue: String,
    pub magenta: String,
    pub cyan: String,
    pub white: String,
}

impl Default for PaletteColors {
    fn default() -> Self {
        Self {
            black: "#15161e".into(),
            red: "#f7768e".into(),
            green: "#9ece6a".into(),
            yellow: "#e0af68".into(),
            blue: "#7aa2f7".into(),
            magenta: "#bb9af7".into(),
            cyan: "#7dcfff".into(),
            white: "#a9b1d6".into(),
        }
    }
}

impl PaletteColors {
    pub fn tokyo_night_bright() -> Self {
        Self {
            black: "#414868".into(),
            white: "#c0caf5".into(),
            ..Self::default()
        }
    }

    pub fn get(&self, name: AnsiColor) -> &str {
        match name {
            AnsiColor::Black => &self.black,
            AnsiColor::Red => &self.red,
            AnsiColor::Green => &self.green,
            AnsiColor::Yellow => &self.yellow,
            AnsiColor::Blue => &self.blue,
            AnsiColor::Magenta => &self.magenta,
            AnsiColor::Cyan => &self.cyan,
            AnsiColor::White => &self.white,
        }
    }
}
