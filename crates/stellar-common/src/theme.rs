//! The color-lookup interface through which the terminal consumes a theme.
//!
//! Colors are exchanged as `#rrggbb` strings, the same form theme files use;
//! [`Theme::hex_to_rgb`] turns them into concrete values.

use crate::types::{AnsiColor, Rgb};

pub trait Theme: Send + Sync {
    /// Convert a hex color string to RGB. Unparseable input yields white.
    fn hex_to_rgb(&self, hex: &str) -> Rgb {
        Rgb::from_hex(hex).unwrap_or(Rgb::WHITE)
    }

    /// Hex value of one of the eight normal palette entries.
    fn normal_color(&self, name: AnsiColor) -> &str;

    /// Hex value of one of the eight bright palette entries.
    fn bright_color(&self, name: AnsiColor) -> &str;

    fn default_fg(&self) -> &str;

    fn default_bg(&self) -> &str;
}
