//! Theme-aware color resolution for SGR codes.
//!
//! [`ColorResolver`] turns palette references (named colors, 256-color
//! indices, defaults) into concrete [`Rgb`] values. The theme is read once
//! into cached tables; [`ColorResolver::invalidate`] rebuilds them.

mod palette;

pub use palette::{cube_to_rgb, grayscale_to_rgb, CUBE_START, CUBE_STEP, GRAY_START};

use std::sync::Arc;

use stellar_common::{AnsiColor, Rgb, Theme};

use crate::screen::Style;

// =============================================================================
// RESOLVER
// =============================================================================

pub struct ColorResolver {
    theme: Arc<dyn Theme>,
    default_fg: Rgb,
    default_bg: Rgb,
    /// Entries 0-7 normal, 8-15 bright, 16-231 cube, 232-255 grayscale.
    table: [Rgb; 256],
}

impl ColorResolver {
    pub fn new(theme: Arc<dyn Theme>) -> Self {
        let mut resolver = Self {
            theme,
            default_fg: Rgb::WHITE,
            default_bg: Rgb::BLACK,
            table: [Rgb::BLACK; 256],
        };
        resolver.invalidate();
        resolver
    }

    /// Re-read every theme color into the cache.
    pub fn invalidate(&mut self) {
        let theme = &self.theme;
        self.default_fg = theme.hex_to_rgb(theme.default_fg());
        self.default_bg = theme.hex_to_rgb(theme.default_bg());
        for name in AnsiColor::ALL {
            let i = name.index() as usize;
            self.table[i] = theme.hex_to_rgb(theme.normal_color(name));
            self.table[i + 8] = theme.hex_to_rgb(theme.bright_color(name));
        }
        for n in CUBE_START..GRAY_START {
            self.table[n as usize] = cube_to_rgb(n);
        }
        for n in GRAY_START..=u8::MAX {
            self.table[n as usize] = grayscale_to_rgb(n);
        }
    }

    pub fn set_theme(&mut self, theme: Arc<dyn Theme>) {
        self.theme = theme;
        self.invalidate();
    }

    pub fn theme(&self) -> &Arc<dyn Theme> {
        &self.theme
    }

    pub fn normal(&self, name: AnsiColor) -> Rgb {
        self.table[name.index() as usize]
    }

    pub fn bright(&self, name: AnsiColor) -> Rgb {
        self.table[name.index() as usize + 8]
    }

    /// Resolve a 256-color palette index.
    pub fn indexed(&self, n: u8) -> Rgb {
        self.table[n as usize]
    }

    pub fn default_fg(&self) -> Rgb {
        self.default_fg
    }

    pub fn default_bg(&self) -> Rgb {
        self.default_bg
    }

    /// Style with default colors and no attributes.
    pub fn default_style(&self) -> Style {
        Style::new(self.default_fg, self.default_bg)
    }
}

// =============================================================================
// TESTS
// =============================================================================
