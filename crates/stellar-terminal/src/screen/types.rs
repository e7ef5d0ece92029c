//! Core types: Style, Cell, Row, EraseMode, CursorShape, CursorState.

use serde::{Deserialize, Serialize};
use stellar_common::Rgb;
use stellar_config::CursorStyle;

// ---------------------------------------------------------------------------
// Style
// ---------------------------------------------------------------------------

/// Resolved drawing attributes. Colors are already concrete RGB values;
/// the screen never consults the theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Style {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
}

impl Style {
    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        Self {
            fg,
            bg,
            bold: false,
            italic: false,
            underline: false,
        }
    }

    /// Style of a cell blanked while `self` is the pen: plain attributes
    /// from `defaults`, background kept from the pen.
    pub fn erased(self, defaults: Style) -> Style {
        Style {
            bg: self.bg,
            ..Style::new(defaults.fg, defaults.bg)
        }
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::new(Rgb::WHITE, Rgb::BLACK)
    }
}

// ---------------------------------------------------------------------------
// Cell
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub c: char,
    pub style: Style,
    /// 1 = normal, 2 = wide CJK, 0 = continuation of a wide char.
    pub width: u8,
}

impl Cell {
    pub const fn blank(style: Style) -> Self {
        Self {
            c: ' ',
            style,
            width: 1,
        }
    }

    pub fn is_continuation(&self) -> bool {
        self.width == 0
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::blank(Style::default())
    }
}

/// One line of the grid. Every row of a screen holds exactly `cols` cells.
pub type Row = Vec<Cell>;

// ---------------------------------------------------------------------------
// EraseMode
// ---------------------------------------------------------------------------

/// Region selector shared by erase-in-display and erase-in-line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EraseMode {
    /// From the cursor (inclusive) to the end.
    ToEnd,
    /// From the start to the cursor (inclusive).
    ToStart,
    All,
}

impl EraseMode {
    /// Map a CSI J / K parameter. Unknown values yield `None`.
    pub fn from_param(param: u16) -> Option<Self> {
        match param {
            0 => Some(EraseMode::ToEnd),
            1 => Some(EraseMode::ToStart),
            2 => Some(EraseMode::All),
            _ => None,
        }
    }

    pub fn as_param(self) -> u16 {
        match self {
            EraseMode::ToEnd => 0,
            EraseMode::ToStart => 1,
            EraseMode::All => 2,
        }
    }
}

// ---------------------------------------------------------------------------
// Cursor
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CursorShape {
    #[default]
    Block,
    Underscore,
    Bar,
}

impl From<CursorStyle> for CursorShape {
    fn from(style: CursorStyle) -> Self {
        match style {
            CursorStyle::Block => CursorShape::Block,
            CursorStyle::Underline => CursorShape::Underscore,
            CursorStyle::Bar => CursorShape::Bar,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BlinkPhase {
    #[default]
    On,
    Off,
}

impl BlinkPhase {
    pub fn toggled(self) -> Self {
        match self {
            BlinkPhase::On => BlinkPhase::Off,
            BlinkPhase::Off => BlinkPhase::On,
        }
    }
}

/// Cursor position and appearance. `x` is the column, `y` the row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CursorState {
    pub x: usize,
    pub y: usize,
    pub visible: bool,
    pub shape: CursorShape,
    pub blink_phase: BlinkPhase,
}

impl Default for CursorState {
    fn default() -> Self {
        Self {
            x: 0,
            y: 0,
            visible: true,
            shape: CursorShape::default(),
            blink_phase: BlinkPhase::On,
        }
    }
}
