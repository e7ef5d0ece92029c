//! The screen model: a fixed grid of styled cells, a cursor, and the
//! scrollback history rows are pushed into as the grid scrolls.
//!
//! `ScreenBuffer` knows nothing about escape sequences; the engine drives it
//! with already-decoded runs and controls.

mod content;
mod core;
mod cursor;
mod dirty;
mod erase;
mod scroll;
mod types;

pub use self::core::*;
pub use content::row_text;
pub use types::*;

// ===========================================================================
// Tests
// ===========================================================================
