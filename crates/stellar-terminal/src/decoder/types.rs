//! Decoder output: styled runs, control events, and diagnostics.

use crate::screen::{CursorShape, EraseMode, Style};

// ---------------------------------------------------------------------------
// Output items
// ---------------------------------------------------------------------------

/// Printable text sharing one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledRun {
    pub text: String,
    pub style: Style,
}

/// A non-printable instruction for the screen or the engine.
///
/// Cursor coordinates are 0-based; counts are at least 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlEvent {
    Bell,
    Backspace,
    Tab,
    LineFeed,
    CarriageReturn,
    CursorUp(u16),
    CursorDown(u16),
    CursorForward(u16),
    CursorBack(u16),
    /// Down `n` rows, then column 0.
    CursorNextLine(u16),
    /// Up `n` rows, then column 0.
    CursorPrevLine(u16),
    CursorColumn(u16),
    CursorRow(u16),
    CursorPosition { row: u16, col: u16 },
    EraseInDisplay(EraseMode),
    EraseInLine(EraseMode),
    ClearScrollback,
    ScrollUp(u16),
    ScrollDown(u16),
    SetStyle(Style),
    SaveCursor,
    RestoreCursor,
    Index,
    ReverseIndex,
    NextLine,
    FullReset,
    SetCursorVisible(bool),
    SetCursorShape { shape: CursorShape, blinking: bool },
    SetNewlineMode(bool),
    SetTitle(String),
    SetWorkingDirectory(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded {
    Run(StyledRun),
    Control(ControlEvent),
}

/// Merge adjacent runs with equal style.
///
/// A run may be split where one `feed` ends and the next begins; the
/// coalesced sequence is the same however the input was chunked.
pub fn coalesce(items: impl IntoIterator<Item = Decoded>) -> Vec<Decoded> {
    let mut out: Vec<Decoded> = Vec::new();
    for item in items {
        if let (Some(Decoded::Run(prev)), Decoded::Run(run)) = (out.last_mut(), &item) {
            if prev.style == run.style {
                prev.text.push_str(&run.text);
                continue;
            }
        }
        out.push(item);
    }
    out
}

// ---------------------------------------------------------------------------
// Diagnostics
// ---------------------------------------------------------------------------

/// Why a sequence produced no output. Issues are logged and counted, never
/// returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeIssue {
    #[error("unsupported sequence: {0}")]
    Unsupported(String),

    #[error("malformed sequence: {0}")]
    Malformed(String),

    #[error("escape sequence exceeded {limit} characters")]
    Overflow { limit: usize },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecoderStats {
    /// Sequences dropped as unsupported or malformed.
    pub discarded: u64,
    /// Sequences dropped for exceeding the length limit.
    pub overflows: u64,
}
