//! `[terminal]` section: screen geometry, cursor and I/O loop tuning.

use serde::{Deserialize, Serialize};

/// Initial cursor shape; escape sequences can change it later.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CursorStyle {
    #[default]
    Block,
    Underline,
    Bar,
}

/// Engine settings read once at spawn time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TerminalConfig {
    /// Initial column count (valid range: 2-1000).
    pub cols: u16,
    /// Initial row count (valid range: 1-500).
    pub rows: u16,
    /// Rows kept after they scroll off the top (valid range: 0-100_000).
    pub scrollback_lines: u32,
    pub cursor_style: CursorStyle,
    pub cursor_blink: bool,
    /// Half-period of the blink, in milliseconds (valid range: 100-2000).
    pub cursor_blink_interval_ms: u32,
    /// A line feed also returns the carriage to column 0.
    pub newline_mode: bool,
    /// Longest escape sequence the decoder buffers before giving up on it
    /// (valid range: 16-65_536).
    pub max_escape_len: u32,
    /// Upper bound on one PTY poll, in milliseconds (valid range: 1-1000).
    pub poll_interval_ms: u32,
    /// How many times a dead shell is respawned before the session gives up.
    pub max_respawns: u32,
    /// Backspace key sends DEL (0x7f) instead of BS (0x08).
    pub backspace_sends_delete: bool,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            cols: 80,
            rows: 24,
            scrollback_lines: 1000,
            cursor_style: CursorStyle::Block,
            cursor_blink: true,
            cursor_blink_interval_ms: 500,
            newline_mode: true,
            max_escape_len: 4096,
            poll_interval_ms: 10,
            max_respawns: 3,
            backspace_sends_delete: true,
        }
    }
}
