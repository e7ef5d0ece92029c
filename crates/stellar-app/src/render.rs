//! Plain-text rendering of a screen snapshot.

use stellar_terminal::screen::row_text;
use stellar_terminal::Row;

/// One line per row, trailing blank rows dropped.
pub fn render_region(rows: &[Row]) -> String {
    let mut lines: Vec<String> = rows.iter().map(row_text).collect();
    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    lines.join("\n")
}
