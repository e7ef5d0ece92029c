//! Character output and text extraction.

use unicode_width::UnicodeWidthChar;

use super::core::ScreenBuffer;
use super::types::{Cell, Row, Style};

impl ScreenBuffer {
    /// Write a character at the cursor with `style`, then advance the
    /// cursor. Handles wide characters and delayed auto-wrap.
    pub fn put_char(&mut self, c: char, style: Style) {
        // Zero-width and control characters still occupy a cell.
        let display_width: u8 = match c.width() {
            Some(2) if self.cols >= 2 => 2,
            _ => 1,
        };

        if self.wrap_pending {
            self.wrap_pending = false;
            self.cursor.x = 0;
            self.new_line();
        }

        // A wide character never straddles the right margin.
        if display_width == 2 && self.cursor.x + 1 >= self.cols {
            let blank = Cell::blank(style);
            self.grid[self.cursor.y][self.cursor.x] = blank;
            self.mark_dirty(self.cursor.y);
            self.cursor.x = 0;
            self.new_line();
        }

        let (row, col) = (self.cursor.y, self.cursor.x);
        self.overwrite_wide_remnant(row, col);
        self.grid[row][col] = Cell {
            c,
            style,
            width: display_width,
        };
        if display_width == 2 {
            if col + 2 < self.cols && self.grid[row][col + 2].is_continuation() {
                self.grid[row][col + 2] = Cell::blank(style);
            }
            self.grid[row][col + 1] = Cell {
                c: ' ',
                style,
                width: 0,
            };
        }
        self.mark_dirty(row);

        let next = col + display_width as usize;
        if next >= self.cols {
            self.cursor.x = self.cols - 1;
            self.wrap_pending = true;
        } else {
            self.cursor.x = next;
        }
        self.reset_blink();
    }

    /// Writing over either half of a wide character blanks the other half.
    fn overwrite_wide_remnant(&mut self, row: usize, col: usize) {
        let cell = self.grid[row][col];
        if cell.is_continuation() && col > 0 {
            let lead = self.grid[row][col - 1].style;
            self.grid[row][col - 1] = Cell::blank(lead);
        } else if cell.width == 2 && col + 1 < self.cols {
            self.grid[row][col + 1] = Cell::blank(cell.style);
        }
    }

    /// Blank any wide-character half whose partner was overwritten.
    pub(crate) fn repair_wide_cells(&mut self, row: usize) {
        let line = &mut self.grid[row];
        for col in 0..line.len() {
            let orphan = if line[col].width == 2 {
                !line.get(col + 1).is_some_and(|next| next.is_continuation())
            } else {
                line[col].is_continuation() && (col == 0 || line[col - 1].width != 2)
            };
            if orphan {
                line[col] = Cell::blank(line[col].style);
            }
        }
    }

    // -- text extraction ----------------------------------------------------

    /// Text of one grid row with trailing blanks trimmed.
    pub fn row_to_string(&self, row: usize) -> String {
        self.grid.get(row).map(row_text).unwrap_or_default()
    }

    /// All visible content as a string (rows separated by newlines).
    pub fn content_to_string(&self) -> String {
        (0..self.rows)
            .map(|r| self.row_to_string(r))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Text of a row, skipping wide-character continuation cells.
pub fn row_text(row: &Row) -> String {
    row.iter()
        .filter(|cell| !cell.is_continuation())
        .map(|cell| cell.c)
        .collect::<String>()
        .trim_end()
        .to_string()
}
