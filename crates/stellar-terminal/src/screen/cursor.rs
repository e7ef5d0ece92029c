//! Cursor movement, save/restore, blink, and control characters.

use super::core::ScreenBuffer;
use super::types::{BlinkPhase, CursorShape};

impl ScreenBuffer {
    /// Move the cursor to column `x`, row `y`, clamped to the grid.
    pub fn set_cursor(&mut self, x: usize, y: usize) {
        let old_row = self.cursor.y;
        self.cursor.x = x.min(self.cols - 1);
        self.cursor.y = y.min(self.rows - 1);
        self.after_move(old_row);
    }

    /// Move the cursor relative to its position, clamped to the grid.
    pub fn move_cursor_relative(&mut self, dx: i32, dy: i32) {
        let old_row = self.cursor.y;
        self.cursor.x = offset_clamped(self.cursor.x, dx, self.cols);
        self.cursor.y = offset_clamped(self.cursor.y, dy, self.rows);
        self.after_move(old_row);
    }

    fn after_move(&mut self, old_row: usize) {
        self.wrap_pending = false;
        self.reset_blink();
        self.mark_dirty(old_row);
        self.mark_dirty(self.cursor.y);
    }

    // -- cursor save / restore (DECSC / DECRC) ------------------------------

    pub fn save_cursor(&mut self) {
        self.saved_cursor = Some(self.cursor);
    }

    /// Restore the saved position and appearance, clamped to the current
    /// dimensions. Without a saved cursor this homes the cursor.
    pub fn restore_cursor(&mut self) {
        let old_row = self.cursor.y;
        match self.saved_cursor {
            Some(saved) => {
                self.cursor = saved;
                self.cursor.x = self.cursor.x.min(self.cols - 1);
                self.cursor.y = self.cursor.y.min(self.rows - 1);
            }
            None => {
                self.cursor.x = 0;
                self.cursor.y = 0;
            }
        }
        self.after_move(old_row);
    }

    // -- appearance ---------------------------------------------------------

    pub fn set_cursor_visible(&mut self, visible: bool) {
        self.cursor.visible = visible;
        self.mark_dirty(self.cursor.y);
    }

    pub fn set_cursor_shape(&mut self, shape: CursorShape) {
        self.cursor.shape = shape;
        self.mark_dirty(self.cursor.y);
    }

    pub fn toggle_blink(&mut self) {
        self.cursor.blink_phase = self.cursor.blink_phase.toggled();
        self.mark_dirty(self.cursor.y);
    }

    /// Any cursor movement makes the cursor visible again.
    pub fn reset_blink(&mut self) {
        if self.cursor.blink_phase != BlinkPhase::On {
            self.cursor.blink_phase = BlinkPhase::On;
            self.mark_dirty(self.cursor.y);
        }
    }

    // -- control characters -------------------------------------------------

    /// Line feed: move down one row, scrolling the grid when already on the
    /// bottom row. The column is left alone.
    pub fn new_line(&mut self) {
        let old_row = self.cursor.y;
        if self.cursor.y + 1 >= self.rows {
            self.scroll_up(1);
        } else {
            self.cursor.y += 1;
        }
        self.after_move(old_row);
    }

    /// Reverse index: move up one row, scrolling down when on the top row.
    pub fn reverse_index(&mut self) {
        let old_row = self.cursor.y;
        if self.cursor.y == 0 {
            self.scroll_down(1);
        } else {
            self.cursor.y -= 1;
        }
        self.after_move(old_row);
    }

    pub fn carriage_return(&mut self) {
        let row = self.cursor.y;
        self.cursor.x = 0;
        self.after_move(row);
    }

    /// Move left one column and blank the cell there with the pen
    /// background. Does nothing at column 0. With a wrap pending the cursor
    /// is logically past the margin, so only the pending wrap is dropped.
    pub fn backspace(&mut self) {
        if self.wrap_pending {
            self.wrap_pending = false;
        } else if self.cursor.x == 0 {
            return;
        } else {
            self.cursor.x -= 1;
        }
        let row = self.cursor.y;
        self.grid[row][self.cursor.x] = self.erased_cell();
        self.after_move(row);
    }

    /// Advance to the next tab stop, or the last column if there is none.
    pub fn tab(&mut self) {
        let row = self.cursor.y;
        let next = (self.cursor.x + 1..self.cols)
            .find(|&col| self.tab_stops.get(col).copied().unwrap_or(false))
            .unwrap_or(self.cols - 1);
        self.cursor.x = next;
        self.after_move(row);
    }
}

fn offset_clamped(pos: usize, delta: i32, len: usize) -> usize {
    let max = len.saturating_sub(1) as i64;
    (pos as i64 + delta as i64).clamp(0, max) as usize
}
