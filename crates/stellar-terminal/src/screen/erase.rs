//! Erase-in-display, erase-in-line and scrollback clearing.
//!
//! Erased cells take the pen background; the cursor never moves.

use super::core::ScreenBuffer;
use super::types::EraseMode;

impl ScreenBuffer {
    pub fn erase_in_display(&mut self, mode: EraseMode) {
        let blank = self.erased_cell();
        let (row, col) = (self.cursor.y, self.cursor.x);
        match mode {
            EraseMode::ToEnd => {
                self.grid[row][col..].fill(blank);
                for r in &mut self.grid[row + 1..] {
                    r.fill(blank);
                }
                self.repair_wide_cells(row);
                self.mark_range_dirty(row, self.rows);
            }
            EraseMode::ToStart => {
                for r in &mut self.grid[..row] {
                    r.fill(blank);
                }
                self.grid[row][..=col].fill(blank);
                self.repair_wide_cells(row);
                self.mark_range_dirty(0, row + 1);
            }
            EraseMode::All => {
                for r in &mut self.grid {
                    r.fill(blank);
                }
                self.mark_all_dirty();
            }
        }
    }

    pub fn erase_in_line(&mut self, mode: EraseMode) {
        let blank = self.erased_cell();
        let (row, col) = (self.cursor.y, self.cursor.x);
        let line = &mut self.grid[row];
        match mode {
            EraseMode::ToEnd => line[col..].fill(blank),
            EraseMode::ToStart => line[..=col].fill(blank),
            EraseMode::All => line.fill(blank),
        }
        self.repair_wide_cells(row);
        self.mark_dirty(row);
    }

    /// Drop all scrollback history (CSI 3 J). The grid is untouched.
    pub fn clear_scrollback(&mut self) {
        self.scrollback.clear();
    }
}
