//! Dirty-row tracking for incremental rendering.

use super::core::ScreenBuffer;

impl ScreenBuffer {
    #[inline]
    pub(crate) fn mark_dirty(&mut self, row: usize) {
        if let Some(flag) = self.dirty_rows.get_mut(row) {
            *flag = true;
        }
    }

    #[inline]
    pub(crate) fn mark_range_dirty(&mut self, start: usize, end: usize) {
        let end = end.min(self.dirty_rows.len());
        if start < end {
            self.dirty_rows[start..end].fill(true);
        }
    }

    pub(crate) fn mark_all_dirty(&mut self) {
        self.dirty_rows.fill(true);
    }

    /// Snapshot of which rows changed since the last call; clears the flags.
    pub fn take_dirty(&mut self) -> Vec<bool> {
        std::mem::replace(&mut self.dirty_rows, vec![false; self.rows])
    }

    pub fn any_dirty(&self) -> bool {
        self.dirty_rows.iter().any(|&d| d)
    }
}
