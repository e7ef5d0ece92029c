//! Scrolling, resize, and the scrollback view.

use super::core::ScreenBuffer;
use super::types::{Cell, Row};

impl ScreenBuffer {
    /// Scroll the grid up by `count` lines. Rows leaving the top are
    /// appended to the scrollback; blank rows enter at the bottom.
    pub fn scroll_up(&mut self, count: usize) {
        let count = count.min(self.rows);
        if count == 0 {
            return;
        }
        let scrolled: Vec<Row> = self.grid.drain(..count).collect();
        self.scrollback.push_many(scrolled);
        let blank = self.default_style;
        let cols = self.cols;
        self.grid
            .extend((0..count).map(|_| Self::blank_row(cols, blank)));
        self.mark_all_dirty();
    }

    /// Scroll the grid down by `count` lines. Rows leaving the bottom are
    /// discarded; blank rows enter at the top.
    pub fn scroll_down(&mut self, count: usize) {
        let count = count.min(self.rows);
        if count == 0 {
            return;
        }
        self.grid.truncate(self.rows - count);
        let blank = self.default_style;
        let cols = self.cols;
        self.grid
            .splice(0..0, (0..count).map(|_| Self::blank_row(cols, blank)));
        self.mark_all_dirty();
    }

    // -- resize -------------------------------------------------------------

    /// Resize the grid, anchored at the top-left. Content that no longer
    /// fits is dropped, new space is blank; nothing is rewrapped and the
    /// scrollback is left as it is.
    ///
    /// Cells inside the overlap keep their glyph and style. A wide
    /// character whose continuation falls off the right edge stays in place
    /// as a narrow cell.
    pub fn resize(&mut self, new_cols: usize, new_rows: usize) {
        let new_cols = new_cols.max(1);
        let new_rows = new_rows.max(1);
        let blank = Cell::blank(self.default_style);

        self.grid.truncate(new_rows);
        for row in &mut self.grid {
            if let Some(lead) = row.get_mut(new_cols - 1) {
                if lead.width == 2 {
                    lead.width = 1;
                }
            }
            row.resize(new_cols, blank);
        }
        while self.grid.len() < new_rows {
            self.grid.push(Self::blank_row(new_cols, self.default_style));
        }

        self.cols = new_cols;
        self.rows = new_rows;
        self.tab_stops = Self::default_tab_stops(new_cols);
        self.cursor.x = self.cursor.x.min(new_cols - 1);
        self.cursor.y = self.cursor.y.min(new_rows - 1);
        self.wrap_pending = false;
        self.dirty_rows = vec![true; new_rows];
    }

    // -- scrollback view ----------------------------------------------------

    /// A snapshot of `rows` rows: the newest `offset` scrollback rows
    /// followed by the top of the grid. `offset` is clamped to the
    /// scrollback length; `0` is the live grid.
    ///
    /// Scrollback rows captured at another width are padded or clipped to
    /// the current width in the snapshot only.
    pub fn scroll_view(&self, offset: usize) -> Vec<Row> {
        let offset = offset.min(self.scrollback.len());
        let history = self.scrollback.len() - offset;
        let blank = Cell::blank(self.default_style);
        self.scrollback
            .iter()
            .skip(history)
            .chain(self.grid.iter())
            .take(self.rows)
            .map(|row| {
                let mut row = row.clone();
                row.resize(self.cols, blank);
                row
            })
            .collect()
    }
}
