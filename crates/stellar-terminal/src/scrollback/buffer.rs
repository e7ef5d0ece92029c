//! ScrollbackBuffer: bounded FIFO of rows that left the top of the grid.

use std::collections::VecDeque;

use crate::screen::{row_text, Row};

/// History rows, oldest first. Holds at most `max_lines` rows; pushing
/// past the limit evicts from the front.
#[derive(Debug, Clone, Default)]
pub struct ScrollbackBuffer {
    lines: VecDeque<Row>,
    max_lines: usize,
}

impl ScrollbackBuffer {
    /// A limit of `0` disables history entirely.
    pub fn new(max_lines: usize) -> Self {
        ScrollbackBuffer {
            lines: VecDeque::with_capacity(max_lines.min(1024)),
            max_lines,
        }
    }

    pub fn push(&mut self, row: Row) {
        if self.max_lines == 0 {
            return;
        }
        if self.lines.len() == self.max_lines {
            self.lines.pop_front();
        }
        self.lines.push_back(row);
    }

    /// Append rows in order, as when several lines scroll off at once.
    pub fn push_many(&mut self, rows: impl IntoIterator<Item = Row>) {
        rows.into_iter().for_each(|row| self.push(row));
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn max_lines(&self) -> usize {
        self.max_lines
    }

    /// Row by index (`0` = oldest).
    pub fn get(&self, index: usize) -> Option<&Row> {
        self.lines.get(index)
    }

    /// Text of the row at `index`, trailing blanks trimmed.
    pub fn text(&self, index: usize) -> Option<String> {
        self.lines.get(index).map(row_text)
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Oldest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Row> + ExactSizeIterator {
        self.lines.iter()
    }
}
