//! Scrollback history for the screen buffer.
//!
//! Rows that scroll off the top of the grid are kept here, up to a
//! configurable maximum, and are never rewrapped.

mod buffer;

pub use buffer::*;

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screen::{Cell, Row, Style};

    fn row(text: &str) -> Row {
        text.chars()
            .map(|c| Cell {
                c,
                style: Style::default(),
                width: 1,
            })
            .collect()
    }

    fn texts(history: &ScrollbackBuffer) -> Vec<String> {
        (0..history.len()).filter_map(|i| history.text(i)).collect()
    }

    #[test]
    fn rows_are_kept_in_arrival_order() {
        let mut history = ScrollbackBuffer::new(100);
        history.push(row("$ make"));
        history.push(row("cc -c main.c"));

        assert_eq!(texts(&history), ["$ make", "cc -c main.c"]);
    }

    #[test]
    fn full_buffer_drops_its_oldest_row() {
        let mut history = ScrollbackBuffer::new(2);
        history.push_many(["first", "second", "third"].map(row));

        assert_eq!(history.len(), 2);
        assert_eq!(texts(&history), ["second", "third"]);
    }

    #[test]
    fn zero_capacity_disables_history() {
        let mut history = ScrollbackBuffer::new(0);
        history.push(row("discarded"));
        assert!(history.is_empty());
        assert_eq!(history.max_lines(), 0);
    }

    #[test]
    fn text_ignores_trailing_blanks() {
        let mut history = ScrollbackBuffer::new(10);
        history.push(row("ok    "));

        assert_eq!(history.text(0).as_deref(), Some("ok"));
        assert_eq!(history.get(0).map(|r| r.len()), Some(6));
    }

    #[test]
    fn cleared_history_has_no_rows() {
        let mut history = ScrollbackBuffer::new(10);
        history.push_many(["a", "b"].map(row));
        history.clear();

        assert!(history.is_empty());
        assert_eq!(history.get(0), None);
        assert_eq!(history.text(1), None);
    }

    #[test]
    fn iterates_oldest_to_newest() {
        let mut history = ScrollbackBuffer::new(10);
        history.push_many(["x", "y", "z"].map(row));
        let heads: String = history.iter().map(|r| r[0].c).collect();
        assert_eq!(heads, "xyz");
        assert_eq!(history.iter().rev().next().map(|r| r[0].c), Some('z'));
    }
}
