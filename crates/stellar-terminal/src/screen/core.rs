//! ScreenBuffer struct definition and construction helpers.

use super::types::{Cell, CursorShape, CursorState, Row, Style};
use crate::scrollback::ScrollbackBuffer;

// ---------------------------------------------------------------------------
// ScreenBuffer
// ---------------------------------------------------------------------------

/// The visible grid, its scrollback history and the cursor.
///
/// Every mutating method keeps `rows` rows of exactly `cols` cells and the
/// cursor inside `[0, cols) x [0, rows)`.
pub struct ScreenBuffer {
    pub(crate) cols: usize,
    pub(crate) rows: usize,
    pub(crate) grid: Vec<Row>,
    pub(crate) scrollback: ScrollbackBuffer,
    pub(crate) cursor: CursorState,
    pub(crate) saved_cursor: Option<CursorState>,
    /// Theme defaults; used for freshly created rows.
    pub(crate) default_style: Style,
    /// Style the decoder last announced. Erase operations take their
    /// background from here.
    pub(crate) pen: Style,
    /// Delayed-wrap flag (wrap on *next* printable character).
    pub(crate) wrap_pending: bool,
    /// Per-column tab stops (true = stop present).
    pub(crate) tab_stops: Vec<bool>,
    /// Per-row dirty flags for incremental rendering.
    pub(crate) dirty_rows: Vec<bool>,
}

impl ScreenBuffer {
    /// Zero dimensions are raised to one so the cursor always has a cell.
    pub fn new(cols: usize, rows: usize, scrollback_limit: usize, default_style: Style) -> Self {
        let cols = cols.max(1);
        let rows = rows.max(1);
        Self {
            cols,
            rows,
            grid: Self::blank_grid(cols, rows, default_style),
            scrollback: ScrollbackBuffer::new(scrollback_limit),
            cursor: CursorState::default(),
            saved_cursor: None,
            default_style,
            pen: default_style,
            wrap_pending: false,
            tab_stops: Self::default_tab_stops(cols),
            dirty_rows: vec![true; rows],
        }
    }

    pub(crate) fn blank_grid(cols: usize, rows: usize, style: Style) -> Vec<Row> {
        (0..rows).map(|_| Self::blank_row(cols, style)).collect()
    }

    pub(crate) fn blank_row(cols: usize, style: Style) -> Row {
        vec![Cell::blank(style); cols]
    }

    pub(crate) fn default_tab_stops(cols: usize) -> Vec<bool> {
        (0..cols).map(|c| c % 8 == 0).collect()
    }

    /// The blank cell erase operations write.
    pub(crate) fn erased_cell(&self) -> Cell {
        Cell::blank(self.pen.erased(self.default_style))
    }

    // -- accessors ----------------------------------------------------------

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cursor(&self) -> &CursorState {
        &self.cursor
    }

    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        &self.grid[row][col]
    }

    pub fn row(&self, row: usize) -> &Row {
        &self.grid[row]
    }

    pub fn grid(&self) -> &[Row] {
        &self.grid
    }

    pub fn scrollback(&self) -> &ScrollbackBuffer {
        &self.scrollback
    }

    pub fn pen(&self) -> Style {
        self.pen
    }

    pub fn set_pen(&mut self, style: Style) {
        self.pen = style;
    }

    pub fn default_style(&self) -> Style {
        self.default_style
    }

    /// Replace the theme defaults. Existing cells keep their colors.
    pub fn set_default_style(&mut self, style: Style) {
        self.default_style = style;
    }

    pub fn wrap_pending(&self) -> bool {
        self.wrap_pending
    }

    // -- reset --------------------------------------------------------------

    /// Blank the grid with the current pen background, empty the
    /// scrollback, home the cursor and reset the pen to the defaults.
    pub fn clear(&mut self) {
        let blank = self.erased_cell();
        for row in &mut self.grid {
            row.fill(blank);
        }
        self.scrollback.clear();
        self.cursor.x = 0;
        self.cursor.y = 0;
        self.wrap_pending = false;
        self.pen = self.default_style;
        self.mark_all_dirty();
    }

    /// Full reset (RIS): like [`clear`](Self::clear) with the default
    /// background, plus cursor appearance, saved cursor and tab stops.
    pub fn reset(&mut self, shape: CursorShape) {
        self.pen = self.default_style;
        self.clear();
        self.grid = Self::blank_grid(self.cols, self.rows, self.default_style);
        self.cursor = CursorState {
            shape,
            ..CursorState::default()
        };
        self.saved_cursor = None;
        self.tab_stops = Self::default_tab_stops(self.cols);
    }
}
