//! The PTY-free pipeline: bytes in, screen state out.

use std::sync::Arc;
use std::time::{Duration, Instant};

use stellar_common::Theme;
use stellar_config::TerminalConfig;
use tracing::debug;

use super::utf8::Utf8Decoder;
use crate::decoder::{ControlEvent, Decoded, Decoder, DecoderStats};
use crate::event::TerminalEvent;
use crate::screen::{CursorShape, CursorState, Row, ScreenBuffer};

/// UTF-8 decoding, escape decoding and the screen, plus the state that
/// lives outside the grid (title, working directory, modes).
pub struct Terminal {
    utf8: Utf8Decoder,
    decoder: Decoder,
    screen: ScreenBuffer,
    title: String,
    cwd: String,
    newline_mode: bool,
    default_newline_mode: bool,
    default_shape: CursorShape,
    /// `None` when blinking is disabled in the config.
    blink_interval: Option<Duration>,
    blinking: bool,
    last_blink: Option<Instant>,
    events: Vec<TerminalEvent>,
}

impl Terminal {
    pub fn new(config: &TerminalConfig, theme: Arc<dyn Theme>) -> Self {
        let decoder = Decoder::with_limit(theme, config.max_escape_len as usize);
        let default_shape = CursorShape::from(config.cursor_style);
        let mut screen = ScreenBuffer::new(
            usize::from(config.cols),
            usize::from(config.rows),
            config.scrollback_lines as usize,
            decoder.colors().default_style(),
        );
        screen.set_cursor_shape(default_shape);

        let blink_interval = config
            .cursor_blink
            .then(|| Duration::from_millis(u64::from(config.cursor_blink_interval_ms.max(1))));

        Self {
            utf8: Utf8Decoder::new(),
            decoder,
            screen,
            title: String::new(),
            cwd: String::new(),
            newline_mode: config.newline_mode,
            default_newline_mode: config.newline_mode,
            default_shape,
            blink_interval,
            blinking: blink_interval.is_some(),
            last_blink: None,
            events: Vec::new(),
        }
    }

    // -- input --------------------------------------------------------------

    /// Feed raw child output.
    pub fn process(&mut self, bytes: &[u8]) {
        let text = self.utf8.decode(bytes);
        if !text.is_empty() {
            self.feed_str(&text);
        }
    }

    /// Feed already decoded text.
    pub fn feed_str(&mut self, text: &str) {
        for item in self.decoder.feed(text) {
            self.apply(item);
        }
    }

    pub fn apply(&mut self, item: Decoded) {
        match item {
            Decoded::Run(run) => {
                for c in run.text.chars() {
                    self.screen.put_char(c, run.style);
                }
            }
            Decoded::Control(event) => self.apply_control(event),
        }
    }

    pub fn apply_control(&mut self, event: ControlEvent) {
        let screen = &mut self.screen;
        match event {
            ControlEvent::Bell => self.events.push(TerminalEvent::Bell),
            ControlEvent::Backspace => screen.backspace(),
            ControlEvent::Tab => screen.tab(),
            ControlEvent::LineFeed => {
                screen.new_line();
                if self.newline_mode {
                    screen.carriage_return();
                }
            }
            ControlEvent::CarriageReturn => screen.carriage_return(),
            ControlEvent::CursorUp(n) => screen.move_cursor_relative(0, -i32::from(n)),
            ControlEvent::CursorDown(n) => screen.move_cursor_relative(0, i32::from(n)),
            ControlEvent::CursorForward(n) => screen.move_cursor_relative(i32::from(n), 0),
            ControlEvent::CursorBack(n) => screen.move_cursor_relative(-i32::from(n), 0),
            ControlEvent::CursorNextLine(n) => {
                screen.move_cursor_relative(0, i32::from(n));
                screen.carriage_return();
            }
            ControlEvent::CursorPrevLine(n) => {
                screen.move_cursor_relative(0, -i32::from(n));
                screen.carriage_return();
            }
            ControlEvent::CursorColumn(x) => {
                let y = screen.cursor().y;
                screen.set_cursor(usize::from(x), y);
            }
            ControlEvent::CursorRow(y) => {
                let x = screen.cursor().x;
                screen.set_cursor(x, usize::from(y));
            }
            ControlEvent::CursorPosition { row, col } => {
                screen.set_cursor(usize::from(col), usize::from(row));
            }
            ControlEvent::EraseInDisplay(mode) => screen.erase_in_display(mode),
            ControlEvent::EraseInLine(mode) => screen.erase_in_line(mode),
            ControlEvent::ClearScrollback => screen.clear_scrollback(),
            ControlEvent::ScrollUp(n) => screen.scroll_up(usize::from(n)),
            ControlEvent::ScrollDown(n) => screen.scroll_down(usize::from(n)),
            ControlEvent::SetStyle(style) => screen.set_pen(style),
            ControlEvent::SaveCursor => screen.save_cursor(),
            ControlEvent::RestoreCursor => screen.restore_cursor(),
            ControlEvent::Index => screen.new_line(),
            ControlEvent::ReverseIndex => screen.reverse_index(),
            ControlEvent::NextLine => {
                screen.new_line();
                screen.carriage_return();
            }
            ControlEvent::FullReset => {
                screen.reset(self.default_shape);
                self.newline_mode = self.default_newline_mode;
                self.blinking = self.blink_interval.is_some();
            }
            ControlEvent::SetCursorVisible(visible) => screen.set_cursor_visible(visible),
            ControlEvent::SetCursorShape { shape, blinking } => {
                screen.set_cursor_shape(shape);
                self.blinking = blinking && self.blink_interval.is_some();
                if !self.blinking {
                    screen.reset_blink();
                }
            }
            ControlEvent::SetNewlineMode(on) => self.newline_mode = on,
            ControlEvent::SetTitle(title) => {
                debug!(%title, "title changed");
                self.title.clone_from(&title);
                self.events.push(TerminalEvent::TitleChanged(title));
            }
            ControlEvent::SetWorkingDirectory(cwd) => {
                debug!(%cwd, "working directory changed");
                self.cwd.clone_from(&cwd);
                self.events.push(TerminalEvent::WorkingDirectoryChanged(cwd));
            }
        }
    }

    // -- geometry -----------------------------------------------------------

    pub fn resize(&mut self, cols: usize, rows: usize) {
        self.screen.resize(cols.max(1), rows.max(1));
    }

    pub fn cols(&self) -> usize {
        self.screen.cols()
    }

    pub fn rows(&self) -> usize {
        self.screen.rows()
    }

    // -- queries ------------------------------------------------------------

    /// `rows` rows ending `offset` lines above the live grid.
    pub fn visible_region(&self, offset: usize) -> Vec<Row> {
        self.screen.scroll_view(offset)
    }

    pub fn cursor(&self) -> CursorState {
        *self.screen.cursor()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn cwd(&self) -> &str {
        &self.cwd
    }

    pub fn newline_mode(&self) -> bool {
        self.newline_mode
    }

    pub fn screen(&self) -> &ScreenBuffer {
        &self.screen
    }

    pub fn scrollback_len(&self) -> usize {
        self.screen.scrollback().len()
    }

    pub fn decoder_stats(&self) -> DecoderStats {
        self.decoder.stats()
    }

    pub fn take_dirty(&mut self) -> Vec<bool> {
        self.screen.take_dirty()
    }

    pub fn take_events(&mut self) -> Vec<TerminalEvent> {
        std::mem::take(&mut self.events)
    }

    // -- appearance ---------------------------------------------------------

    /// New colors apply to text written from now on.
    pub fn set_theme(&mut self, theme: Arc<dyn Theme>) {
        self.decoder.set_theme(theme);
        self.screen
            .set_default_style(self.decoder.colors().default_style());
    }

    /// Advance the blink timer. Returns `true` when the phase flipped.
    pub fn tick_cursor_blink(&mut self, now: Instant) -> bool {
        let Some(interval) = self.blink_interval.filter(|_| self.blinking) else {
            return false;
        };
        match self.last_blink {
            Some(last) if now.saturating_duration_since(last) < interval => false,
            Some(_) => {
                self.screen.toggle_blink();
                self.last_blink = Some(now);
                true
            }
            None => {
                self.last_blink = Some(now);
                false
            }
        }
    }
}
