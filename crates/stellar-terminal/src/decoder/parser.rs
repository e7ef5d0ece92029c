//! The decoder state machine.
//!
//! Input arrives as `&str` chunks. State (including a partially received
//! sequence) persists across [`Decoder::feed`] calls, so a sequence split
//! between two chunks decodes exactly as if it arrived in one.

use std::sync::Arc;

use stellar_common::Theme;
use tracing::{trace, warn};

use super::types::{ControlEvent, DecodeIssue, Decoded, DecoderStats, StyledRun};
use crate::color::ColorResolver;
use crate::screen::Style;

pub(crate) const ESC: char = '\x1b';
const BEL: char = '\x07';
const CAN: char = '\x18';
const SUB: char = '\x1a';
const DEL: char = '\x7f';
const CSI_8BIT: char = '\u{9b}';
const OSC_8BIT: char = '\u{9d}';
const ST_8BIT: char = '\u{9c}';

/// Longest sequence body buffered when no limit is configured.
pub const DEFAULT_MAX_PENDING: usize = 4096;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DecoderState {
    #[default]
    Ground,
    Escape,
    CsiParams,
    OscString,
    /// `ESC` seen inside an OSC string; `\` completes the terminator.
    OscEscape,
}

// ---------------------------------------------------------------------------
// Decoder
// ---------------------------------------------------------------------------

pub struct Decoder {
    state: DecoderState,
    /// Characters collected since the sequence introducer.
    pending: String,
    pending_len: usize,
    max_pending: usize,
    /// Printable text not yet emitted; always styled with `style`.
    run: String,
    pub(super) colors: ColorResolver,
    pub(super) style: Style,
    stats: DecoderStats,
}

impl Decoder {
    pub fn new(theme: Arc<dyn Theme>) -> Self {
        Self::with_limit(theme, DEFAULT_MAX_PENDING)
    }

    /// `max_pending` bounds how many characters of one sequence are held
    /// before it is dropped.
    pub fn with_limit(theme: Arc<dyn Theme>, max_pending: usize) -> Self {
        let colors = ColorResolver::new(theme);
        let style = colors.default_style();
        Self {
            state: DecoderState::Ground,
            pending: String::new(),
            pending_len: 0,
            max_pending: max_pending.max(1),
            run: String::new(),
            colors,
            style,
            stats: DecoderStats::default(),
        }
    }

    pub fn state(&self) -> DecoderState {
        self.state
    }

    /// The style the next printable character will carry.
    pub fn style(&self) -> Style {
        self.style
    }

    pub fn stats(&self) -> DecoderStats {
        self.stats
    }

    pub fn colors(&self) -> &ColorResolver {
        &self.colors
    }

    /// Swap the theme. Already resolved styles keep their colors.
    pub fn set_theme(&mut self, theme: Arc<dyn Theme>) {
        self.colors.set_theme(theme);
    }

    /// Back to `Ground` with the default style, dropping any partial
    /// sequence.
    pub fn reset(&mut self) {
        self.begin(DecoderState::Ground);
        self.run.clear();
        self.style = self.colors.default_style();
    }

    /// Decode one chunk. Adjacent printable characters with the same style
    /// come out as one run.
    pub fn feed(&mut self, input: &str) -> Vec<Decoded> {
        let mut out = Vec::new();
        for ch in input.chars() {
            self.advance(ch, &mut out);
        }
        self.flush_run(&mut out);
        out
    }

    fn advance(&mut self, ch: char, out: &mut Vec<Decoded>) {
        match self.state {
            DecoderState::Ground => self.ground(ch, out),
            DecoderState::Escape => self.escape(ch, out),
            DecoderState::CsiParams => self.csi_params(ch, out),
            DecoderState::OscString => self.osc_string(ch, out),
            DecoderState::OscEscape => self.osc_escape(ch, out),
        }
    }

    // -- states -------------------------------------------------------------

    fn ground(&mut self, ch: char, out: &mut Vec<Decoded>) {
        match ch {
            ESC => {
                self.flush_run(out);
                self.begin(DecoderState::Escape);
            }
            CSI_8BIT => {
                self.flush_run(out);
                self.begin(DecoderState::CsiParams);
            }
            OSC_8BIT => {
                self.flush_run(out);
                self.begin(DecoderState::OscString);
            }
            c if is_control(c) => {
                self.flush_run(out);
                self.execute(c, out);
            }
            c => self.run.push(c),
        }
    }

    fn escape(&mut self, ch: char, out: &mut Vec<Decoded>) {
        match ch {
            '[' if self.pending.is_empty() => self.state = DecoderState::CsiParams,
            ']' if self.pending.is_empty() => self.state = DecoderState::OscString,
            ESC => self.restart(),
            CAN | SUB => self.abort(),
            DEL => {}
            c if is_c0(c) => self.execute(c, out),
            '\x20'..='\x2f' => self.collect(ch),
            '\x30'..='\x7e' => {
                self.state = DecoderState::Ground;
                let intermediates = std::mem::take(&mut self.pending);
                self.dispatch_esc(&intermediates, ch, out);
            }
            c => {
                self.malformed(c);
                self.ground(c, out);
            }
        }
    }

    fn csi_params(&mut self, ch: char, out: &mut Vec<Decoded>) {
        match ch {
            ESC => self.restart(),
            CAN | SUB => self.abort(),
            DEL => {}
            c if is_c0(c) => self.execute(c, out),
            '\x20'..='\x3f' => self.collect(ch),
            '\x40'..='\x7e' => {
                self.state = DecoderState::Ground;
                let body = std::mem::take(&mut self.pending);
                self.dispatch_csi(&body, ch, out);
            }
            c => {
                self.malformed(c);
                self.ground(c, out);
            }
        }
    }

    fn osc_string(&mut self, ch: char, out: &mut Vec<Decoded>) {
        match ch {
            BEL | ST_8BIT => self.finish_osc(out),
            ESC => self.state = DecoderState::OscEscape,
            CAN | SUB => self.abort(),
            c if is_c0(c) => {}
            c => self.collect(c),
        }
    }

    fn osc_escape(&mut self, ch: char, out: &mut Vec<Decoded>) {
        self.finish_osc(out);
        if ch != '\\' {
            // The ESC ended the string and starts the next sequence.
            self.begin(DecoderState::Escape);
            self.escape(ch, out);
        }
    }

    fn finish_osc(&mut self, out: &mut Vec<Decoded>) {
        self.state = DecoderState::Ground;
        let payload = std::mem::take(&mut self.pending);
        self.dispatch_osc(&payload, out);
    }

    // -- actions ------------------------------------------------------------

    fn execute(&mut self, c: char, out: &mut Vec<Decoded>) {
        let event = match c {
            BEL => ControlEvent::Bell,
            '\x08' => ControlEvent::Backspace,
            '\t' => ControlEvent::Tab,
            '\n' | '\x0b' | '\x0c' => ControlEvent::LineFeed,
            '\r' => ControlEvent::CarriageReturn,
            _ => {
                trace!(code = c as u32, "ignored control character");
                return;
            }
        };
        out.push(Decoded::Control(event));
    }

    fn dispatch_esc(&mut self, intermediates: &str, action: char, out: &mut Vec<Decoded>) {
        if !intermediates.is_empty() {
            return self.discard(DecodeIssue::Unsupported(format!("ESC {intermediates}{action}")));
        }
        let event = match action {
            '7' => ControlEvent::SaveCursor,
            '8' => ControlEvent::RestoreCursor,
            'D' => ControlEvent::Index,
            'M' => ControlEvent::ReverseIndex,
            'E' => ControlEvent::NextLine,
            'c' => {
                self.style = self.colors.default_style();
                ControlEvent::FullReset
            }
            // A lone string terminator.
            '\\' => return,
            _ => return self.discard(DecodeIssue::Unsupported(format!("ESC {action}"))),
        };
        out.push(Decoded::Control(event));
    }

    pub(super) fn emit(&self, out: &mut Vec<Decoded>, event: ControlEvent) {
        out.push(Decoded::Control(event));
    }

    fn flush_run(&mut self, out: &mut Vec<Decoded>) {
        if !self.run.is_empty() {
            out.push(Decoded::Run(StyledRun {
                text: std::mem::take(&mut self.run),
                style: self.style,
            }));
        }
    }

    // -- pending sequence ---------------------------------------------------

    fn begin(&mut self, state: DecoderState) {
        self.state = state;
        self.pending.clear();
        self.pending_len = 0;
    }

    fn collect(&mut self, ch: char) {
        self.pending.push(ch);
        self.pending_len += 1;
        if self.pending_len > self.max_pending {
            let issue = DecodeIssue::Overflow {
                limit: self.max_pending,
            };
            warn!(%issue, state = ?self.state, "dropping escape sequence");
            self.stats.overflows += 1;
            self.begin(DecoderState::Ground);
        }
    }

    /// `ESC` inside a sequence: drop it and start over.
    fn restart(&mut self) {
        self.discard(DecodeIssue::Malformed("interrupted by ESC".into()));
        self.begin(DecoderState::Escape);
    }

    /// `CAN` / `SUB`: drop the sequence.
    fn abort(&mut self) {
        self.discard(DecodeIssue::Malformed("cancelled".into()));
        self.begin(DecoderState::Ground);
    }

    fn malformed(&mut self, ch: char) {
        self.discard(DecodeIssue::Malformed(format!(
            "unexpected {ch:?} after {:?}",
            self.pending
        )));
        self.begin(DecoderState::Ground);
    }

    pub(super) fn discard(&mut self, issue: DecodeIssue) {
        trace!(%issue, "sequence discarded");
        self.stats.discarded += 1;
    }
}

fn is_c0(c: char) -> bool {
    c < ' '
}

/// C0, DEL and C1 controls never print.
fn is_control(c: char) -> bool {
    is_c0(c) || c == DEL || ('\u{80}'..='\u{9f}').contains(&c)
}
