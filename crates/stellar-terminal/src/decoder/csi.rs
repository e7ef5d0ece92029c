//! CSI dispatch: cursor motion, erase, scroll, modes, cursor shape, SGR.

use tracing::trace;

use super::params::Params;
use super::parser::Decoder;
use super::types::{ControlEvent, DecodeIssue, Decoded};
use crate::screen::{CursorShape, EraseMode};

/// A collected CSI body split into its parts.
struct CsiParts<'a> {
    marker: Option<char>,
    params: Params,
    intermediates: &'a str,
}

impl<'a> CsiParts<'a> {
    /// `None` when the body is not `[marker] params [intermediates]`.
    fn split(body: &'a str) -> Option<Self> {
        let (marker, rest) = match body.chars().next() {
            Some(m @ ('?' | '>' | '<' | '=')) => (Some(m), &body[1..]),
            _ => (None, body),
        };
        let split = rest
            .find(|c: char| ('\x20'..='\x2f').contains(&c))
            .unwrap_or(rest.len());
        let (param_text, intermediates) = rest.split_at(split);
        let params_ok = param_text
            .chars()
            .all(|c| c.is_ascii_digit() || c == ';' || c == ':');
        let intermediates_ok = intermediates.chars().all(|c| ('\x20'..='\x2f').contains(&c));
        (params_ok && intermediates_ok).then(|| CsiParts {
            marker,
            params: Params::parse(param_text),
            intermediates,
        })
    }
}

impl Decoder {
    pub(super) fn dispatch_csi(&mut self, body: &str, action: char, out: &mut Vec<Decoded>) {
        let Some(csi) = CsiParts::split(body) else {
            return self.discard(DecodeIssue::Malformed(format!("CSI {body}{action}")));
        };
        let p = &csi.params;

        let event = match (csi.marker, csi.intermediates, action) {
            (None, "", 'A') => ControlEvent::CursorUp(p.count(0)),
            (None, "", 'B') => ControlEvent::CursorDown(p.count(0)),
            (None, "", 'C') => ControlEvent::CursorForward(p.count(0)),
            (None, "", 'D') => ControlEvent::CursorBack(p.count(0)),
            (None, "", 'E') => ControlEvent::CursorNextLine(p.count(0)),
            (None, "", 'F') => ControlEvent::CursorPrevLine(p.count(0)),
            (None, "", 'G') => ControlEvent::CursorColumn(p.coordinate(0)),
            (None, "", 'd') => ControlEvent::CursorRow(p.coordinate(0)),
            (None, "", 'H' | 'f') => ControlEvent::CursorPosition {
                row: p.coordinate(0),
                col: p.coordinate(1),
            },
            (None, "", 'J') => match p.get(0) {
                3 => ControlEvent::ClearScrollback,
                mode => match EraseMode::from_param(mode) {
                    Some(mode) => ControlEvent::EraseInDisplay(mode),
                    None => return self.unsupported(body, action),
                },
            },
            (None, "", 'K') => match EraseMode::from_param(p.get(0)) {
                Some(mode) => ControlEvent::EraseInLine(mode),
                None => return self.unsupported(body, action),
            },
            (None, "", 'S') => ControlEvent::ScrollUp(p.count(0)),
            (None, "", 'T') => ControlEvent::ScrollDown(p.count(0)),
            (None, "", 's') => ControlEvent::SaveCursor,
            (None, "", 'u') => ControlEvent::RestoreCursor,
            (None, "", 'm') => {
                self.apply_sgr(p);
                ControlEvent::SetStyle(self.style)
            }
            (marker @ (None | Some('?')), "", 'h' | 'l') => {
                return self.set_modes(marker.is_some(), p, action == 'h', out);
            }
            (None, " ", 'q') => match cursor_shape(p.get(0)) {
                Some((shape, blinking)) => ControlEvent::SetCursorShape { shape, blinking },
                None => return self.unsupported(body, action),
            },
            _ => return self.unsupported(body, action),
        };
        self.emit(out, event);
    }

    /// SM / RM and their DEC private forms. Only newline mode (20) and
    /// cursor visibility (?25) are recognized.
    fn set_modes(&mut self, private: bool, params: &Params, enable: bool, out: &mut Vec<Decoded>) {
        let mut recognized = false;
        for mode in params.iter() {
            let event = match (private, mode) {
                (false, 20) => ControlEvent::SetNewlineMode(enable),
                (true, 25) => ControlEvent::SetCursorVisible(enable),
                _ => {
                    trace!(private, mode, enable, "unhandled mode");
                    continue;
                }
            };
            recognized = true;
            self.emit(out, event);
        }
        if !recognized {
            let prefix = if private { "?" } else { "" };
            let modes: Vec<u16> = params.iter().collect();
            self.discard(DecodeIssue::Unsupported(format!("mode {prefix}{modes:?}")));
        }
    }

    fn unsupported(&mut self, body: &str, action: char) {
        self.discard(DecodeIssue::Unsupported(format!("CSI {body}{action}")));
    }
}

/// DECSCUSR parameter to shape and blink flag.
fn cursor_shape(param: u16) -> Option<(CursorShape, bool)> {
    match param {
        0 | 1 => Some((CursorShape::Block, true)),
        2 => Some((CursorShape::Block, false)),
        3 => Some((CursorShape::Underscore, true)),
        4 => Some((CursorShape::Underscore, false)),
        5 => Some((CursorShape::Bar, true)),
        6 => Some((CursorShape::Bar, false)),
        _ => None,
    }
}
