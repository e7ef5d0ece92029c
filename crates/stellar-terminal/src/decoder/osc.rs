//! OSC dispatch: window title and working directory.

use super::parser::Decoder;
use super::types::{ControlEvent, DecodeIssue, Decoded};

impl Decoder {
    pub(super) fn dispatch_osc(&mut self, payload: &str, out: &mut Vec<Decoded>) {
        let (command, text) = payload.split_once(';').unwrap_or((payload, ""));
        let event = match command {
            "0" | "2" => ControlEvent::SetTitle(text.to_string()),
            "7" => ControlEvent::SetWorkingDirectory(parse_cwd(text)),
            _ => return self.discard(DecodeIssue::Unsupported(format!("OSC {command}"))),
        };
        self.emit(out, event);
    }
}

/// Path from an OSC 7 payload. `file://host/path` yields the
/// percent-decoded `/path`; anything else is taken as a bare path.
pub fn parse_cwd(payload: &str) -> String {
    let Some(rest) = payload.strip_prefix("file://") else {
        return payload.to_string();
    };
    let path = rest.find('/').map_or("/", |i| &rest[i..]);
    percent_decode(path)
}

fn percent_decode(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            if let Some(v) = bytes.get(i + 1..i + 3).and_then(hex_pair) {
                out.push(v);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_pair(pair: &[u8]) -> Option<u8> {
    let digit = |b: u8| (b as char).to_digit(16);
    Some((digit(pair[0])? * 16 + digit(pair[1])?) as u8)
}
