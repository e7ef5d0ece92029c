//! Escape sequence decoder.
//!
//! Turns PTY text into styled runs and control events. The state machine
//! recognizes CSI (`ESC [`), OSC (`ESC ]`) and two-character `ESC`
//! sequences, executes C0 controls wherever they appear, and drops anything
//! it does not understand without losing the surrounding text. A partial
//! sequence at the end of one chunk is completed by the next.

mod csi;
mod osc;
mod params;
mod parser;
mod sgr;
mod types;

pub use osc::parse_cwd;
pub use params::{Params, MAX_PARAMS};
pub use parser::{Decoder, DecoderState, DEFAULT_MAX_PENDING};
pub use types::*;

// ===========================================================================
// Tests
// ===========================================================================
