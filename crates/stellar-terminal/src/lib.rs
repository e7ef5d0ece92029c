//! Terminal emulation core.
//!
//! Shell output flows one way: [`PtySession`] yields bytes, the
//! [`Decoder`] turns text into styled runs and control events, and the
//! [`ScreenBuffer`] applies them to the grid, cursor and scrollback.
//! [`TerminalEngine`] wires the three together behind a background I/O
//! thread; [`Terminal`] is the same pipeline without a shell.

pub mod color;
pub mod decoder;
pub mod engine;
pub mod event;
pub mod input;
pub mod pty;
pub mod screen;
pub mod scrollback;
pub mod sequences;
pub mod shell;

pub use color::ColorResolver;
pub use decoder::{ControlEvent, Decoded, Decoder, StyledRun};
pub use engine::{Terminal, TerminalEngine};
pub use event::{EventProxy, TerminalEvent};
pub use input::{Key, KeyEncoder, Modifiers};
pub use pty::{PtyError, PtySession, SessionOptions};
pub use screen::{Cell, CursorShape, CursorState, EraseMode, Row, ScreenBuffer, Style};
pub use scrollback::ScrollbackBuffer;
pub use sequences::{Sequence, SgrAttr};
