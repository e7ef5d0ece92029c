//! Typed escape sequences.
//!
//! [`Sequence`] renders the exact bytes a program would send for each
//! control the decoder understands, in the shortest form (default
//! parameters are omitted). Coordinates are 0-based, as in
//! [`ControlEvent`](crate::decoder::ControlEvent).

use std::fmt::{self, Write as _};

use stellar_common::{AnsiColor, Rgb};

use crate::screen::{CursorShape, EraseMode};

// ---------------------------------------------------------------------------
// SGR attributes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SgrAttr {
    Reset,
    Bold,
    Italic,
    Underline,
    NormalIntensity,
    NoItalic,
    NoUnderline,
    Fg(AnsiColor),
    Bg(AnsiColor),
    BrightFg(AnsiColor),
    BrightBg(AnsiColor),
    FgIndexed(u8),
    BgIndexed(u8),
    FgRgb(Rgb),
    BgRgb(Rgb),
    DefaultFg,
    DefaultBg,
}

impl fmt::Display for SgrAttr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            SgrAttr::Reset => f.write_str("0"),
            SgrAttr::Bold => f.write_str("1"),
            SgrAttr::Italic => f.write_str("3"),
            SgrAttr::Underline => f.write_str("4"),
            SgrAttr::NormalIntensity => f.write_str("22"),
            SgrAttr::NoItalic => f.write_str("23"),
            SgrAttr::NoUnderline => f.write_str("24"),
            SgrAttr::Fg(c) => write!(f, "{}", 30 + c.index()),
            SgrAttr::Bg(c) => write!(f, "{}", 40 + c.index()),
            SgrAttr::BrightFg(c) => write!(f, "{}", 90 + c.index()),
            SgrAttr::BrightBg(c) => write!(f, "{}", 100 + c.index()),
            SgrAttr::FgIndexed(n) => write!(f, "38;5;{n}"),
            SgrAttr::BgIndexed(n) => write!(f, "48;5;{n}"),
            SgrAttr::FgRgb(Rgb { r, g, b }) => write!(f, "38;2;{r};{g};{b}"),
            SgrAttr::BgRgb(Rgb { r, g, b }) => write!(f, "48;2;{r};{g};{b}"),
            SgrAttr::DefaultFg => f.write_str("39"),
            SgrAttr::DefaultBg => f.write_str("49"),
        }
    }
}

// ---------------------------------------------------------------------------
// Sequence
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sequence {
    CursorUp(u16),
    CursorDown(u16),
    CursorForward(u16),
    CursorBack(u16),
    CursorNextLine(u16),
    CursorPrevLine(u16),
    CursorColumn(u16),
    CursorRow(u16),
    CursorPosition { row: u16, col: u16 },
    EraseInDisplay(EraseMode),
    EraseInLine(EraseMode),
    ClearScrollback,
    ScrollUp(u16),
    ScrollDown(u16),
    /// An empty list renders as `CSI m`, i.e. reset.
    Sgr(Vec<SgrAttr>),
    SetTitle(String),
    SetWorkingDirectory(String),
    ShowCursor,
    HideCursor,
    CursorShape { shape: CursorShape, blinking: bool },
    SaveCursor,
    RestoreCursor,
    SetNewlineMode(bool),
    FullReset,
    /// `CSI n ~` editing and function keys.
    Tilde(u16),
    /// `ESC O c` keys (F1-F4).
    Ss3(char),
    /// Home key in normal cursor-key mode.
    HomeKey,
    /// End key in normal cursor-key mode.
    EndKey,
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sequence::CursorUp(n) => csi(f, &count(*n), 'A'),
            Sequence::CursorDown(n) => csi(f, &count(*n), 'B'),
            Sequence::CursorForward(n) => csi(f, &count(*n), 'C'),
            Sequence::CursorBack(n) => csi(f, &count(*n), 'D'),
            Sequence::CursorNextLine(n) => csi(f, &count(*n), 'E'),
            Sequence::CursorPrevLine(n) => csi(f, &count(*n), 'F'),
            Sequence::CursorColumn(x) => csi(f, &coordinate(*x), 'G'),
            Sequence::CursorRow(y) => csi(f, &coordinate(*y), 'd'),
            Sequence::CursorPosition { row: 0, col: 0 } => f.write_str("\x1b[H"),
            Sequence::CursorPosition { row, col } => {
                write!(f, "\x1b[{};{}H", u32::from(*row) + 1, u32::from(*col) + 1)
            }
            Sequence::EraseInDisplay(mode) => csi(f, &erase(*mode), 'J'),
            Sequence::EraseInLine(mode) => csi(f, &erase(*mode), 'K'),
            Sequence::ClearScrollback => f.write_str("\x1b[3J"),
            Sequence::ScrollUp(n) => csi(f, &count(*n), 'S'),
            Sequence::ScrollDown(n) => csi(f, &count(*n), 'T'),
            Sequence::Sgr(attrs) => {
                let mut params = String::new();
                for (i, attr) in attrs.iter().enumerate() {
                    if i > 0 {
                        params.push(';');
                    }
                    write!(params, "{attr}")?;
                }
                csi(f, &params, 'm')
            }
            Sequence::SetTitle(title) => write!(f, "\x1b]2;{title}\x07"),
            Sequence::SetWorkingDirectory(path) => {
                f.write_str("\x1b]7;file://")?;
                for ch in path.chars() {
                    match ch {
                        ' ' => f.write_str("%20")?,
                        '%' => f.write_str("%25")?,
                        c => f.write_char(c)?,
                    }
                }
                f.write_char('\x07')
            }
            Sequence::ShowCursor => f.write_str("\x1b[?25h"),
            Sequence::HideCursor => f.write_str("\x1b[?25l"),
            Sequence::CursorShape { shape, blinking } => {
                let param = match (shape, blinking) {
                    (CursorShape::Block, true) => 1,
                    (CursorShape::Block, false) => 2,
                    (CursorShape::Underscore, true) => 3,
                    (CursorShape::Underscore, false) => 4,
                    (CursorShape::Bar, true) => 5,
                    (CursorShape::Bar, false) => 6,
                };
                write!(f, "\x1b[{param} q")
            }
            Sequence::SaveCursor => f.write_str("\x1b7"),
            Sequence::RestoreCursor => f.write_str("\x1b8"),
            Sequence::SetNewlineMode(true) => f.write_str("\x1b[20h"),
            Sequence::SetNewlineMode(false) => f.write_str("\x1b[20l"),
            Sequence::FullReset => f.write_str("\x1bc"),
            Sequence::Tilde(n) => write!(f, "\x1b[{n}~"),
            Sequence::Ss3(c) => write!(f, "\x1bO{c}"),
            Sequence::HomeKey => f.write_str("\x1b[H"),
            Sequence::EndKey => f.write_str("\x1b[F"),
        }
    }
}

impl Sequence {
    pub fn to_bytes(&self) -> Vec<u8> {
        self.to_string().into_bytes()
    }
}

fn csi(f: &mut fmt::Formatter<'_>, params: &str, action: char) -> fmt::Result {
    write!(f, "\x1b[{params}{action}")
}

/// Repeat counts of 1 are the default and are left out.
fn count(n: u16) -> String {
    if n <= 1 {
        String::new()
    } else {
        n.to_string()
    }
}

fn coordinate(pos: u16) -> String {
    if pos == 0 {
        String::new()
    } else {
        (u32::from(pos) + 1).to_string()
    }
}

fn erase(mode: EraseMode) -> String {
    match mode {
        EraseMode::ToEnd => String::new(),
        other => other.as_param().to_string(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::{ControlEvent, Decoded, Decoder};
    use std::sync::Arc;
    use stellar_config::ThemeConfig;

    #[test]
    fn default_parameters_are_omitted() {
        assert_eq!(Sequence::CursorUp(1).to_string(), "\x1b[A");
        assert_eq!(Sequence::CursorUp(0).to_string(), "\x1b[A");
        assert_eq!(Sequence::CursorBack(12).to_string(), "\x1b[12D");
        assert_eq!(Sequence::CursorPosition { row: 0, col: 0 }.to_string(), "\x1b[H");
        assert_eq!(Sequence::EraseInLine(EraseMode::ToEnd).to_string(), "\x1b[K");
        assert_eq!(Sequence::Sgr(vec![]).to_string(), "\x1b[m");
    }

    #[test]
    fn positions_are_one_based_on_the_wire() {
        assert_eq!(Sequence::CursorPosition { row: 4, col: 9 }.to_string(), "\x1b[5;10H");
        assert_eq!(Sequence::CursorColumn(11).to_string(), "\x1b[12G");
        assert_eq!(Sequence::CursorRow(u16::MAX).to_string(), "\x1b[65536d");
    }

    #[test]
    fn sgr_lists() {
        let seq = Sequence::Sgr(vec![
            SgrAttr::Bold,
            SgrAttr::Fg(AnsiColor::Red),
            SgrAttr::BrightBg(AnsiColor::Blue),
            SgrAttr::FgIndexed(200),
            SgrAttr::BgRgb(Rgb::new(1, 2, 3)),
        ]);
        assert_eq!(seq.to_string(), "\x1b[1;31;104;38;5;200;48;2;1;2;3m");
    }

    #[test]
    fn strings_and_modes() {
        assert_eq!(Sequence::SetTitle("t".into()).to_string(), "\x1b]2;t\x07");
        assert_eq!(
            Sequence::SetWorkingDirectory("/a b".into()).to_string(),
            "\x1b]7;file:///a%20b\x07"
        );
        assert_eq!(Sequence::HideCursor.to_bytes(), b"\x1b[?25l".to_vec());
        assert_eq!(
            Sequence::CursorShape {
                shape: CursorShape::Bar,
                blinking: false
            }
            .to_string(),
            "\x1b[6 q"
        );
        assert_eq!(Sequence::Tilde(3).to_string(), "\x1b[3~");
        assert_eq!(Sequence::Ss3('P').to_string(), "\x1bOP");
        assert_eq!(Sequence::HomeKey.to_string(), "\x1b[H");
        assert_eq!(Sequence::EndKey.to_string(), "\x1b[F");
    }

    #[test]
    fn decoder_understands_rendered_sequences() {
        let mut d = Decoder::new(Arc::new(ThemeConfig::default()));
        let cases = [
            (Sequence::CursorDown(3), ControlEvent::CursorDown(3)),
            (
                Sequence::CursorPosition { row: 2, col: 7 },
                ControlEvent::CursorPosition { row: 2, col: 7 },
            ),
            (Sequence::CursorColumn(0), ControlEvent::CursorColumn(0)),
            (
                Sequence::EraseInDisplay(EraseMode::ToStart),
                ControlEvent::EraseInDisplay(EraseMode::ToStart),
            ),
            (Sequence::ClearScrollback, ControlEvent::ClearScrollback),
            (Sequence::ShowCursor, ControlEvent::SetCursorVisible(true)),
            (Sequence::SetNewlineMode(false), ControlEvent::SetNewlineMode(false)),
            (
                Sequence::SetWorkingDirectory("/x y%".into()),
                ControlEvent::SetWorkingDirectory("/x y%".into()),
            ),
            (Sequence::FullReset, ControlEvent::FullReset),
        ];
        for (seq, event) in cases {
            assert_eq!(d.feed(&seq.to_string()), vec![Decoded::Control(event)], "{seq:?}");
        }
    }
}
