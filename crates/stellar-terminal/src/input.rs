//! Key encoding: what the shell receives for each key press.

use stellar_config::TerminalConfig;

use crate::sequences::Sequence;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Tab,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    Insert,
    Delete,
    PageUp,
    PageDown,
    /// F1 through F12; anything else encodes to nothing.
    F(u8),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        ctrl: false,
        alt: false,
        shift: false,
    };
    pub const CTRL: Self = Self {
        ctrl: true,
        alt: false,
        shift: false,
    };
    pub const ALT: Self = Self {
        ctrl: false,
        alt: true,
        shift: false,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEncoder {
    /// Backspace sends DEL (0x7f) rather than BS (0x08).
    pub backspace_sends_delete: bool,
}

impl Default for KeyEncoder {
    fn default() -> Self {
        Self {
            backspace_sends_delete: true,
        }
    }
}

impl KeyEncoder {
    pub fn from_config(config: &TerminalConfig) -> Self {
        Self {
            backspace_sends_delete: config.backspace_sends_delete,
        }
    }

    pub fn encode(&self, key: Key, mods: Modifiers) -> Vec<u8> {
        let alt_prefix: &[u8] = if mods.alt { b"\x1b" } else { b"" };

        match key {
            Key::Enter => [alt_prefix, b"\r"].concat(),
            Key::Backspace => {
                let byte = if self.backspace_sends_delete { 0x7f } else { 0x08 };
                [alt_prefix, &[byte]].concat()
            }
            Key::Tab if mods.shift => b"\x1b[Z".to_vec(),
            Key::Tab => b"\t".to_vec(),
            Key::Escape => b"\x1b".to_vec(),

            Key::Up => Sequence::CursorUp(1).to_bytes(),
            Key::Down => Sequence::CursorDown(1).to_bytes(),
            Key::Right => Sequence::CursorForward(1).to_bytes(),
            Key::Left => Sequence::CursorBack(1).to_bytes(),
            Key::Home => Sequence::HomeKey.to_bytes(),
            Key::End => Sequence::EndKey.to_bytes(),

            Key::Insert => Sequence::Tilde(2).to_bytes(),
            Key::Delete => Sequence::Tilde(3).to_bytes(),
            Key::PageUp => Sequence::Tilde(5).to_bytes(),
            Key::PageDown => Sequence::Tilde(6).to_bytes(),

            Key::F(n) => function_key(n).map(|s| s.to_bytes()).unwrap_or_default(),

            Key::Char(ch) => match ctrl_byte(ch).filter(|_| mods.ctrl) {
                Some(byte) => [alt_prefix, &[byte]].concat(),
                None => {
                    let mut buf = [0u8; 4];
                    [alt_prefix, ch.encode_utf8(&mut buf).as_bytes()].concat()
                }
            },
        }
    }
}

fn function_key(n: u8) -> Option<Sequence> {
    let seq = match n {
        1 => Sequence::Ss3('P'),
        2 => Sequence::Ss3('Q'),
        3 => Sequence::Ss3('R'),
        4 => Sequence::Ss3('S'),
        5 => Sequence::Tilde(15),
        6 => Sequence::Tilde(17),
        7 => Sequence::Tilde(18),
        8 => Sequence::Tilde(19),
        9 => Sequence::Tilde(20),
        10 => Sequence::Tilde(21),
        11 => Sequence::Tilde(23),
        12 => Sequence::Tilde(24),
        _ => return None,
    };
    Some(seq)
}

/// The C0 byte Ctrl+`ch` produces, if any.
fn ctrl_byte(ch: char) -> Option<u8> {
    match ch {
        'a'..='z' | 'A'..='Z' => Some(ch.to_ascii_lowercase() as u8 - b'a' + 1),
        ' ' | '@' | '2' => Some(0x00),
        '[' | '3' => Some(0x1b),
        '\\' | '4' => Some(0x1c),
        ']' | '5' => Some(0x1d),
        '^' | '6' => Some(0x1e),
        '_' | '7' | '/' => Some(0x1f),
        '?' | '8' => Some(0x7f),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enc(key: Key, mods: Modifiers) -> Vec<u8> {
        KeyEncoder::default().encode(key, mods)
    }

    #[test]
    fn plain_characters() {
        assert_eq!(enc(Key::Char('a'), Modifiers::NONE), b"a");
        assert_eq!(enc(Key::Char('é'), Modifiers::NONE), "é".as_bytes());
        assert_eq!(enc(Key::Enter, Modifiers::NONE), b"\r");
    }

    #[test]
    fn ctrl_letters() {
        assert_eq!(enc(Key::Char('c'), Modifiers::CTRL), vec![0x03]);
        assert_eq!(enc(Key::Char('D'), Modifiers::CTRL), vec![0x04]);
        assert_eq!(enc(Key::Char('z'), Modifiers::CTRL), vec![0x1a]);
        assert_eq!(enc(Key::Char('['), Modifiers::CTRL), vec![0x1b]);
        assert_eq!(enc(Key::Char(']'), Modifiers::CTRL), vec![0x1d]);
        assert_eq!(enc(Key::Char(' '), Modifiers::CTRL), vec![0x00]);
        // No control form: the character itself.
        assert_eq!(enc(Key::Char('!'), Modifiers::CTRL), b"!");
    }

    #[test]
    fn alt_prefixes_escape() {
        assert_eq!(enc(Key::Char('x'), Modifiers::ALT), b"\x1bx");
        let ctrl_alt = Modifiers {
            ctrl: true,
            alt: true,
            shift: false,
        };
        assert_eq!(enc(Key::Char('a'), ctrl_alt), vec![0x1b, 0x01]);
    }

    #[test]
    fn arrows_and_navigation() {
        assert_eq!(enc(Key::Up, Modifiers::NONE), b"\x1b[A");
        assert_eq!(enc(Key::Down, Modifiers::NONE), b"\x1b[B");
        assert_eq!(enc(Key::Right, Modifiers::NONE), b"\x1b[C");
        assert_eq!(enc(Key::Left, Modifiers::NONE), b"\x1b[D");
        assert_eq!(enc(Key::Home, Modifiers::NONE), b"\x1b[H");
        assert_eq!(enc(Key::End, Modifiers::NONE), b"\x1b[F");
        assert_eq!(enc(Key::Home, Modifiers::NONE), Sequence::HomeKey.to_bytes());
        assert_eq!(enc(Key::End, Modifiers::NONE), Sequence::EndKey.to_bytes());
        assert_eq!(enc(Key::PageUp, Modifiers::NONE), b"\x1b[5~");
        assert_eq!(enc(Key::PageDown, Modifiers::NONE), b"\x1b[6~");
        assert_eq!(enc(Key::Insert, Modifiers::NONE), b"\x1b[2~");
        assert_eq!(enc(Key::Delete, Modifiers::NONE), b"\x1b[3~");
    }

    #[test]
    fn function_keys() {
        assert_eq!(enc(Key::F(1), Modifiers::NONE), b"\x1bOP");
        assert_eq!(enc(Key::F(4), Modifiers::NONE), b"\x1bOS");
        assert_eq!(enc(Key::F(5), Modifiers::NONE), b"\x1b[15~");
        assert_eq!(enc(Key::F(11), Modifiers::NONE), b"\x1b[23~");
        assert_eq!(enc(Key::F(12), Modifiers::NONE), b"\x1b[24~");
        assert!(enc(Key::F(0), Modifiers::NONE).is_empty());
        assert!(enc(Key::F(13), Modifiers::NONE).is_empty());
    }

    #[test]
    fn backspace_is_configurable() {
        assert_eq!(enc(Key::Backspace, Modifiers::NONE), vec![0x7f]);
        let bs = KeyEncoder {
            backspace_sends_delete: false,
        };
        assert_eq!(bs.encode(Key::Backspace, Modifiers::NONE), vec![0x08]);

        let config = TerminalConfig {
            backspace_sends_delete: false,
            ..TerminalConfig::default()
        };
        assert_eq!(KeyEncoder::from_config(&config), bs);
    }

    #[test]
    fn tab_and_back_tab() {
        assert_eq!(enc(Key::Tab, Modifiers::NONE), b"\t");
        let shift = Modifiers {
            shift: true,
            ..Modifiers::NONE
        };
        assert_eq!(enc(Key::Tab, shift), b"\x1b[Z");
        assert_eq!(enc(Key::Escape, Modifiers::NONE), b"\x1b");
    }
}
