mod color;
mod core;

pub use self::core::*;
pub use color::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_from_hex() {
        assert_eq!(Rgb::from_hex("#ff8800"), Some(Rgb::new(255, 136, 0)));
    }

    #[test]
    fn rgb_from_hex_no_hash() {
        assert_eq!(Rgb::from_hex("00ff00"), Some(Rgb::new(0, 255, 0)));
    }

    #[test]
    fn rgb_from_hex_invalid() {
        assert!(Rgb::from_hex("zzzzzz").is_none());
        assert!(Rgb::from_hex("#abc").is_none());
        assert!(Rgb::from_hex("#ff880080").is_none());
        assert!(Rgb::from_hex("").is_none());
    }

    #[test]
    fn rgb_to_hex() {
        assert_eq!(Rgb::new(255, 0, 128).to_hex(), "#ff0080");
    }

    #[test]
    fn rgb_serialization() {
        let c = Rgb::new(7, 8, 9);
        let json = serde_json::to_string(&c).unwrap();
        let back: Rgb = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }

    #[test]
    fn ansi_color_indices_follow_sgr_order() {
        for (i, color) in AnsiColor::ALL.iter().enumerate() {
            assert_eq!(color.index() as usize, i);
            assert_eq!(AnsiColor::from_index(i as u8), Some(*color));
        }
        assert_eq!(AnsiColor::from_index(8), None);
    }

    #[test]
    fn ansi_color_names() {
        assert_eq!(AnsiColor::Red.to_string(), "red");
        let json = serde_json::to_string(&AnsiColor::Magenta).unwrap();
        assert_eq!(json, "\"magenta\"");
    }
}
