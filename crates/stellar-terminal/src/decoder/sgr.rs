//! SGR (Select Graphic Rendition) handling.

use stellar_common::Rgb;
use tracing::trace;

use super::params::Params;
use super::parser::Decoder;

impl Decoder {
    /// Apply SGR parameters to the current style. No parameters is SGR 0.
    pub(super) fn apply_sgr(&mut self, params: &Params) {
        if params.is_empty() {
            self.style = self.colors.default_style();
            return;
        }

        let groups = params.groups();
        let mut i = 0;
        while i < groups.len() {
            let group = &groups[i];
            let code = group.first().copied().unwrap_or(0);
            match code {
                0 => self.style = self.colors.default_style(),
                1 => self.style.bold = true,
                3 => self.style.italic = true,
                4 => self.style.underline = true,
                22 => self.style.bold = false,
                23 => self.style.italic = false,
                24 => self.style.underline = false,
                30..=37 => self.style.fg = self.colors.indexed((code - 30) as u8),
                39 => self.style.fg = self.colors.default_fg(),
                40..=47 => self.style.bg = self.colors.indexed((code - 40) as u8),
                49 => self.style.bg = self.colors.default_bg(),
                90..=97 => self.style.fg = self.colors.indexed((code - 90 + 8) as u8),
                100..=107 => self.style.bg = self.colors.indexed((code - 100 + 8) as u8),
                38 | 48 => {
                    let color = if group.len() > 1 {
                        self.extended_from_subparams(&group[1..])
                    } else {
                        let (color, used) = self.extended_from_params(&groups[i + 1..]);
                        i += used;
                        color
                    };
                    match (code, color) {
                        (38, Some(c)) => self.style.fg = c,
                        (_, Some(c)) => self.style.bg = c,
                        (_, None) => trace!(code, "incomplete extended color"),
                    }
                }
                _ => trace!("unhandled SGR code: {code}"),
            }
            i += 1;
        }
    }

    /// `38;5;n` / `38;2;r;g;b` spread over separate groups. Returns the
    /// color and how many groups after the 38/48 were consumed.
    fn extended_from_params(&self, rest: &[Vec<u16>]) -> (Option<Rgb>, usize) {
        let value = |j: usize| rest.get(j).and_then(|g| g.first()).copied();
        match value(0) {
            Some(5) => match value(1) {
                Some(n) => (Some(self.colors.indexed(to_u8(n))), 2),
                None => (None, 1),
            },
            Some(2) => match (value(1), value(2), value(3)) {
                (Some(r), Some(g), Some(b)) => (Some(Rgb::new(to_u8(r), to_u8(g), to_u8(b))), 4),
                _ => (None, rest.len()),
            },
            Some(_) => (None, 1),
            None => (None, 0),
        }
    }

    /// `38:5:n`, `38:2:r:g:b` and `38:2:<space>:r:g:b` inside one group.
    fn extended_from_subparams(&self, sub: &[u16]) -> Option<Rgb> {
        match sub {
            [5, n, ..] => Some(self.colors.indexed(to_u8(*n))),
            [2, r, g, b] => Some(Rgb::new(to_u8(*r), to_u8(*g), to_u8(*b))),
            [2, _, r, g, b, ..] => Some(Rgb::new(to_u8(*r), to_u8(*g), to_u8(*b))),
            _ => None,
        }
    }
}

fn to_u8(value: u16) -> u8 {
    value.min(u16::from(u8::MAX)) as u8
}
