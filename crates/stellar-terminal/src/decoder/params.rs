//! CSI parameter lists.

/// Parameter groups beyond this many are ignored.
pub const MAX_PARAMS: usize = 32;

/// Parsed CSI parameters: `;` separates groups, `:` separates
/// sub-parameters inside a group. Empty values read as 0; values saturate
/// at `u16::MAX`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    groups: Vec<Vec<u16>>,
}

impl Params {
    /// `text` holds only digits, `;` and `:`.
    pub fn parse(text: &str) -> Self {
        if text.is_empty() {
            return Self::default();
        }
        let groups = text
            .split(';')
            .take(MAX_PARAMS)
            .map(|group| group.split(':').map(parse_value).collect())
            .collect();
        Self { groups }
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn groups(&self) -> &[Vec<u16>] {
        &self.groups
    }

    /// First value of group `i`, 0 when absent.
    pub fn get(&self, i: usize) -> u16 {
        self.groups
            .get(i)
            .and_then(|g| g.first())
            .copied()
            .unwrap_or(0)
    }

    /// Group `i` as a repeat count: absent or 0 means 1.
    pub fn count(&self, i: usize) -> u16 {
        self.get(i).max(1)
    }

    /// Group `i` as a 1-based coordinate, returned 0-based.
    pub fn coordinate(&self, i: usize) -> u16 {
        self.count(i) - 1
    }

    /// First values of every group.
    pub fn iter(&self) -> impl Iterator<Item = u16> + '_ {
        self.groups.iter().map(|g| g.first().copied().unwrap_or(0))
    }
}

fn parse_value(digits: &str) -> u16 {
    digits.bytes().fold(0u16, |acc, b| {
        acc.saturating_mul(10).saturating_add(u16::from(b - b'0'))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_has_no_groups() {
        let p = Params::parse("");
        assert!(p.is_empty());
        assert_eq!(p.get(0), 0);
        assert_eq!(p.count(0), 1);
    }

    #[test]
    fn empty_fields_read_as_zero() {
        let p = Params::parse(";5");
        assert_eq!(p.len(), 2);
        assert_eq!(p.get(0), 0);
        assert_eq!(p.get(1), 5);
        assert_eq!(p.coordinate(0), 0);
        assert_eq!(p.coordinate(1), 4);
    }

    #[test]
    fn colon_subparams_stay_grouped() {
        let p = Params::parse("38:2::10:20:30;1");
        assert_eq!(p.groups()[0], vec![38, 2, 0, 10, 20, 30]);
        assert_eq!(p.get(1), 1);
    }

    #[test]
    fn values_saturate() {
        let p = Params::parse("99999999999");
        assert_eq!(p.get(0), u16::MAX);
    }

    #[test]
    fn group_count_is_capped() {
        let text = vec!["1"; 100].join(";");
        assert_eq!(Params::parse(&text).len(), MAX_PARAMS);
    }
}
