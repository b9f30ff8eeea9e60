//! Dynamic markings and hairpin flags.

/// The eight dynamic symbols with their full names and loudness levels.
pub const DYNAMIC_MARKS: &[(&str, &str, u8)] = &[
    ("ppp", "pianississimo", 1),
    ("pp", "pianissimo", 2),
    ("p", "piano", 3),
    ("mp", "mezzo-piano", 4),
    ("mf", "mezzo-forte", 5),
    ("f", "forte", 6),
    ("ff", "fortissimo", 7),
    ("fff", "fortississimo", 8),
];

/// One matched dynamic symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DynamicMark {
    pub symbol: &'static str,
    pub full_name: &'static str,
    /// Relative loudness, 1 (ppp) to 8 (fff).
    pub level: u8,
}

impl DynamicMark {
    pub fn from_table_index(index: usize) -> DynamicMark {
        let (symbol, full_name, level) = DYNAMIC_MARKS[index];
        DynamicMark {
            symbol,
            full_name,
            level,
        }
    }
}

/// Dynamics facts for one request. The hairpin flags are independent
/// booleans, not mutually exclusive with the marks or each other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DynamicsInfo {
    /// Matched marks, ordered by first appearance in the text.
    pub marks: Vec<DynamicMark>,
    pub crescendo: bool,
    pub decrescendo: bool,
}

impl DynamicsInfo {
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty() && !self.crescendo && !self.decrescendo
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_cover_one_through_eight() {
        let levels: Vec<u8> = DYNAMIC_MARKS.iter().map(|(_, _, level)| *level).collect();
        assert_eq!(levels, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn empty_means_no_marks_and_no_hairpins() {
        assert!(DynamicsInfo::default().is_empty());
        let crescendo_only = DynamicsInfo {
            crescendo: true,
            ..Default::default()
        };
        assert!(!crescendo_only.is_empty());
    }
}
