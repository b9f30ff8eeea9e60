//! Canonical pitch classes and their reference frequencies.

/// Sharp-based note names with their reference frequencies in Hz.
///
/// Slice position defines the chromatic index of each pitch class. The
/// frequencies are an authoritative lookup, not computed from equal
/// temperament (they approximate it, but the table is the source of truth).
pub const NOTE_TABLE: &[(&str, f64)] = &[
    ("C", 261.63),
    ("C#", 277.18),
    ("D", 293.66),
    ("D#", 311.13),
    ("E", 329.63),
    ("F", 349.23),
    ("F#", 369.99),
    ("G", 392.00),
    ("G#", 415.30),
    ("A", 440.00),
    ("A#", 466.16),
    ("B", 493.88),
];

/// One of the 12 chromatic pitch classes, octave-independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PitchClass(usize);

impl PitchClass {
    /// Look up a canonical sharp-based name, e.g. `"C#"`.
    pub fn from_name(name: &str) -> Option<PitchClass> {
        NOTE_TABLE
            .iter()
            .position(|(n, _)| *n == name)
            .map(PitchClass)
    }

    /// Chromatic index, reduced modulo 12.
    pub fn from_index(index: usize) -> PitchClass {
        PitchClass(index % NOTE_TABLE.len())
    }

    pub fn index(self) -> usize {
        self.0
    }

    pub fn name(self) -> &'static str {
        NOTE_TABLE[self.0].0
    }

    /// Reference frequency in Hz from the fixed table.
    pub fn frequency(self) -> f64 {
        NOTE_TABLE[self.0].1
    }

    pub fn transposed(self, semitones: usize) -> PitchClass {
        PitchClass::from_index(self.0 + semitones)
    }
}

impl std::fmt::Display for PitchClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolve a spelled note (letter plus optional accidental) to its canonical
/// sharp-based pitch class.
///
/// Sharps are resolved by name lookup, so spellings like `E#` that have no
/// table entry are dropped. Flats shift the natural letter's index down one
/// semitone; a shift below the bottom of the table (`Cb`) is dropped rather
/// than wrapped.
pub fn resolve_spelling(letter: char, accidental: Option<char>) -> Option<PitchClass> {
    let natural = letter.to_ascii_uppercase();
    if !('A'..='G').contains(&natural) {
        return None;
    }
    match accidental {
        None => PitchClass::from_name(&natural.to_string()),
        Some('#') => PitchClass::from_name(&format!("{}#", natural)),
        Some('b') => {
            let natural = PitchClass::from_name(&natural.to_string())?;
            natural.index().checked_sub(1).map(PitchClass)
        }
        Some(_) => None,
    }
}

/// Cents deviation from `f1` to `f2`: `1200 * log2(f2 / f1)`, rounded
/// half-away-from-zero to one decimal. Returns 0.0 when either frequency is
/// non-positive (not reachable through the fixed table, but the log domain
/// is guarded anyway).
pub fn cents_between(f1: f64, f2: f64) -> f64 {
    if f1 <= 0.0 || f2 <= 0.0 {
        return 0.0;
    }
    let cents = 1200.0 * (f2 / f1).log2();
    (cents * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_order_is_chromatic() {
        assert_eq!(NOTE_TABLE.len(), 12);
        assert_eq!(PitchClass::from_name("C").unwrap().index(), 0);
        assert_eq!(PitchClass::from_name("B").unwrap().index(), 11);
        assert_eq!(PitchClass::from_index(13).name(), "C#");
    }

    #[test]
    fn flats_normalize_to_sharp_names() {
        assert_eq!(resolve_spelling('E', Some('b')).unwrap().name(), "D#");
        assert_eq!(resolve_spelling('b', Some('b')).unwrap().name(), "A#");
        assert_eq!(resolve_spelling('F', Some('b')).unwrap().name(), "E");
    }

    #[test]
    fn invalid_spellings_are_dropped() {
        // Cb would shift below the table, E#/B# have no entry.
        assert!(resolve_spelling('C', Some('b')).is_none());
        assert!(resolve_spelling('E', Some('#')).is_none());
        assert!(resolve_spelling('B', Some('#')).is_none());
        assert!(resolve_spelling('H', None).is_none());
    }

    #[test]
    fn cents_is_antisymmetric() {
        for (_, f1) in NOTE_TABLE {
            for (_, f2) in NOTE_TABLE {
                let forward = cents_between(*f1, *f2);
                let backward = cents_between(*f2, *f1);
                assert!((forward + backward).abs() <= 0.1);
            }
        }
    }

    #[test]
    fn cents_guards_non_positive_frequencies() {
        assert_eq!(cents_between(0.0, 440.0), 0.0);
        assert_eq!(cents_between(440.0, -1.0), 0.0);
    }

    #[test]
    fn cents_octave_is_1200() {
        assert_eq!(cents_between(220.0, 440.0), 1200.0);
    }
}
