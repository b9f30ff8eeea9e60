//! Pairwise interval classification.

use super::pitch::{cents_between, PitchClass};

/// Interval names indexed by semitone distance, unison through octave.
pub const INTERVAL_NAMES: &[&str] = &[
    "unison",
    "minor 2nd",
    "major 2nd",
    "minor 3rd",
    "major 3rd",
    "perfect 4th",
    "tritone",
    "perfect 5th",
    "minor 6th",
    "major 6th",
    "minor 7th",
    "major 7th",
    "octave",
];

/// Semitone distances classified as harmonically stable.
const CONSONANT_SEMITONES: &[usize] = &[0, 3, 4, 5, 7, 8, 9, 12];

/// Classification of one consecutive note pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntervalResult {
    pub from: PitchClass,
    pub to: PitchClass,
    /// Directionless ascending distance, 0..=11.
    pub semitones: usize,
    pub name: &'static str,
    pub consonant: bool,
    /// Signed deviation between the two reference frequencies, in cents.
    pub cents: f64,
}

/// Ascending semitone distance from `a` to `b`, modulo 12.
pub fn semitones_between(a: PitchClass, b: PitchClass) -> usize {
    (b.index() + 12 - a.index()) % 12
}

/// Classify every consecutive pair in the note sequence. Fewer than two
/// notes yield no results.
pub fn classify_intervals(notes: &[PitchClass]) -> Vec<IntervalResult> {
    notes
        .windows(2)
        .map(|pair| {
            let (from, to) = (pair[0], pair[1]);
            let semitones = semitones_between(from, to);
            IntervalResult {
                from,
                to,
                semitones,
                name: INTERVAL_NAMES[semitones],
                consonant: CONSONANT_SEMITONES.contains(&semitones),
                cents: cents_between(from.frequency(), to.frequency()),
            }
        })
        .collect()
}
