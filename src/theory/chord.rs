//! Chord identification from pitch-class offsets.

use super::interval::semitones_between;
use super::pitch::PitchClass;

/// Named chord signatures: sorted distinct semitone offsets from the root.
const CHORD_SIGNATURES: &[(&str, &[usize])] = &[
    ("major", &[0, 4, 7]),
    ("minor", &[0, 3, 7]),
    ("diminished", &[0, 3, 6]),
    ("augmented", &[0, 4, 8]),
    ("major 7th", &[0, 4, 7, 11]),
    ("dominant 7th", &[0, 4, 7, 10]),
    ("minor 7th", &[0, 3, 7, 10]),
    ("diminished 7th", &[0, 3, 6, 9]),
    ("half-diminished 7th", &[0, 3, 6, 10]),
    ("6th", &[0, 4, 7, 9]),
    ("sus2", &[0, 2, 7]),
    ("sus4", &[0, 5, 7]),
    ("add9", &[0, 2, 4, 7]),
];

/// Coarse fallback on the first two stacked intervals when no signature
/// matches exactly.
const TRIAD_OUTLINES: &[((usize, usize), &str)] = &[
    ((4, 3), "major triad"),
    ((3, 4), "minor triad"),
    ((3, 3), "diminished triad"),
    ((4, 4), "augmented triad"),
];

/// How confidently a voicing was identified. The signature table is always
/// checked before the two-interval outline heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChordQuality {
    /// Offsets matched a signature exactly.
    Exact(&'static str),
    /// Only the first two stacked intervals matched a triad shape.
    Heuristic(&'static str),
    Unclassified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChordMatch {
    /// The first note of the sequence labels the chord.
    pub root: PitchClass,
    pub quality: ChordQuality,
}

/// Identify a chord from the first three or four notes of the sequence.
/// Needs at least three notes; anything past the fourth note is ignored.
pub fn match_chord(notes: &[PitchClass]) -> Option<ChordMatch> {
    if notes.len() < 3 {
        return None;
    }
    let head = &notes[..notes.len().min(4)];
    let root = head[0];

    let mut offsets: Vec<usize> = head.iter().map(|n| semitones_between(root, *n)).collect();
    offsets.sort_unstable();
    offsets.dedup();

    if let Some((name, _)) = CHORD_SIGNATURES
        .iter()
        .find(|(_, signature)| *signature == offsets.as_slice())
    {
        return Some(ChordMatch {
            root,
            quality: ChordQuality::Exact(*name),
        });
    }

    let deltas = (
        semitones_between(head[0], head[1]),
        semitones_between(head[1], head[2]),
    );
    let quality = TRIAD_OUTLINES
        .iter()
        .find(|(shape, _)| *shape == deltas)
        .map(|(_, name)| ChordQuality::Heuristic(*name))
        .unwrap_or(ChordQuality::Unclassified);

    Some(ChordMatch { root, quality })
}
