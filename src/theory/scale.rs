//! Scale patterns, best-fit key detection, and scale references.

use lazy_static::lazy_static;
use regex::Regex;

use super::pitch::PitchClass;

/// Named scale patterns: semitone offsets from the root. Table order is the
/// inner iteration order of the key search, so it is part of the tie-break.
pub const SCALE_PATTERNS: &[(&str, &[usize])] = &[
    ("major", &[0, 2, 4, 5, 7, 9, 11]),
    ("natural minor", &[0, 2, 3, 5, 7, 8, 10]),
    ("harmonic minor", &[0, 2, 3, 5, 7, 8, 11]),
    ("melodic minor", &[0, 2, 3, 5, 7, 9, 11]),
    ("dorian", &[0, 2, 3, 5, 7, 9, 10]),
    ("phrygian", &[0, 1, 3, 5, 7, 8, 10]),
    ("lydian", &[0, 2, 4, 6, 7, 9, 11]),
    ("mixolydian", &[0, 2, 4, 5, 7, 9, 10]),
    ("locrian", &[0, 1, 3, 5, 6, 8, 10]),
    ("major pentatonic", &[0, 2, 4, 7, 9]),
    ("minor pentatonic", &[0, 3, 5, 7, 10]),
    ("blues", &[0, 3, 5, 6, 7, 10]),
];

/// Best-scoring (root, scale) pair for a set of pitch classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyMatch {
    pub root: PitchClass,
    pub scale: &'static str,
    /// Input pitch classes covered by the winning pattern.
    pub matched: usize,
    /// Distinct pitch classes in the input.
    pub distinct: usize,
    /// `round(matched / distinct * 100)`.
    pub confidence: u32,
}

fn pattern_mask(root: usize, pattern: &[usize]) -> u16 {
    pattern
        .iter()
        .fold(0u16, |mask, offset| mask | 1 << ((root + offset) % 12))
}

/// Brute-force search over all 12 roots and every scale pattern. Needs at
/// least 3 distinct pitch classes. Candidates are replaced only on strict
/// score improvement, so ties keep the first-enumerated pair (root outer,
/// table order inner).
pub fn detect_key(notes: &[PitchClass]) -> Option<KeyMatch> {
    let input_mask = notes
        .iter()
        .fold(0u16, |mask, note| mask | 1 << note.index());
    let distinct = input_mask.count_ones() as usize;
    if distinct < 3 {
        return None;
    }

    let mut best: Option<(usize, &'static str, usize)> = None;
    for root in 0..12 {
        for (name, pattern) in SCALE_PATTERNS {
            let score = (input_mask & pattern_mask(root, pattern)).count_ones() as usize;
            if best.map_or(true, |(_, _, top)| score > top) {
                best = Some((root, *name, score));
            }
        }
    }

    let (root, scale, matched) = best?;
    Some(KeyMatch {
        root: PitchClass::from_index(root),
        scale,
        matched,
        distinct,
        confidence: (matched as f64 / distinct as f64 * 100.0).round() as u32,
    })
}

/// Notes of a scale: the root transposed by each pattern offset.
pub fn scale_notes(root: PitchClass, pattern: &[usize]) -> Vec<PitchClass> {
    pattern.iter().map(|offset| root.transposed(*offset)).collect()
}

lazy_static! {
    // Root letter with optional sharp, optional space, then a scale-type
    // word. Longer names come first so "major pentatonic" is not cut down
    // to "major".
    static ref SCALE_REFERENCE_RE: Regex = Regex::new(
        r"(?i)\b([a-g]#?)\s?(harmonic minor|melodic minor|natural minor|major pentatonic|minor pentatonic|mixolydian|phrygian|dorian|lydian|locrian|blues|major|minor)\b",
    )
    .unwrap();
}

/// A scale named directly in the input, e.g. `"Cmajor"` or `"f# dorian"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaleReference {
    pub root: PitchClass,
    pub name: &'static str,
    pub pattern: &'static [usize],
}

impl ScaleReference {
    /// First scale reference found in the text, if any.
    pub fn parse(text: &str) -> Option<ScaleReference> {
        let captures = SCALE_REFERENCE_RE.captures(text)?;
        let root = PitchClass::from_name(&captures[1].to_uppercase())?;
        let spelled = captures[2].to_lowercase();
        // A bare "minor" means the natural minor pattern.
        let wanted = if spelled == "minor" { "natural minor" } else { &spelled };
        let (name, pattern) = *SCALE_PATTERNS.iter().find(|(name, _)| *name == wanted)?;
        Some(ScaleReference {
            root,
            name,
            pattern,
        })
    }

    pub fn notes(&self) -> Vec<PitchClass> {
        scale_notes(self.root, self.pattern)
    }

    /// Relative major/minor root, defined only for major and natural minor.
    pub fn relative(&self) -> Option<(&'static str, PitchClass)> {
        match self.name {
            "major" => Some(("relative minor", self.root.transposed(9))),
            "natural minor" => Some(("relative major", self.root.transposed(3))),
            _ => None,
        }
    }
}
