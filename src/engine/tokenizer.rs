//! Extraction of musical entities from raw text.

use lazy_static::lazy_static;
use regex::Regex;

use crate::theory::{
    resolve_spelling, resolve_tempo, tag_for_word, DynamicMark, DynamicsInfo, InstrumentFact,
    PitchClass, TempoInfo, DYNAMIC_MARKS, INSTRUMENT_TABLE,
};

lazy_static! {
    // A note token is a whole word: letter, optional accidental, optional
    // digit (the digit is matched but unused). The accidental stays
    // case-sensitive so "AB" is not read as A-flat.
    static ref NOTE_TOKEN_RE: Regex = Regex::new(r"^([A-Ga-g])([#b])?[0-9]?$").unwrap();
    static ref EXPLICIT_BPM_RE: Regex = Regex::new(r"(\d+)\s*bpm").unwrap();
    static ref DYNAMIC_MARK_RES: Vec<Regex> = DYNAMIC_MARKS
        .iter()
        .map(|(symbol, _, _)| Regex::new(&format!(r"(?i)\b{}\b", symbol)).unwrap())
        .collect();
    // Stem-anchored so "decrescendo" does not raise the crescendo flag,
    // and "dim" as a whole word does not swallow "diminished".
    static ref CRESCENDO_RE: Regex = Regex::new(r"(?i)\bcresc").unwrap();
    static ref DECRESCENDO_RE: Regex =
        Regex::new(r"(?i)\bdecresc|\bdiminuendo|\bdim\b").unwrap();
}

/// Everything extracted from one request. Built fresh per request and never
/// mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct ParsedInput {
    /// Notes in order of appearance, duplicates kept.
    pub notes: Vec<PitchClass>,
    pub tempo: Option<TempoInfo>,
    pub dynamics: DynamicsInfo,
    /// Deduplicated by table key, in table order.
    pub instruments: Vec<InstrumentFact>,
    /// Sentiment tags, deduplicated, in order of first encounter.
    pub sentiments: Vec<&'static str>,
}

impl ParsedInput {
    /// True when no notes, tempo, dynamics, or instruments were found; the
    /// report's fallback block is gated on this.
    pub fn is_structurally_empty(&self) -> bool {
        self.notes.is_empty()
            && self.tempo.is_none()
            && self.dynamics.is_empty()
            && self.instruments.is_empty()
    }
}

/// Tokenize one request. Never fails; unrecognized fragments are simply
/// absent from the result.
pub fn tokenize(text: &str) -> ParsedInput {
    let lower = text.to_lowercase();
    ParsedInput {
        notes: extract_notes(text),
        tempo: extract_tempo(&lower),
        dynamics: extract_dynamics(text),
        instruments: extract_instruments(&lower),
        sentiments: extract_sentiments(&lower),
    }
}

fn trim_punctuation(word: &str) -> &str {
    word.trim_matches(|c: char| !c.is_ascii_alphanumeric() && c != '#')
}

fn extract_notes(text: &str) -> Vec<PitchClass> {
    text.split_whitespace()
        .filter_map(|word| {
            let captures = NOTE_TOKEN_RE.captures(trim_punctuation(word))?;
            let letter = captures[1].chars().next()?;
            let accidental = captures.get(2).and_then(|m| m.as_str().chars().next());
            resolve_spelling(letter, accidental)
        })
        .collect()
}

fn extract_tempo(lower: &str) -> Option<TempoInfo> {
    let explicit_bpm = EXPLICIT_BPM_RE
        .captures(lower)
        .and_then(|captures| captures[1].parse::<u32>().ok());
    resolve_tempo(lower, explicit_bpm)
}

fn extract_dynamics(text: &str) -> DynamicsInfo {
    let mut found: Vec<(usize, usize)> = DYNAMIC_MARK_RES
        .iter()
        .enumerate()
        .filter_map(|(index, pattern)| pattern.find(text).map(|m| (m.start(), index)))
        .collect();
    found.sort_unstable();

    DynamicsInfo {
        marks: found
            .into_iter()
            .map(|(_, index)| DynamicMark::from_table_index(index))
            .collect(),
        crescendo: CRESCENDO_RE.is_match(text),
        decrescendo: DECRESCENDO_RE.is_match(text),
    }
}

fn extract_instruments(lower: &str) -> Vec<InstrumentFact> {
    INSTRUMENT_TABLE
        .iter()
        .enumerate()
        .filter(|(_, (name, _, _, _))| lower.contains(name))
        .map(|(index, _)| InstrumentFact::from_table_index(index))
        .collect()
}

fn extract_sentiments(lower: &str) -> Vec<&'static str> {
    let mut tags = Vec::new();
    for word in lower.split_whitespace() {
        if let Some(tag) = tag_for_word(word.trim_matches(|c: char| !c.is_ascii_alphabetic())) {
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }
    }
    tags
}
