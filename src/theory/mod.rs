//! Fixed music-theory tables and the classifiers built on them.
//!
//! Every table in this module is immutable, process-wide data. The
//! classifiers are pure functions over those tables; nothing here touches
//! the network, the environment, or the clock.

mod chord;
mod dynamics;
mod instrument;
mod interval;
mod pitch;
mod scale;
mod sentiment;
mod tempo;

pub use chord::{match_chord, ChordMatch, ChordQuality};
pub use dynamics::{DynamicMark, DynamicsInfo, DYNAMIC_MARKS};
pub use instrument::{
    balance_flags, group_by_section, BalanceFlags, InstrumentFact, Section, Voice,
    INSTRUMENT_TABLE,
};
pub use interval::{classify_intervals, semitones_between, IntervalResult, INTERVAL_NAMES};
pub use pitch::{cents_between, resolve_spelling, PitchClass, NOTE_TABLE};
pub use scale::{detect_key, scale_notes, KeyMatch, ScaleReference, SCALE_PATTERNS};
pub use sentiment::{feedback_for, tag_for_word, FEEDBACK_LINES, SENTIMENT_WORDS};
pub use tempo::{resolve_tempo, TempoInfo, TEMPO_MARKS};
