//! The local analysis engine: a pure, total function of its input string.
//!
//! `analyze` never fails, never touches the network or the environment, and
//! holds no state across calls, so the transport may run it concurrently
//! without coordination.

mod report;
mod tokenizer;

pub use tokenizer::{tokenize, ParsedInput};

/// Fixed greeting for empty or whitespace-only input.
pub const WELCOME_MESSAGE: &str = "Welcome to the conductor's desk. Enter notes (e.g. C E G), \
a tempo marking (e.g. allegro or 120 bpm), dynamics (pp, ff), instrument names, or describe \
the performance for feedback.";

/// Analyze one request and render the report. Total: every input, including
/// empty, malformed, or adversarial text, produces a valid report.
pub fn analyze(input: &str) -> String {
    let text = input.trim();
    if text.is_empty() {
        return WELCOME_MESSAGE.to_string();
    }
    report::render(&tokenize(text), text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_the_welcome_message() {
        assert_eq!(analyze(""), WELCOME_MESSAGE);
        assert_eq!(analyze("   \n\t "), WELCOME_MESSAGE);
        // Idempotent under repeated calls.
        assert_eq!(analyze(""), analyze(""));
    }

    #[test]
    fn analysis_is_deterministic() {
        let input = "C E G allegro ff trumpet violin";
        assert_eq!(analyze(input), analyze(input));
    }

    #[test]
    fn enharmonic_spellings_classify_by_pitch_class() {
        // Eb normalizes to D#; both spellings produce the same report.
        assert_eq!(analyze("C# Eb G"), analyze("C# D# G"));
        assert!(analyze("C# Eb G").contains("Notes: C#, D#, G"));
    }

    #[test]
    fn explicit_bpm_is_reported_exactly() {
        let output = analyze("150 bpm");
        assert!(output.contains("Allegro - 150 BPM"));
        assert!(!output.contains("~"));
    }

    #[test]
    fn marking_bpm_is_an_estimate_in_range() {
        let output = analyze("allegro");
        assert!(output.contains("Allegro - ~140 BPM"));
    }

    #[test]
    fn never_returns_an_empty_string() {
        for input in ["", "....", "zzz", "\u{1F3BB}", "42", "bpm"] {
            assert!(!analyze(input).is_empty(), "empty report for {:?}", input);
        }
    }
}
