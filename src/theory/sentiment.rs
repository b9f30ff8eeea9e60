//! Sentiment words and the prescriptive feedback they map to.

/// Qualitative words mapped to sentiment tags.
pub const SENTIMENT_WORDS: &[(&str, &str)] = &[
    ("beautiful", "positive"),
    ("great", "positive"),
    ("good", "positive"),
    ("bad", "negative"),
    ("wrong", "negative"),
    ("off", "negative"),
    ("sharp", "sharp"),
    ("flat", "flat"),
    ("fast", "fast"),
    ("slow", "slow"),
    ("loud", "loud"),
    ("soft", "soft"),
    ("quiet", "soft"),
];

/// One feedback line per sentiment tag.
pub const FEEDBACK_LINES: &[(&str, &str)] = &[
    ("positive", "Performance sounds good - maintain the current approach"),
    (
        "negative",
        "Issues noted - isolate the problem sections and drill them slowly",
    ),
    (
        "sharp",
        "Sharp intonation - relax the embouchure or extend the tuning slide",
    ),
    (
        "flat",
        "Flat intonation - increase air support or shorten the tuning length",
    ),
    (
        "fast",
        "Rushing detected - use a metronome and internalize the subdivision",
    ),
    (
        "slow",
        "Dragging detected - listen to the pulse and stay slightly ahead",
    ),
    ("loud", "Dynamic too loud - back off and listen to the ensemble"),
    ("soft", "Dynamic too soft - project more while keeping tone quality"),
];

/// Tag for a single lowercased word, if it is a sentiment word.
pub fn tag_for_word(word: &str) -> Option<&'static str> {
    SENTIMENT_WORDS
        .iter()
        .find(|(sentiment, _)| *sentiment == word)
        .map(|(_, tag)| *tag)
}

pub fn feedback_for(tag: &str) -> Option<&'static str> {
    FEEDBACK_LINES
        .iter()
        .find(|(candidate, _)| *candidate == tag)
        .map(|(_, line)| *line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_tag_has_a_feedback_line() {
        for (_, tag) in SENTIMENT_WORDS {
            assert!(feedback_for(tag).is_some(), "missing feedback for {}", tag);
        }
    }

    #[test]
    fn synonyms_share_a_tag() {
        assert_eq!(tag_for_word("quiet"), Some("soft"));
        assert_eq!(tag_for_word("soft"), Some("soft"));
        assert_eq!(tag_for_word("metronome"), None);
    }
}
