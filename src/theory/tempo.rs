//! Tempo marking resolution and beat timing.

/// Tempo markings with their BPM ranges. Definition order is the search
/// order, so the first containing range wins for an explicit BPM.
pub const TEMPO_MARKS: &[(&str, (u32, u32))] = &[
    ("largo", (40, 60)),
    ("adagio", (60, 80)),
    ("andante", (80, 100)),
    ("moderato", (100, 120)),
    ("allegro", (120, 160)),
    ("vivace", (160, 180)),
    ("presto", (180, 220)),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TempoInfo {
    pub name: &'static str,
    pub bpm: u32,
    /// Whether the BPM came from an explicit `<digits> bpm` token rather
    /// than a range midpoint.
    pub explicit: bool,
    /// `60000 / bpm`, rounded to the millisecond.
    pub beat_ms: u32,
    /// One quarter of the beat, rounded to the millisecond.
    pub subdivision_ms: u32,
}

/// Resolve a tempo from the lowercased text and an optional explicit BPM.
///
/// The first marking found by substring search names the tempo with its
/// range midpoint as the estimate. An explicit BPM always overrides the
/// estimate, and re-names the tempo to the first range containing it; when
/// no range contains it, a word-matched name is kept as-is. Without any
/// resolved name there is no tempo at all.
pub fn resolve_tempo(lower: &str, explicit_bpm: Option<u32>) -> Option<TempoInfo> {
    let mut name: Option<&'static str> = None;
    for (mark, _) in TEMPO_MARKS {
        if lower.contains(mark) {
            name = Some(*mark);
            break;
        }
    }
    let mut bpm = name.and_then(midpoint_for);
    let mut explicit = false;

    if let Some(value) = explicit_bpm {
        for (mark, (lo, hi)) in TEMPO_MARKS {
            if (*lo..=*hi).contains(&value) {
                name = Some(*mark);
                break;
            }
        }
        bpm = Some(value);
        explicit = true;
    }

    let name = name?;
    let bpm = bpm?;
    let beat_ms = (60_000.0 / bpm as f64).round() as u32;
    let subdivision_ms = (beat_ms as f64 / 4.0).round() as u32;
    Some(TempoInfo {
        name,
        bpm,
        explicit,
        beat_ms,
        subdivision_ms,
    })
}

fn midpoint_for(name: &str) -> Option<u32> {
    TEMPO_MARKS
        .iter()
        .find(|(mark, _)| *mark == name)
        .map(|(_, (lo, hi))| (lo + hi) / 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marking_uses_range_midpoint() {
        let tempo = resolve_tempo("take it allegro please", None).unwrap();
        assert_eq!(tempo.name, "allegro");
        assert_eq!(tempo.bpm, 140);
        assert!(!tempo.explicit);
        assert!((120..=160).contains(&tempo.bpm));
    }

    #[test]
    fn explicit_bpm_names_and_overrides() {
        let tempo = resolve_tempo("set it to 150 bpm", Some(150)).unwrap();
        assert_eq!(tempo.name, "allegro");
        assert_eq!(tempo.bpm, 150);
        assert!(tempo.explicit);
        assert_eq!(tempo.beat_ms, 400);
        assert_eq!(tempo.subdivision_ms, 100);
    }

    #[test]
    fn boundary_bpm_takes_the_first_range() {
        // 60 sits in both largo (40-60) and adagio (60-80).
        let tempo = resolve_tempo("60 bpm", Some(60)).unwrap();
        assert_eq!(tempo.name, "largo");
    }

    #[test]
    fn out_of_range_bpm_keeps_the_word_name() {
        let tempo = resolve_tempo("allegro at 500 bpm", Some(500)).unwrap();
        assert_eq!(tempo.name, "allegro");
        assert_eq!(tempo.bpm, 500);
    }

    #[test]
    fn out_of_range_bpm_alone_resolves_nothing() {
        assert!(resolve_tempo("500 bpm", Some(500)).is_none());
    }

    #[test]
    fn no_marking_no_tempo() {
        assert!(resolve_tempo("just some words", None).is_none());
    }
}
