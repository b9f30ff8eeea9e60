//! Report assembly: an ordered pipeline of analyzers, each appending a
//! section when it has something to say, with a gated fallback at the end.

use crate::theory::{
    balance_flags, classify_intervals, detect_key, feedback_for, group_by_section, match_chord,
    ChordQuality, DynamicsInfo, InstrumentFact, IntervalResult, PitchClass, ScaleReference,
    TempoInfo,
};

use super::tokenizer::ParsedInput;

struct Section {
    title: &'static str,
    lines: Vec<String>,
}

impl Section {
    fn new(title: &'static str) -> Section {
        Section {
            title,
            lines: Vec::new(),
        }
    }

    fn line(&mut self, text: impl Into<String>) {
        self.lines.push(text.into());
    }
}

/// Render the full report for one tokenized request. Always produces a
/// non-empty string.
pub(crate) fn render(parsed: &ParsedInput, raw: &str) -> String {
    let mut sections: Vec<Section> = Vec::new();

    if !parsed.notes.is_empty() {
        sections.push(pitch_section(&parsed.notes));
        let intervals = classify_intervals(&parsed.notes);
        if !intervals.is_empty() {
            sections.push(interval_section(&intervals));
        }
        if parsed.notes.len() >= 3 {
            sections.push(harmony_section(&parsed.notes));
        }
        sections.push(conductor_notes_section(&parsed.notes));
    }

    if let Some(tempo) = &parsed.tempo {
        sections.push(tempo_section(tempo));
    }

    if !parsed.dynamics.is_empty() {
        sections.push(dynamics_section(&parsed.dynamics));
    }

    if !parsed.instruments.is_empty() {
        sections.push(instrumentation_section(&parsed.instruments));
    }

    // The fallback block runs only when no structural analyzer had output.
    if parsed.is_structurally_empty() {
        if let Some(reference) = ScaleReference::parse(raw) {
            sections.push(scale_reference_section(&reference));
        }
        if !parsed.sentiments.is_empty() {
            sections.push(feedback_section(&parsed.sentiments));
        }
        if sections.is_empty() {
            sections.push(suggestions_section());
        }
    }

    serialize(&sections)
}

fn serialize(sections: &[Section]) -> String {
    sections
        .iter()
        .map(|section| {
            let header = format!("{:=<44}", format!("== {} ", section.title));
            format!("{}\n{}", header, section.lines.join("\n"))
        })
        .collect::<Vec<String>>()
        .join("\n\n")
}

fn joined_names(notes: &[PitchClass]) -> String {
    notes
        .iter()
        .map(|note| note.name().to_string())
        .collect::<Vec<String>>()
        .join(", ")
}

fn joined_frequencies(notes: &[PitchClass]) -> String {
    notes
        .iter()
        .map(|note| format!("{:.1}", note.frequency()))
        .collect::<Vec<String>>()
        .join(", ")
}

fn capitalized(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn pitch_section(notes: &[PitchClass]) -> Section {
    let mut section = Section::new("Pitch");
    section.line(format!("Notes: {}", joined_names(notes)));
    section.line(format!("Frequencies (Hz): {}", joined_frequencies(notes)));
    section
}

fn interval_section(intervals: &[IntervalResult]) -> Section {
    let mut section = Section::new("Intervals");
    for result in intervals {
        section.line(format!(
            "{} -> {}: {} ({} semitones, {}, {:+.1} cents)",
            result.from,
            result.to,
            result.name,
            result.semitones,
            if result.consonant {
                "consonant"
            } else {
                "dissonant"
            },
            result.cents,
        ));
    }
    section
}

fn harmony_section(notes: &[PitchClass]) -> Section {
    let mut section = Section::new("Harmony");
    if let Some(chord) = match_chord(notes) {
        section.line(match chord.quality {
            ChordQuality::Exact(name) => format!("Chord: {} {}", chord.root, name),
            ChordQuality::Heuristic(name) => {
                format!("Chord (outline): {} {}", chord.root, name)
            }
            ChordQuality::Unclassified => "Chord: unclassified voicing".to_string(),
        });
    }
    if let Some(key) = detect_key(notes) {
        section.line(format!(
            "Best key fit: {} {} ({}% - {} of {} distinct pitch classes)",
            key.root, key.scale, key.confidence, key.matched, key.distinct,
        ));
    }
    section
}

fn conductor_notes_section(notes: &[PitchClass]) -> Section {
    let mut section = Section::new("Conductor's Notes");

    let frequencies: Vec<f64> = notes.iter().map(|note| note.frequency()).collect();
    let lowest = frequencies.iter().cloned().fold(f64::INFINITY, f64::min);
    let highest = frequencies.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let spread = highest - lowest;
    if spread < 50.0 {
        section.line("Tight cluster - good unison or close harmony");
    } else if spread < 200.0 {
        section.line("Moderate spread - balanced voicing");
    } else {
        section.line("Wide spread - watch for intonation drift between registers");
    }

    let mut distinct: Vec<PitchClass> = Vec::new();
    for note in notes {
        if !distinct.contains(note) {
            distinct.push(*note);
        }
    }
    if distinct.len() == 1 {
        section.line("Unison line - have every player lock to the same rhythm");
    } else if distinct.len() < notes.len() {
        let doubled: Vec<PitchClass> = distinct
            .iter()
            .filter(|pc| notes.iter().filter(|n| n == pc).count() > 1)
            .cloned()
            .collect();
        section.line(format!(
            "Doubled pitches ({}) - balance the doubling across the section",
            joined_names(&doubled),
        ));
    }

    if notes.len() > 4 {
        section.line("Dense passage - subdivide the beat clearly for the ensemble");
    }

    section
}

fn tempo_section(tempo: &TempoInfo) -> Section {
    let mut section = Section::new("Tempo");
    if tempo.explicit {
        section.line(format!("{} - {} BPM", capitalized(tempo.name), tempo.bpm));
    } else {
        section.line(format!(
            "{} - ~{} BPM (estimated from the marking)",
            capitalized(tempo.name),
            tempo.bpm,
        ));
    }
    section.line(format!(
        "Beat duration: {} ms (quarter subdivision: {} ms)",
        tempo.beat_ms, tempo.subdivision_ms,
    ));
    if tempo.bpm < 70 {
        section.line("Slow tempo - watch for pitch sag on sustained notes");
    } else if tempo.bpm > 160 {
        section.line("Fast tempo - prioritize rhythmic precision over dynamics");
    } else {
        section.line("Comfortable tempo - focus on expression and phrasing");
    }
    section
}

fn dynamics_section(dynamics: &DynamicsInfo) -> Section {
    let mut section = Section::new("Dynamics");
    for mark in &dynamics.marks {
        let filled = "#".repeat(mark.level as usize);
        let rest = ".".repeat(8 - mark.level as usize);
        section.line(format!(
            "{:<4} {:<14} level {}/8 [{}{}]",
            mark.symbol, mark.full_name, mark.level, filled, rest,
        ));
    }
    if dynamics.crescendo {
        section.line("Crescendo - grade the build so the peak lands together");
    }
    if dynamics.decrescendo {
        section.line("Decrescendo - keep the tone supported as the volume drops");
    }
    section
}

fn instrumentation_section(instruments: &[InstrumentFact]) -> Section {
    let mut section = Section::new("Instrumentation");
    for fact in instruments {
        section.line(format!(
            "{} ({}, {}, {})",
            fact.name,
            fact.section.name(),
            fact.range,
            fact.voice.name(),
        ));
    }

    let groups = group_by_section(instruments);
    let section_names: Vec<&str> = groups.iter().map(|(s, _)| s.name()).collect();
    section.line(format!("Sections involved: {}", section_names.join(", ")));

    let flags = balance_flags(instruments);
    if flags.brass_over_strings {
        section.line("Brass may overpower the strings - adjust dynamics");
    }
    if flags.woodwinds_with_brass {
        section.line("Woodwinds with brass - check tuning, temperature drifts the winds");
    }
    if flags.percussion_present {
        section.line("Percussion present - lock the section to the conductor's beat");
    }
    if flags.large_ensemble {
        section.line("Large ensemble - start with sectional rehearsal before the full group");
    }
    if flags.full_register_span {
        section.line("Full register span - balance the outer voices first");
    }
    section
}

fn scale_reference_section(reference: &ScaleReference) -> Section {
    let mut section = Section::new("Scale Reference");
    let notes = reference.notes();
    section.line(format!(
        "{} {}: {}",
        reference.root,
        reference.name,
        joined_names(&notes),
    ));
    section.line(format!("Frequencies (Hz): {}", joined_frequencies(&notes)));
    section.line(format!(
        "Semitone pattern: {}",
        reference
            .pattern
            .iter()
            .map(|offset| offset.to_string())
            .collect::<Vec<String>>()
            .join("-"),
    ));
    if let Some((label, relative)) = reference.relative() {
        section.line(format!("{}: {}", capitalized(label), relative));
    }
    section
}

fn feedback_section(tags: &[&'static str]) -> Section {
    let mut section = Section::new("Feedback");
    for tag in tags {
        if let Some(line) = feedback_for(tag) {
            section.line(line);
        }
    }
    section
}

fn suggestions_section() -> Section {
    let mut section = Section::new("Suggestions");
    section.line("Enter note names, e.g. C E G or c#4 d4");
    section.line("Add a tempo marking, e.g. allegro or 120 bpm");
    section.line("Mark dynamics, e.g. pp, mf, crescendo");
    section.line("Name instruments for section advice, e.g. trumpet, violin");
    section.line("Or describe the result, e.g. 'it sounded flat'");
    section
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::tokenize;

    fn report(text: &str) -> String {
        render(&tokenize(text), text)
    }

    #[test]
    fn triad_report_covers_pitch_intervals_and_harmony() {
        let output = report("C E G");
        assert!(output.contains("Notes: C, E, G"));
        assert!(output.contains("261.6, 329.6, 392.0"));
        assert!(output.contains("major 3rd"));
        assert!(output.contains("minor 3rd"));
        assert!(output.contains("Chord: C major"));
        assert!(output.contains("Best key fit: C major (100%"));
        assert!(output.contains("== Conductor's Notes "));
    }

    #[test]
    fn two_notes_have_no_harmony_section() {
        let output = report("C E");
        assert!(output.contains("== Intervals "));
        assert!(!output.contains("== Harmony "));
    }

    #[test]
    fn one_note_has_no_interval_section() {
        let output = report("C");
        assert!(output.contains("== Pitch "));
        assert!(!output.contains("== Intervals "));
    }

    #[test]
    fn sections_are_additive_not_exclusive() {
        let output = report("C E G allegro ff trumpet");
        for title in ["Pitch", "Intervals", "Harmony", "Tempo", "Dynamics", "Instrumentation"] {
            assert!(
                output.contains(&format!("== {} ", title)),
                "missing section {} in:\n{}",
                title,
                output,
            );
        }
    }

    #[test]
    fn doubled_pitches_are_called_out() {
        let output = report("C E C G");
        assert!(output.contains("Doubled pitches (C)"));
    }

    #[test]
    fn unison_line_is_called_out() {
        let output = report("G G G");
        assert!(output.contains("Unison line"));
    }

    #[test]
    fn dense_passage_note_appears_beyond_four_notes() {
        assert!(report("C D E F G").contains("Dense passage"));
        assert!(!report("C D E F").contains("Dense passage"));
    }

    #[test]
    fn dynamics_render_level_bars() {
        let output = report("play ff then pp");
        assert!(output.contains("level 7/8 [#######.]"));
        assert!(output.contains("level 2/8 [##......]"));
        // First appearance in the text decides the order.
        let ff_at = output.find("fortissimo").unwrap();
        let pp_at = output.find("pianissimo").unwrap();
        assert!(ff_at < pp_at);
    }

    #[test]
    fn balance_commentary_follows_the_flags() {
        let output = report("trumpet and violin together");
        assert!(output.contains("Brass may overpower the strings"));

        let output = report("trumpet solo");
        assert!(!output.contains("Brass may overpower the strings"));
    }

    #[test]
    fn sentiment_fallback_is_gated_on_structure() {
        let output = report("that sounded flat");
        assert!(output.contains("Flat intonation"));
        assert!(!output.contains("== Pitch "));
        assert!(!output.contains("== Suggestions "));

        // The same sentiment word next to structure produces no feedback.
        let output = report("C E G sounded flat");
        assert!(!output.contains("Flat intonation"));
    }

    #[test]
    fn scale_reference_reachable_without_note_tokens() {
        let output = report("Cmajor");
        assert!(output.contains("== Scale Reference "));
        assert!(output.contains("C major: C, D, E, F, G, A, B"));
        assert!(output.contains("Semitone pattern: 0-2-4-5-7-9-11"));
        assert!(output.contains("Relative minor: A"));
    }

    #[test]
    fn nonsense_gets_the_suggestions_block() {
        let output = report("zzz qqq xyzzy");
        assert!(output.contains("== Suggestions "));
        assert!(!output.is_empty());
    }
}
