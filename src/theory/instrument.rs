//! Instrument facts and ensemble balance flags.

/// Orchestral section of an instrument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Strings,
    Woodwinds,
    Brass,
    Percussion,
    Keyboard,
}

impl Section {
    pub fn name(self) -> &'static str {
        match self {
            Section::Strings => "strings",
            Section::Woodwinds => "woodwinds",
            Section::Brass => "brass",
            Section::Percussion => "percussion",
            Section::Keyboard => "keyboard",
        }
    }
}

/// Voice register an instrument typically carries in the ensemble.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Voice {
    Soprano,
    Alto,
    Tenor,
    Bass,
}

impl Voice {
    pub fn name(self) -> &'static str {
        match self {
            Voice::Soprano => "soprano",
            Voice::Alto => "alto",
            Voice::Tenor => "tenor",
            Voice::Bass => "bass",
        }
    }
}

/// Instruments matched by case-insensitive substring search. Keys must stay
/// unique; "bass" also matching inside "bassoon" is intended.
pub const INSTRUMENT_TABLE: &[(&str, Section, &str, Voice)] = &[
    ("violin", Section::Strings, "G3-A7", Voice::Soprano),
    ("viola", Section::Strings, "C3-E6", Voice::Alto),
    ("cello", Section::Strings, "C2-C6", Voice::Tenor),
    ("bass", Section::Strings, "E1-G4", Voice::Bass),
    ("flute", Section::Woodwinds, "C4-D7", Voice::Soprano),
    ("oboe", Section::Woodwinds, "A#3-A6", Voice::Soprano),
    ("clarinet", Section::Woodwinds, "D3-A#6", Voice::Alto),
    ("bassoon", Section::Woodwinds, "A#1-D#5", Voice::Bass),
    ("trumpet", Section::Brass, "F#3-D6", Voice::Soprano),
    ("horn", Section::Brass, "B1-F5", Voice::Alto),
    ("trombone", Section::Brass, "E2-F5", Voice::Tenor),
    ("tuba", Section::Brass, "D1-F4", Voice::Bass),
    ("timpani", Section::Percussion, "D2-C4", Voice::Bass),
    ("drum", Section::Percussion, "unpitched", Voice::Bass),
    ("piano", Section::Keyboard, "A0-C8", Voice::Alto),
    ("harp", Section::Strings, "C1-G7", Voice::Alto),
];

/// One matched instrument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstrumentFact {
    pub name: &'static str,
    pub section: Section,
    pub range: &'static str,
    pub voice: Voice,
}

impl InstrumentFact {
    pub fn from_table_index(index: usize) -> InstrumentFact {
        let (name, section, range, voice) = INSTRUMENT_TABLE[index];
        InstrumentFact {
            name,
            section,
            range,
            voice,
        }
    }
}

/// Independent ensemble-balance observations; any combination can be set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BalanceFlags {
    /// Brass and strings both present.
    pub brass_over_strings: bool,
    /// Woodwinds and brass both present.
    pub woodwinds_with_brass: bool,
    pub percussion_present: bool,
    /// Three or more distinct sections.
    pub large_ensemble: bool,
    /// Both a soprano-register and a bass-register instrument.
    pub full_register_span: bool,
}

pub fn balance_flags(facts: &[InstrumentFact]) -> BalanceFlags {
    let has_section = |section: Section| facts.iter().any(|fact| fact.section == section);
    let has_voice = |voice: Voice| facts.iter().any(|fact| fact.voice == voice);

    let mut sections: Vec<Section> = Vec::new();
    for fact in facts {
        if !sections.contains(&fact.section) {
            sections.push(fact.section);
        }
    }

    BalanceFlags {
        brass_over_strings: has_section(Section::Brass) && has_section(Section::Strings),
        woodwinds_with_brass: has_section(Section::Woodwinds) && has_section(Section::Brass),
        percussion_present: has_section(Section::Percussion),
        large_ensemble: sections.len() >= 3,
        full_register_span: has_voice(Voice::Soprano) && has_voice(Voice::Bass),
    }
}

/// Group matched instruments by section, keeping the order each section
/// first appeared.
pub fn group_by_section(facts: &[InstrumentFact]) -> Vec<(Section, Vec<&'static str>)> {
    let mut groups: Vec<(Section, Vec<&'static str>)> = Vec::new();
    for fact in facts {
        match groups.iter_mut().find(|(section, _)| *section == fact.section) {
            Some((_, names)) => names.push(fact.name),
            None => groups.push((fact.section, vec![fact.name])),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn facts(names: &[&str]) -> Vec<InstrumentFact> {
        names
            .iter()
            .map(|wanted| {
                let index = INSTRUMENT_TABLE
                    .iter()
                    .position(|(name, _, _, _)| name == wanted)
                    .unwrap();
                InstrumentFact::from_table_index(index)
            })
            .collect()
    }

    #[test]
    fn brass_and_strings_raise_the_balance_flag() {
        let flags = balance_flags(&facts(&["trumpet", "violin"]));
        assert!(flags.brass_over_strings);
        assert!(!flags.woodwinds_with_brass);
        assert!(!flags.percussion_present);
        assert!(!flags.large_ensemble);
    }

    #[test]
    fn trumpet_alone_raises_nothing_sectional() {
        let flags = balance_flags(&facts(&["trumpet"]));
        assert!(!flags.brass_over_strings);
        assert!(!flags.large_ensemble);
    }

    #[test]
    fn flags_are_independent() {
        let flags = balance_flags(&facts(&["flute", "trumpet", "timpani", "tuba"]));
        assert!(flags.woodwinds_with_brass);
        assert!(flags.percussion_present);
        assert!(flags.large_ensemble);
        // Flute is soprano, tuba is bass.
        assert!(flags.full_register_span);
        assert!(!flags.brass_over_strings);
    }

    #[test]
    fn grouping_keeps_first_appearance_order() {
        let groups = group_by_section(&facts(&["trumpet", "violin", "tuba"]));
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, Section::Brass);
        assert_eq!(groups[0].1, vec!["trumpet", "tuba"]);
        assert_eq!(groups[1].1, vec!["violin"]);
    }
}
