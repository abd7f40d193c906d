use serde::{Deserialize, Serialize};
use std::fmt;

/// The five fixed questionnaire sections, in display order. The ordinal is
/// the leading segment of every question id in the section ("3.4" lives in
/// the third section, social).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Policy,
    Esg,
    Social,
    Environmental,
    Impact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Policy,
        Section::Esg,
        Section::Social,
        Section::Environmental,
        Section::Impact,
    ];

    pub fn ordinal(self) -> u8 {
        match self {
            Section::Policy => 1,
            Section::Esg => 2,
            Section::Social => 3,
            Section::Environmental => 4,
            Section::Impact => 5,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Section::Policy => "policy",
            Section::Esg => "esg",
            Section::Social => "social",
            Section::Environmental => "environmental",
            Section::Impact => "impact",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which questionnaire a workbook answers: the gating exclusion screen or
/// the five-section risk categorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Track {
    PreScreening,
    Categorization,
}

impl Track {
    pub fn as_str(self) -> &'static str {
        match self {
            Track::PreScreening => "pre-screening",
            Track::Categorization => "categorization",
        }
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A catalog question. `criteria` is the human-readable description of the
/// scoring rule shown to report authors; the rule itself lives in the
/// section's scoring table and must stay in lockstep with this text.
#[derive(Debug, Clone, Copy)]
pub struct Question {
    pub id: &'static str,
    pub prompt: &'static str,
    pub criteria: &'static str,
    pub guidance: Option<&'static str>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_keep_catalog_order_and_ordinals() {
        let ordinals = Section::ALL.map(Section::ordinal);
        assert_eq!(ordinals, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn section_serde_uses_lowercase_names() {
        let parsed: Section =
            serde_json::from_str("\"environmental\"").expect("section should deserialize");
        assert_eq!(parsed, Section::Environmental);
        assert_eq!(
            serde_json::to_string(&Section::Policy).expect("section should serialize"),
            "\"policy\""
        );
    }

    #[test]
    fn track_serde_uses_kebab_case_names() {
        let parsed: Track =
            serde_json::from_str("\"pre-screening\"").expect("track should deserialize");
        assert_eq!(parsed, Track::PreScreening);
    }
}
