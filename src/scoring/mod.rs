pub mod environmental;
pub mod esg;
pub mod impact;
pub mod policy;
pub mod social;

use crate::types::catalog::Section;
use crate::types::scoring::Score;
use crate::workbook::Workbook;

/// A closed rule table for one question: the recognized labels with their
/// committee-assigned scores, plus a declared catch-all for anything else.
/// The fallback is always the worst score in the table; unexpected input is
/// treated as maximal risk, never as an error.
#[derive(Debug, Clone, Copy)]
pub struct QuestionRule {
    pub id: &'static str,
    pub options: &'static [(&'static str, Score)],
    pub fallback: Score,
}

impl QuestionRule {
    pub fn score(&self, label: &str) -> Score {
        self.options
            .iter()
            .find(|(candidate, _)| *candidate == label)
            .map(|(_, score)| *score)
            .unwrap_or(self.fallback)
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.options.iter().map(|(label, _)| *label).collect()
    }
}

/// Scores one answer. Unknown question ids in a known section score 0.
pub fn score(section: Section, question_id: &str, label: &str) -> Score {
    match section {
        Section::Policy => policy::score(question_id, label),
        Section::Esg => esg::score(question_id, label),
        Section::Social => social::score(question_id, label),
        Section::Environmental => environmental::score(question_id, label),
        Section::Impact => impact::score(question_id, label),
    }
}

pub(crate) fn rules(section: Section) -> &'static [QuestionRule] {
    match section {
        Section::Social => social::RULES,
        Section::Environmental => environmental::RULES,
        Section::Impact => impact::RULES,
        // Policy and esg score through section-wide label tables.
        Section::Policy | Section::Esg => &[],
    }
}

/// Bespoke option labels for a question, in table order, when the section
/// scores per (question, label) pair.
pub fn question_options(section: Section, question_id: &str) -> Option<Vec<&'static str>> {
    rules(section)
        .iter()
        .find(|rule| rule.id == question_id)
        .map(QuestionRule::labels)
}

pub fn section_score(workbook: &Workbook, section: Section) -> Score {
    workbook
        .section_responses(section)
        .values()
        .map(|response| response.score)
        .sum()
}

pub fn total_score(workbook: &Workbook) -> Score {
    Section::ALL
        .iter()
        .map(|section| section_score(workbook, *section))
        .sum()
}
