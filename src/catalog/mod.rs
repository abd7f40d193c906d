pub mod environmental;
pub mod esg;
pub mod impact;
pub mod policy;
pub mod social;

use crate::types::catalog::{Question, Section};
use sha2::{Digest, Sha256};

/// Universal answer scale for sections without a custom option set.
pub const DEFAULT_OPTIONS: &[&str] = &["Yes", "No", "Partial", "N/A"];

pub fn sections() -> [Section; 5] {
    Section::ALL
}

pub fn questions(section: Section) -> &'static [Question] {
    match section {
        Section::Policy => policy::QUESTIONS,
        Section::Esg => esg::QUESTIONS,
        Section::Social => social::QUESTIONS,
        Section::Environmental => environmental::QUESTIONS,
        Section::Impact => impact::QUESTIONS,
    }
}

pub fn find(section: Section, question_id: &str) -> Option<&'static Question> {
    questions(section)
        .iter()
        .find(|question| question.id == question_id)
}

/// Section-level option list: custom sets verbatim and in order, otherwise
/// the universal default.
pub fn response_options(section: Section) -> &'static [&'static str] {
    match section {
        Section::Policy => policy::OPTIONS,
        Section::Esg => esg::OPTIONS,
        Section::Social | Section::Environmental | Section::Impact => DEFAULT_OPTIONS,
    }
}

/// Question-level option list: bespoke table labels when the question has
/// its own rule table, else the section answer.
pub fn response_options_for(section: Section, question_id: &str) -> Vec<&'static str> {
    crate::scoring::question_options(section, question_id)
        .unwrap_or_else(|| response_options(section).to_vec())
}

/// Content digest of the full question catalog, including the screening
/// questionnaire. Stamped into reports and generated templates so stale
/// response files are detectable after a catalog revision.
pub fn fingerprint() -> String {
    let mut hasher = Sha256::new();
    for section in Section::ALL {
        for question in questions(section) {
            hasher.update(section.as_str().as_bytes());
            hasher.update(question.id.as_bytes());
            hasher.update(question.prompt.as_bytes());
            hasher.update(question.criteria.as_bytes());
        }
    }
    for question in crate::screening::QUESTIONS {
        hasher.update(question.id.as_bytes());
        hasher.update(question.prompt.as_bytes());
    }
    let digest = hasher.finalize();
    format!("{digest:x}")
}
