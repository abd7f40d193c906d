use crate::catalog;
use crate::types::catalog::Section;
use crate::types::scoring::Score;

/// Uniform three-tier table applied to every policy question. Having the
/// policy in place scores zero risk; refusing to adopt one scores highest.
pub const TABLE: &[(&str, Score)] = &[
    ("Yes", 0.0),
    ("No, but willing to have", 1.0),
    ("No & Not willing to have", 3.0),
];

pub const FALLBACK: Score = 3.0;

pub fn score(question_id: &str, label: &str) -> Score {
    if catalog::find(Section::Policy, question_id).is_none() {
        return 0.0;
    }
    TABLE
        .iter()
        .find(|(candidate, _)| *candidate == label)
        .map(|(_, score)| *score)
        .unwrap_or(FALLBACK)
}
