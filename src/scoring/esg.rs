use crate::catalog;
use crate::types::catalog::Section;
use crate::types::scoring::Score;

/// The esg section scores by label text alone: the same answer carries the
/// same score on every question in the section. A firm commitment is
/// favorable enough to reduce the total.
pub const TABLE: &[(&str, Score)] = &[("Yes", -1.0), ("Likely", 0.0), ("No", 1.0)];

pub const FALLBACK: Score = 1.0;

pub fn score(question_id: &str, label: &str) -> Score {
    if catalog::find(Section::Esg, question_id).is_none() {
        return 0.0;
    }
    TABLE
        .iter()
        .find(|(candidate, _)| *candidate == label)
        .map(|(_, score)| *score)
        .unwrap_or(FALLBACK)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn labels_score_identically_across_every_esg_question() {
        for question in catalog::questions(Section::Esg) {
            assert_eq!(score(question.id, "Yes"), -1.0);
            assert_eq!(score(question.id, "Likely"), 0.0);
            assert_eq!(score(question.id, "No"), 1.0);
        }
    }

    #[test]
    fn unknown_question_scores_zero() {
        assert_eq!(score("2.99", "Yes"), 0.0);
    }

    #[test]
    fn unrecognized_label_falls_through_to_worst_case() {
        assert_eq!(score("2.1", "Unsure"), FALLBACK);
    }
}
