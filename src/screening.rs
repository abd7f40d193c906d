use crate::types::config::EsgConfig;
use crate::types::scoring::Score;
use crate::workbook::Workbook;

/// A gating question on the exclusion screen. `weightage` multiplies the
/// answer score before aggregation and can be overridden per question id
/// via `[screening.weights]` in config.
#[derive(Debug, Clone, Copy)]
pub struct ScreeningQuestion {
    pub id: &'static str,
    pub prompt: &'static str,
    pub guidance: Option<&'static str>,
    pub weightage: Score,
}

pub const OPTIONS: &[&str] = &["Yes", "No", "Partial", "N/A"];

/// Answer table shared by every gating question: any involvement in an
/// excluded activity scores a full point before weightage.
pub const TABLE: &[(&str, Score)] = &[
    ("Yes", 1.0),
    ("No", 0.0),
    ("Partial", 0.5),
    ("N/A", 0.0),
];

pub const FALLBACK: Score = 1.0;

pub const QUESTIONS: &[ScreeningQuestion] = &[
    ScreeningQuestion {
        id: "E.1",
        prompt: "Does the company produce or trade tobacco products?",
        guidance: None,
        weightage: 1.0,
    },
    ScreeningQuestion {
        id: "E.2",
        prompt: "Does the company manufacture or trade weapons or munitions?",
        guidance: None,
        weightage: 1.0,
    },
    ScreeningQuestion {
        id: "E.3",
        prompt: "Does the company operate gambling or betting businesses?",
        guidance: None,
        weightage: 1.0,
    },
    ScreeningQuestion {
        id: "E.4",
        prompt: "Is the company exposed to forced labour or harmful child labour?",
        guidance: Some("Partial covers unassessed supply chains in high-risk sectors."),
        weightage: 1.0,
    },
    ScreeningQuestion {
        id: "E.5",
        prompt: "Are any activities illegal under host country law or international conventions?",
        guidance: None,
        weightage: 1.0,
    },
    ScreeningQuestion {
        id: "E.6",
        prompt: "Does the company produce or trade radioactive materials?",
        guidance: Some("Medical imaging equipment with sealed sources is N/A, not yes."),
        weightage: 1.0,
    },
    ScreeningQuestion {
        id: "E.7",
        prompt: "Does the company engage in unsustainable fishing or wild resource extraction?",
        guidance: None,
        weightage: 1.0,
    },
    ScreeningQuestion {
        id: "E.8",
        prompt: "Does the company produce or distribute pornographic or exploitative content?",
        guidance: None,
        weightage: 1.0,
    },
];

pub fn find(question_id: &str) -> Option<&'static ScreeningQuestion> {
    QUESTIONS.iter().find(|question| question.id == question_id)
}

pub fn base_score(label: &str) -> Score {
    TABLE
        .iter()
        .find(|(candidate, _)| *candidate == label)
        .map(|(_, score)| *score)
        .unwrap_or(FALLBACK)
}

pub fn weight(config: &EsgConfig, question_id: &str) -> Score {
    let default = find(question_id).map(|question| question.weightage);
    config
        .screening_weight_override(question_id)
        .or(default)
        .unwrap_or(1.0)
}

/// Weighted score for one gating answer. Unknown question ids score 0.
pub fn weighted_score(config: &EsgConfig, question_id: &str, label: &str) -> Score {
    match find(question_id) {
        Some(question) => base_score(label) * weight(config, question.id),
        None => 0.0,
    }
}

pub fn total_score(workbook: &Workbook) -> Score {
    workbook
        .screening_responses()
        .values()
        .map(|response| response.score)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_answers_score_zero_and_exposure_scores_one() {
        let config = EsgConfig::default();
        assert_eq!(weighted_score(&config, "E.1", "No"), 0.0);
        assert_eq!(weighted_score(&config, "E.1", "Yes"), 1.0);
        assert_eq!(weighted_score(&config, "E.4", "Partial"), 0.5);
        assert_eq!(weighted_score(&config, "E.6", "N/A"), 0.0);
    }

    #[test]
    fn unrecognized_label_is_treated_as_full_exposure() {
        let config = EsgConfig::default();
        assert_eq!(weighted_score(&config, "E.2", "Probably not"), FALLBACK);
    }

    #[test]
    fn unknown_question_scores_zero() {
        let config = EsgConfig::default();
        assert_eq!(weighted_score(&config, "E.99", "Yes"), 0.0);
    }

    #[test]
    fn unit_weight_questionnaires_gate_on_the_answer_count() {
        use crate::classify::{self, Decision};
        use crate::types::catalog::Track;

        let config = EsgConfig::default();
        let mut clean = Workbook::new(Track::PreScreening, None);
        let mut exposed = Workbook::new(Track::PreScreening, None);
        for question in QUESTIONS {
            clean
                .record_screening(question.id, "No", None, &config)
                .expect("record should succeed");
            exposed
                .record_screening(question.id, "Yes", None, &config)
                .expect("record should succeed");
        }

        assert_eq!(total_score(&clean), 0.0);
        assert_eq!(classify::pre_screening(total_score(&clean)), Decision::Go);

        assert_eq!(total_score(&exposed), QUESTIONS.len() as Score);
        assert_eq!(
            classify::pre_screening(total_score(&exposed)),
            Decision::NoGo
        );
    }

    #[test]
    fn config_weight_overrides_apply_before_aggregation() {
        let config: EsgConfig = toml::from_str(
            r#"
[screening.weights]
"E.4" = 2.0
"#,
        )
        .expect("config should parse");
        assert_eq!(weighted_score(&config, "E.4", "Yes"), 2.0);
        assert_eq!(weighted_score(&config, "E.4", "Partial"), 1.0);
        assert_eq!(weighted_score(&config, "E.1", "Yes"), 1.0);
    }
}
