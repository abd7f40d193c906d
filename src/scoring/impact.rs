use super::QuestionRule;
use crate::types::scoring::Score;

/// Impact-thesis tables. These score the credibility of claimed impact;
/// independently verified outcomes reduce the total, impact-washing risk
/// escalates it.
pub const RULES: &[QuestionRule] = &[
    QuestionRule {
        id: "5.1",
        options: &[
            ("Core to the business model", -1.0),
            ("Ancillary to the business model", 1.0),
            ("Incidental", 3.0),
        ],
        fallback: 3.0,
    },
    QuestionRule {
        id: "5.2",
        options: &[
            ("Baseline and targets defined", 0.0),
            ("Estimates only", 1.0),
            ("Not measurable", 3.0),
        ],
        fallback: 3.0,
    },
    QuestionRule {
        id: "5.3",
        options: &[
            ("Mapped with indicators", -1.0),
            ("Mapped without indicators", 0.0),
            ("Not mapped", 2.0),
        ],
        fallback: 2.0,
    },
    QuestionRule {
        id: "5.4",
        options: &[
            ("Independently verified claims", -1.0),
            ("Self-reported claims", 1.0),
            ("Unsubstantiated claims", 4.0),
        ],
        fallback: 4.0,
    },
    QuestionRule {
        id: "5.5",
        options: &[
            ("Gender targets with reporting", -1.0),
            ("Informal commitment", 0.0),
            ("No gender lens", 2.0),
        ],
        fallback: 2.0,
    },
    QuestionRule {
        id: "5.6",
        options: &[
            ("No adverse use identified", 0.0),
            ("Potential misuse with controls in place", 1.0),
            ("Known adverse use", 5.0),
        ],
        fallback: 5.0,
    },
];

pub fn score(question_id: &str, label: &str) -> Score {
    RULES
        .iter()
        .find(|rule| rule.id == question_id)
        .map(|rule| rule.score(label))
        .unwrap_or(0.0)
}
