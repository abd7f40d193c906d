use super::QuestionRule;
use crate::types::scoring::Score;

/// Labour and community risk tables. Each question carries its own
/// committee-assigned option scores; exemplary practice can score negative,
/// severe exposure escalates to 5.
pub const RULES: &[QuestionRule] = &[
    QuestionRule {
        id: "3.1",
        options: &[
            ("Fewer than 50 workers", 0.0),
            ("50 to 250 workers", 1.0),
            ("More than 250 workers", 3.0),
        ],
        fallback: 3.0,
    },
    QuestionRule {
        id: "3.2",
        options: &[
            ("No contract labour", 0.0),
            ("Less than 25% of workforce", 1.0),
            ("25% to 50% of workforce", 2.0),
            ("More than 50% of workforce", 4.0),
        ],
        fallback: 4.0,
    },
    QuestionRule {
        id: "3.3",
        options: &[
            ("Paid above minimum wage with records", -1.0),
            ("Paid at minimum wage", 0.0),
            ("Wage records incomplete", 2.0),
            ("No wage records", 4.0),
        ],
        fallback: 4.0,
    },
    QuestionRule {
        id: "3.4",
        options: &[
            ("No dues related issues", 0.0),
            ("Delayed deposits since regularised", 1.0),
            ("Pending dues under dispute", 3.0),
            ("Past media stories", 5.0),
        ],
        fallback: 5.0,
    },
    QuestionRule {
        id: "3.5",
        options: &[
            ("Age verification in place, no risk", 0.0),
            ("Age verification informal", 2.0),
            ("Supply chain not assessed", 3.0),
            ("Suspected incidents", 5.0),
        ],
        fallback: 5.0,
    },
    QuestionRule {
        id: "3.6",
        options: &[
            ("No reportable incidents in last three years", 0.0),
            ("Minor incidents, corrective actions closed", 1.0),
            ("Reportable injury in last three years", 3.0),
            ("Fatality in last three years", 5.0),
        ],
        fallback: 5.0,
    },
    QuestionRule {
        id: "3.7",
        options: &[
            ("Formal mechanism with worker committee", -1.0),
            ("Informal open-door practice", 1.0),
            ("No grievance mechanism", 3.0),
        ],
        fallback: 3.0,
    },
    QuestionRule {
        id: "3.8",
        options: &[
            ("No land acquisition or resettlement", 0.0),
            ("Negotiated settlement completed", 1.0),
            ("Ongoing community objections", 4.0),
        ],
        fallback: 4.0,
    },
    QuestionRule {
        id: "3.9",
        options: &[
            ("No product safety complaints", 0.0),
            ("Complaints resolved and documented", 1.0),
            ("Open regulatory action", 4.0),
        ],
        fallback: 4.0,
    },
    QuestionRule {
        id: "3.10",
        options: &[
            ("Committee constituted, no complaints", 0.0),
            ("Committee being constituted", 1.0),
            ("Complaints pending inquiry", 4.0),
        ],
        fallback: 4.0,
    },
];

pub fn score(question_id: &str, label: &str) -> Score {
    RULES
        .iter()
        .find(|rule| rule.id == question_id)
        .map(|rule| rule.score(label))
        .unwrap_or(0.0)
}
