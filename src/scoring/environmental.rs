use super::QuestionRule;
use crate::types::scoring::Score;

/// Environmental compliance and footprint tables. Missing statutory
/// consents and untreated discharge carry the highest scores; renewable
/// energy in the mix is favorable enough to score negative.
pub const RULES: &[QuestionRule] = &[
    QuestionRule {
        id: "4.1",
        options: &[
            ("Low impact services", 0.0),
            ("Light manufacturing", 1.0),
            ("Heavy manufacturing or extractives", 4.0),
        ],
        fallback: 4.0,
    },
    QuestionRule {
        id: "4.2",
        options: &[
            ("Valid and current", 0.0),
            ("Renewal application filed", 1.0),
            ("Expired or never obtained", 5.0),
        ],
        fallback: 5.0,
    },
    QuestionRule {
        id: "4.3",
        options: &[
            ("No process emissions", 0.0),
            ("Within consent limits, monitored", 1.0),
            ("Exceedances in the last year", 4.0),
        ],
        fallback: 4.0,
    },
    QuestionRule {
        id: "4.4",
        options: &[
            ("No trade effluent", 0.0),
            ("Treated on site to norms", 1.0),
            ("Discharged untreated", 5.0),
        ],
        fallback: 5.0,
    },
    QuestionRule {
        id: "4.5",
        options: &[
            ("None generated", 0.0),
            ("Authorised handler engaged", 1.0),
            ("Stored on site without authorisation", 4.0),
        ],
        fallback: 4.0,
    },
    QuestionRule {
        id: "4.6",
        options: &[
            ("Segregated with authorised disposal", 0.0),
            ("Mixed disposal", 2.0),
            ("Open dumping or burning", 5.0),
        ],
        fallback: 5.0,
    },
    QuestionRule {
        id: "4.7",
        options: &[
            ("Municipal supply", 0.0),
            ("Groundwater with permit", 1.0),
            ("Groundwater without permit", 3.0),
        ],
        fallback: 3.0,
    },
    QuestionRule {
        id: "4.8",
        options: &[
            ("Tracked with reduction targets", -1.0),
            ("Tracked", 0.0),
            ("Not tracked", 2.0),
        ],
        fallback: 2.0,
    },
    QuestionRule {
        id: "4.9",
        options: &[
            ("Bunded storage with spill kits", 0.0),
            ("Partial containment", 2.0),
            ("No containment", 4.0),
        ],
        fallback: 4.0,
    },
    QuestionRule {
        id: "4.10",
        options: &[
            ("No sensitive receptors within one kilometre", 0.0),
            ("Near residential area", 2.0),
            ("Near protected area or wetland", 5.0),
        ],
        fallback: 5.0,
    },
    QuestionRule {
        id: "4.11",
        options: &[
            ("None in last three years", 0.0),
            ("Notice received and resolved", 2.0),
            ("Penalty or closure order", 5.0),
        ],
        fallback: 5.0,
    },
    QuestionRule {
        id: "4.12",
        options: &[
            ("Low exposure", 0.0),
            ("Moderate exposure", 1.0),
            ("High exposure without mitigation", 3.0),
        ],
        fallback: 3.0,
    },
    QuestionRule {
        id: "4.13",
        options: &[("Yes", -1.0), ("Planned within 24 months", 0.0), ("No", 1.0)],
        fallback: 1.0,
    },
    QuestionRule {
        id: "4.14",
        options: &[
            ("Not applicable", 0.0),
            ("Obtained", 1.0),
            ("Required but not obtained", 5.0),
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
