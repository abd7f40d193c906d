use crate::types::catalog::Question;

/// Forward-looking commitment questions; the answer scale is shared and
/// the score depends on the label alone.
pub const OPTIONS: &[&str] = &["Yes", "Likely", "No"];

const CRITERIA: &str = "Yes = -1; Likely = 0; No = 1";

pub const QUESTIONS: &[Question] = &[
    Question {
        id: "2.1",
        prompt: "Will the investment improve ESG standards at the company?",
        criteria: CRITERIA,
        guidance: None,
    },
    Question {
        id: "2.2",
        prompt: "Is management committed to implementing an ESG action plan?",
        criteria: CRITERIA,
        guidance: Some("Score yes only when the commitment is recorded in the term sheet or minutes."),
    },
    Question {
        id: "2.3",
        prompt: "Can risks identified in due diligence be mitigated within twelve months?",
        criteria: CRITERIA,
        guidance: None,
    },
    Question {
        id: "2.4",
        prompt: "Will the company budget for the agreed ESG improvements?",
        criteria: CRITERIA,
        guidance: None,
    },
    Question {
        id: "2.5",
        prompt: "Will the promoter accept ESG covenants in the shareholder agreement?",
        criteria: CRITERIA,
        guidance: None,
    },
    Question {
        id: "2.6",
        prompt: "Will the company report ESG performance to investors annually?",
        criteria: CRITERIA,
        guidance: None,
    },
];
