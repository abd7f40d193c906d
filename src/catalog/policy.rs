use crate::types::catalog::Question;

/// Section-wide option list; every policy question uses the same scale.
pub const OPTIONS: &[&str] = &[
    "Yes",
    "No, but willing to have",
    "No & Not willing to have",
];

const CRITERIA: &str = "Yes = 0; No, but willing to have = 1; No & Not willing to have = 3";

pub const QUESTIONS: &[Question] = &[
    Question {
        id: "1.1",
        prompt: "Does the company have a board-approved ESG policy?",
        criteria: CRITERIA,
        guidance: Some("A policy signed off below board level counts as willing, not as yes."),
    },
    Question {
        id: "1.2",
        prompt: "Is a named officer responsible for ESG compliance?",
        criteria: CRITERIA,
        guidance: None,
    },
    Question {
        id: "1.3",
        prompt: "Does a code of conduct cover ethics and anti-corruption?",
        criteria: CRITERIA,
        guidance: None,
    },
    Question {
        id: "1.4",
        prompt: "Is there an HR policy with a worker grievance channel?",
        criteria: CRITERIA,
        guidance: None,
    },
    Question {
        id: "1.5",
        prompt: "Does an environmental management policy cover operations?",
        criteria: CRITERIA,
        guidance: Some("Accept a combined EHS policy if it names environmental responsibilities."),
    },
    Question {
        id: "1.6",
        prompt: "Is there an occupational health and safety policy?",
        criteria: CRITERIA,
        guidance: None,
    },
    Question {
        id: "1.7",
        prompt: "Are suppliers screened under a vendor policy?",
        criteria: CRITERIA,
        guidance: None,
    },
    Question {
        id: "1.8",
        prompt: "Is customer and employee data covered by a privacy policy?",
        criteria: CRITERIA,
        guidance: None,
    },
];
