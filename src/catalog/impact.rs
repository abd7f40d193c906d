use crate::types::catalog::Question;

pub const QUESTIONS: &[Question] = &[
    Question {
        id: "5.1",
        prompt: "How central is the claimed impact to the business model?",
        criteria: "Core to the business model = -1; Ancillary to the business model = 1; Incidental = 3",
        guidance: Some("Core means revenue depends on delivering the impact outcome."),
    },
    Question {
        id: "5.2",
        prompt: "Can beneficiary reach be measured?",
        criteria: "Baseline and targets defined = 0; Estimates only = 1; Not measurable = 3",
        guidance: None,
    },
    Question {
        id: "5.3",
        prompt: "Are outcomes mapped to the Sustainable Development Goals?",
        criteria: "Mapped with indicators = -1; Mapped without indicators = 0; Not mapped = 2",
        guidance: None,
    },
    Question {
        id: "5.4",
        prompt: "How are impact claims substantiated?",
        criteria: "Independently verified claims = -1; Self-reported claims = 1; Unsubstantiated claims = 4",
        guidance: None,
    },
    Question {
        id: "5.5",
        prompt: "Does the company apply a gender lens to hiring and outcomes?",
        criteria: "Gender targets with reporting = -1; Informal commitment = 0; No gender lens = 2",
        guidance: None,
    },
    Question {
        id: "5.6",
        prompt: "Could the product or service cause harm in use?",
        criteria: "No adverse use identified = 0; Potential misuse with controls in place = 1; Known adverse use = 5",
        guidance: None,
    },
];
