use crate::types::catalog::Question;

pub const QUESTIONS: &[Question] = &[
    Question {
        id: "3.1",
        prompt: "How large is the workforce?",
        criteria: "Fewer than 50 workers = 0; 50 to 250 workers = 1; More than 250 workers = 3",
        guidance: Some("Count contract and seasonal workers, not just payroll headcount."),
    },
    Question {
        id: "3.2",
        prompt: "What share of the workforce is contract labour?",
        criteria: "No contract labour = 0; Less than 25% of workforce = 1; 25% to 50% of workforce = 2; More than 50% of workforce = 4",
        guidance: None,
    },
    Question {
        id: "3.3",
        prompt: "How are wages positioned against the statutory minimum?",
        criteria: "Paid above minimum wage with records = -1; Paid at minimum wage = 0; Wage records incomplete = 2; No wage records = 4",
        guidance: None,
    },
    Question {
        id: "3.4",
        prompt: "What is the status of statutory dues and related disputes?",
        criteria: "No dues related issues = 0; Delayed deposits since regularised = 1; Pending dues under dispute = 3; Past media stories = 5",
        guidance: Some("Check provident fund and state insurance challans for the trailing twelve months."),
    },
    Question {
        id: "3.5",
        prompt: "What is the exposure to child or forced labour?",
        criteria: "Age verification in place, no risk = 0; Age verification informal = 2; Supply chain not assessed = 3; Suspected incidents = 5",
        guidance: None,
    },
    Question {
        id: "3.6",
        prompt: "What is the occupational safety record?",
        criteria: "No reportable incidents in last three years = 0; Minor incidents, corrective actions closed = 1; Reportable injury in last three years = 3; Fatality in last three years = 5",
        guidance: None,
    },
    Question {
        id: "3.7",
        prompt: "How do workers raise grievances?",
        criteria: "Formal mechanism with worker committee = -1; Informal open-door practice = 1; No grievance mechanism = 3",
        guidance: None,
    },
    Question {
        id: "3.8",
        prompt: "Has land acquisition or resettlement affected communities?",
        criteria: "No land acquisition or resettlement = 0; Negotiated settlement completed = 1; Ongoing community objections = 4",
        guidance: None,
    },
    Question {
        id: "3.9",
        prompt: "What is the product safety track record?",
        criteria: "No product safety complaints = 0; Complaints resolved and documented = 1; Open regulatory action = 4",
        guidance: None,
    },
    Question {
        id: "3.10",
        prompt: "What is the status of the workplace harassment committee?",
        criteria: "Committee constituted, no complaints = 0; Committee being constituted = 1; Complaints pending inquiry = 4",
        guidance: Some("Ask for the committee's annual filing, not the policy document."),
    },
];
