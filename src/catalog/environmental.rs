use crate::types::catalog::Question;

pub const QUESTIONS: &[Question] = &[
    Question {
        id: "4.1",
        prompt: "What is the environmental intensity of operations?",
        criteria: "Low impact services = 0; Light manufacturing = 1; Heavy manufacturing or extractives = 4",
        guidance: None,
    },
    Question {
        id: "4.2",
        prompt: "What is the status of consents to establish and operate?",
        criteria: "Valid and current = 0; Renewal application filed = 1; Expired or never obtained = 5",
        guidance: Some("Ask for the consent certificates, not the application receipts."),
    },
    Question {
        id: "4.3",
        prompt: "How are air emissions managed?",
        criteria: "No process emissions = 0; Within consent limits, monitored = 1; Exceedances in the last year = 4",
        guidance: None,
    },
    Question {
        id: "4.4",
        prompt: "How is wastewater managed?",
        criteria: "No trade effluent = 0; Treated on site to norms = 1; Discharged untreated = 5",
        guidance: None,
    },
    Question {
        id: "4.5",
        prompt: "How is hazardous waste handled?",
        criteria: "None generated = 0; Authorised handler engaged = 1; Stored on site without authorisation = 4",
        guidance: None,
    },
    Question {
        id: "4.6",
        prompt: "How is solid waste disposed of?",
        criteria: "Segregated with authorised disposal = 0; Mixed disposal = 2; Open dumping or burning = 5",
        guidance: None,
    },
    Question {
        id: "4.7",
        prompt: "Where does process and potable water come from?",
        criteria: "Municipal supply = 0; Groundwater with permit = 1; Groundwater without permit = 3",
        guidance: None,
    },
    Question {
        id: "4.8",
        prompt: "Is energy consumption tracked?",
        criteria: "Tracked with reduction targets = -1; Tracked = 0; Not tracked = 2",
        guidance: None,
    },
    Question {
        id: "4.9",
        prompt: "How are chemicals stored and spills contained?",
        criteria: "Bunded storage with spill kits = 0; Partial containment = 2; No containment = 4",
        guidance: None,
    },
    Question {
        id: "4.10",
        prompt: "How close are operations to sensitive receptors?",
        criteria: "No sensitive receptors within one kilometre = 0; Near residential area = 2; Near protected area or wetland = 5",
        guidance: Some("Sensitive receptors include schools, hospitals, and notified habitats."),
    },
    Question {
        id: "4.11",
        prompt: "Has the company received environmental notices or penalties?",
        criteria: "None in last three years = 0; Notice received and resolved = 2; Penalty or closure order = 5",
        guidance: None,
    },
    Question {
        id: "4.12",
        prompt: "What is the exposure to physical climate hazards?",
        criteria: "Low exposure = 0; Moderate exposure = 1; High exposure without mitigation = 3",
        guidance: None,
    },
    Question {
        id: "4.13",
        prompt: "Is renewable energy part of the energy mix?",
        criteria: "Yes = -1; Planned within 24 months = 0; No = 1",
        guidance: None,
    },
    Question {
        id: "4.14",
        prompt: "Is an environmental impact assessment required for the operations?",
        criteria: "Not applicable = 0; Obtained = 1; Required but not obtained = 5",
        guidance: None,
    },
];
