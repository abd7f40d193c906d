use crate::error::{EsgError, Result};
use crate::types::catalog::{Section, Track};
use crate::types::config::EsgConfig;
use crate::types::report::Finding;
use crate::types::scoring::Score;
use crate::{catalog, scoring, screening};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// One recorded answer. `score` is derived from the label through the
/// section's rule table on every change and is never settable on its own.
#[derive(Debug, Clone)]
pub struct Response {
    pub label: String,
    pub score: Score,
    pub remarks: String,
}

/// Caller-owned response store for one company and one questionnaire
/// track. The scoring engine holds no state of its own; everything here is
/// recomputed through the rule tables on mutation.
#[derive(Debug, Clone)]
pub struct Workbook {
    pub company: Option<String>,
    pub track: Track,
    sections: BTreeMap<Section, BTreeMap<String, Response>>,
    screening: BTreeMap<String, Response>,
}

#[derive(Debug, Deserialize)]
struct RawWorkbook {
    company: Option<String>,
    track: Track,
    #[serde(default)]
    responses: Vec<RawResponse>,
}

#[derive(Debug, Deserialize)]
struct RawResponse {
    section: Option<Section>,
    question: String,
    label: String,
    #[serde(default)]
    remarks: String,
}

impl Workbook {
    pub fn new(track: Track, company: Option<String>) -> Self {
        let mut sections = BTreeMap::new();
        for section in Section::ALL {
            sections.insert(section, BTreeMap::new());
        }
        Self {
            company,
            track,
            sections,
            screening: BTreeMap::new(),
        }
    }

    /// Loads a responses TOML file. Label strictness follows the config;
    /// pass a lenient config to inspect a file without rejecting it.
    pub fn load(path: &Path, config: &EsgConfig) -> Result<Self> {
        if !path.exists() {
            return Err(EsgError::WorkbookNotFound(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)?;
        let raw: RawWorkbook = toml::from_str(&content)
            .map_err(|e| EsgError::WorkbookParse(format!("{}: {}", path.display(), e)))?;

        let mut workbook = Workbook::new(raw.track, raw.company);
        for response in raw.responses {
            match (workbook.track, response.section) {
                (Track::Categorization, Some(section)) => {
                    workbook.record(
                        section,
                        &response.question,
                        &response.label,
                        Some(&response.remarks),
                        config,
                    )?;
                }
                (Track::Categorization, None) => {
                    return Err(EsgError::WorkbookParse(format!(
                        "{}: response {} is missing a section",
                        path.display(),
                        response.question
                    )));
                }
                (Track::PreScreening, None) => {
                    workbook.record_screening(
                        &response.question,
                        &response.label,
                        Some(&response.remarks),
                        config,
                    )?;
                }
                (Track::PreScreening, Some(section)) => {
                    return Err(EsgError::WorkbookParse(format!(
                        "{}: pre-screening response {} must not carry a section (found {})",
                        path.display(),
                        response.question,
                        section
                    )));
                }
            }
        }
        tracing::debug!(
            file = %path.display(),
            track = %workbook.track,
            responses = workbook.answered(),
            "workbook loaded"
        );
        Ok(workbook)
    }

    /// Records an answer and immediately recomputes its score. Passing no
    /// remarks keeps any existing annotation.
    pub fn record(
        &mut self,
        section: Section,
        question_id: &str,
        label: &str,
        remarks: Option<&str>,
        config: &EsgConfig,
    ) -> Result<Score> {
        if config.strict_labels() {
            let options = catalog::response_options_for(section, question_id);
            if !options.contains(&label) {
                return Err(EsgError::InvalidLabel {
                    question: question_id.to_string(),
                    label: label.to_string(),
                });
            }
        }
        let score = scoring::score(section, question_id, label);
        upsert(
            self.sections
                .get_mut(&section)
                .expect("all sections are pre-inserted"),
            question_id,
            label,
            score,
            remarks,
        );
        Ok(score)
    }

    pub fn record_screening(
        &mut self,
        question_id: &str,
        label: &str,
        remarks: Option<&str>,
        config: &EsgConfig,
    ) -> Result<Score> {
        if config.strict_labels() && !screening::OPTIONS.contains(&label) {
            return Err(EsgError::InvalidLabel {
                question: question_id.to_string(),
                label: label.to_string(),
            });
        }
        let score = screening::weighted_score(config, question_id, label);
        upsert(&mut self.screening, question_id, label, score, remarks);
        Ok(score)
    }

    /// Lazily creates a response at the first resolved option label. The
    /// default is scored through the same tables as any other answer.
    pub fn ensure(&mut self, section: Section, question_id: &str, config: &EsgConfig) {
        let present = self
            .sections
            .get(&section)
            .map(|responses| responses.contains_key(question_id))
            .unwrap_or(false);
        if present {
            return;
        }
        let options = catalog::response_options_for(section, question_id);
        if let Some(first) = options.first() {
            let _ = self.record(section, question_id, first, Some(""), config);
        }
    }

    pub fn ensure_screening(&mut self, question_id: &str, config: &EsgConfig) {
        if self.screening.contains_key(question_id) {
            return;
        }
        if let Some(first) = screening::OPTIONS.first() {
            let _ = self.record_screening(question_id, first, Some(""), config);
        }
    }

    pub fn section_responses(&self, section: Section) -> &BTreeMap<String, Response> {
        self.sections
            .get(&section)
            .expect("all sections are pre-inserted")
    }

    pub fn screening_responses(&self) -> &BTreeMap<String, Response> {
        &self.screening
    }

    pub fn answered(&self) -> usize {
        match self.track {
            Track::Categorization => self
                .sections
                .values()
                .map(|responses| responses.len())
                .sum(),
            Track::PreScreening => self.screening.len(),
        }
    }

    /// Non-mutating consistency review of the stored responses against the
    /// catalog: unrecognized labels, unknown question ids, and unanswered
    /// questions. Unrecognized labels block only under strict validation.
    pub fn validation_findings(&self, config: &EsgConfig) -> Vec<Finding> {
        let mut findings = Vec::new();
        match self.track {
            Track::Categorization => {
                for section in Section::ALL {
                    for (question_id, response) in self.section_responses(section) {
                        if catalog::find(section, question_id).is_none() {
                            findings.push(Finding {
                                id: "catalog.unknown_question".to_string(),
                                title: format!("Unknown question {question_id}"),
                                body: format!(
                                    "Section {section} has no question {question_id}; the response scores 0."
                                ),
                                blocking: false,
                                question: Some(question_id.clone()),
                            });
                            continue;
                        }
                        let options = catalog::response_options_for(section, question_id);
                        if !options.contains(&response.label.as_str()) {
                            findings.push(unrecognized_label_finding(
                                question_id,
                                &response.label,
                                &options,
                                config.strict_labels(),
                            ));
                        }
                    }
                    let missing = catalog::questions(section)
                        .iter()
                        .map(|question| question.id)
                        .filter(|id| !self.section_responses(section).contains_key(*id))
                        .collect::<Vec<_>>();
                    if !missing.is_empty() {
                        findings.push(Finding {
                            id: "responses.missing".to_string(),
                            title: format!("Unanswered questions in {section}"),
                            body: format!(
                                "Unanswered questions contribute 0 to the section score: {}.",
                                missing.join(", ")
                            ),
                            blocking: false,
                            question: None,
                        });
                    }
                }
            }
            Track::PreScreening => {
                for (question_id, response) in &self.screening {
                    if screening::find(question_id).is_none() {
                        findings.push(Finding {
                            id: "catalog.unknown_question".to_string(),
                            title: format!("Unknown question {question_id}"),
                            body: format!(
                                "The screening questionnaire has no question {question_id}; the response scores 0."
                            ),
                            blocking: false,
                            question: Some(question_id.clone()),
                        });
                        continue;
                    }
                    if !screening::OPTIONS.contains(&response.label.as_str()) {
                        findings.push(unrecognized_label_finding(
                            question_id,
                            &response.label,
                            screening::OPTIONS,
                            config.strict_labels(),
                        ));
                    }
                }
                let missing = screening::QUESTIONS
                    .iter()
                    .map(|question| question.id)
                    .filter(|id| !self.screening.contains_key(*id))
                    .collect::<Vec<_>>();
                if !missing.is_empty() {
                    findings.push(Finding {
                        id: "responses.missing".to_string(),
                        title: "Unanswered screening questions".to_string(),
                        body: format!(
                            "Unanswered questions contribute 0 to the gating total: {}.",
                            missing.join(", ")
                        ),
                        blocking: false,
                        question: None,
                    });
                }
            }
        }
        findings
    }
}

fn upsert(
    responses: &mut BTreeMap<String, Response>,
    question_id: &str,
    label: &str,
    score: Score,
    remarks: Option<&str>,
) {
    match responses.get_mut(question_id) {
        Some(existing) => {
            existing.label = label.to_string();
            existing.score = score;
            if let Some(remarks) = remarks {
                existing.remarks = remarks.to_string();
            }
        }
        None => {
            responses.insert(
                question_id.to_string(),
                Response {
                    label: label.to_string(),
                    score,
                    remarks: remarks.unwrap_or_default().to_string(),
                },
            );
        }
    }
}

fn unrecognized_label_finding(
    question_id: &str,
    label: &str,
    options: &[&str],
    strict: bool,
) -> Finding {
    Finding {
        id: "labels.unrecognized".to_string(),
        title: format!("Unrecognized label on {question_id}"),
        body: format!(
            "\"{label}\" is not one of the resolved options ({}); it scores the catch-all worst case.",
            options.join(", ")
        ),
        blocking: strict,
        question: Some(question_id.to_string()),
    }
}
