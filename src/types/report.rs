use crate::types::catalog::Track;
use crate::types::scoring::{Score, SectionBreakdown};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Finding {
    pub id: String,
    pub title: String,
    pub body: String,
    pub blocking: bool,
    pub question: Option<String>,
}

/// The verdict derived from a workbook's total score. Labels and action
/// strings are fixed investment-committee policy, not presentation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    PreScreening { decision: String, action: String },
    Categorization { category: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreReport {
    pub company: Option<String>,
    pub track: Track,
    pub generated_at: String,
    pub catalog_fingerprint: String,
    pub answered: usize,
    pub sections: Vec<SectionBreakdown>,
    pub total_score: Score,
    pub verdict: Verdict,
    pub findings: Vec<Finding>,
}
