pub mod json;
pub mod md;

use crate::error::EsgError;
use crate::types::catalog::{Section, Track};
use crate::types::config::EsgConfig;
use crate::types::report::{ScoreReport, Verdict};
use crate::types::scoring::SectionBreakdown;
use crate::workbook::Workbook;
use crate::{catalog, classify, scoring, screening};
use chrono::Utc;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render(report: &ScoreReport, format: OutputFormat) -> Result<String, EsgError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(EsgError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report)),
    }
}

/// Assembles the full report for a workbook: aggregation, verdict, and
/// validation findings, stamped with the catalog fingerprint.
pub fn build_report(workbook: &Workbook, config: &EsgConfig) -> ScoreReport {
    let findings = workbook.validation_findings(config);
    let (sections, total_score, verdict) = match workbook.track {
        Track::Categorization => {
            let sections = Section::ALL
                .iter()
                .map(|section| SectionBreakdown {
                    section: *section,
                    answered: workbook.section_responses(*section).len(),
                    score: scoring::section_score(workbook, *section),
                })
                .collect::<Vec<_>>();
            let total = scoring::total_score(workbook);
            let category = classify::categorization(total);
            (
                sections,
                total,
                Verdict::Categorization {
                    category: category.label().to_string(),
                },
            )
        }
        Track::PreScreening => {
            let total = screening::total_score(workbook);
            let decision = classify::pre_screening(total);
            (
                Vec::new(),
                total,
                Verdict::PreScreening {
                    decision: decision.label().to_string(),
                    action: decision.action().to_string(),
                },
            )
        }
    };

    ScoreReport {
        company: workbook.company.clone(),
        track: workbook.track,
        generated_at: Utc::now().to_rfc3339(),
        catalog_fingerprint: catalog::fingerprint(),
        answered: workbook.answered(),
        sections,
        total_score,
        verdict,
        findings,
    }
}
