use crate::types::report::{ScoreReport, Verdict};

pub fn to_markdown(report: &ScoreReport) -> String {
    let mut output = String::new();
    output.push_str("# ESG Score Report\n\n");
    if let Some(company) = &report.company {
        output.push_str(&format!("Company: {company}\n"));
    }
    output.push_str(&format!("Track: {}\n", report.track));
    output.push_str(&format!("Generated: {}\n", report.generated_at));
    output.push_str(&format!(
        "Catalog: {}\n\n",
        &report.catalog_fingerprint[..12.min(report.catalog_fingerprint.len())]
    ));

    if !report.sections.is_empty() {
        output.push_str("## Section Scores\n\n");
        for row in &report.sections {
            output.push_str(&format!(
                "- {}: {} ({} answered)\n",
                row.section, row.score, row.answered
            ));
        }
        output.push('\n');
    }

    output.push_str(&format!(
        "Total score: {} ({} response(s))\n\n",
        report.total_score, report.answered
    ));

    output.push_str("## Verdict\n\n");
    match &report.verdict {
        Verdict::PreScreening { decision, action } => {
            output.push_str(&format!("Decision: {decision}\n"));
            output.push_str(&format!("Action: {action}\n\n"));
        }
        Verdict::Categorization { category } => {
            output.push_str(&format!("Category: {category}\n\n"));
        }
    }

    output.push_str("## Findings\n\n");
    if report.findings.is_empty() {
        output.push_str("- none\n");
    } else {
        for finding in &report.findings {
            output.push_str(&format!(
                "- [{}] {}: {}\n",
                if finding.blocking { "blocking" } else { "warning" },
                finding.title,
                finding.body
            ));
        }
    }

    output
}
