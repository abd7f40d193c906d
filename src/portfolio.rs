use crate::error::{EsgError, Result};
use crate::types::catalog::Track;
use crate::types::config::EsgConfig;
use crate::types::scoring::Score;
use crate::workbook::Workbook;
use crate::{classify, config, scoring, screening};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct PortfolioEntry {
    pub file: PathBuf,
    pub company: Option<String>,
    pub track: Track,
    pub answered: usize,
    pub total: Score,
    pub verdict: &'static str,
}

/// Scores every responses file under a directory, worst total first.
/// Config and unreadable files are skipped with a warning rather than
/// failing the whole sweep.
pub fn sweep(dir: &Path, config: &EsgConfig) -> Result<Vec<PortfolioEntry>> {
    if !dir.exists() {
        return Err(EsgError::PathNotFound(dir.display().to_string()));
    }

    let mut entries = Vec::new();
    for entry in WalkDir::new(dir).into_iter().filter_map(|entry| entry.ok()) {
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some("toml") {
            continue;
        }
        if is_config_file(path) {
            continue;
        }
        match Workbook::load(path, config) {
            Ok(workbook) => entries.push(summarize(path, &workbook)),
            Err(error) => {
                tracing::warn!(file = %path.display(), %error, "skipping unreadable workbook");
            }
        }
    }

    entries.sort_by(|a, b| {
        b.total
            .partial_cmp(&a.total)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.file.cmp(&b.file))
    });
    Ok(entries)
}

fn is_config_file(path: &Path) -> bool {
    let name = path.file_name().and_then(|name| name.to_str());
    name == Some(config::DEFAULT_CONFIG_FILE)
        || path
            .components()
            .any(|component| component.as_os_str() == ".esg")
}

fn summarize(path: &Path, workbook: &Workbook) -> PortfolioEntry {
    let (total, verdict) = match workbook.track {
        Track::PreScreening => {
            let total = screening::total_score(workbook);
            (total, classify::pre_screening(total).label())
        }
        Track::Categorization => {
            let total = scoring::total_score(workbook);
            (total, classify::categorization(total).label())
        }
    };
    PortfolioEntry {
        file: path.to_path_buf(),
        company: workbook.company.clone(),
        track: workbook.track,
        answered: workbook.answered(),
        total,
        verdict,
    }
}
