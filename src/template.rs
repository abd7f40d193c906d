use crate::error::{EsgError, Result};
use crate::types::catalog::{Section, Track};
use crate::{catalog, screening};
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};

/// Writes a responses TOML pre-filled with every question of the track at
/// its default label (the first resolved option). Existing files are kept
/// unless `force` is set.
pub fn write_template(path: &Path, track: Track, force: bool) -> Result<PathBuf> {
    if path.exists() && !force {
        return Err(EsgError::OutputExists(path.display().to_string()));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, render_template(track))?;
    Ok(path.to_path_buf())
}

fn render_template(track: Track) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "# Generated by esgrisk v{}\n",
        env!("CARGO_PKG_VERSION")
    ));
    output.push_str(&format!("# catalog: {}\n", catalog::fingerprint()));
    output.push_str(&format!("# generated: {}\n\n", Utc::now().to_rfc3339()));
    output.push_str("company = \"\"\n");
    output.push_str(&format!("track = \"{track}\"\n"));

    match track {
        Track::Categorization => {
            for section in Section::ALL {
                for question in catalog::questions(section) {
                    let options = catalog::response_options_for(section, question.id);
                    output.push_str("\n[[responses]]\n");
                    output.push_str(&format!("# {}\n", question.prompt));
                    output.push_str(&format!("# options: {}\n", options.join(" | ")));
                    output.push_str(&format!("section = \"{section}\"\n"));
                    output.push_str(&format!("question = \"{}\"\n", question.id));
                    output.push_str(&format!("label = \"{}\"\n", options[0]));
                    output.push_str("remarks = \"\"\n");
                }
            }
        }
        Track::PreScreening => {
            for question in screening::QUESTIONS {
                output.push_str("\n[[responses]]\n");
                output.push_str(&format!("# {}\n", question.prompt));
                output.push_str(&format!("# options: {}\n", screening::OPTIONS.join(" | ")));
                output.push_str(&format!("question = \"{}\"\n", question.id));
                output.push_str(&format!("label = \"{}\"\n", screening::OPTIONS[0]));
                output.push_str("remarks = \"\"\n");
            }
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::config::EsgConfig;
    use crate::workbook::Workbook;
    use tempfile::TempDir;

    #[test]
    fn generated_template_loads_back_as_a_workbook() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("responses.toml");
        write_template(&path, Track::Categorization, false).expect("template should write");

        let config = EsgConfig::default();
        let workbook = Workbook::load(&path, &config).expect("template should parse");
        assert_eq!(workbook.track, Track::Categorization);
        let expected: usize = Section::ALL
            .iter()
            .map(|section| catalog::questions(*section).len())
            .sum();
        assert_eq!(workbook.answered(), expected);
        assert!(workbook.validation_findings(&config).is_empty());
    }

    #[test]
    fn pre_screening_template_covers_every_gating_question() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("screen.toml");
        write_template(&path, Track::PreScreening, false).expect("template should write");

        let config = EsgConfig::default();
        let workbook = Workbook::load(&path, &config).expect("template should parse");
        assert_eq!(workbook.answered(), screening::QUESTIONS.len());
    }

    #[test]
    fn existing_files_are_kept_without_force() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("responses.toml");
        std::fs::write(&path, "keep me").expect("seed file should write");

        let result = write_template(&path, Track::Categorization, false);
        assert!(matches!(result, Err(EsgError::OutputExists(_))));
        assert_eq!(
            std::fs::read_to_string(&path).expect("file should still read"),
            "keep me"
        );

        write_template(&path, Track::Categorization, true).expect("force should overwrite");
        assert!(std::fs::read_to_string(&path)
            .expect("file should read")
            .contains("[[responses]]"));
    }
}
