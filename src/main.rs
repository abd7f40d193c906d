use clap::Parser;
use esgrisk::cli::{Cli, Commands, ReportFormat};
use esgrisk::error::EsgError;
use esgrisk::types::catalog::{Section, Track};
use esgrisk::types::config::EsgConfig;
use esgrisk::workbook::Workbook;
use esgrisk::{catalog, classify, config, portfolio, report, scoring, screening, template};
use std::path::Path;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const BLOCKING: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn run() -> Result<i32, EsgError> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Sections => {
            for section in catalog::sections() {
                println!("{} {}", section.ordinal(), section);
            }
            Ok(exit_code::SUCCESS)
        }
        Commands::Questions(cmd) => {
            let section: Section = cmd.section.into();
            for question in catalog::questions(section) {
                println!("{} {}", question.id, question.prompt);
                println!("  criteria: {}", question.criteria);
                println!(
                    "  options: {}",
                    catalog::response_options_for(section, question.id).join(" | ")
                );
                if let Some(guidance) = question.guidance {
                    println!("  guidance: {guidance}");
                }
            }
            Ok(exit_code::SUCCESS)
        }
        Commands::Template(cmd) => {
            let path = template::write_template(&cmd.output, cmd.track.into(), cmd.force)?;
            println!("template file: {}", path.display());
            Ok(exit_code::SUCCESS)
        }
        Commands::Score(cmd) => {
            let cfg = load_workbook_config(&cmd.workbook)?;
            let workbook = Workbook::load(&cmd.workbook, &cfg)?;
            let score_report = report::build_report(&workbook, &cfg);

            let format = match cmd.format {
                ReportFormat::Json => report::OutputFormat::Json,
                ReportFormat::Md => report::OutputFormat::Md,
            };
            let rendered = report::render(&score_report, format)?;
            println!("{rendered}");

            Ok(verdict_exit_code(&workbook))
        }
        Commands::Validate(cmd) => {
            let cfg = load_workbook_config(&cmd.workbook)?;
            // Load leniently so strict configs still get a report instead
            // of a parse failure on the first bad label.
            let lenient = EsgConfig {
                validation: None,
                ..cfg.clone()
            };
            let workbook = Workbook::load(&cmd.workbook, &lenient)?;
            let findings = workbook.validation_findings(&cfg);

            if findings.is_empty() {
                println!("validate: no findings");
                return Ok(exit_code::SUCCESS);
            }
            for finding in &findings {
                let level = if finding.blocking { "BLOCKING" } else { "WARN" };
                println!("[{}] {}: {}", level, finding.id, finding.title);
                println!("  {}", finding.body);
            }
            if findings.iter().any(|finding| finding.blocking) {
                Ok(exit_code::BLOCKING)
            } else {
                Ok(exit_code::WARNINGS)
            }
        }
        Commands::Portfolio(cmd) => {
            let cfg = config::load_config(&cmd.dir)?.unwrap_or_default();
            let entries = portfolio::sweep(&cmd.dir, &cfg)?;
            if entries.is_empty() {
                println!("portfolio: no workbooks found");
                return Ok(exit_code::SUCCESS);
            }
            println!("portfolio: {} workbook(s)", entries.len());
            for entry in &entries {
                let name = entry
                    .company
                    .clone()
                    .unwrap_or_else(|| entry.file.display().to_string());
                println!(
                    "- {} [{}] total {} => {}",
                    name, entry.track, entry.total, entry.verdict
                );
            }
            Ok(exit_code::SUCCESS)
        }
    }
}

fn load_workbook_config(workbook_path: &Path) -> Result<EsgConfig, EsgError> {
    let root = workbook_path.parent().unwrap_or_else(|| Path::new("."));
    Ok(config::load_config(root)?.unwrap_or_default())
}

fn verdict_exit_code(workbook: &Workbook) -> i32 {
    match workbook.track {
        Track::PreScreening => match classify::pre_screening(screening::total_score(workbook)) {
            classify::Decision::Go => exit_code::SUCCESS,
            classify::Decision::Caution => exit_code::WARNINGS,
            classify::Decision::NoGo => exit_code::BLOCKING,
        },
        Track::Categorization => match classify::categorization(scoring::total_score(workbook)) {
            classify::Category::C => exit_code::SUCCESS,
            classify::Category::B => exit_code::WARNINGS,
            classify::Category::A => exit_code::BLOCKING,
        },
    }
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default_filter = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
