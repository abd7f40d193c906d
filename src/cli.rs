use crate::types::catalog::{Section, Track};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "esgrisk",
    version,
    about = "ESG pre-screening and risk categorization CLI for portfolio companies"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the questionnaire sections in order
    Sections,
    /// Show a section's questions, criteria, and response options
    Questions(QuestionsCommand),
    /// Write a pre-filled responses file for a track
    Template(TemplateCommand),
    /// Score a responses file and derive the verdict
    Score(ScoreCommand),
    /// Check a responses file against the catalog without scoring
    Validate(ValidateCommand),
    /// Score every responses file under a directory
    Portfolio(PortfolioCommand),
}

#[derive(Clone, Debug, ValueEnum)]
pub enum SectionArg {
    Policy,
    Esg,
    Social,
    Environmental,
    Impact,
}

impl From<SectionArg> for Section {
    fn from(value: SectionArg) -> Self {
        match value {
            SectionArg::Policy => Section::Policy,
            SectionArg::Esg => Section::Esg,
            SectionArg::Social => Section::Social,
            SectionArg::Environmental => Section::Environmental,
            SectionArg::Impact => Section::Impact,
        }
    }
}

#[derive(Clone, Debug, ValueEnum)]
pub enum TrackArg {
    PreScreening,
    Categorization,
}

impl From<TrackArg> for Track {
    fn from(value: TrackArg) -> Self {
        match value {
            TrackArg::PreScreening => Track::PreScreening,
            TrackArg::Categorization => Track::Categorization,
        }
    }
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

#[derive(Args)]
pub struct QuestionsCommand {
    #[arg(value_enum)]
    pub section: SectionArg,
}

#[derive(Args)]
pub struct TemplateCommand {
    pub output: PathBuf,
    #[arg(long, value_enum, default_value = "categorization")]
    pub track: TrackArg,
    #[arg(long)]
    pub force: bool,
}

#[derive(Args)]
pub struct ScoreCommand {
    pub workbook: PathBuf,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct ValidateCommand {
    pub workbook: PathBuf,
}

#[derive(Args)]
pub struct PortfolioCommand {
    pub dir: PathBuf,
}
