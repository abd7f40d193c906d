use thiserror::Error;

#[derive(Error, Debug)]
pub enum EsgError {
    #[error("workbook file not found: {0}")]
    WorkbookNotFound(String),

    #[error("workbook parse error: {0}")]
    WorkbookParse(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("label \"{label}\" is not a valid response option for question {question}")]
    InvalidLabel { question: String, label: String },

    #[error("output file already exists: {0} (use --force to overwrite)")]
    OutputExists(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EsgError>;
