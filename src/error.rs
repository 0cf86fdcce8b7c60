use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProcessingError>;

#[derive(Error, Debug)]
pub enum ProcessingError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Date parsing error: {0}")]
    DateParse(#[from] chrono::ParseError),

    #[error("SQLite store error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Settings error: {0}")]
    Settings(#[from] config::ConfigError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),

    #[error("Invalid data format: {0}")]
    InvalidFormat(String),

    #[error("No cities selected: select at least one city")]
    EmptySelection,
}

impl ProcessingError {
    /// Usage errors are reported as warnings rather than failures.
    pub fn is_usage_warning(&self) -> bool {
        matches!(self, ProcessingError::EmptySelection)
    }
}
