use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Stats file missing or unreadable: {}. Run the analysis pipeline first.", .0.display())]
    DataUnavailable(PathBuf),

    #[error("Malformed {field} for {champion}: {value:?}")]
    MalformedField {
        champion: String,
        field: &'static str,
        value: String,
    },

    #[error("Malformed dataset row: {0}")]
    MalformedRow(String),

    #[error("Duplicate champion in dataset: {0}")]
    DuplicateChampion(String),

    #[error("Champion not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
