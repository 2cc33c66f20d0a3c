use thiserror::Error;

use crate::report::ValidationErrors;

#[derive(Error, Debug)]
pub enum LostFoundError {
    #[error("Corrupt report store: {0}")]
    StorageCorrupt(String),

    #[error("Duplicate report id: {0}")]
    DuplicateReport(String),

    #[error("Invalid report type: {0}")]
    InvalidKind(String),

    #[error("{0}")]
    Validation(#[from] ValidationErrors),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

pub type Result<T> = std::result::Result<T, LostFoundError>;
