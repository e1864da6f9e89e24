//! Error types shared by the dataset loader and the headless commands.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    /// Reading a dataset or config file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A dataset file is not a valid JSON array of consent records.
    #[error("Invalid consent data: {0}")]
    Json(#[from] serde_json::Error),

    /// Two records share the same id.
    #[error("Duplicate consent id: {0}")]
    DuplicateId(String),

    /// `$HOME` could not be resolved, so there is nowhere to keep the config.
    #[error("Could not determine home directory")]
    HomeDirNotFound,
}
