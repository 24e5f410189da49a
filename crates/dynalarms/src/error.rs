//! Shell error types.

use std::path::PathBuf;

use dynalarms_core::AlarmsError;
use thiserror::Error;

/// Result type alias for the shell.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur while reading, transforming or writing a document.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid JSON in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Alarms(#[from] AlarmsError),
}
