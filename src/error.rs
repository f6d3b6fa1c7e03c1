//! Error types for the Veritas file integrity checker.

use std::path::PathBuf;
use thiserror::Error;

/// Command-level failures. Any of these aborts the running command.
///
/// Per-file read failures are not errors; see [`crate::types::HashOutcome`].
#[derive(Debug, Error)]
pub enum IntegrityError {
    #[error("{path} is not valid: {reason}")]
    PathError { path: PathBuf, reason: String },

    #[error("No baseline found at {store}. Run 'init' first.")]
    NoBaseline { store: PathBuf },

    #[error("Baseline store {path} is corrupt: {reason}")]
    CorruptStore { path: PathBuf, reason: String },

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to render report: {0}")]
    Report(#[from] serde_json::Error),
}

impl IntegrityError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        IntegrityError::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<config::ConfigError> for IntegrityError {
    fn from(err: config::ConfigError) -> Self {
        IntegrityError::Config(err.to_string())
    }
}
