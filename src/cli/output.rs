//! CLI output: error mapping and exit statuses.

use crate::cli::presentation::{Palette, Tag};
use crate::error::IntegrityError;

/// Process exit status for each command outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command succeeded; for check, every file verified ok
    Success,
    /// Check completed and found modified or missing files
    Drift,
    PathError,
    NoBaseline,
    CorruptStore,
    Io,
    Config,
    /// Malformed invocation such as an unknown flag or a bad flag value
    Usage,
}

impl ExitStatus {
    pub fn code(self) -> i32 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::Drift => 1,
            ExitStatus::PathError => 2,
            ExitStatus::NoBaseline => 3,
            ExitStatus::CorruptStore => 4,
            ExitStatus::Io => 5,
            ExitStatus::Config => 6,
            ExitStatus::Usage => 64,
        }
    }
}

impl From<&IntegrityError> for ExitStatus {
    fn from(e: &IntegrityError) -> Self {
        match e {
            IntegrityError::PathError { .. } => ExitStatus::PathError,
            IntegrityError::NoBaseline { .. } => ExitStatus::NoBaseline,
            IntegrityError::CorruptStore { .. } => ExitStatus::CorruptStore,
            IntegrityError::Io { .. } | IntegrityError::Report(_) => ExitStatus::Io,
            IntegrityError::Config(_) => ExitStatus::Config,
        }
    }
}

/// Map domain errors to the line printed on stderr.
pub fn map_error(e: &IntegrityError, palette: &Palette) -> String {
    palette.line(Tag::Error, &e.to_string())
}
