use thiserror::Error;

use arcade_sift_lib::{ConfigValidationError, PresetError, SortError};

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Preset could not be read, written or validated
    #[error("Preset error: {0}")]
    Preset(#[from] PresetError),

    /// Filter options failed validation
    #[error("{0}")]
    Config(#[from] ConfigValidationError),

    /// The sort run failed
    #[error("{0}")]
    Sort(#[from] SortError),

    /// Background worker panicked or disconnected
    #[error("Worker error: {0}")]
    Worker(String),
}

impl CliError {
    pub(crate) fn worker(msg: impl Into<String>) -> Self {
        Self::Worker(msg.into())
    }
}
