use std::path::PathBuf;

use thiserror::Error;

use arcade_sift_catalog::CatalogError;

/// A single problem found while validating filter options.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigIssue {
    /// A numeric preference below its allowed minimum
    #[error("{field} must be at least {min}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
    },

    /// Orientation other than horizontal, vertical or both
    #[error("unknown orientation \"{0}\" (expected horizontal, vertical or both)")]
    UnknownOrientation(String),
}

/// Every issue found in one set of filter options.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid filter configuration: {}", join_issues(.issues))]
pub struct ConfigValidationError {
    pub issues: Vec<ConfigIssue>,
}

fn join_issues(issues: &[ConfigIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Errors that can occur while loading or saving a preset.
#[derive(Debug, Error)]
pub enum PresetError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML write error: {0}")]
    TomlWrite(#[from] toml::ser::Error),

    #[error(transparent)]
    Config(#[from] ConfigValidationError),
}

/// Fatal errors that stop a sort run before any asset is selected.
#[derive(Debug, Error)]
pub enum SortError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{what} not found: {}", .path.display())]
    MissingPath { what: &'static str, path: PathBuf },
}

impl SortError {
    pub fn missing_path(what: &'static str, path: impl Into<PathBuf>) -> Self {
        Self::MissingPath {
            what,
            path: path.into(),
        }
    }
}
