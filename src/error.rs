//! Error types for u-courselog.

use std::path::PathBuf;

use thiserror::Error;

use crate::validation::ValidationError;

/// Result type for layout operations.
pub type Result<T> = std::result::Result<T, LayoutError>;

/// Errors raised while computing a layout.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// One or more courses cannot be laid out.
    #[error("invalid course input ({} problem(s)): {}", .0.len(), summarize(.0))]
    InvalidInput(Vec<ValidationError>),

    /// The engine configuration cannot produce finite geometry.
    #[error("invalid layout config: {message}")]
    InvalidConfig { message: String },
}

impl LayoutError {
    /// Validation problems carried by this error, if any.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Self::InvalidInput(errors) => errors,
            Self::InvalidConfig { .. } => &[],
        }
    }
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type for persistence operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Errors raised while loading or saving the course list.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no data directory: set COURSELOG_DATA_DIR or a home directory")]
    NoDataDir,
}
