//! Custom error types for the filament catalog and export pipeline.
//!
//! Every variant is recoverable at the point of the failing operation:
//! the shell reports it and returns to its main loop.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for catalog and export operations.
#[derive(Error, Debug)]
pub enum SwatchError {
    /// Catalog file exists but is not valid JSON or has the wrong shape.
    #[error("Catalog at {} is malformed: {message}", .path.display())]
    MalformedCatalog { path: PathBuf, message: String },

    /// Reading or writing a file failed.
    #[error("I/O failure on {}: {source}", .path.display())]
    IoFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Selection outside the valid 1-based range.
    #[error("Invalid {what} number {index}. Valid range: 1-{max}")]
    InvalidIndex {
        what: &'static str,
        index: usize,
        max: usize,
    },

    /// A required field was left blank.
    #[error("{0} must not be empty")]
    EmptyInput(&'static str),

    /// Profile has no colours to remove.
    #[error("No colours in profile \"{0}\"")]
    EmptyProfile(String),

    /// Flattening produced no export jobs.
    #[error("Nothing to export: add profiles and colours first")]
    EmptyCatalog,

    /// Input that could not be parsed.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No per-user config directory on this platform.
    #[error("Could not find config directory")]
    ConfigDirUnavailable,

    /// A renderer failed to produce its output.
    #[error("Render failed: {0}")]
    Render(String),
}

impl SwatchError {
    /// Wrap an `io::Error` with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SwatchError::IoFailure {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for swatch operations.
pub type Result<T> = std::result::Result<T, SwatchError>;
