//! Error types for policy export
//!
//! Uses `thiserror` for library errors. Every variant that wraps a lower
//! level failure keeps it as its `source`, so callers can walk the chain.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::value_objects::IgnoreError;

/// Result type alias for export operations
pub type ExportResult<T> = Result<T, ExportError>;

/// Main error type for export operations
#[derive(Error, Debug)]
pub enum ExportError {
    /// The lock document does not exist where it was expected
    #[error("lock file not found at {path} - run `install` to generate it first")]
    LockNotFound { path: PathBuf },

    /// The lock document is malformed or inconsistent
    #[error("invalid lock {path}: {message}")]
    LockInvalid {
        path: PathBuf,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The destination already holds entries an export would overwrite
    #[error(
        "export to {destination} would overwrite existing files (use force to replace them):\n  {}",
        paths_list(.paths)
    )]
    Conflict {
        destination: PathBuf,
        paths: Vec<PathBuf>,
    },

    /// The destination exists but cannot receive an export
    #[error("export destination {destination} is not a directory")]
    InvalidDestination { destination: PathBuf },

    /// The destination could not be inspected for existing content
    #[error("cannot inspect export destination {destination}: {source}")]
    DestinationUnreadable {
        destination: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The staging area could not be created or removed
    #[error("staging area under {root} unavailable: {source}")]
    Staging {
        root: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Building the export inside the staging area failed
    #[error("failed to assemble export of {lock} at {path}: {message}")]
    Assembly {
        lock: PathBuf,
        path: PathBuf,
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Moving staged content into place failed; the destination may be partially updated
    #[error(
        "failed to commit export of {lock} into {destination} ({message}); \
         the destination may be left in an inconsistent state"
    )]
    Commit {
        lock: PathBuf,
        destination: PathBuf,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file could not be read or parsed
    #[error("invalid configuration {path}: {message}")]
    InvalidConfig { path: PathBuf, message: String },

    /// A package ignore file could not be loaded
    #[error("failed to load ignore rules for package '{package}': {source}")]
    Ignore {
        package: String,
        #[source]
        source: IgnoreError,
    },
}

impl ExportError {
    /// Build a `LockInvalid` error without an underlying cause
    pub fn lock_invalid(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::LockInvalid {
            path: path.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Whether the destination may have been partially modified
    pub fn leaves_destination_inconsistent(&self) -> bool {
        matches!(self, Self::Commit { .. })
    }
}

fn paths_list(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join("\n  ")
}
