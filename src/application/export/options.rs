//! Export Request
//!
//! Everything one export transaction needs to know up front. Immutable once
//! the transaction starts.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::domain::services::LOCK_FILE_NAME;

/// Options for the export use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRequest {
    /// Lock document to export
    pub lock_path: PathBuf,
    /// Directory relative cookbook sources resolve against
    pub source_root: PathBuf,
    /// Export destination directory
    pub destination: PathBuf,
    /// Produce a single archive instead of a directory tree
    pub archive: bool,
    /// Replace existing destination content
    pub force: bool,
    /// Parent directory for the staging area
    pub staging_root: PathBuf,
}

impl ExportRequest {
    /// Build a request from a lock path (or policy file, or directory) and a destination
    pub fn new(lock_input: impl AsRef<Path>, destination: impl Into<PathBuf>) -> Self {
        let lock_path = resolve_lock_path(lock_input.as_ref());
        let source_root = lock_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        Self {
            lock_path,
            source_root,
            destination: destination.into(),
            archive: false,
            force: false,
            staging_root: std::env::temp_dir(),
        }
    }

    /// Apply configured defaults. Call before `with_archive`/`with_force`
    /// so explicit flags win.
    pub fn with_config(mut self, config: &Config) -> Self {
        self.archive = config.export.archive;
        self.force = config.export.force;
        self.staging_root = config.staging.root_or_default();
        self
    }

    pub fn with_archive(mut self, archive: bool) -> Self {
        self.archive = archive;
        self
    }

    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    pub fn with_source_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.source_root = root.into();
        self
    }

    pub fn with_staging_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.staging_root = root.into();
        self
    }
}

/// Map user input to the lock document it refers to.
///
/// - a directory means `<dir>/Policyfile.lock.json`
/// - a policy source `<name>.rb` means `<name>.lock.json` beside it
/// - anything else is taken as the lock path itself
pub fn resolve_lock_path(input: &Path) -> PathBuf {
    if input.is_dir() {
        return input.join(LOCK_FILE_NAME);
    }

    match input.extension().and_then(|e| e.to_str()) {
        Some("rb") => input.with_extension("lock.json"),
        _ => input.to_path_buf(),
    }
}
