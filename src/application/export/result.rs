//! Export Outcome

use std::path::PathBuf;

use crate::infrastructure::ArchiveSummary;

/// Result of a successful export transaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOutcome {
    /// Name of the exported policy
    pub policy_name: String,
    /// Destination directory
    pub destination: PathBuf,
    /// Exported package directory names (`<name>-<version>`)
    pub packages: Vec<String>,
    /// Destination paths that were replaced (directory mode)
    pub committed: Vec<PathBuf>,
    /// The written archive (archive mode)
    pub archive: Option<ArchiveSummary>,
}

impl ExportOutcome {
    pub fn archive_path(&self) -> Option<&PathBuf> {
        self.archive.as_ref().map(|a| &a.path)
    }
}
