//! Conflict guard
//!
//! Refuses a directory-mode export when the destination already holds
//! exported content, unless the caller asked to replace it.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::domain::services::{ExportLayout, COOKBOOKS_DIR, DATA_BAGS_DIR, LOCK_FILE_NAME};
use crate::error::{ExportError, ExportResult};

/// Checks an export destination before any staging work starts
#[derive(Debug, Clone)]
pub struct ConflictGuard {
    destination: PathBuf,
}

impl ConflictGuard {
    pub fn new(destination: impl Into<PathBuf>) -> Self {
        Self {
            destination: destination.into(),
        }
    }

    /// Destination-relative paths an export would overwrite, sorted.
    ///
    /// A non-directory at `cookbooks` or `data_bags` is reported by its own
    /// name, since the commit replaces it whole.
    pub fn conflicts(&self) -> io::Result<Vec<PathBuf>> {
        let layout = ExportLayout::new(&self.destination);
        let mut conflicts = Vec::new();

        for (dir, prefix) in [
            (layout.cookbooks_dir(), COOKBOOKS_DIR),
            (layout.data_bags_dir(), DATA_BAGS_DIR),
        ] {
            if fs::symlink_metadata(&dir).is_err() {
                continue;
            }
            if !dir.is_dir() {
                conflicts.push(PathBuf::from(prefix));
                continue;
            }
            for entry in fs::read_dir(&dir)? {
                conflicts.push(Path::new(prefix).join(entry?.file_name()));
            }
        }

        if fs::symlink_metadata(layout.lock_file()).is_ok() {
            conflicts.push(PathBuf::from(LOCK_FILE_NAME));
        }

        conflicts.sort();
        Ok(conflicts)
    }

    /// Fail with `Conflict` if the export would overwrite existing entries.
    ///
    /// Archive exports never touch existing content and are exempt; `force`
    /// turns the failure into a warning.
    pub fn check(&self, force: bool, archive: bool) -> ExportResult<()> {
        if self.destination.exists() && !self.destination.is_dir() {
            return Err(ExportError::InvalidDestination {
                destination: self.destination.clone(),
            });
        }

        if archive {
            return Ok(());
        }

        let conflicts = self
            .conflicts()
            .map_err(|source| ExportError::DestinationUnreadable {
                destination: self.destination.clone(),
                source,
            })?;

        if conflicts.is_empty() {
            return Ok(());
        }

        if force {
            warn!(
                destination = %self.destination.display(),
                count = conflicts.len(),
                "replacing existing export content"
            );
            return Ok(());
        }

        Err(ExportError::Conflict {
            destination: self.destination.clone(),
            paths: conflicts,
        })
    }
}
