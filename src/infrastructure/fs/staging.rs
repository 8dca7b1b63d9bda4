//! Staging area - the ephemeral directory an export is assembled in
//!
//! The directory name is derived from the process id and a second-resolution
//! timestamp, plus a random suffix from `tempfile`. The directory is removed
//! when the handle is released or dropped, whichever comes first.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use tempfile::TempDir;
use tracing::debug;

use crate::domain::services::ExportLayout;
use crate::error::{ExportError, ExportResult};

const STAGING_PREFIX: &str = "policy-export";

/// Exclusively owned working directory for one export transaction
#[derive(Debug)]
pub struct StagingArea {
    dir: TempDir,
    layout: ExportLayout,
}

impl StagingArea {
    /// Create a fresh staging directory under `root`.
    ///
    /// Fails with `ExportError::Staging` if `root` cannot be created or
    /// written to.
    pub fn acquire(root: &Path) -> ExportResult<Self> {
        let staging_error = |source| ExportError::Staging {
            root: root.to_path_buf(),
            source,
        };

        fs::create_dir_all(root).map_err(staging_error)?;

        let prefix = format!(
            "{}-{}-{}-",
            STAGING_PREFIX,
            std::process::id(),
            Utc::now().format("%Y%m%d%H%M%S")
        );
        let dir = tempfile::Builder::new()
            .prefix(&prefix)
            .tempdir_in(root)
            .map_err(staging_error)?;

        debug!(path = %dir.path().display(), "acquired staging area");
        let layout = ExportLayout::new(dir.path());
        Ok(Self { dir, layout })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Artifact paths inside the staging area
    pub fn layout(&self) -> &ExportLayout {
        &self.layout
    }

    /// Remove the staging directory, reporting any failure.
    ///
    /// Dropping the handle also removes it, but silently.
    pub fn release(self) -> ExportResult<()> {
        let path: PathBuf = self.dir.path().to_path_buf();
        let root = path.parent().map(Path::to_path_buf).unwrap_or_default();
        self.dir
            .close()
            .map_err(|source| ExportError::Staging { root, source })?;
        debug!(path = %path.display(), "released staging area");
        Ok(())
    }
}
