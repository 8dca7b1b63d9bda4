//! Commit strategies
//!
//! Make a fully staged export visible at the destination.
//!
//! Archive mode writes a single `<name>-<revision>.tgz` beside any existing
//! content; the file only appears once complete.
//!
//! Directory mode replaces the generated directories and files one by one.
//! A failure part-way through can leave the destination mixed; the error
//! says so.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::entities::ValidatedLock;
use crate::domain::ports::{ExportEvent, ExportEventSink};
use crate::domain::services::ExportLayout;
use crate::error::{ExportError, ExportResult};
use crate::infrastructure::fs::{move_path, remove_path, StagingArea};
use crate::infrastructure::{write_archive, ArchiveSummary};

/// Archive the staging area into `destination/<name>-<revision>.tgz`
pub fn commit_archive(
    lock: &ValidatedLock,
    staging: &StagingArea,
    destination: &Path,
    events: &Arc<dyn ExportEventSink>,
) -> ExportResult<ArchiveSummary> {
    let archive_path = destination.join(lock.lock().archive_file_name());

    let summary = write_archive(staging.path(), &archive_path).map_err(|source| {
        ExportError::Assembly {
            lock: lock.lock_path().to_path_buf(),
            path: archive_path.clone(),
            message: "writing archive".to_string(),
            source: Some(source),
        }
    })?;

    info!(
        archive = %summary.path.display(),
        entries = summary.entries.len(),
        digest = %summary.digest,
        "wrote export archive"
    );
    events.on_event(ExportEvent::Committed {
        path: summary.path.clone(),
    });
    Ok(summary)
}

/// Move the staged tree into `destination`, replacing generated content.
///
/// Returns the destination paths that were replaced, in commit order.
pub fn commit_directory(
    lock: &ValidatedLock,
    staging: &StagingArea,
    destination: &Path,
    events: &Arc<dyn ExportEventSink>,
) -> ExportResult<Vec<PathBuf>> {
    let commit_error = |message: String| {
        let lock = lock.lock_path().to_path_buf();
        let destination = destination.to_path_buf();
        move |source| ExportError::Commit {
            lock,
            destination,
            message,
            source,
        }
    };

    fs::create_dir_all(destination)
        .map_err(commit_error("creating destination".to_string()))?;

    let target = ExportLayout::new(destination);
    for stale in [target.cookbooks_dir(), target.data_bags_dir()] {
        remove_path(&stale).map_err(commit_error(format!("removing {}", stale.display())))?;
    }

    let mut committed = Vec::new();
    let staged = staging.layout().top_level_entries();
    let finals = target.top_level_entries();
    for (from, to) in staged.iter().zip(finals) {
        move_path(from, &to).map_err(commit_error(format!("moving {}", to.display())))?;
        debug!(path = %to.display(), "committed");
        events.on_event(ExportEvent::Committed { path: to.clone() });
        committed.push(to);
    }

    info!(destination = %destination.display(), "exported policy into directory");
    Ok(committed)
}
