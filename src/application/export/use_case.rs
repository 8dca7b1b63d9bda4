//! Export Use Case
//!
//! Orchestrates one export transaction:
//! 1. Load and validate the lock
//! 2. Check the destination for conflicts
//! 3. Acquire a fresh staging area
//! 4. Assemble the export inside it
//! 5. Commit it to the destination (archive or directory)
//! 6. Release the staging area
//!
//! The staging area is released on every path out of step 3, including
//! failures. Nothing at the destination changes before step 5.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::entities::ValidatedLock;
use crate::domain::ports::{ExportEvent, ExportEventSink, NoopEventSink, PolicyLockRepository};
use crate::error::ExportResult;
use crate::infrastructure::fs::StagingArea;
use crate::infrastructure::JsonLockRepository;

use super::assembler::ExportAssembler;
use super::commit::{commit_archive, commit_directory};
use super::guard::ConflictGuard;
use super::options::ExportRequest;
use super::result::ExportOutcome;
use super::validator::LockValidator;

/// Export use case - one instance per request
pub struct ExportUseCase<R = JsonLockRepository>
where
    R: PolicyLockRepository,
{
    request: ExportRequest,
    repo: R,
    events: Arc<dyn ExportEventSink>,
    lock: Option<ValidatedLock>,
}

impl ExportUseCase<JsonLockRepository> {
    pub fn new(request: ExportRequest) -> Self {
        Self::with_repository(request, JsonLockRepository::new())
    }
}

impl<R> ExportUseCase<R>
where
    R: PolicyLockRepository,
{
    pub fn with_repository(request: ExportRequest, repo: R) -> Self {
        Self {
            request,
            repo,
            events: Arc::new(NoopEventSink),
            lock: None,
        }
    }

    /// Report progress to `events`
    pub fn with_events(mut self, events: Arc<dyn ExportEventSink>) -> Self {
        self.events = events;
        self
    }

    pub fn request(&self) -> &ExportRequest {
        &self.request
    }

    /// Resolved path of the lock document
    pub fn lock_path(&self) -> &Path {
        &self.request.lock_path
    }

    /// Name of the policy, once the lock has been loaded
    pub fn policy_name(&self) -> Option<&str> {
        self.lock.as_ref().map(ValidatedLock::name)
    }

    /// Where the archive is (or would be) written, once the lock has been loaded
    pub fn archive_path(&self) -> Option<PathBuf> {
        self.lock
            .as_ref()
            .map(|lock| self.request.destination.join(lock.lock().archive_file_name()))
    }

    /// Load and validate the lock, caching it for later calls
    pub fn load_lock(&mut self) -> ExportResult<&ValidatedLock> {
        let lock = match self.lock.take() {
            Some(lock) => lock,
            None => LockValidator::new(&self.request.lock_path, &self.request.source_root)
                .load(&self.repo)?,
        };
        let lock: &ValidatedLock = self.lock.insert(lock);
        Ok(lock)
    }

    /// Run the whole transaction
    pub fn run(&mut self) -> ExportResult<ExportOutcome> {
        let lock = self.load_lock()?.clone();
        self.export(&lock)
    }

    /// Export an already validated lock
    pub fn export(&self, lock: &ValidatedLock) -> ExportResult<ExportOutcome> {
        let request = &self.request;

        ConflictGuard::new(&request.destination).check(request.force, request.archive)?;

        info!(
            policy = lock.name(),
            revision = lock.revision_id(),
            destination = %request.destination.display(),
            archive = request.archive,
            "exporting policy"
        );
        self.events.on_event(ExportEvent::Started {
            policy: lock.name().to_string(),
            lock: lock.lock_path().to_path_buf(),
            destination: request.destination.clone(),
            package_count: lock.packages().len(),
            archive: request.archive,
        });

        let staging = StagingArea::acquire(&request.staging_root)?;
        match self.stage_and_commit(lock, &staging) {
            Ok(outcome) => {
                staging.release()?;
                self.events.on_event(ExportEvent::Completed {
                    package_count: outcome.packages.len(),
                    archive: outcome.archive.as_ref().map(|a| a.path.clone()),
                    digest: outcome.archive.as_ref().map(|a| a.digest.clone()),
                });
                Ok(outcome)
            }
            Err(err) => {
                if let Err(cleanup) = staging.release() {
                    warn!(error = %cleanup, "failed to remove staging area");
                }
                Err(err)
            }
        }
    }

    fn stage_and_commit(
        &self,
        lock: &ValidatedLock,
        staging: &StagingArea,
    ) -> ExportResult<ExportOutcome> {
        let request = &self.request;

        ExportAssembler::new(&self.repo, Arc::clone(&self.events)).assemble(lock, staging)?;

        let mut outcome = ExportOutcome {
            policy_name: lock.name().to_string(),
            destination: request.destination.clone(),
            packages: lock.packages().iter().map(|p| p.export_dir_name()).collect(),
            committed: Vec::new(),
            archive: None,
        };

        if request.archive {
            outcome.archive = Some(commit_archive(lock, staging, &request.destination, &self.events)?);
        } else {
            outcome.committed = commit_directory(lock, staging, &request.destination, &self.events)?;
        }

        Ok(outcome)
    }
}
