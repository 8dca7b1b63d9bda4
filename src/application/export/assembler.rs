//! Export assembly
//!
//! Builds the complete export tree inside a staging area:
//!
//! ```text
//! cookbooks/<name>-<version>/...        filtered package copies
//! data_bags/policyfiles/<name>-local.json
//! Policyfile.lock.json
//! client.rb
//! ```
//!
//! Nothing outside the staging area is written.

use std::fs;
use std::io;
use std::path::Path;
use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::domain::entities::{PackageLock, ValidatedLock};
use crate::domain::ports::{ExportEvent, ExportEventSink, PolicyLockRepository};
use crate::domain::services::{client_config, policy_data_record, policy_item_id, ExportLayout};
use crate::error::{ExportError, ExportResult};
use crate::infrastructure::fs::{copy_tree, remove_path, StagingArea};

use super::filter::{FilterError, PackageFilter};
use super::validator::METADATA_JSON;

/// Ruby metadata cannot be evaluated here and is replaced by the JSON form
const METADATA_RB: &str = "metadata.rb";

/// Writes a validated lock's export into a staging area
pub struct ExportAssembler<'a> {
    repo: &'a dyn PolicyLockRepository,
    events: Arc<dyn ExportEventSink>,
    filter: PackageFilter,
}

impl<'a> ExportAssembler<'a> {
    pub fn new(repo: &'a dyn PolicyLockRepository, events: Arc<dyn ExportEventSink>) -> Self {
        Self {
            repo,
            events,
            filter: PackageFilter::new(),
        }
    }

    /// Populate `staging` with the full export of `lock`
    pub fn assemble(&self, lock: &ValidatedLock, staging: &StagingArea) -> ExportResult<()> {
        let layout = staging.layout();
        let lock_path = lock.lock_path();

        for dir in [layout.cookbooks_dir(), layout.policy_data_dir()] {
            fs::create_dir_all(&dir).map_err(assembly_error(lock_path, &dir, "creating directory"))?;
        }

        for (index, package) in lock.packages().iter().enumerate() {
            let file_count = self.stage_package(lock_path, layout, package)?;
            debug!(
                cookbook = package.name(),
                version = %package.version(),
                files = file_count,
                "staged cookbook"
            );
            if self.events.wants_detailed_events() {
                self.events.on_event(ExportEvent::PackageStaged {
                    index,
                    name: package.name().to_string(),
                    version: package.version().to_string(),
                    file_count,
                });
            }
        }

        self.write_policy_data(lock, layout)?;

        self.repo.save(lock.lock(), &layout.lock_file())?;
        write_file(lock_path, &layout.config_file(), &client_config(lock.name()))?;

        Ok(())
    }

    /// Copy one package into `cookbooks/<name>-<version>` and pin its metadata
    fn stage_package(
        &self,
        lock_path: &Path,
        layout: &ExportLayout,
        package: &PackageLock,
    ) -> ExportResult<usize> {
        let target = layout.cookbook_dir(&package.export_dir_name());
        fs::create_dir_all(&target).map_err(assembly_error(lock_path, &target, "creating directory"))?;

        let entries = self
            .filter
            .filter(package.source_dir())
            .map_err(|e| match e {
                FilterError::Ignore(source) => ExportError::Ignore {
                    package: package.name().to_string(),
                    source,
                },
                FilterError::Io(source) => ExportError::Assembly {
                    lock: lock_path.to_path_buf(),
                    path: package.source_dir().to_path_buf(),
                    message: "listing cookbook source".to_string(),
                    source: Some(source),
                },
            })?;

        let mut file_count = 0;
        for entry in entries {
            let Some(name) = entry.file_name() else {
                continue;
            };
            file_count += copy_tree(&entry, &target.join(name))
                .map_err(assembly_error(lock_path, &entry, "copying cookbook file"))?;
        }

        for stale in [METADATA_RB, METADATA_JSON] {
            let path = target.join(stale);
            remove_path(&path).map_err(assembly_error(lock_path, &path, "removing source metadata"))?;
        }

        let metadata = Value::Object(package.pinned_metadata());
        write_file(lock_path, &target.join(METADATA_JSON), &to_pretty_json(&metadata))?;

        Ok(file_count)
    }

    fn write_policy_data(&self, lock: &ValidatedLock, layout: &ExportLayout) -> ExportResult<()> {
        let path = layout.policy_data_file(&policy_item_id(lock.name()));
        let document = serde_json::to_value(lock.lock()).map_err(|e| ExportError::Assembly {
            lock: lock.lock_path().to_path_buf(),
            path: path.clone(),
            message: format!("serializing lock document: {e}"),
            source: None,
        })?;

        let record = policy_data_record(lock.name(), &document);
        write_file(lock.lock_path(), &path, &to_pretty_json(&record))
    }
}

fn to_pretty_json(value: &Value) -> String {
    // Serializing an in-memory `Value` to a string cannot fail
    let mut content = serde_json::to_string_pretty(value).unwrap_or_default();
    content.push('\n');
    content
}

fn write_file(lock_path: &Path, path: &Path, content: &str) -> ExportResult<()> {
    fs::write(path, content).map_err(assembly_error(lock_path, path, "writing file"))
}

fn assembly_error<'p>(
    lock_path: &'p Path,
    path: &'p Path,
    message: &'static str,
) -> impl FnOnce(io::Error) -> ExportError + 'p {
    move |source| ExportError::Assembly {
        lock: lock_path.to_path_buf(),
        path: path.to_path_buf(),
        message: message.to_string(),
        source: Some(source),
    }
}
