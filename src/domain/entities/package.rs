//! Package lock entity - a cookbook ready to be exported
//!
//! Produced by lock validation: the version is proven concrete, the source
//! directory exists, and the cookbook's metadata document has been loaded.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use super::PolicyLock;
use crate::domain::value_objects::ResolvedVersion;

/// A validated cookbook pinned by a policy lock
#[derive(Debug, Clone, PartialEq)]
pub struct PackageLock {
    name: String,
    version: ResolvedVersion,
    source_dir: PathBuf,
    metadata: Map<String, Value>,
}

impl PackageLock {
    pub fn new(
        name: impl Into<String>,
        version: ResolvedVersion,
        source_dir: impl Into<PathBuf>,
        metadata: Map<String, Value>,
    ) -> Self {
        Self {
            name: name.into(),
            version,
            source_dir: source_dir.into(),
            metadata,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &ResolvedVersion {
        &self.version
    }

    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    pub fn metadata(&self) -> &Map<String, Value> {
        &self.metadata
    }

    /// Directory name inside `cookbooks/`: `<name>-<version>`
    pub fn export_dir_name(&self) -> String {
        format!("{}-{}", self.name, self.version)
    }

    /// Copy of the metadata document with `version` pinned to the resolved version
    pub fn pinned_metadata(&self) -> Map<String, Value> {
        let mut metadata = self.metadata.clone();
        metadata
            .entry("name")
            .or_insert_with(|| Value::String(self.name.clone()));
        metadata.insert(
            "version".to_string(),
            Value::String(self.version.to_string()),
        );
        metadata
    }
}

/// A policy lock whose cookbooks have all been validated
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedLock {
    lock: PolicyLock,
    lock_path: PathBuf,
    packages: Vec<PackageLock>,
}

impl ValidatedLock {
    pub fn new(lock: PolicyLock, lock_path: impl Into<PathBuf>, packages: Vec<PackageLock>) -> Self {
        Self {
            lock,
            lock_path: lock_path.into(),
            packages,
        }
    }

    pub fn lock(&self) -> &PolicyLock {
        &self.lock
    }

    /// Path the lock was loaded from
    pub fn lock_path(&self) -> &Path {
        &self.lock_path
    }

    pub fn name(&self) -> &str {
        &self.lock.name
    }

    pub fn revision_id(&self) -> &str {
        &self.lock.revision_id
    }

    /// Packages in the lock's (sorted) iteration order
    pub fn packages(&self) -> &[PackageLock] {
        &self.packages
    }
}
