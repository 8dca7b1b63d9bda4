//! Lock validation
//!
//! Turns a decoded `PolicyLock` into a `ValidatedLock`: every cookbook must
//! pin a concrete version and point at an existing source directory whose
//! metadata agrees with the lock.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::debug;

use crate::domain::entities::{PackageLock, PolicyLock, ValidatedLock};
use crate::domain::ports::PolicyLockRepository;
use crate::domain::value_objects::ResolvedVersion;
use crate::error::{ExportError, ExportResult};

/// Metadata document read from each cookbook source
pub const METADATA_JSON: &str = "metadata.json";

/// Validates locks loaded from a given path
#[derive(Debug, Clone)]
pub struct LockValidator {
    lock_path: PathBuf,
    source_root: PathBuf,
}

impl LockValidator {
    pub fn new(lock_path: impl Into<PathBuf>, source_root: impl Into<PathBuf>) -> Self {
        Self {
            lock_path: lock_path.into(),
            source_root: source_root.into(),
        }
    }

    /// Load the lock through `repo` and validate it
    pub fn load(&self, repo: &dyn PolicyLockRepository) -> ExportResult<ValidatedLock> {
        let lock = repo.load(&self.lock_path)?;
        self.validate(lock)
    }

    /// Check structure and consistency, loading each cookbook's metadata
    pub fn validate(&self, lock: PolicyLock) -> ExportResult<ValidatedLock> {
        self.check_component("policy name", &lock.name)?;
        self.check_component("revision_id", &lock.revision_id)?;

        let mut packages = Vec::with_capacity(lock.cookbook_locks.len());
        for (name, cookbook) in &lock.cookbook_locks {
            self.check_component("cookbook name", name)?;

            let version = ResolvedVersion::parse(cookbook.locked_version()).map_err(|e| {
                ExportError::LockInvalid {
                    path: self.lock_path.clone(),
                    message: format!("cookbook '{name}' is not locked to a concrete version"),
                    source: Some(Box::new(e)),
                }
            })?;

            let source_dir = cookbook.source_dir(name, &self.source_root);
            if !source_dir.is_dir() {
                return Err(self.invalid(format!(
                    "cookbook '{name}' source {} is missing or not a directory",
                    source_dir.display()
                )));
            }

            let metadata = self.load_metadata(name, &source_dir)?;
            debug!(cookbook = %name, %version, source = %source_dir.display(), "validated cookbook");
            packages.push(PackageLock::new(name.clone(), version, source_dir, metadata));
        }

        Ok(ValidatedLock::new(lock, self.lock_path.clone(), packages))
    }

    fn load_metadata(&self, name: &str, source_dir: &Path) -> ExportResult<Map<String, Value>> {
        let path = source_dir.join(METADATA_JSON);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                let mut metadata = Map::new();
                metadata.insert("name".to_string(), Value::String(name.to_string()));
                return Ok(metadata);
            }
            Err(e) => {
                return Err(ExportError::LockInvalid {
                    path: self.lock_path.clone(),
                    message: format!("cookbook '{name}' metadata {} is unreadable", path.display()),
                    source: Some(Box::new(e)),
                })
            }
        };

        let value: Value = serde_json::from_str(&content).map_err(|e| ExportError::LockInvalid {
            path: self.lock_path.clone(),
            message: format!("cookbook '{name}' metadata {} is not valid JSON", path.display()),
            source: Some(Box::new(e)),
        })?;

        let Value::Object(metadata) = value else {
            return Err(self.invalid(format!(
                "cookbook '{name}' metadata {} is not a JSON object",
                path.display()
            )));
        };

        match metadata.get("name").and_then(Value::as_str) {
            Some(declared) if declared != name => Err(self.invalid(format!(
                "cookbook '{name}' source {} declares name '{declared}'",
                source_dir.display()
            ))),
            _ => Ok(metadata),
        }
    }

    /// Names end up in file names, so they must be single path components
    fn check_component(&self, what: &str, value: &str) -> ExportResult<()> {
        let valid = !value.is_empty()
            && value != "."
            && value != ".."
            && !value.contains(['/', '\\', '\0']);

        if valid {
            Ok(())
        } else {
            Err(self.invalid(format!("{what} '{value}' is empty or not a valid file name")))
        }
    }

    fn invalid(&self, message: String) -> ExportError {
        ExportError::lock_invalid(&self.lock_path, message)
    }
}
