//! Policy lock entity - a fully resolved snapshot of a named policy
//!
//! This is the serializable form of `Policyfile.lock.json`. Keys this crate
//! does not interpret are carried in `extra` so that a load/save cycle is
//! lossless.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// File extension of exported archives
pub const ARCHIVE_EXTENSION: &str = "tgz";

/// A resolved policy: identity plus the exact cookbook versions it pins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyLock {
    #[serde(alias = "revision")]
    pub revision_id: String,
    pub name: String,
    #[serde(alias = "packages", default)]
    pub cookbook_locks: BTreeMap<String, CookbookLock>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One pinned cookbook as recorded in the lock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CookbookLock {
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dotted_decimal_identifier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<PathBuf>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PolicyLock {
    pub fn new(name: impl Into<String>, revision_id: impl Into<String>) -> Self {
        Self {
            revision_id: revision_id.into(),
            name: name.into(),
            cookbook_locks: BTreeMap::new(),
            extra: Map::new(),
        }
    }

    pub fn with_cookbook(mut self, name: impl Into<String>, lock: CookbookLock) -> Self {
        self.cookbook_locks.insert(name.into(), lock);
        self
    }

    /// File name of the archive produced for this lock, e.g. `base-abc123.tgz`
    pub fn archive_file_name(&self) -> String {
        format!("{}-{}.{}", self.name, self.revision_id, ARCHIVE_EXTENSION)
    }
}

impl CookbookLock {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            dotted_decimal_identifier: None,
            source: None,
            extra: Map::new(),
        }
    }

    pub fn with_source(mut self, source: impl Into<PathBuf>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_dotted_decimal_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.dotted_decimal_identifier = Some(identifier.into());
        self
    }

    /// The version string the export pins: the dotted-decimal identifier
    /// when the lock carries one, the plain version otherwise.
    pub fn locked_version(&self) -> &str {
        self.dotted_decimal_identifier
            .as_deref()
            .unwrap_or(&self.version)
    }

    /// Where the cookbook's files live, resolved against `source_root`.
    ///
    /// Cookbooks without an explicit source are expected under
    /// `cookbooks/<name>` next to the lock.
    pub fn source_dir(&self, name: &str, source_root: &Path) -> PathBuf {
        match &self.source {
            Some(source) if source.is_absolute() => source.clone(),
            Some(source) => source_root.join(source),
            None => source_root.join("cookbooks").join(name),
        }
    }
}
