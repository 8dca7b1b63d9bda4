//! Export layout - where each artifact lives relative to an export root
//!
//! The same layout is used for the staging area, the destination directory
//! and archive entry names.

use std::path::{Path, PathBuf};

/// Directory holding one `<name>-<version>` directory per cookbook
pub const COOKBOOKS_DIR: &str = "cookbooks";

/// Directory holding generated data records
pub const DATA_BAGS_DIR: &str = "data_bags";

/// Data bag (collection) that policy records belong to
pub const POLICY_DATA_BAG: &str = "policyfiles";

/// Pinned lock document written at the export root
pub const LOCK_FILE_NAME: &str = "Policyfile.lock.json";

/// Generated client configuration written at the export root
pub const CONFIG_FILE_NAME: &str = "client.rb";

/// Paths of the export artifacts under a given root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportLayout {
    root: PathBuf,
}

impl ExportLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn cookbooks_dir(&self) -> PathBuf {
        self.root.join(COOKBOOKS_DIR)
    }

    pub fn cookbook_dir(&self, dir_name: &str) -> PathBuf {
        self.cookbooks_dir().join(dir_name)
    }

    pub fn data_bags_dir(&self) -> PathBuf {
        self.root.join(DATA_BAGS_DIR)
    }

    pub fn policy_data_dir(&self) -> PathBuf {
        self.data_bags_dir().join(POLICY_DATA_BAG)
    }

    pub fn policy_data_file(&self, item_id: &str) -> PathBuf {
        self.policy_data_dir().join(format!("{item_id}.json"))
    }

    pub fn lock_file(&self) -> PathBuf {
        self.root.join(LOCK_FILE_NAME)
    }

    pub fn config_file(&self) -> PathBuf {
        self.root.join(CONFIG_FILE_NAME)
    }

    /// Top-level artifacts in commit order: bulky directories first
    pub fn top_level_entries(&self) -> [PathBuf; 4] {
        [
            self.cookbooks_dir(),
            self.data_bags_dir(),
            self.lock_file(),
            self.config_file(),
        ]
    }
}
