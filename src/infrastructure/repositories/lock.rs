//! JSON Policy Lock Repository
//!
//! Implements the PolicyLockRepository port for `Policyfile.lock.json`.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::domain::entities::PolicyLock;
use crate::domain::ports::PolicyLockRepository;
use crate::domain::services::LOCK_FILE_NAME;
use crate::error::{ExportError, ExportResult};
use crate::infrastructure::fs::persist_published;

/// JSON-backed lock repository
///
/// Output is pretty-printed with sorted keys and a trailing newline.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonLockRepository;

impl JsonLockRepository {
    pub fn new() -> Self {
        Self
    }

    /// Parse a lock from its JSON text
    pub fn parse(path: &Path, content: &str) -> ExportResult<PolicyLock> {
        serde_json::from_str(content).map_err(|e| ExportError::LockInvalid {
            path: path.to_path_buf(),
            message: format!("not a valid lock document: {e}"),
            source: Some(Box::new(e)),
        })
    }
}

impl PolicyLockRepository for JsonLockRepository {
    fn load(&self, path: &Path) -> ExportResult<PolicyLock> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(ExportError::LockNotFound {
                    path: path.to_path_buf(),
                })
            }
            Err(e) => {
                return Err(ExportError::LockInvalid {
                    path: path.to_path_buf(),
                    message: "could not be read".to_string(),
                    source: Some(Box::new(e)),
                })
            }
        };

        Self::parse(path, &content)
    }

    fn render(&self, lock: &PolicyLock) -> ExportResult<String> {
        let mut content = serde_json::to_string_pretty(lock).map_err(|e| {
            ExportError::LockInvalid {
                path: LOCK_FILE_NAME.into(),
                message: "could not be serialized".to_string(),
                source: Some(Box::new(e)),
            }
        })?;
        content.push('\n');
        Ok(content)
    }

    fn save(&self, lock: &PolicyLock, path: &Path) -> ExportResult<()> {
        let content = self.render(lock)?;
        write_atomic(path, content.as_bytes()).map_err(|e| ExportError::Assembly {
            lock: path.to_path_buf(),
            path: path.to_path_buf(),
            message: "writing lock document".to_string(),
            source: Some(e),
        })
    }
}

/// Write `content` to `path` through a temporary sibling file and a rename
fn write_atomic(path: &Path, content: &[u8]) -> io::Result<()> {
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    fs::create_dir_all(parent)?;

    let mut temp = NamedTempFile::new_in(parent)?;
    temp.write_all(content)?;
    temp.as_file().sync_all()?;
    persist_published(temp, path)
}
