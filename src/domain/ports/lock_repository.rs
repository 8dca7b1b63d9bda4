//! PolicyLockRepository port - abstraction for lock persistence
//!
//! The export core never touches the lock's wire format directly; it loads
//! and saves through this trait.

use std::path::Path;

use crate::domain::entities::PolicyLock;
use crate::error::ExportResult;

/// Repository for policy lock documents
pub trait PolicyLockRepository {
    /// Load a lock from `path`.
    ///
    /// Fails with `LockNotFound` when the file is absent and `LockInvalid`
    /// when it cannot be decoded.
    fn load(&self, path: &Path) -> ExportResult<PolicyLock>;

    /// Render the lock in its canonical serialized form
    fn render(&self, lock: &PolicyLock) -> ExportResult<String>;

    /// Write the canonical form of `lock` to `path`
    fn save(&self, lock: &PolicyLock, path: &Path) -> ExportResult<()>;
}
