//! Domain Entities
//!
//! Core domain entities that have identity and lifecycle.
//! - `PolicyLock` - The serializable lock document
//! - `PackageLock` - A validated cookbook ready for export
//! - `ValidatedLock` - A lock together with its validated packages

mod package;
mod policy_lock;

pub use package::{PackageLock, ValidatedLock};
pub use policy_lock::{CookbookLock, PolicyLock, ARCHIVE_EXTENSION};
