//! policy-export - standalone export of pinned policy locks
//!
//! Takes a `Policyfile.lock.json` whose cookbooks are pinned to concrete
//! versions and produces everything a node needs to converge on it without
//! a server: the filtered cookbook sources, the lock itself, a policy data
//! record and a client configuration stub. The result is committed either as
//! a directory tree or as a single deterministic `.tgz` archive.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{ExportOutcome, ExportRequest, ExportUseCase};
pub use config::{Config, Verbosity};
pub use domain::entities::{CookbookLock, PolicyLock, ValidatedLock};
pub use domain::value_objects::ResolvedVersion;
pub use error::{ExportError, ExportResult};
