//! Export Module
//!
//! Exports a pinned policy lock into a self-contained directory tree or a
//! single archive.
//!
//! ## Structure
//!
//! - `options` - Request type (`ExportRequest`)
//! - `result` - Outcome type (`ExportOutcome`)
//! - `validator` - Lock validation (`LockValidator`)
//! - `filter` - Per-package ignore rules (`PackageFilter`)
//! - `guard` - Destination conflict detection (`ConflictGuard`)
//! - `assembler` - Staging content (`ExportAssembler`)
//! - `commit` - Archive and directory commit
//! - `use_case` - Transaction orchestration (`ExportUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use policy_export::application::export::{ExportRequest, ExportUseCase};
//!
//! let request = ExportRequest::new("Policyfile.lock.json", "out").with_archive(true);
//! let outcome = ExportUseCase::new(request).run()?;
//! ```

mod assembler;
mod commit;
mod filter;
mod guard;
mod options;
mod result;
mod use_case;
mod validator;

pub use assembler::ExportAssembler;
pub use commit::{commit_archive, commit_directory};
pub use filter::{FilterError, PackageFilter};
pub use guard::ConflictGuard;
pub use options::{resolve_lock_path, ExportRequest};
pub use result::ExportOutcome;
pub use use_case::ExportUseCase;
pub use validator::{LockValidator, METADATA_JSON};
