//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Staging area and tree relocation
//! - `repositories/` - Lock document persistence
//! - `events/` - Event sinks
//! - `archive` - Deterministic tar.gz writer

pub mod archive;
pub mod events;
pub mod fs;
pub mod repositories;

pub use archive::{write_archive, ArchiveSummary};
pub use events::JsonEventSink;
pub use fs::StagingArea;
pub use repositories::JsonLockRepository;
