//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod export_events;
pub mod ignore_matcher;
pub mod lock_repository;

pub use export_events::{ExportEvent, ExportEventSink, NoopEventSink};
pub use ignore_matcher::IgnoreMatcher;
pub use lock_repository::PolicyLockRepository;
