//! Export Event Port
//!
//! Provides an observable interface for export transactions.
//! Enables JSON event streams for CI and progress reporting.

use std::path::PathBuf;

/// Event emitted during an export transaction
#[derive(Debug, Clone)]
pub enum ExportEvent {
    /// Export started
    Started {
        policy: String,
        lock: PathBuf,
        destination: PathBuf,
        package_count: usize,
        archive: bool,
    },

    /// A package was copied into the staging area
    PackageStaged {
        index: usize,
        name: String,
        version: String,
        file_count: usize,
    },

    /// Staged content became visible at its final location
    Committed { path: PathBuf },

    /// Export completed
    Completed {
        package_count: usize,
        archive: Option<PathBuf>,
        digest: Option<String>,
    },
}

/// Trait for receiving export events
///
/// Implementations:
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: Silent operation
pub trait ExportEventSink: Send + Sync {
    /// Handle an export event
    fn on_event(&self, event: ExportEvent);

    /// Check if this sink wants per-package events
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl ExportEventSink for NoopEventSink {
    fn on_event(&self, _event: ExportEvent) {}

    fn wants_detailed_events(&self) -> bool {
        false
    }
}
