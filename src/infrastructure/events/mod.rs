//! Event Sink Implementations
//!
//! Provides concrete implementations of ExportEventSink:
//! - JsonEventSink: NDJSON output for CI/automation

mod json;

pub use json::JsonEventSink;
