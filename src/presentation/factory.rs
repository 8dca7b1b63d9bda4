//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.

use std::sync::Arc;

use crate::application::{ExportRequest, ExportUseCase};
use crate::domain::ports::{ExportEventSink, NoopEventSink};
use crate::infrastructure::JsonEventSink;

use super::output::OutputFormat;

/// Create an export use case for `request`.
///
/// JSON output streams transaction events to stdout as they happen.
pub fn create_export_use_case(request: ExportRequest, format: OutputFormat) -> ExportUseCase {
    let events: Arc<dyn ExportEventSink> = match format {
        OutputFormat::Json => Arc::new(JsonEventSink::stdout()),
        OutputFormat::Text | OutputFormat::Minimal => Arc::new(NoopEventSink),
    };
    ExportUseCase::new(request).with_events(events)
}
