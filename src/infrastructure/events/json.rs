//! JSON Event Sink
//!
//! Outputs export events as NDJSON for CI/automation consumption.

use crate::domain::ports::{ExportEvent, ExportEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            if let Err(e) = writeln!(writer, "{}", event).and_then(|()| writer.flush()) {
                tracing::warn!(error = %e, "failed to write export event");
            }
        }
    }
}

impl ExportEventSink for JsonEventSink {
    fn on_event(&self, event: ExportEvent) {
        let json = match event {
            ExportEvent::Started {
                policy,
                lock,
                destination,
                package_count,
                archive,
            } => {
                serde_json::json!({
                    "event": "start",
                    "command": "export",
                    "policy": policy,
                    "lock": lock.display().to_string(),
                    "destination": destination.display().to_string(),
                    "package_count": package_count,
                    "mode": if archive { "archive" } else { "directory" },
                })
            }

            ExportEvent::PackageStaged {
                index,
                name,
                version,
                file_count,
            } => {
                serde_json::json!({
                    "event": "package_staged",
                    "command": "export",
                    "index": index,
                    "name": name,
                    "version": version,
                    "files": file_count,
                })
            }

            ExportEvent::Committed { path } => {
                serde_json::json!({
                    "event": "committed",
                    "command": "export",
                    "path": path.display().to_string(),
                })
            }

            ExportEvent::Completed {
                package_count,
                archive,
                digest,
            } => {
                serde_json::json!({
                    "event": "complete",
                    "command": "export",
                    "status": "success",
                    "packages": package_count,
                    "archive": archive.map(|p| p.display().to_string()),
                    "digest": digest,
                })
            }
        };

        self.write_event(json);
    }
}
