//! JSON Event Sink
//!
//! Outputs prune events as NDJSON for CI/automation consumption.

use crate::domain::ports::{PruneEvent, PruneEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl PruneEventSink for JsonEventSink {
    fn on_event(&self, event: PruneEvent) {
        let json = match event {
            PruneEvent::Started {
                directory,
                max_age_days,
                dry_run,
            } => {
                serde_json::json!({
                    "event": "start",
                    "command": "prune",
                    "directory": directory.display().to_string(),
                    "max_age_days": max_age_days,
                    "dry_run": dry_run,
                })
            }

            PruneEvent::DirectoryMissing { directory } => {
                serde_json::json!({
                    "event": "directory_missing",
                    "command": "prune",
                    "directory": directory.display().to_string(),
                })
            }

            PruneEvent::FileDeleted {
                name,
                age_days,
                dry_run,
            } => {
                serde_json::json!({
                    "event": "file_deleted",
                    "command": "prune",
                    "name": name,
                    "age_days": age_days,
                    "dry_run": dry_run,
                })
            }

            PruneEvent::FileRetained { name, age_days } => {
                serde_json::json!({
                    "event": "file_retained",
                    "command": "prune",
                    "name": name,
                    "age_days": age_days,
                })
            }

            PruneEvent::FileSkipped { name, reason } => {
                serde_json::json!({
                    "event": "file_skipped",
                    "command": "prune",
                    "name": name,
                    "reason": reason.as_str(),
                })
            }

            PruneEvent::Completed {
                deleted_count,
                retained_count,
                skipped_count,
                dry_run,
            } => {
                serde_json::json!({
                    "event": "complete",
                    "command": "prune",
                    "deleted": deleted_count,
                    "retained": retained_count,
                    "skipped": skipped_count,
                    "dry_run": dry_run,
                })
            }
        };

        self.write_event(json);
    }

    fn wants_detailed_events(&self) -> bool {
        true
    }
}
