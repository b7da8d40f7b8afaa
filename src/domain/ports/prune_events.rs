//! Prune Event Port
//!
//! Lets the CLI stream progress (text or NDJSON) while the prune runs,
//! so deletions are reported even if a later entry aborts the run.

use std::path::PathBuf;

use crate::domain::value_objects::SkipReason;

/// Event emitted during a prune run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PruneEvent {
    /// Scan started
    Started {
        directory: PathBuf,
        max_age_days: u32,
        dry_run: bool,
    },

    /// Content directory does not exist; the run ends here
    DirectoryMissing { directory: PathBuf },

    /// Expired post removed (or would be, in dry run)
    FileDeleted {
        name: String,
        age_days: i64,
        dry_run: bool,
    },

    /// Dated post still within the retention window
    FileRetained { name: String, age_days: i64 },

    /// Entry ignored without inspecting its age
    FileSkipped { name: String, reason: SkipReason },

    /// Scan finished
    Completed {
        deleted_count: usize,
        retained_count: usize,
        skipped_count: usize,
        dry_run: bool,
    },
}

/// Trait for receiving prune events
///
/// Implementations can be:
/// - TextEventSink: human-readable lines
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: Silent operation
pub trait PruneEventSink {
    /// Handle a prune event
    fn on_event(&self, event: PruneEvent);

    /// Check if this sink wants per-file events for retained/skipped entries
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl PruneEventSink for NoopEventSink {
    fn on_event(&self, _event: PruneEvent) {}

    fn wants_detailed_events(&self) -> bool {
        false
    }
}
