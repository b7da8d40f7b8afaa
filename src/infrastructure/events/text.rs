//! Text Event Sink
//!
//! Line-oriented, human-readable progress on stdout.

use crate::domain::ports::{PruneEvent, PruneEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that prints one line per interesting event
pub struct TextEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
    /// Also report kept and skipped entries
    verbose: bool,
}

impl TextEventSink {
    pub fn stdout(verbose: bool) -> Self {
        Self::with_writer(io::stdout(), verbose)
    }

    pub fn with_writer<W: Write + Send + 'static>(writer: W, verbose: bool) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            verbose,
        }
    }

    fn write_line(&self, line: &str) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            let _ = writer.flush();
        }
    }
}

/// Render a single event, or `None` when it is not shown at this verbosity
pub fn render_event(event: &PruneEvent, verbose: bool) -> Option<String> {
    match event {
        PruneEvent::Started {
            directory,
            max_age_days,
            dry_run,
        } => verbose.then(|| {
            let suffix = if *dry_run { " [dry run]" } else { "" };
            format!(
                "Scanning {} (max age {} days){}",
                directory.display(),
                max_age_days,
                suffix
            )
        }),
        PruneEvent::DirectoryMissing { directory } => {
            Some(format!("Directory not found: {}", directory.display()))
        }
        PruneEvent::FileDeleted {
            name,
            age_days,
            dry_run,
        } => {
            let verb = if *dry_run {
                "Would delete"
            } else {
                "Deleting"
            };
            Some(format!("{} old post: {} ({} days old)", verb, name, age_days))
        }
        PruneEvent::FileRetained { name, age_days } => {
            verbose.then(|| format!("Keeping post: {} ({} days old)", name, age_days))
        }
        PruneEvent::FileSkipped { name, reason } => {
            verbose.then(|| format!("Skipping {} ({})", name, reason))
        }
        PruneEvent::Completed {
            deleted_count,
            retained_count,
            skipped_count,
            dry_run,
        } => Some(render_summary(
            *deleted_count,
            *retained_count,
            *skipped_count,
            *dry_run,
        )),
    }
}

/// One-line summary printed at the end of a run
pub fn render_summary(deleted: usize, retained: usize, skipped: usize, dry_run: bool) -> String {
    let verb = if dry_run { "Would delete" } else { "Deleted" };
    format!(
        "{} {} {}, kept {}, skipped {}",
        verb,
        deleted,
        if deleted == 1 { "post" } else { "posts" },
        retained,
        skipped
    )
}

impl PruneEventSink for TextEventSink {
    fn on_event(&self, event: PruneEvent) {
        if let Some(line) = render_event(&event, self.verbose) {
            self.write_line(&line);
        }
    }

    fn wants_detailed_events(&self) -> bool {
        self.verbose
    }
}
