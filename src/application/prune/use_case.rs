//! Prune Use Case
//!
//! Orchestrates the retention cleanup of one directory.

use tracing::{debug, info, warn};

use crate::domain::policies::{RetentionDecision, RetentionPolicy};
use crate::domain::ports::{Clock, DirEntryInfo, FileSystem, PruneEvent, PruneEventSink};
use crate::domain::value_objects::{DatedFile, SkipReason};
use crate::error::{PruneError, PruneResult};

use super::options::PruneOptions;
use super::result::PruneReport;

/// Prune use case - deletes dated posts older than the retention threshold
pub struct PruneUseCase<FS, C>
where
    FS: FileSystem,
    C: Clock,
{
    fs: FS,
    clock: C,
}

impl<FS, C> PruneUseCase<FS, C>
where
    FS: FileSystem,
    C: Clock,
{
    /// Create a new prune use case
    pub fn new(fs: FS, clock: C) -> Self {
        Self { fs, clock }
    }

    /// Execute the prune.
    ///
    /// A missing directory is not an error: the report comes back with
    /// `directory_missing` set. Listing and deletion failures abort the run.
    pub fn execute(
        &self,
        options: &PruneOptions,
        events: &dyn PruneEventSink,
    ) -> PruneResult<PruneReport> {
        let dir = &options.dir;
        let policy = RetentionPolicy::new(options.threshold);
        let now = self.clock.now();
        let detailed = events.wants_detailed_events();
        let mut report = PruneReport::new(dir.clone(), options.dry_run);

        events.on_event(PruneEvent::Started {
            directory: dir.clone(),
            max_age_days: options.threshold.days(),
            dry_run: options.dry_run,
        });

        if !self.fs.is_dir(dir) {
            info!(directory = %dir.display(), "content directory not found, nothing to prune");
            report.directory_missing = true;
            events.on_event(PruneEvent::DirectoryMissing {
                directory: dir.clone(),
            });
            return Ok(report);
        }

        let entries = self
            .fs
            .read_dir(dir)
            .map_err(|source| PruneError::ReadDir {
                path: dir.clone(),
                source,
            })?;
        debug!(directory = %dir.display(), entries = entries.len(), %now, "scanning");

        for entry in entries {
            let name = display_name(&entry);

            let dated = match entry.name.as_deref().map(DatedFile::parse) {
                Some(Ok(Some(dated))) => dated,
                Some(Ok(None)) | None => {
                    report.add_skipped(name.clone(), SkipReason::NotDated);
                    if detailed {
                        events.on_event(PruneEvent::FileSkipped {
                            name,
                            reason: SkipReason::NotDated,
                        });
                    }
                    continue;
                }
                Some(Err(err)) => {
                    warn!(file = %name, "skipping post: {}", err);
                    report.add_skipped(name.clone(), SkipReason::InvalidDate);
                    if detailed {
                        events.on_event(PruneEvent::FileSkipped {
                            name,
                            reason: SkipReason::InvalidDate,
                        });
                    }
                    continue;
                }
            };

            if entry.is_dir {
                debug!(file = %name, "dated entry is a directory");
                report.add_skipped(name.clone(), SkipReason::NotAFile);
                if detailed {
                    events.on_event(PruneEvent::FileSkipped {
                        name,
                        reason: SkipReason::NotAFile,
                    });
                }
                continue;
            }

            if dated.date() > now.date_naive() {
                debug!(file = %name, date = %dated.date(), "post is dated in the future");
            }

            match policy.evaluate(&dated, now) {
                RetentionDecision::Keep { age_days } => {
                    debug!(file = %name, age_days, "keeping post");
                    report.add_retained(name.clone(), age_days);
                    if detailed {
                        events.on_event(PruneEvent::FileRetained { name, age_days });
                    }
                }
                RetentionDecision::Expire { age_days } => {
                    if !options.dry_run {
                        self.fs
                            .remove(&entry.path)
                            .map_err(|source| PruneError::Remove {
                                path: entry.path.clone(),
                                source,
                            })?;
                    }
                    info!(file = %name, age_days, dry_run = options.dry_run, "deleted old post");
                    report.add_deleted(name.clone(), age_days);
                    events.on_event(PruneEvent::FileDeleted {
                        name,
                        age_days,
                        dry_run: options.dry_run,
                    });
                }
            }
        }

        events.on_event(PruneEvent::Completed {
            deleted_count: report.deleted.len(),
            retained_count: report.retained.len(),
            skipped_count: report.skipped.len(),
            dry_run: options.dry_run,
        });

        Ok(report)
    }
}

fn display_name(entry: &DirEntryInfo) -> String {
    match &entry.name {
        Some(name) => name.clone(),
        None => entry
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default(),
    }
}
