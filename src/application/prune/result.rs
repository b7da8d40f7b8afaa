//! Prune result types

use std::path::PathBuf;

use crate::domain::value_objects::SkipReason;

/// A dated post with its computed age
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrunedFile {
    pub name: String,
    pub age_days: i64,
}

/// An entry left alone without an age check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    pub name: String,
    pub reason: SkipReason,
}

/// Result of a prune run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PruneReport {
    /// Directory that was scanned
    pub directory: PathBuf,
    /// Whether deletions were only simulated
    pub dry_run: bool,
    /// The directory did not exist; nothing was scanned
    pub directory_missing: bool,
    /// Posts that were deleted (or would be deleted in dry run)
    pub deleted: Vec<PrunedFile>,
    /// Dated posts still inside the retention window
    pub retained: Vec<PrunedFile>,
    /// Entries that were not dated posts
    pub skipped: Vec<SkippedEntry>,
}

impl PruneReport {
    pub fn new(directory: PathBuf, dry_run: bool) -> Self {
        Self {
            directory,
            dry_run,
            ..Self::default()
        }
    }

    pub fn add_deleted(&mut self, name: String, age_days: i64) {
        self.deleted.push(PrunedFile { name, age_days });
    }

    pub fn add_retained(&mut self, name: String, age_days: i64) {
        self.retained.push(PrunedFile { name, age_days });
    }

    pub fn add_skipped(&mut self, name: String, reason: SkipReason) {
        self.skipped.push(SkippedEntry { name, reason });
    }

    /// Names of deleted posts, in scan order
    pub fn deleted_names(&self) -> Vec<&str> {
        self.deleted.iter().map(|f| f.name.as_str()).collect()
    }

    /// Get total count of entries considered
    pub fn total_count(&self) -> usize {
        self.deleted.len() + self.retained.len() + self.skipped.len()
    }
}
