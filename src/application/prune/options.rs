//! Prune options

use std::path::PathBuf;

use crate::domain::value_objects::RetentionThreshold;

/// Content directory of the blog, relative to the site root
pub const DEFAULT_CONTENT_DIR: &str = "src/content/blog";

/// Options for a prune run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PruneOptions {
    /// Directory whose direct children are scanned
    pub dir: PathBuf,
    /// Posts older than this are deleted
    pub threshold: RetentionThreshold,
    /// Report what would be deleted without deleting
    pub dry_run: bool,
}

impl Default for PruneOptions {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_CONTENT_DIR),
            threshold: RetentionThreshold::default(),
            dry_run: false,
        }
    }
}

impl PruneOptions {
    /// Create options for `dir` with the default threshold
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            ..Self::default()
        }
    }

    /// Set threshold
    pub fn with_threshold(mut self, threshold: RetentionThreshold) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set dry run
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}
