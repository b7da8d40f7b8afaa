//! postsweep - retention cleanup for date-prefixed blog posts
//!
//! Static blog generators keep one Markdown file per post. When posts are
//! produced on a schedule (`2024-06-01-stock-report.md`, ...) the content
//! directory grows forever; postsweep deletes the posts whose file-name date
//! is older than a retention threshold (180 days by default).

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::prune::{PruneOptions, PruneReport, PruneUseCase, DEFAULT_CONTENT_DIR};
pub use config::Config;
pub use domain::value_objects::{DatedFile, RetentionThreshold, SkipReason};
pub use error::{PruneError, PruneResult};
