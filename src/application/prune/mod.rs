//! Prune Use Case
//!
//! Orchestrates the retention cleanup of a blog content directory.
//!
//! This module handles:
//! - Listing the direct children of the content directory
//! - Recognising dated posts by file name
//! - Applying the retention policy at the injected "now"
//! - Deleting expired posts (unless dry run) and reporting each step

mod options;
mod result;
mod use_case;

pub use options::{PruneOptions, DEFAULT_CONTENT_DIR};
pub use result::{PruneReport, PrunedFile, SkippedEntry};
pub use use_case::PruneUseCase;
