//! Error types for postsweep
//!
//! Library code returns `PruneResult`; the binary wraps it in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for postsweep operations
pub type PruneResult<T> = Result<T, PruneError>;

/// Main error type for postsweep operations
#[derive(Error, Debug)]
pub enum PruneError {
    /// Listing the content directory failed
    #[error("failed to read directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: crate::domain::ports::FsError,
    },

    /// Deleting an expired post failed
    #[error("failed to delete {path}: {source}")]
    Remove {
        path: PathBuf,
        #[source]
        source: crate::domain::ports::FsError,
    },

    /// Config file could not be read or parsed
    #[error("invalid config in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// Environment override holds an unusable value
    #[error("invalid value '{value}' for {var}")]
    InvalidEnv { var: String, value: String },

    /// `--now` was not an RFC 3339 timestamp
    #[error("invalid timestamp '{value}' (expected RFC 3339, e.g. 2024-06-01T00:00:00Z)")]
    InvalidNow { value: String },
}
