//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod dated_file;
mod retention;
mod skip_reason;

pub use dated_file::{DatedFile, DatedFileError};
pub use retention::{age_days, RetentionThreshold};
pub use skip_reason::SkipReason;
