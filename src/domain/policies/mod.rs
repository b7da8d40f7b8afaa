//! Domain Policies
//!
//! Business rules and policies that govern behavior.
//! These are pure functions that operate on domain values.

mod retention_policy;

pub use retention_policy::{RetentionDecision, RetentionPolicy};
