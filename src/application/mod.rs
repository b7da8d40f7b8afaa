//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (value objects, policies, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `PruneUseCase` - Deletes dated posts older than the retention threshold

pub mod prune;

pub use prune::{PruneOptions, PruneReport, PruneUseCase, PrunedFile, SkippedEntry};
