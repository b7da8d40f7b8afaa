//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod clock;
pub mod file_system;
pub mod prune_events;

pub use clock::Clock;
pub use file_system::{DirEntryInfo, FileSystem, FsError, FsResult};
pub use prune_events::{NoopEventSink, PruneEvent, PruneEventSink};
