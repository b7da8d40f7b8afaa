//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - File system implementation (Local)
//! - `clock` - System and fixed clocks
//! - `events/` - Event sinks (text, JSON)

pub mod clock;
pub mod events;
pub mod fs;

// Re-export for convenience
pub use clock::{FixedClock, SystemClock};
pub use events::{JsonEventSink, TextEventSink};
pub use fs::LocalFs;
