//! Domain Layer
//!
//! Pure retention rules without I/O dependencies.
//!
//! ## Structure
//!
//! - `value_objects/` - Immutable value types (DatedFile, RetentionThreshold, SkipReason)
//! - `policies/` - Business rules (RetentionPolicy)
//! - `ports/` - Interface definitions for infrastructure (FileSystem, Clock, events)
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or the system clock
//! 2. **Pure Functions** - Policies are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod policies;
pub mod ports;
pub mod value_objects;
