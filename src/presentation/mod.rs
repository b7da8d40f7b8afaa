//! Presentation Layer
//!
//! This layer handles:
//! - Creating use cases with infrastructure dependencies
//! - Choosing the output event sink (text/JSON)
//!
//! ## Usage
//!
//! ```ignore
//! use postsweep::presentation::factory;
//!
//! let use_case = factory::create_prune_use_case(None);
//! let sink = factory::create_event_sink(false, false);
//! let report = use_case.execute(&options, sink.as_ref())?;
//! ```

pub mod factory;

pub use factory::{create_event_sink, create_prune_use_case, ConcretePruneUseCase};
