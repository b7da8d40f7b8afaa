//! Use Case Factory
//!
//! Creates use cases and event sinks with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use crate::application::prune::PruneUseCase;
use crate::domain::ports::{Clock, PruneEventSink};
use crate::infrastructure::{FixedClock, JsonEventSink, LocalFs, SystemClock, TextEventSink};

/// Type alias for the concrete PruneUseCase with all dependencies
pub type ConcretePruneUseCase = PruneUseCase<LocalFs, Box<dyn Clock>>;

/// Create a prune use case on the local disk.
///
/// `now` pins the clock; `None` uses the system clock.
pub fn create_prune_use_case(now: Option<FixedClock>) -> ConcretePruneUseCase {
    let clock: Box<dyn Clock> = match now {
        Some(fixed) => Box::new(fixed),
        None => Box::new(SystemClock),
    };

    PruneUseCase::new(LocalFs::new(), clock)
}

/// Create the stdout event sink for the chosen output mode
pub fn create_event_sink(json: bool, verbose: bool) -> Box<dyn PruneEventSink> {
    if json {
        Box::new(JsonEventSink::stdout())
    } else {
        Box::new(TextEventSink::stdout(verbose))
    }
}
