//! Clock port - the only source of "now" for the domain

use chrono::{DateTime, Utc};

/// Abstract wall clock
///
/// Implementations:
/// - `SystemClock` - reads the system time
/// - `FixedClock` - always returns the same instant
pub trait Clock {
    /// Current instant in UTC
    fn now(&self) -> DateTime<Utc>;
}

impl<T: Clock + ?Sized> Clock for &T {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

impl<T: Clock + ?Sized> Clock for Box<T> {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}
