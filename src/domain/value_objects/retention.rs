//! Retention value objects - threshold and age arithmetic

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Maximum age, in whole days, a dated post may reach
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RetentionThreshold(u32);

impl RetentionThreshold {
    /// Six months
    pub const DEFAULT_DAYS: u32 = 180;

    pub fn from_days(days: u32) -> Self {
        Self(days)
    }

    pub fn days(&self) -> u32 {
        self.0
    }

    /// True when a post of `age_days` is strictly older than the threshold
    pub fn is_exceeded_by(&self, age_days: i64) -> bool {
        age_days > i64::from(self.0)
    }
}

impl Default for RetentionThreshold {
    fn default() -> Self {
        Self(Self::DEFAULT_DAYS)
    }
}

impl std::fmt::Display for RetentionThreshold {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} days", self.0)
    }
}

/// Age of a post dated `date` (taken as midnight UTC) at `now`.
///
/// Absolute difference rounded up to whole days, so any partial day counts
/// as a full one and future dates yield a positive age too.
pub fn age_days(now: DateTime<Utc>, date: NaiveDate) -> i64 {
    let posted = date.and_time(NaiveTime::MIN).and_utc();
    let millis = (now - posted).num_milliseconds().abs();
    (millis + MILLIS_PER_DAY - 1) / MILLIS_PER_DAY
}
