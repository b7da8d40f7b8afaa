//! Retention Policy
//!
//! Decides whether a dated post stays or goes.
//! Pure: the caller supplies "now".

use chrono::{DateTime, Utc};

use crate::domain::value_objects::{age_days, DatedFile, RetentionThreshold};

/// Outcome of evaluating one dated post
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetentionDecision {
    /// Within the retention window
    Keep { age_days: i64 },
    /// Older than the threshold; delete
    Expire { age_days: i64 },
}

impl RetentionDecision {
    pub fn age_days(&self) -> i64 {
        match self {
            RetentionDecision::Keep { age_days } | RetentionDecision::Expire { age_days } => {
                *age_days
            }
        }
    }

    pub fn is_expired(&self) -> bool {
        matches!(self, RetentionDecision::Expire { .. })
    }
}

/// Policy for expiring dated posts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RetentionPolicy {
    threshold: RetentionThreshold,
}

impl RetentionPolicy {
    pub fn new(threshold: RetentionThreshold) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> RetentionThreshold {
        self.threshold
    }

    /// Evaluate a post against the threshold at `now`
    pub fn evaluate(&self, file: &DatedFile, now: DateTime<Utc>) -> RetentionDecision {
        let age = age_days(now, file.date());
        if self.threshold.is_exceeded_by(age) {
            RetentionDecision::Expire { age_days: age }
        } else {
            RetentionDecision::Keep { age_days: age }
        }
    }
}
