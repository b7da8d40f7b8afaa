//! Why an entry of the content directory was left alone without an age check

use serde::{Deserialize, Serialize};

/// Reason an entry was skipped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Name does not follow `YYYY-MM-DD-*.md`
    NotDated,
    /// Name is dated but the date does not exist
    InvalidDate,
    /// Dated name, but a directory rather than a file
    NotAFile,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::NotDated => "not_dated",
            SkipReason::InvalidDate => "invalid_date",
            SkipReason::NotAFile => "not_a_file",
        }
    }
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::NotDated => write!(f, "not dated"),
            SkipReason::InvalidDate => write!(f, "invalid date"),
            SkipReason::NotAFile => write!(f, "not a file"),
        }
    }
}
