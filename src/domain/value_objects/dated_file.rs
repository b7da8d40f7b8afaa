//! DatedFile value object - a post whose file name starts with its date
//!
//! Names look like `2024-06-01-stock-report.md`. Only the leading
//! `YYYY-MM-DD-` prefix and the `.md` extension are significant.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

/// ASCII digits only; `\d` in `regex` would also accept other Unicode digits.
static DATED_FILE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{4}-[0-9]{2}-[0-9]{2})-.*\.md$").expect("dated file pattern is valid")
});

/// Why a name that looks dated could not be used
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatedFileError {
    /// Matches the digit layout but is not a calendar date (e.g. `2024-13-40`)
    InvalidDate { name: String, date: String },
}

impl std::fmt::Display for DatedFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatedFileError::InvalidDate { name, date } => {
                write!(f, "'{}' in {} is not a calendar date", date, name)
            }
        }
    }
}

impl std::error::Error for DatedFileError {}

/// A file name carrying its publication date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatedFile {
    name: String,
    date: NaiveDate,
}

impl DatedFile {
    /// Extension every dated post carries
    pub const EXTENSION: &'static str = "md";

    /// Parse a file name.
    ///
    /// Returns `Ok(None)` when the name does not follow the dated layout,
    /// and an error when it does but the date itself is impossible.
    pub fn parse(name: &str) -> Result<Option<Self>, DatedFileError> {
        let Some(captures) = DATED_FILE_PATTERN.captures(name) else {
            return Ok(None);
        };
        let date_str = &captures[1];

        match NaiveDate::parse_from_str(date_str, "%Y-%m-%d") {
            Ok(date) => Ok(Some(Self {
                name: name.to_string(),
                date,
            })),
            Err(_) => Err(DatedFileError::InvalidDate {
                name: name.to_string(),
                date: date_str.to_string(),
            }),
        }
    }

    /// Full file name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Date encoded in the name
    pub fn date(&self) -> NaiveDate {
        self.date
    }
}
