//! Error types for badr-ephemeris.

use std::path::PathBuf;

/// Error type for all fallible operations in the badr-ephemeris crate.
///
/// Covers missing files, malformed CSV rows, unparsable timestamps and
/// event sequences that fail validation.
#[derive(Debug, thiserror::Error)]
pub enum EphemerisError {
    /// Returned when a phase table does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps an error originating from the csv crate.
    #[error("csv error: {reason}")]
    Csv {
        /// Description of the underlying CSV failure.
        reason: String,
    },

    /// Returned when a timestamp cannot be parsed.
    #[error("invalid time at line {line}: {reason}")]
    InvalidTime {
        /// 1-based line number in the source file.
        line: u64,
        /// Description of the parsing issue.
        reason: String,
    },

    /// Returned when one or more validation checks fail.
    #[error("{count} validation error(s): {details}")]
    Validation {
        /// Number of accumulated validation failures.
        count: usize,
        /// Human-readable summary of the failures.
        details: String,
    },

    /// Returned when a requested date range is empty or reversed.
    #[error("invalid range: {start} .. {end}")]
    InvalidRange {
        /// Requested start date.
        start: chrono::NaiveDate,
        /// Requested end date.
        end: chrono::NaiveDate,
    },

    /// Wraps an error originating from the badr-calendar crate.
    #[error(transparent)]
    Calendar(#[from] badr_calendar::CalendarError),
}

impl From<csv::Error> for EphemerisError {
    fn from(e: csv::Error) -> Self {
        EphemerisError::Csv {
            reason: e.to_string(),
        }
    }
}
