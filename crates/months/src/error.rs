//! Error types for the badr-months crate.

use chrono::{NaiveDate, NaiveDateTime};

use badr_calendar::{CalendarError, MonthName};

/// Error type for all fallible operations in the badr-months crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MonthError {
    /// Returned when consecutive full moons lie too far apart.
    #[error("missing phase data: {gap_days}-day gap after full moon of {after}")]
    MissingPhaseData {
        /// Local date of the full moon before the gap.
        after: NaiveDate,
        /// Days to the next full moon.
        gap_days: i64,
    },

    /// Returned when the events do not reach far enough to build the
    /// requested months.
    #[error("no phase data covering months from {from}")]
    NoPhaseData {
        /// First day that could not be covered.
        from: NaiveDate,
    },

    /// Returned when full moons are not strictly increasing.
    #[error("full moons not strictly increasing at {at}")]
    UnorderedEvents {
        /// Instant of the offending full moon.
        at: NaiveDateTime,
    },

    /// Returned when a resolved month is not 29 or 30 days long.
    #[error("invalid month length: {length} days for month starting {start} (must be 29 or 30)")]
    InvalidMonthLength {
        /// First day of the month.
        start: NaiveDate,
        /// Resolved length in days.
        length: i64,
    },

    /// Returned when a fixed-length month drifts too far from the observed
    /// month it stands for.
    #[error(
        "fixed schedule drift: {month} starting {start} is {offset_days} days from observed (max {max_days})"
    )]
    ScheduleDrift {
        /// Month that drifted.
        month: MonthName,
        /// Fixed start date.
        start: NaiveDate,
        /// Fixed start minus observed start.
        offset_days: i64,
        /// Configured limit.
        max_days: u32,
    },

    /// Returned when a configuration value is out of range.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Wraps an error originating from the badr-calendar crate.
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}
