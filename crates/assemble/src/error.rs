//! Error types for the badr-assemble crate.

use chrono::NaiveDate;

use badr_calendar::{CalendarError, YearLabel};
use badr_ephemeris::EphemerisError;
use badr_intercalate::IntercalationError;
use badr_months::MonthError;

/// Error type for all fallible operations in the badr-assemble crate.
///
/// Failures raised while building a particular year arrive wrapped in
/// [`AssemblyError::InYear`], so the caller always learns which year broke.
#[derive(Debug, thiserror::Error)]
pub enum AssemblyError {
    /// Returned when a year's months do not partition its days.
    #[error("year assembly failed: {reason}")]
    YearAssembly {
        /// Which invariant failed.
        reason: String,
    },

    /// Returned when the year containing the epoch date is not 1 H., or a
    /// year labelled 1 H. does not contain it.
    #[error("epoch {epoch_start} misaligned: year {label} starting {year_start}")]
    EpochMisaligned {
        /// Configured epoch start date.
        epoch_start: NaiveDate,
        /// Label the offending year received.
        label: YearLabel,
        /// First day of the offending year.
        year_start: NaiveDate,
    },

    /// Returned when the requested Gregorian year range is empty or out of
    /// the supported date range.
    #[error("invalid year range: {first}..={last}")]
    InvalidRange {
        /// First requested year.
        first: i32,
        /// Last requested year.
        last: i32,
    },

    /// Returned when no full moon falls in the first requested year.
    #[error("no full moon found in {year}")]
    NoOpeningFullMoon {
        /// Gregorian year searched.
        year: i32,
    },

    /// Wraps an error raised while building one year.
    #[error("year anchored to {anchor_year}: {source}")]
    InYear {
        /// Gregorian year the failing lunisolar year is anchored to.
        anchor_year: i32,
        /// The underlying failure.
        #[source]
        source: Box<AssemblyError>,
    },

    /// Wraps an error originating from the badr-ephemeris crate.
    #[error(transparent)]
    Ephemeris(#[from] EphemerisError),

    /// Wraps an error originating from the badr-months crate.
    #[error(transparent)]
    Month(#[from] MonthError),

    /// Wraps an error originating from the badr-intercalate crate.
    #[error(transparent)]
    Intercalation(#[from] IntercalationError),

    /// Wraps an error originating from the badr-calendar crate.
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}

impl AssemblyError {
    /// Wraps `self` with the anchor year it occurred in.
    pub(crate) fn in_year(self, anchor_year: i32) -> Self {
        Self::InYear {
            anchor_year,
            source: Box::new(self),
        }
    }
}
