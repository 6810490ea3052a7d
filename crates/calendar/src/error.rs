//! Error types for the badr-calendar crate.

use crate::month::MonthName;

/// Error type for all fallible operations in the badr-calendar crate.
///
/// These are construction failures for the calendar value types: month
/// ordinals, year layouts, year labels and eclipse tags.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum CalendarError {
    /// Returned when a month ordinal is outside the valid range 1..=13.
    #[error("invalid month ordinal: {ordinal} (must be 1..=13)")]
    InvalidOrdinal {
        /// The invalid ordinal that was provided.
        ordinal: u8,
    },

    /// Returned when a month is given a length of zero days.
    #[error("invalid month length: {length} days for {name}")]
    InvalidLength {
        /// Month whose length is invalid.
        name: MonthName,
        /// The invalid length.
        length: u8,
    },

    /// Returned when a year does not hold 12 or 13 months, or when the
    /// count disagrees with its intercalary position.
    #[error("invalid month count: {count} (expected {expected})")]
    InvalidMonthCount {
        /// Number of months supplied.
        count: usize,
        /// Number of months the layout requires.
        expected: usize,
    },

    /// Returned when a month sits at the wrong position of the rotation.
    #[error("month {ordinal} is {got}, expected {expected}")]
    InvalidLayout {
        /// Ordinal of the offending month.
        ordinal: u8,
        /// Month name the rotation requires at this ordinal.
        expected: MonthName,
        /// Month name actually found.
        got: MonthName,
    },

    /// Returned when a year label cannot exist under the chosen numbering.
    #[error("invalid year label: {label}")]
    InvalidYearLabel {
        /// Rendered form of the rejected label.
        label: String,
    },

    /// Returned when an eclipse tag is not one of `T A H P t p n`.
    #[error("unknown eclipse tag: {tag:?}")]
    UnknownEclipseTag {
        /// The unrecognised tag.
        tag: String,
    },
}
