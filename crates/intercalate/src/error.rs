//! Error types for the badr-intercalate crate.

/// Error type for all fallible operations in the badr-intercalate crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IntercalationError {
    /// Returned when a cycle expected to intercalate has no Gregorian month
    /// holding two full moons.
    #[error(
        "no qualifying month in {anchor_year}: {full_moons} full moons but no month holds two"
    )]
    NoQualifyingMonth {
        /// Gregorian year that was scanned.
        anchor_year: i32,
        /// Number of full moons in the scanned window.
        full_moons: usize,
    },

    /// Returned when a configuration value is out of range.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },
}
