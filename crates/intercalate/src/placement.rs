//! Where in the year the intercalary month goes.

use badr_calendar::IntercalaryPosition;

/// Places Muharram by when in the solar year its trigger occurs.
///
/// A trigger `offset_days` into a year of `year_length_days` days puts
/// Muharram at the start of the lunisolar year when it falls in the first
/// half, the midpoint included, and at the end otherwise.
///
/// # Example
///
/// ```
/// use badr_calendar::IntercalaryPosition;
/// use badr_intercalate::placement;
///
/// assert_eq!(placement(89.0, 365.0), IntercalaryPosition::Start);
/// assert_eq!(placement(182.5, 365.0), IntercalaryPosition::Start);
/// assert_eq!(placement(272.0, 365.0), IntercalaryPosition::End);
/// ```
pub fn placement(offset_days: f64, year_length_days: f64) -> IntercalaryPosition {
    if offset_days <= year_length_days / 2.0 {
        IntercalaryPosition::Start
    } else {
        IntercalaryPosition::End
    }
}
