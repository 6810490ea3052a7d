//! Gregorian solar-year helpers.

use chrono::{Datelike, NaiveDate};

/// Returns the number of days in a proleptic Gregorian year (365 or 366).
pub fn days_in_year(year: i32) -> u32 {
    if NaiveDate::from_yo_opt(year, 366).is_some() {
        366
    } else {
        365
    }
}

/// Returns the number of whole days from January 1 of the date's year to
/// the date (January 1 is 0).
pub fn day_offset(date: NaiveDate) -> u32 {
    date.ordinal0()
}

/// Returns the number of days from `from` to `to` (negative if `to` is
/// earlier).
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// Returns the Gregorian `(year, month)` pair of a date.
pub fn year_month(date: NaiveDate) -> (i32, u32) {
    (date.year(), date.month())
}
