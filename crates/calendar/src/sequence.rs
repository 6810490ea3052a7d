//! Chaining month lengths into start dates.

use chrono::{NaiveDate, TimeDelta};

/// Returns the start date of each month when months of the given lengths
/// follow one another from `first`.
///
/// The result has the same length as `lengths`; the first entry is `first`.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use badr_calendar::chain_starts;
///
/// let first = NaiveDate::from_ymd_opt(2024, 12, 15).unwrap();
/// let starts = chain_starts(first, &[30, 29]);
/// assert_eq!(starts[1], NaiveDate::from_ymd_opt(2025, 1, 14).unwrap());
/// ```
pub fn chain_starts(first: NaiveDate, lengths: &[u8]) -> Vec<NaiveDate> {
    let mut starts = Vec::with_capacity(lengths.len());
    let mut current = first;
    for &len in lengths {
        starts.push(current);
        current += TimeDelta::days(i64::from(len));
    }
    starts
}
