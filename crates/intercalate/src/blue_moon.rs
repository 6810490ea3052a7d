//! Blue-moon detection: a Gregorian month holding two full moons.

use chrono::NaiveDate;

use badr_calendar::{IntercalaryPosition, day_offset, days_in_year, year_month};

use crate::error::IntercalationError;
use crate::placement::placement;

/// The second full moon of a Gregorian month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlueMoon {
    date: NaiveDate,
}

impl BlueMoon {
    /// Returns the local date of the second full moon.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the Gregorian month (1-12) holding both full moons.
    pub fn month(&self) -> u32 {
        year_month(self.date).1
    }

    /// Returns days since January 1 of the blue moon's year.
    pub fn offset_days(&self) -> u32 {
        day_offset(self.date)
    }

    /// Returns where the blue moon puts Muharram.
    pub fn position(&self) -> IntercalaryPosition {
        let year = year_month(self.date).0;
        placement(
            f64::from(self.offset_days()),
            f64::from(days_in_year(year)),
        )
    }
}

/// Returns the earliest blue moon among full-moon dates sorted ascending.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use badr_intercalate::find_blue_moon;
///
/// let d = |m, d| NaiveDate::from_ymd_opt(2001, m, d).unwrap();
/// let full = [d(1, 9), d(2, 8), d(3, 2), d(3, 31), d(4, 29)];
/// assert_eq!(find_blue_moon(&full).unwrap().date(), d(3, 31));
/// ```
pub fn find_blue_moon(full_moons: &[NaiveDate]) -> Option<BlueMoon> {
    full_moons
        .windows(2)
        .find(|pair| year_month(pair[0]) == year_month(pair[1]))
        .map(|pair| BlueMoon { date: pair[1] })
}

/// Like [`find_blue_moon`], for a window the caller expects to intercalate.
///
/// # Errors
///
/// Returns [`IntercalationError::NoQualifyingMonth`] when no blue moon is
/// found.
pub fn require_blue_moon(
    anchor_year: i32,
    full_moons: &[NaiveDate],
) -> Result<BlueMoon, IntercalationError> {
    find_blue_moon(full_moons).ok_or(IntercalationError::NoQualifyingMonth {
        anchor_year,
        full_moons: full_moons.len(),
    })
}
