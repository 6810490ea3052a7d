//! Month names, the intercalary layout, and the [`Month`] record.

use std::fmt;

use chrono::{NaiveDate, TimeDelta};
use serde::Serialize;

use crate::error::CalendarError;
use crate::moon::Eclipse;

/// Names of the lunisolar months.
///
/// The twelve ordinary months rotate from Safar I to Dhul Hijjah. Muharram
/// only appears as the intercalary 13th month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[repr(u8)]
pub enum MonthName {
    Muharram,
    #[serde(rename = "Safar I")]
    SafarI,
    #[serde(rename = "Safar II")]
    SafarII,
    #[serde(rename = "Rabi I")]
    RabiI,
    #[serde(rename = "Rabi II")]
    RabiII,
    #[serde(rename = "Jumada I")]
    JumadaI,
    #[serde(rename = "Jumada II")]
    JumadaII,
    Rajab,
    #[serde(rename = "Sha'ban")]
    Shaban,
    Ramadan,
    Shawwal,
    #[serde(rename = "Dhul Qadah")]
    DhulQadah,
    #[serde(rename = "Dhul Hijjah")]
    DhulHijjah,
}

impl MonthName {
    /// The twelve ordinary months in rotation order.
    pub const ORDINARY: [MonthName; 12] = [
        Self::SafarI,
        Self::SafarII,
        Self::RabiI,
        Self::RabiII,
        Self::JumadaI,
        Self::JumadaII,
        Self::Rajab,
        Self::Shaban,
        Self::Ramadan,
        Self::Shawwal,
        Self::DhulQadah,
        Self::DhulHijjah,
    ];

    /// Returns the display name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Muharram => "Muharram",
            Self::SafarI => "Safar I",
            Self::SafarII => "Safar II",
            Self::RabiI => "Rabi I",
            Self::RabiII => "Rabi II",
            Self::JumadaI => "Jumada I",
            Self::JumadaII => "Jumada II",
            Self::Rajab => "Rajab",
            Self::Shaban => "Sha'ban",
            Self::Ramadan => "Ramadan",
            Self::Shawwal => "Shawwal",
            Self::DhulQadah => "Dhul Qadah",
            Self::DhulHijjah => "Dhul Hijjah",
        }
    }

    /// Returns the 1-based position among the ordinary months, or `None`
    /// for Muharram.
    pub fn ordinary_index(self) -> Option<u8> {
        match self {
            Self::Muharram => None,
            // Discriminants follow the rotation, Safar I = 1.
            other => Some(other as u8),
        }
    }

    /// Returns `true` for the intercalary month.
    pub fn is_intercalary(self) -> bool {
        self == Self::Muharram
    }
}

impl fmt::Display for MonthName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the intercalary Muharram sits within its year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum IntercalaryPosition {
    /// Muharram is the first month; the ordinary months become 2..=13.
    Start,
    /// Muharram is the 13th month.
    End,
}

/// Returns the month names of a year in ordinal order.
///
/// Without an intercalary position this is [`MonthName::ORDINARY`]; with one,
/// Muharram is prepended or appended.
///
/// # Example
///
/// ```
/// use badr_calendar::{IntercalaryPosition, MonthName, month_names};
///
/// let names = month_names(Some(IntercalaryPosition::Start));
/// assert_eq!(names.len(), 13);
/// assert_eq!(names[0], MonthName::Muharram);
/// assert_eq!(names[12], MonthName::DhulHijjah);
/// ```
pub fn month_names(position: Option<IntercalaryPosition>) -> Vec<MonthName> {
    let mut names = Vec::with_capacity(13);
    if position == Some(IntercalaryPosition::Start) {
        names.push(MonthName::Muharram);
    }
    names.extend_from_slice(&MonthName::ORDINARY);
    if position == Some(IntercalaryPosition::End) {
        names.push(MonthName::Muharram);
    }
    names
}

/// One month of a lunisolar year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Month {
    name: MonthName,
    ordinal: u8,
    start: NaiveDate,
    length_days: u8,
    observed_offset_days: Option<i64>,
    eclipses: Vec<Eclipse>,
}

impl Month {
    /// Creates a month.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidOrdinal`] if `ordinal` is outside
    /// 1..=13 and [`CalendarError::InvalidLength`] if `length_days` is zero.
    pub fn new(
        name: MonthName,
        ordinal: u8,
        start: NaiveDate,
        length_days: u8,
    ) -> Result<Self, CalendarError> {
        if !(1..=13).contains(&ordinal) {
            return Err(CalendarError::InvalidOrdinal { ordinal });
        }
        if length_days == 0 {
            return Err(CalendarError::InvalidLength {
                name,
                length: length_days,
            });
        }
        Ok(Self {
            name,
            ordinal,
            start,
            length_days,
            observed_offset_days: None,
            eclipses: Vec::new(),
        })
    }

    /// Records the signed offset of the start date from the observed,
    /// full-moon-derived start (fixed-length calendars only).
    pub fn with_observed_offset(mut self, days: i64) -> Self {
        self.observed_offset_days = Some(days);
        self
    }

    /// Records the eclipses that fall within the month's lunation.
    pub fn with_eclipses(mut self, eclipses: Vec<Eclipse>) -> Self {
        self.eclipses = eclipses;
        self
    }

    /// Returns the month name.
    pub fn name(&self) -> MonthName {
        self.name
    }

    /// Returns the 1-based position within the year.
    pub fn ordinal(&self) -> u8 {
        self.ordinal
    }

    /// Returns the first day of the month.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Returns the number of days in the month.
    pub fn length_days(&self) -> u8 {
        self.length_days
    }

    /// Returns the first day after the month.
    pub fn end(&self) -> NaiveDate {
        self.start + TimeDelta::days(i64::from(self.length_days))
    }

    /// Returns the last day of the month.
    pub fn last_day(&self) -> NaiveDate {
        self.end() - TimeDelta::days(1)
    }

    /// Returns the fixed-schedule offset from the observed start, if recorded.
    pub fn observed_offset_days(&self) -> Option<i64> {
        self.observed_offset_days
    }

    /// Returns the eclipses within the month's lunation.
    pub fn eclipses(&self) -> &[Eclipse] {
        &self.eclipses
    }

    /// Returns the 1-based day of the month for `date`, or `None` if the
    /// date lies outside the month.
    pub fn day_of(&self, date: NaiveDate) -> Option<u8> {
        let days = (date - self.start).num_days();
        if (0..i64::from(self.length_days)).contains(&days) {
            u8::try_from(days + 1).ok()
        } else {
            None
        }
    }
}
