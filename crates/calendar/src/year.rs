//! Lunisolar year record and date lookup.

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;
use serde::ser::{SerializeStruct, Serializer};

use crate::epoch::{Epoch, YearLabel};
use crate::error::CalendarError;
use crate::month::{IntercalaryPosition, Month, MonthName, month_names};

/// A lunisolar year of 12 or 13 months.
///
/// Each year is anchored to the Gregorian year in which it begins (or, for
/// years whose start slipped into late December, the Gregorian year it was
/// generated for).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Year {
    anchor_year: i32,
    label: YearLabel,
    intercalary_position: Option<IntercalaryPosition>,
    months: Vec<Month>,
}

impl Year {
    /// Creates a year from its months.
    ///
    /// The month names and ordinals must match the rotation produced by
    /// [`month_names`] for `intercalary_position`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonthCount`] when the number of months
    /// disagrees with the layout and [`CalendarError::InvalidLayout`] when a
    /// month sits at the wrong ordinal.
    pub fn new(
        anchor_year: i32,
        label: YearLabel,
        intercalary_position: Option<IntercalaryPosition>,
        months: Vec<Month>,
    ) -> Result<Self, CalendarError> {
        let expected = month_names(intercalary_position);
        if months.len() != expected.len() {
            return Err(CalendarError::InvalidMonthCount {
                count: months.len(),
                expected: expected.len(),
            });
        }
        for (i, (month, name)) in months.iter().zip(&expected).enumerate() {
            let ordinal = (i + 1) as u8;
            if month.name() != *name || month.ordinal() != ordinal {
                return Err(CalendarError::InvalidLayout {
                    ordinal,
                    expected: *name,
                    got: month.name(),
                });
            }
        }
        Ok(Self {
            anchor_year,
            label,
            intercalary_position,
            months,
        })
    }

    /// Returns the Gregorian year this year is anchored to.
    pub fn anchor_year(&self) -> i32 {
        self.anchor_year
    }

    /// Returns the year label.
    pub fn label(&self) -> YearLabel {
        self.label
    }

    /// Returns the year number.
    pub fn number(&self) -> u32 {
        self.label.number()
    }

    /// Returns the epoch.
    pub fn epoch(&self) -> Epoch {
        self.label.epoch()
    }

    /// Returns the months in ordinal order.
    pub fn months(&self) -> &[Month] {
        &self.months
    }

    /// Returns `true` if the year carries the intercalary Muharram.
    pub fn has_intercalary(&self) -> bool {
        self.intercalary_position.is_some()
    }

    /// Returns where Muharram sits, if present.
    pub fn intercalary_position(&self) -> Option<IntercalaryPosition> {
        self.intercalary_position
    }

    /// Returns the intercalary month, if present.
    pub fn intercalary_month(&self) -> Option<&Month> {
        self.months.iter().find(|m| m.name().is_intercalary())
    }

    /// Returns the first day of the year.
    pub fn start(&self) -> NaiveDate {
        self.months[0].start()
    }

    /// Returns the first day after the year.
    pub fn end(&self) -> NaiveDate {
        self.months[self.months.len() - 1].end()
    }

    /// Returns the sum of the month lengths.
    pub fn length_days(&self) -> u32 {
        self.months.iter().map(|m| u32::from(m.length_days())).sum()
    }

    /// Returns `true` if `date` falls within the year.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start() <= date && date < self.end()
    }

    /// Returns the lunisolar date of `date`, or `None` if it falls outside
    /// the year.
    pub fn locate(&self, date: NaiveDate) -> Option<LunisolarDate> {
        self.months.iter().find_map(|m| {
            m.day_of(date).map(|day| LunisolarDate {
                label: self.label,
                month: m.name(),
                ordinal: m.ordinal(),
                day,
            })
        })
    }
}

impl Serialize for Year {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("Year", 5)?;
        s.serialize_field("anchor_year", &self.anchor_year)?;
        s.serialize_field("label", &self.label)?;
        s.serialize_field("has_intercalary", &self.has_intercalary())?;
        s.serialize_field("intercalary_position", &self.intercalary_position)?;
        s.serialize_field("months", &self.months)?;
        s.end()
    }
}

/// A day expressed in the lunisolar calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LunisolarDate {
    /// Year label.
    pub label: YearLabel,
    /// Month name.
    pub month: MonthName,
    /// Month ordinal within the year.
    pub ordinal: u8,
    /// 1-based day of the month.
    pub day: u8,
}

impl fmt::Display for LunisolarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}, {}", self.month, self.day, self.label)
    }
}
