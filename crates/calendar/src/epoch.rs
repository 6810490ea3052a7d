//! Year numbering across the Hijra epoch.
//!
//! Lunisolar years are counted by an *index* relative to the year that
//! contains the epoch start date: index 0 is that year, index -1 the year
//! before it, and so on. A [`YearNumbering`] turns the index into a
//! [`YearLabel`] such as `1 H.` or `3 B.H.`.

use std::fmt;

use serde::Serialize;

use crate::error::CalendarError;

/// Side of the epoch a year falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Epoch {
    /// Before Hijra, rendered `B.H.`.
    #[serde(rename = "BH")]
    BeforeHijra,
    /// Hijra, rendered `H.`.
    #[serde(rename = "H")]
    Hijra,
}

impl Epoch {
    /// Returns the suffix used when rendering a year label.
    pub fn suffix(self) -> &'static str {
        match self {
            Self::BeforeHijra => "B.H.",
            Self::Hijra => "H.",
        }
    }
}

/// Convention for the year immediately preceding 1 H.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum YearNumbering {
    /// 1 B.H. is followed directly by 1 H., as 1 BCE is followed by 1 CE.
    #[default]
    NoYearZero,
    /// A year 0 H. sits between 1 B.H. and 1 H.
    Astronomical,
}

impl YearNumbering {
    /// Returns the label of the year at `index` (0 is the epoch year).
    ///
    /// # Examples
    ///
    /// ```
    /// use badr_calendar::{Epoch, YearNumbering};
    ///
    /// let n = YearNumbering::NoYearZero;
    /// assert_eq!(n.label(0).to_string(), "1 H.");
    /// assert_eq!(n.label(-1).to_string(), "1 B.H.");
    ///
    /// let a = YearNumbering::Astronomical;
    /// assert_eq!(a.label(-1).to_string(), "0 H.");
    /// assert_eq!(a.label(-2).epoch(), Epoch::BeforeHijra);
    /// ```
    pub fn label(self, index: i64) -> YearLabel {
        let (number, epoch) = match self {
            Self::NoYearZero if index >= 0 => (index + 1, Epoch::Hijra),
            Self::NoYearZero => (-index, Epoch::BeforeHijra),
            Self::Astronomical if index >= -1 => (index + 1, Epoch::Hijra),
            Self::Astronomical => (-index - 1, Epoch::BeforeHijra),
        };
        YearLabel {
            // Saturates only far outside any ephemeris range.
            number: u32::try_from(number).unwrap_or(u32::MAX),
            epoch,
        }
    }

    /// Returns the index of a label; the inverse of [`label`](Self::label).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidYearLabel`] for a year 0 the
    /// convention does not have.
    pub fn index(self, label: YearLabel) -> Result<i64, CalendarError> {
        let n = i64::try_from(label.number).map_err(|_| CalendarError::InvalidYearLabel {
            label: label.to_string(),
        })?;
        match (self, label.epoch) {
            (Self::NoYearZero, Epoch::Hijra) if n >= 1 => Ok(n - 1),
            (Self::NoYearZero, Epoch::BeforeHijra) if n >= 1 => Ok(-n),
            (Self::Astronomical, Epoch::Hijra) => Ok(n - 1),
            (Self::Astronomical, Epoch::BeforeHijra) if n >= 1 => Ok(-n - 1),
            _ => Err(CalendarError::InvalidYearLabel {
                label: label.to_string(),
            }),
        }
    }
}

/// Returns the astronomical year number of the year at `index`: 1 H. is 1,
/// the year before it 0, then -1, -2, ...
pub fn astronomical_year(index: i64) -> i64 {
    index + 1
}

/// A rendered year number with its epoch suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct YearLabel {
    number: u32,
    epoch: Epoch,
}

impl YearLabel {
    /// Creates a label. No convention is checked here; see
    /// [`YearNumbering::index`].
    pub fn new(number: u32, epoch: Epoch) -> Self {
        Self { number, epoch }
    }

    /// Returns the year number.
    pub fn number(self) -> u32 {
        self.number
    }

    /// Returns the epoch.
    pub fn epoch(self) -> Epoch {
        self.epoch
    }
}

impl fmt::Display for YearLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.number, self.epoch.suffix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_year_is_one_h() {
        let label = YearNumbering::NoYearZero.label(0);
        assert_eq!(label, YearLabel::new(1, Epoch::Hijra));
    }

    #[test]
    fn year_before_epoch_is_one_bh() {
        let label = YearNumbering::NoYearZero.label(-1);
        assert_eq!(label, YearLabel::new(1, Epoch::BeforeHijra));
    }

    #[test]
    fn no_zero_label_without_year_zero() {
        for index in -50..50 {
            assert_ne!(YearNumbering::NoYearZero.label(index).number(), 0);
        }
    }

    #[test]
    fn astronomical_has_year_zero() {
        let n = YearNumbering::Astronomical;
        assert_eq!(n.label(-1), YearLabel::new(0, Epoch::Hijra));
        assert_eq!(n.label(-2), YearLabel::new(1, Epoch::BeforeHijra));
        assert_eq!(n.label(0), YearLabel::new(1, Epoch::Hijra));
    }

    #[test]
    fn far_past_and_future() {
        let n = YearNumbering::NoYearZero;
        assert_eq!(n.label(-621).to_string(), "621 B.H.");
        assert_eq!(n.label(1402).to_string(), "1403 H.");
    }

    #[test]
    fn index_inverts_label() {
        for numbering in [YearNumbering::NoYearZero, YearNumbering::Astronomical] {
            for index in -100..100 {
                let label = numbering.label(index);
                assert_eq!(numbering.index(label).unwrap(), index);
            }
        }
    }

    #[test]
    fn index_rejects_missing_year_zero() {
        let err = YearNumbering::NoYearZero
            .index(YearLabel::new(0, Epoch::Hijra))
            .unwrap_err();
        assert_eq!(
            err,
            CalendarError::InvalidYearLabel {
                label: "0 H.".into()
            }
        );
        assert!(
            YearNumbering::Astronomical
                .index(YearLabel::new(0, Epoch::BeforeHijra))
                .is_err()
        );
    }

    #[test]
    fn astronomical_year_numbers() {
        assert_eq!(astronomical_year(0), 1);
        assert_eq!(astronomical_year(-1), 0);
        assert_eq!(astronomical_year(-2), -1);
    }

    #[test]
    fn default_is_no_year_zero() {
        assert_eq!(YearNumbering::default(), YearNumbering::NoYearZero);
    }
}
