//! Month boundaries from full-moon instants.

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use tracing::debug;

use badr_calendar::{Eclipse, MoonEvent};

use crate::config::ResolverConfig;
use crate::error::MonthError;

/// One observed month: it opens the day after a full moon and runs until
/// the day after the next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthBoundary {
    opening_full_moon: NaiveDateTime,
    full_moon_date: NaiveDate,
    start: NaiveDate,
    length_days: u8,
    eclipses: Vec<Eclipse>,
}

impl MonthBoundary {
    /// Returns the UTC instant of the full moon that opens the month.
    pub fn opening_full_moon(&self) -> NaiveDateTime {
        self.opening_full_moon
    }

    /// Returns the local date of the opening full moon.
    pub fn full_moon_date(&self) -> NaiveDate {
        self.full_moon_date
    }

    /// Returns the first day of the month.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Returns the month length (29 or 30).
    pub fn length_days(&self) -> u8 {
        self.length_days
    }

    /// Returns the first day after the month.
    pub fn end(&self) -> NaiveDate {
        self.start + TimeDelta::days(i64::from(self.length_days))
    }

    /// Returns the eclipses between the opening full moon (inclusive) and
    /// the closing one (exclusive).
    pub fn eclipses(&self) -> &[Eclipse] {
        &self.eclipses
    }
}

/// Resolves every month bounded by two consecutive full moons in `events`.
///
/// New moons are ignored except for the eclipses they carry. The result has
/// one entry fewer than there are full moons.
///
/// # Errors
///
/// - [`MonthError::NoPhaseData`] when fewer than two full moons are given.
/// - [`MonthError::UnorderedEvents`] when full moons are not strictly
///   increasing.
/// - [`MonthError::MissingPhaseData`] when two full moons lie more than
///   `max_gap_days` apart.
/// - [`MonthError::InvalidMonthLength`] when a month would not be 29 or 30
///   days long.
pub fn resolve_boundaries(
    events: &[MoonEvent],
    config: &ResolverConfig,
) -> Result<Vec<MonthBoundary>, MonthError> {
    config.validate()?;
    let offset = config.offset()?;

    let full_moons: Vec<&MoonEvent> = events.iter().filter(|e| e.is_full_moon()).collect();
    if full_moons.len() < 2 {
        let from = events
            .first()
            .map_or(NaiveDate::MIN, |e| e.local_date(offset));
        return Err(MonthError::NoPhaseData { from });
    }

    let mut eclipses: Vec<(NaiveDateTime, Eclipse)> = events
        .iter()
        .filter_map(|e| e.eclipse().map(|x| (e.instant(), x)))
        .collect();
    eclipses.sort();

    let mut boundaries = Vec::with_capacity(full_moons.len() - 1);
    for pair in full_moons.windows(2) {
        let (open, close) = (pair[0], pair[1]);
        if close.instant() <= open.instant() {
            return Err(MonthError::UnorderedEvents { at: close.instant() });
        }

        let open_date = open.local_date(offset);
        let close_date = close.local_date(offset);
        let gap_days = (close_date - open_date).num_days();
        if gap_days > i64::from(config.max_gap_days()) {
            return Err(MonthError::MissingPhaseData {
                after: open_date,
                gap_days,
            });
        }

        let start = open_date + TimeDelta::days(1);
        let length = ((close_date + TimeDelta::days(1)) - start).num_days();
        if !(29..=30).contains(&length) {
            return Err(MonthError::InvalidMonthLength { start, length });
        }

        let lo = eclipses.partition_point(|(t, _)| *t < open.instant());
        let hi = eclipses.partition_point(|(t, _)| *t < close.instant());

        boundaries.push(MonthBoundary {
            opening_full_moon: open.instant(),
            full_moon_date: open_date,
            start,
            length_days: length as u8,
            eclipses: eclipses[lo..hi].iter().map(|(_, x)| *x).collect(),
        });
    }

    debug!(months = boundaries.len(), "resolved month boundaries");
    Ok(boundaries)
}
