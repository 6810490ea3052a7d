//! End-to-end calendar construction.

use std::ops::RangeInclusive;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::info;

use badr_calendar::{LunisolarDate, Year};
use badr_ephemeris::MoonPhaseSource;
use badr_intercalate::DriftState;
use badr_months::resolve_boundaries;

use crate::assembler::YearAssembler;
use crate::config::CalendarConfig;
use crate::error::AssemblyError;

/// Consecutive lunisolar years and the drift left after the last one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Calendar {
    years: Vec<Year>,
    #[serde(skip_serializing_if = "Option::is_none")]
    drift_state: Option<DriftState>,
}

impl Calendar {
    /// Returns the years in order.
    pub fn years(&self) -> &[Year] {
        &self.years
    }

    /// Returns the drift after the last year, for drift-based strategies.
    pub fn drift_state(&self) -> Option<DriftState> {
        self.drift_state
    }

    /// Returns the year containing `date`, if covered.
    pub fn year_containing(&self, date: NaiveDate) -> Option<&Year> {
        let i = self.years.partition_point(|y| y.end() <= date);
        self.years.get(i).filter(|y| y.contains(date))
    }

    /// Returns the lunisolar date of `date`, if covered.
    pub fn locate(&self, date: NaiveDate) -> Option<LunisolarDate> {
        self.year_containing(date)?.locate(date)
    }
}

/// Builds the lunisolar years anchored to each Gregorian year in `years`.
///
/// Events are fetched once for the whole range, with a margin on both
/// sides, resolved into month boundaries and assembled year by year.
///
/// # Errors
///
/// Returns [`AssemblyError::InvalidRange`] for an empty range, an
/// [`AssemblyError::InYear`] naming the failing year, or the underlying
/// source, resolver or configuration error.
#[tracing::instrument(skip(source, config), fields(strategy = ?config.strategy()))]
pub fn build_calendar<S: MoonPhaseSource + ?Sized>(
    source: &S,
    years: RangeInclusive<i32>,
    config: &CalendarConfig,
) -> Result<Calendar, AssemblyError> {
    let (first, last) = (*years.start(), *years.end());
    let invalid = || AssemblyError::InvalidRange { first, last };
    if last < first {
        return Err(invalid());
    }
    config.validate()?;

    // A local full moon on January 1 may be dated December 31 in UTC; the
    // last year can run a few months into the year after next.
    let fetch_start = first
        .checked_sub(1)
        .and_then(|y| NaiveDate::from_ymd_opt(y, 12, 1))
        .ok_or_else(invalid)?;
    let fetch_end = NaiveDate::from_ymd_opt(last.saturating_add(2), 1, 31).ok_or_else(invalid)?;

    let events = source.moon_events(fetch_start, fetch_end)?;
    info!(events = events.len(), %fetch_start, %fetch_end, "fetched moon events");

    let boundaries = resolve_boundaries(&events, config.resolver())?;
    let mut assembler = YearAssembler::new(config.clone(), boundaries, first)?;

    let mut out = Vec::new();
    for _ in years {
        out.push(assembler.next_year()?);
    }

    let intercalary = out.iter().filter(|y| y.has_intercalary()).count();
    info!(years = out.len(), intercalary, "calendar built");

    Ok(Calendar {
        years: out,
        drift_state: assembler.drift_state(),
    })
}
