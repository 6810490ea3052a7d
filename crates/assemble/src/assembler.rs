//! Year-by-year assembly of lunisolar years.

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use badr_calendar::{Month, Year, month_names};
use badr_intercalate::{CycleContext, DriftState, IntercalationPolicy, Intercalator};
use badr_months::{MonthBoundary, MonthError};

use crate::config::CalendarConfig;
use crate::error::AssemblyError;

/// Builds consecutive lunisolar years from resolved month boundaries.
///
/// Each call to [`next_year`](Self::next_year) consumes the 12 or 13
/// observed months of one year and anchors it to the next Gregorian year.
/// The first year opens with the first full moon dated in `first_year`.
#[derive(Debug, Clone)]
pub struct YearAssembler {
    config: CalendarConfig,
    policy: Intercalator,
    boundaries: Vec<MonthBoundary>,
    cursor: usize,
    schedule_start: NaiveDate,
    next_anchor: i32,
}

impl YearAssembler {
    /// Creates an assembler starting at `first_year`.
    ///
    /// # Errors
    ///
    /// Returns [`AssemblyError::NoOpeningFullMoon`] when no boundary opens
    /// in `first_year`, or a configuration error.
    pub fn new(
        config: CalendarConfig,
        boundaries: Vec<MonthBoundary>,
        first_year: i32,
    ) -> Result<Self, AssemblyError> {
        config.validate()?;
        let policy =
            Intercalator::new(config.strategy(), *config.drift(), config.initial_drift())?;
        let cursor = boundaries
            .iter()
            .position(|b| b.full_moon_date().year() == first_year)
            .ok_or(AssemblyError::NoOpeningFullMoon { year: first_year })?;
        let schedule_start = boundaries[cursor].start();
        Ok(Self {
            config,
            policy,
            boundaries,
            cursor,
            schedule_start,
            next_anchor: first_year,
        })
    }

    /// Resumes drift bookkeeping from a checkpoint.
    ///
    /// # Errors
    ///
    /// Returns [`AssemblyError::Intercalation`] if the drift configuration is
    /// invalid.
    pub fn with_drift_state(mut self, state: DriftState) -> Result<Self, AssemblyError> {
        self.policy = Intercalator::new(self.config.strategy(), *self.config.drift(), state)?;
        Ok(self)
    }

    /// Returns the drift state, for drift-based strategies.
    pub fn drift_state(&self) -> Option<DriftState> {
        self.policy.drift_state()
    }

    /// Returns the Gregorian year the next assembled year is anchored to.
    pub fn next_anchor(&self) -> i32 {
        self.next_anchor
    }

    /// Assembles the next year.
    ///
    /// A failed year leaves the assembler unchanged, drift included.
    ///
    /// # Errors
    ///
    /// Any failure is returned as [`AssemblyError::InYear`] naming the
    /// anchor year.
    pub fn next_year(&mut self) -> Result<Year, AssemblyError> {
        let anchor = self.next_anchor;
        let year = self.assemble(anchor).map_err(|e| e.in_year(anchor))?;
        self.cursor += year.months().len();
        self.schedule_start = year.end();
        self.next_anchor += 1;
        Ok(year)
    }

    fn assemble(&mut self, anchor: i32) -> Result<Year, AssemblyError> {
        let observed = &self.boundaries[self.cursor..];
        let opening = observed.first().ok_or(MonthError::NoPhaseData {
            from: self.schedule_start,
        })?;

        let index = i64::from(anchor) - i64::from(self.config.epoch_start_date().year());
        let astronomical = index + 1;
        let mode = *self.config.month_length_mode();

        let ordinary =
            mode.layout(&month_names(None), observed, self.schedule_start, astronomical)?;
        let ordinary_length: u32 = ordinary.iter().map(|m| u32::from(m.length_days())).sum();

        let opening_date = opening.full_moon_date();
        let full_moons: Vec<NaiveDate> = observed
            .iter()
            .map(MonthBoundary::full_moon_date)
            .take_while(|d| d.year() <= anchor)
            .filter(|d| *d >= opening_date)
            .collect();
        let expect = full_moons.len() >= 13;
        let cycle = CycleContext::new(anchor, full_moons)
            .with_ordinary_length_days(ordinary_length)
            .with_expect_intercalation(expect);

        // Policy state is committed only once the year is complete.
        let mut policy = self.policy;
        let decision = policy.decide(&cycle)?;
        let position = decision.map(|d| d.position);
        let months = match position {
            None => ordinary,
            Some(_) => {
                let names = month_names(position);
                mode.layout(&names, observed, self.schedule_start, astronomical)?
            }
        };

        check_partition(&months, self.schedule_start)?;

        let muharram = months
            .iter()
            .find(|m| m.name().is_intercalary())
            .map(Month::length_days);
        let ordinary_days: u32 = months
            .iter()
            .filter(|m| !m.name().is_intercalary())
            .map(|m| u32::from(m.length_days()))
            .sum();
        policy.record(ordinary_days, muharram);

        let label = self.config.numbering().label(index);
        let year = Year::new(anchor, label, position, months)?;

        let epoch = self.config.epoch_start_date();
        if year.contains(epoch) != (index == 0) {
            return Err(AssemblyError::EpochMisaligned {
                epoch_start: epoch,
                label,
                year_start: year.start(),
            });
        }

        self.policy = policy;

        debug!(
            anchor,
            label = %label,
            start = %year.start(),
            months = year.months().len(),
            intercalary = ?position,
            "assembled year"
        );
        Ok(year)
    }
}

/// Checks that `months` start at `expected_start`, follow one another
/// without gaps and that their lengths add up to the days they span.
fn check_partition(months: &[Month], expected_start: NaiveDate) -> Result<(), AssemblyError> {
    let (Some(first), Some(last)) = (months.first(), months.last()) else {
        return Err(AssemblyError::YearAssembly {
            reason: "year has no months".to_string(),
        });
    };
    if first.start() != expected_start {
        return Err(AssemblyError::YearAssembly {
            reason: format!(
                "year starts {} but the previous year ended {expected_start}",
                first.start()
            ),
        });
    }
    for pair in months.windows(2) {
        if pair[0].end() != pair[1].start() {
            return Err(AssemblyError::YearAssembly {
                reason: format!(
                    "{} ends {} but {} starts {}",
                    pair[0].name(),
                    pair[0].end(),
                    pair[1].name(),
                    pair[1].start()
                ),
            });
        }
    }
    let total: i64 = months.iter().map(|m| i64::from(m.length_days())).sum();
    let span = (last.end() - first.start()).num_days();
    if total != span {
        return Err(AssemblyError::YearAssembly {
            reason: format!("months sum to {total} days but span {span}"),
        });
    }
    Ok(())
}
