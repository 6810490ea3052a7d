//! Approximate moon phases from the mean synodic month.

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use tracing::debug;

use badr_calendar::{MoonEvent, MoonPhase};

use crate::error::EphemerisError;
use crate::source::{MoonPhaseSource, check_range};

/// Mean length of the synodic month in days.
pub const MEAN_SYNODIC_MONTH: f64 = 29.530_588_853;

/// A [`MoonPhaseSource`] that spaces full moons exactly one mean synodic
/// month apart, with new moons halfway between.
///
/// True phases wander up to about 14 hours from the mean, so calendars built
/// from this source can differ by a day from ones built from an ephemeris.
/// Instants are rounded to the minute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeanLunation {
    reference: NaiveDateTime,
    synodic_month: f64,
}

impl Default for MeanLunation {
    /// Full moon of 2000-01-21 04:40 UTC.
    fn default() -> Self {
        let reference = NaiveDate::from_ymd_opt(2000, 1, 21)
            .and_then(|d| d.and_hms_opt(4, 40, 0))
            .unwrap_or_default();
        Self {
            reference,
            synodic_month: MEAN_SYNODIC_MONTH,
        }
    }
}

impl MeanLunation {
    /// Creates a source anchored at a known full moon.
    pub fn new(reference_full_moon: NaiveDateTime) -> Self {
        Self {
            reference: reference_full_moon,
            ..Self::default()
        }
    }

    /// Sets the synodic month length in days.
    pub fn with_synodic_month(mut self, days: f64) -> Self {
        self.synodic_month = days;
        self
    }

    /// Returns the reference full moon.
    pub fn reference(&self) -> NaiveDateTime {
        self.reference
    }

    /// Returns the synodic month length in days.
    pub fn synodic_month(&self) -> f64 {
        self.synodic_month
    }

    /// Validate that the configuration is internally consistent.
    ///
    /// # Errors
    ///
    /// Returns [`EphemerisError::Validation`] unless the synodic month lies
    /// in `29.0..=30.0`.
    pub fn validate(&self) -> Result<(), EphemerisError> {
        if !(29.0..=30.0).contains(&self.synodic_month) {
            return Err(EphemerisError::Validation {
                count: 1,
                details: format!(
                    "synodic month must be 29..=30 days, got {}",
                    self.synodic_month
                ),
            });
        }
        Ok(())
    }

    /// Instant of the phase `lunations` synodic months after the reference.
    fn instant(&self, lunations: f64) -> Option<NaiveDateTime> {
        let minutes = (lunations * self.synodic_month * 1440.0).round();
        if !minutes.is_finite() || minutes.abs() > i64::MAX as f64 {
            return None;
        }
        let delta = TimeDelta::try_minutes(minutes as i64)?;
        self.reference.checked_add_signed(delta)
    }
}

impl MoonPhaseSource for MeanLunation {
    fn moon_events(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<MoonEvent>, EphemerisError> {
        check_range(start, end)?;
        self.validate()?;

        let out_of_range = || EphemerisError::InvalidRange { start, end };
        let span_days = |d: NaiveDate| (d - self.reference.date()).num_days() as f64;
        let first = (span_days(start) / self.synodic_month).floor() as i64 - 1;
        let last = (span_days(end) / self.synodic_month).ceil() as i64 + 1;

        let mut events = Vec::new();
        for k in first..=last {
            let k = k as f64;
            for (phase, lunations) in [(MoonPhase::FullMoon, k), (MoonPhase::NewMoon, k + 0.5)] {
                let instant = self.instant(lunations).ok_or_else(out_of_range)?;
                if (start..=end).contains(&instant.date()) {
                    events.push(MoonEvent::new(instant, phase));
                }
            }
        }

        debug!(%start, %end, events = events.len(), "mean lunation events");
        Ok(events)
    }
}
