//! The moon-phase source seam and an in-memory implementation.

use chrono::NaiveDate;
use tracing::debug;

use badr_calendar::MoonEvent;

use crate::error::EphemerisError;
use crate::validate::validate_events;

/// Supplies new- and full-moon instants for a date range.
///
/// Implementations return events whose UTC date lies in `start..=end`,
/// ordered by instant. The calendar engine asks for a padded range around
/// each Gregorian year it generates, so sources should not fail merely
/// because the range extends slightly past what they hold; they return
/// what they have and leave coverage checks to the caller.
pub trait MoonPhaseSource {
    /// Returns the events whose UTC date lies in `start..=end`.
    ///
    /// # Errors
    ///
    /// Returns [`EphemerisError::InvalidRange`] when `end < start`, or a
    /// source-specific error.
    fn moon_events(&self, start: NaiveDate, end: NaiveDate)
    -> Result<Vec<MoonEvent>, EphemerisError>;
}

impl<T: MoonPhaseSource + ?Sized> MoonPhaseSource for &T {
    fn moon_events(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<MoonEvent>, EphemerisError> {
        (**self).moon_events(start, end)
    }
}

impl<T: MoonPhaseSource + ?Sized> MoonPhaseSource for Box<T> {
    fn moon_events(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<MoonEvent>, EphemerisError> {
        (**self).moon_events(start, end)
    }
}

pub(crate) fn check_range(start: NaiveDate, end: NaiveDate) -> Result<(), EphemerisError> {
    if end < start {
        return Err(EphemerisError::InvalidRange { start, end });
    }
    Ok(())
}

/// A validated, ordered table of moon events held in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventTable {
    events: Vec<MoonEvent>,
}

impl EventTable {
    /// Creates a table from events already sorted by instant.
    ///
    /// # Errors
    ///
    /// Returns [`EphemerisError::Validation`] listing every out-of-order
    /// pair and every repeated phase at the same instant.
    pub fn new(events: Vec<MoonEvent>) -> Result<Self, EphemerisError> {
        validate_events(&events).finish()?;
        debug!(events = events.len(), "event table built");
        Ok(Self { events })
    }

    /// Returns all events.
    pub fn events(&self) -> &[MoonEvent] {
        &self.events
    }

    /// Returns the number of events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns `true` if the table holds no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Returns the UTC dates of the first and last events.
    pub fn span(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.events.first()?;
        let last = self.events.last()?;
        Some((first.instant().date(), last.instant().date()))
    }
}

impl MoonPhaseSource for EventTable {
    fn moon_events(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<MoonEvent>, EphemerisError> {
        check_range(start, end)?;
        let lo = self
            .events
            .partition_point(|e| e.instant().date() < start);
        let hi = self
            .events
            .partition_point(|e| e.instant().date() <= end);
        Ok(self.events[lo..hi].to_vec())
    }
}
