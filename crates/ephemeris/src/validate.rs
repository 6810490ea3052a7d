//! Accumulated validation of moon-event sequences.
//!
//! Provides [`ValidationCollector`] for gathering multiple validation errors
//! into a single [`EphemerisError::Validation`], plus the ordering check run
//! on every event table.

use badr_calendar::MoonEvent;

use crate::error::EphemerisError;

/// Accumulates validation errors and converts them into a single
/// [`EphemerisError::Validation`].
pub(crate) struct ValidationCollector {
    errors: Vec<String>,
}

impl ValidationCollector {
    pub(crate) fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub(crate) fn push(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.errors.len()
    }

    /// Consume the collector and return `Ok(())` if no errors were recorded.
    ///
    /// The `details` string joins all messages with `"; "`.
    pub(crate) fn finish(self) -> Result<(), EphemerisError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(EphemerisError::Validation {
                count: self.errors.len(),
                details: self.errors.join("; "),
            })
        }
    }
}

/// Checks that events are sorted by instant and that no phase repeats at
/// the same instant.
///
/// Records one message per offending pair.
pub(crate) fn validate_events(events: &[MoonEvent]) -> ValidationCollector {
    let mut c = ValidationCollector::new();

    for (i, pair) in events.windows(2).enumerate() {
        let (a, b) = (&pair[0], &pair[1]);
        if b.instant() < a.instant() {
            c.push(format!(
                "event {} at {} precedes event {i} at {}",
                i + 1,
                b.instant(),
                a.instant()
            ));
        } else if b.instant() == a.instant() && b.phase() == a.phase() {
            c.push(format!("duplicate {:?} at {}", a.phase(), a.instant()));
        }
    }

    c
}
