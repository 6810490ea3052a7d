//! Drift-threshold bookkeeping.
//!
//! Each lunar year falls short of the solar year by about eleven days. The
//! shortfall accumulates in a [`DriftState`]; once it reaches the threshold a
//! Muharram is inserted and the state is reduced by the month's length.

use serde::{Deserialize, Serialize};

use crate::error::IntercalationError;

/// Constants of the drift-threshold rule.
///
/// # Example
///
/// ```
/// use badr_intercalate::DriftConfig;
///
/// let config = DriftConfig::new().with_threshold_days(20.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriftConfig {
    threshold_days: f64,
    solar_year_length: f64,
    lunar_year_length_estimate: f64,
}

impl DriftConfig {
    /// Creates a new configuration with defaults.
    ///
    /// Defaults: `threshold_days = 22.0`, `solar_year_length = 365.24219`
    /// (mean tropical year), `lunar_year_length_estimate = 354.367`
    /// (twelve mean synodic months).
    pub fn new() -> Self {
        Self {
            threshold_days: 22.0,
            solar_year_length: 365.242_19,
            lunar_year_length_estimate: 354.367,
        }
    }

    /// Sets the accumulated drift that triggers an intercalation.
    pub fn with_threshold_days(mut self, days: f64) -> Self {
        self.threshold_days = days;
        self
    }

    /// Sets the solar year length in days.
    pub fn with_solar_year_length(mut self, days: f64) -> Self {
        self.solar_year_length = days;
        self
    }

    /// Sets the lunar year length used when no resolved length is known.
    pub fn with_lunar_year_length_estimate(mut self, days: f64) -> Self {
        self.lunar_year_length_estimate = days;
        self
    }

    // --- Accessors ---

    /// Returns the trigger threshold in days.
    pub fn threshold_days(&self) -> f64 {
        self.threshold_days
    }

    /// Returns the solar year length in days.
    pub fn solar_year_length(&self) -> f64 {
        self.solar_year_length
    }

    /// Returns the fallback lunar year length in days.
    pub fn lunar_year_length_estimate(&self) -> f64 {
        self.lunar_year_length_estimate
    }

    /// Validates this configuration.
    ///
    /// All values must be finite and positive and the lunar year must be
    /// shorter than the solar year.
    pub fn validate(&self) -> Result<(), IntercalationError> {
        for (name, v) in [
            ("threshold_days", self.threshold_days),
            ("solar_year_length", self.solar_year_length),
            ("lunar_year_length_estimate", self.lunar_year_length_estimate),
        ] {
            if !v.is_finite() || v <= 0.0 {
                return Err(IntercalationError::InvalidConfig {
                    reason: format!("{name} must be finite and positive, got {v}"),
                });
            }
        }
        if self.lunar_year_length_estimate >= self.solar_year_length {
            return Err(IntercalationError::InvalidConfig {
                reason: format!(
                    "lunar_year_length_estimate ({}) must be below solar_year_length ({})",
                    self.lunar_year_length_estimate, self.solar_year_length
                ),
            });
        }
        Ok(())
    }
}

impl Default for DriftConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Accumulated solar-minus-lunar drift, threaded from year to year.
///
/// Serializable so a run can be checkpointed and resumed.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DriftState {
    accumulated_days: f64,
}

impl DriftState {
    /// Creates a state holding `accumulated_days` of drift.
    pub fn new(accumulated_days: f64) -> Self {
        Self { accumulated_days }
    }

    /// Returns the accumulated drift in days.
    pub fn accumulated_days(&self) -> f64 {
        self.accumulated_days
    }

    /// Adds one year's drift and reports where the threshold was crossed.
    ///
    /// `lunar_year_length` is the resolved length of the year's twelve
    /// ordinary months; `None` falls back to the configured estimate.
    pub fn advance(&mut self, config: &DriftConfig, lunar_year_length: Option<f64>) -> DriftStep {
        let lunar = lunar_year_length.unwrap_or(config.lunar_year_length_estimate);
        let previous = self.accumulated_days;
        let increment = config.solar_year_length - lunar;
        self.accumulated_days += increment;
        DriftStep {
            previous,
            increment,
            accumulated: self.accumulated_days,
        }
    }

    /// Removes the days absorbed by an inserted intercalary month.
    pub fn settle(&mut self, intercalated_days: f64) {
        self.accumulated_days -= intercalated_days;
    }

    /// Replaces the lunar year length used by the last [`advance`](Self::advance)
    /// with the length the year was finally laid out with.
    pub fn revise(&mut self, advanced_with: f64, actual: f64) {
        self.accumulated_days += advanced_with - actual;
    }
}

/// One year's change to a [`DriftState`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriftStep {
    /// Drift before the year.
    pub previous: f64,
    /// Drift added by the year.
    pub increment: f64,
    /// Drift after the year.
    pub accumulated: f64,
}

impl DriftStep {
    /// Returns the fraction of the year (in `[0, 1]`) at which the drift,
    /// accruing linearly, reached `threshold`, or `None` if it did not.
    pub fn crossing(&self, threshold: f64) -> Option<f64> {
        if self.accumulated < threshold {
            return None;
        }
        if self.increment <= 0.0 {
            return Some(0.0);
        }
        Some(((threshold - self.previous) / self.increment).clamp(0.0, 1.0))
    }
}
