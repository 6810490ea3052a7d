//! Configuration for calendar construction.

use chrono::NaiveDate;

use badr_calendar::YearNumbering;
use badr_intercalate::{DriftConfig, DriftState, IntercalationStrategy};
use badr_months::{MonthLengthMode, ResolverConfig};

use crate::error::AssemblyError;

/// Everything [`build_calendar`](crate::build_calendar) needs besides the
/// moon-phase source and the year range.
///
/// # Example
///
/// ```
/// use badr_assemble::CalendarConfig;
/// use badr_intercalate::IntercalationStrategy;
///
/// let config = CalendarConfig::new()
///     .with_strategy(IntercalationStrategy::DriftThreshold);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarConfig {
    epoch_start_date: NaiveDate,
    numbering: YearNumbering,
    resolver: ResolverConfig,
    month_length_mode: MonthLengthMode,
    strategy: IntercalationStrategy,
    drift: DriftConfig,
    initial_drift: DriftState,
}

impl CalendarConfig {
    /// Creates a new configuration with defaults.
    ///
    /// Defaults: epoch 622-07-19 (proleptic Gregorian), no year zero, UTC
    /// dating, variable months, blue-moon intercalation, default drift
    /// constants starting from zero drift.
    pub fn new() -> Self {
        Self {
            epoch_start_date: NaiveDate::from_ymd_opt(622, 7, 19).unwrap_or_default(),
            numbering: YearNumbering::default(),
            resolver: ResolverConfig::default(),
            month_length_mode: MonthLengthMode::default(),
            strategy: IntercalationStrategy::default(),
            drift: DriftConfig::default(),
            initial_drift: DriftState::default(),
        }
    }

    /// Sets the date whose year is 1 H.
    pub fn with_epoch_start_date(mut self, date: NaiveDate) -> Self {
        self.epoch_start_date = date;
        self
    }

    /// Sets the year-numbering convention.
    pub fn with_numbering(mut self, numbering: YearNumbering) -> Self {
        self.numbering = numbering;
        self
    }

    /// Sets how full moons become month boundaries.
    pub fn with_resolver(mut self, resolver: ResolverConfig) -> Self {
        self.resolver = resolver;
        self
    }

    /// Sets the month-length mode.
    pub fn with_month_length_mode(mut self, mode: MonthLengthMode) -> Self {
        self.month_length_mode = mode;
        self
    }

    /// Sets the intercalation strategy.
    pub fn with_strategy(mut self, strategy: IntercalationStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the drift-threshold constants.
    pub fn with_drift(mut self, drift: DriftConfig) -> Self {
        self.drift = drift;
        self
    }

    /// Sets the drift carried into the first generated year.
    pub fn with_initial_drift(mut self, state: DriftState) -> Self {
        self.initial_drift = state;
        self
    }

    // --- Accessors ---

    /// Returns the epoch start date.
    pub fn epoch_start_date(&self) -> NaiveDate {
        self.epoch_start_date
    }

    /// Returns the year-numbering convention.
    pub fn numbering(&self) -> YearNumbering {
        self.numbering
    }

    /// Returns the resolver configuration.
    pub fn resolver(&self) -> &ResolverConfig {
        &self.resolver
    }

    /// Returns the month-length mode.
    pub fn month_length_mode(&self) -> &MonthLengthMode {
        &self.month_length_mode
    }

    /// Returns the intercalation strategy.
    pub fn strategy(&self) -> IntercalationStrategy {
        self.strategy
    }

    /// Returns the drift-threshold constants.
    pub fn drift(&self) -> &DriftConfig {
        &self.drift
    }

    /// Returns the drift carried into the first generated year.
    pub fn initial_drift(&self) -> DriftState {
        self.initial_drift
    }

    /// Validates every nested configuration.
    pub fn validate(&self) -> Result<(), AssemblyError> {
        self.resolver.validate()?;
        if let MonthLengthMode::Fixed(pattern) = &self.month_length_mode {
            pattern.validate()?;
        }
        if self.strategy != IntercalationStrategy::BlueMoon {
            self.drift.validate()?;
        }
        Ok(())
    }
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self::new()
    }
}
