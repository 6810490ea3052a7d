//! Configuration for month resolution and month-length policies.

use chrono::FixedOffset;

use crate::error::MonthError;

/// Configuration for turning full-moon instants into month boundaries.
///
/// # Example
///
/// ```
/// use badr_months::ResolverConfig;
///
/// let config = ResolverConfig::new().with_utc_offset_hours(3);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolverConfig {
    utc_offset_hours: i32,
    max_gap_days: u32,
}

impl ResolverConfig {
    /// Creates a new configuration with defaults.
    ///
    /// Defaults: `utc_offset_hours = 0`, `max_gap_days = 31`.
    pub fn new() -> Self {
        Self {
            utc_offset_hours: 0,
            max_gap_days: 31,
        }
    }

    /// Sets the fixed offset from UTC used to date full moons.
    pub fn with_utc_offset_hours(mut self, hours: i32) -> Self {
        self.utc_offset_hours = hours;
        self
    }

    /// Sets the largest tolerated gap between consecutive full moons.
    pub fn with_max_gap_days(mut self, days: u32) -> Self {
        self.max_gap_days = days;
        self
    }

    /// Returns the offset from UTC in hours.
    pub fn utc_offset_hours(&self) -> i32 {
        self.utc_offset_hours
    }

    /// Returns the largest tolerated gap between full moons.
    pub fn max_gap_days(&self) -> u32 {
        self.max_gap_days
    }

    /// Returns the offset as a chrono [`FixedOffset`].
    ///
    /// # Errors
    ///
    /// Returns [`MonthError::InvalidConfig`] for offsets outside -12..=14.
    pub fn offset(&self) -> Result<FixedOffset, MonthError> {
        if !(-12..=14).contains(&self.utc_offset_hours) {
            return Err(MonthError::InvalidConfig {
                reason: format!(
                    "utc_offset_hours must be -12..=14, got {}",
                    self.utc_offset_hours
                ),
            });
        }
        FixedOffset::east_opt(self.utc_offset_hours * 3600).ok_or_else(|| {
            MonthError::InvalidConfig {
                reason: format!("unrepresentable offset {}", self.utc_offset_hours),
            }
        })
    }

    /// Validates this configuration.
    pub fn validate(&self) -> Result<(), MonthError> {
        self.offset()?;
        if self.max_gap_days < 30 {
            return Err(MonthError::InvalidConfig {
                reason: format!("max_gap_days must be >= 30, got {}", self.max_gap_days),
            });
        }
        Ok(())
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Rule deciding when Dhul Hijjah receives a compensating day in a
/// fixed-length calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KabsRule {
    /// Add the day when Dhul Hijjah's fixed start is at least `lead_days`
    /// ahead of the observed one, in years without Muharram.
    Observed {
        /// Minimum lead, in days, that triggers the extra day.
        lead_days: u32,
    },
    /// Add the day in 11 of every 30 years: when `(11n + 14) mod 30 < 11`
    /// for astronomical year number `n`.
    ///
    /// This follows the tabular Islamic leap-year cycle, which tracks a
    /// purely lunar year. Over long runs with intercalated years it wanders
    /// away from observed months; pair it with a drift guard.
    ThirtyYearCycle,
}

impl KabsRule {
    /// Returns `true` if Dhul Hijjah gets the extra day.
    ///
    /// `dhul_hijjah_offset` is the fixed start minus the observed start of
    /// Dhul Hijjah, in days.
    pub fn adds_day(
        self,
        astronomical_year: i64,
        dhul_hijjah_offset: i64,
        has_intercalary: bool,
    ) -> bool {
        match self {
            Self::Observed { lead_days } => {
                !has_intercalary && dhul_hijjah_offset <= -i64::from(lead_days)
            }
            Self::ThirtyYearCycle => (11 * astronomical_year + 14).rem_euclid(30) < 11,
        }
    }
}

impl Default for KabsRule {
    fn default() -> Self {
        Self::Observed { lead_days: 1 }
    }
}

/// A fixed month-length pattern for the "consistent" calendar.
///
/// # Example
///
/// ```
/// use badr_months::{FixedPattern, KabsRule};
///
/// let pattern = FixedPattern::new().with_kabs_rule(KabsRule::ThirtyYearCycle);
/// assert_eq!(pattern.ordinary_total(), 354);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedPattern {
    lengths: [u8; 12],
    intercalary_length: u8,
    kabs_rule: KabsRule,
    max_offset_days: Option<u32>,
}

impl FixedPattern {
    /// Creates a new pattern with defaults.
    ///
    /// Defaults: months alternate 30 and 29 days starting with Safar I
    /// (354 in total), Muharram is 30 days, `kabs_rule = Observed { lead_days: 1 }`,
    /// `max_offset_days = Some(3)`.
    pub fn new() -> Self {
        Self {
            lengths: [30, 29, 30, 29, 30, 29, 30, 29, 30, 29, 30, 29],
            intercalary_length: 30,
            kabs_rule: KabsRule::default(),
            max_offset_days: Some(3),
        }
    }

    /// Sets the lengths of the twelve ordinary months, Safar I first.
    pub fn with_lengths(mut self, lengths: [u8; 12]) -> Self {
        self.lengths = lengths;
        self
    }

    /// Sets the length of the intercalary month.
    pub fn with_intercalary_length(mut self, length: u8) -> Self {
        self.intercalary_length = length;
        self
    }

    /// Sets the compensating-day rule.
    pub fn with_kabs_rule(mut self, rule: KabsRule) -> Self {
        self.kabs_rule = rule;
        self
    }

    /// Sets the largest tolerated offset from observed months, or `None` to
    /// disable the guard.
    pub fn with_max_offset_days(mut self, days: Option<u32>) -> Self {
        self.max_offset_days = days;
        self
    }

    // --- Accessors ---

    /// Returns the ordinary month lengths, Safar I first.
    pub fn lengths(&self) -> &[u8; 12] {
        &self.lengths
    }

    /// Returns the intercalary month length.
    pub fn intercalary_length(&self) -> u8 {
        self.intercalary_length
    }

    /// Returns the compensating-day rule.
    pub fn kabs_rule(&self) -> KabsRule {
        self.kabs_rule
    }

    /// Returns the drift guard limit.
    pub fn max_offset_days(&self) -> Option<u32> {
        self.max_offset_days
    }

    /// Returns the sum of the ordinary month lengths.
    pub fn ordinary_total(&self) -> u32 {
        self.lengths.iter().map(|&l| u32::from(l)).sum()
    }

    /// Validates this pattern.
    ///
    /// Every month, Muharram included, must be 29 or 30 days.
    pub fn validate(&self) -> Result<(), MonthError> {
        for (i, &len) in self.lengths.iter().enumerate() {
            if !(29..=30).contains(&len) {
                return Err(MonthError::InvalidConfig {
                    reason: format!("month {} length must be 29 or 30, got {len}", i + 1),
                });
            }
        }
        if !(29..=30).contains(&self.intercalary_length) {
            return Err(MonthError::InvalidConfig {
                reason: format!(
                    "intercalary length must be 29 or 30, got {}",
                    self.intercalary_length
                ),
            });
        }
        Ok(())
    }
}

impl Default for FixedPattern {
    fn default() -> Self {
        Self::new()
    }
}

/// How month lengths are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MonthLengthMode {
    /// Lengths follow observed full moons (29 or 30 days).
    #[default]
    Variable,
    /// Lengths follow a fixed pattern with an occasional compensating day.
    Fixed(FixedPattern),
}
