//! Intercalation policies behind one interface.

use chrono::NaiveDate;
use tracing::debug;

use badr_calendar::IntercalaryPosition;

use crate::blue_moon::{find_blue_moon, require_blue_moon};
use crate::drift::{DriftConfig, DriftState};
use crate::error::IntercalationError;
use crate::placement::placement;

/// What a policy sees of the year being assembled.
#[derive(Debug, Clone, PartialEq)]
pub struct CycleContext {
    /// Gregorian year the lunisolar year is anchored to.
    pub anchor_year: i32,
    /// Local dates of the full moons from the year's opening full moon
    /// through December 31 of `anchor_year`.
    pub full_moons: Vec<NaiveDate>,
    /// Length of the year's twelve ordinary months, if already resolved.
    pub ordinary_length_days: Option<u32>,
    /// Whether the caller expects this cycle to intercalate; a blue-moon
    /// scan that finds nothing is then an error.
    pub expect_intercalation: bool,
}

impl CycleContext {
    /// Creates a context with no resolved length and no expectation.
    pub fn new(anchor_year: i32, full_moons: Vec<NaiveDate>) -> Self {
        Self {
            anchor_year,
            full_moons,
            ordinary_length_days: None,
            expect_intercalation: false,
        }
    }

    /// Sets the resolved length of the ordinary months.
    pub fn with_ordinary_length_days(mut self, days: u32) -> Self {
        self.ordinary_length_days = Some(days);
        self
    }

    /// Marks the cycle as expected to intercalate.
    pub fn with_expect_intercalation(mut self, expect: bool) -> Self {
        self.expect_intercalation = expect;
        self
    }
}

/// What caused an intercalation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Trigger {
    /// A Gregorian month with two full moons; `date` is the second one.
    BlueMoon {
        /// Local date of the second full moon.
        date: NaiveDate,
    },
    /// Accumulated drift reached the threshold.
    Drift {
        /// Drift after the year, before settling.
        accumulated_days: f64,
    },
}

/// A decision to insert Muharram.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intercalation {
    /// Where Muharram goes.
    pub position: IntercalaryPosition,
    /// Days into the solar year at which the trigger occurred.
    pub offset_days: f64,
    /// What caused it.
    pub trigger: Trigger,
}

/// Decides, once per year, whether and where Muharram is inserted.
///
/// The assembler calls [`decide`](Self::decide) before laying out a year and
/// [`record`](Self::record) after, with the total of the ordinary months and
/// the length of the Muharram actually inserted (if any).
pub trait IntercalationPolicy {
    /// Returns the intercalation for the year, if any.
    fn decide(
        &mut self,
        cycle: &CycleContext,
    ) -> Result<Option<Intercalation>, IntercalationError>;

    /// Records the year just assembled: its ordinary months total
    /// `ordinary_length_days` and it carries a Muharram of `muharram_days`.
    fn record(&mut self, _ordinary_length_days: u32, _muharram_days: Option<u8>) {}

    /// Returns the drift state carried by the policy, if it has one.
    fn drift_state(&self) -> Option<DriftState> {
        None
    }
}

/// Intercalates when the year holds a blue moon. Stateless.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlueMoonPolicy;

impl IntercalationPolicy for BlueMoonPolicy {
    fn decide(
        &mut self,
        cycle: &CycleContext,
    ) -> Result<Option<Intercalation>, IntercalationError> {
        let blue = if cycle.expect_intercalation {
            Some(require_blue_moon(cycle.anchor_year, &cycle.full_moons)?)
        } else {
            find_blue_moon(&cycle.full_moons)
        };
        Ok(blue.map(|bm| Intercalation {
            position: bm.position(),
            offset_days: f64::from(bm.offset_days()),
            trigger: Trigger::BlueMoon { date: bm.date() },
        }))
    }
}

/// Intercalates when accumulated drift reaches the threshold.
///
/// A decision is taken on the provisional ordinary length. If the final
/// layout differs (a fixed pattern dropping its compensating day in an
/// intercalary year), [`record`](IntercalationPolicy::record) revises the
/// drift to the final length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriftPolicy {
    config: DriftConfig,
    state: DriftState,
    /// Resolved lunar length the last `decide` advanced with.
    advanced_with: Option<f64>,
}

impl DriftPolicy {
    /// Creates a policy starting from `state`.
    ///
    /// # Errors
    ///
    /// Returns [`IntercalationError::InvalidConfig`] if `config` is invalid.
    pub fn new(config: DriftConfig, state: DriftState) -> Result<Self, IntercalationError> {
        config.validate()?;
        Ok(Self {
            config,
            state,
            advanced_with: None,
        })
    }

    /// Returns the configuration.
    pub fn config(&self) -> &DriftConfig {
        &self.config
    }

    /// Returns the current state.
    pub fn state(&self) -> DriftState {
        self.state
    }
}

impl IntercalationPolicy for DriftPolicy {
    fn decide(
        &mut self,
        cycle: &CycleContext,
    ) -> Result<Option<Intercalation>, IntercalationError> {
        let lunar = cycle.ordinary_length_days.map(f64::from);
        let step = self.state.advance(&self.config, lunar);
        self.advanced_with = lunar;
        debug!(
            anchor_year = cycle.anchor_year,
            accumulated = step.accumulated,
            "drift advanced"
        );
        let solar = self.config.solar_year_length();
        Ok(step
            .crossing(self.config.threshold_days())
            .map(|fraction| {
                let offset_days = fraction * solar;
                Intercalation {
                    position: placement(offset_days, solar),
                    offset_days,
                    trigger: Trigger::Drift {
                        accumulated_days: step.accumulated,
                    },
                }
            }))
    }

    fn record(&mut self, ordinary_length_days: u32, muharram_days: Option<u8>) {
        if let Some(provisional) = self.advanced_with.take() {
            self.state.revise(provisional, f64::from(ordinary_length_days));
        }
        if let Some(days) = muharram_days {
            self.state.settle(f64::from(days));
        }
    }

    fn drift_state(&self) -> Option<DriftState> {
        Some(self.state)
    }
}

/// Evaluates both triggers and keeps the one that occurs earlier in the
/// solar year, the blue moon on a tie. Drift is advanced every year and
/// settled whenever Muharram is inserted, whichever trigger caused it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CombinedPolicy {
    blue_moon: BlueMoonPolicy,
    drift: DriftPolicy,
}

impl CombinedPolicy {
    /// Creates a combined policy around a drift policy.
    pub fn new(drift: DriftPolicy) -> Self {
        Self {
            blue_moon: BlueMoonPolicy,
            drift,
        }
    }
}

impl IntercalationPolicy for CombinedPolicy {
    fn decide(
        &mut self,
        cycle: &CycleContext,
    ) -> Result<Option<Intercalation>, IntercalationError> {
        let blue = self.blue_moon.decide(cycle)?;
        let drift = self.drift.decide(cycle)?;
        Ok(match (blue, drift) {
            (Some(b), Some(d)) if d.offset_days < b.offset_days => Some(d),
            (Some(b), _) => Some(b),
            (None, d) => d,
        })
    }

    fn record(&mut self, ordinary_length_days: u32, muharram_days: Option<u8>) {
        self.drift.record(ordinary_length_days, muharram_days);
    }

    fn drift_state(&self) -> Option<DriftState> {
        self.drift.drift_state()
    }
}

/// Which intercalation rule to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntercalationStrategy {
    /// Blue-moon rule only.
    #[default]
    BlueMoon,
    /// Drift-threshold rule only.
    DriftThreshold,
    /// Both rules; the earlier trigger wins.
    Combined,
}

/// Tagged dispatcher over the available policies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intercalator {
    /// See [`BlueMoonPolicy`].
    BlueMoon(BlueMoonPolicy),
    /// See [`DriftPolicy`].
    Drift(DriftPolicy),
    /// See [`CombinedPolicy`].
    Combined(CombinedPolicy),
}

impl Intercalator {
    /// Builds the policy for `strategy`. The drift configuration and state
    /// are ignored by the blue-moon strategy.
    ///
    /// # Errors
    ///
    /// Returns [`IntercalationError::InvalidConfig`] if a drift-based
    /// strategy is given an invalid configuration.
    pub fn new(
        strategy: IntercalationStrategy,
        config: DriftConfig,
        state: DriftState,
    ) -> Result<Self, IntercalationError> {
        Ok(match strategy {
            IntercalationStrategy::BlueMoon => Self::BlueMoon(BlueMoonPolicy),
            IntercalationStrategy::DriftThreshold => Self::Drift(DriftPolicy::new(config, state)?),
            IntercalationStrategy::Combined => {
                Self::Combined(CombinedPolicy::new(DriftPolicy::new(config, state)?))
            }
        })
    }

    /// Returns the strategy this dispatcher runs.
    pub fn strategy(&self) -> IntercalationStrategy {
        match self {
            Self::BlueMoon(_) => IntercalationStrategy::BlueMoon,
            Self::Drift(_) => IntercalationStrategy::DriftThreshold,
            Self::Combined(_) => IntercalationStrategy::Combined,
        }
    }
}

impl IntercalationPolicy for Intercalator {
    fn decide(
        &mut self,
        cycle: &CycleContext,
    ) -> Result<Option<Intercalation>, IntercalationError> {
        match self {
            Self::BlueMoon(p) => p.decide(cycle),
            Self::Drift(p) => p.decide(cycle),
            Self::Combined(p) => p.decide(cycle),
        }
    }

    fn record(&mut self, ordinary_length_days: u32, muharram_days: Option<u8>) {
        match self {
            Self::BlueMoon(p) => p.record(ordinary_length_days, muharram_days),
            Self::Drift(p) => p.record(ordinary_length_days, muharram_days),
            Self::Combined(p) => p.record(ordinary_length_days, muharram_days),
        }
    }

    fn drift_state(&self) -> Option<DriftState> {
        match self {
            Self::BlueMoon(p) => p.drift_state(),
            Self::Drift(p) => p.drift_state(),
            Self::Combined(p) => p.drift_state(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn drift_policy() -> DriftPolicy {
        let cfg = DriftConfig::new().with_solar_year_length(365.24);
        DriftPolicy::new(cfg, DriftState::default()).unwrap()
    }

    fn quiet_cycle(anchor_year: i32) -> CycleContext {
        let full_moons = (1..=12).map(|m| ymd(anchor_year, m, 15)).collect();
        CycleContext::new(anchor_year, full_moons).with_ordinary_length_days(354)
    }

    #[test]
    fn blue_moon_none_without_pair() {
        let mut p = BlueMoonPolicy;
        assert!(p.decide(&quiet_cycle(2001)).unwrap().is_none());
        assert!(p.drift_state().is_none());
    }

    #[test]
    fn blue_moon_expected_but_missing() {
        let mut p = BlueMoonPolicy;
        let cycle = quiet_cycle(2001).with_expect_intercalation(true);
        assert!(matches!(
            p.decide(&cycle).unwrap_err(),
            IntercalationError::NoQualifyingMonth {
                anchor_year: 2001,
                full_moons: 12
            }
        ));
    }

    #[test]
    fn drift_triggers_on_third_year() {
        // 365.24 - 355 adds 10.24 a year: 10.24, 20.48, then 30.72.
        let mut p = drift_policy();
        let cycle = |y| quiet_cycle(y).with_ordinary_length_days(355);
        assert!(p.decide(&cycle(2001)).unwrap().is_none());
        p.record(355, None);
        assert!(p.decide(&cycle(2002)).unwrap().is_none());
        p.record(355, None);
        let third = p.decide(&cycle(2003)).unwrap().unwrap();
        assert_eq!(third.position, IntercalaryPosition::Start);
        assert_relative_eq!(third.offset_days, 1.52 / 10.24 * 365.24, epsilon = 1e-9);
        match third.trigger {
            Trigger::Drift { accumulated_days } => {
                assert_relative_eq!(accumulated_days, 30.72, epsilon = 1e-9);
            }
            other => panic!("expected drift trigger, got {other:?}"),
        }
        p.record(355, Some(30));
        assert_relative_eq!(p.state().accumulated_days(), 0.72, epsilon = 1e-9);
    }

    #[test]
    fn drift_with_354_day_years_triggers_on_second_year() {
        let mut p = drift_policy();
        assert!(p.decide(&quiet_cycle(2001)).unwrap().is_none());
        assert!(p.decide(&quiet_cycle(2002)).unwrap().is_some());
    }

    #[test]
    fn record_revises_to_final_ordinary_length() {
        // Decided on 355 days; the final layout dropped a day.
        let mut p = drift_policy();
        let cycle = quiet_cycle(2001).with_ordinary_length_days(355);
        p.decide(&cycle).unwrap();
        assert_relative_eq!(p.state().accumulated_days(), 10.24, epsilon = 1e-9);
        p.record(354, None);
        assert_relative_eq!(p.state().accumulated_days(), 11.24, epsilon = 1e-9);

        // A second record without a decision changes nothing.
        p.record(300, None);
        assert_relative_eq!(p.state().accumulated_days(), 11.24, epsilon = 1e-9);
    }

    #[test]
    fn combined_prefers_earlier_trigger() {
        // Drift already past the threshold crosses at offset 0.
        let drift = DriftPolicy::new(DriftConfig::new(), DriftState::new(30.0)).unwrap();
        let mut p = CombinedPolicy::new(drift);
        let mut cycle = quiet_cycle(2001);
        cycle.full_moons = vec![ymd(2001, 9, 1), ymd(2001, 9, 30)];
        let d = p.decide(&cycle).unwrap().unwrap();
        assert!(matches!(d.trigger, Trigger::Drift { .. }));
        assert_eq!(d.position, IntercalaryPosition::Start);
    }

    #[test]
    fn combined_tie_goes_to_blue_moon() {
        // 2 of 8 days crossed a quarter of the way into a 356-day year: 89.0,
        // the offset of a March 31 blue moon.
        let cfg = DriftConfig::new().with_solar_year_length(356.0);
        let drift = DriftPolicy::new(cfg, DriftState::new(20.0)).unwrap();
        let mut p = CombinedPolicy::new(drift);
        let cycle = CycleContext::new(2001, vec![ymd(2001, 3, 2), ymd(2001, 3, 31)])
            .with_ordinary_length_days(348);
        let d = p.decide(&cycle).unwrap().unwrap();
        assert_relative_eq!(d.offset_days, 89.0);
        assert!(matches!(d.trigger, Trigger::BlueMoon { .. }));
    }

    #[test]
    fn combined_always_advances_drift() {
        let mut p = CombinedPolicy::new(drift_policy());
        let mut cycle = quiet_cycle(2001);
        cycle.full_moons = vec![ymd(2001, 3, 2), ymd(2001, 3, 31)];
        let d = p.decide(&cycle).unwrap().unwrap();
        assert!(matches!(d.trigger, Trigger::BlueMoon { .. }));
        p.record(354, Some(29));
        assert_relative_eq!(
            p.drift_state().unwrap().accumulated_days(),
            11.24 - 29.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn intercalator_dispatch() {
        for strategy in [
            IntercalationStrategy::BlueMoon,
            IntercalationStrategy::DriftThreshold,
            IntercalationStrategy::Combined,
        ] {
            let i =
                Intercalator::new(strategy, DriftConfig::new(), DriftState::default()).unwrap();
            assert_eq!(i.strategy(), strategy);
            assert_eq!(
                i.drift_state().is_some(),
                strategy != IntercalationStrategy::BlueMoon
            );
        }
    }

    #[test]
    fn intercalator_rejects_bad_drift_config() {
        let bad = DriftConfig::new().with_threshold_days(-1.0);
        let state = DriftState::default();
        assert!(Intercalator::new(IntercalationStrategy::DriftThreshold, bad, state).is_err());
        assert!(Intercalator::new(IntercalationStrategy::BlueMoon, bad, state).is_ok());
    }
}
