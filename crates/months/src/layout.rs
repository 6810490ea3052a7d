//! Laying out a year's months under a month-length policy.

use chrono::NaiveDate;

use badr_calendar::{Month, MonthName, chain_starts};

use crate::boundary::MonthBoundary;
use crate::config::{FixedPattern, MonthLengthMode};
use crate::error::MonthError;

impl MonthLengthMode {
    /// Builds the months named by `names` from the matching observed
    /// months.
    ///
    /// `schedule_start` is the first day of the year in the running
    /// schedule. Variable mode follows `observed` and ignores it; fixed mode
    /// chains its pattern from it. `astronomical_year` feeds the
    /// compensating-day rule.
    ///
    /// # Errors
    ///
    /// Returns [`MonthError::NoPhaseData`] when `observed` is shorter than
    /// `names`, [`MonthError::ScheduleDrift`] when a fixed month strays past
    /// the drift guard, and [`MonthError::Calendar`] on invalid months.
    pub fn layout(
        &self,
        names: &[MonthName],
        observed: &[MonthBoundary],
        schedule_start: NaiveDate,
        astronomical_year: i64,
    ) -> Result<Vec<Month>, MonthError> {
        if observed.len() < names.len() {
            let from = observed.last().map_or(schedule_start, MonthBoundary::end);
            return Err(MonthError::NoPhaseData { from });
        }
        let observed = &observed[..names.len()];
        match self {
            Self::Variable => layout_variable(names, observed),
            Self::Fixed(pattern) => {
                layout_fixed(pattern, names, observed, schedule_start, astronomical_year)
            }
        }
    }
}

fn layout_variable(
    names: &[MonthName],
    observed: &[MonthBoundary],
) -> Result<Vec<Month>, MonthError> {
    names
        .iter()
        .zip(observed)
        .enumerate()
        .map(|(i, (&name, b))| {
            let month = Month::new(name, (i + 1) as u8, b.start(), b.length_days())?
                .with_eclipses(b.eclipses().to_vec());
            Ok::<_, MonthError>(month)
        })
        .collect()
}

fn layout_fixed(
    pattern: &FixedPattern,
    names: &[MonthName],
    observed: &[MonthBoundary],
    schedule_start: NaiveDate,
    astronomical_year: i64,
) -> Result<Vec<Month>, MonthError> {
    let mut lengths: Vec<u8> = names
        .iter()
        .map(|name| match name.ordinary_index() {
            Some(i) => pattern.lengths()[usize::from(i) - 1],
            None => pattern.intercalary_length(),
        })
        .collect();
    let starts = chain_starts(schedule_start, &lengths);
    let offsets: Vec<i64> = starts
        .iter()
        .zip(observed)
        .map(|(fixed, b)| (*fixed - b.start()).num_days())
        .collect();

    let has_intercalary = names.iter().any(|n| n.is_intercalary());
    if let Some(last) = names.iter().position(|&n| n == MonthName::DhulHijjah)
        && pattern
            .kabs_rule()
            .adds_day(astronomical_year, offsets[last], has_intercalary)
    {
        lengths[last] += 1;
    }

    if let Some(max_days) = pattern.max_offset_days() {
        for (i, &offset) in offsets.iter().enumerate() {
            if offset.unsigned_abs() > u64::from(max_days) {
                return Err(MonthError::ScheduleDrift {
                    month: names[i],
                    start: starts[i],
                    offset_days: offset,
                    max_days,
                });
            }
        }
    }

    names
        .iter()
        .zip(starts)
        .zip(lengths)
        .zip(offsets)
        .zip(observed)
        .enumerate()
        .map(|(i, ((((&name, start), len), offset), b))| {
            let month = Month::new(name, (i + 1) as u8, start, len)?
                .with_observed_offset(offset)
                .with_eclipses(b.eclipses().to_vec());
            Ok::<_, MonthError>(month)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boundary::resolve_boundaries;
    use crate::config::{KabsRule, ResolverConfig};
    use badr_calendar::{IntercalaryPosition, MoonEvent, month_names};
    use chrono::{NaiveDateTime, TimeDelta};

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Full moons at noon UTC separated by the given day gaps.
    fn observed(first: NaiveDate, gaps: &[i64]) -> Vec<MonthBoundary> {
        let mut at: NaiveDateTime = first.and_hms_opt(12, 0, 0).unwrap();
        let mut events = vec![MoonEvent::full_moon(at)];
        for &g in gaps {
            at += TimeDelta::days(g);
            events.push(MoonEvent::full_moon(at));
        }
        resolve_boundaries(&events, &ResolverConfig::new()).unwrap()
    }

    #[test]
    fn variable_follows_observed() {
        let obs = observed(ymd(2024, 1, 25), &[30, 29, 30, 29, 30, 29, 30, 29, 30, 29, 30, 29]);
        let names = month_names(None);
        let months = MonthLengthMode::Variable
            .layout(&names, &obs, obs[0].start(), 1)
            .unwrap();
        assert_eq!(months.len(), 12);
        for (m, b) in months.iter().zip(&obs) {
            assert_eq!(m.start(), b.start());
            assert_eq!(m.length_days(), b.length_days());
            assert_eq!(m.observed_offset_days(), None);
        }
    }

    #[test]
    fn too_few_observed_months() {
        let obs = observed(ymd(2024, 1, 25), &[30, 29, 30]);
        let names = month_names(Some(IntercalaryPosition::End));
        let err = MonthLengthMode::Variable
            .layout(&names, &obs, obs[0].start(), 1)
            .unwrap_err();
        assert_eq!(err, MonthError::NoPhaseData { from: obs[2].end() });
    }

    #[test]
    fn fixed_pattern_and_offsets() {
        let obs = observed(ymd(2024, 1, 25), &[29, 30, 29, 30, 29, 30, 29, 30, 29, 30, 29, 30]);
        let names = month_names(None);
        let mode = MonthLengthMode::Fixed(FixedPattern::new());
        let months = mode.layout(&names, &obs, obs[0].start(), 1).unwrap();

        let lengths: Vec<u8> = months.iter().map(|m| m.length_days()).collect();
        assert_eq!(&lengths[..11], &FixedPattern::new().lengths()[..11]);
        assert_eq!(months[0].observed_offset_days(), Some(0));
        assert_eq!(months[1].observed_offset_days(), Some(1));
        assert_eq!(months[2].observed_offset_days(), Some(0));
        for pair in months.windows(2) {
            assert_eq!(pair[0].end(), pair[1].start());
        }
    }

    #[test]
    fn observed_rule_adds_day_when_behind() {
        // Observed months run 30,30,... at the start so the fixed schedule
        // falls one day behind by Dhul Hijjah.
        let obs = observed(ymd(2024, 1, 25), &[30, 30, 30, 29, 30, 29, 30, 29, 30, 29, 30, 29]);
        let names = month_names(None);
        let mode = MonthLengthMode::Fixed(FixedPattern::new());
        let months = mode.layout(&names, &obs, obs[0].start(), 1).unwrap();
        assert_eq!(months[11].observed_offset_days(), Some(-1));
        assert_eq!(months[11].length_days(), 30);
        let total: u32 = months.iter().map(|m| u32::from(m.length_days())).sum();
        assert_eq!(total, 355);
    }

    #[test]
    fn observed_rule_skips_intercalary_years() {
        let obs = observed(
            ymd(2024, 1, 25),
            &[30, 30, 30, 30, 29, 30, 29, 30, 29, 30, 29, 30, 29],
        );
        let names = month_names(Some(IntercalaryPosition::Start));
        let mode = MonthLengthMode::Fixed(FixedPattern::new());
        let months = mode.layout(&names, &obs, obs[0].start(), 1).unwrap();
        assert_eq!(months[12].name(), MonthName::DhulHijjah);
        assert!(months[12].observed_offset_days().unwrap() <= -1);
        assert_eq!(months[12].length_days(), 29);
        assert_eq!(months[0].length_days(), 30);
    }

    #[test]
    fn cycle_rule_uses_year_number() {
        let obs = observed(ymd(2024, 1, 25), &[30, 29, 30, 29, 30, 29, 30, 29, 30, 29, 30, 29]);
        let names = month_names(None);
        let mode =
            MonthLengthMode::Fixed(FixedPattern::new().with_kabs_rule(KabsRule::ThirtyYearCycle));
        let leap = mode.layout(&names, &obs, obs[0].start(), 2).unwrap();
        let common = mode.layout(&names, &obs, obs[0].start(), 3).unwrap();
        assert_eq!(leap[11].length_days(), 30);
        assert_eq!(common[11].length_days(), 29);
    }

    #[test]
    fn drift_guard_trips() {
        let obs = observed(ymd(2024, 1, 25), &[30, 29, 30, 29, 30, 29, 30, 29, 30, 29, 30, 29]);
        let names = month_names(None);
        let mode = MonthLengthMode::Fixed(FixedPattern::new().with_max_offset_days(Some(3)));
        let late_start = obs[0].start() + TimeDelta::days(4);
        let err = mode.layout(&names, &obs, late_start, 1).unwrap_err();
        assert!(matches!(
            err,
            MonthError::ScheduleDrift {
                month: MonthName::SafarI,
                offset_days: 4,
                max_days: 3,
                ..
            }
        ));

        let unguarded = MonthLengthMode::Fixed(FixedPattern::new().with_max_offset_days(None));
        assert!(unguarded.layout(&names, &obs, late_start, 1).is_ok());
    }
}
