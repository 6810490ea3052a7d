mod common;

use badr_assemble::{Calendar, CalendarConfig, YearAssembler, build_calendar};
use badr_calendar::MonthName;
use badr_ephemeris::{MeanLunation, MoonPhaseSource};
use badr_intercalate::{DriftState, IntercalationStrategy};
use badr_months::{FixedPattern, KabsRule, MonthLengthMode, ResolverConfig, resolve_boundaries};

use common::ymd;

const STRATEGIES: [IntercalationStrategy; 3] = [
    IntercalationStrategy::BlueMoon,
    IntercalationStrategy::DriftThreshold,
    IntercalationStrategy::Combined,
];

fn build(config: &CalendarConfig, first: i32, last: i32) -> Calendar {
    build_calendar(&MeanLunation::default(), first..=last, config).unwrap()
}

fn assert_partitioned(calendar: &Calendar) {
    for pair in calendar.years().windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert_eq!(a.end(), b.start(), "gap after {}", a.label());
        assert_eq!(
            i64::from(a.length_days()),
            (b.start() - a.start()).num_days(),
            "{} does not span its days",
            a.label()
        );
        assert_eq!(a.anchor_year() + 1, b.anchor_year());
    }
    for year in calendar.years() {
        for pair in year.months().windows(2) {
            assert_eq!(pair[0].end(), pair[1].start());
        }
        let n = year.months().len();
        assert!(n == 12 || n == 13);
        assert_eq!(year.has_intercalary(), n == 13);
    }
}

#[test]
fn variable_months_are_29_or_30_for_every_strategy() {
    for strategy in STRATEGIES {
        let config = CalendarConfig::new().with_strategy(strategy);
        let calendar = build(&config, 1900, 2100);
        assert_eq!(calendar.years().len(), 201);
        assert_partitioned(&calendar);
        for year in calendar.years() {
            for m in year.months() {
                assert!(
                    m.length_days() == 29 || m.length_days() == 30,
                    "{strategy:?}: {} of {} is {} days",
                    m.name(),
                    year.label(),
                    m.length_days()
                );
            }
        }
    }
}

#[test]
fn year_starts_stay_near_the_new_year() {
    for strategy in STRATEGIES {
        let config = CalendarConfig::new().with_strategy(strategy);
        let calendar = build(&config, 1900, 2100);
        for year in calendar.years() {
            let start = year.start();
            let lo = ymd(year.anchor_year() - 1, 12, 1);
            let hi = ymd(year.anchor_year(), 3, 1);
            assert!(lo <= start && start < hi, "{strategy:?}: {} starts {start}", year.label());
        }
    }
}

#[test]
fn every_day_belongs_to_exactly_one_year() {
    let calendar = build(&CalendarConfig::new(), 2000, 2010);
    let first = calendar.years()[0].start();
    let last = calendar.years()[calendar.years().len() - 1].end();
    let mut day = first;
    while day < last {
        let hits = calendar.years().iter().filter(|y| y.contains(day)).count();
        assert_eq!(hits, 1, "{day}");
        let located = calendar.locate(day).unwrap();
        assert!(located.day >= 1 && located.day <= 30);
        day = day.succ_opt().unwrap();
    }
    assert!(calendar.locate(first.pred_opt().unwrap()).is_none());
    assert!(calendar.locate(last).is_none());
}

#[test]
fn regeneration_is_byte_identical() {
    for strategy in STRATEGIES {
        let config = CalendarConfig::new().with_strategy(strategy);
        let a = serde_json::to_string(&build(&config, 1990, 2030)).unwrap();
        let b = serde_json::to_string(&build(&config, 1990, 2030)).unwrap();
        assert_eq!(a, b);
    }
}

#[test]
fn fixed_years_match_pattern_total() {
    for rule in [KabsRule::Observed { lead_days: 1 }, KabsRule::ThirtyYearCycle] {
        let pattern = FixedPattern::new()
            .with_kabs_rule(rule)
            .with_max_offset_days(None);
        let config = CalendarConfig::new().with_month_length_mode(MonthLengthMode::Fixed(pattern));
        let calendar = build(&config, 1990, 2039);
        assert_eq!(calendar.years().len(), 50);
        assert_partitioned(&calendar);

        for year in calendar.years() {
            let ordinary: Vec<_> = year
                .months()
                .iter()
                .filter(|m| !m.name().is_intercalary())
                .collect();
            let total: u32 = ordinary.iter().map(|m| u32::from(m.length_days())).sum();
            let dhul_hijjah = ordinary[11];
            assert_eq!(dhul_hijjah.name(), MonthName::DhulHijjah);
            let extra = u32::from(dhul_hijjah.length_days()) - 29;
            assert_eq!(total, pattern.ordinary_total() + extra, "{}", year.label());
            assert!(extra <= 1);
            if let Some(m) = year.intercalary_month() {
                assert_eq!(m.length_days(), pattern.intercalary_length());
            }
            assert!(year.months().iter().all(|m| m.observed_offset_days().is_some()));
        }
    }
}

#[test]
fn observed_kabs_keeps_fixed_months_close() {
    let config =
        CalendarConfig::new().with_month_length_mode(MonthLengthMode::Fixed(FixedPattern::new()));
    let calendar = build(&config, 1900, 2100);
    for year in calendar.years() {
        for m in year.months() {
            let offset = m.observed_offset_days().unwrap();
            assert!(offset.abs() <= 2, "{} {} off by {offset}", m.name(), year.label());
        }
    }
}

#[test]
fn drift_checkpoint_resumes_identically() {
    let config = CalendarConfig::new().with_strategy(IntercalationStrategy::DriftThreshold);
    let source = MeanLunation::default();
    let events = source.moon_events(ymd(1999, 12, 1), ymd(2023, 1, 31)).unwrap();
    let boundaries = resolve_boundaries(&events, &ResolverConfig::new()).unwrap();

    let mut straight = YearAssembler::new(config.clone(), boundaries.clone(), 2000).unwrap();
    let mut first_half = YearAssembler::new(config.clone(), boundaries, 2000).unwrap();
    for _ in 2000..=2010 {
        straight.next_year().unwrap();
        first_half.next_year().unwrap();
    }

    // Serialize the checkpoint as a caller would and resume from it.
    let json = serde_json::to_string(&first_half.drift_state().unwrap()).unwrap();
    let checkpoint: DriftState = serde_json::from_str(&json).unwrap();
    let mut resumed = first_half.with_drift_state(checkpoint).unwrap();

    for _ in 2011..=2020 {
        assert_eq!(straight.next_year().unwrap(), resumed.next_year().unwrap());
    }
    assert_eq!(straight.drift_state(), resumed.drift_state());
}

#[test]
fn initial_drift_shifts_first_intercalation() {
    let base = CalendarConfig::new().with_strategy(IntercalationStrategy::DriftThreshold);
    let primed = base.clone().with_initial_drift(DriftState::new(21.0));

    let calm = build(&base, 2000, 2000);
    let eager = build(&primed, 2000, 2000);
    assert!(!calm.years()[0].has_intercalary());
    assert!(eager.years()[0].has_intercalary());
}

#[test]
fn fixed_drift_advances_by_final_ordinary_length() {
    let pattern = FixedPattern::new().with_max_offset_days(None);
    let config = CalendarConfig::new()
        .with_strategy(IntercalationStrategy::DriftThreshold)
        .with_month_length_mode(MonthLengthMode::Fixed(pattern));
    let solar = config.drift().solar_year_length();
    let events = MeanLunation::default()
        .moon_events(ymd(1899, 12, 1), ymd(2102, 1, 31))
        .unwrap();
    let boundaries = resolve_boundaries(&events, config.resolver()).unwrap();
    let mut assembler = YearAssembler::new(config, boundaries, 1900).unwrap();

    let mut intercalary_years = 0;
    for _ in 1900..=2100 {
        let before = assembler.drift_state().unwrap().accumulated_days();
        let year = assembler.next_year().unwrap();
        let after = assembler.drift_state().unwrap().accumulated_days();

        let ordinary: u32 = year
            .months()
            .iter()
            .filter(|m| !m.name().is_intercalary())
            .map(|m| u32::from(m.length_days()))
            .sum();
        let muharram = year.intercalary_month().map_or(0.0, |m| f64::from(m.length_days()));
        if year.has_intercalary() {
            intercalary_years += 1;
        }
        let delta = after - before + muharram;
        assert!(
            (delta - (solar - f64::from(ordinary))).abs() < 1e-9,
            "{}: ordinary {ordinary} but drift moved {delta}",
            year.label()
        );
    }
    assert!(intercalary_years > 0);
}
