mod common;

use badr_assemble::{AssemblyError, CalendarConfig, build_calendar};
use badr_calendar::{IntercalaryPosition, MonthName};
use badr_months::MonthError;

use common::{full_moon_table, ymd};

#[test]
fn march_blue_moon_puts_muharram_first() {
    // Full moons 2001-01-02, 02-01, 03-02, 03-31, ...
    let gaps = [30, 29, 29, 30, 29, 30, 29, 30, 29, 30, 29, 30, 29, 30, 29, 30];
    let source = full_moon_table(ymd(2001, 1, 2), &gaps);

    let calendar = build_calendar(&source, 2001..=2001, &CalendarConfig::new()).unwrap();
    let year = &calendar.years()[0];

    assert_eq!(year.intercalary_position(), Some(IntercalaryPosition::Start));
    assert_eq!(year.months().len(), 13);
    assert_eq!(year.months()[0].name(), MonthName::Muharram);
    assert_eq!(year.months()[0].ordinal(), 1);
    assert_eq!(year.months()[12].name(), MonthName::DhulHijjah);
    assert_eq!(year.start(), ymd(2001, 1, 3));
    assert_eq!(year.length_days(), 383);
    assert_eq!(year.end(), ymd(2002, 1, 21));
}

#[test]
fn september_blue_moon_puts_muharram_last() {
    // Full moons 2001-01-08, 02-06, ..., 09-01, 09-30, ...
    let gaps = [29, 30, 29, 30, 29, 30, 29, 30, 29, 30, 29, 30, 29, 30, 29, 30];
    let source = full_moon_table(ymd(2001, 1, 8), &gaps);

    let calendar = build_calendar(&source, 2001..=2001, &CalendarConfig::new()).unwrap();
    let year = &calendar.years()[0];

    assert_eq!(year.intercalary_position(), Some(IntercalaryPosition::End));
    assert_eq!(year.months()[0].name(), MonthName::SafarI);
    assert_eq!(year.months()[12].name(), MonthName::Muharram);
    assert_eq!(year.months()[12].ordinal(), 13);
    assert_eq!(year.start(), ymd(2001, 1, 9));
    assert_eq!(year.length_days(), 383);
}

#[test]
fn ordinary_year_without_blue_moon() {
    // Full moons 2001-01-20, 02-18, ..., 12-10: one per month.
    let gaps = [29, 30, 29, 30, 29, 30, 29, 30, 29, 30, 29, 30, 29, 30];
    let source = full_moon_table(ymd(2001, 1, 20), &gaps);

    let calendar = build_calendar(&source, 2001..=2001, &CalendarConfig::new()).unwrap();
    let year = &calendar.years()[0];
    assert!(!year.has_intercalary());
    assert_eq!(year.months().len(), 12);
    assert_eq!(year.length_days(), 354);
    assert!(calendar.drift_state().is_none());
}

#[test]
fn running_out_of_events_names_the_year() {
    let gaps = [30, 29, 29, 30, 29];
    let source = full_moon_table(ymd(2001, 1, 2), &gaps);

    let err = build_calendar(&source, 2001..=2001, &CalendarConfig::new()).unwrap_err();
    match err {
        AssemblyError::InYear {
            anchor_year,
            source,
        } => {
            assert_eq!(anchor_year, 2001);
            assert!(matches!(
                *source,
                AssemblyError::Month(MonthError::NoPhaseData { .. })
            ));
        }
        other => panic!("expected InYear, got {other:?}"),
    }
}

#[test]
fn empty_range_rejected() {
    let source = full_moon_table(ymd(2001, 1, 2), &[30, 29]);
    #[allow(clippy::reversed_empty_ranges)]
    let err = build_calendar(&source, 2002..=2001, &CalendarConfig::new()).unwrap_err();
    assert!(matches!(
        err,
        AssemblyError::InvalidRange {
            first: 2002,
            last: 2001
        }
    ));
}

#[test]
fn range_at_year_limit_rejected() {
    let source = full_moon_table(ymd(2001, 1, 2), &[30, 29]);
    let err = build_calendar(&source, i32::MIN..=i32::MIN, &CalendarConfig::new()).unwrap_err();
    assert!(matches!(err, AssemblyError::InvalidRange { first: i32::MIN, .. }));
}

#[test]
fn no_full_moon_in_first_year() {
    let source = full_moon_table(ymd(2001, 1, 2), &[30, 29]);
    let err = build_calendar(&source, 1990..=1990, &CalendarConfig::new()).unwrap_err();
    assert!(matches!(err, AssemblyError::Month(_) | AssemblyError::NoOpeningFullMoon { .. }));
}
