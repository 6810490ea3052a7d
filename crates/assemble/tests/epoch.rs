mod common;

use badr_assemble::{AssemblyError, CalendarConfig, YearAssembler, build_calendar};
use badr_calendar::{Epoch, YearLabel, YearNumbering};
use badr_ephemeris::{MeanLunation, MoonPhaseSource};
use badr_intercalate::IntercalationStrategy;
use badr_months::resolve_boundaries;

use common::ymd;

#[test]
fn year_containing_epoch_is_one_h() {
    let calendar =
        build_calendar(&MeanLunation::default(), 615..=630, &CalendarConfig::new()).unwrap();

    let epoch_year = calendar.year_containing(ymd(622, 7, 19)).unwrap();
    assert_eq!(epoch_year.label(), YearLabel::new(1, Epoch::Hijra));
    assert_eq!(epoch_year.anchor_year(), 622);

    let before = calendar.year_containing(epoch_year.start().pred_opt().unwrap()).unwrap();
    assert_eq!(before.label(), YearLabel::new(1, Epoch::BeforeHijra));

    assert!(calendar.years().iter().all(|y| y.number() != 0));
    assert_eq!(calendar.years()[0].label().to_string(), "7 B.H.");
    assert_eq!(calendar.years()[15].label().to_string(), "9 H.");
}

#[test]
fn astronomical_numbering_has_year_zero() {
    let config = CalendarConfig::new().with_numbering(YearNumbering::Astronomical);
    let calendar = build_calendar(&MeanLunation::default(), 620..=623, &config).unwrap();
    let labels: Vec<String> = calendar.years().iter().map(|y| y.label().to_string()).collect();
    assert_eq!(labels, vec!["1 B.H.", "0 H.", "1 H.", "2 H."]);
}

#[test]
fn misaligned_epoch_is_reported() {
    // 1 H. would be anchored to 622 but a January 1 epoch falls in the
    // year anchored to 621, which runs into February 622.
    let config = CalendarConfig::new().with_epoch_start_date(ymd(622, 1, 1));
    let err = build_calendar(&MeanLunation::default(), 620..=623, &config).unwrap_err();
    match err {
        AssemblyError::InYear { anchor_year, source } => {
            assert_eq!(anchor_year, 621);
            assert!(matches!(*source, AssemblyError::EpochMisaligned { .. }));
        }
        other => panic!("expected InYear, got {other:?}"),
    }
}

#[test]
fn failed_year_leaves_drift_untouched() {
    let config = CalendarConfig::new()
        .with_epoch_start_date(ymd(622, 1, 1))
        .with_strategy(IntercalationStrategy::DriftThreshold);
    let events = MeanLunation::default()
        .moon_events(ymd(619, 12, 1), ymd(624, 1, 31))
        .unwrap();
    let boundaries = resolve_boundaries(&events, config.resolver()).unwrap();
    let mut assembler = YearAssembler::new(config, boundaries, 620).unwrap();

    assembler.next_year().unwrap();
    let before = assembler.drift_state();
    for _ in 0..2 {
        assert!(assembler.next_year().is_err());
        assert_eq!(assembler.drift_state(), before);
        assert_eq!(assembler.next_anchor(), 621);
    }
}
