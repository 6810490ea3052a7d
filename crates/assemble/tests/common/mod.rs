#![allow(dead_code)]

use chrono::{NaiveDate, TimeDelta};

use badr_calendar::MoonEvent;
use badr_ephemeris::EventTable;

pub fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Full moons at noon UTC, the first on `first`, then separated by `gaps`.
pub fn full_moon_table(first: NaiveDate, gaps: &[i64]) -> EventTable {
    let mut at = first.and_hms_opt(12, 0, 0).unwrap();
    let mut events = vec![MoonEvent::full_moon(at)];
    for &g in gaps {
        at += TimeDelta::days(g);
        events.push(MoonEvent::full_moon(at));
    }
    EventTable::new(events).unwrap()
}
