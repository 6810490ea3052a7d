//! Phase tables in the AstroPixels CSV layout.
//!
//! The expected header is `datetime,phase,friendlydate,eclipse`, with
//! `datetime` in UTC formatted as `%Y-%m-%d %H:%M:%S`. Column order does not
//! matter and the `eclipse` column is optional. Quarter phases are skipped.

use std::io;
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use tracing::{info, warn};

use badr_calendar::{Eclipse, MoonEvent, MoonPhase};

use crate::error::EphemerisError;
use crate::source::{EventTable, MoonPhaseSource};

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A [`MoonPhaseSource`] backed by a CSV phase table loaded into memory.
#[derive(Debug, Clone)]
pub struct CsvPhaseSource {
    table: EventTable,
}

impl CsvPhaseSource {
    /// Reads a phase table from disk.
    ///
    /// # Errors
    ///
    /// Returns [`EphemerisError::FileNotFound`] if `path` does not exist,
    /// [`EphemerisError::Csv`] on malformed CSV, [`EphemerisError::InvalidTime`]
    /// on an unparsable timestamp, and [`EphemerisError::Validation`] when
    /// required columns are missing or the rows are out of order.
    pub fn open(path: &Path) -> Result<Self, EphemerisError> {
        if !path.exists() {
            return Err(EphemerisError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let reader = builder().from_path(path)?;
        let table = read_table(reader)?;
        info!(path = %path.display(), events = table.len(), "loaded phase table");
        Ok(Self { table })
    }

    /// Reads a phase table from any reader.
    ///
    /// # Errors
    ///
    /// Same as [`open`](Self::open), minus the missing-file case.
    pub fn from_reader<R: io::Read>(rdr: R) -> Result<Self, EphemerisError> {
        let table = read_table(builder().from_reader(rdr))?;
        Ok(Self { table })
    }

    /// Returns the loaded events.
    pub fn table(&self) -> &EventTable {
        &self.table
    }
}

impl MoonPhaseSource for CsvPhaseSource {
    fn moon_events(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<MoonEvent>, EphemerisError> {
        self.table.moon_events(start, end)
    }
}

fn builder() -> csv::ReaderBuilder {
    let mut b = csv::ReaderBuilder::new();
    b.has_headers(true).flexible(true).trim(csv::Trim::All);
    b
}

fn missing_column(name: &str) -> EphemerisError {
    EphemerisError::Validation {
        count: 1,
        details: format!("missing column '{name}'"),
    }
}

fn read_table<R: io::Read>(mut reader: csv::Reader<R>) -> Result<EventTable, EphemerisError> {
    let headers = reader.headers()?.clone();
    let column = |name: &str| headers.iter().position(|h| h == name);

    let datetime_col = column("datetime").ok_or_else(|| missing_column("datetime"))?;
    let phase_col = column("phase").ok_or_else(|| missing_column("phase"))?;
    let eclipse_col = column("eclipse");

    let mut events = Vec::new();
    let mut skipped = 0usize;

    for result in reader.records() {
        let record = result?;
        let line = record.position().map_or(0, |p| p.line());

        let phase = match record.get(phase_col).unwrap_or_default() {
            "Full Moon" => MoonPhase::FullMoon,
            "New Moon" => MoonPhase::NewMoon,
            "First Quarter" | "Last Quarter" => continue,
            other => {
                warn!(line, phase = other, "skipping row with unrecognised phase");
                skipped += 1;
                continue;
            }
        };

        let raw = record.get(datetime_col).unwrap_or_default();
        let instant = NaiveDateTime::parse_from_str(raw, DATETIME_FORMAT).map_err(|e| {
            EphemerisError::InvalidTime {
                line,
                reason: format!("{raw:?}: {e}"),
            }
        })?;

        let mut event = MoonEvent::new(instant, phase);
        if let Some(col) = eclipse_col
            && let Some(tag) = record.get(col)
            && !tag.is_empty()
        {
            event = event.with_eclipse(Eclipse::from_tag(tag)?);
        }
        events.push(event);
    }

    if skipped > 0 {
        warn!(skipped, "rows with unrecognised phases were ignored");
    }

    EventTable::new(events)
}
