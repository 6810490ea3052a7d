//! # badr-ephemeris
//!
//! Sources of new- and full-moon instants for the calendar engine. The
//! engine only sees the [`MoonPhaseSource`] trait; this crate provides an
//! in-memory table, a CSV phase-table reader and a mean-lunation
//! approximation behind it.
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::path::Path;
//! use badr_ephemeris::{CsvPhaseSource, MoonPhaseSource};
//!
//! let source = CsvPhaseSource::open(Path::new("moon-phases-UTC.csv"))?;
//! let events = source.moon_events(start, end)?;
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `source` | `MoonPhaseSource` trait and `EventTable` |
//! | `csv_read` | AstroPixels-style CSV phase tables |
//! | `mean` | Mean synodic month approximation |
//! | `validate` | Ordering checks on event sequences |
//! | `error` | Error types |

mod csv_read;
mod error;
mod mean;
mod source;
mod validate;

pub use csv_read::CsvPhaseSource;
pub use error::EphemerisError;
pub use mean::{MEAN_SYNODIC_MONTH, MeanLunation};
pub use source::{EventTable, MoonPhaseSource};
