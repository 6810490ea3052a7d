//! # badr-assemble
//!
//! Builds the full-moon lunisolar calendar: fetches moon-phase events,
//! resolves month boundaries, lets the intercalation policy decide on a
//! 13th month, lays out the months and labels each year across the Hijra
//! epoch.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["MoonPhaseSource"] -->|"moon_events()"| B["MoonEvent[]"]
//!     B -->|"resolve_boundaries()"| C["MonthBoundary[]"]
//!     C --> D["YearAssembler"]
//!     E["Intercalator"] -->|"decide()"| D
//!     F["MonthLengthMode"] -->|"layout()"| D
//!     D -->|"next_year()"| G["Year"]
//!     G --> H["Calendar"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use badr_assemble::{CalendarConfig, build_calendar};
//! use badr_ephemeris::MeanLunation;
//!
//! let calendar = build_calendar(&MeanLunation::default(), 2020..=2030, &CalendarConfig::new())?;
//! for year in calendar.years() {
//!     println!("{}: {} months", year.label(), year.months().len());
//! }
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `config` | `CalendarConfig` builder |
//! | `assembler` | `YearAssembler`, one year at a time |
//! | `build` | `build_calendar` and the `Calendar` result |
//! | `error` | Error types |

mod assembler;
mod build;
mod config;
mod error;

pub use assembler::YearAssembler;
pub use build::{Calendar, build_calendar};
pub use config::CalendarConfig;
pub use error::AssemblyError;
