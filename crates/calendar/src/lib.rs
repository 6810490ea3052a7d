//! # badr-calendar
//!
//! Value types for a lunisolar calendar whose months begin the day after a
//! full moon and whose years occasionally carry a 13th month, Muharram.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["MoonEvent"] -->|".local_date()"| B["NaiveDate"]
//!     C["IntercalaryPosition"] -->|"month_names()"| D["[MonthName; 12 or 13]"]
//!     D -->|"Month::new()"| E["Month"]
//!     E -->|"Year::new()"| F["Year"]
//!     G["index"] -->|"YearNumbering::label()"| H["YearLabel"]
//!     H --> F
//!     F -->|".locate()"| I["LunisolarDate"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use badr_calendar::{IntercalaryPosition, YearNumbering, month_names};
//!
//! // Month rotation with Muharram prepended
//! let names = month_names(Some(IntercalaryPosition::Start));
//! assert_eq!(names.len(), 13);
//!
//! // Year labels across the epoch
//! let label = YearNumbering::NoYearZero.label(-1);
//! assert_eq!(label.to_string(), "1 B.H.");
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `moon` | Moon-phase events and eclipse tags |
//! | `month` | Month names, intercalary layout, month record |
//! | `year` | Year record and date lookup |
//! | `epoch` | Year numbering across the Hijra epoch |
//! | `date` | Gregorian solar-year helpers |
//! | `sequence` | Chaining month lengths into start dates |
//! | `error` | Error types |

mod date;
mod epoch;
mod error;
mod month;
mod moon;
mod sequence;
mod year;

pub use date::{day_offset, days_between, days_in_year, year_month};
pub use epoch::{Epoch, YearLabel, YearNumbering, astronomical_year};
pub use error::CalendarError;
pub use month::{IntercalaryPosition, Month, MonthName, month_names};
pub use moon::{Eclipse, MoonEvent, MoonPhase};
pub use sequence::chain_starts;
pub use year::{LunisolarDate, Year};
