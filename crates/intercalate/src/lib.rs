//! # badr-intercalate
//!
//! Decides when a lunisolar year receives its 13th month, Muharram, and
//! whether it goes at the start or the end of the year.
//!
//! Two rules are available behind the [`IntercalationPolicy`] trait:
//!
//! - **Blue moon**: a Gregorian month holding two full moons calls for
//!   Muharram. A blue moon in the first half of the solar year puts it at
//!   the start, otherwise at the end.
//! - **Drift threshold**: the solar-minus-lunar shortfall accumulates in a
//!   [`DriftState`] until it reaches a threshold; the point in the year where
//!   it crossed decides the position.
//!
//! [`Intercalator`] dispatches over them, plus a combined mode where the
//! earlier trigger wins.
//!
//! # Quick start
//!
//! ```rust
//! use badr_intercalate::{
//!     CycleContext, DriftConfig, DriftState, IntercalationPolicy, IntercalationStrategy,
//!     Intercalator,
//! };
//! use chrono::NaiveDate;
//!
//! let mut policy = Intercalator::new(
//!     IntercalationStrategy::BlueMoon,
//!     DriftConfig::new(),
//!     DriftState::default(),
//! )
//! .unwrap();
//!
//! let d = |m, d| NaiveDate::from_ymd_opt(2001, m, d).unwrap();
//! let cycle = CycleContext::new(2001, vec![d(3, 2), d(3, 31), d(4, 29)]);
//! assert!(policy.decide(&cycle).unwrap().is_some());
//! ```

pub mod blue_moon;
pub mod drift;
pub mod error;
pub mod placement;
pub mod policy;

pub use blue_moon::{BlueMoon, find_blue_moon, require_blue_moon};
pub use drift::{DriftConfig, DriftState, DriftStep};
pub use error::IntercalationError;
pub use placement::placement;
pub use policy::{
    BlueMoonPolicy, CombinedPolicy, CycleContext, DriftPolicy, Intercalation, IntercalationPolicy,
    IntercalationStrategy, Intercalator, Trigger,
};
