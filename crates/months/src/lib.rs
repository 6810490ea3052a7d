//! # badr-months
//!
//! Turns full-moon instants into months. Each month begins the day after a
//! full moon (dated in a fixed local offset) and lasts until the day after
//! the next one, which makes every observed month 29 or 30 days long.
//!
//! # Pipeline
//!
//! ```text
//!  ┌──────────────┐     ┌──────────────────────┐     ┌──────────────────────┐
//!  │  MoonEvent[]  │────▶│  resolve_boundaries  │────▶│  MonthLengthMode     │
//!  │  (full moons) │     │  (MonthBoundary[])   │     │  ::layout (Month[])  │
//!  └──────────────┘     └──────────────────────┘     └──────────────────────┘
//! ```
//!
//! In fixed mode the layout replaces observed lengths with a
//! [`FixedPattern`], records each month's offset from the observed start and
//! adds a compensating day to Dhul Hijjah according to its [`KabsRule`].
//!
//! # Quick start
//!
//! ```rust
//! use badr_months::{FixedPattern, KabsRule, MonthLengthMode, ResolverConfig};
//!
//! let resolver = ResolverConfig::new().with_utc_offset_hours(3);
//! let mode = MonthLengthMode::Fixed(
//!     FixedPattern::new().with_kabs_rule(KabsRule::Observed { lead_days: 1 }),
//! );
//!
//! assert!(resolver.validate().is_ok());
//! assert!(matches!(mode, MonthLengthMode::Fixed(_)));
//! ```

pub mod boundary;
pub mod config;
pub mod error;
pub mod layout;

pub use boundary::{MonthBoundary, resolve_boundaries};
pub use config::{FixedPattern, KabsRule, MonthLengthMode, ResolverConfig};
pub use error::MonthError;
