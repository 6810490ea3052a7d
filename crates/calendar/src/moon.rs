//! Moon-phase events and eclipse tags.

use chrono::{FixedOffset, NaiveDate, NaiveDateTime, TimeZone};
use serde::Serialize;

use crate::error::CalendarError;

/// Lunar phase carried by a [`MoonEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum MoonPhase {
    /// Conjunction of moon and sun.
    NewMoon,
    /// Opposition of moon and sun. Months begin the day after one.
    FullMoon,
}

/// Eclipse accompanying a new moon (solar) or full moon (lunar).
///
/// The single-letter tags follow the AstroPixels phase tables: upper case
/// for solar eclipses, lower case for lunar ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Eclipse {
    /// `T`
    SolarTotal,
    /// `A`
    SolarAnnular,
    /// `H`
    SolarHybrid,
    /// `P`
    SolarPartial,
    /// `t`
    LunarTotal,
    /// `p`
    LunarPartial,
    /// `n`
    LunarPenumbral,
}

impl Eclipse {
    /// Parses a single-letter tag or its long description (as written by
    /// phase-table exports, e.g. `Total Solar`). Surrounding whitespace is
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::UnknownEclipseTag`] for anything else.
    pub fn from_tag(tag: &str) -> Result<Self, CalendarError> {
        match tag.trim() {
            "T" | "Total Solar" => Ok(Self::SolarTotal),
            "A" | "Annular Solar" => Ok(Self::SolarAnnular),
            "H" | "Hybrid (Annular/Total) Solar" => Ok(Self::SolarHybrid),
            "P" | "Partial Solar" => Ok(Self::SolarPartial),
            "t" | "Total (Umbral) Lunar" => Ok(Self::LunarTotal),
            "p" | "Partial (Umbral) Lunar" => Ok(Self::LunarPartial),
            "n" | "Penumbral Lunar" => Ok(Self::LunarPenumbral),
            other => Err(CalendarError::UnknownEclipseTag {
                tag: other.to_string(),
            }),
        }
    }

    /// Returns the single-letter tag.
    pub fn tag(self) -> char {
        match self {
            Self::SolarTotal => 'T',
            Self::SolarAnnular => 'A',
            Self::SolarHybrid => 'H',
            Self::SolarPartial => 'P',
            Self::LunarTotal => 't',
            Self::LunarPartial => 'p',
            Self::LunarPenumbral => 'n',
        }
    }

    /// Returns the long description.
    pub fn description(self) -> &'static str {
        match self {
            Self::SolarTotal => "Total Solar",
            Self::SolarAnnular => "Annular Solar",
            Self::SolarHybrid => "Hybrid (Annular/Total) Solar",
            Self::SolarPartial => "Partial Solar",
            Self::LunarTotal => "Total (Umbral) Lunar",
            Self::LunarPartial => "Partial (Umbral) Lunar",
            Self::LunarPenumbral => "Penumbral Lunar",
        }
    }

    /// Returns `true` for solar eclipses.
    pub fn is_solar(self) -> bool {
        matches!(
            self,
            Self::SolarTotal | Self::SolarAnnular | Self::SolarHybrid | Self::SolarPartial
        )
    }
}

/// A new or full moon at a UTC instant, optionally tagged with an eclipse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct MoonEvent {
    instant: NaiveDateTime,
    phase: MoonPhase,
    eclipse: Option<Eclipse>,
}

impl MoonEvent {
    /// Creates an event at a UTC instant.
    pub fn new(instant: NaiveDateTime, phase: MoonPhase) -> Self {
        Self {
            instant,
            phase,
            eclipse: None,
        }
    }

    /// Creates a full moon at a UTC instant.
    pub fn full_moon(instant: NaiveDateTime) -> Self {
        Self::new(instant, MoonPhase::FullMoon)
    }

    /// Creates a new moon at a UTC instant.
    pub fn new_moon(instant: NaiveDateTime) -> Self {
        Self::new(instant, MoonPhase::NewMoon)
    }

    /// Attaches an eclipse tag.
    pub fn with_eclipse(mut self, eclipse: Eclipse) -> Self {
        self.eclipse = Some(eclipse);
        self
    }

    /// Returns the UTC instant.
    pub fn instant(&self) -> NaiveDateTime {
        self.instant
    }

    /// Returns the phase.
    pub fn phase(&self) -> MoonPhase {
        self.phase
    }

    /// Returns the eclipse tag, if any.
    pub fn eclipse(&self) -> Option<Eclipse> {
        self.eclipse
    }

    /// Returns `true` if this is a full moon.
    pub fn is_full_moon(&self) -> bool {
        self.phase == MoonPhase::FullMoon
    }

    /// Returns the calendar date of the event at the given UTC offset.
    pub fn local_date(&self, offset: FixedOffset) -> NaiveDate {
        offset.from_utc_datetime(&self.instant).date_naive()
    }
}
