use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use badr_intercalate::DriftConfig;

/// Top-level Badr configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct BadrConfig {
    /// Epoch, numbering and month-length settings.
    #[serde(default)]
    pub calendar: CalendarToml,

    /// Month-boundary resolution settings.
    #[serde(default)]
    pub months: MonthsToml,

    /// Intercalation strategy settings.
    #[serde(default)]
    pub intercalation: IntercalationToml,

    /// Where moon phases come from.
    #[serde(default)]
    pub source: SourceToml,
}

impl BadrConfig {
    /// Reads and parses a TOML configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalendarToml {
    #[serde(default = "default_epoch_start_date")]
    pub epoch_start_date: String,
    #[serde(default = "default_numbering")]
    pub numbering: String,
    #[serde(default = "default_month_lengths")]
    pub month_lengths: String,
    #[serde(default)]
    pub fixed: FixedToml,
}

impl Default for CalendarToml {
    fn default() -> Self {
        Self {
            epoch_start_date: default_epoch_start_date(),
            numbering: default_numbering(),
            month_lengths: default_month_lengths(),
            fixed: FixedToml::default(),
        }
    }
}

fn default_epoch_start_date() -> String {
    "0622-07-19".to_string()
}
fn default_numbering() -> String {
    "no-year-zero".to_string()
}
fn default_month_lengths() -> String {
    "variable".to_string()
}

/// Settings used only when `month_lengths = "fixed"`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FixedToml {
    /// Ordinary month lengths, Safar through Dhul Hijjah.
    #[serde(default)]
    pub lengths: Option<[u8; 12]>,
    #[serde(default = "default_intercalary_length")]
    pub intercalary_length: u8,
    #[serde(default = "default_kabs_rule")]
    pub kabs_rule: String,
    #[serde(default = "default_kabs_lead_days")]
    pub kabs_lead_days: u32,
    /// Largest tolerated distance from observed month starts.
    #[serde(default = "default_max_offset_days")]
    pub max_offset_days: u32,
    #[serde(default = "default_true")]
    pub check_offset: bool,
}

impl Default for FixedToml {
    fn default() -> Self {
        Self {
            lengths: None,
            intercalary_length: default_intercalary_length(),
            kabs_rule: default_kabs_rule(),
            kabs_lead_days: default_kabs_lead_days(),
            max_offset_days: default_max_offset_days(),
            check_offset: true,
        }
    }
}

fn default_intercalary_length() -> u8 {
    30
}
fn default_kabs_rule() -> String {
    "observed".to_string()
}
fn default_kabs_lead_days() -> u32 {
    1
}
fn default_max_offset_days() -> u32 {
    3
}
fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MonthsToml {
    /// Fixed offset used to date full moons; +3 is Mecca time.
    #[serde(default = "default_utc_offset_hours")]
    pub utc_offset_hours: i32,
    #[serde(default = "default_max_gap_days")]
    pub max_gap_days: u32,
}

impl Default for MonthsToml {
    fn default() -> Self {
        Self {
            utc_offset_hours: default_utc_offset_hours(),
            max_gap_days: default_max_gap_days(),
        }
    }
}

fn default_utc_offset_hours() -> i32 {
    3
}
fn default_max_gap_days() -> u32 {
    31
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IntercalationToml {
    #[serde(default = "default_strategy")]
    pub strategy: String,
    #[serde(default = "default_threshold_days")]
    pub threshold_days: f64,
    #[serde(default = "default_solar_year_length")]
    pub solar_year_length: f64,
    #[serde(default = "default_lunar_year_length_estimate")]
    pub lunar_year_length_estimate: f64,
    /// Drift carried into the first generated year.
    #[serde(default)]
    pub initial_drift_days: f64,
}

impl Default for IntercalationToml {
    fn default() -> Self {
        Self {
            strategy: default_strategy(),
            threshold_days: default_threshold_days(),
            solar_year_length: default_solar_year_length(),
            lunar_year_length_estimate: default_lunar_year_length_estimate(),
            initial_drift_days: 0.0,
        }
    }
}

fn default_strategy() -> String {
    "blue-moon".to_string()
}
fn default_threshold_days() -> f64 {
    DriftConfig::default().threshold_days()
}
fn default_solar_year_length() -> f64 {
    DriftConfig::default().solar_year_length()
}
fn default_lunar_year_length_estimate() -> f64 {
    DriftConfig::default().lunar_year_length_estimate()
}

/// Moon-phase source. Without a CSV path the mean lunation is used.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct SourceToml {
    /// AstroPixels-style phase table.
    #[serde(default)]
    pub csv: Option<PathBuf>,
    /// Reference full moon for the mean lunation, `YYYY-MM-DD HH:MM:SS` UTC.
    #[serde(default)]
    pub reference_full_moon: Option<String>,
    #[serde(default)]
    pub synodic_month: Option<f64>,
}
