//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Context, Result, bail};
use chrono::{NaiveDate, NaiveDateTime};
use tracing::warn;

use crate::config::*;

use badr_assemble::CalendarConfig;
use badr_calendar::YearNumbering;
use badr_ephemeris::{CsvPhaseSource, MeanLunation, MoonPhaseSource};
use badr_intercalate::{DriftConfig, DriftState, IntercalationStrategy};
use badr_months::{FixedPattern, KabsRule, MonthLengthMode, ResolverConfig};

/// Parses a `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .with_context(|| format!("invalid date {s:?}, expected YYYY-MM-DD"))
}

/// Parses a year-numbering name into the corresponding enum variant.
pub fn parse_numbering(s: &str) -> Result<YearNumbering> {
    match s.to_lowercase().as_str() {
        "no-year-zero" => Ok(YearNumbering::NoYearZero),
        "astronomical" => Ok(YearNumbering::Astronomical),
        other => bail!("unknown year numbering: {other:?}"),
    }
}

/// Parses an intercalation strategy name into the corresponding enum variant.
pub fn parse_strategy(s: &str) -> Result<IntercalationStrategy> {
    match s.to_lowercase().as_str() {
        "blue-moon" => Ok(IntercalationStrategy::BlueMoon),
        "drift" | "drift-threshold" => Ok(IntercalationStrategy::DriftThreshold),
        "combined" => Ok(IntercalationStrategy::Combined),
        other => bail!("unknown intercalation strategy: {other:?}"),
    }
}

/// Parses a compensating-day rule name; `lead_days` applies to `observed`.
pub fn parse_kabs_rule(s: &str, lead_days: u32) -> Result<KabsRule> {
    match s.to_lowercase().as_str() {
        "observed" => Ok(KabsRule::Observed { lead_days }),
        "thirty-year-cycle" => Ok(KabsRule::ThirtyYearCycle),
        other => bail!("unknown kabs rule: {other:?}"),
    }
}

/// Builds the month-length mode from the `[calendar]` section.
pub fn build_month_length_mode(cal: &CalendarToml) -> Result<MonthLengthMode> {
    match cal.month_lengths.to_lowercase().as_str() {
        "variable" => Ok(MonthLengthMode::Variable),
        "fixed" => {
            let fixed = &cal.fixed;
            let mut pattern = FixedPattern::new()
                .with_intercalary_length(fixed.intercalary_length)
                .with_kabs_rule(parse_kabs_rule(&fixed.kabs_rule, fixed.kabs_lead_days)?)
                .with_max_offset_days(fixed.check_offset.then_some(fixed.max_offset_days));
            if let Some(lengths) = fixed.lengths {
                pattern = pattern.with_lengths(lengths);
            }
            Ok(MonthLengthMode::Fixed(pattern))
        }
        other => bail!("unknown month_lengths: {other:?}, expected \"variable\" or \"fixed\""),
    }
}

/// Builds a [`ResolverConfig`] from the `[months]` section.
pub fn build_resolver_config(months: &MonthsToml) -> ResolverConfig {
    ResolverConfig::new()
        .with_utc_offset_hours(months.utc_offset_hours)
        .with_max_gap_days(months.max_gap_days)
}

/// Builds a [`DriftConfig`] from the `[intercalation]` section.
pub fn build_drift_config(ic: &IntercalationToml) -> DriftConfig {
    DriftConfig::new()
        .with_threshold_days(ic.threshold_days)
        .with_solar_year_length(ic.solar_year_length)
        .with_lunar_year_length_estimate(ic.lunar_year_length_estimate)
}

/// Builds and validates the full [`CalendarConfig`].
pub fn build_calendar_config(config: &BadrConfig) -> Result<CalendarConfig> {
    let cal = &config.calendar;
    let calendar_cfg = CalendarConfig::new()
        .with_epoch_start_date(
            parse_date(&cal.epoch_start_date).context("invalid [calendar].epoch_start_date")?,
        )
        .with_numbering(parse_numbering(&cal.numbering)?)
        .with_month_length_mode(build_month_length_mode(cal)?)
        .with_resolver(build_resolver_config(&config.months))
        .with_strategy(parse_strategy(&config.intercalation.strategy)?)
        .with_drift(build_drift_config(&config.intercalation))
        .with_initial_drift(DriftState::new(config.intercalation.initial_drift_days));
    calendar_cfg
        .validate()
        .context("invalid calendar configuration")?;
    Ok(calendar_cfg)
}

/// Opens the configured moon-phase source.
pub fn build_source(source: &SourceToml) -> Result<Box<dyn MoonPhaseSource>> {
    if let Some(path) = &source.csv {
        if source.reference_full_moon.is_some() || source.synodic_month.is_some() {
            warn!("[source].csv is set; mean-lunation settings are ignored");
        }
        let csv = CsvPhaseSource::open(path)
            .with_context(|| format!("failed to read phase table: {}", path.display()))?;
        return Ok(Box::new(csv));
    }

    warn!("no [source].csv configured; using mean lunation, dates may differ by a day");
    let mut mean = MeanLunation::default();
    if let Some(s) = &source.reference_full_moon {
        let reference = NaiveDateTime::parse_from_str(s.trim(), "%Y-%m-%d %H:%M:%S")
            .with_context(|| format!("invalid [source].reference_full_moon {s:?}"))?;
        mean = MeanLunation::new(reference);
    }
    if let Some(days) = source.synodic_month {
        mean = mean.with_synodic_month(days);
    }
    mean.validate()?;
    Ok(Box::new(mean))
}
