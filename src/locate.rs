//! Locate command: find the lunisolar date of a Gregorian date.

use anyhow::{Context, Result, anyhow};
use chrono::Datelike;
use tracing::info_span;

use badr_assemble::build_calendar;

use crate::cli::LocateArgs;
use crate::config::BadrConfig;
use crate::convert;

/// Print the lunisolar date containing `args.date`.
pub fn run(args: LocateArgs) -> Result<()> {
    let _cmd = info_span!("locate", date = %args.date).entered();

    let config = BadrConfig::load(&args.config)?;
    let calendar_cfg = convert::build_calendar_config(&config)?;
    let source = convert::build_source(&config.source)?;

    // Early-January dates can belong to the year anchored one Gregorian year
    // back, late-December dates to the one anchored a year ahead.
    let year = args.date.year();
    let calendar = build_calendar(source.as_ref(), year - 1..=year + 1, &calendar_cfg)
        .with_context(|| format!("failed to build calendar around {}", args.date))?;

    let date = calendar
        .locate(args.date)
        .ok_or_else(|| anyhow!("{} is not covered by the generated years", args.date))?;
    println!("{date}");
    Ok(())
}
