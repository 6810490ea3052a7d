//! Generate command: build a calendar over a Gregorian year range.

use std::fs::File;
use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use tracing::{info, info_span};

use badr_assemble::build_calendar;

use crate::cli::GenerateArgs;
use crate::config::BadrConfig;
use crate::convert;

/// Run the generation pipeline and write the calendar as JSON.
pub fn run(args: GenerateArgs) -> Result<()> {
    let _cmd = info_span!("generate").entered();

    // 1. Load config and build library types
    let config = BadrConfig::load(&args.config)?;
    let calendar_cfg = convert::build_calendar_config(&config)?;
    let source = convert::build_source(&config.source)?;

    // 2. Build the calendar
    let calendar = build_calendar(source.as_ref(), args.from..=args.to, &calendar_cfg)
        .with_context(|| format!("failed to build calendar for {}..={}", args.from, args.to))?;
    info!(
        years = calendar.years().len(),
        intercalary = calendar.years().iter().filter(|y| y.has_intercalary()).count(),
        "calendar ready"
    );

    // 3. Write JSON
    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create output file: {}", path.display()))?;
            let mut out = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut out, &calendar).context("failed to write JSON")?;
            writeln!(out)?;
            out.flush()?;
            info!(path = %path.display(), "calendar written");
        }
        None => {
            let mut out = io::stdout().lock();
            serde_json::to_writer_pretty(&mut out, &calendar).context("failed to write JSON")?;
            writeln!(out)?;
        }
    }

    Ok(())
}
