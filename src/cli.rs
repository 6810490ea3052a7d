use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Badr full-moon lunisolar calendar generator.
#[derive(Parser)]
#[command(
    name = "badr",
    version,
    about = "Full-moon lunisolar calendar generator"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Build the calendar for a range of Gregorian years and write it as JSON.
    Generate(GenerateArgs),
    /// Print the lunisolar date of a Gregorian date.
    Locate(LocateArgs),
}

/// Arguments for the `generate` subcommand.
#[derive(clap::Args)]
pub struct GenerateArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "badr.toml")]
    pub config: PathBuf,

    /// First Gregorian anchor year.
    #[arg(long)]
    pub from: i32,

    /// Last Gregorian anchor year (inclusive).
    #[arg(long)]
    pub to: i32,

    /// Output JSON path; stdout when omitted.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `locate` subcommand.
#[derive(clap::Args)]
pub struct LocateArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "badr.toml")]
    pub config: PathBuf,

    /// Gregorian date, as YYYY-MM-DD.
    #[arg(short, long)]
    pub date: NaiveDate,
}
