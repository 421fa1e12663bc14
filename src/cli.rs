use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;

use crate::dates::parse_date;
use crate::rounding::RoundingMode;

pub const DEFAULT_OUTPUT: &str = "time-entries.csv";

#[derive(Debug, Parser)]
#[command(
    name = "ttsync",
    about = "Export Toggl Track time entries to a CSV timesheet",
    disable_version_flag = true
)]
pub struct Cli {
    /// First day to fetch (YYYY-MM-DD). Defaults to the Monday of this week.
    #[arg(short, long, value_parser = parse_date)]
    pub start: Option<NaiveDate>,

    /// Last day to fetch (YYYY-MM-DD). Defaults to 2100-01-01.
    #[arg(short, long, value_parser = parse_date)]
    pub end: Option<NaiveDate>,

    /// Where to write the CSV file.
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Pause after every API call, in milliseconds.
    #[arg(long, default_value_t = 100)]
    pub delay_ms: u64,

    /// Fetch each project and client only once per run.
    #[arg(long)]
    pub cache_lookups: bool,

    /// Rounding increment in minutes (0 disables rounding).
    #[arg(long, default_value_t = 30)]
    pub round_minutes: u32,

    #[arg(long, value_enum, default_value_t = RoundingMode::Up)]
    pub round_mode: RoundingMode,

    /// Print version
    #[arg(short = 'v', long)]
    pub version: bool,
}

/// Printed by `--version`, e.g. `v1.2.2`.
pub fn version_string() -> &'static str {
    concat!("v", env!("CARGO_PKG_VERSION"))
}
