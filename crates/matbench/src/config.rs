//! Application configuration from CLI flags and environment.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

/// MatBench — benchmark lab for square-matrix multiplication strategies.
#[derive(Parser, Debug)]
#[command(name = "matbench", version, about)]
pub struct AppConfig {
    /// Sweep all selected methods across escalating sizes.
    #[arg(long)]
    pub sweep: bool,

    /// Find the largest size a single run solves within the ceiling.
    #[arg(long)]
    pub search: bool,

    /// Run every .txt test case in this directory.
    #[arg(long, value_name = "DIR")]
    pub tests: Option<PathBuf>,

    /// Matrix side for a one-off random run.
    #[arg(short, long, default_value = "8", env = "MATBENCH_N")]
    pub n: usize,

    /// Method to benchmark: naive, strassen, strassen-cutoff,
    /// strassen-flat, strassen-cutoff-flat, or all.
    #[arg(short, long, default_value = "all")]
    pub method: String,

    /// First size measured by sweeps and searches.
    #[arg(long, default_value = "50")]
    pub start: usize,

    /// Size increment between points.
    #[arg(long, default_value = "50")]
    pub step: usize,

    /// Repetitions averaged per sweep point.
    #[arg(long, default_value = "3")]
    pub reps: u32,

    /// Wall-clock ceiling per point (e.g. "2m", "30s", "500ms").
    #[arg(long, default_value = "2m")]
    pub ceiling: String,

    /// Block size at which the cutoff variants switch to naive multiply.
    #[arg(long, default_value = "64")]
    pub cutoff: usize,

    /// Seed for the operand generator (OS entropy if omitted).
    #[arg(long, env = "MATBENCH_SEED")]
    pub seed: Option<u64>,

    /// Write the sweep table to this file (.csv writes CSV, else JSON).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Quiet mode (machine-friendly output only).
    #[arg(short, long)]
    pub quiet: bool,

    /// Print operand and product matrices for one-off runs.
    #[arg(short, long)]
    pub verbose: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// The ceiling flag parsed into a `Duration`, if well-formed.
    #[must_use]
    pub fn ceiling_duration(&self) -> Option<Duration> {
        parse_duration(&self.ceiling)
    }
}

/// Parse a duration string like "2m", "30s", "500ms", "1h", or bare seconds.
fn parse_duration(s: &str) -> Option<Duration> {
    let s = s.trim();
    if let Some(ms) = s.strip_suffix("ms") {
        return Some(Duration::from_millis(ms.trim().parse().ok()?));
    }
    if let Some(hours) = s.strip_suffix('h') {
        return Some(Duration::from_secs(hours.trim().parse::<u64>().ok()? * 3600));
    }
    if let Some(mins) = s.strip_suffix('m') {
        return Some(Duration::from_secs(mins.trim().parse::<u64>().ok()? * 60));
    }
    if let Some(secs) = s.strip_suffix('s') {
        return Some(Duration::from_secs(secs.trim().parse().ok()?));
    }
    Some(Duration::from_secs(s.parse().ok()?))
}
