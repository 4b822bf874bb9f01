//! Command-line configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};

use fibmp_harness::HarnessConfig;

/// fibmp: exact Fibonacci numbers on a hand-rolled digit-vector engine.
#[derive(Parser, Debug)]
#[command(name = "fibmp", version, about)]
pub struct AppConfig {
    /// Log at debug level (RUST_LOG still applies).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// What to run.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print F(index) in hex, most significant byte first.
    Hex {
        /// Fibonacci index.
        index: u64,
        /// Write the digits to this file instead of stdout.
        output: Option<PathBuf>,
        #[command(flatten)]
        run: RunArgs,
    },

    /// Print F(index) in decimal.
    Decimal {
        /// Fibonacci index.
        index: u64,
        #[command(flatten)]
        run: RunArgs,
    },

    /// Search for the largest index a strategy computes within the cutoffs.
    Eval(EvalArgs),

    /// Compute F(index) with every strategy in parallel and cross-check.
    Compare {
        /// Fibonacci index.
        index: u64,
        /// Print the full decimal value.
        #[arg(long)]
        full: bool,
    },

    /// Generate a shell completion script.
    Completion {
        /// Target shell.
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Options shared by the single-value commands.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Strategy: linear, doubling, matrix3, matrix2 or naive.
    #[arg(long, default_value = "doubling", env = "FIBMP_ALGO")]
    pub algo: String,

    /// Give up after this long (e.g. "500ms", "5s", "1m").
    #[arg(long, value_parser = parse_duration)]
    pub timeout: Option<Duration>,
}

/// Options of the `eval` command.
#[derive(Args, Debug)]
pub struct EvalArgs {
    /// Strategy to evaluate, or "all".
    #[arg(long, default_value = "doubling", env = "FIBMP_ALGO")]
    pub algo: String,

    /// Skip the sampling phase.
    #[arg(long)]
    pub brief: bool,

    /// Emit JSON lines instead of a table.
    #[arg(long)]
    pub json: bool,

    /// A call this slow ends the current phase [default: 1500ms].
    #[arg(long, value_parser = parse_duration)]
    pub soft_cutoff: Option<Duration>,

    /// Calls faster than this count toward the best index [default: 1s].
    #[arg(long, value_parser = parse_duration)]
    pub hard_cutoff: Option<Duration>,

    /// Abandon a call after this long [default: 5s].
    #[arg(long, value_parser = parse_duration)]
    pub thread_timeout: Option<Duration>,

    /// Take about 2^N samples in the sampling phase [default: 10].
    #[arg(long)]
    pub sample_log: Option<u32>,
}

impl EvalArgs {
    /// Defaults overridden by whatever was given on the command line.
    #[must_use]
    pub fn harness_config(&self) -> HarnessConfig {
        let defaults = HarnessConfig::default();
        HarnessConfig {
            soft_cutoff: self.soft_cutoff.unwrap_or(defaults.soft_cutoff),
            hard_cutoff: self.hard_cutoff.unwrap_or(defaults.hard_cutoff),
            thread_timeout: self.thread_timeout.unwrap_or(defaults.thread_timeout),
            sample_log: self.sample_log.unwrap_or(defaults.sample_log),
            brief: self.brief,
            ..defaults
        }
    }
}

/// Parse a duration string like "500ms", "1.5s", "5m", "1h" or bare seconds.
pub fn parse_duration(s: &str) -> Result<Duration, String> {
    let s = s.trim();
    let invalid = || format!("invalid duration: {s:?}");

    if let Some(ms) = s.strip_suffix("ms") {
        ms.parse().map(Duration::from_millis).map_err(|_| invalid())
    } else if let Some(mins) = s.strip_suffix('m') {
        let n: u64 = mins.parse().map_err(|_| invalid())?;
        n.checked_mul(60).map(Duration::from_secs).ok_or_else(invalid)
    } else if let Some(hours) = s.strip_suffix('h') {
        let n: u64 = hours.parse().map_err(|_| invalid())?;
        n.checked_mul(3600).map(Duration::from_secs).ok_or_else(invalid)
    } else {
        let secs: f64 = s.strip_suffix('s').unwrap_or(s).parse().map_err(|_| invalid())?;
        Duration::try_from_secs_f64(secs).map_err(|_| invalid())
    }
}
