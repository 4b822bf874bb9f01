//! Application entry point and dispatch.

use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use tracing::{debug, info};

use fibmp_cli::output::{format_decimal, format_seconds, write_hex, write_hex_file};
use fibmp_cli::presenter::{write_comparison, JsonLinesReporter, TableReporter};
use fibmp_core::{DefaultFactory, FibNumber, FibonacciStrategy, StrategyFactory};
use fibmp_harness::{
    analyze_comparison_results, compare, evaluate, select_strategies, Evaluator,
    MeasurementReporter,
};

use crate::config::{AppConfig, Command, EvalArgs, RunArgs};
use crate::errors::AppError;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    match &config.command {
        Command::Hex { index, output, run } => run_hex(*index, output.as_deref(), run),
        Command::Decimal { index, run } => run_decimal(*index, run),
        Command::Eval(args) => run_eval(args),
        Command::Compare { index, full } => run_compare(*index, *full),
        Command::Completion { shell } => {
            let mut cmd = <AppConfig as clap::CommandFactory>::command();
            fibmp_cli::completion::generate_completion(&mut cmd, *shell, &mut io::stdout());
            Ok(())
        }
    }
}

/// Compute F(`index`), on a worker thread if a timeout is set.
fn timed_compute(
    strategy: Arc<dyn FibonacciStrategy>,
    index: u64,
    timeout: Option<Duration>,
) -> Result<(FibNumber, Duration)> {
    debug!(strategy = strategy.name(), index, ?timeout, "computing");
    if let Some(timeout) = timeout {
        let measurement = evaluate(strategy, index, timeout)?;
        let duration = measurement.duration;
        let number = measurement
            .number
            .ok_or(AppError::Timeout { index, timeout })?;
        Ok((number, duration))
    } else {
        let start = Instant::now();
        let number = strategy.compute(index)?;
        Ok((number, start.elapsed()))
    }
}

/// Compute and print the runtime and size lines to stderr.
fn compute_reported(index: u64, run: &RunArgs) -> Result<FibNumber> {
    let strategy = DefaultFactory::new().get(&run.algo)?;
    let (number, elapsed) = timed_compute(strategy, index, run.timeout)?;
    eprintln!("# Runtime: {}", format_seconds(elapsed));
    eprintln!("# Size:    {} B", number.len());
    Ok(number)
}

fn run_hex(index: u64, output: Option<&Path>, run: &RunArgs) -> Result<()> {
    let number = compute_reported(index, run)?;
    if let Some(path) = output {
        write_hex_file(path, &number)
            .with_context(|| format!("failed to write {}", path.display()))?;
    } else {
        let mut stdout = io::stdout().lock();
        write_hex(&mut stdout, &number)?;
        writeln!(stdout)?;
    }
    Ok(())
}

fn run_decimal(index: u64, run: &RunArgs) -> Result<()> {
    let number = compute_reported(index, run)?;
    println!("{}", format_decimal(&number));
    Ok(())
}

fn run_eval(args: &EvalArgs) -> Result<()> {
    let factory = DefaultFactory::new();
    let strategies = select_strategies(&args.algo, &factory)?;
    let config = args.harness_config();
    info!(?config, count = strategies.len(), "starting evaluation");

    let reporter: Box<dyn MeasurementReporter> = if args.json {
        Box::new(JsonLinesReporter::new(io::stdout()))
    } else {
        Box::new(TableReporter::new(io::stdout()))
    };

    for strategy in strategies {
        Evaluator::new(strategy, config.clone()).run(reporter.as_ref())?;
    }
    Ok(())
}

fn run_compare(index: u64, full: bool) -> Result<()> {
    let strategies = DefaultFactory::new().all();
    let results = compare(&strategies, index);
    write_comparison(&mut io::stdout().lock(), &results, full)?;
    analyze_comparison_results(&results)?;
    Ok(())
}
