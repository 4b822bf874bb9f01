//! fibmp: exact Fibonacci numbers on a hand-rolled digit-vector engine.

use std::process::ExitCode;

use clap::Parser;
use fibmp_core::exit_codes;
use fibmp_lib::{app, config::AppConfig, errors};

fn main() -> ExitCode {
    let config = match AppConfig::try_parse() {
        Ok(config) => config,
        Err(err) => {
            // --help and --version land here too and are not failures.
            let _ = err.print();
            return if err.use_stderr() {
                errors::to_exit_code(exit_codes::ERROR_CONFIG)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let level = if config.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    match app::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            errors::to_exit_code(errors::exit_code(&err))
        }
    }
}
