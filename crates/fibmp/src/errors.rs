//! Application errors and exit codes.

use std::process::ExitCode;
use std::time::Duration;

use fibmp_core::{exit_codes, FibError};
use fibmp_harness::HarnessError;

/// Failures that originate in the binary itself.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A computation did not finish within `--timeout`.
    #[error("F({index}) did not finish within {timeout:?}")]
    Timeout {
        /// Requested index.
        index: u64,
        /// Budget that was exceeded.
        timeout: Duration,
    },
}

fn fib_error_code(err: &FibError) -> i32 {
    match err {
        FibError::UnknownStrategy(_) => exit_codes::ERROR_CONFIG,
        FibError::CapacityOverflow { .. }
        | FibError::RegionOverflow { .. }
        | FibError::IndexTooLarge { .. } => exit_codes::ERROR_GENERIC,
    }
}

/// Map an application error to the process exit code.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    if let Some(app) = err.downcast_ref::<AppError>() {
        return match app {
            AppError::Timeout { .. } => exit_codes::ERROR_TIMEOUT,
        };
    }
    if let Some(harness) = err.downcast_ref::<HarnessError>() {
        return match harness {
            HarnessError::Mismatch { .. } | HarnessError::Disagreement { .. } => {
                exit_codes::ERROR_MISMATCH
            }
            HarnessError::Strategy(fib) => fib_error_code(fib),
            HarnessError::Spawn(_)
            | HarnessError::WorkerPanicked { .. }
            | HarnessError::NoValidResults => exit_codes::ERROR_GENERIC,
        };
    }
    if let Some(fib) = err.downcast_ref::<FibError>() {
        return fib_error_code(fib);
    }
    exit_codes::ERROR_GENERIC
}

/// Convert an exit code constant to [`ExitCode`].
#[must_use]
pub fn to_exit_code(code: i32) -> ExitCode {
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}
