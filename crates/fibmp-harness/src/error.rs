//! Harness error type.

use fibmp_core::FibError;

/// Errors raised while measuring or comparing strategies.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    /// A strategy returned a wrong value during verification.
    #[error("{strategy} computed F({index}) = {actual}, expected {expected}")]
    Mismatch {
        /// Strategy name.
        strategy: String,
        /// Index being verified.
        index: u64,
        /// Reference value.
        expected: u64,
        /// Value the strategy produced.
        actual: String,
    },

    /// The strategy itself failed.
    #[error(transparent)]
    Strategy(#[from] FibError),

    /// The worker thread could not be started.
    #[error("failed to spawn measurement worker: {0}")]
    Spawn(#[source] std::io::Error),

    /// The worker thread died without reporting.
    #[error("measurement worker for F({index}) panicked")]
    WorkerPanicked {
        /// Index being computed.
        index: u64,
    },

    /// Every strategy in a comparison failed.
    #[error("no valid results")]
    NoValidResults,

    /// Strategies produced different values for the same index.
    #[error("strategies disagree on F({index}): {}", strategies.join(", "))]
    Disagreement {
        /// Index being compared.
        index: u64,
        /// Strategies whose result differs from the first valid one.
        strategies: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let err = HarnessError::Mismatch {
            strategy: "linear".into(),
            index: 5,
            expected: 5,
            actual: "6".into(),
        };
        assert_eq!(err.to_string(), "linear computed F(5) = 6, expected 5");

        let err = HarnessError::Disagreement {
            index: 100,
            strategies: vec!["matrix2".into(), "matrix3".into()],
        };
        assert_eq!(
            err.to_string(),
            "strategies disagree on F(100): matrix2, matrix3"
        );
    }

    #[test]
    fn core_errors_pass_through() {
        let err: HarnessError = FibError::UnknownStrategy("fft".into()).into();
        assert_eq!(err.to_string(), "unknown strategy: fft");
    }
}
