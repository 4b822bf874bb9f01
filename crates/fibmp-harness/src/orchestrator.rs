//! Side-by-side runs and result analysis.

use std::sync::Arc;
use std::time::Instant;

use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use tracing::{info, warn};

use fibmp_core::FibonacciStrategy;

use crate::error::HarnessError;
use crate::interfaces::CalculationResult;

/// Compute F(`index`) with every strategy in parallel.
///
/// Results come back in the order of `strategies`.
pub fn compare(strategies: &[Arc<dyn FibonacciStrategy>], index: u64) -> Vec<CalculationResult> {
    info!(index, count = strategies.len(), "comparing strategies");
    strategies
        .par_iter()
        .map(|strategy| {
            let start = Instant::now();
            let outcome = strategy.compute(index);
            CalculationResult {
                strategy: strategy.name().to_string(),
                index,
                outcome,
                duration: start.elapsed(),
            }
        })
        .collect()
}

/// Check that every successful result carries the same value.
///
/// Failed results are skipped; at least one must have succeeded.
pub fn analyze_comparison_results(results: &[CalculationResult]) -> Result<(), HarnessError> {
    let mut valid = results
        .iter()
        .filter_map(|r| r.outcome.as_ref().ok().map(|number| (r, number)));

    let (first, expected) = valid.next().ok_or(HarnessError::NoValidResults)?;
    let strategies: Vec<String> = valid
        .filter(|(_, number)| *number != expected)
        .map(|(r, _)| r.strategy.clone())
        .collect();

    if strategies.is_empty() {
        Ok(())
    } else {
        warn!(index = first.index, reference = %first.strategy, ?strategies, "results disagree");
        Err(HarnessError::Disagreement {
            index: first.index,
            strategies,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use fibmp_core::{DefaultFactory, FibError, FibNumber, StrategyFactory};

    fn result(name: &str, outcome: Result<FibNumber, FibError>) -> CalculationResult {
        CalculationResult {
            strategy: name.into(),
            index: 10,
            outcome,
            duration: Duration::from_millis(1),
        }
    }

    #[test]
    fn compare_all_engines() {
        let strategies = DefaultFactory::new().all();
        let results = compare(&strategies, 1_000);
        assert_eq!(results.len(), 4);
        let names: Vec<_> = results.iter().map(|r| r.strategy.as_str()).collect();
        assert_eq!(names, ["linear", "doubling", "matrix3", "matrix2"]);
        assert!(results.iter().all(|r| r.index == 1_000 && r.outcome.is_ok()));
        assert!(analyze_comparison_results(&results).is_ok());
    }

    #[test]
    fn compare_keeps_failures() {
        let factory = DefaultFactory::new();
        let strategies = vec![factory.get("naive").unwrap(), factory.get("doubling").unwrap()];
        let results = compare(&strategies, 100);
        assert!(matches!(
            results[0].outcome,
            Err(FibError::IndexTooLarge { index: 100, max: 93 })
        ));
        assert!(results[1].outcome.is_ok());
        assert!(analyze_comparison_results(&results).is_ok());
    }

    #[test]
    fn analyze_matching_results() {
        let results = vec![
            result("a", Ok(FibNumber::from_u64(55))),
            result("b", Ok(FibNumber::from_u64(55))),
        ];
        assert!(analyze_comparison_results(&results).is_ok());
    }

    #[test]
    fn analyze_names_every_dissenter() {
        let results = vec![
            result("a", Ok(FibNumber::from_u64(55))),
            result("b", Ok(FibNumber::from_u64(56))),
            result("c", Ok(FibNumber::from_u64(55))),
            result("d", Ok(FibNumber::from_u64(0))),
        ];
        match analyze_comparison_results(&results) {
            Err(HarnessError::Disagreement { index, strategies }) => {
                assert_eq!(index, 10);
                assert_eq!(strategies, ["b", "d"]);
            }
            other => panic!("expected disagreement, got {other:?}"),
        }
    }

    #[test]
    fn analyze_ignores_errors() {
        let results = vec![
            result("a", Err(FibError::UnknownStrategy("x".into()))),
            result("b", Ok(FibNumber::from_u64(55))),
        ];
        assert!(analyze_comparison_results(&results).is_ok());
    }

    #[test]
    fn analyze_no_valid_results() {
        let results = vec![result("a", Err(FibError::CapacityOverflow { index: 1 }))];
        assert!(matches!(
            analyze_comparison_results(&results),
            Err(HarnessError::NoValidResults)
        ));
        assert!(matches!(
            analyze_comparison_results(&[]),
            Err(HarnessError::NoValidResults)
        ));
    }
}
