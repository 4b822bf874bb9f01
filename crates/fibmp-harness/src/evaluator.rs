//! Timed evaluation and the index horizon search.
//!
//! [`Evaluator::run`] walks four phases, each ending early once a call
//! misses its cutoff:
//!
//! 1. verify every index up to the first checkpoint against a `u64`
//!    recurrence;
//! 2. walk the indices up to the second checkpoint;
//! 3. grow the index geometrically until a call misses the hard cutoff;
//! 4. sample about `2^sample_log` evenly spaced indices from the second
//!    checkpoint upward to refine the best index (skipped when `brief`).
//!
//! The best index is the largest one measured strictly below the hard
//! cutoff.

use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crossbeam_channel::RecvTimeoutError;
use serde::Serialize;
use tracing::{debug, info, warn};

use fibmp_core::{FibNumber, FibonacciStrategy, MAX_FIB_U64};

use crate::config::HarnessConfig;
use crate::error::HarnessError;
use crate::interfaces::{Measurement, MeasurementReporter};

/// Run `strategy.compute(index)` on a worker thread and time it.
///
/// The duration covers the call only. If no result arrives within
/// `timeout` the worker is abandoned and the measurement is marked
/// incomplete; its eventual result is dropped.
pub fn evaluate(
    strategy: Arc<dyn FibonacciStrategy>,
    index: u64,
    timeout: Duration,
) -> Result<Measurement, HarnessError> {
    let (tx, rx) = crossbeam_channel::bounded(1);
    let name = strategy.name();

    thread::Builder::new()
        .name(format!("fibmp-{name}"))
        .spawn(move || {
            let start = Instant::now();
            let outcome = strategy.compute(index);
            let duration = start.elapsed();
            // The receiver is gone if the call outlived its budget.
            let _ = tx.send((outcome, duration));
        })
        .map_err(HarnessError::Spawn)?;

    match rx.recv_timeout(timeout) {
        Ok((outcome, duration)) => {
            let number = outcome?;
            Ok(Measurement {
                index,
                duration,
                length: number.len(),
                completed: true,
                number: Some(number),
            })
        }
        Err(RecvTimeoutError::Timeout) => {
            warn!(strategy = name, index, ?timeout, "abandoning measurement");
            Ok(Measurement::timed_out(index))
        }
        Err(RecvTimeoutError::Disconnected) => Err(HarnessError::WorkerPanicked { index }),
    }
}

fn describe(number: &FibNumber) -> String {
    number
        .to_u64()
        .map_or_else(|| format!("<{} bytes>", number.len()), |value| value.to_string())
}

/// Result of an [`Evaluator::run`].
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationSummary {
    /// Strategy name.
    pub strategy: String,
    /// Largest index computed strictly within the hard cutoff.
    pub best_index: u64,
    /// Every reported measurement, in order.
    pub samples: Vec<Measurement>,
}

/// Progress shared by the phases of one run.
struct Search<'a> {
    reporter: &'a dyn MeasurementReporter,
    hard_cutoff: Duration,
    best_index: u64,
    next_index: u64,
    samples: Vec<Measurement>,
}

impl Search<'_> {
    /// Report a measurement and keep it without its value.
    fn record(&mut self, mut measurement: Measurement, may_improve: bool) {
        if may_improve && measurement.within(self.hard_cutoff) {
            self.best_index = measurement.index;
        }
        measurement.number = None;
        self.reporter.record(&measurement);
        self.samples.push(measurement);
    }
}

/// Horizon search for one strategy.
pub struct Evaluator {
    strategy: Arc<dyn FibonacciStrategy>,
    config: HarnessConfig,
}

impl Evaluator {
    #[must_use]
    pub fn new(strategy: Arc<dyn FibonacciStrategy>, config: HarnessConfig) -> Self {
        Self { strategy, config }
    }

    #[must_use]
    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    fn measure(&self, index: u64) -> Result<Measurement, HarnessError> {
        evaluate(Arc::clone(&self.strategy), index, self.config.thread_timeout)
    }

    /// Run every phase and report the best index found.
    pub fn run(&self, reporter: &dyn MeasurementReporter) -> Result<EvaluationSummary, HarnessError> {
        let name = self.strategy.name();
        reporter.begin(name);

        let mut search = Search {
            reporter,
            hard_cutoff: self.config.hard_cutoff,
            best_index: 0,
            next_index: 0,
            samples: Vec::new(),
        };

        if self.verify(&mut search)? && self.walk(&mut search)? {
            let upper = self.grow(&mut search)?;
            if !self.config.brief {
                self.sample(&mut search, upper)?;
            }
        }

        let summary = EvaluationSummary {
            strategy: name.to_string(),
            best_index: search.best_index,
            samples: search.samples,
        };
        info!(strategy = name, best = summary.best_index, "evaluation finished");
        reporter.finish(&summary);
        Ok(summary)
    }

    /// Phase 1. Returns whether the run should continue.
    fn verify(&self, search: &mut Search<'_>) -> Result<bool, HarnessError> {
        let last = self.config.first_checkpoint.min(MAX_FIB_U64);
        info!(strategy = self.strategy.name(), last, "verifying against u64 recurrence");

        let (mut expected, mut next) = (0u64, 1u64);
        for index in 0..=last {
            let measurement = self.measure(index)?;
            if !measurement.within(self.config.soft_cutoff) {
                return Ok(false);
            }

            let actual = measurement.number.as_ref().and_then(FibNumber::to_u64);
            if actual != Some(expected) {
                return Err(HarnessError::Mismatch {
                    strategy: self.strategy.name().to_string(),
                    index,
                    expected,
                    actual: measurement.number.as_ref().map_or_else(String::new, describe),
                });
            }

            search.record(measurement, true);
            (expected, next) = (next, expected.wrapping_add(next));
        }

        search.next_index = last + 1;
        Ok(true)
    }

    /// Phase 2. Returns whether the run should continue.
    fn walk(&self, search: &mut Search<'_>) -> Result<bool, HarnessError> {
        let last = self.config.second_checkpoint;
        info!(strategy = self.strategy.name(), from = search.next_index, last, "walking");

        for index in search.next_index..=last {
            let measurement = self.measure(index)?;
            if !measurement.within(self.config.soft_cutoff) {
                return Ok(false);
            }
            search.record(measurement, true);
        }

        search.next_index = search.next_index.max(last.saturating_add(1));
        Ok(true)
    }

    /// Phase 3. Returns the first index that missed the hard cutoff.
    fn grow(&self, search: &mut Search<'_>) -> Result<u64, HarnessError> {
        info!(strategy = self.strategy.name(), from = search.next_index, "growing");

        let mut index = search.next_index;
        loop {
            let measurement = self.measure(index)?;
            if !measurement.within(self.config.hard_cutoff) {
                debug!(index, "upper bound found");
                return Ok(index);
            }
            search.best_index = index;
            if index == u64::MAX {
                return Ok(index);
            }
            let step = (index >> 1) - (index >> 3);
            index = index.saturating_add(step.max(1));
        }
    }

    /// Phase 4: sample toward `upper`, stopping past twice `upper`.
    fn sample(&self, search: &mut Search<'_>, upper: u64) -> Result<(), HarnessError> {
        let start = self.config.second_checkpoint;
        let delta = (upper.saturating_sub(start) >> self.config.sample_log).max(1);
        let limit = upper.saturating_mul(2);
        info!(strategy = self.strategy.name(), start, delta, limit, "sampling");

        let mut index = start;
        while let Some(next) = index.checked_add(delta).filter(|&i| i <= limit) {
            index = next;
            let measurement = self.measure(index)?;
            let beyond_best = index > search.best_index;
            if beyond_best && !measurement.within(self.config.soft_cutoff) {
                return Ok(());
            }
            if measurement.completed {
                search.record(measurement, beyond_best);
            }
        }

        warn!(strategy = self.strategy.name(), limit, "sampling reached its limit");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::NullReporter;
    use fibmp_core::{Computation, FastDoubling, FibError, NaiveRecursive};
    use std::sync::Mutex;

    /// Fast up to `limit`, then stalls for `stall` before answering.
    struct Capped {
        limit: u64,
        stall: Duration,
    }

    impl FibonacciStrategy for Capped {
        fn compute_detailed(&self, index: u64) -> Result<Computation, FibError> {
            if index > self.limit {
                thread::sleep(self.stall);
            }
            FastDoubling::new().compute_detailed(index)
        }

        fn name(&self) -> &'static str {
            "capped"
        }
    }

    /// Returns the index itself.
    struct Identity;

    impl FibonacciStrategy for Identity {
        fn compute_detailed(&self, index: u64) -> Result<Computation, FibError> {
            Ok(Computation {
                number: FibNumber::from_u64(index),
                capacity: 1,
                peak_len: 1,
            })
        }

        fn name(&self) -> &'static str {
            "identity"
        }
    }

    #[derive(Default)]
    struct Recording {
        indices: Mutex<Vec<u64>>,
        finished: Mutex<Option<u64>>,
    }

    impl MeasurementReporter for Recording {
        fn begin(&self, _strategy: &str) {}

        fn record(&self, measurement: &Measurement) {
            self.indices.lock().unwrap().push(measurement.index);
        }

        fn finish(&self, summary: &EvaluationSummary) {
            *self.finished.lock().unwrap() = Some(summary.best_index);
        }
    }

    fn test_config() -> HarnessConfig {
        HarnessConfig {
            soft_cutoff: Duration::from_millis(200),
            hard_cutoff: Duration::from_millis(100),
            thread_timeout: Duration::from_secs(2),
            first_checkpoint: 93,
            second_checkpoint: 150,
            sample_log: 3,
            brief: false,
        }
    }

    fn capped(limit: u64) -> Arc<dyn FibonacciStrategy> {
        Arc::new(Capped {
            limit,
            stall: Duration::from_millis(300),
        })
    }

    #[test]
    fn evaluate_returns_value_and_length() {
        let m = evaluate(Arc::new(FastDoubling::new()), 94, Duration::from_secs(5)).unwrap();
        assert!(m.completed);
        assert_eq!(m.length, 9);
        assert_eq!(m.number.unwrap().len(), 9);
    }

    #[test]
    fn evaluate_abandons_slow_call() {
        let slow = Arc::new(Capped {
            limit: 0,
            stall: Duration::from_secs(2),
        });
        let m = evaluate(slow, 5, Duration::from_millis(50)).unwrap();
        assert!(!m.completed);
        assert!(m.number.is_none());
    }

    #[test]
    fn evaluate_propagates_strategy_errors() {
        let err = evaluate(Arc::new(NaiveRecursive::new()), 94, Duration::from_secs(5)).unwrap_err();
        assert!(matches!(
            err,
            HarnessError::Strategy(FibError::IndexTooLarge { index: 94, .. })
        ));
    }

    #[test]
    fn full_run_finds_horizon() {
        // Growth from 151: 208, 286, 394, 542, 746, then 1026 stalls.
        // Sampling with delta 109 from 150 improves on 746 at 804 and 913
        // and stops at 1022.
        let reporter = Recording::default();
        let summary = Evaluator::new(capped(1_000), test_config())
            .run(&reporter)
            .unwrap();

        assert_eq!(summary.strategy, "capped");
        assert_eq!(summary.best_index, 913);
        assert_eq!(summary.samples.len(), 151 + 7);
        assert!(summary.samples.iter().all(|m| m.number.is_none()));
        assert_eq!(*reporter.finished.lock().unwrap(), Some(913));

        let indices = reporter.indices.lock().unwrap();
        assert_eq!(&indices[151..], &[259, 368, 477, 586, 695, 804, 913]);
    }

    #[test]
    fn brief_run_skips_sampling() {
        let config = HarnessConfig {
            brief: true,
            ..test_config()
        };
        let summary = Evaluator::new(capped(1_000), config)
            .run(&NullReporter)
            .unwrap();
        assert_eq!(summary.best_index, 746);
        assert_eq!(summary.samples.len(), 151);
    }

    #[test]
    fn soft_cutoff_stops_verification() {
        let summary = Evaluator::new(capped(10), test_config())
            .run(&NullReporter)
            .unwrap();
        assert_eq!(summary.best_index, 10);
        assert_eq!(summary.samples.len(), 11);
    }

    #[test]
    fn wrong_values_are_reported() {
        let err = Evaluator::new(Arc::new(Identity), test_config())
            .run(&NullReporter)
            .unwrap_err();
        match err {
            HarnessError::Mismatch {
                strategy,
                index,
                expected,
                actual,
            } => {
                assert_eq!(strategy, "identity");
                assert_eq!(index, 2);
                assert_eq!(expected, 1);
                assert_eq!(actual, "2");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
