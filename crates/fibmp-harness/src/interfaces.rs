//! Harness data types and reporting interfaces.

use std::time::Duration;

use serde::Serialize;

use fibmp_core::{FibError, FibNumber};

use crate::evaluator::EvaluationSummary;

/// One timed call.
#[derive(Debug, Clone, Serialize)]
pub struct Measurement {
    /// Requested index.
    pub index: u64,
    /// Wall time spent inside the call (zero if it did not complete).
    pub duration: Duration,
    /// Byte length of the result (zero if it did not complete).
    pub length: usize,
    /// Whether the call finished within the thread timeout.
    pub completed: bool,
    /// The result, when the call completed.
    #[serde(skip)]
    pub number: Option<FibNumber>,
}

impl Measurement {
    /// A call that was abandoned after the thread timeout.
    #[must_use]
    pub fn timed_out(index: u64) -> Self {
        Self {
            index,
            duration: Duration::ZERO,
            length: 0,
            completed: false,
            number: None,
        }
    }

    /// Completed and strictly faster than `cutoff`.
    #[must_use]
    pub fn within(&self, cutoff: Duration) -> bool {
        self.completed && self.duration < cutoff
    }
}

/// Outcome of one strategy in a comparison.
#[derive(Debug, Clone)]
pub struct CalculationResult {
    /// Strategy name.
    pub strategy: String,
    /// Requested index.
    pub index: u64,
    /// The computed value or a structured error.
    pub outcome: Result<FibNumber, FibError>,
    /// Computation duration.
    pub duration: Duration,
}

/// Receives measurements as an evaluation progresses.
pub trait MeasurementReporter: Send + Sync {
    /// An evaluation of `strategy` is starting.
    fn begin(&self, strategy: &str);

    /// A measurement passed the phase checks.
    fn record(&self, measurement: &Measurement);

    /// The evaluation is over.
    fn finish(&self, summary: &EvaluationSummary);
}

/// Reporter that discards everything.
pub struct NullReporter;

impl MeasurementReporter for NullReporter {
    fn begin(&self, _strategy: &str) {}
    fn record(&self, _measurement: &Measurement) {}
    fn finish(&self, _summary: &EvaluationSummary) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn within_requires_completion() {
        let fast = Measurement {
            index: 10,
            duration: Duration::from_millis(1),
            length: 1,
            completed: true,
            number: Some(FibNumber::from_u64(55)),
        };
        assert!(fast.within(Duration::from_millis(2)));
        assert!(!fast.within(Duration::from_millis(1)));
        assert!(!Measurement::timed_out(10).within(Duration::MAX));
    }

    #[test]
    fn measurement_serializes_without_number() {
        let m = Measurement {
            index: 10,
            duration: Duration::from_millis(3),
            length: 1,
            completed: true,
            number: Some(FibNumber::from_u64(55)),
        };
        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(json["index"], 10);
        assert_eq!(json["length"], 1);
        assert!(json.get("number").is_none());
    }

    #[test]
    fn null_reporter() {
        let reporter = NullReporter;
        reporter.begin("linear");
        reporter.record(&Measurement::timed_out(1));
        reporter.finish(&EvaluationSummary {
            strategy: "linear".into(),
            best_index: 0,
            samples: Vec::new(),
        });
    }
}
