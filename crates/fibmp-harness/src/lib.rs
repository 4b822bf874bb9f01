//! # fibmp-harness
//!
//! Measures the `fibmp-core` strategies from the outside: every call runs on
//! a worker thread under a wall-clock budget, a horizon search finds the
//! largest index computable within a cutoff, and several strategies can be
//! run side by side and cross-checked.

pub mod config;
pub mod error;
pub mod evaluator;
pub mod interfaces;
pub mod orchestrator;
pub mod selection;

pub use config::HarnessConfig;
pub use error::HarnessError;
pub use evaluator::{evaluate, EvaluationSummary, Evaluator};
pub use interfaces::{CalculationResult, Measurement, MeasurementReporter, NullReporter};
pub use orchestrator::{analyze_comparison_results, compare};
pub use selection::select_strategies;
