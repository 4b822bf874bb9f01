//! Harness tuning.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Cutoffs and checkpoints for [`crate::Evaluator`].
///
/// The engine itself has no tuning surface; everything that shapes a
/// measurement run lives here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    /// A call at or above this duration ends the current phase.
    pub soft_cutoff: Duration,
    /// Calls strictly below this duration count toward the best index.
    pub hard_cutoff: Duration,
    /// Wall-clock budget after which a worker is abandoned.
    pub thread_timeout: Duration,
    /// Indices `0..=first_checkpoint` are verified against a `u64` recurrence.
    pub first_checkpoint: u64,
    /// Indices up to this one are walked one by one.
    pub second_checkpoint: u64,
    /// The sampling phase takes about `2^sample_log` points.
    pub sample_log: u32,
    /// Skip the sampling phase.
    pub brief: bool,
}

impl HarnessConfig {
    #[must_use]
    pub fn new() -> Self {
        Self {
            soft_cutoff: Duration::from_millis(1_500),
            hard_cutoff: Duration::from_secs(1),
            thread_timeout: Duration::from_secs(5),
            first_checkpoint: fibmp_core::MAX_FIB_U64,
            second_checkpoint: 0x2d7,
            sample_log: 10,
            brief: false,
        }
    }
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self::new()
    }
}
