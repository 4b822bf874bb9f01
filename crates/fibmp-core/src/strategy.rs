//! The strategy trait shared by every driver, and the core error type.
//!
//! `FibonacciStrategy` is the one capability the engine exposes: compute
//! F(index) into an owned buffer. Drivers are selected at the call site,
//! usually through [`crate::registry::DefaultFactory`].

use crate::number::FibNumber;

/// Error type for Fibonacci computations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FibError {
    /// The digit bound for this index cannot be allocated at all.
    #[error("F({index}) needs a working region larger than the address space")]
    CapacityOverflow {
        /// Requested index.
        index: u64,
    },

    /// A region of `slots × capacity` digits cannot be represented.
    #[error("working region of {slots} x {capacity} digits overflows")]
    RegionOverflow {
        /// Requested slot count.
        slots: usize,
        /// Requested digits per slot.
        capacity: usize,
    },

    /// The strategy only handles indices up to `max`.
    #[error("index {index} exceeds the maximum of {max} for this strategy")]
    IndexTooLarge {
        /// Requested index.
        index: u64,
        /// Largest supported index.
        max: u64,
    },

    /// No strategy is registered under this name.
    #[error("unknown strategy: {0}")]
    UnknownStrategy(String),
}

/// A finished computation plus the sizing it ran with.
#[derive(Debug, Clone)]
pub struct Computation {
    /// F(index).
    pub number: FibNumber,
    /// Digits reserved per digit vector.
    pub capacity: usize,
    /// Largest significant length any digit vector reached.
    pub peak_len: usize,
}

/// A way of computing F(index).
pub trait FibonacciStrategy: Send + Sync {
    /// Compute F(`index`) and report the sizing of the working region.
    fn compute_detailed(&self, index: u64) -> Result<Computation, FibError>;

    /// Compute F(`index`).
    fn compute(&self, index: u64) -> Result<FibNumber, FibError> {
        self.compute_detailed(index).map(|c| c.number)
    }

    /// Short registry name of this strategy.
    fn name(&self) -> &'static str;
}
