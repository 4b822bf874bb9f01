//! # fibmp-core
//!
//! Exact Fibonacci numbers on a from-scratch digit-vector engine.
//!
//! Four strategies share one contract, "compute F(index) into an owned
//! little-endian byte buffer": linear accumulation, fast doubling, and two
//! symmetric-matrix exponentiation encodings. Each call allocates a single
//! [`region::WorkingRegion`] sized by [`capacity::capacity_for`] and keeps
//! no state afterwards.

pub mod capacity;
pub mod constants;
pub mod digit;
pub mod doubling;
pub mod kernels;
pub mod linear;
pub(crate) mod matrix;
pub mod matrix_pair;
pub mod matrix_triple;
pub mod naive;
pub mod number;
pub mod region;
pub mod registry;
pub mod strategy;

// Re-exports
pub use constants::{exit_codes, FIB_TABLE, MAX_FIB_U64};
pub use doubling::FastDoubling;
pub use linear::LinearAccumulator;
pub use matrix_pair::PairMatrix;
pub use matrix_triple::TripleMatrix;
pub use naive::NaiveRecursive;
pub use number::FibNumber;
pub use registry::{DefaultFactory, StrategyFactory};
pub use strategy::{Computation, FibError, FibonacciStrategy};

/// Compute F(`index`) with fast doubling.
///
/// # Example
/// ```
/// let f = fibmp_core::compute_fibonacci(10).unwrap();
/// assert_eq!(f.as_bytes(), &[55]);
/// ```
pub fn compute_fibonacci(index: u64) -> Result<FibNumber, FibError> {
    FastDoubling::new().compute(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entrypoint_base_cases() {
        assert_eq!(compute_fibonacci(0).unwrap().as_bytes(), &[0]);
        assert_eq!(compute_fibonacci(1).unwrap().as_bytes(), &[1]);
        assert_eq!(compute_fibonacci(2).unwrap().as_bytes(), &[1]);
        assert_eq!(compute_fibonacci(10).unwrap().as_bytes(), &[55]);
    }

    #[test]
    fn entrypoint_f93_fits_a_word() {
        let f = compute_fibonacci(93).unwrap();
        assert_eq!(f.len(), 8);
        assert_eq!(f.to_u64(), Some(12_200_160_415_121_876_738));
    }

    #[test]
    fn entrypoint_f94_spills() {
        let f = compute_fibonacci(94).unwrap();
        assert_eq!(f.len(), 9);
        assert_eq!(f.to_u64(), None);
    }
}
