//! Exponential-time recursion, kept as a tiny independent reference.

use crate::constants::MAX_FIB_U64;
use crate::number::FibNumber;
use crate::strategy::{Computation, FibError, FibonacciStrategy};

/// F(n) = F(n-1) + F(n-2) on machine words, without memoisation.
///
/// Only indices up to [`MAX_FIB_U64`] are accepted; anything past roughly
/// 40 is already too slow to be useful.
#[derive(Debug, Default, Clone, Copy)]
pub struct NaiveRecursive;

impl NaiveRecursive {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn recurse(n: u64) -> u64 {
        if n < 2 {
            n
        } else {
            Self::recurse(n - 1) + Self::recurse(n - 2)
        }
    }
}

impl FibonacciStrategy for NaiveRecursive {
    fn compute_detailed(&self, index: u64) -> Result<Computation, FibError> {
        if index > MAX_FIB_U64 {
            return Err(FibError::IndexTooLarge {
                index,
                max: MAX_FIB_U64,
            });
        }
        Ok(Computation {
            number: FibNumber::from_u64(Self::recurse(index)),
            capacity: 1,
            peak_len: 1,
        })
    }

    fn name(&self) -> &'static str {
        "naive"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::FIB_TABLE;

    #[test]
    fn naive_matches_table_for_small_indices() {
        let naive = NaiveRecursive::new();
        for index in 0..=25u64 {
            let number = naive.compute(index).unwrap();
            assert_eq!(number.to_u64(), Some(FIB_TABLE[index as usize]));
        }
    }

    #[test]
    fn naive_rejects_indices_past_u64() {
        assert_eq!(
            NaiveRecursive::new().compute(94).unwrap_err(),
            FibError::IndexTooLarge { index: 94, max: 93 }
        );
    }
}
