//! Fast doubling with squaring identities.
//!
//! The state is (F(k-1), F(k)), starting at k = 0 with (1, 0). Index bits
//! are consumed most significant first. Every bit doubles k using only
//! additions and products:
//!
//! ```text
//! F(2k-1) = F(k)^2 + F(k-1)^2
//! F(2k)   = F(k)^2 + 2·F(k-1)·F(k)
//! ```
//!
//! and a set bit then advances the pair by one step in place.

use tracing::trace;

use crate::digit::significant_len;
use crate::kernels::{carry_save_add, doubled_multiply_accumulate, duplicate_multiply_accumulate};
use crate::number::FibNumber;
use crate::region::WorkingRegion;
use crate::strategy::{Computation, FibError, FibonacciStrategy};

/// Handles of the two digit vectors making up one (F(k-1), F(k)) pair.
#[derive(Debug, Clone, Copy)]
struct Pair {
    prev: usize,
    cur: usize,
}

/// Fast-doubling driver, O(log n) doubling steps.
#[derive(Debug, Default, Clone, Copy)]
pub struct FastDoubling;

impl FastDoubling {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Replace `into` with the doubled `from` pair. Returns the new length.
    fn double(region: &mut WorkingRegion, from: Pair, into: Pair, len: usize) -> usize {
        let ([prev2, cur2], reader) = region.split([into.prev, into.cur]);
        prev2.fill(0);
        cur2.fill(0);

        let prev = &reader.get(from.prev)[..len];
        let cur = &reader.get(from.cur)[..len];

        // F(k)^2 into both halves.
        duplicate_multiply_accumulate(prev2, cur2, cur, cur);
        // F(k-1)^2 into the first half, F(k-1)·2F(k) into the second.
        doubled_multiply_accumulate(prev2, cur2, prev, prev, cur);

        let upper = 2 * len + 1;
        significant_len(prev2, upper).max(significant_len(cur2, upper))
    }
}

impl FibonacciStrategy for FastDoubling {
    fn compute_detailed(&self, index: u64) -> Result<Computation, FibError> {
        let mut region = WorkingRegion::for_index(index, 4)?;
        let mut state = Pair { prev: 0, cur: 1 };
        let mut scratch = Pair { prev: 2, cur: 3 };
        region.slot_mut(state.prev)[0] = 1;

        let mut len = 1;
        let mut peak_len = 1;

        if index != 0 {
            let bits = u64::BITS - index.leading_zeros();
            for bit in (0..bits).rev() {
                len = Self::double(&mut region, state, scratch, len);
                std::mem::swap(&mut state, &mut scratch);

                if (index >> bit) & 1 == 1 {
                    // (F(k-1), F(k)) -> (F(k), F(k-1) + F(k))
                    let ([prev], reader) = region.split([state.prev]);
                    len = carry_save_add(prev, &reader.get(state.cur)[..len]);
                    std::mem::swap(&mut state.prev, &mut state.cur);
                }

                peak_len = peak_len.max(len);
                trace!(bit, len, "doubling step");
            }
        }

        Ok(Computation {
            number: FibNumber::from_digits(region.slot(state.cur), len),
            capacity: region.capacity(),
            peak_len,
        })
    }

    fn name(&self) -> &'static str {
        "doubling"
    }
}
