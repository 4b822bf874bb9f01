//! Linear accumulation: the O(n) oracle.
//!
//! Two slots hold (F(k), F(k-1)), starting from (F(0), F(-1)) = (0, 1).
//! Each step adds the current value into the previous one in place and
//! swaps the handles, so the slot that held F(k-1) now holds F(k+1).

use tracing::trace;

use crate::kernels::carry_save_add;
use crate::number::FibNumber;
use crate::region::WorkingRegion;
use crate::strategy::{Computation, FibError, FibonacciStrategy};

/// Grade-school linear accumulation, one big addition per index step.
#[derive(Debug, Default, Clone, Copy)]
pub struct LinearAccumulator;

impl LinearAccumulator {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl FibonacciStrategy for LinearAccumulator {
    fn compute_detailed(&self, index: u64) -> Result<Computation, FibError> {
        let mut region = WorkingRegion::for_index(index, 2)?;
        let (mut current, mut previous) = (0, 1);
        region.slot_mut(previous)[0] = 1;

        let mut len = 1;
        for step in 0..index {
            let ([dest], reader) = region.split([previous]);
            len = carry_save_add(dest, &reader.get(current)[..len]);
            std::mem::swap(&mut current, &mut previous);
            trace!(step, len, "linear step");
        }

        Ok(Computation {
            number: FibNumber::from_digits(region.slot(current), len),
            capacity: region.capacity(),
            peak_len: len,
        })
    }

    fn name(&self) -> &'static str {
        "linear"
    }
}
