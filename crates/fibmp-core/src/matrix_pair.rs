//! Matrix power with two stored entries.
//!
//! Only (b, c) = (F(k), F(k-1)) is kept; the top-left entry is implied by
//! F(k+1) = b + c. Multiplying two powers expands to
//!
//! ```text
//! b'' = b·b' + c·b' + b·c'
//! c'' = b·b' + c·c'
//! ```

use crate::digit::significant_len;
use crate::kernels::{dual_multiply_accumulate, duplicate_multiply_accumulate, multiply_accumulate};
use crate::matrix::{execute_matrix_power, SymmetricEncoding, Tuple};
use crate::region::WorkingRegion;
use crate::strategy::{Computation, FibError, FibonacciStrategy};

const ENCODING: SymmetricEncoding<2> = SymmetricEncoding {
    identity: [0, 1],
    base: [1, 0],
    fib_entry: 0,
    product: pair_product,
};

fn pair_product(
    region: &mut WorkingRegion,
    into: Tuple<2>,
    x: Tuple<2>,
    y: Tuple<2>,
    x_len: usize,
    y_len: usize,
) -> usize {
    let ([b2, c2], reader) = region.split(into);
    b2.fill(0);
    c2.fill(0);

    let [xb, xc] = x.map(|slot| &reader.get(slot)[..x_len]);
    let [yb, yc] = y.map(|slot| &reader.get(slot)[..y_len]);

    // c·c' into c'', c·b' into b''
    dual_multiply_accumulate(c2, b2, xc, yc, yb);
    // b·b' into both
    duplicate_multiply_accumulate(c2, b2, xb, yb);
    multiply_accumulate(b2, xb, yc);

    let upper = x_len + y_len + 1;
    significant_len(b2, upper).max(significant_len(c2, upper))
}

/// Matrix exponentiation storing only (F(k), F(k-1)).
#[derive(Debug, Default, Clone, Copy)]
pub struct PairMatrix;

impl PairMatrix {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl FibonacciStrategy for PairMatrix {
    fn compute_detailed(&self, index: u64) -> Result<Computation, FibError> {
        execute_matrix_power(index, &ENCODING, self.name())
    }

    fn name(&self) -> &'static str {
        "matrix2"
    }
}
