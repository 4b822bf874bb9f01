//! Matrix power with three stored entries.
//!
//! M^k is kept as (a, b, c) = (F(k+1), F(k), F(k-1)), i.e. the matrix
//! [[a, b], [b, c]]. The product of two such powers is
//!
//! ```text
//! a'' = a·a' + b·b'
//! b'' = a·b' + b·c'
//! c'' = b·b' + c·c'
//! ```
//!
//! which takes three kernel calls: `a·(a', b')` into (a'', b''), `b·b'`
//! into both a'' and c'', and `c'·(b, c)` into (b'', c'').

use crate::digit::significant_len;
use crate::kernels::{dual_multiply_accumulate, duplicate_multiply_accumulate};
use crate::matrix::{execute_matrix_power, SymmetricEncoding, Tuple};
use crate::region::WorkingRegion;
use crate::strategy::{Computation, FibError, FibonacciStrategy};

const ENCODING: SymmetricEncoding<3> = SymmetricEncoding {
    identity: [1, 0, 1],
    base: [1, 1, 0],
    fib_entry: 1,
    product: triple_product,
};

fn triple_product(
    region: &mut WorkingRegion,
    into: Tuple<3>,
    x: Tuple<3>,
    y: Tuple<3>,
    x_len: usize,
    y_len: usize,
) -> usize {
    let ([a2, b2, c2], reader) = region.split(into);
    a2.fill(0);
    b2.fill(0);
    c2.fill(0);

    let [xa, xb, xc] = x.map(|slot| &reader.get(slot)[..x_len]);
    let [ya, yb, yc] = y.map(|slot| &reader.get(slot)[..y_len]);

    dual_multiply_accumulate(a2, b2, xa, ya, yb);
    duplicate_multiply_accumulate(a2, c2, xb, yb);
    dual_multiply_accumulate(b2, c2, yc, xb, xc);

    let upper = x_len + y_len + 1;
    [&*a2, &*b2, &*c2]
        .iter()
        .map(|entry| significant_len(entry, upper))
        .max()
        .unwrap_or(1)
}

/// Matrix exponentiation storing (F(k+1), F(k), F(k-1)).
#[derive(Debug, Default, Clone, Copy)]
pub struct TripleMatrix;

impl TripleMatrix {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl FibonacciStrategy for TripleMatrix {
    fn compute_detailed(&self, index: u64) -> Result<Computation, FibError> {
        execute_matrix_power(index, &ENCODING, self.name())
    }

    fn name(&self) -> &'static str {
        "matrix3"
    }
}
