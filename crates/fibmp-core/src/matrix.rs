//! Binary exponentiation of the Fibonacci matrix M = [[1,1],[1,0]].
//!
//! M^k = [[F(k+1), F(k)], [F(k), F(k-1)]] is symmetric, so a power is
//! stored as a tuple of fewer than four digit vectors. The concrete
//! encodings live in [`crate::matrix_triple`] and [`crate::matrix_pair`];
//! this module runs the shared least-significant-bit-first loop:
//!
//! ```text
//! P = I, Q = M
//! for each bit of the index, low to high:
//!     if bit == 1 { P = P·Q }
//!     Q = Q·Q
//! ```
//!
//! Region layout: three tuples of `N` slots (P, Q, scratch); a product
//! writes into scratch and the handles are swapped afterwards.

use tracing::trace;

use crate::digit::Digit;
use crate::number::FibNumber;
use crate::region::WorkingRegion;
use crate::strategy::{Computation, FibError};

/// Slot handles of one stored matrix power.
pub(crate) type Tuple<const N: usize> = [usize; N];

/// How a symmetric matrix power is laid out in `N` digit vectors.
pub(crate) struct SymmetricEncoding<const N: usize> {
    /// Entries of the identity matrix.
    pub identity: [Digit; N],
    /// Entries of M itself.
    pub base: [Digit; N],
    /// Which entry holds F(k).
    pub fib_entry: usize,
    /// `into = x · y`; `into` is zeroed first. Returns the significant
    /// length of the product (the longest entry).
    pub product: fn(&mut WorkingRegion, Tuple<N>, Tuple<N>, Tuple<N>, usize, usize) -> usize,
}

/// Compute F(`index`) as an entry of M^`index`.
pub(crate) fn execute_matrix_power<const N: usize>(
    index: u64,
    encoding: &SymmetricEncoding<N>,
    name: &'static str,
) -> Result<Computation, FibError> {
    let mut region = WorkingRegion::for_index(index, 3 * N)?;
    let mut power: Tuple<N> = std::array::from_fn(|i| i);
    let mut base: Tuple<N> = std::array::from_fn(|i| N + i);
    let mut scratch: Tuple<N> = std::array::from_fn(|i| 2 * N + i);

    for entry in 0..N {
        region.slot_mut(power[entry])[0] = encoding.identity[entry];
        region.slot_mut(base[entry])[0] = encoding.base[entry];
    }

    let mut power_len = 1;
    let mut base_len = 1;
    let mut peak_len = 1;
    let mut remaining = index;

    while remaining != 0 {
        if remaining & 1 == 1 {
            power_len = (encoding.product)(&mut region, scratch, power, base, power_len, base_len);
            std::mem::swap(&mut power, &mut scratch);
        }

        base_len = (encoding.product)(&mut region, scratch, base, base, base_len, base_len);
        std::mem::swap(&mut base, &mut scratch);

        peak_len = peak_len.max(power_len).max(base_len);
        trace!(strategy = name, remaining, power_len, base_len, "matrix step");
        remaining >>= 1;
    }

    Ok(Computation {
        number: FibNumber::from_digits(region.slot(power[encoding.fib_entry]), power_len),
        capacity: region.capacity(),
        peak_len,
    })
}
