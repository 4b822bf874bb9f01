//! Capacity estimation for working regions.
//!
//! F(n) < 2^(n-1) for n > 1, and the matrix drivers square their base one
//! more time than the index strictly needs, so intermediates reach roughly
//! the size of F(2n). A bound of `2n` bits per digit vector covers every
//! driver; two extra digits absorb the carry-out of the last row and the
//! small-index edge cases.

use crate::digit::{DIGIT_BITS, DIGIT_BYTES};
use crate::strategy::FibError;

/// Spare digits reserved on top of the `2·index`-bit bound.
pub const MARGIN_DIGITS: usize = 2;

/// log2 of the golden ratio.
const LOG2_PHI: f64 = 0.694_241_913_630_617_3;

/// Digits each digit vector needs so that no intermediate of F(`index`)
/// can outgrow it.
pub fn capacity_for(index: u64) -> Result<usize, FibError> {
    let bits = 2 * u128::from(index);
    let digits = bits.div_ceil(u128::from(DIGIT_BITS)) + MARGIN_DIGITS as u128;
    usize::try_from(digits)
        .ok()
        .filter(|&d| fits_in_allocation(d))
        .ok_or(FibError::CapacityOverflow { index })
}

/// Whether `digits` words can back a single allocation.
pub(crate) fn fits_in_allocation(digits: usize) -> bool {
    digits
        .checked_mul(DIGIT_BYTES)
        .is_some_and(|bytes| isize::try_from(bytes).is_ok())
}

/// Approximate byte length of F(`index`): `⌈index · log2(φ) / 8⌉`.
///
/// Only a sanity reference for the capacity bound, never used for sizing.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn approx_result_bytes(index: u64) -> u64 {
    ((index as f64 * LOG2_PHI) / 8.0).ceil() as u64
}
