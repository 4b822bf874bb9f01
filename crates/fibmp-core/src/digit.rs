//! Digit-vector conventions.
//!
//! A value is stored as a little-endian slice of 64-bit [`Digit`]s:
//! `value = Σ digit[i] · 2^(64·i)`. Products and sums are formed in the
//! 128-bit [`Wide`] accumulator and then split into a digit and a carry-out.
//!
//! Every slice handed to a kernel is canonically zero-extended: digits past
//! the significant length are zero, so reading "significant length" digits
//! is always enough.

/// One word of a digit vector.
pub type Digit = u64;

/// Double-width accumulator for a product plus carry.
pub type Wide = u128;

/// Width of a [`Digit`] in bits.
pub const DIGIT_BITS: u32 = Digit::BITS;

/// Width of a [`Digit`] in bytes.
pub const DIGIT_BYTES: usize = std::mem::size_of::<Digit>();

/// Split a wide accumulator into its low digit and the carry-out.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn split_wide(acc: Wide) -> (Digit, Wide) {
    (acc as Digit, acc >> DIGIT_BITS)
}

/// Significant length of `digits` (index of the highest non-zero digit + 1).
///
/// Zero has length 1. Only the first `upper` digits are inspected; `upper`
/// is clamped to the slice length.
#[must_use]
pub fn significant_len(digits: &[Digit], upper: usize) -> usize {
    let upper = upper.min(digits.len());
    digits[..upper]
        .iter()
        .rposition(|&d| d != 0)
        .map_or(1, |top| top + 1)
}

/// Little-endian bytes of the first `len` digits, trimmed so the most
/// significant byte is non-zero (a single zero byte for the value zero).
#[must_use]
pub fn to_trimmed_bytes(digits: &[Digit], len: usize) -> Vec<u8> {
    let len = significant_len(digits, len);
    let mut bytes = Vec::with_capacity(len * DIGIT_BYTES);
    for digit in &digits[..len] {
        bytes.extend_from_slice(&digit.to_le_bytes());
    }
    let keep = bytes.iter().rposition(|&b| b != 0).map_or(1, |top| top + 1);
    bytes.truncate(keep);
    bytes
}
