//! Multiply-accumulate kernels over digit vectors.
//!
//! Every kernel adds into the existing contents of its destination(s); a
//! caller that wants plain assignment zeroes the destination first. Each
//! destination must have room for one carry-out digit past the nominal
//! length of the result. Carries ripple upward while non-zero, so a
//! destination that already holds a partial sum never loses a carry.

use crate::digit::{significant_len, split_wide, Digit, Wide, DIGIT_BITS};

/// Add `carry` into `dest` at position `from`, propagating upward.
#[inline]
fn ripple_carry(dest: &mut [Digit], from: usize, carry: Wide) {
    let mut carry = carry;
    let mut pos = from;
    while carry != 0 {
        debug_assert!(
            pos < dest.len(),
            "carry ran past the destination capacity ({} digits)",
            dest.len()
        );
        let (digit, next) = split_wide(Wide::from(dest[pos]) + carry);
        dest[pos] = digit;
        carry = next;
        pos += 1;
    }
}

/// `dest += multiplicand · scalar`.
pub fn scale_accumulate(dest: &mut [Digit], multiplicand: &[Digit], scalar: Digit) {
    if scalar == 0 {
        return;
    }
    debug_assert!(dest.len() > multiplicand.len(), "no carry headroom");

    let scalar = Wide::from(scalar);
    let mut carry: Wide = 0;
    for (d, &m) in dest.iter_mut().zip(multiplicand) {
        // (2^64-1) + (2^64-1)^2 + (2^64-1) == 2^128 - 1, never overflows.
        let (digit, next) = split_wide(Wide::from(*d) + Wide::from(m) * scalar + carry);
        *d = digit;
        carry = next;
    }
    ripple_carry(dest, multiplicand.len(), carry);
}

/// `dest1 += multiplicand · scalar1` and `dest2 += multiplicand · scalar2`
/// in a single read pass over `multiplicand`.
pub fn dual_scale_accumulate(
    dest1: &mut [Digit],
    dest2: &mut [Digit],
    multiplicand: &[Digit],
    scalar1: Digit,
    scalar2: Digit,
) {
    if scalar1 == 0 {
        scale_accumulate(dest2, multiplicand, scalar2);
        return;
    }
    if scalar2 == 0 {
        scale_accumulate(dest1, multiplicand, scalar1);
        return;
    }
    debug_assert!(dest1.len() > multiplicand.len(), "no carry headroom");
    debug_assert!(dest2.len() > multiplicand.len(), "no carry headroom");

    let (s1, s2) = (Wide::from(scalar1), Wide::from(scalar2));
    let mut carry1: Wide = 0;
    let mut carry2: Wide = 0;
    for ((d1, d2), &m) in dest1.iter_mut().zip(dest2.iter_mut()).zip(multiplicand) {
        let m = Wide::from(m);

        let (digit, next) = split_wide(Wide::from(*d1) + m * s1 + carry1);
        *d1 = digit;
        carry1 = next;

        let (digit, next) = split_wide(Wide::from(*d2) + m * s2 + carry2);
        *d2 = digit;
        carry2 = next;
    }
    ripple_carry(dest1, multiplicand.len(), carry1);
    ripple_carry(dest2, multiplicand.len(), carry2);
}

/// Grade-school convolution into two destinations: row `j` adds
/// `multiplicand · rows[j].0` into `dest1` and `multiplicand · rows[j].1`
/// into `dest2`, both shifted by `j` digits.
fn convolve_dual<I>(dest1: &mut [Digit], dest2: &mut [Digit], multiplicand: &[Digit], rows: I)
where
    I: IntoIterator<Item = (Digit, Digit)>,
{
    for (offset, (s1, s2)) in rows.into_iter().enumerate() {
        dual_scale_accumulate(
            &mut dest1[offset..],
            &mut dest2[offset..],
            multiplicand,
            s1,
            s2,
        );
    }
}

/// `dest += a · b`.
pub fn multiply_accumulate(dest: &mut [Digit], a: &[Digit], b: &[Digit]) {
    for (offset, &scalar) in b.iter().enumerate() {
        scale_accumulate(&mut dest[offset..], a, scalar);
    }
}

/// `dest1 += a · b1` and `dest2 += a · b2`. `b1` and `b2` have equal length.
pub fn dual_multiply_accumulate(
    dest1: &mut [Digit],
    dest2: &mut [Digit],
    a: &[Digit],
    b1: &[Digit],
    b2: &[Digit],
) {
    debug_assert_eq!(b1.len(), b2.len());
    convolve_dual(dest1, dest2, a, b1.iter().copied().zip(b2.iter().copied()));
}

/// `dest1 += a · b` and `dest2 += a · b`, sharing every product.
pub fn duplicate_multiply_accumulate(
    dest1: &mut [Digit],
    dest2: &mut [Digit],
    a: &[Digit],
    b: &[Digit],
) {
    convolve_dual(dest1, dest2, a, b.iter().map(|&d| (d, d)));
}

/// `dest1 += a · b1` and `dest2 += a · (2 · b2)`.
///
/// The doubled operand is produced digit by digit; the bit shifted out of
/// the top digit of `b2` becomes one extra row.
pub fn doubled_multiply_accumulate(
    dest1: &mut [Digit],
    dest2: &mut [Digit],
    a: &[Digit],
    b1: &[Digit],
    b2: &[Digit],
) {
    debug_assert_eq!(b1.len(), b2.len());
    let top_bit = DIGIT_BITS - 1;
    let spill = b2.last().map_or(0, |&top| top >> top_bit);
    let rows = b2.len() + usize::from(spill != 0);

    let row = |j: usize| {
        let low = b2.get(j).map_or(0, |&d| d << 1);
        let carried = j.checked_sub(1).map_or(0, |i| b2[i] >> top_bit);
        (b1.get(j).copied().unwrap_or(0), low | carried)
    };
    convolve_dual(dest1, dest2, a, (0..rows).map(row));
}

/// `dest += addend` over `addend.len()` digits, leaving the carry-out in
/// `dest[addend.len()]`. Returns the significant length of the sum.
pub fn carry_save_add(dest: &mut [Digit], addend: &[Digit]) -> usize {
    let len = addend.len();
    debug_assert!(dest.len() > len, "no carry headroom");

    let mut carry: Wide = 0;
    for (d, &a) in dest.iter_mut().zip(addend) {
        let (digit, next) = split_wide(Wide::from(*d) + Wide::from(a) + carry);
        *d = digit;
        carry = next;
    }
    ripple_carry(dest, len, carry);
    significant_len(dest, len + 1)
}
