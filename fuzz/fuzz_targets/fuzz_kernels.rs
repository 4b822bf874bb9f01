#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint::BigUint;

use fibmp_core::kernels::{carry_save_add, dual_multiply_accumulate, doubled_multiply_accumulate};

fn digits(bytes: &[u8]) -> Vec<u64> {
    let mut out: Vec<u64> = bytes
        .chunks(8)
        .map(|chunk| {
            let mut word = [0u8; 8];
            word[..chunk.len()].copy_from_slice(chunk);
            u64::from_le_bytes(word)
        })
        .collect();
    if out.is_empty() {
        out.push(0);
    }
    out
}

fn big(digits: &[u64]) -> BigUint {
    let bytes: Vec<u8> = digits.iter().flat_map(|d| d.to_le_bytes()).collect();
    BigUint::from_bytes_le(&bytes)
}

fuzz_target!(|data: &[u8]| {
    // Split into a multiplicand and two equally long row operands.
    let third = data.len() / 3;
    let a = digits(&data[..third]);
    let b1 = digits(&data[third..2 * third]);
    let mut b2 = digits(&data[2 * third..]);
    b2.resize(b1.len(), 0);
    let b2 = &b2[..b1.len()];

    let len = a.len() + b1.len() + 2;
    let (mut d1, mut d2) = (vec![0u64; len], vec![0u64; len]);
    dual_multiply_accumulate(&mut d1, &mut d2, &a, &b1, b2);
    assert_eq!(big(&d1), big(&a) * big(&b1));
    assert_eq!(big(&d2), big(&a) * big(b2));

    let (mut e1, mut e2) = (vec![0u64; len], vec![0u64; len]);
    doubled_multiply_accumulate(&mut e1, &mut e2, &a, &b1, b2);
    assert_eq!(big(&e1), big(&a) * big(&b1));
    assert_eq!(big(&e2), big(&a) * big(b2) * 2u32);

    let mut sum = vec![0u64; a.len() + 1];
    sum[..b1.len().min(a.len())].copy_from_slice(&b1[..b1.len().min(a.len())]);
    let before = big(&sum);
    carry_save_add(&mut sum, &a);
    assert_eq!(big(&sum), before + big(&a));
});
