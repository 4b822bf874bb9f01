//! Golden file integration tests.
//!
//! Reads tests/testdata/fibonacci_golden.json and checks every engine
//! strategy, the hex exporter and the decimal renderer against it.

use fibmp_cli::output::{format_decimal, format_hex};
use fibmp_core::{DefaultFactory, FibNumber, StrategyFactory};
use fibmp_tests::{load_default_golden, GoldenEntry};

fn check_entry(name: &str, entry: &GoldenEntry, number: &FibNumber) {
    let n = entry.index;
    assert_eq!(number.len(), entry.bytes, "{name} byte length at n={n}");

    let hex = format_hex(number);
    if let Some(expected) = &entry.hex {
        assert_eq!(&hex, expected, "{name} hex mismatch at n={n}");
    }
    if let Some(prefix) = &entry.hex_prefix {
        assert!(hex.starts_with(prefix.as_str()), "{name} hex prefix at n={n}");
    }
    if let Some(suffix) = &entry.hex_suffix {
        assert!(hex.ends_with(suffix.as_str()), "{name} hex suffix at n={n}");
    }
}

// ---------------------------------------------------------------------------
// Golden: every engine strategy
// ---------------------------------------------------------------------------

#[test]
fn golden_logarithmic_strategies() {
    let data = load_default_golden().unwrap();
    let factory = DefaultFactory::new();
    for name in ["doubling", "matrix3", "matrix2"] {
        let strategy = factory.get(name).unwrap();
        for entry in &data.values {
            check_entry(name, entry, &strategy.compute(entry.index).unwrap());
        }
    }
}

#[test]
fn golden_linear() {
    let data = load_default_golden().unwrap();
    let linear = DefaultFactory::new().get("linear").unwrap();
    for entry in data.values.iter().filter(|e| e.index <= 10_000) {
        check_entry("linear", entry, &linear.compute(entry.index).unwrap());
    }
}

#[test]
fn golden_naive_small() {
    let data = load_default_golden().unwrap();
    let naive = DefaultFactory::new().get("naive").unwrap();
    for entry in data.values.iter().filter(|e| e.index <= 30) {
        check_entry("naive", entry, &naive.compute(entry.index).unwrap());
    }
}

// ---------------------------------------------------------------------------
// Golden: decimal rendering
// ---------------------------------------------------------------------------

#[test]
fn golden_decimal() {
    let data = load_default_golden().unwrap();
    for entry in &data.values {
        let number = fibmp_core::compute_fibonacci(entry.index).unwrap();
        let decimal = format_decimal(&number);
        if let Some(expected) = &entry.decimal {
            assert_eq!(&decimal, expected, "decimal mismatch at n={}", entry.index);
        }
        if let Some(digits) = entry.decimal_digits {
            assert_eq!(decimal.len(), digits, "digit count at n={}", entry.index);
        }
    }
}

#[test]
fn golden_values_cross_check_with_biguint() {
    use num_bigint::BigUint;

    let data = load_default_golden().unwrap();
    for (entry, hex) in data
        .values
        .iter()
        .filter_map(|e| e.hex.as_ref().map(|hex| (e, hex)))
    {
        let expected = BigUint::parse_bytes(hex.as_bytes(), 16).unwrap();
        let number = fibmp_core::compute_fibonacci(entry.index).unwrap();
        assert_eq!(BigUint::from_bytes_le(number.as_bytes()), expected);
    }
}

#[test]
fn golden_file_is_well_formed() {
    let data = load_default_golden().unwrap();
    assert!(!data.description.is_empty());
    assert!(data.values.len() > 20);
    for entry in &data.values {
        assert!(
            entry.hex.is_some() || (entry.hex_prefix.is_some() && entry.hex_suffix.is_some()),
            "entry {} has no hex data",
            entry.index
        );
        if let Some(hex) = &entry.hex {
            assert_eq!(hex.len(), 2 * entry.bytes);
        }
    }
}
