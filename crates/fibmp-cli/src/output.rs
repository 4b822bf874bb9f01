//! Result and report formatting.

use std::fmt::Write as _;
use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

use num_bigint::BigUint;

use fibmp_core::FibNumber;
use fibmp_harness::Measurement;

/// Column header printed before harness rows.
pub const REPORT_HEADER: &str = "#   Fibonacci index  |   Time (s)   | Size (bytes) \n\
                                 # -------------------+--------------+--------------";

/// Lowercase hex, most significant byte first, two digits per byte.
#[must_use]
pub fn format_hex(number: &FibNumber) -> String {
    let mut out = String::with_capacity(number.len() * 2);
    for byte in number.as_bytes().iter().rev() {
        let _ = write!(out, "{byte:02x}");
    }
    out
}

/// Stream the hex form of `number` to `out`.
///
/// # Errors
///
/// Propagates write failures.
pub fn write_hex<W: Write>(out: &mut W, number: &FibNumber) -> io::Result<()> {
    let mut out = io::BufWriter::new(out);
    for byte in number.as_bytes().iter().rev() {
        write!(out, "{byte:02x}")?;
    }
    out.flush()
}

/// Write the hex form of `number` to a new file at `path`, without a
/// trailing newline.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_hex_file(path: &Path, number: &FibNumber) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_hex(&mut file, number)
}

/// Decimal rendering.
#[must_use]
pub fn format_decimal(number: &FibNumber) -> String {
    BigUint::from_bytes_le(number.as_bytes()).to_string()
}

/// Decimal rendering, shortened to its ends unless `verbose`.
#[must_use]
pub fn format_result(number: &FibNumber, verbose: bool) -> String {
    let s = format_decimal(number);
    if !verbose && s.len() > 100 {
        format!("{}...{} ({} digits)", &s[..50], &s[s.len() - 50..], s.len())
    } else {
        s
    }
}

/// `secs.nanoss` with nine fractional digits, as in the report rows.
#[must_use]
pub fn format_seconds(d: Duration) -> String {
    format!("{}.{:09}s", d.as_secs(), d.subsec_nanos())
}

/// One report row: index, runtime and result size.
#[must_use]
pub fn format_report_row(m: &Measurement) -> String {
    format!("{:>20} | {} | {} B", m.index, format_seconds(m.duration), m.length)
}

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

/// Format a number with thousand separators.
#[must_use]
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}
