//! # fibmp-cli
//!
//! Output side of the `fibmp` binary: hex and decimal rendering of results,
//! report rows for the measurement harness, and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;

pub use output::{format_decimal, format_hex, write_hex};
pub use presenter::{JsonLinesReporter, TableReporter};
