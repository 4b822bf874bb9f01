//! fibmp library: argument parsing, dispatch and exit-code mapping for
//! the `fibmp` binary.

pub mod app;
pub mod config;
pub mod errors;
