//! Constants shared by the strategies, the harness and the binary.

/// Largest index whose Fibonacci number fits in a `u64`.
/// F(93) = 12200160415121876738
pub const MAX_FIB_U64: u64 = 93;

/// F(0) through F(93).
///
/// F(94) = 19,740,274,219,868,223,167 overflows `u64::MAX`.
pub const FIB_TABLE: [u64; 94] = {
    let mut table = [0u64; 94];
    table[1] = 1;
    let mut i = 2;
    while i < 94 {
        table[i] = table[i - 1] + table[i - 2];
        i += 1;
    }
    table
};

/// Process exit codes of the `fibmp` binary.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// A computation missed its time budget.
    pub const ERROR_TIMEOUT: i32 = 2;
    /// Strategies or the reference recurrence disagreed.
    pub const ERROR_MISMATCH: i32 = 3;
    /// Invalid configuration or arguments.
    pub const ERROR_CONFIG: i32 = 4;
}
