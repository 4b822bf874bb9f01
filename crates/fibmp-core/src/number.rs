//! The owned result of a computation.

use std::fmt;

use crate::digit::{to_trimmed_bytes, Digit};

/// F(index) as trimmed little-endian bytes.
///
/// The most significant byte is non-zero unless the value is zero, in which
/// case the buffer is the single byte `0`. The buffer is never empty.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct FibNumber {
    bytes: Vec<u8>,
}

#[allow(clippy::len_without_is_empty)]
impl FibNumber {
    /// Extract the first `len` digits of a digit vector.
    pub(crate) fn from_digits(digits: &[Digit], len: usize) -> Self {
        Self {
            bytes: to_trimmed_bytes(digits, len),
        }
    }

    /// Wrap a value that fits in one word.
    #[must_use]
    pub fn from_u64(value: u64) -> Self {
        Self::from_digits(&[value], 1)
    }

    /// Little-endian bytes, most significant byte last.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Give up ownership of the byte buffer.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Byte count, always at least 1.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the value is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.bytes == [0]
    }

    /// The value, if it fits in a `u64`.
    #[must_use]
    pub fn to_u64(&self) -> Option<u64> {
        if self.bytes.len() > 8 {
            return None;
        }
        let mut word = [0u8; 8];
        word[..self.bytes.len()].copy_from_slice(&self.bytes);
        Some(u64::from_le_bytes(word))
    }

    /// Number of significant bits (0 for zero).
    #[must_use]
    pub fn bit_len(&self) -> u64 {
        let top = self.bytes[self.bytes.len() - 1];
        (self.bytes.len() as u64 - 1) * 8 + u64::from(u8::BITS - top.leading_zeros())
    }
}

impl AsRef<[u8]> for FibNumber {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<FibNumber> for Vec<u8> {
    fn from(number: FibNumber) -> Self {
        number.bytes
    }
}

impl fmt::Debug for FibNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_u64() {
            Some(value) => write!(f, "FibNumber({value})"),
            None => write!(f, "FibNumber({} bytes)", self.bytes.len()),
        }
    }
}
