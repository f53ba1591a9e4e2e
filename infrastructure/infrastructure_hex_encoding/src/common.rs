//! Common Encoding/Decoding Utilities
//!
//! Provides the nibble/character conversions and the error types shared by
//! the encoder and decoder.

use thiserror::Error;

/// Lowercase hex digits indexed by nibble value
pub const HEXDIGIT_TAB_LC: [u8; 16] = *b"0123456789abcdef";

/// Diagnostic written to the terminal when the decode buffer cannot grow
pub const OUT_OF_MEMORY_MESSAGE: &str = "\r\nERROR: Out of memory!";

/// Buffer growth failure reported by a [`ChunkAllocator`](crate::ChunkAllocator)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("failed to reserve {requested} bytes")]
pub struct AllocError {
    /// Bytes the buffer tried to add
    pub requested: usize,
}

/// Decoding errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The decode buffer could not grow
    #[error("out of memory while growing decode buffer by {requested} bytes")]
    MemoryExhausted { requested: usize },
}

impl From<AllocError> for DecodeError {
    fn from(e: AllocError) -> Self {
        DecodeError::MemoryExhausted {
            requested: e.requested,
        }
    }
}

/// Convert a hex digit character to its value (case-insensitive)
pub fn char_to_nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// Convert the low 4 bits of `nibble` to a lowercase hex digit
#[inline]
pub fn nibble_to_char(nibble: u8) -> u8 {
    HEXDIGIT_TAB_LC[usize::from(nibble & 0x0f)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_to_nibble_digits() {
        for (i, c) in (b'0'..=b'9').enumerate() {
            assert_eq!(char_to_nibble(c), Some(i as u8));
        }
    }

    #[test]
    fn test_char_to_nibble_case_insensitive() {
        assert_eq!(char_to_nibble(b'a'), Some(10));
        assert_eq!(char_to_nibble(b'A'), Some(10));
        assert_eq!(char_to_nibble(b'f'), Some(15));
        assert_eq!(char_to_nibble(b'F'), Some(15));
    }

    #[test]
    fn test_char_to_nibble_rejects_non_hex() {
        for c in [b'g', b'G', b'-', b' ', b'\r', b'\n', b'/', b':', b'@', b'`', 0, 0xff] {
            assert_eq!(char_to_nibble(c), None, "char {:#04x}", c);
        }
    }

    #[test]
    fn test_nibble_to_char() {
        assert_eq!(nibble_to_char(0), b'0');
        assert_eq!(nibble_to_char(9), b'9');
        assert_eq!(nibble_to_char(10), b'a');
        assert_eq!(nibble_to_char(15), b'f');
    }

    #[test]
    fn test_nibble_table_inverts_char_to_nibble() {
        for n in 0..16u8 {
            assert_eq!(char_to_nibble(nibble_to_char(n)), Some(n));
        }
    }

    #[test]
    fn test_alloc_error_converts() {
        let e: DecodeError = AllocError { requested: 32 }.into();
        assert_eq!(e, DecodeError::MemoryExhausted { requested: 32 });
        assert_eq!(e.to_string(), "out of memory while growing decode buffer by 32 bytes");
    }
}
