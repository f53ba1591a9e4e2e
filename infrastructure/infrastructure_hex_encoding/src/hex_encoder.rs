//! Hex Encoder Module
//!
//! Renders a big integer as hexadecimal text.
//! Based on bigint_print_hex in bigint_io.c
//!
//! Output is lowercase, most-significant digit first, with leading zero
//! digits suppressed. Zero prints as `0` and negative values get a `-`
//! prefix.

use crate::common::nibble_to_char;
use entities_bigint::BigInt;
use entities_io_operations::CharSink;

/// Hex text encoder
pub struct HexEncoder;

impl HexEncoder {
    /// Write `value` as hex text to `out`
    ///
    /// `value` is expected in canonical form. A non-canonical value with
    /// all-zero words prints only its sign.
    pub fn encode<S: CharSink + ?Sized>(value: &BigInt, out: &mut S) {
        if value.length_words() == 0 {
            out.write_char(b'0');
            return;
        }
        if value.is_negative() {
            out.write_char(b'-');
        }

        let mut print_zero = false;
        for word in value.words().iter().rev() {
            for byte in word.to_be_bytes() {
                for nibble in [byte >> 4, byte & 0x0f] {
                    if nibble != 0 {
                        print_zero = true;
                    }
                    if print_zero {
                        out.write_char(nibble_to_char(nibble));
                    }
                }
            }
        }
    }

    /// Encode `value` into a new string
    pub fn to_hex_string(value: &BigInt) -> String {
        let mut s = String::with_capacity(value.length_words() * entities_bigint::WORD_BYTES * 2 + 1);
        Self::encode(value, &mut s);
        s
    }
}
