//! Byte Reader Module
//!
//! Reads one logical input byte (two hex digits) from an echoing source.
//! Based on read_byte in bigint_io.c

use crate::common::char_to_nibble;
use entities_io_operations::EchoSource;

/// Result of reading one byte position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteRead {
    /// Two hex digits, first digit in the high nibble
    Byte(u8),
    /// A `-` arrived as the first character and a sign was acceptable
    Minus,
    /// A non-digit arrived before any digit of this byte
    Terminator,
    /// A non-digit arrived after exactly one digit; carries that digit's value
    OddTerminator(u8),
}

/// Read one byte position from `io`
///
/// `sign_allowed` controls whether a leading `-` is reported as
/// [`ByteRead::Minus`]; otherwise it is just another non-digit. A `-` in
/// second position is always a non-digit. An exhausted source counts as a
/// non-digit.
pub fn read_byte<T: EchoSource + ?Sized>(io: &mut T, sign_allowed: bool) -> ByteRead {
    let first = io.read_char_echoed();
    if sign_allowed && first == Some(b'-') {
        return ByteRead::Minus;
    }
    let Some(high) = first.and_then(char_to_nibble) else {
        return ByteRead::Terminator;
    };
    match io.read_char_echoed().and_then(char_to_nibble) {
        Some(low) => ByteRead::Byte(high << 4 | low),
        None => ByteRead::OddTerminator(high),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adapters_io_operations::ScriptedTerminal;

    #[test]
    fn test_full_byte() {
        let mut io = ScriptedTerminal::new("1A");
        assert_eq!(read_byte(&mut io, true), ByteRead::Byte(0x1a));
        assert_eq!(io.output(), "1A");
    }

    #[test]
    fn test_minus() {
        let mut io = ScriptedTerminal::new("-1");
        assert_eq!(read_byte(&mut io, true), ByteRead::Minus);
        assert_eq!(io.remaining_input(), "1");
    }

    #[test]
    fn test_minus_not_allowed_terminates() {
        let mut io = ScriptedTerminal::new("-1");
        assert_eq!(read_byte(&mut io, false), ByteRead::Terminator);
    }

    #[test]
    fn test_terminator_consumes_one_char() {
        let mut io = ScriptedTerminal::new("\rff");
        assert_eq!(read_byte(&mut io, true), ByteRead::Terminator);
        assert_eq!(io.remaining_input(), "ff");
    }

    #[test]
    fn test_odd_terminator() {
        let mut io = ScriptedTerminal::new("c\r");
        assert_eq!(read_byte(&mut io, true), ByteRead::OddTerminator(0xc));
        assert_eq!(io.reads(), 2);
    }

    #[test]
    fn test_minus_in_second_position_is_odd_terminator() {
        let mut io = ScriptedTerminal::new("7-");
        assert_eq!(read_byte(&mut io, true), ByteRead::OddTerminator(7));
    }

    #[test]
    fn test_exhausted_source() {
        let mut io = ScriptedTerminal::new("");
        assert_eq!(read_byte(&mut io, true), ByteRead::Terminator);

        let mut io = ScriptedTerminal::new("e");
        assert_eq!(read_byte(&mut io, true), ByteRead::OddTerminator(0xe));
    }
}
