//! Hex Decoder Module
//!
//! Reads a hex literal from a blocking, echoing character source into a
//! big integer.
//! Based on bigint_read_hex_echo in bigint_io.c
//!
//! Accepted input is `'-'? [0-9a-fA-F]+`. The first non-digit ends the
//! literal; a terminator before any digit cancels. The sign is only
//! recognized as the very first character of a call.
//!
//! Digits arrive most-significant first and are collected two per byte into
//! a [`DecodeBuffer`]. When input stops the buffer is reversed so the least
//! significant byte comes first and then becomes the word array. An odd
//! digit count leaves the last digit in the high nibble of the final byte,
//! which is corrected with a 4-bit right shift.

use crate::byte_reader::{read_byte, ByteRead};
use crate::common::{DecodeError, OUT_OF_MEMORY_MESSAGE};
use crate::decode_buffer::{ChunkAllocator, DecodeBuffer, SystemAllocator, DEFAULT_CHUNK_BYTES};
use entities_bigint::BigInt;
use entities_io_operations::EchoSource;
use tracing::{debug, warn};

/// Outcome of a decode call that did not fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeStatus {
    /// A value was read and installed in the target
    Success,
    /// Input ended before any digit; the target is left empty
    Cancelled,
}

/// Hex literal decoder
pub struct HexDecoder<A = SystemAllocator> {
    allocator: A,
    chunk_bytes: usize,
    last_growths: usize,
}

impl HexDecoder<SystemAllocator> {
    /// Create a decoder using the global heap
    pub fn new() -> Self {
        Self::with_allocator(SystemAllocator)
    }
}

impl Default for HexDecoder<SystemAllocator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: ChunkAllocator> HexDecoder<A> {
    /// Create a decoder drawing buffer capacity from `allocator`
    pub fn with_allocator(allocator: A) -> Self {
        Self {
            allocator,
            chunk_bytes: DEFAULT_CHUNK_BYTES,
            last_growths: 0,
        }
    }

    /// Set the number of bytes added per buffer growth (minimum 1)
    pub fn with_chunk_bytes(mut self, chunk_bytes: usize) -> Self {
        self.chunk_bytes = chunk_bytes.max(1);
        self
    }

    /// Bytes added per buffer growth
    pub fn chunk_bytes(&self) -> usize {
        self.chunk_bytes
    }

    /// The allocator in use
    pub fn allocator(&self) -> &A {
        &self.allocator
    }

    /// Buffer growth steps taken by the most recent call
    pub fn last_growths(&self) -> usize {
        self.last_growths
    }

    /// Read a hex literal from `io` into `target`
    ///
    /// `target` is reset to zero first and only receives a value on
    /// [`DecodeStatus::Success`]. On [`DecodeError::MemoryExhausted`] a
    /// diagnostic is written to `io`, the partial buffer is released and
    /// `target` stays zero.
    pub fn read_hex_echo<T: EchoSource + ?Sized>(
        &mut self,
        io: &mut T,
        target: &mut BigInt,
    ) -> Result<DecodeStatus, DecodeError> {
        *target = BigInt::zero();
        self.last_growths = 0;

        let mut buf = DecodeBuffer::new(&mut self.allocator, self.chunk_bytes);
        let mut negative = false;
        let mut pending_half_byte = false;
        let mut first_char = true;

        loop {
            if let Err(e) = buf.ensure_slot() {
                warn!(bytes = buf.len(), "decode aborted: {}", e);
                self.last_growths = buf.growths();
                io.write_str(OUT_OF_MEMORY_MESSAGE);
                return Err(e.into());
            }

            let read = read_byte(io, first_char);
            first_char = false;
            match read {
                ByteRead::Minus => negative = true,
                ByteRead::Byte(b) => buf.push(b),
                ByteRead::OddTerminator(nibble) => {
                    buf.push(nibble << 4);
                    pending_half_byte = true;
                    break;
                }
                ByteRead::Terminator if buf.is_empty() => {
                    self.last_growths = buf.growths();
                    debug!(negative, "decode cancelled before any digit");
                    return Ok(DecodeStatus::Cancelled);
                }
                ByteRead::Terminator => break,
            }
        }

        self.last_growths = buf.growths();
        buf.reverse();
        let bytes = buf.len();
        let mut value = BigInt::from_le_bytes(negative, buf.into_bytes());
        value.normalize();
        if pending_half_byte {
            value.shift_right_bits(4);
        }
        if value.is_zero() {
            value = BigInt::zero();
        }

        debug!(
            bytes,
            words = value.length_words(),
            odd = pending_half_byte,
            growths = self.last_growths,
            "decoded hex value"
        );
        *target = value;
        Ok(DecodeStatus::Success)
    }

    /// Read a hex literal and return it, `None` if the user cancelled
    pub fn decode_value<T: EchoSource + ?Sized>(
        &mut self,
        io: &mut T,
    ) -> Result<Option<BigInt>, DecodeError> {
        let mut value = BigInt::zero();
        match self.read_hex_echo(io, &mut value)? {
            DecodeStatus::Success => Ok(Some(value)),
            DecodeStatus::Cancelled => Ok(None),
        }
    }
}
