//! Infrastructure Layer: Hex Encoding
//!
//! Provides hexadecimal text encoding and decoding of word-array big integers
//! over a character terminal.
//!
//! ## Overview
//!
//! The `infrastructure_hex_encoding` crate is part of the infrastructure layer in
//! the CLEAN architecture implementation. It lets a big integer library exchange
//! values (RSA parameters, test vectors) with a human at a terminal.
//!
//! ## Codecs
//!
//! - **[`hex_encoder`](hex_encoder/index.html)**: Renders a canonical `BigInt` as
//!   lowercase hex, most-significant digit first.
//!
//! - **[`hex_decoder`](hex_decoder/index.html)**: Reads an optionally signed hex
//!   literal of any length from a blocking, echoing source.
//!
//! ## Architecture
//!
//! This crate is based on the C implementation in `bigint_io.c`.
//! It depends on the Entities layer for the integer type and the I/O contracts.
//!
//! ## See Also
//!
//! - [`entities_bigint`](../../entities/entities_bigint/index.html): BigInt type and normalization
//! - [`entities_io_operations`](../../entities/entities_io_operations/index.html): CharSink and EchoSource

mod common;

pub mod byte_reader;
pub mod decode_buffer;
pub mod hex_decoder;
pub mod hex_encoder;

pub use hex_decoder::{DecodeStatus, HexDecoder};
pub use hex_encoder::HexEncoder;
pub use decode_buffer::{ChunkAllocator, DecodeBuffer, SystemAllocator, DEFAULT_CHUNK_BYTES};

// Re-export error types for convenience
pub use common::{AllocError, DecodeError};

// Re-export nibble helpers
pub use common::{char_to_nibble, nibble_to_char, HEXDIGIT_TAB_LC, OUT_OF_MEMORY_MESSAGE};
