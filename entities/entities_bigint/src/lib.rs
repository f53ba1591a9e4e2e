//! Entities Layer: Big Integers
//!
//! Provides the word-array big integer used by the hex codec:
//! - Sign + little-endian word storage
//! - Normalization (canonical zero/sign, leading zero word trimming)
//! - In-place right shift by bits
//! - Conversion to and from malachite `Integer`
//!
//! Based on bigint.c

pub mod big;

pub use big::{BigInt, Word, WORD_BITS, WORD_BYTES};
