//! Big Integer Storage
//!
//! Provides the sign + word-array integer representation and the
//! normalization primitives the hex codec relies on.
//! Based on bigint.c
//!
//! Words are stored least-significant first. A value is canonical when its
//! most significant word is non-zero; zero is the empty word array with the
//! sign cleared (there is no negative zero).

use malachite::Integer;

/// Fixed-width storage unit of a [`BigInt`]
pub type Word = u32;

/// Bytes per word
pub const WORD_BYTES: usize = std::mem::size_of::<Word>();

/// Bits per word
pub const WORD_BITS: usize = WORD_BYTES * 8;

/// Arbitrary precision integer stored as sign + little-endian word array
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct BigInt {
    negative: bool,
    words: Vec<Word>,
}

impl BigInt {
    /// Create the canonical zero value
    pub fn zero() -> Self {
        Self::default()
    }

    /// Install a word array as-is
    ///
    /// The result is not normalized; call [`BigInt::normalize`] before
    /// handing it to code that expects canonical form.
    pub fn from_words(negative: bool, words: Vec<Word>) -> Self {
        Self { negative, words }
    }

    /// Build a value from a byte buffer ordered least-significant byte first
    ///
    /// The buffer is consumed. Its length does not need to be a multiple of
    /// [`WORD_BYTES`]; the top word is padded with zero bytes. The word count
    /// is `ceil(bytes.len() / WORD_BYTES)` and the result is not normalized.
    pub fn from_le_bytes(negative: bool, bytes: Vec<u8>) -> Self {
        let words = bytes
            .chunks(WORD_BYTES)
            .map(|chunk| {
                let mut word = [0u8; WORD_BYTES];
                word[..chunk.len()].copy_from_slice(chunk);
                Word::from_le_bytes(word)
            })
            .collect();
        Self { negative, words }
    }

    /// Create from u64
    pub fn from_u64(value: u64) -> Self {
        let mut big = Self::from_words(false, vec![value as Word, (value >> WORD_BITS) as Word]);
        big.normalize();
        big
    }

    /// Create from i64
    pub fn from_i64(value: i64) -> Self {
        let mut big = Self::from_u64(value.unsigned_abs());
        big.set_negative(value < 0);
        big.normalize();
        big
    }

    /// True if the negative flag is set
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Set or clear the negative flag
    pub fn set_negative(&mut self, negative: bool) {
        self.negative = negative;
    }

    /// Word array, least-significant word first
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Number of words in use
    pub fn length_words(&self) -> usize {
        self.words.len()
    }

    /// True if every word is zero (including the empty array)
    pub fn is_zero(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// True if the value satisfies the canonical form invariants
    pub fn is_canonical(&self) -> bool {
        match self.words.last() {
            Some(&top) => top != 0,
            None => !self.negative,
        }
    }

    /// Trim most-significant zero words and fix the sign of zero
    pub fn normalize(&mut self) {
        while let Some(&0) = self.words.last() {
            self.words.pop();
        }
        if self.words.is_empty() {
            self.negative = false;
        }
    }

    /// Shift the magnitude right by `shift` bits in place
    ///
    /// Bits are filled from the top with zeros; the sign is kept unless the
    /// result is zero. The value is normalized afterwards.
    pub fn shift_right_bits(&mut self, shift: usize) {
        let word_shift = shift / WORD_BITS;
        let bit_shift = shift % WORD_BITS;

        if word_shift >= self.words.len() {
            self.words.clear();
            self.normalize();
            return;
        }
        self.words.drain(..word_shift);

        if bit_shift != 0 {
            let len = self.words.len();
            for i in 0..len {
                let carry = match self.words.get(i + 1) {
                    Some(&next) => next << (WORD_BITS - bit_shift),
                    None => 0,
                };
                self.words[i] = (self.words[i] >> bit_shift) | carry;
            }
        }
        self.normalize();
    }
}

impl From<u64> for BigInt {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl From<i64> for BigInt {
    fn from(value: i64) -> Self {
        Self::from_i64(value)
    }
}

impl From<&BigInt> for Integer {
    fn from(big: &BigInt) -> Self {
        let base = Integer::from(1u64 << WORD_BITS);
        let mut value = Integer::from(0);
        for &word in big.words.iter().rev() {
            value = value * &base + Integer::from(word);
        }
        if big.negative {
            -value
        } else {
            value
        }
    }
}

impl From<&Integer> for BigInt {
    fn from(value: &Integer) -> Self {
        let negative = *value < 0;
        let mut v = if negative { -value.clone() } else { value.clone() };
        let base = Integer::from(1u64 << WORD_BITS);
        let zero = Integer::from(0);

        // Remainder is always below 2^WORD_BITS, so it fits in u64
        let mut words = Vec::new();
        while v > zero {
            let remainder = &v % &base;
            words.push(u64::try_from(&remainder).unwrap_or(0) as Word);
            v = &v / &base;
        }

        let mut big = Self::from_words(negative, words);
        big.normalize();
        big
    }
}
