//! Decode Buffer Module
//!
//! Growable byte buffer used while a hex literal is being typed. Capacity is
//! added in fixed chunks through a [`ChunkAllocator`], so growth happens at
//! predictable byte counts and allocation failure can be reported instead of
//! aborting.

use crate::common::AllocError;
use tracing::trace;

/// Bytes added to the decode buffer per growth step
pub const DEFAULT_CHUNK_BYTES: usize = 32;

/// Source of additional buffer capacity
pub trait ChunkAllocator {
    /// Reserve room for at least `additional` more bytes in `buf`
    fn grow(&mut self, buf: &mut Vec<u8>, additional: usize) -> Result<(), AllocError>;
}

/// Allocator backed by the global heap
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemAllocator;

impl ChunkAllocator for SystemAllocator {
    fn grow(&mut self, buf: &mut Vec<u8>, additional: usize) -> Result<(), AllocError> {
        buf.try_reserve_exact(additional)
            .map_err(|_| AllocError { requested: additional })
    }
}

/// Byte buffer grown in fixed chunks
pub struct DecodeBuffer<'a, A: ChunkAllocator + ?Sized> {
    bytes: Vec<u8>,
    allocated: usize,
    chunk_bytes: usize,
    growths: usize,
    allocator: &'a mut A,
}

impl<'a, A: ChunkAllocator + ?Sized> DecodeBuffer<'a, A> {
    /// Create an empty buffer with no capacity
    ///
    /// `chunk_bytes` of zero is treated as one.
    pub fn new(allocator: &'a mut A, chunk_bytes: usize) -> Self {
        Self {
            bytes: Vec::new(),
            allocated: 0,
            chunk_bytes: chunk_bytes.max(1),
            growths: 0,
            allocator,
        }
    }

    /// Make sure one more byte can be pushed, growing by a chunk if full
    pub fn ensure_slot(&mut self) -> Result<(), AllocError> {
        if self.allocated > self.bytes.len() {
            return Ok(());
        }
        self.allocator.grow(&mut self.bytes, self.chunk_bytes)?;
        self.allocated += self.chunk_bytes;
        self.growths += 1;
        trace!(
            allocated = self.allocated,
            growths = self.growths,
            "decode buffer grown"
        );
        Ok(())
    }

    /// Append a byte
    ///
    /// Callers reserve the slot with [`DecodeBuffer::ensure_slot`] first.
    pub fn push(&mut self, byte: u8) {
        debug_assert!(self.bytes.len() < self.allocated, "push without reserved slot");
        self.bytes.push(byte);
    }

    /// Bytes appended so far
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// True if nothing was appended
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Logical capacity in bytes
    pub fn allocated(&self) -> usize {
        self.allocated
    }

    /// Number of growth steps taken
    pub fn growths(&self) -> usize {
        self.growths
    }

    /// Reverse the byte order in place
    pub fn reverse(&mut self) {
        self.bytes.reverse();
    }

    /// Contents as a slice
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    /// Give up ownership of the bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}
