//! Bit-packed cell storage.
//! Each cell is stored as a single bit inside a `u32` block, so a renderer
//! can test 32 cells with one load instead of 32 function calls.

use thiserror::Error;

/// Width of one storage block in bits
pub const BLOCK_BITS: usize = u32::BITS as usize;

/// Errors raised by [`BitGrid`] operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("bit grid size must be positive")]
    InvalidSize,
    #[error("index {index} out of range for {bit_count} bits")]
    IndexOutOfRange { index: usize, bit_count: usize },
}

/// Supplier of random storage blocks.
///
/// Any `rand::RngCore` qualifies, which lets tests inject a seeded
/// generator while the badge uses the thread RNG.
pub trait BlockSource {
    fn next_block(&mut self) -> u32;
}

impl<R: rand::RngCore + ?Sized> BlockSource for R {
    #[inline]
    fn next_block(&mut self) -> u32 {
        self.next_u32()
    }
}

/// Fixed-size packed bit container
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BitGrid {
    bit_count: usize,
    blocks: Vec<u32>,
}

impl BitGrid {
    /// Create a grid holding `bit_count` bits, all cleared
    pub fn new(bit_count: usize) -> Result<Self, GridError> {
        if bit_count == 0 {
            return Err(GridError::InvalidSize);
        }
        let block_count = bit_count.div_ceil(BLOCK_BITS);
        Ok(Self {
            bit_count,
            blocks: vec![0; block_count],
        })
    }

    /// Number of addressable bits
    pub fn bit_count(&self) -> usize {
        self.bit_count
    }

    /// Number of storage blocks
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    #[inline]
    fn check(&self, index: usize) -> Result<(), GridError> {
        if index < self.bit_count {
            Ok(())
        } else {
            Err(GridError::IndexOutOfRange {
                index,
                bit_count: self.bit_count,
            })
        }
    }

    /// Get bit state at `index`
    #[inline]
    pub fn test(&self, index: usize) -> Result<bool, GridError> {
        self.check(index)?;
        Ok(self.test_unchecked(index))
    }

    /// Read a bit whose index the caller has already derived in range.
    #[inline]
    pub(crate) fn test_unchecked(&self, index: usize) -> bool {
        (self.blocks[index / BLOCK_BITS] >> (index % BLOCK_BITS)) & 1 == 1
    }

    /// Set bit at `index`
    #[inline]
    pub fn set(&mut self, index: usize) -> Result<(), GridError> {
        self.check(index)?;
        self.blocks[index / BLOCK_BITS] |= 1u32 << (index % BLOCK_BITS);
        Ok(())
    }

    /// Clear bit at `index`
    #[inline]
    pub fn clear(&mut self, index: usize) -> Result<(), GridError> {
        self.check(index)?;
        self.blocks[index / BLOCK_BITS] &= !(1u32 << (index % BLOCK_BITS));
        Ok(())
    }

    /// Set or clear bit at `index`
    pub fn assign(&mut self, index: usize, alive: bool) -> Result<(), GridError> {
        if alive { self.set(index) } else { self.clear(index) }
    }

    /// Clear every bit
    pub fn clear_all(&mut self) {
        self.blocks.iter_mut().for_each(|b| *b = 0);
    }

    /// Overwrite every block with bits from `source`.
    /// Padding bits past `bit_count` stay zero.
    pub fn randomize<S: BlockSource + ?Sized>(&mut self, source: &mut S) {
        for block in &mut self.blocks {
            *block = source.next_block();
        }
        self.mask_padding();
    }

    /// XOR-fold of every block, in block order.
    ///
    /// This is an equality witness only. Distinct grids can fold to the same
    /// value (two flips at the same bit position in different blocks cancel),
    /// so callers treat matches as "probably repeated", never as proof.
    pub fn hash(&self) -> u32 {
        self.blocks.iter().fold(0, |acc, b| acc ^ b)
    }

    /// Raw block at `block_index`, for bulk readers
    #[inline]
    pub fn block_at(&self, block_index: usize) -> Result<u32, GridError> {
        self.blocks
            .get(block_index)
            .copied()
            .ok_or(GridError::IndexOutOfRange {
                index: block_index,
                bit_count: self.bit_count,
            })
    }

    /// All blocks as a read-only slice
    pub fn blocks(&self) -> &[u32] {
        &self.blocks
    }

    pub(crate) fn blocks_mut(&mut self) -> &mut [u32] {
        &mut self.blocks
    }

    /// Count set bits
    pub fn count_alive(&self) -> usize {
        self.blocks.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Total memory usage in bytes
    pub fn memory_bytes(&self) -> usize {
        self.blocks.len() * std::mem::size_of::<u32>()
    }

    /// Mask that keeps only the real cells of the final block
    pub(crate) fn tail_mask(&self) -> u32 {
        match self.bit_count % BLOCK_BITS {
            0 => u32::MAX,
            used => (1u32 << used) - 1,
        }
    }

    fn mask_padding(&mut self) {
        let mask = self.tail_mask();
        if let Some(last) = self.blocks.last_mut() {
            *last &= mask;
        }
    }
}
