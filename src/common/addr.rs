//! Address decomposition and block-address types.
//!
//! This module defines the address decoder for the configured cache geometry.
//! It provides the following:
//! 1. **Geometry:** Derived set/way counts and the tag, set, and offset bit masks.
//! 2. **Decomposition:** Splitting a raw address into `(tag, set, offset)`.
//! 3. **Type Safety:** A [`BlockAddr`] newtype so block-aligned backing-memory
//!    addresses cannot be confused with raw CPU addresses.
//!
//! Tags are stored and compared as *masked* values (the untouched high address
//! bits), never as shifted indices. Because the tag, set, and offset fields
//! occupy disjoint bit ranges, a victim's original block address is recovered
//! by OR-ing its stored tag with the shifted set index.

use crate::common::constants::BLOCK_BITS;
use crate::common::error::GeometryError;

/// A block-aligned address in the backing memory's address space.
///
/// The low [`BLOCK_BITS`] bits of a block address are always zero. Backing
/// memory reads and writes are addressed exclusively through this type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BlockAddr(pub u64);

impl BlockAddr {
    /// Returns the raw 64-bit block-aligned address value.
    #[inline(always)]
    pub fn val(&self) -> u64 {
        self.0
    }
}

/// A raw address decomposed against a [`Geometry`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineAddr {
    /// High address bits above the set and offset fields, stored masked
    /// (not shifted).
    pub tag: u64,
    /// Index of the set this address maps to.
    pub set: usize,
    /// Byte offset within the 64-byte block.
    pub offset: usize,
}

/// Derived cache geometry: set/way counts and address field masks.
///
/// Computed once at initialization and immutable afterward. The three masks
/// are pairwise disjoint and together cover the full 64-bit address width
/// exactly once.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Geometry {
    sets: usize,
    ways: usize,
    offset_mask: u64,
    set_mask: u64,
    tag_mask: u64,
}

impl Geometry {
    /// Derives the geometry for a cache of `2^total_size_bits` bytes with
    /// `2^associativity_bits` ways and fixed 64-byte blocks.
    ///
    /// For example, `Geometry::new(14, 2)` describes a 16 KiB, 4-way cache
    /// with 64 sets.
    ///
    /// # Arguments
    ///
    /// * `total_size_bits` - log2 of the total data size in bytes.
    /// * `associativity_bits` - log2 of the number of ways per set.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::TooSmall`] when the total size cannot hold one
    /// block per way, and [`GeometryError::TooLarge`] when the total size
    /// reaches the full 64-bit address width.
    pub fn new(total_size_bits: u32, associativity_bits: u32) -> Result<Self, GeometryError> {
        if total_size_bits >= u64::BITS {
            return Err(GeometryError::TooLarge { total_size_bits });
        }
        let set_count_bits = total_size_bits
            .checked_sub(associativity_bits)
            .and_then(|bits| bits.checked_sub(BLOCK_BITS))
            .ok_or(GeometryError::TooSmall {
                total_size_bits,
                associativity_bits,
                block_bits: BLOCK_BITS,
            })?;

        let offset_mask = (1u64 << BLOCK_BITS) - 1;
        let set_mask = ((1u64 << set_count_bits) - 1) << BLOCK_BITS;
        let tag_mask = !(offset_mask | set_mask);

        Ok(Self {
            sets: 1 << set_count_bits,
            ways: 1 << associativity_bits,
            offset_mask,
            set_mask,
            tag_mask,
        })
    }

    /// Splits a raw address into its tag, set index, and block offset.
    ///
    /// Pure function of the address and this geometry; no side effects.
    /// Word-aligned access is assumed at the call site: the returned offset
    /// must leave room for a 4-byte access within the block.
    #[inline]
    pub fn decode(&self, addr: u64) -> LineAddr {
        LineAddr {
            tag: addr & self.tag_mask,
            set: ((addr & self.set_mask) >> BLOCK_BITS) as usize,
            offset: (addr & self.offset_mask) as usize,
        }
    }

    /// Returns the block-aligned address of the block containing `addr`.
    #[inline]
    pub fn block_of(&self, addr: u64) -> BlockAddr {
        BlockAddr(addr & !self.offset_mask)
    }

    /// Reconstructs a block address from a stored tag and a set index.
    ///
    /// Used when writing back a dirty victim: the stored (masked) tag and the
    /// current set index together uniquely determine the original block
    /// address. Tag and set bits occupy disjoint ranges, so OR is exact here.
    #[inline]
    pub fn block_of_parts(&self, tag: u64, set: usize) -> BlockAddr {
        BlockAddr(tag | ((set as u64) << BLOCK_BITS))
    }

    /// Number of sets in the cache.
    #[inline(always)]
    pub fn sets(&self) -> usize {
        self.sets
    }

    /// Number of ways per set (associativity).
    #[inline(always)]
    pub fn ways(&self) -> usize {
        self.ways
    }

    /// Mask selecting the block-offset bits of an address.
    #[inline(always)]
    pub fn offset_mask(&self) -> u64 {
        self.offset_mask
    }

    /// Mask selecting the set-index bits of an address.
    #[inline(always)]
    pub fn set_mask(&self) -> u64 {
        self.set_mask
    }

    /// Mask selecting the tag bits of an address.
    #[inline(always)]
    pub fn tag_mask(&self) -> u64 {
        self.tag_mask
    }
}
