//! Fixed geometry constants.
//!
//! The block size is a fixed design constant: every cache line holds 64 bytes,
//! and the access granularity at the CPU interface is a 4-byte word. Total
//! size and associativity are configured at runtime; see [`crate::config`].

/// log2 of the cache block size in bytes (6 → 64-byte blocks).
pub const BLOCK_BITS: u32 = 6;

/// Cache block size in bytes.
pub const BLOCK_BYTES: usize = 1 << BLOCK_BITS;

/// Width of a single CPU access in bytes (one 32-bit word).
pub const WORD_BYTES: usize = 4;
