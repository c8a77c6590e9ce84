//! Backing-memory trait for block fills and write-backs.
//!
//! The backing store itself is an external collaborator; the simulator only
//! depends on this seam. Both operations are synchronous and total: a read
//! always yields a full block and a write always accepts one. No error
//! channel is modeled. The cache invokes the backend at most twice per
//! access (one dirty write-back, one fill).

use crate::common::addr::BlockAddr;
use crate::common::constants::BLOCK_BYTES;

/// Trait for the backing memory behind the cache.
///
/// Addresses are always block-aligned ([`BlockAddr`]); transfers are always
/// whole 64-byte blocks.
pub trait MemoryBackend {
    /// Reads the full block at the given block-aligned address.
    ///
    /// # Arguments
    ///
    /// * `block` - Block-aligned address to read.
    ///
    /// # Returns
    ///
    /// The 64 bytes held by memory at that block.
    fn read_block(&mut self, block: BlockAddr) -> [u8; BLOCK_BYTES];

    /// Writes a full block at the given block-aligned address.
    ///
    /// # Arguments
    ///
    /// * `block` - Block-aligned address to write.
    /// * `data` - The 64 bytes to store.
    fn write_block(&mut self, block: BlockAddr, data: &[u8; BLOCK_BYTES]);
}
