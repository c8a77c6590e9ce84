//! Geometry validation errors.
//!
//! Construction is the only fallible operation in the simulator: a geometry
//! that cannot describe a well-formed store must be rejected before any line
//! array is allocated, so a cache is never observable in a partially
//! constructed state. All access-path operations are total.

use thiserror::Error;

/// Error raised when a requested cache geometry cannot be realized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// The total size cannot hold even one block per way.
    #[error(
        "cache of 2^{total_size_bits} bytes cannot hold 2^{associativity_bits} ways \
         of 2^{block_bits}-byte blocks"
    )]
    TooSmall {
        /// Requested log2 of the total data size in bytes.
        total_size_bits: u32,
        /// Requested log2 of the associativity.
        associativity_bits: u32,
        /// Fixed log2 of the block size in bytes.
        block_bits: u32,
    },

    /// The total size reaches the full 64-bit address width, leaving no
    /// addressable backing store (and no representable line array).
    #[error("cache of 2^{total_size_bits} bytes exceeds the 64-bit address space")]
    TooLarge {
        /// Requested log2 of the total data size in bytes.
        total_size_bits: u32,
    },
}
