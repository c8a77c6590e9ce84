//! Common types shared across the simulator.
//!
//! This module collects the pieces that both the cache engine and its callers
//! depend on:
//! 1. **Constants:** Fixed block and word geometry.
//! 2. **Addresses:** Tag/set/offset decomposition and the block-address newtype.
//! 3. **Errors:** Geometry validation failures raised at construction time.

/// Address decomposition (geometry, masks, block addresses).
pub mod addr;
/// Fixed geometry constants (block width, word width).
pub mod constants;
/// Geometry validation errors.
pub mod error;
