//! Set-associative cache simulator library.
//!
//! This crate models a hardware data cache sitting between a CPU-style
//! read/write interface and a backing memory. It provides:
//! 1. **Geometry:** Address decomposition into tag, set index, and block offset.
//! 2. **Cache:** The set/way line store and the read/write access engine
//!    (write-allocate, write-back, random replacement).
//! 3. **Memory seam:** The [`MemoryBackend`] trait for the external backing store.
//! 4. **Statistics:** Hit/miss/replacement counters, cycle count, and reporting.
//!
//! The simulator is single-threaded and synchronous: every access runs to
//! completion, including any dirty write-back and block fill.

/// Cache line store, access engine, and replacement policies.
pub mod cache;
/// Common types (geometry, block addresses, constants, errors).
pub mod common;
/// Simulator configuration (defaults and serde deserialization).
pub mod config;
/// Backing-memory trait implemented by the external collaborator.
pub mod mem;
/// Access statistics collection and reporting.
pub mod stats;

/// Main cache type; holds the line store, replacement policy, and stats.
pub use crate::cache::Cache;
/// Cache geometry configuration; use `CacheConfig::default()` or deserialize from JSON.
pub use crate::config::CacheConfig;
/// Trait for the backing memory the cache fills from and writes back to.
pub use crate::mem::MemoryBackend;
/// Counter snapshot type returned by [`Cache::stats`].
pub use crate::stats::CacheStats;
