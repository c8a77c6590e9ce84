//! Access engine unit tests.

/// Read path: cold miss, warm hit, fill traffic, counters.
pub mod read_path;

use cachesim::{Cache, CacheConfig};

/// Builds a small deterministic test cache: 512 bytes, 64-byte blocks,
/// 2-way set-associative ⇒ 8 lines in 4 sets.
///
/// Set index = bits [7:6] of the address; tag = bits [63:8]. Addresses that
/// are multiples of 0x100 all map to set 0.
pub fn small_cache() -> Cache {
    Cache::new(&CacheConfig::new(9, 1)).unwrap()
}

/// Builds the reference cache: 16 KiB, 4-way, 64 sets.
///
/// Addresses that are multiples of 0x1000 all map to set 0.
pub fn reference_cache() -> Cache {
    Cache::new(&CacheConfig::new(14, 2)).unwrap()
}
