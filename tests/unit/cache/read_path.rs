//! Read Path Unit Tests.
//!
//! Verifies hit detection, miss fills, fill traffic against the backing
//! memory, and read-stream counters.

use super::small_cache;
use crate::common::mocks::memory::MockMemory;

// ══════════════════════════════════════════════════════════
// 1. Cold Miss
// ══════════════════════════════════════════════════════════

/// First access to any address is a compulsory miss: the full block is
/// fetched from memory and the requested word returned from the fresh fill.
#[test]
fn cold_miss_fills_block_and_returns_word() {
    let mut mem = MockMemory::new();
    mem.seed_word(0x1000, 0xAABB_CCDD);
    let mut cache = small_cache();

    let value = cache.read(0x1000, &mut mem);

    assert_eq!(value, 0xAABB_CCDD);
    assert_eq!(mem.reads, vec![0x1000], "exactly one block fill");
    assert!(mem.writes.is_empty(), "no write-back on a clean miss");

    let stats = cache.stats();
    assert_eq!(stats.reads.count, 1);
    assert_eq!(stats.reads.misses, 1);
    assert_eq!(stats.reads.hits, 0);
}

/// A miss costs one cycle (decode only); no hit latency is charged.
#[test]
fn miss_costs_one_cycle() {
    let mut mem = MockMemory::new();
    let mut cache = small_cache();

    let _ = cache.read(0x1000, &mut mem);
    assert_eq!(cache.stats().cycles, 1);
}

// ══════════════════════════════════════════════════════════
// 2. Warm Hit
// ══════════════════════════════════════════════════════════

/// The second access to the same word hits: no further memory traffic, and
/// the hit adds decode + hit latency (two cycles).
#[test]
fn warm_hit_no_memory_traffic() {
    let mut mem = MockMemory::new();
    mem.seed_word(0x1000, 0x1234_5678);
    let mut cache = small_cache();

    let _ = cache.read(0x1000, &mut mem);
    let value = cache.read(0x1000, &mut mem);

    assert_eq!(value, 0x1234_5678);
    assert_eq!(mem.reads.len(), 1, "hit must not touch memory");

    let stats = cache.stats();
    assert_eq!(stats.reads.hits, 1);
    assert_eq!(stats.cycles, 3, "miss (1) + hit (2)");
}

/// A different word inside the same 64-byte block hits and returns that
/// word from the block installed by the first access.
#[test]
fn same_block_different_word_hits() {
    let mut mem = MockMemory::new();
    mem.seed_word(0x1000, 0x1111_1111);
    mem.seed_word(0x1020, 0x2222_2222);
    let mut cache = small_cache();

    let _ = cache.read(0x1000, &mut mem);
    let value = cache.read(0x1020, &mut mem);

    assert_eq!(value, 0x2222_2222);
    assert_eq!(mem.reads.len(), 1, "one fill covers the whole block");
    assert_eq!(cache.stats().reads.hits, 1);
}

// ══════════════════════════════════════════════════════════
// 3. Residency and Free-Way Allocation
// ══════════════════════════════════════════════════════════

/// `contains` mirrors residency without disturbing any counters.
#[test]
fn contains_mirrors_residency() {
    let mut mem = MockMemory::new();
    let mut cache = small_cache();

    assert!(!cache.contains(0x1000));
    let _ = cache.read(0x1000, &mut mem);
    assert!(cache.contains(0x1000));
    assert!(cache.contains(0x103C), "whole block is resident");
    assert!(!cache.contains(0x1040), "next block is not");
    assert_eq!(cache.stats().reads.count, 1, "contains must not count");
}

/// Reads never dirty a line, so filling a set beyond capacity with reads
/// evicts silently — no write-back traffic.
#[test]
fn read_only_traffic_never_writes_back() {
    let mut mem = MockMemory::new();
    let mut cache = small_cache();

    // Set 0 holds two ways; three distinct blocks force an eviction.
    for addr in [0x000, 0x100, 0x200] {
        let _ = cache.read(addr, &mut mem);
    }

    assert!(mem.writes.is_empty());
    assert_eq!(cache.stats().reads.replacements, 0);
}

/// Both ways of a set are usable before any eviction happens.
#[test]
fn free_ways_used_before_eviction() {
    let mut mem = MockMemory::new();
    let mut cache = small_cache();

    let _ = cache.read(0x000, &mut mem);
    let _ = cache.read(0x100, &mut mem);

    assert!(cache.contains(0x000));
    assert!(cache.contains(0x100));
    assert_eq!(mem.reads.len(), 2);
}

// ══════════════════════════════════════════════════════════
// 4. Stream Accounting
// ══════════════════════════════════════════════════════════

/// For any access sequence, hits + misses == total reads.
#[test]
fn hits_plus_misses_equals_count() {
    let mut mem = MockMemory::new();
    let mut cache = small_cache();

    for addr in [0x000, 0x100, 0x000, 0x200, 0x100, 0x040, 0x000] {
        let _ = cache.read(addr, &mut mem);
    }

    let reads = cache.stats().reads;
    assert_eq!(reads.count, 7);
    assert_eq!(reads.hits + reads.misses, reads.count);
}
