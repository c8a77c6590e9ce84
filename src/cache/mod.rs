//! Set-associative cache store and access engine.
//!
//! This module implements the simulated cache itself. It provides:
//! 1. **Line store:** The `set_count × associativity` array of tagged lines,
//!    each carrying 64 bytes of data and an Invalid/Valid/Dirty state.
//! 2. **Access engine:** `read` and `write` as state transitions over the
//!    store, with write-allocate and write-back semantics.
//! 3. **Replacement seam:** Victim selection delegated to a pluggable
//!    [`ReplacementPolicy`] (random by default).
//!
//! Lines start Invalid, become Valid on a miss fill, and Dirty on any write.
//! There is no invalidation operation: a line only ever leaves the store by
//! being overwritten, and a Dirty line is written back to memory first.

/// Cache replacement policy implementations.
pub mod policies;

use std::fmt;

use tracing::{debug, trace};

use self::policies::{RandomPolicy, ReplacementPolicy};
use crate::common::addr::{Geometry, LineAddr};
use crate::common::constants::{BLOCK_BYTES, WORD_BYTES};
use crate::common::error::GeometryError;
use crate::config::CacheConfig;
use crate::mem::MemoryBackend;
use crate::stats::CacheStats;

/// Lifecycle state of a cache line. Dirty implies the line holds a
/// fully-formed block (a line is never dirty-but-invalid).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LineState {
    /// Never filled since initialization.
    Invalid,
    /// Holds a block identical to backing memory.
    Valid,
    /// Holds a block modified since its fill; must be written back on eviction.
    Dirty,
}

/// One cache line: tag, state, and a full block of data.
#[derive(Clone)]
struct CacheLine {
    tag: u64,
    state: LineState,
    data: [u8; BLOCK_BYTES],
}

impl CacheLine {
    const INVALID: Self = Self {
        tag: 0,
        state: LineState::Invalid,
        data: [0; BLOCK_BYTES],
    };
}

/// Simulated set-associative cache with write-allocate and write-back
/// semantics.
///
/// The cache owns its line store and statistics for its entire lifetime;
/// the backing memory is passed in per access. Multiple independent
/// instances can coexist.
pub struct Cache {
    geometry: Geometry,
    lines: Vec<CacheLine>,
    policy: Box<dyn ReplacementPolicy>,
    stats: CacheStats,
}

impl Cache {
    /// Creates a cache with the configured geometry and random replacement.
    ///
    /// All lines start Invalid.
    ///
    /// # Arguments
    ///
    /// * `config` - Geometry configuration (log2 total size and associativity).
    ///
    /// # Errors
    ///
    /// Returns a [`GeometryError`] when the configuration cannot describe a
    /// well-formed store; nothing is allocated in that case.
    pub fn new(config: &CacheConfig) -> Result<Self, GeometryError> {
        let geometry = Geometry::new(config.total_size_bits, config.associativity_bits)?;
        let policy = Box::new(RandomPolicy::new(geometry.sets(), geometry.ways()));
        Ok(Self::build(geometry, policy))
    }

    /// Creates a cache with an explicit replacement policy.
    ///
    /// The policy's victim indices must stay within the configured
    /// associativity.
    ///
    /// # Arguments
    ///
    /// * `config` - Geometry configuration.
    /// * `policy` - Replacement policy consulted when a set is full.
    ///
    /// # Errors
    ///
    /// Returns a [`GeometryError`] when the configuration is invalid.
    pub fn with_policy(
        config: &CacheConfig,
        policy: Box<dyn ReplacementPolicy>,
    ) -> Result<Self, GeometryError> {
        let geometry = Geometry::new(config.total_size_bits, config.associativity_bits)?;
        Ok(Self::build(geometry, policy))
    }

    fn build(geometry: Geometry, policy: Box<dyn ReplacementPolicy>) -> Self {
        Self {
            lines: vec![CacheLine::INVALID; geometry.sets() * geometry.ways()],
            geometry,
            policy,
            stats: CacheStats::default(),
        }
    }

    /// Reads the 4-byte word at `addr`.
    ///
    /// On a hit the word comes from the resident line. On a miss the full
    /// block is first installed from memory (evicting a random victim and
    /// writing it back if Dirty), so the returned word is never partial or
    /// uninitialized.
    ///
    /// # Arguments
    ///
    /// * `addr` - Word-aligned address to read.
    /// * `mem` - Backing memory for write-back and fill.
    ///
    /// # Returns
    ///
    /// The 4 bytes at `addr`, assembled little-endian.
    ///
    /// # Panics
    ///
    /// Panics if the 4-byte access at `addr` would cross a block boundary
    /// (`offset > block_size - 4`); such an address is a caller contract
    /// violation and is not modeled.
    pub fn read(&mut self, addr: u64, mem: &mut dyn MemoryBackend) -> u32 {
        self.stats.cycles += 1;
        self.stats.reads.count += 1;
        let at = self.geometry.decode(addr);

        if let Some(way) = self.lookup(at.set, at.tag) {
            self.stats.reads.hits += 1;
            self.stats.cycles += 1;
            self.policy.update(at.set, way);
            return self.word(at.set, way, at.offset);
        }

        self.stats.reads.misses += 1;
        let (way, wrote_back) = self.fill(&at, mem);
        if wrote_back {
            self.stats.reads.replacements += 1;
        }
        self.word(at.set, way, at.offset)
    }

    /// Writes the 4-byte word at `addr` under a bit mask.
    ///
    /// Only the bit positions set in `wmask` are overwritten:
    /// `new = (data & wmask) | (old & !wmask)`. A mask of `0x0000_00FF`, for
    /// example, updates only the low byte. On a miss the full block is
    /// fetched first (write-allocate), so bytes outside the mask keep the
    /// values memory held. The line is Dirty after every write.
    ///
    /// # Arguments
    ///
    /// * `addr` - Word-aligned address to write.
    /// * `data` - Incoming 4-byte word.
    /// * `wmask` - Bit mask selecting which positions of the word to update.
    /// * `mem` - Backing memory for write-back and fill.
    ///
    /// # Panics
    ///
    /// Panics if the 4-byte access at `addr` would cross a block boundary;
    /// see [`Cache::read`].
    pub fn write(&mut self, addr: u64, data: u32, wmask: u32, mem: &mut dyn MemoryBackend) {
        self.stats.cycles += 1;
        self.stats.writes.count += 1;
        let at = self.geometry.decode(addr);

        if let Some(way) = self.lookup(at.set, at.tag) {
            self.stats.writes.hits += 1;
            self.stats.cycles += 1;
            self.policy.update(at.set, way);
            self.merge_word(at.set, way, at.offset, data, wmask);
            return;
        }

        self.stats.writes.misses += 1;
        let (way, wrote_back) = self.fill(&at, mem);
        if wrote_back {
            self.stats.writes.replacements += 1;
        }
        self.merge_word(at.set, way, at.offset, data, wmask);
    }

    /// Returns whether the block containing `addr` is resident.
    ///
    /// Read-only probe; no counter or policy state changes.
    pub fn contains(&self, addr: u64) -> bool {
        let at = self.geometry.decode(addr);
        self.lookup(at.set, at.tag).is_some()
    }

    /// Returns a read-only snapshot of the access counters.
    pub const fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Returns the derived geometry of this cache.
    pub const fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Scans the set for a non-Invalid line with the given tag.
    ///
    /// Tags of valid lines within one set are pairwise distinct by
    /// construction, so at most one way can match.
    fn lookup(&self, set: usize, tag: u64) -> Option<usize> {
        (0..self.geometry.ways())
            .find(|&way| {
                let line = self.line(set, way);
                line.state != LineState::Invalid && line.tag == tag
            })
    }

    /// Returns the lowest-index Invalid way in the set, if any.
    fn free_way(&self, set: usize) -> Option<usize> {
        (0..self.geometry.ways()).find(|&way| self.line(set, way).state == LineState::Invalid)
    }

    /// Installs the block for `at` into the set and marks it Valid.
    ///
    /// Prefers a free way; otherwise asks the policy for a victim and writes
    /// it back to memory first when Dirty. Returns the chosen way and
    /// whether a dirty victim was written back.
    fn fill(&mut self, at: &LineAddr, mem: &mut dyn MemoryBackend) -> (usize, bool) {
        let (way, wrote_back) = match self.free_way(at.set) {
            Some(way) => (way, false),
            None => {
                let victim = self.policy.get_victim(at.set);
                let line = self.line(at.set, victim);
                let dirty = line.state == LineState::Dirty;
                if dirty {
                    let block = self.geometry.block_of_parts(line.tag, at.set);
                    debug!(block = block.val(), set = at.set, way = victim, "dirty write-back");
                    mem.write_block(block, &line.data);
                }
                (victim, dirty)
            }
        };

        let block = self.geometry.block_of_parts(at.tag, at.set);
        let data = mem.read_block(block);
        trace!(block = block.val(), set = at.set, way, "block fill");

        let line = self.line_mut(at.set, way);
        line.data = data;
        line.tag = at.tag;
        line.state = LineState::Valid;
        self.policy.update(at.set, way);
        (way, wrote_back)
    }

    /// Reads the little-endian word at `offset` within a line.
    fn word(&self, set: usize, way: usize, offset: usize) -> u32 {
        let mut bytes = [0u8; WORD_BYTES];
        bytes.copy_from_slice(&self.line(set, way).data[offset..offset + WORD_BYTES]);
        u32::from_le_bytes(bytes)
    }

    /// Applies the masked update to the word at `offset` and dirties the line.
    fn merge_word(&mut self, set: usize, way: usize, offset: usize, data: u32, wmask: u32) {
        let old = self.word(set, way, offset);
        let merged = (data & wmask) | (old & !wmask);
        let line = self.line_mut(set, way);
        line.data[offset..offset + WORD_BYTES].copy_from_slice(&merged.to_le_bytes());
        line.state = LineState::Dirty;
    }

    fn line(&self, set: usize, way: usize) -> &CacheLine {
        &self.lines[set * self.geometry.ways() + way]
    }

    fn line_mut(&mut self, set: usize, way: usize) -> &mut CacheLine {
        &mut self.lines[set * self.geometry.ways() + way]
    }
}

impl fmt::Debug for Cache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cache")
            .field("geometry", &self.geometry)
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}
