//! Cache replacement policies.
//!
//! Victim selection is a pluggable strategy behind the [`ReplacementPolicy`]
//! trait. Only random replacement is implemented — it is the policy this
//! simulator models — but the seam admits alternatives (LRU, FIFO) without
//! touching the access engine.

/// Random replacement policy.
pub mod random;

pub use random::RandomPolicy;

/// Trait for cache replacement policies.
///
/// Defines the interface for updating usage state and selecting victim lines.
pub trait ReplacementPolicy: Send + Sync {
    /// Updates the policy state when a line is accessed or filled.
    ///
    /// # Arguments
    ///
    /// * `set` - The cache set index.
    /// * `way` - The way index within the set that was touched.
    fn update(&mut self, set: usize, way: usize);

    /// Selects a victim way to evict from a full set.
    ///
    /// Only consulted when the set has no Invalid way left.
    ///
    /// # Arguments
    ///
    /// * `set` - The cache set index.
    ///
    /// # Returns
    ///
    /// The index of the way to evict, in `[0, ways)`.
    fn get_victim(&mut self, set: usize) -> usize;
}
