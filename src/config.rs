//! Configuration for the cache simulator.
//!
//! This module defines the configuration structure used to parameterize a
//! cache instance. It provides:
//! 1. **Defaults:** The baseline geometry (16 KiB, 4-way, 64-byte blocks).
//! 2. **Deserialization:** serde support so configurations can be supplied as
//!    JSON by an external driver.
//!
//! The block size is not configurable; see [`crate::common::constants`].

use serde::Deserialize;

/// Default configuration constants.
mod defaults {
    /// Default log2 of the total data size in bytes (14 → 16 KiB).
    pub const TOTAL_SIZE_BITS: u32 = 14;

    /// Default log2 of the associativity (2 → 4-way set-associative).
    pub const ASSOCIATIVITY_BITS: u32 = 2;
}

/// Cache geometry configuration.
///
/// Both fields are log2 values, matching how hardware cache parameters are
/// usually quoted. The default describes a 16 KiB, 4-way cache.
///
/// # Examples
///
/// Creating a default configuration:
///
/// ```
/// use cachesim::CacheConfig;
///
/// let config = CacheConfig::default();
/// assert_eq!(config.total_size_bits, 14);
/// assert_eq!(config.associativity_bits, 2);
/// ```
///
/// Deserializing from JSON (typical driver usage):
///
/// ```
/// use cachesim::CacheConfig;
///
/// let json = r#"{ "total_size_bits": 15, "associativity_bits": 3 }"#;
/// let config: CacheConfig = serde_json::from_str(json).unwrap();
/// assert_eq!(config.total_size_bits, 15);
/// assert_eq!(config.associativity_bits, 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CacheConfig {
    /// log2 of the total data size in bytes.
    #[serde(default = "CacheConfig::default_total_size_bits")]
    pub total_size_bits: u32,

    /// log2 of the number of ways per set.
    #[serde(default = "CacheConfig::default_associativity_bits")]
    pub associativity_bits: u32,
}

impl CacheConfig {
    /// Creates a configuration from explicit log2 size and associativity.
    ///
    /// # Arguments
    ///
    /// * `total_size_bits` - log2 of the total data size in bytes.
    /// * `associativity_bits` - log2 of the number of ways per set.
    pub const fn new(total_size_bits: u32, associativity_bits: u32) -> Self {
        Self {
            total_size_bits,
            associativity_bits,
        }
    }

    /// Returns the default total size exponent.
    fn default_total_size_bits() -> u32 {
        defaults::TOTAL_SIZE_BITS
    }

    /// Returns the default associativity exponent.
    fn default_associativity_bits() -> u32 {
        defaults::ASSOCIATIVITY_BITS
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            total_size_bits: defaults::TOTAL_SIZE_BITS,
            associativity_bits: defaults::ASSOCIATIVITY_BITS,
        }
    }
}
