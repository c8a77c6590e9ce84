//! Access statistics collection and reporting.
//!
//! This module tracks the outcome counters for the simulated cache. It
//! provides:
//! 1. **Counters:** Per-stream (read/write) access, hit, miss, and
//!    replacement counts, plus the simulation cycle count.
//! 2. **Rates:** Derived hit/miss rates per stream and combined.
//! 3. **Reporting:** A plain-text summary table.
//!
//! Counters are mutated only by the access engine and only ever increase;
//! callers observe them through a read-only snapshot.

/// Counters for one access stream (reads or writes).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccessStats {
    /// Total accesses issued on this stream.
    pub count: u64,
    /// Accesses that hit a resident line.
    pub hits: u64,
    /// Accesses that missed and triggered a fill.
    pub misses: u64,
    /// Misses that evicted a dirty victim (one write-back each).
    pub replacements: u64,
}

impl AccessStats {
    /// Fraction of accesses that hit, as `hits / count`.
    ///
    /// Deliberately unguarded: before the first access on this stream the
    /// rate is undefined and evaluates to NaN. Callers must not request a
    /// rate for a stream that has seen no accesses.
    pub fn hit_rate(&self) -> f64 {
        self.hits as f64 / self.count as f64
    }

    /// Fraction of accesses that missed, as `misses / count`.
    ///
    /// Unguarded like [`AccessStats::hit_rate`].
    pub fn miss_rate(&self) -> f64 {
        self.misses as f64 / self.count as f64
    }
}

/// Full counter snapshot for one cache instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Total simulation cycles consumed (one per decode, one more per hit).
    pub cycles: u64,
    /// Read-stream counters.
    pub reads: AccessStats,
    /// Write-stream counters.
    pub writes: AccessStats,
}

impl CacheStats {
    /// Returns the read and write streams aggregated into one.
    pub const fn combined(&self) -> AccessStats {
        AccessStats {
            count: self.reads.count + self.writes.count,
            hits: self.reads.hits + self.writes.hits,
            misses: self.reads.misses + self.writes.misses,
            replacements: self.reads.replacements + self.writes.replacements,
        }
    }

    /// Prints the statistics summary table to stdout.
    ///
    /// Pure output; no counter is mutated. Rates for streams with zero
    /// accesses print as NaN.
    pub fn print(&self) {
        let print_row = |name: &str, s: &AccessStats| {
            println!(
                "{:<8} {:<12} {:<10} ({:.6})   {:<10} ({:.6})   {}",
                name,
                s.count,
                s.hits,
                s.hit_rate(),
                s.misses,
                s.miss_rate(),
                s.replacements
            );
        };

        println!("==========================================================");
        println!("CACHE SIMULATION STATISTICS");
        println!("==========================================================");
        println!("cycles                   {}", self.cycles);
        println!("----------------------------------------------------------");
        println!("         total        hits (rate)             misses (rate)           replace");
        print_row("Read:", &self.reads);
        print_row("Write:", &self.writes);
        print_row("Total:", &self.combined());
        println!("==========================================================");
    }
}
