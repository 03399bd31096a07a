//! Simulation statistics collection and reporting.
//!
//! This module carries the result of replaying one trace through all four
//! policies. It provides:
//! 1. **Hit counts:** One non-negative count per policy, in the fixed order
//!    FIFO, LIFO, LRU, OPT.
//! 2. **Summary line:** The classic one-line `<fifo> <lifo> <lru> <opt>`
//!    output, one per test case.
//! 3. **Breakdown:** A banner-style report with per-policy hit rates.

use serde::Serialize;

use crate::policies::PolicyKind;

/// Hit counts of all four policies over one trace.
///
/// OPT's count is always `>=` each of the other three for any input; that is
/// a direct consequence of Belady optimality and a checkable invariant, not
/// just an expectation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PolicyReport {
    /// Length of the replayed trace.
    pub references: u64,
    /// FIFO hit count.
    pub fifo_hits: u64,
    /// LIFO hit count.
    pub lifo_hits: u64,
    /// LRU hit count.
    pub lru_hits: u64,
    /// Belady-optimal hit count.
    pub opt_hits: u64,
}

impl PolicyReport {
    /// Returns the hit count of one policy.
    pub const fn hits(&self, kind: PolicyKind) -> u64 {
        match kind {
            PolicyKind::Fifo => self.fifo_hits,
            PolicyKind::Lifo => self.lifo_hits,
            PolicyKind::Lru => self.lru_hits,
            PolicyKind::Opt => self.opt_hits,
        }
    }

    /// Formats the four hit counts in fixed order, space-separated.
    ///
    /// This is the per-test-case output line: `"<fifo> <lifo> <lru> <opt>"`.
    pub fn summary_line(&self) -> String {
        format!(
            "{} {} {} {}",
            self.fifo_hits, self.lifo_hits, self.lru_hits, self.opt_hits
        )
    }

    /// Prints a banner-style breakdown with per-policy hit rates to stdout.
    pub fn print(&self) {
        let refs = if self.references == 0 {
            1
        } else {
            self.references
        };
        println!("==========================================================");
        println!("TLB REPLACEMENT SIMULATION STATISTICS");
        println!("==========================================================");
        println!("references               {}", self.references);
        for kind in PolicyKind::ALL {
            let hits = self.hits(kind);
            let misses = self.references - hits;
            let rate = (hits as f64 / refs as f64) * 100.0;
            println!(
                "  {:<6} hits: {:<10} | misses: {:<10} | hit_rate: {:.2}%",
                kind.to_string(),
                hits,
                misses,
                rate
            );
        }
        println!("==========================================================");
    }
}
