//! Belady-Optimal (OPT / MIN) Replacement Policy.
//!
//! This policy evicts the resident page whose next use lies farthest in the
//! future, or one with no future use at all. It is provably optimal for
//! minimizing misses on a known, fixed reference sequence, so its hit count
//! is an upper bound against which the other policies are compared.
//!
//! Residency is a plain membership set; no ordering metadata is kept, because
//! the eviction choice is recomputed on each full miss by scanning the
//! residents against the precomputed [`OccurrenceIndex`].
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `touch()`: O(1) amortized (cursor pruning is bounded over the scan)
//!   - `evict()`: O(K) where K is the TLB capacity
//! - **Space Complexity:** O(N) for the occurrence index
//! - Overall replay is O(N·K), acceptable for moderate capacities.

use std::collections::HashSet;

use super::{OccurrenceIndex, ReplacementPolicy};
use crate::common::Vpn;

/// OPT policy state.
#[derive(Debug)]
pub struct OptPolicy {
    /// Resident pages; no ordering needed.
    resident: HashSet<Vpn>,
    /// Future uses of every page, pruned lazily as the scan advances.
    occurrences: OccurrenceIndex,
}

impl OptPolicy {
    /// Creates an OPT policy for `trace`, precomputing the occurrence index.
    pub fn new(capacity: usize, trace: &[Vpn]) -> Self {
        Self {
            resident: HashSet::with_capacity(capacity),
            occurrences: OccurrenceIndex::build(trace),
        }
    }
}

impl ReplacementPolicy for OptPolicy {
    /// Classifies the reference and consumes it from the page's future list.
    ///
    /// The cursor advance happens on every reference, hit or miss: the
    /// occurrence that just happened must never be mistaken for a future use.
    fn touch(&mut self, vpn: Vpn, at: usize) -> bool {
        let hit = self.resident.contains(&vpn);
        let _ = self.occurrences.next_use_after(vpn, at);
        hit
    }

    fn occupancy(&self) -> usize {
        self.resident.len()
    }

    /// Selects the victim by Belady's rule.
    ///
    /// Scans the residents; each is lazily pruned to its next use after `at`.
    /// A resident with no remaining future use is evicted immediately (ties
    /// among such pages are broken by scan order — neither will ever be
    /// referenced again, so no better choice exists). Otherwise the resident
    /// with the strictly largest next-use position wins, first seen keeping
    /// the candidacy on ties.
    fn evict(&mut self, at: usize) -> Vpn {
        let mut victim: Option<Vpn> = None;
        let mut farthest = at;
        for &candidate in &self.resident {
            match self.occurrences.next_use_after(candidate, at) {
                None => {
                    victim = Some(candidate);
                    break;
                }
                Some(next_use) if next_use > farthest => {
                    farthest = next_use;
                    victim = Some(candidate);
                }
                Some(_) => {}
            }
        }
        let Some(victim) = victim else {
            panic!("OPT eviction from an empty residency");
        };
        assert!(
            self.resident.remove(&victim),
            "OPT victim {victim} was not resident"
        );
        victim
    }

    fn insert(&mut self, vpn: Vpn) {
        assert!(
            self.resident.insert(vpn),
            "duplicate OPT insertion of {vpn}"
        );
    }
}
