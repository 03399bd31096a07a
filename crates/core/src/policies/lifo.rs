//! Last-In, First-Out (LIFO) Replacement Policy.
//!
//! This policy evicts the most recently *inserted* page. Residency is a stack
//! plus a membership set, and the critical semantic is that **a hit never
//! reorders the stack** — only misses push. The victim on a full miss is
//! therefore the newest insertion, not the newest access, which can differ
//! sharply from "last used" intuition. That quirk is the simulated
//! algorithm's exact behavior and is preserved here rather than nudged toward
//! LRU.
//!
//! A page can be pushed, evicted, and never hit at all if the trace does not
//! revisit it while it sits on top of the stack; this policy is not meant to
//! be good, only faithfully simulated.
//!
//! # Performance
//!
//! - **Time Complexity:** `touch()` and `evict()` are O(1)
//! - **Space Complexity:** O(K) where K is the TLB capacity

use std::collections::HashSet;

use super::ReplacementPolicy;
use crate::common::Vpn;

/// LIFO policy state.
#[derive(Debug)]
pub struct LifoPolicy {
    /// Resident pages in insertion order; the back is the most recent push.
    stack: Vec<Vpn>,
    /// Membership set mirroring `stack`.
    resident: HashSet<Vpn>,
}

impl LifoPolicy {
    /// Creates a LIFO policy sized for `capacity` resident pages.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            stack: Vec::with_capacity(capacity),
            resident: HashSet::with_capacity(capacity),
        }
    }
}

impl ReplacementPolicy for LifoPolicy {
    /// Hits make no structural change: the stack order is insertion order.
    fn touch(&mut self, vpn: Vpn, _at: usize) -> bool {
        self.resident.contains(&vpn)
    }

    fn occupancy(&self) -> usize {
        self.stack.len()
    }

    /// Pops the top of the stack: the most recently inserted page.
    fn evict(&mut self, _at: usize) -> Vpn {
        let Some(newest) = self.stack.pop() else {
            panic!("LIFO eviction from an empty residency");
        };
        assert!(
            self.resident.remove(&newest),
            "LIFO stack and membership set disagree on {newest}"
        );
        newest
    }

    fn insert(&mut self, vpn: Vpn) {
        self.stack.push(vpn);
        assert!(
            self.resident.insert(vpn),
            "duplicate LIFO insertion of {vpn}"
        );
    }
}
