//! First-In, First-Out (FIFO) Replacement Policy.
//!
//! This policy evicts the oldest resident page, regardless of how recently it
//! was accessed. Residency is a queue in insertion order plus a membership
//! set; hits make no structural change.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `touch()`: O(1)
//!   - `evict()`: O(1) amortized
//! - **Space Complexity:** O(K) where K is the TLB capacity
//! - **Best Case:** Streaming references where all pages have equal importance
//! - **Worst Case:** Workloads with strong temporal locality (may evict hot pages)

use std::collections::{HashSet, VecDeque};

use super::ReplacementPolicy;
use crate::common::Vpn;

/// FIFO policy state.
#[derive(Debug)]
pub struct FifoPolicy {
    /// Resident pages in insertion order; front is oldest.
    queue: VecDeque<Vpn>,
    /// Membership set mirroring `queue`.
    resident: HashSet<Vpn>,
}

impl FifoPolicy {
    /// Creates a FIFO policy sized for `capacity` resident pages.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            queue: VecDeque::with_capacity(capacity),
            resident: HashSet::with_capacity(capacity),
        }
    }
}

impl ReplacementPolicy for FifoPolicy {
    fn touch(&mut self, vpn: Vpn, _at: usize) -> bool {
        self.resident.contains(&vpn)
    }

    fn occupancy(&self) -> usize {
        self.queue.len()
    }

    /// Evicts the front of the queue: the oldest-inserted page.
    fn evict(&mut self, _at: usize) -> Vpn {
        let Some(oldest) = self.queue.pop_front() else {
            panic!("FIFO eviction from an empty residency");
        };
        assert!(
            self.resident.remove(&oldest),
            "FIFO queue and membership set disagree on {oldest}"
        );
        oldest
    }

    fn insert(&mut self, vpn: Vpn) {
        self.queue.push_back(vpn);
        assert!(
            self.resident.insert(vpn),
            "duplicate FIFO insertion of {vpn}"
        );
    }
}
