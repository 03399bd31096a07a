//! Least Recently Used (LRU) Replacement Policy.
//!
//! This policy evicts the page that has gone unreferenced for the longest
//! time. Residency is a recency list (most-recent-first) with a per-page
//! handle, so a hit relocates the page to the front in O(1) and a miss evicts
//! the tail in O(1) — no linear scans.
//!
//! The list is an arena of doubly-linked nodes addressed by stable `usize`
//! handles with a free list for reuse, giving the pointer-linked structure
//! its O(1) relocation without any raw pointers or manual deallocation.
//!
//! # Performance
//!
//! - **Time Complexity:** `touch()` and `evict()` are O(1)
//! - **Space Complexity:** O(K) where K is the TLB capacity
//! - **Best Case:** Workloads with strong temporal locality
//! - **Worst Case:** Scanning patterns larger than the TLB (thrashing)

use std::collections::HashMap;

use super::ReplacementPolicy;
use crate::common::Vpn;

/// One slot in the recency-list arena.
#[derive(Debug, Clone, Copy)]
struct Node {
    vpn: Vpn,
    prev: Option<usize>,
    next: Option<usize>,
}

/// LRU policy state.
#[derive(Debug)]
pub struct LruPolicy {
    /// Arena backing the doubly-linked recency list.
    nodes: Vec<Node>,
    /// Arena slots released by eviction, available for reuse.
    free: Vec<usize>,
    /// Most recently used end of the list.
    head: Option<usize>,
    /// Least recently used end of the list (the eviction victim).
    tail: Option<usize>,
    /// Per-page handle into `nodes`, for O(1) relocation on a hit.
    handles: HashMap<Vpn, usize>,
}

impl LruPolicy {
    /// Creates an LRU policy sized for `capacity` resident pages.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            free: Vec::new(),
            head: None,
            tail: None,
            handles: HashMap::with_capacity(capacity),
        }
    }

    /// Detaches the node at `idx` from the recency list.
    fn unlink(&mut self, idx: usize) {
        let Node { prev, next, .. } = self.nodes[idx];
        match prev {
            Some(p) => self.nodes[p].next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => self.nodes[n].prev = prev,
            None => self.tail = prev,
        }
        self.nodes[idx].prev = None;
        self.nodes[idx].next = None;
    }

    /// Attaches the node at `idx` at the most-recently-used end.
    fn link_front(&mut self, idx: usize) {
        self.nodes[idx].prev = None;
        self.nodes[idx].next = self.head;
        if let Some(old_head) = self.head {
            self.nodes[old_head].prev = Some(idx);
        }
        self.head = Some(idx);
        if self.tail.is_none() {
            self.tail = Some(idx);
        }
    }
}

impl ReplacementPolicy for LruPolicy {
    /// A hit relocates the page to the most-recently-used end.
    fn touch(&mut self, vpn: Vpn, _at: usize) -> bool {
        let Some(&idx) = self.handles.get(&vpn) else {
            return false;
        };
        self.unlink(idx);
        self.link_front(idx);
        true
    }

    fn occupancy(&self) -> usize {
        self.handles.len()
    }

    /// Evicts the tail of the recency list: the least recently used page.
    fn evict(&mut self, _at: usize) -> Vpn {
        let Some(idx) = self.tail else {
            panic!("LRU eviction from an empty residency");
        };
        let vpn = self.nodes[idx].vpn;
        self.unlink(idx);
        self.free.push(idx);
        assert_eq!(
            self.handles.remove(&vpn),
            Some(idx),
            "LRU recency list and handle map disagree on {vpn}"
        );
        vpn
    }

    fn insert(&mut self, vpn: Vpn) {
        let idx = if let Some(reused) = self.free.pop() {
            self.nodes[reused].vpn = vpn;
            reused
        } else {
            self.nodes.push(Node {
                vpn,
                prev: None,
                next: None,
            });
            self.nodes.len() - 1
        };
        self.link_front(idx);
        assert!(
            self.handles.insert(vpn, idx).is_none(),
            "duplicate LRU insertion of {vpn}"
        );
    }
}
