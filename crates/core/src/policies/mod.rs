//! TLB Replacement Policies.
//!
//! Implements the eviction strategies compared by the simulator. The TLB here
//! is fully associative: a policy tracks which page numbers are resident and
//! decides which one to discard when a miss occurs at full capacity.
//!
//! # Policies
//!
//! - `Fifo`: First-In, First-Out.
//! - `Lifo`: Last-In, First-Out (evicts the most recently *inserted* page).
//! - `Lru`: Least Recently Used.
//! - `Opt`: Belady's optimal (MIN) rule, using future knowledge of the trace.

/// First-In, First-Out replacement policy.
pub mod fifo;

/// Last-In, First-Out replacement policy.
pub mod lifo;

/// Least Recently Used replacement policy.
pub mod lru;

/// Per-page future-occurrence index (used by OPT).
pub mod occurrence;

/// Belady-optimal (MIN) replacement policy.
pub mod opt;

pub use fifo::FifoPolicy;
pub use lifo::LifoPolicy;
pub use lru::LruPolicy;
pub use occurrence::OccurrenceIndex;
pub use opt::OptPolicy;

use serde::{Deserialize, Serialize};

use crate::common::Vpn;

/// Trait for TLB replacement policies.
///
/// A policy owns its residency structure; the replay loop in
/// [`crate::sim`] drives every policy identically:
/// classify via [`touch`](Self::touch), then on a miss call
/// [`evict`](Self::evict) if the TLB is full and [`insert`](Self::insert)
/// unconditionally.
///
/// Residency invariants (occupancy never above capacity, no duplicate
/// residents) are enforced by that loop; a policy that detects a violation
/// panics rather than returning a wrong answer.
pub trait ReplacementPolicy {
    /// Records a reference to `vpn` at trace position `at`.
    ///
    /// Returns `true` on a hit (the page is resident). Hits update recency
    /// metadata for LRU only; OPT additionally consumes the occurrence of
    /// `vpn` at `at` from its future-use index on every reference, hit or
    /// miss.
    fn touch(&mut self, vpn: Vpn, at: usize) -> bool;

    /// Number of currently resident pages.
    fn occupancy(&self) -> usize;

    /// Removes and returns one resident page, chosen by the policy's rule.
    ///
    /// Called by the replay loop only when the TLB is at capacity. `at` is
    /// the current trace position (used by OPT to prune stale occurrences).
    ///
    /// # Panics
    ///
    /// Panics if the residency is empty; that is a defect in the caller, not
    /// an input condition.
    fn evict(&mut self, at: usize) -> Vpn;

    /// Makes `vpn` resident.
    ///
    /// The caller guarantees `vpn` is not already resident and that capacity
    /// is available.
    fn insert(&mut self, vpn: Vpn);
}

/// Replacement policy selector.
///
/// Identifies one of the four simulated algorithms; the order of
/// [`PolicyKind::ALL`] is the fixed reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PolicyKind {
    /// First In First Out: evict the oldest-inserted page.
    #[serde(alias = "Fifo")]
    Fifo,
    /// Last In First Out: evict the most recently *inserted* page.
    ///
    /// Note that a hit never reorders LIFO's stack, so the eviction victim
    /// can differ sharply from "last used" intuition. This is the simulated
    /// algorithm's exact behavior, preserved deliberately.
    #[serde(alias = "Lifo")]
    Lifo,
    /// Least Recently Used: evict the page unreferenced for longest.
    #[serde(alias = "Lru")]
    Lru,
    /// Belady optimal: evict the page with the farthest (or no) future use.
    #[serde(alias = "Opt")]
    Opt,
}

impl PolicyKind {
    /// All policies in the fixed reporting order: FIFO, LIFO, LRU, OPT.
    pub const ALL: [Self; 4] = [Self::Fifo, Self::Lifo, Self::Lru, Self::Opt];

    /// Constructs a fresh residency tracker for this policy.
    ///
    /// `capacity` sizes the internal structures; `trace` is needed by OPT to
    /// precompute its occurrence index (the other policies ignore it).
    pub fn build(self, capacity: usize, trace: &[Vpn]) -> Box<dyn ReplacementPolicy> {
        match self {
            Self::Fifo => Box::new(FifoPolicy::with_capacity(capacity)),
            Self::Lifo => Box::new(LifoPolicy::with_capacity(capacity)),
            Self::Lru => Box::new(LruPolicy::with_capacity(capacity)),
            Self::Opt => Box::new(OptPolicy::new(capacity, trace)),
        }
    }
}

impl std::fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fifo => write!(f, "FIFO"),
            Self::Lifo => write!(f, "LIFO"),
            Self::Lru => write!(f, "LRU"),
            Self::Opt => write!(f, "OPT"),
        }
    }
}
