//! Whole-Input Property Tests.
//!
//! Checks the invariants that must hold for every trace and capacity, over
//! randomly generated inputs:
//! 1. Hit counts are bounded by the trace length.
//! 2. OPT is an upper bound on every other policy (Belady optimality).
//! 3. Replays are deterministic and stateless across engine instances.
//! 4. A capacity covering the working set makes the policy irrelevant.

use std::collections::HashSet;

use proptest::prelude::*;

use tlbsim_core::policies::PolicyKind;
use tlbsim_core::{Config, PolicyReport, Simulator};

use super::pages;

/// Runs all four policies over `raw` at `capacity`.
fn run(capacity: usize, raw: &[u64]) -> PolicyReport {
    let Ok(simulator) = Simulator::new(Config::with_capacity(capacity)) else {
        panic!("capacity {capacity} should be valid");
    };
    simulator.run(&pages(raw))
}

/// Small page universe so traces actually revisit pages.
fn trace_strategy() -> impl Strategy<Value = Vec<u64>> {
    proptest::collection::vec(0_u64..16, 0..64)
}

proptest! {
    /// 0 <= hits <= N for every policy.
    #[test]
    fn hit_counts_bounded(raw in trace_strategy(), capacity in 1_usize..8) {
        let report = run(capacity, &raw);
        for kind in PolicyKind::ALL {
            prop_assert!(report.hits(kind) <= raw.len() as u64);
        }
    }

    /// Belady optimality: OPT's hit count dominates FIFO, LIFO, and LRU for
    /// every trace and capacity.
    #[test]
    fn opt_is_an_upper_bound(raw in trace_strategy(), capacity in 1_usize..8) {
        let report = run(capacity, &raw);
        prop_assert!(report.opt_hits >= report.fifo_hits);
        prop_assert!(report.opt_hits >= report.lifo_hits);
        prop_assert!(report.opt_hits >= report.lru_hits);
    }

    /// Fresh engines over the same input always agree: no hidden state.
    #[test]
    fn replays_are_deterministic(raw in trace_strategy(), capacity in 1_usize..8) {
        prop_assert_eq!(run(capacity, &raw), run(capacity, &raw));
    }

    /// When nothing is ever evicted, every policy reports exactly
    /// N - distinct hits: first touches miss, everything else hits.
    #[test]
    fn full_capacity_makes_policy_irrelevant(raw in trace_strategy()) {
        let distinct = raw.iter().collect::<HashSet<_>>().len();
        let capacity = distinct.max(1);
        let expected = (raw.len() - distinct) as u64;
        let report = run(capacity, &raw);
        for kind in PolicyKind::ALL {
            prop_assert_eq!(report.hits(kind), expected);
        }
    }
}
