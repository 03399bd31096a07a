//! Per-page future-occurrence index.
//!
//! Built once from the full trace before an OPT replay begins: for each
//! distinct page, the ascending list of trace positions at which it appears.
//! Each list is consumed through a cursor as the scan advances, so that after
//! pruning at scan position `i` the cursor head is the page's next future use
//! (strictly after `i`), or nothing if the page never recurs.
//!
//! Pruning is lazy: a page's cursor only advances when that page is actually
//! examined (as the current reference, or as an eviction candidate). Each
//! position is skipped at most once over the whole scan, so total pruning
//! work is amortized O(N).

use std::collections::HashMap;

use crate::common::Vpn;

/// Ascending occurrence positions for one page, with a consuming cursor.
#[derive(Debug)]
struct OccurrenceList {
    /// All positions in the trace where the page appears, ascending.
    positions: Vec<usize>,
    /// Index of the first position not yet consumed by the scan.
    cursor: usize,
}

/// Future-occurrence index over a whole trace.
#[derive(Debug)]
pub struct OccurrenceIndex {
    lists: HashMap<Vpn, OccurrenceList>,
}

impl OccurrenceIndex {
    /// Builds the index from the full trace in one forward pass.
    pub fn build(trace: &[Vpn]) -> Self {
        let mut lists: HashMap<Vpn, OccurrenceList> = HashMap::new();
        for (pos, &vpn) in trace.iter().enumerate() {
            lists
                .entry(vpn)
                .or_insert_with(|| OccurrenceList {
                    positions: Vec::new(),
                    cursor: 0,
                })
                .positions
                .push(pos);
        }
        Self { lists }
    }

    /// Returns the next position strictly after `at` where `vpn` occurs.
    ///
    /// Advances the page's cursor past every position `<= at` first; those
    /// occurrences are in the past (or are the reference happening right now)
    /// and must never be consulted again. Returns `None` once the page has no
    /// remaining future use.
    ///
    /// # Panics
    ///
    /// Panics if `vpn` was never recorded in the trace the index was built
    /// from. Every page the OPT engine asks about came out of that same
    /// trace, so a missing entry is a programming defect.
    pub fn next_use_after(&mut self, vpn: Vpn, at: usize) -> Option<usize> {
        let Some(list) = self.lists.get_mut(&vpn) else {
            panic!("occurrence index has no entry for {vpn}");
        };
        while list
            .positions
            .get(list.cursor)
            .is_some_and(|&pos| pos <= at)
        {
            list.cursor += 1;
        }
        list.positions.get(list.cursor).copied()
    }

    /// Number of distinct pages in the indexed trace.
    pub fn distinct_pages(&self) -> usize {
        self.lists.len()
    }
}
