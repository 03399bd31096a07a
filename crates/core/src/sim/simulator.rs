//! Simulator: validated configuration plus the shared replay loop.
//!
//! Every policy is driven by the same scan-and-classify loop ([`replay`]);
//! only the residency tracker behind the [`ReplacementPolicy`] trait differs.
//! The four replays are fully independent — fresh structures per run, no
//! state carried between policies, test cases, or repeated calls.

use tracing::debug;

use crate::common::{SimError, Vpn};
use crate::config::Config;
use crate::policies::{PolicyKind, ReplacementPolicy};
use crate::stats::PolicyReport;

/// Replays `trace` through one residency tracker, returning the hit count.
///
/// Each reference is classified as hit or miss via
/// [`touch`](ReplacementPolicy::touch); on a miss, one resident is evicted
/// if (and only if) the TLB is at `capacity`, and the referenced page is
/// always inserted. An empty trace yields 0; a capacity at or above the
/// number of distinct pages never evicts.
pub fn replay(trace: &[Vpn], capacity: usize, policy: &mut dyn ReplacementPolicy) -> u64 {
    let mut hits = 0_u64;
    for (pos, &vpn) in trace.iter().enumerate() {
        if policy.touch(vpn, pos) {
            hits += 1;
            continue;
        }
        if policy.occupancy() == capacity {
            let _ = policy.evict(pos);
        }
        policy.insert(vpn);
    }
    hits
}

/// Top-level simulator: a validated configuration and nothing else.
///
/// Pure in-memory computation over `(config, trace)`; callable repeatedly for
/// independent test cases without shared state leaking between calls.
#[derive(Debug, Clone, Copy)]
pub struct Simulator {
    config: Config,
}

impl Simulator {
    /// Creates a simulator after validating `config`.
    ///
    /// # Errors
    ///
    /// Returns the validation error for a zero capacity or a page size that
    /// is not a nonzero power of two.
    pub fn new(config: Config) -> Result<Self, SimError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the active configuration.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Replays `trace` through one policy with a fresh residency tracker.
    pub fn run_policy(&self, trace: &[Vpn], kind: PolicyKind) -> u64 {
        let mut policy = kind.build(self.config.capacity, trace);
        let hits = replay(trace, self.config.capacity, policy.as_mut());
        debug!(
            policy = %kind,
            hits,
            references = trace.len(),
            capacity = self.config.capacity,
            "policy replay complete"
        );
        hits
    }

    /// Replays `trace` through all four policies.
    ///
    /// The runs are independent and order-insensitive; they share nothing but
    /// the read-only trace.
    pub fn run(&self, trace: &[Vpn]) -> PolicyReport {
        PolicyReport {
            references: trace.len() as u64,
            fifo_hits: self.run_policy(trace, PolicyKind::Fifo),
            lifo_hits: self.run_policy(trace, PolicyKind::Lifo),
            lru_hits: self.run_policy(trace, PolicyKind::Lru),
            opt_hits: self.run_policy(trace, PolicyKind::Opt),
        }
    }
}
