//! TLB replacement-policy simulator library.
//!
//! This crate replays a fixed trace of page references against four classical
//! replacement policies and reports the hit count of each. It provides:
//! 1. **Common:** Strong address types (virtual addresses, virtual page numbers) and errors.
//! 2. **Config:** Simulation parameters (TLB capacity, page size) with validation.
//! 3. **Policies:** FIFO, LIFO, LRU, and Belady-optimal (OPT) residency trackers
//!    behind a single [`policies::ReplacementPolicy`] trait.
//! 4. **Simulation:** The shared replay loop, the multi-test-case trace loader,
//!    and the [`Simulator`] front door.
//! 5. **Statistics:** Per-run hit counts and reporting.
//!
//! OPT is Belady's MIN rule: on eviction it discards the resident page with the
//! farthest (or absent) future use, which provably minimizes misses for a known
//! reference sequence. Its hit count is therefore an upper bound on the other
//! three policies for every trace and capacity.

/// Common types (addresses, page numbers) and error definitions.
pub mod common;
/// Simulator configuration (defaults, validation, page-shift derivation).
pub mod config;
/// Replacement policies (FIFO, LIFO, LRU, OPT) and the occurrence index.
pub mod policies;
/// Simulation driver (replay loop, simulator, trace loader).
pub mod sim;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Main entry point; validates a [`Config`] and replays traces.
pub use crate::sim::Simulator;
/// Hit counts of all four policies over one trace.
pub use crate::stats::PolicyReport;
