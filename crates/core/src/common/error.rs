//! Simulator error definitions.
//!
//! This module defines [`SimError`], the error type surfaced to callers for
//! recoverable input conditions:
//! 1. **Configuration:** Rejected capacities and page sizes, caught before a
//!    simulation begins.
//! 2. **Trace loading:** Malformed trace text and I/O failures.
//!
//! Internal invariant violations (eviction from an empty residency, an
//! occurrence-index lookup for a page that was never recorded) are programming
//! defects, not input conditions: those panic immediately rather than
//! returning an error, since a silently wrong hit count is worse than
//! stopping.

use thiserror::Error;

/// Errors produced by configuration validation and trace loading.
#[derive(Debug, Error)]
pub enum SimError {
    /// The configured TLB capacity cannot hold a single entry.
    ///
    /// Capacity is a precondition of every replacement policy: eviction
    /// behavior is undefined for an empty TLB, so this is rejected up front.
    #[error("invalid TLB capacity {got}: must be at least 1")]
    InvalidCapacity {
        /// The rejected capacity value.
        got: usize,
    },

    /// The configured page size is zero or not a power of two.
    ///
    /// The page shift is derived from the page size, so only nonzero powers
    /// of two are meaningful.
    #[error("invalid page size {got} KiB: must be a nonzero power of two")]
    InvalidPageSize {
        /// The rejected page size in KiB.
        got: u64,
    },

    /// The trace text could not be parsed.
    #[error("trace parse error at line {line}: {reason}")]
    Parse {
        /// 1-based line number of the offending token, or of end-of-input.
        line: usize,
        /// Human-readable description of what was expected.
        reason: String,
    },

    /// Reading the trace input failed.
    #[error("trace input error: {0}")]
    Io(#[from] std::io::Error),
}
