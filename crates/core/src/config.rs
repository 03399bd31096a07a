//! Configuration system for the TLB simulator.
//!
//! This module defines the structure used to parameterize a simulation run.
//! It provides:
//! 1. **Defaults:** Baseline constants (TLB capacity, page size).
//! 2. **Validation:** Preconditions checked before any replay begins.
//! 3. **Derivation:** The page-shift arithmetic that turns raw addresses into
//!    page numbers.
//!
//! Configuration is supplied per test case by the trace header (see
//! [`crate::sim::loader`]), deserialized from JSON, or constructed directly;
//! `Config::default()` gives the baseline hardware values.

use serde::Deserialize;

use crate::common::SimError;

/// Default configuration constants for the simulator.
///
/// These values define the baseline configuration when a trace header or
/// caller does not override them.
mod defaults {
    /// Translation Lookaside Buffer entry count.
    ///
    /// Number of virtual-to-physical translations resident at once.
    pub const TLB_ENTRIES: usize = 32;

    /// Page size in KiB (4 KiB pages, the common baseline).
    pub const PAGE_SIZE_KIB: u64 = 4;
}

/// Root configuration structure for one simulation run.
///
/// # Examples
///
/// Creating a default configuration:
///
/// ```
/// use tlbsim_core::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.capacity, 32);
/// assert_eq!(config.page_size_kib, 4);
/// assert_eq!(config.page_shift(), 12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// TLB capacity K: the maximum number of resident pages.
    pub capacity: usize,
    /// Page size in KiB; must be a nonzero power of two.
    pub page_size_kib: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: defaults::TLB_ENTRIES,
            page_size_kib: defaults::PAGE_SIZE_KIB,
        }
    }
}

impl Config {
    /// Creates a configuration with the given capacity and default page size.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }

    /// Checks the configuration preconditions.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidCapacity`] if `capacity` is zero, or
    /// [`SimError::InvalidPageSize`] if `page_size_kib` is zero or not a
    /// power of two.
    pub fn validate(&self) -> Result<(), SimError> {
        if self.capacity == 0 {
            return Err(SimError::InvalidCapacity { got: self.capacity });
        }
        if !self.page_size_kib.is_power_of_two() {
            return Err(SimError::InvalidPageSize {
                got: self.page_size_kib,
            });
        }
        Ok(())
    }

    /// Number of page-offset bits to discard when deriving a VPN.
    ///
    /// Computed as `log2(page_size_kib) + 10`, i.e. the page size expressed
    /// as a power-of-two byte count. Only meaningful after [`Self::validate`]
    /// has accepted the page size.
    pub const fn page_shift(&self) -> u32 {
        self.page_size_kib.trailing_zeros() + 10
    }
}
