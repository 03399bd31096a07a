//! Virtual address and page number types.
//!
//! This module defines strong types for the two identifier spaces the
//! simulator works in, to prevent accidental mixing:
//! 1. **`VirtAddr`:** A raw referenced address as it appears in the input trace.
//! 2. **`Vpn`:** A virtual page number, the unit of TLB residency. Derived from
//!    a `VirtAddr` by discarding the page-offset bits.
//!
//! A `Vpn` is opaque to the replacement policies: they rely only on equality
//! and hashing, never on ordering.

use std::fmt;

/// A raw virtual address as referenced by the traced program.
///
/// Addresses carry a page offset in their low bits; the TLB caches
/// translations at page granularity, so addresses must be narrowed to a
/// [`Vpn`] before the replacement engine sees them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VirtAddr(pub u64);

/// A virtual page number: the tag cached (and evicted) by the TLB.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Vpn(pub u64);

impl VirtAddr {
    /// Creates a new virtual address from a raw 64-bit value.
    #[inline(always)]
    pub const fn new(addr: u64) -> Self {
        Self(addr)
    }

    /// Returns the raw 64-bit address value.
    #[inline(always)]
    pub const fn val(self) -> u64 {
        self.0
    }

    /// Extracts the virtual page number by discarding `page_shift` offset bits.
    ///
    /// `page_shift` comes from the active configuration
    /// ([`Config::page_shift`](crate::config::Config::page_shift)); for the
    /// default 4 KiB pages it is 12.
    #[inline(always)]
    pub const fn vpn(self, page_shift: u32) -> Vpn {
        Vpn(self.0 >> page_shift)
    }
}

impl Vpn {
    /// Returns the raw page number value.
    #[inline(always)]
    pub const fn val(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Vpn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}
