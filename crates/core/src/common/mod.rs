//! Common types used throughout the TLB simulator.
//!
//! This module provides the fundamental building blocks shared across all
//! components of the simulator:
//! 1. **Address Types:** Strong types for raw virtual addresses and virtual page numbers.
//! 2. **Error Handling:** The simulator-wide error type.

/// Address type definitions (raw addresses and page numbers).
pub mod addr;

/// Error types for configuration and trace loading.
pub mod error;

pub use addr::{VirtAddr, Vpn};
pub use error::SimError;
