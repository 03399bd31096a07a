//! Simulation driver: the replay loop, the simulator, and the trace loader.

/// Multi-test-case trace text loading.
pub mod loader;
/// The simulator and the shared replay loop.
pub mod simulator;

pub use loader::{TestCase, parse_refs, parse_trace};
pub use simulator::{Simulator, replay};
