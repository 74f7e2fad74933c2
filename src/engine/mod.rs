//! The scheduling engine: simulation driver and statistics.
//!
//! One shared loop drives all four disciplines; the per-algorithm behavior
//! is injected through [`crate::policy::SchedulePolicy`]. A run is a pure,
//! single-threaded computation over a private working copy of the process
//! descriptors — same inputs, same outputs, no state survives between calls.

mod simulation;
mod stats;

pub use simulation::{simulate, simulate_processes, SimulationResult};
pub use stats::{ProcessStats, Statistics};
