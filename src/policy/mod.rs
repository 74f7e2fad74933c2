//! Ready-queue disciplines for the simulation driver.
//!
//! All four algorithms share one driver loop (admission → selection →
//! execution → completion); they differ only in how they reorder or rotate
//! the ready queue. Those differences live behind the [`SchedulePolicy`]
//! trait, with one implementation per discipline under [`rules`].
//!
//! # Usage
//!
//! ```
//! use cpu_schedule::policy::Algorithm;
//!
//! let algorithm = Algorithm::RoundRobin { quantum: 2 };
//! let policy = algorithm.policy();
//! assert_eq!(policy.name(), "RR");
//! ```
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.3

mod context;
mod queue;
pub mod rules;

pub use context::PolicyContext;
pub use queue::ReadyQueue;

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};

/// Hooks a discipline plugs into the shared simulation loop.
///
/// The driver calls the hooks in a fixed order every time unit:
///
/// 1. `before_select` — after admitting arrivals, before picking the queue
///    front to run. SRTF sorts here; Round-Robin rotates an exhausted slice.
/// 2. `after_run` — after the front executed one unit. Round-Robin advances
///    its slice counter here.
/// 3. `on_complete` — after a finished process was removed from the front.
///    SJF re-sorts here; Round-Robin resets its slice counter.
///
/// Implementations must keep reorderings stable: processes with equal
/// remaining burst retain their prior relative order, which makes every
/// discipline's output reproducible.
pub trait SchedulePolicy: Send + Sync + Debug {
    /// Discipline name (e.g., "FCFS", "SRTF").
    fn name(&self) -> &'static str;

    /// Reorders the queue before this unit's selection.
    fn before_select(&mut self, _queue: &mut ReadyQueue, _ctx: &PolicyContext) {}

    /// Observes one executed time unit of the queue front.
    fn after_run(&mut self) {}

    /// Reacts to the completion and removal of the running process.
    fn on_complete(&mut self, _queue: &mut ReadyQueue, _ctx: &PolicyContext) {}
}

/// Algorithm selector for a simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// First-Come-First-Served: non-preemptive, pure arrival order.
    #[serde(rename = "fcfs")]
    Fcfs,
    /// Shortest-Job-First: non-preemptive, shortest next job on completion.
    #[serde(rename = "sjf")]
    Sjf,
    /// Shortest-Remaining-Time-First: preemptive at every unit boundary.
    #[serde(rename = "srtf")]
    Srtf,
    /// Round-Robin with a fixed time quantum.
    ///
    /// A quantum of 0 is a degenerate configuration; the engine answers it
    /// with an empty result instead of running.
    #[serde(rename = "rr")]
    RoundRobin {
        /// Units a process may run before mandatory rotation.
        quantum: u32,
    },
}

impl Algorithm {
    /// Canonical short name of the discipline.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Fcfs => "FCFS",
            Algorithm::Sjf => "SJF",
            Algorithm::Srtf => "SRTF",
            Algorithm::RoundRobin { .. } => "RR",
        }
    }

    /// Builds a fresh policy instance for one run.
    pub fn policy(&self) -> Box<dyn SchedulePolicy> {
        match self {
            Algorithm::Fcfs => Box::new(rules::Fcfs),
            Algorithm::Sjf => Box::new(rules::Sjf),
            Algorithm::Srtf => Box::new(rules::Srtf),
            Algorithm::RoundRobin { quantum } => Box::new(rules::RoundRobin::new(*quantum)),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::RoundRobin { quantum } => write!(f, "RR(quantum={quantum})"),
            other => f.write_str(other.name()),
        }
    }
}
