//! Built-in scheduling disciplines.
//!
//! | Rule | Selection | Reorder / rotation |
//! |------|-----------|--------------------|
//! | FCFS | Queue front, held to completion | None |
//! | SJF | Queue front, held to completion | Sort by remaining burst on completion |
//! | SRTF | Front after sorting every unit | Sort by remaining burst before selection |
//! | RR | Queue front | Rotate front to back after each full quantum |
//!
//! All sorts are stable, so equal remaining bursts never swap and every
//! discipline is deterministic.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.3

use super::{PolicyContext, ReadyQueue, SchedulePolicy};

/// First-Come-First-Served.
///
/// Non-preemptive: the queue is pure arrival order and the front runs until
/// its burst reaches zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl SchedulePolicy for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }
}

/// Shortest-Job-First.
///
/// Non-preemptive within a burst: the front is only re-chosen when the
/// running process completes, at which point the remaining queue is sorted
/// ascending by remaining burst (shortest next job).
#[derive(Debug, Clone, Copy, Default)]
pub struct Sjf;

impl SchedulePolicy for Sjf {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn on_complete(&mut self, queue: &mut ReadyQueue, ctx: &PolicyContext) {
        queue.sort_by_remaining(ctx);
    }
}

/// Shortest-Remaining-Time-First.
///
/// Preemptive: the whole queue is sorted ascending by remaining burst before
/// every unit's selection, so a shorter arrival displaces the running
/// process at the next unit boundary.
#[derive(Debug, Clone, Copy, Default)]
pub struct Srtf;

impl SchedulePolicy for Srtf {
    fn name(&self) -> &'static str {
        "SRTF"
    }

    fn before_select(&mut self, queue: &mut ReadyQueue, ctx: &PolicyContext) {
        queue.sort_by_remaining(ctx);
    }
}

/// Round-Robin with a fixed quantum.
///
/// Counts the units the current front has run; once a full quantum is
/// consumed without completion, the front rotates to the back before the
/// next selection. The counter resets on rotation and on completion, so a
/// process that finishes mid-slice hands a fresh quantum to its successor.
#[derive(Debug, Clone)]
pub struct RoundRobin {
    quantum: u32,
    slice_used: u32,
}

impl RoundRobin {
    /// Creates a Round-Robin policy with the given quantum.
    pub fn new(quantum: u32) -> Self {
        Self {
            quantum,
            slice_used: 0,
        }
    }

    /// The configured quantum.
    pub fn quantum(&self) -> u32 {
        self.quantum
    }
}

impl SchedulePolicy for RoundRobin {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn before_select(&mut self, queue: &mut ReadyQueue, _ctx: &PolicyContext) {
        if !queue.is_empty() && self.slice_used >= self.quantum {
            queue.rotate_front_to_back();
            self.slice_used = 0;
        }
    }

    fn after_run(&mut self) {
        self.slice_used += 1;
    }

    fn on_complete(&mut self, _queue: &mut ReadyQueue, _ctx: &PolicyContext) {
        self.slice_used = 0;
    }
}
