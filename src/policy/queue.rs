//! The ready queue: processes waiting for or using the CPU.

use crate::models::{ProcessId, QueueSnapshot};

use super::PolicyContext;

/// Ordered collection of processes eligible to run.
///
/// Position 0 is the process currently selected to run. Admission appends at
/// the back; policies reorder through [`ReadyQueue::sort_by_remaining`] and
/// [`ReadyQueue::rotate_front_to_back`].
#[derive(Debug, Clone, Default)]
pub struct ReadyQueue {
    slots: Vec<ProcessId>,
}

impl ReadyQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// The process at the front, if any.
    pub fn front(&self) -> Option<ProcessId> {
        self.slots.first().copied()
    }

    /// Appends a process at the back.
    pub fn push_back(&mut self, id: ProcessId) {
        self.slots.push(id);
    }

    /// Removes and returns the front process.
    pub fn pop_front(&mut self) -> Option<ProcessId> {
        if self.slots.is_empty() {
            None
        } else {
            Some(self.slots.remove(0))
        }
    }

    /// Moves the front process to the back. No-op on empty queues.
    pub fn rotate_front_to_back(&mut self) {
        if self.slots.len() > 1 {
            self.slots.rotate_left(1);
        }
    }

    /// Stable-sorts the queue ascending by remaining burst.
    ///
    /// Equal remaining bursts keep their prior relative order; processes the
    /// context does not know sort last.
    pub fn sort_by_remaining(&mut self, ctx: &PolicyContext) {
        self.slots
            .sort_by_key(|&id| ctx.remaining_burst(id).unwrap_or(u32::MAX));
    }

    /// Queue contents in order, as recorded in the timeline.
    pub fn snapshot(&self) -> QueueSnapshot {
        self.slots.clone()
    }

    /// Iterates front to back.
    pub fn iter(&self) -> impl Iterator<Item = ProcessId> + '_ {
        self.slots.iter().copied()
    }

    /// Number of queued processes.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
