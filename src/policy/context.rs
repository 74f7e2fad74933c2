//! Per-unit state handed to policy hooks.

use std::collections::HashMap;

use crate::models::ProcessId;

/// Snapshot of the working copy visible to a [`crate::policy::SchedulePolicy`].
///
/// Built fresh by the driver before each hook call, so remaining bursts
/// always reflect the current unit (post-decrement when called from
/// `on_complete`). Only queued processes are present.
#[derive(Debug, Clone, Default)]
pub struct PolicyContext {
    remaining: HashMap<ProcessId, u32>,
}

impl PolicyContext {
    /// Creates an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the remaining burst of a queued process.
    pub fn with_remaining_burst(mut self, id: ProcessId, remaining: u32) -> Self {
        self.set_remaining_burst(id, remaining);
        self
    }

    /// Sets the remaining burst of a queued process.
    pub fn set_remaining_burst(&mut self, id: ProcessId, remaining: u32) {
        self.remaining.insert(id, remaining);
    }

    /// Remaining burst of a queued process.
    pub fn remaining_burst(&self, id: ProcessId) -> Option<u32> {
        self.remaining.get(&id).copied()
    }
}
