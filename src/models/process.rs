//! Process descriptors and the caller-owned process set.
//!
//! A `Process` describes one unit of work by arrival time and burst time.
//! Descriptors are collected in a `ProcessSet`, which assigns stable
//! identifiers and hands the engine independent snapshots, so a simulation
//! run never mutates caller-visible state.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque unique process identifier.
///
/// Assigned by [`ProcessSet`] from a monotonic counter and never reused,
/// including after removals. Timeline and statistics structures are keyed by
/// `ProcessId`; resolving an id back to a display name is the presentation
/// layer's job.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ProcessId(u64);

impl ProcessId {
    /// Creates an id from a raw value.
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw underlying value.
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl From<u64> for ProcessId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for ProcessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A complete process descriptor.
///
/// # Preconditions
/// `burst_time` is expected to be positive and `name` unique within one
/// simulation run. Neither is enforced here — see [`crate::validation`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique identifier.
    pub id: ProcessId,
    /// Display label.
    pub name: String,
    /// Time unit at which the process becomes eligible to run.
    pub arrival_time: u32,
    /// Total CPU time units required.
    pub burst_time: u32,
}

impl Process {
    /// Creates a new descriptor.
    pub fn new(
        id: impl Into<ProcessId>,
        name: impl Into<String>,
        arrival_time: u32,
        burst_time: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            arrival_time,
            burst_time,
        }
    }
}

/// A process descriptor under construction.
///
/// Mirrors an entry form: every field starts empty and is filled in
/// independently. [`ProcessSet::remove_incomplete`] strips drafts that never
/// received all three fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessDraft {
    /// Display label, if entered.
    pub name: Option<String>,
    /// Arrival time, if entered.
    pub arrival_time: Option<u32>,
    /// Burst time, if entered.
    pub burst_time: Option<u32>,
}

impl ProcessDraft {
    /// Creates an empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the arrival time.
    pub fn with_arrival_time(mut self, arrival_time: u32) -> Self {
        self.arrival_time = Some(arrival_time);
        self
    }

    /// Sets the burst time.
    pub fn with_burst_time(mut self, burst_time: u32) -> Self {
        self.burst_time = Some(burst_time);
        self
    }

    /// Whether all three fields are present.
    pub fn is_complete(&self) -> bool {
        self.name.is_some() && self.arrival_time.is_some() && self.burst_time.is_some()
    }

    /// Materializes a complete descriptor, or `None` if a field is missing.
    pub fn finish(&self, id: ProcessId) -> Option<Process> {
        Some(Process {
            id,
            name: self.name.clone()?,
            arrival_time: self.arrival_time?,
            burst_time: self.burst_time?,
        })
    }
}

/// The caller-owned, ordered collection of process descriptors.
///
/// Read-only input to the engine: a run operates on [`ProcessSet::snapshot`],
/// an independent deep copy, and discards it afterwards. Set order is
/// significant — it breaks ties among simultaneous arrivals.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProcessSet {
    entries: Vec<(ProcessId, ProcessDraft)>,
    next_id: u64,
}

impl ProcessSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a complete descriptor and returns its assigned id.
    pub fn add_process(
        &mut self,
        name: impl Into<String>,
        arrival_time: u32,
        burst_time: u32,
    ) -> ProcessId {
        self.add_draft(
            ProcessDraft::new()
                .with_name(name)
                .with_arrival_time(arrival_time)
                .with_burst_time(burst_time),
        )
    }

    /// Appends a draft and returns its assigned id.
    pub fn add_draft(&mut self, draft: ProcessDraft) -> ProcessId {
        let id = ProcessId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, draft));
        id
    }

    /// Removes every draft missing a name, arrival time, or burst time.
    ///
    /// Returns the ids of the removed drafts so the caller can reconcile
    /// external references (entry rows, labels) to them.
    pub fn remove_incomplete(&mut self) -> Vec<ProcessId> {
        let mut removed = Vec::new();
        self.entries.retain(|(id, draft)| {
            if draft.is_complete() {
                true
            } else {
                removed.push(*id);
                false
            }
        });
        removed
    }

    /// The simulation horizon: `min(arrival_time) + sum(burst_time)` over
    /// the complete drafts. Returns 0 when no complete draft exists.
    pub fn total_time(&self) -> u32 {
        let mut min_arrival: Option<u32> = None;
        let mut total_burst: u32 = 0;
        for (_, draft) in &self.entries {
            if let (Some(arrival), Some(burst)) = (draft.arrival_time, draft.burst_time) {
                min_arrival = Some(match min_arrival {
                    Some(min) => min.min(arrival),
                    None => arrival,
                });
                total_burst += burst;
            }
        }
        match min_arrival {
            Some(min) => min + total_burst,
            None => 0,
        }
    }

    /// Independent deep copy of the complete descriptors, in set order.
    ///
    /// Incomplete drafts are skipped; callers that need to know about them
    /// use [`ProcessSet::remove_incomplete`] or [`crate::validation`] first.
    pub fn snapshot(&self) -> Vec<Process> {
        self.entries
            .iter()
            .filter_map(|(id, draft)| draft.finish(*id))
            .collect()
    }

    /// Looks up a draft by id.
    pub fn get(&self, id: ProcessId) -> Option<&ProcessDraft> {
        self.entries
            .iter()
            .find(|(entry_id, _)| *entry_id == id)
            .map(|(_, draft)| draft)
    }

    /// Iterates over all entries in set order.
    pub fn iter(&self) -> impl Iterator<Item = (ProcessId, &ProcessDraft)> + '_ {
        self.entries.iter().map(|(id, draft)| (*id, draft))
    }

    /// Number of entries, complete or not.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
