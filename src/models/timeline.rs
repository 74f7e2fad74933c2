//! Timeline output: per-time-unit CPU occupancy and queue snapshots.
//!
//! A simulation run produces one [`Keyframe`] and one [`QueueSnapshot`] per
//! discrete time unit. Consumers (renderers, tests) read these as immutable
//! data; nothing here re-runs or reinterprets the schedule.
//!
//! # Slot encoding
//!
//! On the wire a keyframe maps process id to a signed integer, which
//! [`CpuSlot`] preserves through its serde representation:
//!
//! | Value | Meaning |
//! |-------|---------|
//! | absent | Not arrived yet, or already completed |
//! | `-1` | In the ready queue, waiting |
//! | `0` | Running; burst reaches zero at the end of this unit |
//! | `n > 0` | Running; `n` units remain after this one |

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::ProcessId;

/// One process's state within a single time unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "i64", try_from = "i64")]
pub enum CpuSlot {
    /// In the ready queue but not on the CPU.
    Waiting,
    /// On the CPU this unit; the value is the burst remaining after it.
    Running(u32),
}

impl CpuSlot {
    /// Whether the process occupies the CPU this unit.
    pub fn is_running(&self) -> bool {
        matches!(self, CpuSlot::Running(_))
    }

    /// Whether the process is queued but not running.
    pub fn is_waiting(&self) -> bool {
        matches!(self, CpuSlot::Waiting)
    }

    /// Remaining burst after this unit, if running.
    pub fn remaining(&self) -> Option<u32> {
        match self {
            CpuSlot::Running(remaining) => Some(*remaining),
            CpuSlot::Waiting => None,
        }
    }

    /// The signed wire value: `-1` for waiting, the remaining burst otherwise.
    pub fn as_signed(&self) -> i64 {
        match self {
            CpuSlot::Waiting => -1,
            CpuSlot::Running(remaining) => i64::from(*remaining),
        }
    }
}

impl From<CpuSlot> for i64 {
    fn from(slot: CpuSlot) -> Self {
        slot.as_signed()
    }
}

impl TryFrom<i64> for CpuSlot {
    type Error = String;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(CpuSlot::Waiting),
            v if (0..=i64::from(u32::MAX)).contains(&v) => Ok(CpuSlot::Running(v as u32)),
            v => Err(format!("invalid CPU slot value: {v}")),
        }
    }
}

/// Per-unit CPU occupancy: process id → slot state.
///
/// A `BTreeMap` keeps iteration and serialization order deterministic.
pub type Keyframe = BTreeMap<ProcessId, CpuSlot>;

/// Ordered ready-queue contents at one time unit, recorded after the unit's
/// completion removal. Position 0 is the process running or next to run.
pub type QueueSnapshot = Vec<ProcessId>;

/// The full output timeline of one simulation run.
///
/// `keyframes` and `queue_keyframes` always have the same length: one entry
/// per time unit from 0 to the horizon.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    /// CPU occupancy per time unit.
    pub keyframes: Vec<Keyframe>,
    /// Ready-queue contents per time unit.
    pub queue_keyframes: Vec<QueueSnapshot>,
}

impl Timeline {
    /// Creates an empty timeline with room for `total` units.
    pub fn with_capacity(total: usize) -> Self {
        Self {
            keyframes: Vec::with_capacity(total),
            queue_keyframes: Vec::with_capacity(total),
        }
    }

    /// Appends one time unit.
    pub fn push_unit(&mut self, keyframe: Keyframe, queue: QueueSnapshot) {
        self.keyframes.push(keyframe);
        self.queue_keyframes.push(queue);
    }

    /// Number of simulated time units.
    pub fn len(&self) -> usize {
        self.keyframes.len()
    }

    /// Whether the timeline covers no time units.
    pub fn is_empty(&self) -> bool {
        self.keyframes.is_empty()
    }

    /// The slot of `id` at `unit`, if the process was present.
    pub fn slot(&self, unit: usize, id: ProcessId) -> Option<CpuSlot> {
        self.keyframes.get(unit)?.get(&id).copied()
    }

    /// The process occupying the CPU at `unit`, if any.
    pub fn running_at(&self, unit: usize) -> Option<ProcessId> {
        self.keyframes.get(unit)?.iter().find_map(|(id, slot)| {
            if slot.is_running() {
                Some(*id)
            } else {
                None
            }
        })
    }

    /// The ready-queue snapshot at `unit`.
    pub fn queue_at(&self, unit: usize) -> Option<&[ProcessId]> {
        self.queue_keyframes.get(unit).map(|queue| queue.as_slice())
    }

    /// The unit in which `id` finished its burst, i.e. where its slot is
    /// `Running(0)`. `None` if the process never completed.
    pub fn completion_unit(&self, id: ProcessId) -> Option<usize> {
        self.keyframes
            .iter()
            .position(|keyframe| keyframe.get(&id) == Some(&CpuSlot::Running(0)))
    }
}
