//! Completion statistics derived from a finished run.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Completion time | Unit at which the burst reached zero, plus one |
//! | Turnaround time | Completion − arrival |
//! | Waiting time | Turnaround − original burst |
//!
//! Only processes that completed within the horizon contribute entries and
//! count toward the averages; a process whose arrival lies beyond the
//! horizon simply has no entry. With zero completed processes both averages
//! are 0.0 — callers check [`Statistics::completed_count`] before reading
//! them as meaningful.

use serde::{Deserialize, Serialize};

use crate::models::ProcessId;

use super::simulation::WorkingProcess;

/// Completion metrics of a single process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessStats {
    /// The process these metrics belong to.
    pub id: ProcessId,
    /// Time unit at which the burst reached zero, plus one.
    pub completion_time: u32,
    /// Completion minus arrival.
    pub turnaround_time: u32,
    /// Turnaround minus the burst at admission.
    pub waiting_time: u32,
}

/// Per-process completion metrics and their arithmetic means.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    /// Metrics per completed process, in input order.
    pub per_process: Vec<ProcessStats>,
    /// Mean waiting time across completed processes (0.0 if none).
    pub average_waiting_time: f64,
    /// Mean turnaround time across completed processes (0.0 if none).
    pub average_turnaround_time: f64,
}

impl Statistics {
    /// Derives statistics from the engine's working copy after the loop.
    pub(crate) fn calculate(procs: &[WorkingProcess]) -> Self {
        let mut per_process = Vec::new();
        let mut total_waiting: u64 = 0;
        let mut total_turnaround: u64 = 0;

        for p in procs {
            if let Some(completion) = p.completion_time {
                let turnaround = completion - p.arrival_time;
                let waiting = turnaround.saturating_sub(p.original_burst);
                per_process.push(ProcessStats {
                    id: p.id,
                    completion_time: completion,
                    turnaround_time: turnaround,
                    waiting_time: waiting,
                });
                total_waiting += u64::from(waiting);
                total_turnaround += u64::from(turnaround);
            }
        }

        let count = per_process.len();
        let (average_waiting_time, average_turnaround_time) = if count == 0 {
            (0.0, 0.0)
        } else {
            (
                total_waiting as f64 / count as f64,
                total_turnaround as f64 / count as f64,
            )
        };

        Self {
            per_process,
            average_waiting_time,
            average_turnaround_time,
        }
    }

    /// Metrics for one process, if it completed.
    pub fn for_process(&self, id: ProcessId) -> Option<&ProcessStats> {
        self.per_process.iter().find(|stats| stats.id == id)
    }

    /// Number of processes that completed within the horizon.
    pub fn completed_count(&self) -> usize {
        self.per_process.len()
    }
}
