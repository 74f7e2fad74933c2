//! The shared simulation loop.
//!
//! # Algorithm
//!
//! For every time unit from 0 to the horizon:
//!
//! 1. Admit processes whose arrival time equals the unit (set order breaks
//!    ties among simultaneous arrivals).
//! 2. Let the policy reorder the queue (`before_select`).
//! 3. Run the queue front: decrement its remaining burst and record the
//!    post-decrement value; record every other queued process as waiting.
//! 4. On completion (remaining burst 0), stamp `completion = unit + 1`,
//!    remove the front, and let the policy react (`on_complete`).
//! 5. Record the post-removal queue snapshot.
//!
//! The horizon is `min(arrival) + sum(burst)`, so the loop always terminates
//! in O(horizon × process count) work.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::{CpuSlot, Keyframe, Process, ProcessId, ProcessSet, Timeline};
use crate::policy::{Algorithm, PolicyContext, ReadyQueue};

use super::stats::Statistics;

/// Outcome of one simulation run: the timeline and the derived statistics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Per-time-unit CPU occupancy and queue snapshots.
    pub timeline: Timeline,
    /// Per-process completion metrics and their averages.
    pub statistics: Statistics,
}

/// Engine-private copy of one descriptor, mutated over a single run.
#[derive(Debug, Clone)]
pub(crate) struct WorkingProcess {
    pub(crate) id: ProcessId,
    pub(crate) arrival_time: u32,
    pub(crate) remaining_burst: u32,
    pub(crate) original_burst: u32,
    pub(crate) completion_time: Option<u32>,
}

impl WorkingProcess {
    fn new(process: &Process) -> Self {
        Self {
            id: process.id,
            arrival_time: process.arrival_time,
            remaining_burst: process.burst_time,
            original_burst: process.burst_time,
            completion_time: None,
        }
    }
}

/// Simulates the complete drafts of a process set under `algorithm`.
///
/// Equivalent to `simulate_processes(&set.snapshot(), algorithm)`; the set
/// itself is never mutated, so successive runs on an unchanged set are
/// identical.
pub fn simulate(set: &ProcessSet, algorithm: Algorithm) -> SimulationResult {
    simulate_processes(&set.snapshot(), algorithm)
}

/// Simulates an ordered slice of process descriptors under `algorithm`.
///
/// Returns an empty result for an empty slice (horizon 0) and for
/// Round-Robin with a zero quantum (degenerate configuration); neither case
/// is an error.
///
/// # Example
///
/// ```
/// use cpu_schedule::engine::simulate_processes;
/// use cpu_schedule::models::Process;
/// use cpu_schedule::policy::Algorithm;
///
/// let processes = vec![
///     Process::new(1u64, "A", 0, 3),
///     Process::new(2u64, "B", 1, 2),
/// ];
/// let result = simulate_processes(&processes, Algorithm::Fcfs);
///
/// assert_eq!(result.timeline.len(), 5);
/// assert!((result.statistics.average_waiting_time - 1.0).abs() < 1e-10);
/// assert!((result.statistics.average_turnaround_time - 3.5).abs() < 1e-10);
/// ```
pub fn simulate_processes(processes: &[Process], algorithm: Algorithm) -> SimulationResult {
    if let Algorithm::RoundRobin { quantum: 0 } = algorithm {
        return SimulationResult::default();
    }

    let total = horizon(processes);
    let mut procs: Vec<WorkingProcess> = processes.iter().map(WorkingProcess::new).collect();
    let index: HashMap<ProcessId, usize> = procs
        .iter()
        .enumerate()
        .map(|(slot, p)| (p.id, slot))
        .collect();

    let mut policy = algorithm.policy();
    let mut queue = ReadyQueue::new();
    let mut timeline = Timeline::with_capacity(total as usize);

    for unit in 0..total {
        for p in &procs {
            if p.arrival_time == unit {
                queue.push_back(p.id);
            }
        }

        let ctx = queue_context(&procs, &index, &queue);
        policy.before_select(&mut queue, &ctx);

        let mut keyframe = Keyframe::new();
        if let Some(front) = queue.front() {
            if let Some(&slot) = index.get(&front) {
                let running = &mut procs[slot];
                // A zero-burst descriptor (precondition violation) completes
                // on its first scheduled unit instead of underflowing.
                running.remaining_burst = running.remaining_burst.saturating_sub(1);
                keyframe.insert(front, CpuSlot::Running(running.remaining_burst));
                for waiting in queue.iter().skip(1) {
                    keyframe.insert(waiting, CpuSlot::Waiting);
                }
                policy.after_run();

                if running.remaining_burst == 0 {
                    running.completion_time = Some(unit + 1);
                    queue.pop_front();
                    let ctx = queue_context(&procs, &index, &queue);
                    policy.on_complete(&mut queue, &ctx);
                }
            }
        }

        timeline.push_unit(keyframe, queue.snapshot());
    }

    SimulationResult {
        timeline,
        statistics: Statistics::calculate(&procs),
    }
}

/// The simulation horizon: `min(arrival) + sum(burst)`, 0 for no processes.
fn horizon(processes: &[Process]) -> u32 {
    let min_arrival = match processes.iter().map(|p| p.arrival_time).min() {
        Some(min) => min,
        None => return 0,
    };
    min_arrival + processes.iter().map(|p| p.burst_time).sum::<u32>()
}

fn queue_context(
    procs: &[WorkingProcess],
    index: &HashMap<ProcessId, usize>,
    queue: &ReadyQueue,
) -> PolicyContext {
    let mut ctx = PolicyContext::new();
    for id in queue.iter() {
        if let Some(&slot) = index.get(&id) {
            ctx.set_remaining_burst(id, procs[slot].remaining_burst);
        }
    }
    ctx
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pid(raw: u64) -> ProcessId {
        ProcessId::new(raw)
    }

    fn procs(specs: &[(u64, u32, u32)]) -> Vec<Process> {
        specs
            .iter()
            .map(|&(id, arrival, burst)| {
                Process::new(id, format!("P{id}"), arrival, burst)
            })
            .collect()
    }

    fn keyframe(entries: &[(u64, i64)]) -> Keyframe {
        entries
            .iter()
            .map(|&(id, value)| {
                let slot = CpuSlot::try_from(value).unwrap();
                (pid(id), slot)
            })
            .collect()
    }

    fn snapshot(ids: &[u64]) -> Vec<ProcessId> {
        ids.iter().map(|&id| pid(id)).collect()
    }

    const ALL_ALGORITHMS: [Algorithm; 5] = [
        Algorithm::Fcfs,
        Algorithm::Sjf,
        Algorithm::Srtf,
        Algorithm::RoundRobin { quantum: 1 },
        Algorithm::RoundRobin { quantum: 3 },
    ];

    #[test]
    fn test_fcfs_worked_example() {
        // A(arrival 0, burst 3), B(arrival 1, burst 2).
        let input = procs(&[(1, 0, 3), (2, 1, 2)]);
        let result = simulate_processes(&input, Algorithm::Fcfs);

        assert_eq!(
            result.timeline.keyframes,
            vec![
                keyframe(&[(1, 2)]),
                keyframe(&[(1, 1), (2, -1)]),
                keyframe(&[(1, 0), (2, -1)]),
                keyframe(&[(2, 1)]),
                keyframe(&[(2, 0)]),
            ]
        );
        assert_eq!(
            result.timeline.queue_keyframes,
            vec![
                snapshot(&[1]),
                snapshot(&[1, 2]),
                snapshot(&[2]),
                snapshot(&[2]),
                snapshot(&[]),
            ]
        );

        let a = result.statistics.for_process(pid(1)).unwrap();
        assert_eq!(a.completion_time, 3);
        assert_eq!(a.turnaround_time, 3);
        assert_eq!(a.waiting_time, 0);

        let b = result.statistics.for_process(pid(2)).unwrap();
        assert_eq!(b.completion_time, 5);
        assert_eq!(b.turnaround_time, 4);
        assert_eq!(b.waiting_time, 2);

        assert!((result.statistics.average_waiting_time - 1.0).abs() < 1e-10);
        assert!((result.statistics.average_turnaround_time - 3.5).abs() < 1e-10);
    }

    #[test]
    fn test_fcfs_is_non_preemptive() {
        let input = procs(&[(1, 0, 4), (2, 1, 1), (3, 2, 2)]);
        let result = simulate_processes(&input, Algorithm::Fcfs);

        // Once selected, a process holds the CPU on every consecutive unit
        // until its burst reaches zero.
        let mut current: Option<ProcessId> = None;
        for unit in 0..result.timeline.len() {
            let running = result.timeline.running_at(unit);
            if let (Some(prev), Some(next)) = (current, running) {
                if prev != next {
                    let prev_done = result.timeline.completion_unit(prev);
                    assert!(prev_done.is_some() && prev_done.unwrap() < unit);
                }
            }
            current = running.or(current);
        }
    }

    #[test]
    fn test_sjf_picks_shortest_next_job() {
        // A runs to completion first (arrived alone), then C (burst 1)
        // overtakes B (burst 2) despite arriving later.
        let input = procs(&[(1, 0, 4), (2, 1, 2), (3, 2, 1)]);
        let result = simulate_processes(&input, Algorithm::Sjf);

        assert_eq!(result.timeline.running_at(3), Some(pid(1)));
        assert_eq!(result.timeline.running_at(4), Some(pid(3)));
        assert_eq!(result.timeline.running_at(5), Some(pid(2)));
        assert_eq!(result.timeline.completion_unit(pid(3)), Some(4));
        assert_eq!(result.timeline.completion_unit(pid(2)), Some(6));
    }

    #[test]
    fn test_srtf_preempts_on_shorter_arrival() {
        // B arrives at unit 1 with burst 1 < A's remaining 2.
        let input = procs(&[(1, 0, 3), (2, 1, 1)]);
        let result = simulate_processes(&input, Algorithm::Srtf);

        assert_eq!(result.timeline.running_at(0), Some(pid(1)));
        assert_eq!(result.timeline.running_at(1), Some(pid(2)));
        assert_eq!(result.timeline.running_at(2), Some(pid(1)));

        let b = result.statistics.for_process(pid(2)).unwrap();
        assert_eq!(b.completion_time, 2);
        assert_eq!(b.waiting_time, 0);

        let a = result.statistics.for_process(pid(1)).unwrap();
        assert_eq!(a.completion_time, 4);
        assert_eq!(a.waiting_time, 1);
    }

    #[test]
    fn test_srtf_no_preemption_on_equal_remaining() {
        // B's burst 2 equals A's remaining 2: the stable sort keeps A in
        // front, so no preemption occurs.
        let input = procs(&[(1, 0, 3), (2, 1, 2)]);
        let result = simulate_processes(&input, Algorithm::Srtf);

        assert_eq!(result.timeline.running_at(1), Some(pid(1)));
        assert_eq!(result.timeline.running_at(2), Some(pid(1)));
        assert_eq!(result.timeline.completion_unit(pid(1)), Some(2));
    }

    #[test]
    fn test_round_robin_alternates_on_quantum() {
        let input = procs(&[(1, 0, 5), (2, 0, 5)]);
        let result = simulate_processes(&input, Algorithm::RoundRobin { quantum: 2 });

        let running: Vec<_> = (0..result.timeline.len())
            .map(|unit| result.timeline.running_at(unit))
            .collect();
        let expected: Vec<_> = [1, 1, 2, 2, 1, 1, 2, 2, 1, 2]
            .iter()
            .map(|&id| Some(pid(id)))
            .collect();
        assert_eq!(running, expected);

        let a = result.statistics.for_process(pid(1)).unwrap();
        let b = result.statistics.for_process(pid(2)).unwrap();
        assert_eq!(a.completion_time, 9);
        assert_eq!(b.completion_time, 10);
        assert!((result.statistics.average_turnaround_time - 9.5).abs() < 1e-10);
        assert!((result.statistics.average_waiting_time - 4.5).abs() < 1e-10);
    }

    #[test]
    fn test_round_robin_respects_quantum_bound() {
        let input = procs(&[(1, 0, 4), (2, 0, 3), (3, 1, 3)]);
        let quantum = 2;
        let result = simulate_processes(&input, Algorithm::RoundRobin { quantum });

        // No process runs more than `quantum` consecutive units while
        // another process waits at the start of its slice.
        let mut streak = 0usize;
        let mut current: Option<ProcessId> = None;
        for unit in 0..result.timeline.len() {
            let running = result.timeline.running_at(unit);
            if running.is_some() && running == current {
                streak += 1;
            } else {
                streak = 1;
                current = running;
            }
            let others_waiting = result
                .timeline
                .queue_at(unit)
                .map(|queue| queue.len() > 1)
                .unwrap_or(false);
            if others_waiting {
                assert!(streak <= quantum as usize);
            }
        }
    }

    #[test]
    fn test_round_robin_zero_quantum_is_degenerate() {
        let input = procs(&[(1, 0, 3)]);
        let result = simulate_processes(&input, Algorithm::RoundRobin { quantum: 0 });
        assert!(result.timeline.is_empty());
        assert_eq!(result.statistics.completed_count(), 0);
    }

    #[test]
    fn test_empty_input() {
        let result = simulate_processes(&[], Algorithm::Fcfs);
        assert!(result.timeline.is_empty());
        assert_eq!(result.statistics.completed_count(), 0);
        assert_eq!(result.statistics.average_waiting_time, 0.0);
    }

    #[test]
    fn test_idle_units_before_first_arrival() {
        let input = procs(&[(1, 2, 2)]);
        let result = simulate_processes(&input, Algorithm::Fcfs);

        assert_eq!(result.timeline.len(), 4);
        assert!(result.timeline.keyframes[0].is_empty());
        assert!(result.timeline.keyframes[1].is_empty());
        assert_eq!(result.timeline.running_at(2), Some(pid(1)));

        let stats = result.statistics.for_process(pid(1)).unwrap();
        assert_eq!(stats.completion_time, 4);
        assert_eq!(stats.waiting_time, 0);
    }

    #[test]
    fn test_arrival_beyond_horizon_never_runs() {
        // Horizon is 0 + 2 = 2, so the unit-5 arrival is never admitted.
        let input = procs(&[(1, 0, 1), (2, 5, 1)]);
        let result = simulate_processes(&input, Algorithm::Fcfs);

        assert_eq!(result.timeline.len(), 2);
        assert!(result.timeline.keyframes[1].is_empty());
        assert!(result.statistics.for_process(pid(2)).is_none());
        assert_eq!(result.statistics.completed_count(), 1);
    }

    #[test]
    fn test_zero_burst_descriptor_does_not_panic() {
        let input = procs(&[(1, 0, 0), (2, 0, 1)]);
        let result = simulate_processes(&input, Algorithm::Fcfs);

        // The zero-burst process completes on its first scheduled unit.
        assert_eq!(result.timeline.slot(0, pid(1)), Some(CpuSlot::Running(0)));
        let stats = result.statistics.for_process(pid(1)).unwrap();
        assert_eq!(stats.completion_time, 1);
    }

    #[test]
    fn test_timeline_length_and_completion_transition() {
        let input = procs(&[(1, 0, 3), (2, 1, 2), (3, 3, 4)]);
        for algorithm in ALL_ALGORITHMS {
            let result = simulate_processes(&input, algorithm);
            assert_eq!(result.timeline.len(), 9, "{algorithm}");

            for stats in &result.statistics.per_process {
                let unit = result.timeline.completion_unit(stats.id).unwrap();
                assert_eq!(unit as u32, stats.completion_time - 1, "{algorithm}");
            }
        }
    }

    #[test]
    fn test_conservation_across_algorithms() {
        let input = procs(&[(1, 0, 4), (2, 1, 2), (3, 2, 5), (4, 2, 1)]);
        for algorithm in ALL_ALGORITHMS {
            let result = simulate_processes(&input, algorithm);
            assert_eq!(result.statistics.completed_count(), input.len(), "{algorithm}");

            for process in &input {
                let stats = result.statistics.for_process(process.id).unwrap();
                assert_eq!(
                    stats.turnaround_time,
                    stats.waiting_time + process.burst_time,
                    "{algorithm}"
                );
            }
        }
    }

    #[test]
    fn test_runs_are_idempotent() {
        let input = procs(&[(1, 0, 3), (2, 1, 4), (3, 2, 2)]);
        for algorithm in ALL_ALGORITHMS {
            let first = simulate_processes(&input, algorithm);
            let second = simulate_processes(&input, algorithm);
            assert_eq!(first, second, "{algorithm}");
        }
    }

    #[test]
    fn test_simulate_does_not_mutate_the_set() {
        let mut set = ProcessSet::new();
        let a = set.add_process("A", 0, 3);
        set.add_process("B", 1, 2);

        let first = simulate(&set, Algorithm::Srtf);
        assert_eq!(set.total_time(), 5);
        assert_eq!(set.get(a).unwrap().burst_time, Some(3));

        let second = simulate(&set, Algorithm::Srtf);
        assert_eq!(first, second);
    }

    #[test]
    fn test_simulate_skips_incomplete_drafts() {
        use crate::models::ProcessDraft;

        let mut set = ProcessSet::new();
        set.add_process("A", 0, 2);
        set.add_draft(ProcessDraft::new().with_name("B"));

        let result = simulate(&set, Algorithm::Fcfs);
        assert_eq!(result.timeline.len(), 2);
        assert_eq!(result.statistics.completed_count(), 1);
    }
}
