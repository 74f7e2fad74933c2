//! Discrete-time CPU scheduling simulator.
//!
//! Simulates classical uniprocessor scheduling disciplines — FCFS, SJF,
//! SRTF, and Round-Robin — over a fixed set of processes, producing a
//! per-time-unit timeline (CPU occupancy and ready-queue contents) and
//! per-process completion statistics.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Process`, `ProcessSet`, `Timeline`,
//!   `Keyframe`, `CpuSlot`
//! - **`policy`**: Ready-queue disciplines — the `SchedulePolicy` trait and
//!   the four built-in rules
//! - **`engine`**: The simulation driver and statistics aggregation
//! - **`validation`**: Input integrity checks (duplicate IDs/names,
//!   incomplete descriptors, zero bursts)
//!
//! # Architecture
//!
//! The engine is a pure function of its inputs: `engine::simulate` takes an
//! immutable process set and an algorithm selector, runs the whole
//! simulation loop on a private working copy, and returns the timeline and
//! statistics. The caller-owned `ProcessSet` is never mutated by a run, so
//! repeated runs on unchanged input yield identical output. Rendering
//! (timeline blocks, queue cells, averages text) is a consumer of these
//! results and lives outside this crate.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2015), "Modern Operating Systems", Ch. 2.4

pub mod engine;
pub mod models;
pub mod policy;
pub mod validation;
