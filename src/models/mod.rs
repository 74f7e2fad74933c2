//! Simulation domain models.
//!
//! Pure data types with no scheduling behavior: the process descriptors fed
//! into a run, and the timeline structures a run produces.
//!
//! | Type | Role |
//! |------|------|
//! | `Process` | Complete descriptor of one unit of work |
//! | `ProcessDraft` | Descriptor under construction (optional fields) |
//! | `ProcessSet` | Caller-owned ordered collection of drafts |
//! | `Timeline` | Per-time-unit CPU occupancy and queue snapshots |
//! | `CpuSlot` | One process's state within a single time unit |

mod process;
mod timeline;

pub use process::{Process, ProcessDraft, ProcessId, ProcessSet};
pub use timeline::{CpuSlot, Keyframe, QueueSnapshot, Timeline};
