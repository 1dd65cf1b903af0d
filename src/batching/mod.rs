//! Capacity-constrained job batching.
//!
//! Orders print jobs by priority and packs them, in a single greedy pass,
//! into batches that respect a volume limit and an item-count limit. A
//! batch takes as long as its slowest member; the schedule's total time is
//! the sum over batches.
//!
//! The heuristic never backtracks. It guarantees that every batch is
//! feasible and that every job appears exactly once, not that the total
//! time is minimal.
//!
//! Jobs whose volume alone exceeds the limit are rejected up front rather
//! than silently dropped.

mod config;
mod rules;
mod scheduler;
mod types;

pub use config::Constraints;
pub use rules::{
    ByPriority, JobOrdering, JobRule, LargestVolumeFirst, LongestDurationFirst,
    ShortestDurationFirst,
};
pub use scheduler::{schedule, BatchScheduler, SchedulingResult};
pub use types::{Batch, PrintJob, PrintJobRecord, Priority};
