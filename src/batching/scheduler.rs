//! Greedy batch scheduler.
//!
//! # Algorithm
//!
//! 1. Validate constraints and jobs (duplicate ids, oversized jobs)
//! 2. Order jobs with the configured [`JobOrdering`] (priority by default)
//! 3. Scan once, keeping a single open batch:
//!    a. Admit the job if volume and item limits still hold
//!    b. Otherwise seal the open batch and start a new one with the job
//! 4. Seal the last open batch
//!
//! Each sealed batch costs its longest member duration.

use super::config::Constraints;
use super::rules::{JobOrdering, JobRule};
use super::types::{Batch, OpenBatch, PrintJob};
use crate::error::{Error, Result};
use log::{debug, trace};
use std::collections::HashSet;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Output of [`BatchScheduler::schedule`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SchedulingResult {
    /// Every job id exactly once, batch by batch.
    pub order: Vec<String>,
    /// Sum of the batch costs.
    pub total_time: u64,
    /// Sealed batches in sealing order.
    pub batches: Vec<Batch>,
}

impl SchedulingResult {
    fn new() -> Self {
        Self {
            order: Vec::new(),
            total_time: 0,
            batches: Vec::new(),
        }
    }

    fn push(&mut self, batch: Batch) -> Result<()> {
        self.total_time = self
            .total_time
            .checked_add(batch.time)
            .ok_or_else(|| Error::invalid("jobs", "total time overflows u64"))?;
        debug!(
            "sealed batch {}: {:?} (volume {}, time {})",
            self.batches.len(),
            batch.job_ids,
            batch.volume,
            batch.time
        );
        self.order.extend(batch.job_ids.iter().cloned());
        self.batches.push(batch);
        Ok(())
    }
}

impl fmt::Display for SchedulingResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "order: [{}]", self.order.join(", "))?;
        write!(
            f,
            "total time: {} in {} batch(es)",
            self.total_time,
            self.batches.len()
        )
    }
}

/// Orders jobs and packs them into capacity-respecting batches.
///
/// # Examples
///
/// ```
/// use u_batchcut::batching::{BatchScheduler, Constraints, PrintJob};
///
/// let jobs = vec![
///     PrintJob::new("M1", 100.0, 2, 120).unwrap(),
///     PrintJob::new("M2", 150.0, 1, 90).unwrap(),
///     PrintJob::new("M3", 120.0, 3, 150).unwrap(),
/// ];
/// let result = BatchScheduler::new()
///     .schedule(&jobs, &Constraints::new(300.0, 2))
///     .unwrap();
///
/// assert_eq!(result.order, vec!["M2", "M1", "M3"]);
/// assert_eq!(result.total_time, 270);
/// ```
#[derive(Default)]
pub struct BatchScheduler {
    ordering: JobOrdering,
}

impl BatchScheduler {
    /// Creates a scheduler ordering jobs by priority only.
    pub fn new() -> Self {
        Self {
            ordering: JobOrdering::by_priority(),
        }
    }

    /// Creates a scheduler with a custom ordering.
    pub fn with_ordering(ordering: JobOrdering) -> Self {
        Self { ordering }
    }

    /// Appends a tie-breaking rule after the existing ones.
    pub fn with_rule<R: JobRule + 'static>(mut self, rule: R) -> Self {
        self.ordering = self.ordering.with_rule(rule);
        self
    }

    /// Returns the names of the ordering rules.
    pub fn rule_names(&self) -> Vec<&str> {
        self.ordering.rule_names()
    }

    /// Schedules `jobs` under `constraints`.
    ///
    /// Fails with [`Error::InvalidInput`] on invalid constraints, a
    /// duplicate id, a job whose volume alone exceeds `max_volume`, or a
    /// total time that does not fit in `u64`. No partial result is returned.
    pub fn schedule(
        &self,
        jobs: &[PrintJob],
        constraints: &Constraints,
    ) -> Result<SchedulingResult> {
        validate(jobs, constraints)?;

        let mut result = SchedulingResult::new();
        let mut open = OpenBatch::new();

        for job in self.ordering.sort(jobs) {
            if open.admits(job, constraints.max_volume, constraints.max_items) {
                trace!("admit {} into open batch", job.id());
                open.push(job);
                continue;
            }
            let full = std::mem::replace(&mut open, OpenBatch::new());
            if !full.is_empty() {
                result.push(full.seal())?;
            }
            open.push(job);
        }

        if !open.is_empty() {
            result.push(open.seal())?;
        }

        debug!(
            "scheduled {} jobs into {} batches, total time {}",
            jobs.len(),
            result.batches.len(),
            result.total_time
        );
        Ok(result)
    }
}

/// Schedules `jobs` with the default priority ordering.
pub fn schedule(jobs: &[PrintJob], constraints: &Constraints) -> Result<SchedulingResult> {
    BatchScheduler::new().schedule(jobs, constraints)
}

fn validate(jobs: &[PrintJob], constraints: &Constraints) -> Result<()> {
    constraints.validate()?;

    let mut seen = HashSet::with_capacity(jobs.len());
    for (i, job) in jobs.iter().enumerate() {
        if !seen.insert(job.id()) {
            return Err(Error::invalid(
                format!("jobs[{i}].id"),
                format!("duplicate job id {}", job.id()),
            ));
        }
        if job.volume() > constraints.max_volume {
            return Err(Error::invalid(
                format!("jobs[{i}].volume"),
                format!(
                    "job {} volume {} exceeds printer capacity {} and can never be scheduled",
                    job.id(),
                    job.volume(),
                    constraints.max_volume
                ),
            ));
        }
    }
    Ok(())
}
