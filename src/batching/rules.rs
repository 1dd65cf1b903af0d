//! Job ordering rules.
//!
//! Rules are evaluated sequentially: a later rule is only consulted when
//! every earlier rule scores two jobs equally. Scores are compared with
//! `f64::total_cmp`, and a NaN score sorts after every other score. Jobs
//! tied under all rules keep their input order, since the sort is stable.

use super::types::PrintJob;
use std::cmp::Ordering;

/// A scoring rule for print jobs.
///
/// Lower scores are scheduled first.
///
/// # Examples
///
/// ```
/// use u_batchcut::batching::{JobRule, PrintJob};
///
/// // Prefer jobs with shorter ids.
/// struct ShortIdFirst;
///
/// impl JobRule for ShortIdFirst {
///     fn name(&self) -> &str { "ShortIdFirst" }
///     fn score(&self, job: &PrintJob) -> f64 { job.id().len() as f64 }
/// }
/// ```
pub trait JobRule: Send + Sync {
    /// Returns the name of this rule.
    fn name(&self) -> &str;

    /// Computes the score of a job. Lower is scheduled earlier; NaN is
    /// scheduled last.
    fn score(&self, job: &PrintJob) -> f64;
}

/// Priority 1 before 2 before 3.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByPriority;

impl JobRule for ByPriority {
    fn name(&self) -> &str {
        "ByPriority"
    }

    fn score(&self, job: &PrintJob) -> f64 {
        f64::from(job.priority().level())
    }
}

/// Longer jobs first.
#[derive(Debug, Clone, Copy, Default)]
pub struct LongestDurationFirst;

impl JobRule for LongestDurationFirst {
    fn name(&self) -> &str {
        "LongestDurationFirst"
    }

    fn score(&self, job: &PrintJob) -> f64 {
        -(job.duration() as f64)
    }
}

/// Shorter jobs first.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortestDurationFirst;

impl JobRule for ShortestDurationFirst {
    fn name(&self) -> &str {
        "ShortestDurationFirst"
    }

    fn score(&self, job: &PrintJob) -> f64 {
        job.duration() as f64
    }
}

/// Larger jobs first.
#[derive(Debug, Clone, Copy, Default)]
pub struct LargestVolumeFirst;

impl JobRule for LargestVolumeFirst {
    fn name(&self) -> &str {
        "LargestVolumeFirst"
    }

    fn score(&self, job: &PrintJob) -> f64 {
        -job.volume()
    }
}

/// Sequential composition of [`JobRule`]s.
pub struct JobOrdering {
    rules: Vec<Box<dyn JobRule>>,
}

impl JobOrdering {
    /// Creates an ordering with no rules (input order is kept).
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Ordering used by the default scheduler: [`ByPriority`] only.
    pub fn by_priority() -> Self {
        Self::new().with_rule(ByPriority)
    }

    /// Appends a rule. It acts only among jobs tied on all earlier rules.
    pub fn with_rule<R: JobRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Returns the names of all rules in order.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    /// Returns indices into `jobs` in scheduling order.
    pub fn sort_indices(&self, jobs: &[PrintJob]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..jobs.len()).collect();
        if self.rules.is_empty() {
            return indices;
        }

        let scores: Vec<Vec<f64>> = jobs
            .iter()
            .map(|job| {
                self.rules
                    .iter()
                    .map(|rule| normalize(rule.score(job)))
                    .collect()
            })
            .collect();

        // `sort_by` is stable: fully tied jobs keep their input order.
        indices.sort_by(|&a, &b| {
            scores[a]
                .iter()
                .zip(scores[b].iter())
                .map(|(va, vb)| va.total_cmp(vb))
                .find(|ord| ord.is_ne())
                .unwrap_or(Ordering::Equal)
        });

        indices
    }

    /// Returns references to `jobs` in scheduling order.
    pub fn sort<'a>(&self, jobs: &'a [PrintJob]) -> Vec<&'a PrintJob> {
        self.sort_indices(jobs)
            .into_iter()
            .map(|i| &jobs[i])
            .collect()
    }
}

/// Maps NaN to `+inf` and `-0.0` to `0.0` so `total_cmp` agrees with `<`.
fn normalize(score: f64) -> f64 {
    if score.is_nan() {
        f64::INFINITY
    } else {
        score + 0.0
    }
}

impl Default for JobOrdering {
    fn default() -> Self {
        Self::by_priority()
    }
}
