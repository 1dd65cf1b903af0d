//! Job and batch types.

use crate::error::{Error, Result};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Scheduling priority of a job. `High` (1) is scheduled first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "u8", into = "u8")
)]
pub enum Priority {
    /// Priority 1.
    High,
    /// Priority 2.
    Medium,
    /// Priority 3.
    Low,
}

impl Priority {
    /// Returns the numeric level (1, 2 or 3).
    pub fn level(self) -> u8 {
        match self {
            Priority::High => 1,
            Priority::Medium => 2,
            Priority::Low => 3,
        }
    }
}

impl TryFrom<u8> for Priority {
    type Error = Error;

    fn try_from(level: u8) -> Result<Self> {
        match level {
            1 => Ok(Priority::High),
            2 => Ok(Priority::Medium),
            3 => Ok(Priority::Low),
            _ => Err(Error::invalid(
                "priority",
                format!("priority must be 1, 2, or 3, got {level}"),
            )),
        }
    }
}

impl From<Priority> for u8 {
    fn from(priority: Priority) -> u8 {
        priority.level()
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.level())
    }
}

/// A single print job.
///
/// Only constructible through [`PrintJob::new`], which guarantees a
/// non-empty id, a positive finite volume, a valid priority and a
/// positive duration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "PrintJobRecord", into = "PrintJobRecord")
)]
pub struct PrintJob {
    id: String,
    volume: f64,
    priority: Priority,
    duration: u64,
}

impl PrintJob {
    /// Creates a validated job.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_batchcut::batching::{PrintJob, Priority};
    ///
    /// let job = PrintJob::new("M1", 100.0, 1, 120).unwrap();
    /// assert_eq!(job.priority(), Priority::High);
    /// assert!(PrintJob::new("M2", 100.0, 4, 120).is_err());
    /// ```
    pub fn new(id: impl Into<String>, volume: f64, priority: u8, duration: u64) -> Result<Self> {
        let id = id.into();
        if id.is_empty() {
            return Err(Error::invalid("id", "job id must not be empty"));
        }
        if !volume.is_finite() || volume <= 0.0 {
            return Err(Error::invalid(
                "volume",
                format!("volume of job {id} must be positive and finite, got {volume}"),
            ));
        }
        let priority = Priority::try_from(priority)?;
        if duration == 0 {
            return Err(Error::invalid(
                "duration",
                format!("duration of job {id} must be positive"),
            ));
        }
        Ok(Self {
            id,
            volume,
            priority,
            duration,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    /// Processing time of the job (minutes in the printing domain).
    pub fn duration(&self) -> u64 {
        self.duration
    }
}

/// Raw, unvalidated job record as it arrives from callers.
///
/// Converted into a [`PrintJob`] with `TryFrom`, which applies the same
/// checks as [`PrintJob::new`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PrintJobRecord {
    pub id: String,
    pub volume: f64,
    pub priority: i64,
    #[cfg_attr(feature = "serde", serde(alias = "print_time"))]
    pub duration: u64,
}

impl TryFrom<PrintJobRecord> for PrintJob {
    type Error = Error;

    fn try_from(record: PrintJobRecord) -> Result<Self> {
        let priority = u8::try_from(record.priority).map_err(|_| {
            Error::invalid(
                "priority",
                format!("priority must be 1, 2, or 3, got {}", record.priority),
            )
        })?;
        PrintJob::new(record.id, record.volume, priority, record.duration)
    }
}

impl From<PrintJob> for PrintJobRecord {
    fn from(job: PrintJob) -> Self {
        Self {
            id: job.id,
            volume: job.volume,
            priority: i64::from(job.priority.level()),
            duration: job.duration,
        }
    }
}

/// A sealed batch: jobs processed together in one printer run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Batch {
    /// Member ids in admission order.
    pub job_ids: Vec<String>,
    /// Accumulated volume of all members.
    pub volume: f64,
    /// Cost of the batch: the longest member duration.
    pub time: u64,
}

impl Batch {
    /// Number of jobs in the batch.
    pub fn len(&self) -> usize {
        self.job_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.job_ids.is_empty()
    }
}

/// The batch currently being filled during the scan.
#[derive(Debug)]
pub(crate) struct OpenBatch<'a> {
    members: Vec<&'a PrintJob>,
    volume: f64,
}

impl<'a> OpenBatch<'a> {
    pub(crate) fn new() -> Self {
        Self {
            members: Vec::new(),
            volume: 0.0,
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Whether `job` can join without exceeding either limit.
    pub(crate) fn admits(&self, job: &PrintJob, max_volume: f64, max_items: usize) -> bool {
        self.volume + job.volume() <= max_volume && self.members.len() < max_items
    }

    pub(crate) fn push(&mut self, job: &'a PrintJob) {
        self.volume += job.volume();
        self.members.push(job);
    }

    /// Closes the batch. Must only be called on a non-empty batch.
    pub(crate) fn seal(self) -> Batch {
        let time = self
            .members
            .iter()
            .map(|job| job.duration())
            .max()
            .unwrap_or(0);
        Batch {
            job_ids: self.members.iter().map(|job| job.id().to_owned()).collect(),
            volume: self.volume,
            time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_job_valid() {
        let job = PrintJob::new("M1", 100.0, 2, 120).unwrap();
        assert_eq!(job.id(), "M1");
        assert!((job.volume() - 100.0).abs() < 1e-10);
        assert_eq!(job.priority(), Priority::Medium);
        assert_eq!(job.duration(), 120);
    }

    #[test]
    fn test_new_job_rejects_bad_fields() {
        assert_eq!(PrintJob::new("", 1.0, 1, 1).unwrap_err().field(), "id");
        assert_eq!(PrintJob::new("a", 0.0, 1, 1).unwrap_err().field(), "volume");
        assert_eq!(PrintJob::new("a", -3.0, 1, 1).unwrap_err().field(), "volume");
        assert_eq!(
            PrintJob::new("a", f64::NAN, 1, 1).unwrap_err().field(),
            "volume"
        );
        assert_eq!(PrintJob::new("a", 1.0, 0, 1).unwrap_err().field(), "priority");
        assert_eq!(PrintJob::new("a", 1.0, 4, 1).unwrap_err().field(), "priority");
        assert_eq!(PrintJob::new("a", 1.0, 1, 0).unwrap_err().field(), "duration");
    }

    #[test]
    fn test_priority_levels() {
        assert_eq!(Priority::try_from(1).unwrap(), Priority::High);
        assert_eq!(Priority::try_from(3).unwrap(), Priority::Low);
        assert_eq!(u8::from(Priority::Medium), 2);
        assert!(Priority::High < Priority::Low);
    }

    #[test]
    fn test_record_conversion() {
        let record = PrintJobRecord {
            id: "M3".into(),
            volume: 120.0,
            priority: 3,
            duration: 150,
        };
        let job = PrintJob::try_from(record).unwrap();
        assert_eq!(job.priority(), Priority::Low);

        let negative = PrintJobRecord {
            id: "M4".into(),
            volume: 1.0,
            priority: -1,
            duration: 10,
        };
        assert_eq!(PrintJob::try_from(negative).unwrap_err().field(), "priority");

        let zero_time = PrintJobRecord {
            id: "M5".into(),
            volume: 1.0,
            priority: 1,
            duration: 0,
        };
        assert_eq!(PrintJob::try_from(zero_time).unwrap_err().field(), "duration");
    }

    #[test]
    fn test_record_round_trip_keeps_large_durations() {
        let job = PrintJob::new("M6", 10.0, 2, u64::MAX).unwrap();
        let record = PrintJobRecord::from(job.clone());
        assert_eq!(record.duration, u64::MAX);
        assert_eq!(PrintJob::try_from(record).unwrap(), job);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_validates_records() {
        let job: PrintJob = serde_json::from_str(
            r#"{"id": "M1", "volume": 100, "priority": 1, "print_time": 120}"#,
        )
        .unwrap();
        assert_eq!(job.duration(), 120);
        assert_eq!(job.priority(), Priority::High);

        let bad = serde_json::from_str::<PrintJob>(
            r#"{"id": "M2", "volume": 100, "priority": 5, "duration": 120}"#,
        );
        assert!(bad.is_err());

        let negative = serde_json::from_str::<PrintJob>(
            r#"{"id": "M3", "volume": 100, "priority": 1, "duration": -5}"#,
        );
        assert!(negative.is_err());

        let long = PrintJob::new("M4", 1.0, 3, u64::MAX).unwrap();
        let json = serde_json::to_string(&long).unwrap();
        assert_eq!(serde_json::from_str::<PrintJob>(&json).unwrap(), long);
    }

    #[test]
    fn test_open_batch_limits() {
        let a = PrintJob::new("a", 200.0, 1, 30).unwrap();
        let b = PrintJob::new("b", 100.0, 1, 50).unwrap();
        let c = PrintJob::new("c", 1.0, 1, 10).unwrap();

        let mut batch = OpenBatch::new();
        assert!(batch.is_empty());
        assert!(batch.admits(&a, 300.0, 2));
        batch.push(&a);
        // exactly at capacity is allowed
        assert!(batch.admits(&b, 300.0, 2));
        batch.push(&b);
        assert!(!batch.admits(&c, 1000.0, 2));

        let sealed = batch.seal();
        assert_eq!(sealed.job_ids, vec!["a", "b"]);
        assert_eq!(sealed.time, 50);
        assert_eq!(sealed.len(), 2);
        assert!((sealed.volume - 300.0).abs() < 1e-10);
    }
}
