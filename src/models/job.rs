//! Job model and id sequencing.
//!
//! A job is a time-bounded unit of work with a priority class and a profit.
//! Jobs are small `Copy` values; every solution that selects a job holds
//! its own copy, and nothing mutates a job after construction.

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

use super::Range;
use crate::error::{Result, ScheduleError};

/// A candidate job for selection.
///
/// Identity is the `id` alone: two jobs with the same id compare equal
/// and hash identically regardless of their other fields.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "RawJob")]
pub struct Job {
    id: u64,
    priority: i32,
    profit: i64,
    range: Range,
}

#[derive(Deserialize)]
struct RawJob {
    id: u64,
    priority: i32,
    profit: i64,
    range: Range,
}

impl TryFrom<RawJob> for Job {
    type Error = ScheduleError;

    fn try_from(raw: RawJob) -> Result<Self> {
        Job::new(raw.id, raw.priority, raw.profit, raw.range)
    }
}

impl Job {
    /// Creates a job with an explicit id.
    ///
    /// Prefer [`JobIdSequence::job`] when ids should follow creation order.
    /// Priority bounds are a problem-level setting and are checked by
    /// [`validate_jobs`](crate::validation::validate_jobs).
    pub fn new(id: u64, priority: i32, profit: i64, range: Range) -> Result<Self> {
        if profit <= 0 {
            return Err(ScheduleError::NonPositiveProfit { id, profit });
        }
        Ok(Self {
            id,
            priority,
            profit,
            range,
        })
    }

    /// Unique job id.
    #[inline]
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Priority class (lower number = more important).
    #[inline]
    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// Profit earned when the job is selected.
    #[inline]
    pub fn profit(&self) -> i64 {
        self.profit
    }

    /// Time range the job occupies.
    #[inline]
    pub fn range(&self) -> Range {
        self.range
    }

    /// Whether this job's range shares a slot with another job's range.
    #[inline]
    pub fn overlaps(&self, other: &Job) -> bool {
        self.range.overlaps(&other.range)
    }
}

impl PartialEq for Job {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Job {}

impl Hash for Job {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Monotonic job id source.
///
/// Ids start at 0 and grow by one per job built through the sequence.
/// Each problem instance owns its own sequence, so independent instances
/// (and tests) never share counter state.
#[derive(Debug, Clone, Default)]
pub struct JobIdSequence {
    next: u64,
}

impl JobIdSequence {
    /// Creates a sequence starting at 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a sequence starting at `first`.
    pub fn starting_at(first: u64) -> Self {
        Self { next: first }
    }

    /// Returns the next id and advances the sequence.
    pub fn next_id(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }

    /// Id the next call to [`next_id`](Self::next_id) will return.
    pub fn peek(&self) -> u64 {
        self.next
    }

    /// Restarts the sequence at 0.
    pub fn reset(&mut self) {
        self.next = 0;
    }

    /// Builds a job with the next id.
    ///
    /// The id is only consumed when the job is valid.
    pub fn job(&mut self, priority: i32, profit: i64, range: Range) -> Result<Job> {
        let job = Job::new(self.next, priority, profit, range)?;
        self.next += 1;
        Ok(job)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn range(start: i64, end: i64) -> Range {
        Range::new(start, end).unwrap()
    }

    #[test]
    fn test_sequence_assigns_creation_order() {
        let mut ids = JobIdSequence::new();
        let a = ids.job(1, 100, range(0, 5)).unwrap();
        let b = ids.job(2, 60, range(0, 3)).unwrap();
        let c = ids.job(1, 60, range(3, 5)).unwrap();

        assert_eq!((a.id(), b.id(), c.id()), (0, 1, 2));
        assert_eq!(ids.peek(), 3);
    }

    #[test]
    fn test_sequence_reset() {
        let mut ids = JobIdSequence::starting_at(7);
        assert_eq!(ids.next_id(), 7);
        ids.reset();
        assert_eq!(ids.next_id(), 0);
        assert_eq!(ids.next_id(), 1);
    }

    #[test]
    fn test_invalid_job_does_not_consume_id() {
        let mut ids = JobIdSequence::new();
        let err = ids.job(1, 0, range(0, 1)).unwrap_err();
        assert_eq!(err, ScheduleError::NonPositiveProfit { id: 0, profit: 0 });
        assert_eq!(ids.job(1, 10, range(0, 1)).unwrap().id(), 0);
    }

    #[test]
    fn test_identity_is_id_only() {
        let a = Job::new(3, 1, 100, range(0, 5)).unwrap();
        let b = Job::new(3, 2, 50, range(10, 12)).unwrap();
        let c = Job::new(4, 1, 100, range(0, 5)).unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);

        let set: HashSet<Job> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_job_overlap_delegates_to_range() {
        let a = Job::new(0, 1, 10, range(0, 3)).unwrap();
        let b = Job::new(1, 1, 10, range(2, 4)).unwrap();
        let c = Job::new(2, 1, 10, range(3, 6)).unwrap();

        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_job_deserialize_validates_profit() {
        let json = r#"{"id":1,"priority":1,"profit":-5,"range":{"start":0,"end":2}}"#;
        assert!(serde_json::from_str::<Job>(json).is_err());

        let json = r#"{"id":1,"priority":1,"profit":5,"range":{"start":0,"end":2}}"#;
        let job: Job = serde_json::from_str(json).unwrap();
        assert_eq!(job.profit(), 5);
    }
}
