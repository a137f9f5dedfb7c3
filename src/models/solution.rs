//! Selection (solution) model.
//!
//! A solution is an immutable snapshot: extending it returns a new value,
//! so search branches can keep sharing a common ancestor.
//!
//! # Identity
//! Two solutions are equal when they occupy the same set of `(start, end)`
//! slots, whatever jobs fill them and in whatever order they were added.
//! The search memo relies on this to merge decision paths that reach the
//! same occupancy.

use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};

use super::{Job, Objective};
use crate::error::{Result, ScheduleError};
use crate::render;

/// A set of mutually non-overlapping jobs and its objective.
///
/// Jobs are kept in inclusion order, not time order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Solution {
    jobs: Vec<Job>,
    objective: Objective,
    #[serde(skip)]
    occupied: BTreeSet<(i64, i64)>,
}

impl Solution {
    /// A solution with no jobs and a zero objective.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether `job` can be added without overlapping any selected job.
    pub fn is_job_feasible_to_add(&self, job: &Job) -> bool {
        self.conflict_with(job).is_none()
    }

    /// First selected job that overlaps `job`, if any.
    pub fn conflict_with(&self, job: &Job) -> Option<&Job> {
        self.jobs.iter().find(|j| j.overlaps(job))
    }

    /// Returns a new solution with `job` appended.
    ///
    /// # Errors
    /// [`ScheduleError::OverlappingJob`] when `job` overlaps a selected job.
    pub fn add_job(&self, job: &Job) -> Result<Self> {
        if let Some(conflict) = self.conflict_with(job) {
            return Err(ScheduleError::OverlappingJob {
                candidate: job.id(),
                conflicting: conflict.id(),
            });
        }
        Ok(self.extend_unchecked(job))
    }

    /// Appends `job` without the overlap check.
    ///
    /// Only for callers that have just tested [`is_job_feasible_to_add`](Self::is_job_feasible_to_add).
    pub(crate) fn extend_unchecked(&self, job: &Job) -> Self {
        let mut jobs = Vec::with_capacity(self.jobs.len() + 1);
        jobs.extend_from_slice(&self.jobs);
        jobs.push(*job);

        let mut occupied = self.occupied.clone();
        occupied.insert(job.range().bounds());

        Self {
            jobs,
            objective: self.objective.add_job(job),
            occupied,
        }
    }

    /// Selected jobs in inclusion order.
    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    /// Selected jobs sorted by start time.
    pub fn jobs_by_start(&self) -> Vec<Job> {
        let mut jobs = self.jobs.clone();
        jobs.sort_by_key(|j| (j.range().start(), j.id()));
        jobs
    }

    /// Objective of the selection.
    pub fn objective(&self) -> &Objective {
        &self.objective
    }

    /// Total profit.
    #[inline]
    pub fn profit(&self) -> i64 {
        self.objective.profit()
    }

    /// Number of selected jobs.
    #[inline]
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    /// Whether no job is selected.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Occupied `(start, end)` slots; the identity of this solution.
    pub fn occupied_ranges(&self) -> &BTreeSet<(i64, i64)> {
        &self.occupied
    }
}

impl PartialEq for Solution {
    fn eq(&self, other: &Self) -> bool {
        self.occupied == other.occupied
    }
}

impl Eq for Solution {}

impl Hash for Solution {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.occupied.hash(state);
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render::render_summary(self))
    }
}
