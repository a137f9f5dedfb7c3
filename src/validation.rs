//! Input validation and solution auditing.
//!
//! - [`validate_jobs`] checks a job list against a [`ProblemConfig`]
//!   before solving: duplicate ids, priorities outside the configured
//!   levels, ranges outside the horizon.
//! - [`check_feasibility`] re-checks a finished selection for overlapping
//!   jobs. It works from raw `(start, end)` bounds and shares no code with
//!   the solver's overlap test, so it can audit solver output.
//!
//! Both report every problem found, not just the first.

use std::collections::HashSet;

use crate::config::ProblemConfig;
use crate::models::{Job, Solution};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two jobs share the same id.
    DuplicateId,
    /// A job's priority is outside the configured levels.
    PriorityOutOfRange,
    /// A job's range extends outside `[0, horizon)`.
    OutsideHorizon,
    /// Two selected jobs occupy a common time slot.
    Overlap,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

fn into_result(errors: Vec<ValidationError>) -> ValidationResult {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a job list against the problem bounds.
///
/// Checks:
/// 1. No duplicate job ids
/// 2. Every priority lies in `min_priority..=max_priority`
/// 3. Every range lies in `[0, horizon]` (end exclusive)
pub fn validate_jobs(jobs: &[Job], config: &ProblemConfig) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();
    let levels = config.priority_levels();

    for job in jobs {
        if !ids.insert(job.id()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate job ID: {}", job.id()),
            ));
        }

        if !levels.contains(&job.priority()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::PriorityOutOfRange,
                format!(
                    "Job {} has priority {} outside {}..={}",
                    job.id(),
                    job.priority(),
                    levels.start(),
                    levels.end()
                ),
            ));
        }

        let range = job.range();
        if range.start() < 0 || range.end() > config.horizon {
            errors.push(ValidationError::new(
                ValidationErrorKind::OutsideHorizon,
                format!(
                    "Job {} range [{}, {}) is outside horizon {}",
                    job.id(),
                    range.start(),
                    range.end(),
                    config.horizon
                ),
            ));
        }
    }

    into_result(errors)
}

/// Audits a selection for overlapping jobs.
///
/// Reports one error per overlapping pair, in inclusion order.
pub fn check_feasibility(solution: &Solution) -> ValidationResult {
    let mut errors = Vec::new();
    let mut seen: Vec<(u64, i64, i64)> = Vec::with_capacity(solution.len());

    for job in solution.jobs() {
        let (start, end) = job.range().bounds();
        for &(other_id, other_start, other_end) in &seen {
            if start < other_end && other_start < end {
                errors.push(ValidationError::new(
                    ValidationErrorKind::Overlap,
                    format!(
                        "Job {} [{start}, {end}) overlaps job {other_id} [{other_start}, {other_end})",
                        job.id()
                    ),
                ));
            }
        }
        seen.push((job.id(), start, end));
    }

    into_result(errors)
}

/// Whether no two selected jobs overlap.
pub fn is_feasible(solution: &Solution) -> bool {
    check_feasibility(solution).is_ok()
}
