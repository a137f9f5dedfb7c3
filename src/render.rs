//! Text rendering of selections.
//!
//! Presentation only; nothing here feeds back into solving.

use std::fmt::Write;

use crate::models::Solution;

/// Slot marker for an occupied time unit.
pub const OCCUPIED: char = 'X';
/// Slot marker for an idle time unit.
pub const IDLE: char = '-';

/// One character per slot in `[0, horizon)`: [`OCCUPIED`] when a selected
/// job covers the slot, [`IDLE`] otherwise.
///
/// # Example
///
/// ```
/// use u_jobselect::models::{Job, Range, Solution};
/// use u_jobselect::render::render_timeline;
///
/// let job = Job::new(0, 1, 10, Range::new(2, 4).unwrap()).unwrap();
/// let solution = Solution::empty().add_job(&job).unwrap();
/// assert_eq!(render_timeline(&solution, 6), "--XX--");
/// ```
pub fn render_timeline(solution: &Solution, horizon: i64) -> String {
    (0..horizon.max(0))
        .map(|t| {
            if solution.jobs().iter().any(|j| j.range().contains(t)) {
                OCCUPIED
            } else {
                IDLE
            }
        })
        .collect()
}

/// Multi-line summary: total profit, job counts per priority level, then
/// each selected job in start order.
///
/// ```text
/// Objective: 120
/// 1 1 priority jobs
/// 1 2 priority jobs
/// Job 1 | 1: 0-3
/// Job 2 | 2: 3-5
/// ```
pub fn render_summary(solution: &Solution) -> String {
    let mut out = String::new();
    let objective = solution.objective();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "Objective: {}", objective.profit());
    for (priority, count) in objective.priority_counts() {
        let _ = writeln!(out, "{count} {priority} priority jobs");
    }
    for job in solution.jobs_by_start() {
        let range = job.range();
        let _ = writeln!(
            out,
            "Job {} | {}: {}-{}",
            job.id(),
            job.priority(),
            range.start(),
            range.end()
        );
    }
    out
}
