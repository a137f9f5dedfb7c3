//! Weighted interval scheduling by dynamic programming.
//!
//! # Algorithm
//!
//! 1. Keep only jobs compatible with the starting selection.
//! 2. Sort them by end time.
//! 3. For the k-th job, `p(k)` = number of jobs ending at or before its start
//!    (binary search over the sorted ends).
//! 4. `best[k]` = better of `best[k-1]` (skip) and `best[p(k)] + job_k` (take),
//!    ranked with the lexicographic objective; ties skip.
//!
//! The objective is additive and its ranking is invariant under a common
//! offset, so the recurrence is exact for the full lexicographic order.
//! Among equally ranked selections it may pick different jobs than the
//! memoized search.
//!
//! # Complexity
//! O(n log n) comparisons plus O(n * L) objective copies, L = priority levels.
//!
//! # Reference
//! Kleinberg & Tardos (2005), "Algorithm Design", Ch. 6.1

use super::SearchStats;
use crate::models::{Job, Objective, Solution};

/// Runs the interval DP over `jobs` starting from `initial`.
pub(super) fn search(jobs: &[Job], initial: &Solution, stats: &mut SearchStats) -> Solution {
    let mut candidates: Vec<Job> = jobs
        .iter()
        .filter(|j| initial.is_job_feasible_to_add(j))
        .copied()
        .collect();
    candidates.sort_by_key(|j| (j.range().end(), j.range().start()));

    let ends: Vec<i64> = candidates.iter().map(|j| j.range().end()).collect();
    let n = candidates.len();

    // Index 0 is the empty prefix; job k (1-based) is candidates[k - 1].
    let mut best: Vec<Objective> = Vec::with_capacity(n + 1);
    let mut take = vec![false; n + 1];
    let mut compatible = vec![0usize; n + 1];
    best.push(Objective::new());

    for k in 1..=n {
        let job = &candidates[k - 1];
        let p = ends.partition_point(|&end| end <= job.range().start());
        compatible[k] = p;

        let with_job = best[p].add_job(job);
        if with_job.is_better(&best[k - 1]) {
            take[k] = true;
            best.push(with_job);
        } else {
            best.push(best[k - 1].clone());
        }
    }

    let mut chosen = Vec::new();
    let mut k = n;
    while k > 0 {
        if take[k] {
            chosen.push(candidates[k - 1]);
            k = compatible[k];
        } else {
            k -= 1;
        }
    }
    chosen.reverse();

    stats.states_visited += n as u64 + 1;
    stats.memo_entries = n + 1;

    chosen
        .iter()
        .fold(initial.clone(), |sol, job| sol.extend_unchecked(job))
}
