//! Memoized include/exclude search.
//!
//! # Algorithm
//!
//! Each state is "decide jobs `index..` given the partial selection so far".
//! The exclude branch is explored first, then the include branch when the
//! head job fits. The include branch wins only when its objective is
//! strictly better, so exact ties keep the exclude result.
//!
//! The recursion is unrolled onto an explicit frame stack, so the depth of
//! the input never reaches the call stack.
//!
//! # Memo
//!
//! States are keyed by the suffix index and the occupied `(start, end)` set
//! of the partial selection. Within one solve the remaining jobs are always
//! a suffix of the input, so the index identifies them exactly.
//!
//! The table stores the best *extension* of a state (jobs added from
//! `index` on and their objective), not the terminal selection. Objective
//! ranking is invariant under adding a common prefix, so comparing
//! extensions picks the same branch as comparing full selections, and a hit
//! reached through a different prefix with the same occupancy still
//! yields a selection built on the current prefix.

use std::collections::{BTreeSet, HashMap};
use std::iter;

use tracing::trace;

use super::SearchStats;
use crate::error::{Result, ScheduleError};
use crate::models::{Job, Objective, Solution};

/// Jobs chosen from some state onward, in input order.
#[derive(Debug, Clone, Default)]
struct Extension {
    jobs: Vec<Job>,
    objective: Objective,
}

impl Extension {
    fn prepend(&self, job: &Job) -> Self {
        Self {
            jobs: iter::once(*job).chain(self.jobs.iter().copied()).collect(),
            objective: self.objective.add_job(job),
        }
    }
}

type Occupancy = BTreeSet<(i64, i64)>;

enum Frame {
    /// Start deciding `jobs[index..]` from `partial`.
    Enter { index: usize, partial: Solution },
    /// Exclude branch of `jobs[index]` has produced its result.
    AfterExclude { index: usize, partial: Solution },
    /// Include branch of `jobs[index]` has produced its result.
    AfterInclude {
        index: usize,
        partial: Solution,
        without: Extension,
    },
}

/// Runs the search over `jobs` starting from `initial`.
pub(super) fn search(jobs: &[Job], initial: &Solution, stats: &mut SearchStats) -> Result<Solution> {
    // memo[i]: occupancy -> best extension for jobs[i..]
    let mut memo: Vec<HashMap<Occupancy, Extension>> = vec![HashMap::new(); jobs.len()];
    let mut results: Vec<Extension> = Vec::new();
    let mut stack = vec![Frame::Enter {
        index: 0,
        partial: initial.clone(),
    }];

    while let Some(frame) = stack.pop() {
        match frame {
            Frame::Enter { index, partial } => {
                stats.states_visited += 1;

                if index == jobs.len() {
                    results.push(Extension::default());
                    continue;
                }

                if let Some(hit) = memo[index].get(partial.occupied_ranges()) {
                    stats.memo_hits += 1;
                    trace!(index, profit = hit.objective.profit(), "memo hit");
                    results.push(hit.clone());
                    continue;
                }

                let unchanged = partial.clone();
                stack.push(Frame::AfterExclude { index, partial });
                stack.push(Frame::Enter {
                    index: index + 1,
                    partial: unchanged,
                });
            }

            Frame::AfterExclude { index, partial } => {
                let without = pop_result(&mut results)?;
                let job = &jobs[index];

                if partial.is_job_feasible_to_add(job) {
                    let included = partial.extend_unchecked(job);
                    stack.push(Frame::AfterInclude {
                        index,
                        partial,
                        without,
                    });
                    stack.push(Frame::Enter {
                        index: index + 1,
                        partial: included,
                    });
                } else {
                    memo[index].insert(partial.occupied_ranges().clone(), without.clone());
                    results.push(without);
                }
            }

            Frame::AfterInclude {
                index,
                partial,
                without,
            } => {
                let with_job = pop_result(&mut results)?.prepend(&jobs[index]);
                let best = if with_job.objective.is_better(&without.objective) {
                    with_job
                } else {
                    without
                };
                memo[index].insert(partial.occupied_ranges().clone(), best.clone());
                results.push(best);
            }
        }
    }

    let best = pop_result(&mut results)?;
    if !results.is_empty() {
        return Err(ScheduleError::Internal(format!(
            "{} unconsumed search results",
            results.len()
        )));
    }

    stats.memo_entries = memo.iter().map(HashMap::len).sum();

    Ok(best
        .jobs
        .iter()
        .fold(initial.clone(), |sol, job| sol.extend_unchecked(job)))
}

fn pop_result(results: &mut Vec<Extension>) -> Result<Extension> {
    results
        .pop()
        .ok_or_else(|| ScheduleError::Internal("search result stack underflow".into()))
}
