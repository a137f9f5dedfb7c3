//! Exact job selection solvers.
//!
//! Finds a set of mutually non-overlapping jobs maximizing the
//! lexicographic [`Objective`](crate::models::Objective): total profit
//! first, then job counts per priority level, most important first.
//!
//! # Strategies
//!
//! | Strategy | Method | Cost |
//! |----------|--------|------|
//! | [`SearchStrategy::Memoized`] | Include/exclude search over occupancy states | Exponential worst case |
//! | [`SearchStrategy::IntervalDp`] | Weighted interval DP over end-sorted jobs | O(n log n) |
//!
//! Both return an optimal objective. The memoized search additionally fixes
//! *which* of several equally ranked selections is reported: the input
//! order is followed and ties keep the job out.
//!
//! # Example
//!
//! ```
//! use u_jobselect::models::{JobIdSequence, Range};
//! use u_jobselect::solver::ExactSolver;
//!
//! let mut ids = JobIdSequence::new();
//! let jobs = vec![
//!     ids.job(1, 100, Range::new(0, 5).unwrap()).unwrap(),
//!     ids.job(1, 60, Range::new(0, 3).unwrap()).unwrap(),
//!     ids.job(2, 60, Range::new(3, 5).unwrap()).unwrap(),
//! ];
//!
//! let solution = ExactSolver::new().solve(&jobs).unwrap();
//! assert_eq!(solution.profit(), 120);
//! ```

mod dp;
mod memo;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use tracing::{debug, info};

use crate::config::SolverConfig;
use crate::error::{Result, ScheduleError};
use crate::models::{Job, Solution};

/// Search algorithm used by [`ExactSolver`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStrategy {
    /// Memoized include/exclude search.
    #[default]
    Memoized,
    /// Weighted interval scheduling DP.
    IntervalDp,
}

impl SearchStrategy {
    /// Short name used in logs and on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            SearchStrategy::Memoized => "memoized",
            SearchStrategy::IntervalDp => "interval_dp",
        }
    }
}

impl fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SearchStrategy {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "memoized" | "memo" => Ok(SearchStrategy::Memoized),
            "interval_dp" | "dp" => Ok(SearchStrategy::IntervalDp),
            other => Err(ScheduleError::InvalidConfig(format!(
                "unknown search strategy '{other}'"
            ))),
        }
    }
}

/// Counters collected during one solve.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Search states entered (including memo hits and terminal states).
    pub states_visited: u64,
    /// States answered from the memo table.
    pub memo_hits: u64,
    /// Entries in the memo (or DP) table at the end of the solve.
    pub memo_entries: usize,
}

/// Exact solver for the job selection problem.
#[derive(Debug, Clone, Default)]
pub struct ExactSolver {
    config: SolverConfig,
}

impl ExactSolver {
    /// Creates a solver with the memoized search.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a solver from a configuration.
    pub fn from_config(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Sets the search algorithm.
    pub fn with_strategy(mut self, strategy: SearchStrategy) -> Self {
        self.config.strategy = strategy;
        self
    }

    /// Active search algorithm.
    pub fn strategy(&self) -> SearchStrategy {
        self.config.strategy
    }

    /// Selects the best subset of `jobs`, starting from nothing selected.
    pub fn solve(&self, jobs: &[Job]) -> Result<Solution> {
        self.solve_from(jobs, &Solution::empty())
    }

    /// Selects the best extension of `initial` using `jobs`.
    ///
    /// Jobs that overlap `initial` are never chosen.
    pub fn solve_from(&self, jobs: &[Job], initial: &Solution) -> Result<Solution> {
        self.solve_with_stats(jobs, initial).map(|(solution, _)| solution)
    }

    /// Like [`solve_from`](Self::solve_from), also returning search counters.
    pub fn solve_with_stats(
        &self,
        jobs: &[Job],
        initial: &Solution,
    ) -> Result<(Solution, SearchStats)> {
        let strategy = self.config.strategy;
        let started = Instant::now();
        info!(
            event = "solve_start",
            strategy = strategy.name(),
            job_count = jobs.len(),
            initial_jobs = initial.len(),
        );

        let mut stats = SearchStats::default();
        let solution = match strategy {
            SearchStrategy::Memoized => memo::search(jobs, initial, &mut stats)?,
            SearchStrategy::IntervalDp => dp::search(jobs, initial, &mut stats),
        };

        debug!(
            event = "search_stats",
            states_visited = stats.states_visited,
            memo_hits = stats.memo_hits,
            memo_entries = stats.memo_entries,
        );
        info!(
            event = "solve_end",
            strategy = strategy.name(),
            duration_ms = started.elapsed().as_millis() as u64,
            profit = solution.profit(),
            selected = solution.len(),
        );

        Ok((solution, stats))
    }
}
