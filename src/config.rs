//! Problem configuration.
//!
//! Bounds for the planning horizon and for randomly generated jobs.
//! Defaults reproduce the reference instance: a 50-slot horizon with
//! 40 jobs lasting 1-10 slots, worth 50-150, at priority 1 or 2.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use crate::error::{Result, ScheduleError};
use crate::solver::SearchStrategy;

/// Planning horizon and job bounds for a selection problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProblemConfig {
    /// Number of time slots; jobs live in `[0, horizon)`.
    pub horizon: i64,
    /// Shortest job duration.
    pub min_duration: i64,
    /// Longest job duration.
    pub max_duration: i64,
    /// Lowest job profit.
    pub min_profit: i64,
    /// Highest job profit.
    pub max_profit: i64,
    /// Most important priority level (lowest number).
    pub min_priority: i32,
    /// Least important priority level.
    pub max_priority: i32,
    /// Number of jobs to generate.
    pub job_count: usize,
}

impl Default for ProblemConfig {
    fn default() -> Self {
        Self {
            horizon: 50,
            min_duration: 1,
            max_duration: 10,
            min_profit: 50,
            max_profit: 150,
            min_priority: 1,
            max_priority: 2,
            job_count: 40,
        }
    }
}

impl ProblemConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the planning horizon.
    pub fn with_horizon(mut self, horizon: i64) -> Self {
        self.horizon = horizon;
        self
    }

    /// Sets the duration bounds (inclusive).
    pub fn with_duration(mut self, min: i64, max: i64) -> Self {
        self.min_duration = min;
        self.max_duration = max;
        self
    }

    /// Sets the profit bounds (inclusive).
    pub fn with_profit(mut self, min: i64, max: i64) -> Self {
        self.min_profit = min;
        self.max_profit = max;
        self
    }

    /// Sets the priority levels (inclusive).
    pub fn with_priorities(mut self, min: i32, max: i32) -> Self {
        self.min_priority = min;
        self.max_priority = max;
        self
    }

    /// Sets the number of generated jobs.
    pub fn with_job_count(mut self, job_count: usize) -> Self {
        self.job_count = job_count;
        self
    }

    /// Priority levels, most important first.
    pub fn priority_levels(&self) -> RangeInclusive<i32> {
        self.min_priority..=self.max_priority
    }

    /// Checks that every bound is usable.
    pub fn validate(&self) -> Result<()> {
        if self.horizon <= 0 {
            return Err(invalid(format!("horizon must be positive, got {}", self.horizon)));
        }
        if self.min_duration <= 0 || self.min_duration > self.max_duration {
            return Err(invalid(format!(
                "duration bounds {}..={} must be positive and ordered",
                self.min_duration, self.max_duration
            )));
        }
        if self.max_duration > self.horizon {
            return Err(invalid(format!(
                "max duration {} exceeds horizon {}",
                self.max_duration, self.horizon
            )));
        }
        if self.min_profit <= 0 || self.min_profit > self.max_profit {
            return Err(invalid(format!(
                "profit bounds {}..={} must be positive and ordered",
                self.min_profit, self.max_profit
            )));
        }
        if self.min_priority > self.max_priority {
            return Err(invalid(format!(
                "priority bounds {}..={} are reversed",
                self.min_priority, self.max_priority
            )));
        }
        Ok(())
    }
}

fn invalid(message: String) -> ScheduleError {
    ScheduleError::InvalidConfig(message)
}

/// Solver settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Search algorithm.
    pub strategy: SearchStrategy,
}

impl SolverConfig {
    /// Creates the default configuration (memoized search).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the search algorithm.
    pub fn with_strategy(mut self, strategy: SearchStrategy) -> Self {
        self.strategy = strategy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_reference_instance() {
        let c = ProblemConfig::default();
        assert_eq!(c.horizon, 50);
        assert_eq!((c.min_duration, c.max_duration), (1, 10));
        assert_eq!((c.min_profit, c.max_profit), (50, 150));
        assert_eq!(c.priority_levels(), 1..=2);
        assert_eq!(c.job_count, 40);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let c = ProblemConfig::new()
            .with_horizon(20)
            .with_duration(2, 4)
            .with_profit(1, 9)
            .with_priorities(0, 3)
            .with_job_count(8);

        assert_eq!(c.horizon, 20);
        assert_eq!((c.min_duration, c.max_duration), (2, 4));
        assert_eq!((c.min_profit, c.max_profit), (1, 9));
        assert_eq!(c.priority_levels(), 0..=3);
        assert_eq!(c.job_count, 8);
    }

    #[test]
    fn test_validate_rejects_bad_bounds() {
        assert!(ProblemConfig::new().with_horizon(0).validate().is_err());
        assert!(ProblemConfig::new().with_duration(0, 3).validate().is_err());
        assert!(ProblemConfig::new().with_duration(5, 3).validate().is_err());
        assert!(ProblemConfig::new()
            .with_horizon(5)
            .with_duration(1, 6)
            .validate()
            .is_err());
        assert!(ProblemConfig::new().with_profit(0, 10).validate().is_err());
        assert!(ProblemConfig::new().with_priorities(3, 1).validate().is_err());
    }

    #[test]
    fn test_config_serde_partial() {
        let c: ProblemConfig = serde_json::from_str(r#"{"horizon":30,"job_count":10}"#).unwrap();
        assert_eq!(c.horizon, 30);
        assert_eq!(c.job_count, 10);
        assert_eq!(c.max_profit, 150);

        let json = serde_json::to_string(&c).unwrap();
        let back: ProblemConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }

    #[test]
    fn test_solver_config_default_is_memoized() {
        assert_eq!(SolverConfig::default().strategy, SearchStrategy::Memoized);
        let c = SolverConfig::new().with_strategy(SearchStrategy::IntervalDp);
        assert_eq!(c.strategy, SearchStrategy::IntervalDp);
    }
}
