//! Lexicographic selection objective.
//!
//! # Ordering
//!
//! Objectives are ranked first by total profit, then by the number of
//! selected jobs per priority level, scanning levels from the lowest
//! number (most important) upwards. The first level with differing
//! counts decides; more jobs at that level ranks higher.
//!
//! The ranking is a total preorder on objectives: distinct selections can
//! rank equal, so an equal objective does not imply an equal solution.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use super::Job;

/// Accumulated profit and per-priority job counts of a selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Objective {
    profit: i64,
    priority_counts: BTreeMap<i32, u32>,
}

impl Objective {
    /// Zero profit, no jobs counted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a new objective with `job` folded in. `self` is left untouched.
    pub fn add_job(&self, job: &Job) -> Self {
        let mut next = self.clone();
        next.profit += job.profit();
        *next.priority_counts.entry(job.priority()).or_insert(0) += 1;
        next
    }

    /// Total profit.
    #[inline]
    pub fn profit(&self) -> i64 {
        self.profit
    }

    /// Number of jobs counted at `priority` (0 when none).
    pub fn count(&self, priority: i32) -> u32 {
        self.priority_counts.get(&priority).copied().unwrap_or(0)
    }

    /// Non-zero `(priority, count)` pairs in ascending priority order.
    pub fn priority_counts(&self) -> impl Iterator<Item = (i32, u32)> + '_ {
        self.priority_counts.iter().map(|(&p, &c)| (p, c))
    }

    /// Total number of jobs folded in.
    pub fn job_count(&self) -> u32 {
        self.priority_counts.values().sum()
    }

    /// Ranks two objectives.
    ///
    /// `Greater` means `self` is strictly better than `other`.
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        self.profit.cmp(&other.profit).then_with(|| {
            let levels: BTreeSet<i32> = self
                .priority_counts
                .keys()
                .chain(other.priority_counts.keys())
                .copied()
                .collect();

            levels
                .into_iter()
                .map(|p| self.count(p).cmp(&other.count(p)))
                .find(|ord| ord.is_ne())
                .unwrap_or(Ordering::Equal)
        })
    }

    /// Whether `self` ranks strictly above `other`.
    ///
    /// Exact ties return `false`, so the incumbent keeps its place.
    #[inline]
    pub fn is_better(&self, other: &Self) -> bool {
        self.rank_cmp(other) == Ordering::Greater
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Range;
    use proptest::prelude::*;

    fn job(id: u64, priority: i32, profit: i64) -> Job {
        Job::new(id, priority, profit, Range::new(0, 1).unwrap()).unwrap()
    }

    fn objective_of(jobs: &[Job]) -> Objective {
        jobs.iter().fold(Objective::new(), |acc, j| acc.add_job(j))
    }

    #[test]
    fn test_initial_objective() {
        let o = Objective::new();
        assert_eq!(o.profit(), 0);
        assert_eq!(o.count(1), 0);
        assert_eq!(o.job_count(), 0);
    }

    #[test]
    fn test_add_job_is_pure() {
        let base = Objective::new().add_job(&job(0, 1, 40));
        let next = base.add_job(&job(1, 2, 60));

        assert_eq!(base.profit(), 40);
        assert_eq!(base.count(2), 0);
        assert_eq!(next.profit(), 100);
        assert_eq!(next.count(1), 1);
        assert_eq!(next.count(2), 1);
        assert_eq!(next.job_count(), 2);
    }

    #[test]
    fn test_profit_dominates() {
        let rich = objective_of(&[job(0, 2, 101)]);
        let important = objective_of(&[job(1, 1, 50), job(2, 1, 50)]);

        assert!(rich.is_better(&important));
        assert!(!important.is_better(&rich));
    }

    #[test]
    fn test_tie_broken_by_most_important_level() {
        let high = objective_of(&[job(0, 1, 80)]);
        let low = objective_of(&[job(1, 2, 80)]);

        assert!(high.is_better(&low));
        assert!(!low.is_better(&high));
    }

    #[test]
    fn test_tie_break_scans_levels_in_order() {
        // Same level-1 count, decided at level 2.
        let a = objective_of(&[job(0, 1, 50), job(1, 2, 50)]);
        let b = objective_of(&[job(2, 1, 50), job(3, 3, 50)]);

        assert!(a.is_better(&b));
        assert!(!b.is_better(&a));
    }

    #[test]
    fn test_exact_tie_is_not_better() {
        let a = objective_of(&[job(0, 1, 70), job(1, 2, 30)]);
        let b = objective_of(&[job(2, 2, 20), job(3, 1, 80)]);

        assert_eq!(a.rank_cmp(&b), Ordering::Equal);
        assert!(!a.is_better(&b));
        assert!(!b.is_better(&a));
        assert!(!a.is_better(&a));
    }

    #[test]
    fn test_priority_counts_ascending() {
        let o = objective_of(&[job(0, 3, 1), job(1, 1, 1), job(2, 3, 1)]);
        let counts: Vec<_> = o.priority_counts().collect();
        assert_eq!(counts, vec![(1, 1), (3, 2)]);
    }

    fn arb_objective() -> impl Strategy<Value = Objective> {
        prop::collection::vec((1i32..=3, 1i64..=4), 0..5).prop_map(|entries| {
            entries
                .iter()
                .enumerate()
                .fold(Objective::new(), |acc, (i, &(p, profit))| {
                    acc.add_job(&job(i as u64, p, profit))
                })
        })
    }

    proptest! {
        #[test]
        fn prop_is_better_asymmetric(a in arb_objective(), b in arb_objective()) {
            prop_assert!(!(a.is_better(&b) && b.is_better(&a)));
            prop_assert!(!a.is_better(&a));
        }

        #[test]
        fn prop_is_better_transitive(
            a in arb_objective(),
            b in arb_objective(),
            c in arb_objective(),
        ) {
            if a.is_better(&b) && b.is_better(&c) {
                prop_assert!(a.is_better(&c));
            }
        }

        #[test]
        fn prop_incomparability_is_transitive(
            a in arb_objective(),
            b in arb_objective(),
            c in arb_objective(),
        ) {
            let tie = |x: &Objective, y: &Objective| !x.is_better(y) && !y.is_better(x);
            if tie(&a, &b) && tie(&b, &c) {
                prop_assert!(tie(&a, &c));
            }
        }

        #[test]
        fn prop_add_job_respects_value_equality(
            entries in prop::collection::vec((1i32..=3, 1i64..=10), 0..6),
            extra in (1i32..=3, 1i64..=10),
        ) {
            // Same multiset of jobs folded in opposite orders.
            let forward = entries.iter().enumerate().fold(Objective::new(), |acc, (i, &(p, v))| {
                acc.add_job(&job(i as u64, p, v))
            });
            let backward = entries.iter().enumerate().rev().fold(Objective::new(), |acc, (i, &(p, v))| {
                acc.add_job(&job(i as u64, p, v))
            });
            prop_assert_eq!(&forward, &backward);

            let extra = job(99, extra.0, extra.1);
            prop_assert_eq!(forward.add_job(&extra), backward.add_job(&extra));
        }
    }
}
