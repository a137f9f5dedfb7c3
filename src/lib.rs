//! Exact job selection for the U-Engine ecosystem.
//!
//! Picks a set of mutually non-overlapping, time-bounded jobs that
//! maximizes total profit, breaking ties by how many jobs of each
//! priority level are kept (most important level first). This is 0/1
//! knapsack where the capacity constraint is temporal exclusivity.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Range`, `Job`, `JobIdSequence`,
//!   `Objective`, `Solution`
//! - **`solver`**: `ExactSolver` with memoized search and interval DP
//! - **`validation`**: Input checks and post-hoc overlap audit
//! - **`generator`**: Random job instances
//! - **`render`**: Timeline and summary text
//! - **`config`**: Problem bounds and solver settings
//!
//! # Example
//!
//! ```
//! use u_jobselect::models::{JobIdSequence, Range};
//! use u_jobselect::solver::ExactSolver;
//! use u_jobselect::validation::is_feasible;
//!
//! let mut ids = JobIdSequence::new();
//! let jobs = vec![
//!     ids.job(2, 80, Range::new(0, 4).unwrap()).unwrap(),
//!     ids.job(1, 80, Range::new(2, 6).unwrap()).unwrap(),
//! ];
//!
//! let solution = ExactSolver::new().solve(&jobs).unwrap();
//! assert_eq!(solution.profit(), 80);
//! assert_eq!(solution.objective().count(1), 1);
//! assert!(is_feasible(&solution));
//! ```
//!
//! # References
//!
//! - Kleinberg & Tardos (2005), "Algorithm Design", Ch. 6.1
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod config;
pub mod error;
pub mod generator;
pub mod models;
pub mod render;
pub mod solver;
pub mod validation;

pub use error::{Result, ScheduleError};
