//! Job selection domain models.
//!
//! Value types for the selection problem, leaf-first:
//!
//! | Type | Role |
//! |------|------|
//! | [`Range`] | Half-open time interval with an overlap predicate |
//! | [`Job`] | Priority, profit and range under a unique id |
//! | [`Objective`] | Profit plus per-priority counts, lexicographically ranked |
//! | [`Solution`] | Non-overlapping job selection and its objective |
//!
//! All types are immutable once built; "add" operations return new values.

mod job;
mod objective;
mod range;
mod solution;

pub use job::{Job, JobIdSequence};
pub use objective::Objective;
pub use range::Range;
pub use solution::Solution;
