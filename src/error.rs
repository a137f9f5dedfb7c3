//! Error types for job selection.

use thiserror::Error;

/// Errors raised when building or extending selection values.
///
/// All variants describe broken preconditions on caller input. A solve over
/// well-formed jobs does not fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// A time range with `start >= end`.
    #[error("invalid range [{start}, {end}): start must be before end")]
    InvalidRange {
        /// Requested start.
        start: i64,
        /// Requested end.
        end: i64,
    },

    /// A job with zero or negative profit.
    #[error("job {id} has non-positive profit {profit}")]
    NonPositiveProfit {
        /// Offending job id.
        id: u64,
        /// Requested profit.
        profit: i64,
    },

    /// A job was added to a solution that already occupies part of its range.
    #[error("job {candidate} overlaps job {conflicting} already in the solution")]
    OverlappingJob {
        /// Job being added.
        candidate: u64,
        /// Job already in the solution that blocks it.
        conflicting: u64,
    },

    /// Generator or problem configuration is inconsistent.
    #[error("configuration error: {0}")]
    InvalidConfig(String),

    /// Search bookkeeping went out of sync (should not occur in normal operation).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result alias for job selection operations.
pub type Result<T> = std::result::Result<T, ScheduleError>;
