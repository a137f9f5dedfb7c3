//! Half-open time range.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};

/// A time interval `[start, end)` on the planning horizon.
///
/// Half-open: includes `start`, excludes `end`, so ranges that only touch
/// at an endpoint do not overlap. `start < end` always holds; deserialization
/// goes through the same check as [`Range::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawRange")]
pub struct Range {
    start: i64,
    end: i64,
}

#[derive(Deserialize)]
struct RawRange {
    start: i64,
    end: i64,
}

impl TryFrom<RawRange> for Range {
    type Error = ScheduleError;

    fn try_from(raw: RawRange) -> Result<Self> {
        Range::new(raw.start, raw.end)
    }
}

impl Range {
    /// Creates a range, rejecting empty or reversed intervals.
    pub fn new(start: i64, end: i64) -> Result<Self> {
        if start >= end {
            return Err(ScheduleError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Inclusive start.
    #[inline]
    pub fn start(&self) -> i64 {
        self.start
    }

    /// Exclusive end.
    #[inline]
    pub fn end(&self) -> i64 {
        self.end
    }

    /// Length of the range.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }

    /// Whether a time slot falls within this range.
    #[inline]
    pub fn contains(&self, time: i64) -> bool {
        time >= self.start && time < self.end
    }

    /// Whether two ranges share at least one time slot.
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// `(start, end)` pair, used as the occupancy key of a solution.
    #[inline]
    pub fn bounds(&self) -> (i64, i64) {
        (self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_rejects_empty_and_reversed() {
        assert_eq!(
            Range::new(5, 5),
            Err(ScheduleError::InvalidRange { start: 5, end: 5 })
        );
        assert!(Range::new(6, 2).is_err());
        assert!(Range::new(0, 1).is_ok());
    }

    #[test]
    fn test_range_overlap() {
        let a = Range::new(0, 5).unwrap();
        let b = Range::new(3, 8).unwrap();
        let c = Range::new(5, 10).unwrap();
        let inner = Range::new(1, 2).unwrap();

        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c)); // touching endpoints
        assert!(!c.overlaps(&a));
        assert!(a.overlaps(&inner));
        assert!(a.overlaps(&a));
    }

    #[test]
    fn test_range_contains_and_duration() {
        let r = Range::new(2, 6).unwrap();
        assert_eq!(r.duration(), 4);
        assert!(r.contains(2));
        assert!(r.contains(5));
        assert!(!r.contains(6));
        assert!(!r.contains(1));
        assert_eq!(r.bounds(), (2, 6));
    }

    #[test]
    fn test_range_deserialize_validates() {
        let ok: Range = serde_json::from_str(r#"{"start":1,"end":4}"#).unwrap();
        assert_eq!(ok.bounds(), (1, 4));

        let bad = serde_json::from_str::<Range>(r#"{"start":4,"end":1}"#);
        assert!(bad.is_err());
    }
}
