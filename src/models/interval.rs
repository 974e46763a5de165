//! Time interval arithmetic.
//!
//! Defines the half-open interval type used throughout the crate for
//! interview slots, challenge runs, and conflict overlaps.
//!
//! # Time Model
//! All times are in milliseconds relative to a scheduling epoch
//! (midnight of the tournament day). The consumer defines the epoch.
//!
//! # Overlap Semantics
//! Intervals are half-open `[start, end)`: touching endpoints do not
//! count as overlap.

use serde::{Deserialize, Serialize};

/// A time interval [start, end).
///
/// Half-open interval: includes start, excludes end.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Interval {
    /// Interval start (ms, inclusive).
    pub start_ms: i64,
    /// Interval end (ms, exclusive).
    pub end_ms: i64,
}

impl Interval {
    /// Creates a new interval.
    pub fn new(start_ms: i64, end_ms: i64) -> Self {
        Self { start_ms, end_ms }
    }

    /// Duration of this interval (ms).
    #[inline]
    pub fn duration_ms(&self) -> i64 {
        self.end_ms - self.start_ms
    }

    /// Whether a timestamp falls within this interval.
    #[inline]
    pub fn contains(&self, time_ms: i64) -> bool {
        time_ms >= self.start_ms && time_ms < self.end_ms
    }

    /// Whether two intervals overlap.
    ///
    /// Half-open semantics: `[0, 100)` and `[100, 200)` do not overlap.
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start_ms < other.end_ms && other.start_ms < self.end_ms
    }

    /// The overlapping sub-interval of two intervals.
    ///
    /// Returns `None` when the intervals do not overlap.
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let start = self.start_ms.max(other.start_ms);
        let end = self.end_ms.min(other.end_ms);
        if end > start {
            Some(Self::new(start, end))
        } else {
            None
        }
    }
}
