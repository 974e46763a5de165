//! Candidate slot generation.
//!
//! A scheduling run covers one admin-supplied day window. The window
//! is divided into fixed-duration candidate slots starting at
//! `start, start + slot, start + 2*slot, ...`; a slot is a candidate
//! only if it ends at or before the window end.
//!
//! The iterator is lazy and restartable: `ScheduleWindow::slots`
//! returns a fresh iterator each call.

use serde::{Deserialize, Serialize};

use crate::clock::parse_clock;
use crate::error::ScheduleError;
use crate::models::Interval;

/// Default interview slot length (15 minutes).
pub const DEFAULT_SLOT_MS: i64 = 15 * 60 * 1000;

/// The day window for one scheduling run.
///
/// Not persisted: it exists only for the duration of one
/// `auto_schedule` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleWindow {
    /// Day start (ms).
    pub start_ms: i64,
    /// Day end (ms, exclusive).
    pub end_ms: i64,
    /// Slot duration (ms).
    pub slot_ms: i64,
}

impl ScheduleWindow {
    /// Creates a window with the default 15-minute slot duration.
    pub fn new(start_ms: i64, end_ms: i64) -> Self {
        Self {
            start_ms,
            end_ms,
            slot_ms: DEFAULT_SLOT_MS,
        }
    }

    /// Creates a window from wall-clock strings (e.g. `"09:00"`, `"17:00"`).
    ///
    /// # Errors
    /// `InvalidInput` when either string is not a valid time of day.
    pub fn from_clock(start: &str, end: &str) -> Result<Self, ScheduleError> {
        Ok(Self::new(parse_clock(start)?, parse_clock(end)?))
    }

    /// Sets the slot duration.
    pub fn with_slot_duration(mut self, slot_ms: i64) -> Self {
        self.slot_ms = slot_ms;
        self
    }

    /// Returns the candidate slot-start iterator.
    ///
    /// # Errors
    /// `InvalidRange` when `end_ms <= start_ms`.
    pub fn slots(&self) -> Result<Slots, ScheduleError> {
        if self.end_ms <= self.start_ms {
            return Err(ScheduleError::InvalidRange {
                start_ms: self.start_ms,
                end_ms: self.end_ms,
            });
        }
        Ok(Slots {
            next_ms: self.start_ms,
            end_ms: self.end_ms,
            slot_ms: self.slot_ms,
        })
    }

    /// The slot interval beginning at `slot_start_ms`.
    #[inline]
    pub fn slot_at(&self, slot_start_ms: i64) -> Interval {
        Interval::new(slot_start_ms, slot_start_ms + self.slot_ms)
    }
}

/// Lazy, finite sequence of candidate slot starts.
#[derive(Debug, Clone)]
pub struct Slots {
    next_ms: i64,
    end_ms: i64,
    slot_ms: i64,
}

impl Iterator for Slots {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        // A candidate slot must fit entirely within the window.
        if self.next_ms + self.slot_ms > self.end_ms {
            return None;
        }
        let start = self.next_ms;
        self.next_ms += self.slot_ms;
        Some(start)
    }
}
