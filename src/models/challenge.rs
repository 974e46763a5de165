//! Competition runs and the busy-window resolver.
//!
//! Each team runs a sequence of timed competition challenges. While a
//! team is on the track, its members cannot be interviewed; the
//! resolver expands each run entry into a busy window of fixed length.
//!
//! No merging or deduplication is performed: callers test candidate
//! slots against every window independently, and the conflict detector
//! reports one conflict per overlapping window.

use serde::{Deserialize, Serialize};

use super::Interval;

/// Nominal length of one competition run (5 minutes).
pub const CHALLENGE_RUN_MS: i64 = 5 * 60 * 1000;

/// One scheduled competition run for a team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeRun {
    /// Challenge label (e.g. "Challenge 1 - Pista A").
    pub name: String,
    /// Tournament round this run belongs to.
    pub round: u32,
    /// Nominal run start (ms).
    pub start_ms: i64,
}

impl ChallengeRun {
    /// Creates a new run entry.
    pub fn new(name: impl Into<String>, round: u32, start_ms: i64) -> Self {
        Self {
            name: name.into(),
            round,
            start_ms,
        }
    }
}

/// A time interval during which an interviewee is unavailable,
/// annotated with the competition run it was derived from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusyWindow {
    /// Challenge label of the originating run.
    pub label: String,
    /// Round of the originating run.
    pub round: u32,
    /// The unavailable interval [start, start + run duration).
    pub window: Interval,
}

impl BusyWindow {
    /// Creates a busy window directly from an interval.
    pub fn new(label: impl Into<String>, round: u32, window: Interval) -> Self {
        Self {
            label: label.into(),
            round,
            window,
        }
    }
}

/// Expands run entries into busy windows, one per entry, in input order.
///
/// Each window is `[start, start + run_duration_ms)`. Overlapping or
/// duplicate entries are kept as-is.
pub fn busy_windows(runs: &[ChallengeRun], run_duration_ms: i64) -> Vec<BusyWindow> {
    runs.iter()
        .map(|run| {
            BusyWindow::new(
                &run.name,
                run.round,
                Interval::new(run.start_ms, run.start_ms + run_duration_ms),
            )
        })
        .collect()
}
