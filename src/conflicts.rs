//! Post-hoc conflict detection.
//!
//! Recomputes all overlaps between committed interview assignments and
//! the interviewees' busy windows. Runs independently of the
//! assignment engine, so it also validates manually entered schedules.
//!
//! Detection is total and side-effect-free: it never mutates the
//! schedule, and an assignment overlapping two busy windows yields two
//! conflict entries (no deduplication).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::{BusyWindow, Interval, Interviewee};

/// A detected overlap between an assignment and a busy window.
///
/// Derived report data; never written back to the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conflict {
    /// The double-booked interviewee.
    pub interviewee_id: String,
    /// Display name, for reporting.
    pub interviewee_name: String,
    /// The assigned interviewer.
    pub interviewer_id: String,
    /// The committed interview slot.
    pub interview: Interval,
    /// The busy window being violated.
    pub challenge: BusyWindow,
    /// The precise overlapping sub-interval.
    pub overlap: Interval,
}

impl Conflict {
    /// Overlap duration in whole minutes, rounded down.
    pub fn overlap_minutes(&self) -> i64 {
        self.overlap.duration_ms() / 60_000
    }
}

/// Detects every assignment / busy-window overlap.
///
/// For each interviewee holding an assignment, each of their busy
/// windows is tested against the interview slot; every true overlap
/// produces one [`Conflict`] with the exact intersection interval.
///
/// `busy_windows` maps interviewee ID to that person's windows;
/// missing entries are treated as no busy time.
pub fn detect_conflicts(
    interviewees: &[Interviewee],
    busy_windows: &HashMap<String, Vec<BusyWindow>>,
) -> Vec<Conflict> {
    let mut conflicts = Vec::new();

    for person in interviewees {
        let Some(assignment) = &person.assignment else {
            continue;
        };
        let Some(windows) = busy_windows.get(&person.id) else {
            continue;
        };

        for busy in windows {
            if let Some(overlap) = assignment.slot.intersection(&busy.window) {
                conflicts.push(Conflict {
                    interviewee_id: person.id.clone(),
                    interviewee_name: person.name.clone(),
                    interviewer_id: assignment.interviewer_id.clone(),
                    interview: assignment.slot,
                    challenge: busy.clone(),
                    overlap,
                });
            }
        }
    }

    conflicts
}
