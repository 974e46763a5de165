//! Committed interview assignment.

use serde::{Deserialize, Serialize};

use super::Interval;

/// A committed binding of an interviewee to an interviewer at a slot.
///
/// The slot is always `[slot_start, slot_start + slot duration)`; the
/// duration is fixed by the scheduling window that produced the slot.
///
/// # Invariants (enforced by the mutation gateway)
/// - An interviewee holds at most one assignment at a time.
/// - No two assignments of one interviewer have overlapping slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// The interviewer conducting this interview.
    pub interviewer_id: String,
    /// Interview slot [start, end).
    pub slot: Interval,
}

impl Assignment {
    /// Creates a new assignment.
    pub fn new(interviewer_id: impl Into<String>, slot: Interval) -> Self {
        Self {
            interviewer_id: interviewer_id.into(),
            slot,
        }
    }
}
