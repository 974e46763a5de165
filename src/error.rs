//! Error taxonomy for scheduling operations.
//!
//! # Propagation Policy
//! Per-interviewee failures inside a batch (`NoInterviewersForArea`,
//! `NoAreaPreference`) are recovered locally: the interviewee is
//! skipped and counted, and the batch continues. Structural failures (`InvalidRange`) abort the
//! whole call before anything is committed. Single-entity operations
//! fail atomically with no partial effect.

use thiserror::Error;

use crate::models::{Area, Interval};

/// Errors produced by scheduling operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// Malformed scheduling window: end is not after start.
    #[error("invalid schedule window: end {end_ms}ms is not after start {start_ms}ms")]
    InvalidRange {
        /// Window start (ms).
        start_ms: i64,
        /// Window end (ms).
        end_ms: i64,
    },

    /// The interviewee's area has no registered interviewers.
    #[error("no interviewers registered for area {0}")]
    NoInterviewersForArea(Area),

    /// The interviewee already holds an assignment; clear it first.
    #[error("interviewee '{0}' already holds an interview assignment")]
    AlreadyAssigned(String),

    /// The interviewer is already booked over an overlapping slot.
    #[error("interviewer '{interviewer_id}' is already booked over [{}ms, {}ms)", .slot.start_ms, .slot.end_ms)]
    InterviewerBusy {
        /// The interviewer with the conflicting booking.
        interviewer_id: String,
        /// The rejected slot.
        slot: Interval,
    },

    /// Unparseable wall-clock input on the manual scheduling path.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The interviewee has no area preference set.
    #[error("interviewee '{0}' has no area preference set")]
    NoAreaPreference(String),

    /// Manual assignment rejected by the `EnforceArea` policy.
    #[error("area mismatch: interviewee is {interviewee_area}, interviewer covers {interviewer_area}")]
    AreaMismatch {
        /// The interviewee's declared area.
        interviewee_area: Area,
        /// The interviewer's area.
        interviewer_area: Area,
    },

    /// No interviewee with this ID exists in the roster.
    #[error("unknown interviewee '{0}'")]
    UnknownInterviewee(String),

    /// No interviewer with this ID exists in the roster.
    #[error("unknown interviewer '{0}'")]
    UnknownInterviewer(String),
}
