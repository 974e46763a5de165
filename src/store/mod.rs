//! Schedule storage abstraction.
//!
//! The core operates over an injected repository rather than any
//! ambient state: the host process owns a [`ScheduleStore`] value and
//! hands it to the scheduler. [`MemoryStore`] is the in-memory
//! reference implementation, suitable for tests and single-process
//! hosts; persistent backends implement the same trait.
//!
//! # Snapshot Contract
//! Reads must reflect a consistent snapshot for the duration of one
//! scheduling run. The scheduler takes `&mut` access for any mutation,
//! so a run never observes partial roster changes; hosts wrapping a
//! shared backend must serialize mutations externally.

mod memory;

pub use memory::MemoryStore;

use crate::error::ScheduleError;
use crate::models::{Assignment, BusyWindow, Interviewee, Interviewer};

/// Repository contract between the scheduler and the roster layer.
///
/// Listing order is roster insertion order; the assignment engine
/// relies on it for deterministic placement.
///
/// Persistence operations are blind writes: the scheduling invariants
/// (one assignment per interviewee, interviewer exclusivity) are
/// enforced by the mutation gateway, not by implementations.
pub trait ScheduleStore {
    /// All interviewees, in roster order.
    fn interviewees(&self) -> Vec<Interviewee>;

    /// A single interviewee by ID.
    fn interviewee(&self, id: &str) -> Option<Interviewee>;

    /// All interviewers, in roster order.
    fn interviewers(&self) -> Vec<Interviewer>;

    /// Busy windows for one interviewee, derived from their team's
    /// competition runs. Unknown IDs and teamless interviewees yield
    /// an empty list.
    fn busy_windows(&self, interviewee_id: &str) -> Vec<BusyWindow>;

    /// Writes an assignment for the interviewee.
    ///
    /// # Errors
    /// `UnknownInterviewee` when the ID does not exist.
    fn persist_assignment(
        &mut self,
        interviewee_id: &str,
        assignment: Assignment,
    ) -> Result<(), ScheduleError>;

    /// Removes the interviewee's assignment.
    ///
    /// Returns whether one existed.
    ///
    /// # Errors
    /// `UnknownInterviewee` when the ID does not exist.
    fn clear_assignment(&mut self, interviewee_id: &str) -> Result<bool, ScheduleError>;

    /// Removes every assignment in one step.
    ///
    /// Returns the number removed.
    fn clear_all_assignments(&mut self) -> Result<usize, ScheduleError>;
}
