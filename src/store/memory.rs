//! In-memory reference store.

use std::collections::HashMap;

use crate::error::ScheduleError;
use crate::models::{
    busy_windows, Assignment, BusyWindow, ChallengeRun, Interviewee, Interviewer,
    CHALLENGE_RUN_MS,
};

use super::ScheduleStore;

/// In-memory [`ScheduleStore`] implementation.
///
/// Rosters are kept in insertion order. Busy windows are derived on
/// read from the team's competition runs, expanded by the 5-minute
/// run duration (overridable via [`MemoryStore::with_run_duration`]).
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    interviewees: Vec<Interviewee>,
    interviewers: Vec<Interviewer>,
    team_runs: HashMap<String, Vec<ChallengeRun>>,
    run_duration_ms: Option<i64>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an interviewee (roster order = insertion order).
    pub fn with_interviewee(mut self, interviewee: Interviewee) -> Self {
        self.interviewees.push(interviewee);
        self
    }

    /// Adds an interviewer (roster order = insertion order).
    pub fn with_interviewer(mut self, interviewer: Interviewer) -> Self {
        self.interviewers.push(interviewer);
        self
    }

    /// Sets the competition runs for a team.
    pub fn with_team_runs(mut self, team_id: impl Into<String>, runs: Vec<ChallengeRun>) -> Self {
        self.team_runs.insert(team_id.into(), runs);
        self
    }

    /// Overrides the challenge run duration used for busy-window
    /// expansion (default 5 minutes).
    pub fn with_run_duration(mut self, run_duration_ms: i64) -> Self {
        self.run_duration_ms = Some(run_duration_ms);
        self
    }

    fn find_mut(&mut self, id: &str) -> Option<&mut Interviewee> {
        self.interviewees.iter_mut().find(|p| p.id == id)
    }
}

impl ScheduleStore for MemoryStore {
    fn interviewees(&self) -> Vec<Interviewee> {
        self.interviewees.clone()
    }

    fn interviewee(&self, id: &str) -> Option<Interviewee> {
        self.interviewees.iter().find(|p| p.id == id).cloned()
    }

    fn interviewers(&self) -> Vec<Interviewer> {
        self.interviewers.clone()
    }

    fn busy_windows(&self, interviewee_id: &str) -> Vec<BusyWindow> {
        let duration = self.run_duration_ms.unwrap_or(CHALLENGE_RUN_MS);
        self.interviewee(interviewee_id)
            .and_then(|p| p.team_id)
            .and_then(|team| self.team_runs.get(&team))
            .map(|runs| busy_windows(runs, duration))
            .unwrap_or_default()
    }

    fn persist_assignment(
        &mut self,
        interviewee_id: &str,
        assignment: Assignment,
    ) -> Result<(), ScheduleError> {
        let person = self
            .find_mut(interviewee_id)
            .ok_or_else(|| ScheduleError::UnknownInterviewee(interviewee_id.to_string()))?;
        person.assignment = Some(assignment);
        Ok(())
    }

    fn clear_assignment(&mut self, interviewee_id: &str) -> Result<bool, ScheduleError> {
        let person = self
            .find_mut(interviewee_id)
            .ok_or_else(|| ScheduleError::UnknownInterviewee(interviewee_id.to_string()))?;
        Ok(person.assignment.take().is_some())
    }

    fn clear_all_assignments(&mut self) -> Result<usize, ScheduleError> {
        let mut cleared = 0;
        for person in &mut self.interviewees {
            if person.assignment.take().is_some() {
                cleared += 1;
            }
        }
        Ok(cleared)
    }
}
