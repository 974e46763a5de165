//! Interview scheduler: batch placement, manual overrides, clearing.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::clock::parse_clock;
use crate::conflicts::{detect_conflicts, Conflict};
use crate::error::ScheduleError;
use crate::models::{Area, Assignment, BusyWindow, Interval, Interviewer};
use crate::slots::{ScheduleWindow, Slots, DEFAULT_SLOT_MS};
use crate::store::ScheduleStore;

/// Policy for the manual scheduling path.
///
/// The batch scheduler always matches areas; manual entry historically
/// did not, leaving area discipline to the administrator. That
/// looseness is preserved as the default but made explicit here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ManualPolicy {
    /// No area-match check on manual assignment (administrative
    /// override). The interviewee must still have an area set.
    #[default]
    Unchecked,
    /// Manual assignment must match interviewee and interviewer areas.
    EnforceArea,
}

/// Summary returned by [`InterviewScheduler::auto_schedule`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutoScheduleOutcome {
    /// Interviewees placed by this run.
    pub placed: usize,
    /// Interviewees that could not be placed (no interviewers for
    /// their area, or no feasible slot). A normal outcome, not an error.
    pub skipped: usize,
    /// Conflict report over the full committed schedule after the run.
    pub conflicts: Vec<Conflict>,
}

/// The scheduling engine and mutation gateway.
///
/// Owns the injected store and serializes all mutations through
/// `&mut self`; hosts needing concurrent administrative access must
/// wrap it in a lock or single-writer task.
#[derive(Debug)]
pub struct InterviewScheduler<S: ScheduleStore> {
    store: S,
    manual_policy: ManualPolicy,
}

impl<S: ScheduleStore> InterviewScheduler<S> {
    /// Creates a scheduler over the given store.
    pub fn new(store: S) -> Self {
        Self {
            store,
            manual_policy: ManualPolicy::default(),
        }
    }

    /// Sets the manual scheduling policy.
    pub fn with_manual_policy(mut self, policy: ManualPolicy) -> Self {
        self.manual_policy = policy;
        self
    }

    /// Read access to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consumes the scheduler, returning the store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Places every pending interviewee into the earliest feasible slot.
    ///
    /// Interviewees with no current assignment are processed in roster
    /// order. For each, candidate slots are tried chronologically; a
    /// slot is taken when a same-area interviewer is free there and
    /// none of the interviewee's busy windows overlap it. The first
    /// free interviewer in roster order is picked, so repeated runs
    /// over identical state produce identical placements.
    ///
    /// Interviewees with no area preference, interviewees whose area
    /// has no interviewers, and interviewees for whom no slot works
    /// are skipped and counted. Pre-existing assignments are respected
    /// as interviewer bookings.
    ///
    /// # Errors
    /// `InvalidRange` when the window is malformed; nothing is
    /// committed in that case.
    pub fn auto_schedule(
        &mut self,
        window: &ScheduleWindow,
    ) -> Result<AutoScheduleOutcome, ScheduleError> {
        // Validate the window before touching any state.
        let slot_starts = window.slots()?;

        let mut by_area: HashMap<Area, Vec<Interviewer>> = HashMap::new();
        for interviewer in self.store.interviewers() {
            by_area.entry(interviewer.area).or_default().push(interviewer);
        }

        let pending: Vec<_> = self
            .store
            .interviewees()
            .into_iter()
            .filter(|p| p.assignment.is_none())
            .collect();

        let mut placed = 0;
        let mut skipped = 0;

        for person in pending {
            let Some(area) = person.area else {
                warn!(
                    interviewee = %person.id,
                    error = %ScheduleError::NoAreaPreference(person.id.clone()),
                    "skipping interviewee"
                );
                skipped += 1;
                continue;
            };

            let candidates = by_area.get(&area).map(Vec::as_slice).unwrap_or_default();
            if candidates.is_empty() {
                warn!(
                    interviewee = %person.id,
                    error = %ScheduleError::NoInterviewersForArea(area),
                    "skipping interviewee"
                );
                skipped += 1;
                continue;
            }

            let busy = self.store.busy_windows(&person.id);
            let was_placed = self.place_in_first_feasible_slot(
                &person.id,
                candidates,
                &busy,
                slot_starts.clone(),
                window,
            )?;
            if was_placed {
                placed += 1;
            } else {
                debug!(interviewee = %person.id, "no feasible slot in window");
                skipped += 1;
            }
        }

        let conflicts = self.detect_conflicts();
        info!(
            placed,
            skipped,
            conflicts = conflicts.len(),
            "auto-schedule run complete"
        );

        Ok(AutoScheduleOutcome {
            placed,
            skipped,
            conflicts,
        })
    }

    /// Tries each candidate slot chronologically; commits and returns
    /// `true` on the first fit, `false` when the window is exhausted.
    fn place_in_first_feasible_slot(
        &mut self,
        interviewee_id: &str,
        candidates: &[Interviewer],
        busy: &[BusyWindow],
        slot_starts: Slots,
        window: &ScheduleWindow,
    ) -> Result<bool, ScheduleError> {
        for slot_start in slot_starts {
            let slot = window.slot_at(slot_start);

            if busy.iter().any(|b| b.window.overlaps(&slot)) {
                continue;
            }

            // First free same-area interviewer, roster order.
            let free = candidates
                .iter()
                .find(|ivr| !self.interviewer_booked_over(&ivr.id, &slot));
            if let Some(interviewer) = free {
                let assignment = Assignment::new(&interviewer.id, slot);
                self.commit_assignment(interviewee_id, assignment)?;
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Manually schedules an interview at a wall-clock start time.
    ///
    /// Parses `clock` (`"HH:MM"` or `"HH:MM:SS"`), then commits a
    /// default-length slot. Busy-window avoidance is NOT run: the
    /// administrator is expected to review [`Self::detect_conflicts`]
    /// afterwards. Area matching follows the configured
    /// [`ManualPolicy`].
    ///
    /// # Errors
    /// `InvalidInput` on unparseable time; otherwise as
    /// [`Self::schedule_interview_at`].
    pub fn schedule_interview(
        &mut self,
        interviewee_id: &str,
        clock: &str,
        interviewer_id: &str,
    ) -> Result<Assignment, ScheduleError> {
        let start_ms = parse_clock(clock)?;
        self.schedule_interview_at(interviewee_id, start_ms, interviewer_id)
    }

    /// Manually schedules an interview at a pre-parsed instant.
    ///
    /// # Errors
    /// `UnknownInterviewee` / `UnknownInterviewer` on bad references,
    /// `NoAreaPreference` when the interviewee has no area set,
    /// `AreaMismatch` under `EnforceArea`,
    /// `AlreadyAssigned` when a previous assignment was not cleared,
    /// `InterviewerBusy` when the interviewer is booked over the slot.
    pub fn schedule_interview_at(
        &mut self,
        interviewee_id: &str,
        start_ms: i64,
        interviewer_id: &str,
    ) -> Result<Assignment, ScheduleError> {
        let interviewer = self
            .store
            .interviewers()
            .into_iter()
            .find(|i| i.id == interviewer_id)
            .ok_or_else(|| ScheduleError::UnknownInterviewer(interviewer_id.to_string()))?;

        let person = self
            .store
            .interviewee(interviewee_id)
            .ok_or_else(|| ScheduleError::UnknownInterviewee(interviewee_id.to_string()))?;
        let area = person
            .area
            .ok_or_else(|| ScheduleError::NoAreaPreference(interviewee_id.to_string()))?;
        if self.manual_policy == ManualPolicy::EnforceArea && area != interviewer.area {
            return Err(ScheduleError::AreaMismatch {
                interviewee_area: area,
                interviewer_area: interviewer.area,
            });
        }

        let slot = Interval::new(start_ms, start_ms + DEFAULT_SLOT_MS);
        self.commit_assignment(interviewee_id, Assignment::new(interviewer_id, slot))
    }

    /// Clears the interviewee's assignment.
    ///
    /// Idempotent: clearing an interviewee without an assignment is a
    /// no-op, not an error.
    ///
    /// # Errors
    /// `UnknownInterviewee` when the ID does not exist at all.
    pub fn clear_interview(&mut self, interviewee_id: &str) -> Result<(), ScheduleError> {
        let existed = self.store.clear_assignment(interviewee_id)?;
        if existed {
            debug!(interviewee = %interviewee_id, "cleared interview");
        }
        Ok(())
    }

    /// Clears every assignment in one step, returning the count.
    pub fn clear_all_interviews(&mut self) -> Result<usize, ScheduleError> {
        let cleared = self.store.clear_all_assignments()?;
        info!(cleared, "cleared all interviews");
        Ok(cleared)
    }

    /// Recomputes the conflict report against current committed state.
    pub fn detect_conflicts(&self) -> Vec<Conflict> {
        let interviewees = self.store.interviewees();
        let busy: HashMap<String, Vec<BusyWindow>> = interviewees
            .iter()
            .filter(|p| p.assignment.is_some())
            .map(|p| (p.id.clone(), self.store.busy_windows(&p.id)))
            .collect();
        detect_conflicts(&interviewees, &busy)
    }

    /// The single commit point for assignments.
    ///
    /// Enforces both assignment invariants: one assignment per
    /// interviewee, and no overlapping bookings per interviewer.
    fn commit_assignment(
        &mut self,
        interviewee_id: &str,
        assignment: Assignment,
    ) -> Result<Assignment, ScheduleError> {
        let person = self
            .store
            .interviewee(interviewee_id)
            .ok_or_else(|| ScheduleError::UnknownInterviewee(interviewee_id.to_string()))?;
        if person.assignment.is_some() {
            return Err(ScheduleError::AlreadyAssigned(interviewee_id.to_string()));
        }

        if self.interviewer_booked_over(&assignment.interviewer_id, &assignment.slot) {
            return Err(ScheduleError::InterviewerBusy {
                interviewer_id: assignment.interviewer_id.clone(),
                slot: assignment.slot,
            });
        }

        self.store
            .persist_assignment(interviewee_id, assignment.clone())?;
        debug!(
            interviewee = %interviewee_id,
            interviewer = %assignment.interviewer_id,
            slot_start_ms = assignment.slot.start_ms,
            "committed interview assignment"
        );
        Ok(assignment)
    }

    /// Whether the interviewer holds any committed assignment
    /// overlapping `slot`.
    fn interviewer_booked_over(&self, interviewer_id: &str, slot: &Interval) -> bool {
        self.store
            .interviewees()
            .iter()
            .filter_map(|p| p.assignment.as_ref())
            .any(|a| a.interviewer_id == interviewer_id && a.slot.overlaps(slot))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ChallengeRun, Interviewee};
    use crate::store::MemoryStore;

    const MIN: i64 = 60 * 1000;
    const HOUR: i64 = 60 * MIN;

    fn interviewee(id: &str, area: Area, team: &str) -> Interviewee {
        Interviewee::new(id)
            .with_name(id.to_uppercase())
            .with_area(area)
            .with_team(team)
    }

    #[test]
    fn test_end_to_end_busy_window_pushes_to_next_slot() {
        // 09:00-09:45, 15-min slots → 09:00, 09:15, 09:30.
        // Busy [09:00, 09:10) → expect placement at 09:15, no conflicts.
        let store = MemoryStore::new()
            .with_interviewer(Interviewer::new("p1", Area::Programming))
            .with_interviewer(Interviewer::new("p2", Area::Programming))
            .with_interviewee(interviewee("u1", Area::Programming, "t1"))
            .with_team_runs("t1", vec![ChallengeRun::new("Challenge 1", 1, 9 * HOUR)])
            .with_run_duration(10 * MIN);

        let mut scheduler = InterviewScheduler::new(store);
        let window = ScheduleWindow::new(9 * HOUR, 9 * HOUR + 45 * MIN);
        let outcome = scheduler.auto_schedule(&window).unwrap();

        assert_eq!(outcome.placed, 1);
        assert_eq!(outcome.skipped, 0);
        assert!(outcome.conflicts.is_empty());

        let a = scheduler
            .store()
            .interviewee("u1")
            .unwrap()
            .assignment
            .unwrap();
        assert_eq!(a.slot.start_ms, 9 * HOUR + 15 * MIN);
        assert_eq!(a.interviewer_id, "p1"); // first of the area, roster order
    }

    #[test]
    fn test_busy_window_ending_at_slot_start_is_not_blocking() {
        // Busy [09:00, 09:15) exactly touches the 09:15 slot → placeable there.
        let store = MemoryStore::new()
            .with_interviewer(Interviewer::new("m1", Area::Mechanics))
            .with_interviewee(interviewee("u1", Area::Mechanics, "t1"))
            .with_team_runs("t1", vec![ChallengeRun::new("Run", 1, 9 * HOUR)])
            .with_run_duration(15 * MIN);

        let mut scheduler = InterviewScheduler::new(store);
        let window = ScheduleWindow::new(9 * HOUR, 10 * HOUR);
        let outcome = scheduler.auto_schedule(&window).unwrap();

        assert_eq!(outcome.placed, 1);
        let a = scheduler
            .store()
            .interviewee("u1")
            .unwrap()
            .assignment
            .unwrap();
        assert_eq!(a.slot.start_ms, 9 * HOUR + 15 * MIN);
    }

    #[test]
    fn test_capacity_exhaustion_places_one_skips_one() {
        // One MECHANICS interviewer, two interviewees whose only free
        // slot is the same single slot → 1 placed, 1 skipped.
        let busy_all_but_first_slot = vec![ChallengeRun::new("Run", 1, 9 * HOUR + 15 * MIN)];
        let store = MemoryStore::new()
            .with_interviewer(Interviewer::new("m1", Area::Mechanics))
            .with_interviewee(interviewee("u1", Area::Mechanics, "t1"))
            .with_interviewee(interviewee("u2", Area::Mechanics, "t2"))
            .with_team_runs("t1", busy_all_but_first_slot.clone())
            .with_team_runs("t2", busy_all_but_first_slot)
            .with_run_duration(15 * MIN);

        let mut scheduler = InterviewScheduler::new(store);
        // Window holds exactly two slots; the second is busy for both teams.
        let window = ScheduleWindow::new(9 * HOUR, 9 * HOUR + 30 * MIN);
        let outcome = scheduler.auto_schedule(&window).unwrap();

        assert_eq!(outcome.placed, 1);
        assert_eq!(outcome.skipped, 1);

        let u1 = scheduler.store().interviewee("u1").unwrap();
        let u2 = scheduler.store().interviewee("u2").unwrap();
        assert!(u1.assignment.is_some()); // roster order wins
        assert!(u2.assignment.is_none());
    }

    #[test]
    fn test_area_match_on_auto_path() {
        let store = MemoryStore::new()
            .with_interviewer(Interviewer::new("m1", Area::Mechanics))
            .with_interviewer(Interviewer::new("e1", Area::Electronics))
            .with_interviewer(Interviewer::new("p1", Area::Programming))
            .with_interviewee(interviewee("u1", Area::Electronics, "t1"))
            .with_interviewee(interviewee("u2", Area::Programming, "t1"))
            .with_interviewee(interviewee("u3", Area::Mechanics, "t1"));

        let mut scheduler = InterviewScheduler::new(store);
        let window = ScheduleWindow::new(9 * HOUR, 17 * HOUR);
        let outcome = scheduler.auto_schedule(&window).unwrap();
        assert_eq!(outcome.placed, 3);

        let interviewers: HashMap<String, Area> = scheduler
            .store()
            .interviewers()
            .into_iter()
            .map(|i| (i.id, i.area))
            .collect();
        for person in scheduler.store().interviewees() {
            let a = person.assignment.expect("all placed");
            assert_eq!(interviewers[&a.interviewer_id], person.area.unwrap());
        }
    }

    #[test]
    fn test_interviewer_exclusivity() {
        // Three same-area interviewees, one interviewer → three
        // consecutive slots, no overlapping bookings.
        let store = MemoryStore::new()
            .with_interviewer(Interviewer::new("m1", Area::Mechanics))
            .with_interviewee(interviewee("u1", Area::Mechanics, "t1"))
            .with_interviewee(interviewee("u2", Area::Mechanics, "t2"))
            .with_interviewee(interviewee("u3", Area::Mechanics, "t3"));

        let mut scheduler = InterviewScheduler::new(store);
        let window = ScheduleWindow::new(9 * HOUR, 10 * HOUR);
        let outcome = scheduler.auto_schedule(&window).unwrap();
        assert_eq!(outcome.placed, 3);

        let slots: Vec<Interval> = scheduler
            .store()
            .interviewees()
            .iter()
            .filter_map(|p| p.assignment.as_ref())
            .map(|a| a.slot)
            .collect();
        for (i, a) in slots.iter().enumerate() {
            for b in &slots[i + 1..] {
                assert!(!a.overlaps(b), "overlapping bookings for one interviewer");
            }
        }
    }

    #[test]
    fn test_parallel_placement_across_interviewers() {
        // Two interviewers of one area → both interviewees land in the
        // first slot, one per interviewer.
        let store = MemoryStore::new()
            .with_interviewer(Interviewer::new("m1", Area::Mechanics))
            .with_interviewer(Interviewer::new("m2", Area::Mechanics))
            .with_interviewee(interviewee("u1", Area::Mechanics, "t1"))
            .with_interviewee(interviewee("u2", Area::Mechanics, "t2"));

        let mut scheduler = InterviewScheduler::new(store);
        let window = ScheduleWindow::new(9 * HOUR, 10 * HOUR);
        scheduler.auto_schedule(&window).unwrap();

        let u1 = scheduler.store().interviewee("u1").unwrap().assignment.unwrap();
        let u2 = scheduler.store().interviewee("u2").unwrap().assignment.unwrap();
        assert_eq!(u1.slot.start_ms, 9 * HOUR);
        assert_eq!(u2.slot.start_ms, 9 * HOUR);
        assert_ne!(u1.interviewer_id, u2.interviewer_id);
    }

    #[test]
    fn test_determinism_across_runs() {
        let build = || {
            MemoryStore::new()
                .with_interviewer(Interviewer::new("m1", Area::Mechanics))
                .with_interviewer(Interviewer::new("m2", Area::Mechanics))
                .with_interviewer(Interviewer::new("p1", Area::Programming))
                .with_interviewee(interviewee("u1", Area::Mechanics, "t1"))
                .with_interviewee(interviewee("u2", Area::Programming, "t1"))
                .with_interviewee(interviewee("u3", Area::Mechanics, "t2"))
                .with_team_runs("t1", vec![ChallengeRun::new("Run", 1, 9 * HOUR)])
        };
        let window = ScheduleWindow::new(9 * HOUR, 12 * HOUR);

        let run = |store: MemoryStore| {
            let mut scheduler = InterviewScheduler::new(store);
            scheduler.auto_schedule(&window).unwrap();
            scheduler
                .into_store()
                .interviewees()
                .into_iter()
                .map(|p| (p.id, p.assignment))
                .collect::<Vec<_>>()
        };

        assert_eq!(run(build()), run(build()));
    }

    #[test]
    fn test_no_interviewers_for_area_is_skipped_not_fatal() {
        let store = MemoryStore::new()
            .with_interviewer(Interviewer::new("m1", Area::Mechanics))
            .with_interviewee(interviewee("u1", Area::Electronics, "t1"))
            .with_interviewee(interviewee("u2", Area::Mechanics, "t1"));

        let mut scheduler = InterviewScheduler::new(store);
        let window = ScheduleWindow::new(9 * HOUR, 10 * HOUR);
        let outcome = scheduler.auto_schedule(&window).unwrap();

        assert_eq!(outcome.placed, 1);
        assert_eq!(outcome.skipped, 1);
        assert!(scheduler.store().interviewee("u1").unwrap().assignment.is_none());
        assert!(scheduler.store().interviewee("u2").unwrap().assignment.is_some());
    }

    #[test]
    fn test_no_area_preference_counted_as_skipped() {
        let store = MemoryStore::new()
            .with_interviewer(Interviewer::new("m1", Area::Mechanics))
            .with_interviewee(Interviewee::new("u1").with_name("No Area"))
            .with_interviewee(interviewee("u2", Area::Mechanics, "t1"));

        let mut scheduler = InterviewScheduler::new(store);
        let window = ScheduleWindow::new(9 * HOUR, 10 * HOUR);
        let outcome = scheduler.auto_schedule(&window).unwrap();

        // The no-area interviewee shows up in the summary as skipped.
        assert_eq!(outcome.placed, 1);
        assert_eq!(outcome.skipped, 1);
        assert!(scheduler.store().interviewee("u1").unwrap().assignment.is_none());
        assert!(scheduler.store().interviewee("u2").unwrap().assignment.is_some());
    }

    #[test]
    fn test_manual_schedule_requires_area_preference() {
        // The no-area rejection applies on the manual path under both
        // policies, not only under EnforceArea.
        let build = || {
            MemoryStore::new()
                .with_interviewer(Interviewer::new("m1", Area::Mechanics))
                .with_interviewee(Interviewee::new("u1").with_name("No Area"))
        };

        let mut loose = InterviewScheduler::new(build());
        assert!(matches!(
            loose.schedule_interview("u1", "09:00", "m1"),
            Err(ScheduleError::NoAreaPreference(_))
        ));
        assert!(loose.store().interviewee("u1").unwrap().assignment.is_none());

        let mut strict =
            InterviewScheduler::new(build()).with_manual_policy(ManualPolicy::EnforceArea);
        assert!(matches!(
            strict.schedule_interview("u1", "09:00", "m1"),
            Err(ScheduleError::NoAreaPreference(_))
        ));
    }

    #[test]
    fn test_invalid_range_commits_nothing() {
        let store = MemoryStore::new()
            .with_interviewer(Interviewer::new("m1", Area::Mechanics))
            .with_interviewee(interviewee("u1", Area::Mechanics, "t1"));

        let mut scheduler = InterviewScheduler::new(store);
        let window = ScheduleWindow::new(10 * HOUR, 9 * HOUR);
        assert!(matches!(
            scheduler.auto_schedule(&window),
            Err(ScheduleError::InvalidRange { .. })
        ));
        assert!(scheduler.store().interviewee("u1").unwrap().assignment.is_none());
    }

    #[test]
    fn test_existing_assignments_respected() {
        // u1 already holds 09:00 with m1; the run must book u2 around it.
        let store = MemoryStore::new()
            .with_interviewer(Interviewer::new("m1", Area::Mechanics))
            .with_interviewee(interviewee("u1", Area::Mechanics, "t1"))
            .with_interviewee(interviewee("u2", Area::Mechanics, "t2"));

        let mut scheduler = InterviewScheduler::new(store);
        scheduler
            .schedule_interview("u1", "09:00", "m1")
            .unwrap();

        let window = ScheduleWindow::new(9 * HOUR, 10 * HOUR);
        let outcome = scheduler.auto_schedule(&window).unwrap();
        assert_eq!(outcome.placed, 1);

        let u2 = scheduler.store().interviewee("u2").unwrap().assignment.unwrap();
        assert_eq!(u2.slot.start_ms, 9 * HOUR + 15 * MIN);
    }

    #[test]
    fn test_manual_schedule_parses_clock_and_commits() {
        let store = MemoryStore::new()
            .with_interviewer(Interviewer::new("m1", Area::Mechanics))
            .with_interviewee(interviewee("u1", Area::Mechanics, "t1"));

        let mut scheduler = InterviewScheduler::new(store);
        let a = scheduler.schedule_interview("u1", "10:30", "m1").unwrap();
        assert_eq!(a.slot.start_ms, 10 * HOUR + 30 * MIN);
        assert_eq!(a.slot.duration_ms(), DEFAULT_SLOT_MS);

        assert!(matches!(
            scheduler.schedule_interview("u1", "not a time", "m1"),
            Err(ScheduleError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_manual_schedule_skips_conflict_avoidance() {
        // Manual entry on top of a busy window succeeds; the conflict
        // detector reports it afterwards.
        let store = MemoryStore::new()
            .with_interviewer(Interviewer::new("m1", Area::Mechanics))
            .with_interviewee(interviewee("u1", Area::Mechanics, "t1"))
            .with_team_runs("t1", vec![ChallengeRun::new("Challenge 1", 1, 10 * HOUR)]);

        let mut scheduler = InterviewScheduler::new(store);
        scheduler.schedule_interview("u1", "10:00", "m1").unwrap();

        let conflicts = scheduler.detect_conflicts();
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].overlap.duration_ms(), 5 * MIN);
        assert_eq!(conflicts[0].overlap_minutes(), 5);
    }

    #[test]
    fn test_manual_area_mismatch_policy() {
        let build = || {
            MemoryStore::new()
                .with_interviewer(Interviewer::new("p1", Area::Programming))
                .with_interviewee(interviewee("u1", Area::Mechanics, "t1"))
        };

        // Default: unchecked, cross-area manual assignment goes through.
        let mut loose = InterviewScheduler::new(build());
        assert!(loose.schedule_interview("u1", "09:00", "p1").is_ok());

        // EnforceArea rejects the same call.
        let mut strict =
            InterviewScheduler::new(build()).with_manual_policy(ManualPolicy::EnforceArea);
        assert!(matches!(
            strict.schedule_interview("u1", "09:00", "p1"),
            Err(ScheduleError::AreaMismatch { .. })
        ));
    }

    #[test]
    fn test_reschedule_requires_clear() {
        let store = MemoryStore::new()
            .with_interviewer(Interviewer::new("m1", Area::Mechanics))
            .with_interviewee(interviewee("u1", Area::Mechanics, "t1"));

        let mut scheduler = InterviewScheduler::new(store);
        scheduler.schedule_interview("u1", "09:00", "m1").unwrap();
        assert!(matches!(
            scheduler.schedule_interview("u1", "11:00", "m1"),
            Err(ScheduleError::AlreadyAssigned(_))
        ));

        scheduler.clear_interview("u1").unwrap();
        let a = scheduler.schedule_interview("u1", "11:00", "m1").unwrap();
        assert_eq!(a.slot.start_ms, 11 * HOUR);
    }

    #[test]
    fn test_gateway_rejects_interviewer_double_booking() {
        let store = MemoryStore::new()
            .with_interviewer(Interviewer::new("m1", Area::Mechanics))
            .with_interviewee(interviewee("u1", Area::Mechanics, "t1"))
            .with_interviewee(interviewee("u2", Area::Mechanics, "t2"));

        let mut scheduler = InterviewScheduler::new(store);
        scheduler.schedule_interview("u1", "09:00", "m1").unwrap();

        // Overlapping manual booking for the same interviewer.
        assert!(matches!(
            scheduler.schedule_interview("u2", "09:10", "m1"),
            Err(ScheduleError::InterviewerBusy { .. })
        ));
        // Touching slot is fine (half-open).
        assert!(scheduler.schedule_interview("u2", "09:15", "m1").is_ok());
    }

    #[test]
    fn test_clear_is_idempotent_and_checks_ids() {
        let store = MemoryStore::new()
            .with_interviewee(interviewee("u1", Area::Mechanics, "t1"));

        let mut scheduler = InterviewScheduler::new(store);
        scheduler.clear_interview("u1").unwrap(); // nothing assigned: no-op
        scheduler.clear_interview("u1").unwrap();
        assert!(matches!(
            scheduler.clear_interview("ghost"),
            Err(ScheduleError::UnknownInterviewee(_))
        ));
    }

    #[test]
    fn test_clear_all_returns_count() {
        let store = MemoryStore::new()
            .with_interviewer(Interviewer::new("m1", Area::Mechanics))
            .with_interviewee(interviewee("u1", Area::Mechanics, "t1"))
            .with_interviewee(interviewee("u2", Area::Mechanics, "t2"));

        let mut scheduler = InterviewScheduler::new(store);
        let window = ScheduleWindow::new(9 * HOUR, 10 * HOUR);
        scheduler.auto_schedule(&window).unwrap();

        assert_eq!(scheduler.clear_all_interviews().unwrap(), 2);
        assert_eq!(scheduler.clear_all_interviews().unwrap(), 0);
    }

    #[test]
    fn test_unknown_interviewer_on_manual_path() {
        let store = MemoryStore::new()
            .with_interviewee(interviewee("u1", Area::Mechanics, "t1"));

        let mut scheduler = InterviewScheduler::new(store);
        assert!(matches!(
            scheduler.schedule_interview("u1", "09:00", "ghost"),
            Err(ScheduleError::UnknownInterviewer(_))
        ));
    }
}
