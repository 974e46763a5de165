//! Interviewee (roster member) model.
//!
//! Interviewees are created by the external roster layer and mutated
//! only through the mutation gateway (assign / clear). The core never
//! deletes them.

use serde::{Deserialize, Serialize};

use super::{Area, Assignment};

/// A roster member awaiting (or holding) an interview slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interviewee {
    /// Unique identifier (opaque, roster-assigned).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Preferred subject area.
    ///
    /// `None` makes the interviewee unschedulable: the batch scheduler
    /// skips and counts them, the manual path fails explicitly.
    pub area: Option<Area>,
    /// Team this member competes with (source of busy windows).
    pub team_id: Option<String>,
    /// Committed interview assignment, if any.
    pub assignment: Option<Assignment>,
    /// Free-form scheduling note.
    pub note: Option<String>,
}

impl Interviewee {
    /// Creates a new interviewee with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            email: String::new(),
            area: None,
            team_id: None,
            assignment: None,
            note: None,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the contact email.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the preferred subject area.
    pub fn with_area(mut self, area: Area) -> Self {
        self.area = Some(area);
        self
    }

    /// Sets the team reference.
    pub fn with_team(mut self, team_id: impl Into<String>) -> Self {
        self.team_id = Some(team_id.into());
        self
    }

    /// Sets the scheduling note.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Whether this interviewee currently holds an assignment.
    #[inline]
    pub fn is_scheduled(&self) -> bool {
        self.assignment.is_some()
    }

    /// Whether this interviewee can still be placed: an area
    /// preference is set and no assignment is held yet.
    pub fn needs_slot(&self) -> bool {
        self.area.is_some() && self.assignment.is_none()
    }
}
