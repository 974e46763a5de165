//! Interviewer model.
//!
//! Interviewers are created by the external roster layer and are
//! read-only to the core. Each carries exactly one subject area; there
//! is deliberately no setter for it — reassignment does not exist in
//! this domain.

use serde::{Deserialize, Serialize};

use super::Area;

/// A judge available to conduct interviews in one subject area.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interviewer {
    /// Unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Subject area this interviewer covers. Immutable once assigned.
    pub area: Area,
}

impl Interviewer {
    /// Creates a new interviewer for the given area.
    pub fn new(id: impl Into<String>, area: Area) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            email: String::new(),
            area,
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
}
