//! Subject area enumeration.
//!
//! The fixed set of interview subject areas. An interviewee is matched
//! to an interviewer solely by area equality — there is no skill level
//! or secondary criterion.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An interview subject area.
///
/// Closed enumeration: the tournament defines exactly these three.
/// Serialized in SCREAMING_CASE to match the roster wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Area {
    /// Mechanical design and construction.
    Mechanics,
    /// Electronics and wiring.
    Electronics,
    /// Robot programming.
    Programming,
}

impl Area {
    /// All areas, in display order.
    pub const ALL: [Area; 3] = [Area::Mechanics, Area::Electronics, Area::Programming];

    /// Canonical wire token (SCREAMING_CASE).
    pub fn as_str(&self) -> &'static str {
        match self {
            Area::Mechanics => "MECHANICS",
            Area::Electronics => "ELECTRONICS",
            Area::Programming => "PROGRAMMING",
        }
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Area {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "MECHANICS" => Ok(Area::Mechanics),
            "ELECTRONICS" => Ok(Area::Electronics),
            "PROGRAMMING" => Ok(Area::Programming),
            other => Err(format!("unknown area '{other}'")),
        }
    }
}
