//! Interview scheduling domain models.
//!
//! Core data types for the interview scheduler: people, areas, time
//! intervals, committed assignments, and the busy windows derived from
//! a team's competition runs.
//!
//! # Domain Mapping
//!
//! | Type | Tournament meaning |
//! |------|--------------------|
//! | `Interviewee` | Roster member to be placed into a slot |
//! | `Interviewer` | Judge covering exactly one subject area |
//! | `Area` | Subject-matter compatibility key |
//! | `ChallengeRun` | A team's timed competition run |
//! | `BusyWindow` | Interval the interviewee is on the track |
//! | `Assignment` | Committed interviewee × interviewer × slot binding |

mod area;
mod assignment;
mod challenge;
mod interval;
mod interviewee;
mod interviewer;

pub use area::Area;
pub use assignment::Assignment;
pub use challenge::{busy_windows, BusyWindow, ChallengeRun, CHALLENGE_RUN_MS};
pub use interval::Interval;
pub use interviewee::Interviewee;
pub use interviewer::Interviewer;
