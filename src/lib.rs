//! Interview scheduling engine for tournament events.
//!
//! Places every pending interviewee into a time slot with an
//! interviewer of the matching subject area, avoiding the
//! interviewee's competition runs, and reports every remaining
//! overlap against the schedule actually committed.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Interviewee`, `Interviewer`, `Area`,
//!   `Interval`, `Assignment`, `ChallengeRun`, `BusyWindow`
//! - **`slots`**: Candidate slot generation over a day window
//! - **`conflicts`**: Post-hoc overlap detection and reporting
//! - **`store`**: Repository contract plus the in-memory reference store
//! - **`scheduler`**: The assignment engine and mutation gateway
//! - **`clock`**: Wall-clock parsing at the API boundary
//! - **`error`**: The `ScheduleError` taxonomy
//!
//! # Example
//!
//! ```
//! use interview_scheduler::models::{Area, ChallengeRun, Interviewee, Interviewer};
//! use interview_scheduler::scheduler::InterviewScheduler;
//! use interview_scheduler::slots::ScheduleWindow;
//! use interview_scheduler::store::MemoryStore;
//!
//! let store = MemoryStore::new()
//!     .with_interviewer(Interviewer::new("ivr-1", Area::Programming).with_name("Grace"))
//!     .with_interviewee(
//!         Interviewee::new("u1")
//!             .with_name("Ada")
//!             .with_area(Area::Programming)
//!             .with_team("team-7"),
//!     )
//!     .with_team_runs("team-7", vec![ChallengeRun::new("Challenge 1 - Pista A", 1, 0)]);
//!
//! let mut scheduler = InterviewScheduler::new(store);
//! let window = ScheduleWindow::from_clock("09:00", "17:00").unwrap();
//! let outcome = scheduler.auto_schedule(&window).unwrap();
//! assert_eq!(outcome.placed, 1);
//! assert!(outcome.conflicts.is_empty());
//! ```
//!
//! # Concurrency
//!
//! One logical operation per invocation: every mutation takes
//! `&mut self` on the scheduler, and the store contract requires a
//! consistent snapshot for the duration of a run. Hosts serving
//! concurrent administrative requests must serialize mutations
//! (lock, actor, or single-writer task).

pub mod clock;
pub mod conflicts;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod slots;
pub mod store;

pub use conflicts::Conflict;
pub use error::ScheduleError;
pub use scheduler::{AutoScheduleOutcome, InterviewScheduler, ManualPolicy};
pub use slots::ScheduleWindow;
