//! Assignment engine and mutation gateway.
//!
//! [`InterviewScheduler`] is the single mutation entry point for
//! committed interview state: the batch auto-scheduler, the manual
//! scheduling path, and the clear operations all route through it so
//! the assignment invariants are checked in one place.
//!
//! # Algorithm
//!
//! `auto_schedule` is a greedy earliest-slot placement: interviewees
//! are taken in roster order, and each is placed at the first slot
//! with a free same-area interviewer and no busy-window overlap.
//! Placements commit incrementally, so later interviewees see earlier
//! bookings. Not optimal, but deterministic and fast.

mod engine;

pub use engine::{AutoScheduleOutcome, InterviewScheduler, ManualPolicy};
