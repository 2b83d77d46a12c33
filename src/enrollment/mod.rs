//! The enrollment engine.
//!
//! Implements the booking state machine for a single scheduled course:
//! eligibility gating against prerequisites, capacity enforcement on
//! the roster, and a FIFO waiting list that backfills vacated seats.

mod schedule;

pub use schedule::{CourseSchedule, ScheduleError};
