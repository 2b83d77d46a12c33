//! Course enrollment framework.
//!
//! Provides the course/person domain models and the enrollment engine
//! used by a registration system to decide whether a student may book
//! a course, overflow full courses onto a waiting list, and backfill
//! vacated seats in first-come-first-served order.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Course`, `Person`, `Student`, `Teacher`
//! - **`enrollment`**: The booking state machine — `CourseSchedule`,
//!   capacity enforcement, FIFO waitlist promotion
//! - **`validation`**: Catalog integrity checks (duplicate names,
//!   dangling prerequisites, prerequisite cycles)
//!
//! # Identity
//!
//! Courses, students, and teachers are identified by name alone.
//! Mutable collections hanging off an entity (a course's prerequisites,
//! a student's completed courses) never participate in equality or
//! hashing, so entities stay stable as set and queue keys while their
//! state evolves.
//!
//! # Concurrency
//!
//! Single-threaded by design. A `CourseSchedule` assumes exclusive
//! access; callers embedding it in a multi-threaded system must
//! serialize access themselves (e.g. one lock per schedule).

pub mod enrollment;
pub mod models;
pub mod validation;
