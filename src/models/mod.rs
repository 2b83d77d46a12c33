//! Enrollment domain models.
//!
//! Plain value types for the registration domain. All entities are
//! identified by name; see the crate docs for the identity rules.

mod course;
mod person;

pub use course::Course;
pub use person::{Person, Student, Teacher};
