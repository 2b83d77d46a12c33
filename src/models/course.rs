//! Course model.
//!
//! A course is identified by its name and carries the set of courses a
//! student must have completed before enrolling.
//!
//! # Identity
//!
//! Equality and hashing are name-based only. The prerequisite set is
//! mutable and deliberately excluded from identity: two `Course` values
//! with equal names are interchangeable for every lookup and membership
//! purpose, regardless of what their prerequisite sets contain.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

/// A single course with its enrollment prerequisites.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    name: String,
    prerequisites: HashSet<Course>,
}

impl Course {
    /// Creates a course with no prerequisites.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            prerequisites: HashSet::new(),
        }
    }

    /// Adds a prerequisite (builder form).
    pub fn with_prerequisite(mut self, prerequisite: Course) -> Self {
        self.prerequisites.insert(prerequisite);
        self
    }

    /// Adds a single prerequisite.
    ///
    /// Returns `true` if it was newly added, `false` if a course with
    /// the same name was already present.
    pub fn add_prerequisite(&mut self, prerequisite: Course) -> bool {
        self.prerequisites.insert(prerequisite)
    }

    /// Adds a collection of prerequisites.
    ///
    /// Returns `true` if the prerequisite set changed at all.
    pub fn add_prerequisites<I>(&mut self, prerequisites: I) -> bool
    where
        I: IntoIterator<Item = Course>,
    {
        let mut changed = false;
        for prerequisite in prerequisites {
            changed |= self.prerequisites.insert(prerequisite);
        }
        changed
    }

    /// Whether the given course is a prerequisite (by name).
    pub fn is_prerequisite(&self, course: &Course) -> bool {
        self.prerequisites.contains(course)
    }

    /// The course name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The prerequisite set.
    pub fn prerequisites(&self) -> &HashSet<Course> {
        &self.prerequisites
    }
}

impl PartialEq for Course {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Course {}

impl Hash for Course {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}
