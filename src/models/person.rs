//! Person models.
//!
//! Two kinds of people exist in the enrollment domain: students, who
//! accumulate completed courses, and teachers, who run schedules.
//! `Person` is the sum type over both.
//!
//! # Identity
//!
//! Like [`Course`], students and teachers are identified by name alone;
//! a student's completed-course set never affects its identity, so
//! adding courses to a student cannot dislodge it from a roster or
//! waitlist it already sits in. Variant is part of `Person` identity:
//! a student and a teacher sharing a name are never equal.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

use super::Course;

/// Any person known to the registration system.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Person {
    /// A student, with their completed courses.
    Student(Student),
    /// A teacher.
    Teacher(Teacher),
}

impl Person {
    /// The person's name.
    pub fn name(&self) -> &str {
        match self {
            Person::Student(s) => s.name(),
            Person::Teacher(t) => t.name(),
        }
    }

    /// Returns the student variant, if this person is one.
    pub fn as_student(&self) -> Option<&Student> {
        match self {
            Person::Student(s) => Some(s),
            Person::Teacher(_) => None,
        }
    }

    /// Returns the teacher variant, if this person is one.
    pub fn as_teacher(&self) -> Option<&Teacher> {
        match self {
            Person::Teacher(t) => Some(t),
            Person::Student(_) => None,
        }
    }
}

impl From<Student> for Person {
    fn from(student: Student) -> Self {
        Person::Student(student)
    }
}

impl From<Teacher> for Person {
    fn from(teacher: Teacher) -> Self {
        Person::Teacher(teacher)
    }
}

/// A student and the courses they have completed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    name: String,
    courses_taken: HashSet<Course>,
}

impl Student {
    /// Creates a student with no completed courses.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            courses_taken: HashSet::new(),
        }
    }

    /// Records a completed course (builder form).
    pub fn with_course_taken(mut self, course: Course) -> Self {
        self.courses_taken.insert(course);
        self
    }

    /// Records a completed course.
    ///
    /// Returns `true` if it was newly added, `false` if a course with
    /// the same name was already recorded.
    pub fn add_course_taken(&mut self, course: Course) -> bool {
        self.courses_taken.insert(course)
    }

    /// Records a collection of completed courses.
    ///
    /// Returns `true` if the completed set changed at all.
    pub fn add_courses_taken<I>(&mut self, courses: I) -> bool
    where
        I: IntoIterator<Item = Course>,
    {
        let mut changed = false;
        for course in courses {
            changed |= self.courses_taken.insert(course);
        }
        changed
    }

    /// Whether the student has completed the given course (by name).
    pub fn has_taken_course(&self, course: &Course) -> bool {
        self.courses_taken.contains(course)
    }

    /// The student's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The completed-course set.
    pub fn courses_taken(&self) -> &HashSet<Course> {
        &self.courses_taken
    }
}

impl PartialEq for Student {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Student {}

impl Hash for Student {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

/// A teacher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Teacher {
    name: String,
}

impl Teacher {
    /// Creates a teacher.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The teacher's name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl PartialEq for Teacher {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Teacher {}

impl Hash for Teacher {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}
