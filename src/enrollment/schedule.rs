//! Course schedule and booking state machine.
//!
//! A [`CourseSchedule`] runs one course over a date range with a fixed
//! seat capacity. Per student it tracks one of three mutually exclusive
//! states: not involved, registered, or waitlisted.
//!
//! # State machine
//!
//! ```text
//! NotInvolved --book, eligible & room--> Registered        (true)
//! NotInvolved --book, eligible & full--> Waitlisted        (false)
//! NotInvolved --book, ineligible or already involved-----> (false, no-op)
//! Registered  --cancel--> NotInvolved  (+ head of waitlist promotes)
//! Waitlisted  --cancel--> NotInvolved
//! ```
//!
//! Eligibility is checked before capacity: an ineligible student is
//! rejected outright and never waitlisted. Promotion on cancellation is
//! unconditional — the head of the waitlist takes the freed seat with
//! no eligibility or capacity re-check, exactly one promotion per
//! cancellation.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::{HashSet, VecDeque};
use thiserror::Error;
use tracing::debug;

use crate::models::{Course, Student, Teacher};

/// Construction errors for [`CourseSchedule`].
///
/// Both are fatal: no schedule is produced and the caller must retry
/// with corrected arguments. Every post-construction operation is
/// total — booking and cancellation outcomes are reported by value,
/// never as errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// Seat capacity must be greater than zero.
    #[error("course capacity must be greater than zero (got {0})")]
    InvalidCapacity(usize),
    /// The course must start strictly before it ends.
    #[error("course start date {start} must be strictly before end date {end}")]
    InvalidDateRange {
        /// Rejected start date.
        start: NaiveDate,
        /// Rejected end date.
        end: NaiveDate,
    },
}

/// A scheduled run of a course: capacity, dates, teacher, roster, and
/// waiting list.
///
/// The schedule owns its `Course`; [`course_mut`](Self::course_mut)
/// exposes it so prerequisites can evolve between bookings. Eligibility
/// is evaluated against the prerequisite set as it stands at call time,
/// nothing is cached.
///
/// `Serialize` is derived for snapshot export; `Deserialize` is not,
/// since it would bypass construction validation.
#[derive(Debug, Clone, Serialize)]
pub struct CourseSchedule {
    course: Course,
    capacity: usize,
    start_date: NaiveDate,
    end_date: NaiveDate,
    teacher: Teacher,
    roster: HashSet<Student>,
    waitlist: VecDeque<Student>,
}

impl CourseSchedule {
    /// Creates a schedule with an empty roster and waiting list.
    ///
    /// # Errors
    ///
    /// [`ScheduleError::InvalidCapacity`] if `capacity` is zero;
    /// [`ScheduleError::InvalidDateRange`] if `start_date` is not
    /// strictly before `end_date`.
    pub fn new(
        course: Course,
        capacity: usize,
        start_date: NaiveDate,
        end_date: NaiveDate,
        teacher: Teacher,
    ) -> Result<Self, ScheduleError> {
        if capacity == 0 {
            return Err(ScheduleError::InvalidCapacity(capacity));
        }
        if start_date >= end_date {
            return Err(ScheduleError::InvalidDateRange {
                start: start_date,
                end: end_date,
            });
        }

        Ok(Self {
            course,
            capacity,
            start_date,
            end_date,
            teacher,
            roster: HashSet::new(),
            waitlist: VecDeque::new(),
        })
    }

    /// Attempts to register a student.
    ///
    /// Returns `true` only when the student lands directly on the
    /// roster. Returns `false` when the student is already registered
    /// or waitlisted, is missing a prerequisite, or — being eligible
    /// but finding the course full — is appended to the waiting list
    /// tail. A waitlist placement is deliberately reported as a booking
    /// failure: the student could not register directly.
    pub fn book_course(&mut self, student: Student) -> bool {
        if self.is_student_registered(&student) || self.is_student_on_waiting_list(&student) {
            debug!(
                student = student.name(),
                course = self.course.name(),
                "booking rejected: already involved"
            );
            return false;
        }

        // Eligibility gates capacity: an ineligible student is never waitlisted
        for prerequisite in self.course.prerequisites() {
            if !student.has_taken_course(prerequisite) {
                debug!(
                    student = student.name(),
                    course = self.course.name(),
                    missing = prerequisite.name(),
                    "booking rejected: missing prerequisite"
                );
                return false;
            }
        }

        if self.is_course_full() {
            debug!(
                student = student.name(),
                course = self.course.name(),
                position = self.waitlist.len() + 1,
                "course full: student waitlisted"
            );
            self.waitlist.push_back(student);
            return false;
        }

        debug!(
            student = student.name(),
            course = self.course.name(),
            registered = self.roster.len() + 1,
            "student registered"
        );
        self.roster.insert(student)
    }

    /// Removes a student from the roster or the waiting list.
    ///
    /// Cancelling a registered student frees a seat; if anyone is
    /// waiting, the head of the waitlist is promoted into it
    /// unconditionally. Cancelling a waitlisted student only removes
    /// them from the queue. Cancelling an uninvolved student is a
    /// no-op.
    pub fn cancel_booking(&mut self, student: &Student) {
        if self.roster.remove(student) {
            debug!(
                student = student.name(),
                course = self.course.name(),
                "registration cancelled"
            );
            if let Some(promoted) = self.waitlist.pop_front() {
                debug!(
                    student = promoted.name(),
                    course = self.course.name(),
                    "promoted from waiting list"
                );
                self.roster.insert(promoted);
            }
        } else if let Some(position) = self.waitlist.iter().position(|s| s == student) {
            debug!(
                student = student.name(),
                course = self.course.name(),
                "removed from waiting list"
            );
            self.waitlist.remove(position);
        }
    }

    /// Whether the roster has reached capacity.
    pub fn is_course_full(&self) -> bool {
        self.roster.len() >= self.capacity
    }

    /// Whether the student is on the roster (by name).
    pub fn is_student_registered(&self, student: &Student) -> bool {
        self.roster.contains(student)
    }

    /// Whether the student is on the waiting list (by name).
    pub fn is_student_on_waiting_list(&self, student: &Student) -> bool {
        self.waitlist.iter().any(|s| s == student)
    }

    /// Whether anyone is waiting for a seat.
    pub fn has_waiting_list(&self) -> bool {
        !self.waitlist.is_empty()
    }

    /// Number of registered students.
    pub fn registered_count(&self) -> usize {
        self.roster.len()
    }

    /// The scheduled course.
    pub fn course(&self) -> &Course {
        &self.course
    }

    /// Mutable access to the scheduled course.
    ///
    /// Prerequisites added here apply to subsequent bookings; students
    /// already registered or waitlisted are unaffected.
    pub fn course_mut(&mut self) -> &mut Course {
        &mut self.course
    }

    /// Seat capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// First day of the course.
    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Last day of the course.
    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    /// The teacher running the course.
    pub fn teacher(&self) -> &Teacher {
        &self.teacher
    }

    /// The roster, as a live view.
    pub fn registered_students(&self) -> &HashSet<Student> {
        &self.roster
    }

    /// Mutable live view of the roster.
    ///
    /// Mutations bypass the booking checks; callers seeding state
    /// through this view are responsible for staying within capacity.
    pub fn registered_students_mut(&mut self) -> &mut HashSet<Student> {
        &mut self.roster
    }

    /// The waiting list, head first, as a live view.
    pub fn waiting_list(&self) -> &VecDeque<Student> {
        &self.waitlist
    }

    /// Mutable live view of the waiting list.
    pub fn waiting_list_mut(&mut self) -> &mut VecDeque<Student> {
        &mut self.waitlist
    }
}
