//! Catalog integrity checks.
//!
//! Validates a course catalog before it is handed to registration.
//! Detects:
//! - Duplicate course names
//! - Prerequisites that are not themselves catalog entries
//! - Courses listing themselves as prerequisites
//! - Circular prerequisite chains
//!
//! The prerequisite graph is built over the names of the top-level
//! catalog entries; prerequisite copies embedded inside `Course` values
//! are not traversed, since name lookups resolve through the catalog.

use crate::models::Course;
use std::collections::{HashMap, HashSet};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two catalog entries share the same name.
    DuplicateCourse,
    /// A prerequisite is not a catalog entry.
    UnknownPrerequisite,
    /// A course requires itself.
    SelfPrerequisite,
    /// The prerequisite graph contains a cycle.
    CyclicPrerequisite,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a course catalog.
///
/// Checks:
/// 1. No duplicate course names
/// 2. Every referenced prerequisite exists in the catalog
/// 3. No course is its own prerequisite
/// 4. No circular prerequisite chains
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_catalog(courses: &[Course]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut names = HashSet::new();
    for course in courses {
        if !names.insert(course.name()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateCourse,
                format!("Duplicate course name: {}", course.name()),
            ));
        }
    }

    for course in courses {
        for prerequisite in course.prerequisites() {
            if prerequisite.name() == course.name() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::SelfPrerequisite,
                    format!("Course '{}' requires itself", course.name()),
                ));
            } else if !names.contains(prerequisite.name()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownPrerequisite,
                    format!(
                        "Course '{}' requires unknown course '{}'",
                        course.name(),
                        prerequisite.name()
                    ),
                ));
            }
        }
    }

    if let Some(cycle_err) = detect_cycles(courses) {
        errors.push(cycle_err);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Detects cycles in the prerequisite graph using DFS.
///
/// Topological-sort style: a back-edge to a node on the current
/// recursion stack means a cycle. Self-loops are reported separately
/// as [`ValidationErrorKind::SelfPrerequisite`] and skipped here.
fn detect_cycles(courses: &[Course]) -> Option<ValidationError> {
    // Adjacency: prerequisite name → dependent course names
    let mut adj: HashMap<&str, Vec<&str>> = HashMap::new();
    let mut all_names: HashSet<&str> = HashSet::new();

    for course in courses {
        all_names.insert(course.name());
        for prerequisite in course.prerequisites() {
            if prerequisite.name() != course.name() {
                adj.entry(prerequisite.name())
                    .or_default()
                    .push(course.name());
            }
        }
    }

    let mut visited = HashSet::new();
    let mut in_stack = HashSet::new();

    for &name in &all_names {
        if !visited.contains(name) && has_cycle_dfs(name, &adj, &mut visited, &mut in_stack) {
            return Some(ValidationError::new(
                ValidationErrorKind::CyclicPrerequisite,
                format!("Circular prerequisite chain involving course '{name}'"),
            ));
        }
    }

    None
}

fn has_cycle_dfs<'a>(
    node: &'a str,
    adj: &HashMap<&'a str, Vec<&'a str>>,
    visited: &mut HashSet<&'a str>,
    in_stack: &mut HashSet<&'a str>,
) -> bool {
    visited.insert(node);
    in_stack.insert(node);

    if let Some(neighbors) = adj.get(node) {
        for &next in neighbors {
            if in_stack.contains(next) {
                return true; // Back edge → cycle
            }
            if !visited.contains(next) && has_cycle_dfs(next, adj, visited, in_stack) {
                return true;
            }
        }
    }

    in_stack.remove(node);
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> Vec<Course> {
        let maths = Course::new("Maths");
        let physics = Course::new("Physics").with_prerequisite(maths.clone());
        let mechanics = Course::new("Mechanics")
            .with_prerequisite(maths.clone())
            .with_prerequisite(physics.clone());
        vec![maths, physics, mechanics]
    }

    #[test]
    fn test_valid_catalog() {
        assert!(validate_catalog(&sample_catalog()).is_ok());
    }

    #[test]
    fn test_empty_catalog() {
        assert!(validate_catalog(&[]).is_ok());
    }

    #[test]
    fn test_duplicate_course_name() {
        let catalog = vec![Course::new("Maths"), Course::new("Maths")];

        let errors = validate_catalog(&catalog).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateCourse));
    }

    #[test]
    fn test_unknown_prerequisite() {
        let catalog = vec![Course::new("Physics").with_prerequisite(Course::new("Maths"))];

        let errors = validate_catalog(&catalog).unwrap_err();
        assert!(errors.iter().any(
            |e| e.kind == ValidationErrorKind::UnknownPrerequisite && e.message.contains("Maths")
        ));
    }

    #[test]
    fn test_self_prerequisite() {
        let catalog = vec![Course::new("Maths").with_prerequisite(Course::new("Maths"))];

        let errors = validate_catalog(&catalog).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::SelfPrerequisite));
        // A self-loop is not double-reported as a cycle
        assert!(!errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::CyclicPrerequisite));
    }

    #[test]
    fn test_cyclic_prerequisites() {
        // A requires C, B requires A, C requires B → cycle
        let catalog = vec![
            Course::new("A").with_prerequisite(Course::new("C")),
            Course::new("B").with_prerequisite(Course::new("A")),
            Course::new("C").with_prerequisite(Course::new("B")),
        ];

        let errors = validate_catalog(&catalog).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::CyclicPrerequisite));
    }

    #[test]
    fn test_no_cycle_in_chain() {
        // A → B → C linear chain
        let catalog = vec![
            Course::new("A"),
            Course::new("B").with_prerequisite(Course::new("A")),
            Course::new("C").with_prerequisite(Course::new("B")),
        ];

        assert!(validate_catalog(&catalog).is_ok());
    }

    #[test]
    fn test_diamond_is_not_a_cycle() {
        // A → B, A → C, B → D, C → D: converging paths, no cycle
        let catalog = vec![
            Course::new("A"),
            Course::new("B").with_prerequisite(Course::new("A")),
            Course::new("C").with_prerequisite(Course::new("A")),
            Course::new("D")
                .with_prerequisite(Course::new("B"))
                .with_prerequisite(Course::new("C")),
        ];

        assert!(validate_catalog(&catalog).is_ok());
    }

    #[test]
    fn test_multiple_errors() {
        let catalog = vec![
            Course::new("Maths"),
            Course::new("Maths"),
            Course::new("Physics").with_prerequisite(Course::new("Astronomy")),
        ];

        let errors = validate_catalog(&catalog).unwrap_err();
        assert!(errors.len() >= 2);
    }
}
