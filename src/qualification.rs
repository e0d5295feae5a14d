//! Teacher-to-course qualification rules.
//!
//! Subject-to-course matching is a pluggable predicate so the matching
//! strategy can be swapped without touching the scheduler. The default
//! free-text substring match mirrors how imported catalogs name
//! subjects loosely ("Math", "Mathematics", "Applied Mathematics").

use std::fmt::Debug;

use crate::models::{Course, Teacher};

/// A predicate deciding whether a teacher may take a course.
pub trait QualificationRule: Send + Sync + Debug {
    /// Rule name (e.g. "SubjectNameMatch").
    fn name(&self) -> &'static str;

    /// Whether the teacher is qualified to teach the course.
    fn qualifies(&self, teacher: &Teacher, course: &Course) -> bool;
}

/// Case-insensitive substring match in either direction between each
/// taught subject and the course name.
///
/// "Math" qualifies for "Mathematics" and "Mathematics" qualifies for
/// "Math". Fragile by nature (free-text naming), which is exactly why
/// the predicate is swappable.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubjectNameMatch;

impl QualificationRule for SubjectNameMatch {
    fn name(&self) -> &'static str {
        "SubjectNameMatch"
    }

    fn qualifies(&self, teacher: &Teacher, course: &Course) -> bool {
        let course_name = course.name.to_lowercase();
        if course_name.is_empty() {
            return false;
        }
        teacher.subjects.iter().any(|subject| {
            let subject = subject.to_lowercase();
            !subject.is_empty()
                && (subject.contains(&course_name) || course_name.contains(&subject))
        })
    }
}

/// Strict case-insensitive equality between a taught subject and the
/// course name.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactSubjectMatch;

impl QualificationRule for ExactSubjectMatch {
    fn name(&self) -> &'static str {
        "ExactSubjectMatch"
    }

    fn qualifies(&self, teacher: &Teacher, course: &Course) -> bool {
        teacher.teaches(&course.name)
    }
}
