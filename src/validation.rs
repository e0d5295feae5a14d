//! Catalog validation.
//!
//! Checks structural integrity of the catalog snapshots before a
//! scheduling run. Detects:
//! - Duplicate IDs (teachers, rooms, periods, classes, courses)
//! - Duplicate period indices
//! - Classes with no courses
//! - Courses with a zero frequency or duration, or blocks longer than
//!   the daily grid
//!
//! The outer CRUD layer owns richer data validation; this covers only
//! what the scheduling core must not trust.

use std::collections::HashSet;

use crate::models::{ClassGroup, Period, Room, Teacher};

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
    /// Two entities share the same ID.
    DuplicateId,
    /// Two periods share the same ordinal index.
    DuplicatePeriodIndex,
    /// A class has no courses.
    EmptyClass,
    /// A course requests zero weekly occurrences.
    InvalidFrequency,
    /// A course duration is zero or cannot fit the daily grid.
    InvalidDuration,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the catalog snapshots for a scheduling run.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_catalogs(
    classes: &[ClassGroup],
    teachers: &[Teacher],
    rooms: &[Room],
    periods: &[Period],
) -> ValidationResult {
    let mut errors = Vec::new();

    let mut teacher_ids = HashSet::new();
    for t in teachers {
        if !teacher_ids.insert(t.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate teacher ID: {}", t.id),
            ));
        }
    }

    let mut room_ids = HashSet::new();
    for r in rooms {
        if !room_ids.insert(r.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate room ID: {}", r.id),
            ));
        }
    }

    let mut period_ids = HashSet::new();
    let mut period_indices = HashSet::new();
    for p in periods {
        if !period_ids.insert(p.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate period ID: {}", p.id),
            ));
        }
        if !period_indices.insert(p.index) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicatePeriodIndex,
                format!("Duplicate period index: {}", p.index),
            ));
        }
    }

    let mut class_ids = HashSet::new();
    for class in classes {
        if !class_ids.insert(class.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate class ID: {}", class.id),
            ));
        }

        if class.courses.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyClass,
                format!("Class '{}' has no courses", class.id),
            ));
        }

        let mut course_ids = HashSet::new();
        for course in &class.courses {
            if !course_ids.insert(course.id.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::DuplicateId,
                    format!("Duplicate course ID '{}' in class '{}'", course.id, class.id),
                ));
            }
            if course.weekly_frequency == 0 {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidFrequency,
                    format!("Course '{}' requests zero weekly occurrences", course.id),
                ));
            }
            if course.duration_periods == 0 {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidDuration,
                    format!("Course '{}' has a zero-period duration", course.id),
                ));
            } else if course.duration_periods as usize > periods.len() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidDuration,
                    format!(
                        "Course '{}' spans {} periods but the grid has {}",
                        course.id,
                        course.duration_periods,
                        periods.len()
                    ),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
