//! Teacher model.
//!
//! Teachers carry the subjects they can teach (free-text names matched
//! against course names by a [`QualificationRule`]) and a weekly slot
//! capacity. The scheduled hour count is derived from assignments,
//! never stored on the entity.
//!
//! [`QualificationRule`]: crate::qualification::QualificationRule

use serde::{Deserialize, Serialize};

/// A teacher available for slot assignments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Teacher {
    /// Unique teacher identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Free-text names of subjects this teacher can teach.
    pub subjects: Vec<String>,
    /// Maximum weekly slot count.
    pub weekly_capacity: u32,
}

impl Teacher {
    /// Creates a new teacher.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            subjects: Vec::new(),
            weekly_capacity: 0,
        }
    }

    /// Sets the teacher name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Adds a taught subject.
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subjects.push(subject.into());
        self
    }

    /// Sets the weekly slot capacity.
    pub fn with_capacity(mut self, weekly_capacity: u32) -> Self {
        self.weekly_capacity = weekly_capacity;
        self
    }

    /// Whether this teacher lists the given subject (case-insensitive).
    pub fn teaches(&self, subject: &str) -> bool {
        self.subjects
            .iter()
            .any(|s| s.eq_ignore_ascii_case(subject))
    }
}
