//! Class (student group) model.
//!
//! A class is the group of students taking a fixed course list, and the
//! unit that cannot attend two sessions at once. Courses are scheduled
//! in list order.

use serde::{Deserialize, Serialize};

use super::Course;

/// A student group with its fixed course list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassGroup {
    /// Unique class identifier.
    pub id: String,
    /// Human-readable name (e.g. "9-B").
    pub name: String,
    /// Courses this class takes, in scheduling order.
    pub courses: Vec<Course>,
}

impl ClassGroup {
    /// Creates a new class with an empty course list.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            courses: Vec::new(),
        }
    }

    /// Sets the class name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Adds a course to the class's list.
    pub fn with_course(mut self, course: Course) -> Self {
        self.courses.push(course);
        self
    }

    /// Total weekly slot demand across all courses.
    pub fn weekly_slot_demand(&self) -> u32 {
        self.courses.iter().map(|c| c.weekly_slots()).sum()
    }

    /// Looks up a course by ID.
    pub fn course(&self, course_id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == course_id)
    }
}
