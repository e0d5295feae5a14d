//! Slot assignment and timetable models.
//!
//! An assignment binds one (class, course) pair to a (day, period)
//! coordinate with exactly one teacher and one room. A multi-period
//! occurrence is stored as a head slot plus continuation slots that
//! reference the head via `continuation_of`.
//!
//! `Timetable` is the container for a complete assignment set, with the
//! query helpers the conflict detector, workload analyzer, and change
//! validator work over.

use serde::{Deserialize, Serialize};

use super::Day;

/// One occupied slot in the weekly grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Slot identifier, deterministic per (class, course, day, period).
    pub id: String,
    /// Weekday of the slot.
    pub day: Day,
    /// Ordinal period index within the day.
    pub period_index: u32,
    /// Class attending the session.
    pub class_id: String,
    /// Course being taught.
    pub course_id: String,
    /// Teacher bound to the slot.
    pub teacher_id: String,
    /// Room bound to the slot.
    pub room_id: String,
    /// For continuation slots of a multi-period block: the head slot's ID.
    pub continuation_of: Option<String>,
}

impl Assignment {
    /// Creates a head assignment (first or only period of an occurrence).
    pub fn new(
        class_id: impl Into<String>,
        course_id: impl Into<String>,
        teacher_id: impl Into<String>,
        room_id: impl Into<String>,
        day: Day,
        period_index: u32,
    ) -> Self {
        let class_id = class_id.into();
        let course_id = course_id.into();
        Self {
            id: Self::slot_id(&class_id, &course_id, day, period_index),
            day,
            period_index,
            class_id,
            course_id,
            teacher_id: teacher_id.into(),
            room_id: room_id.into(),
            continuation_of: None,
        }
    }

    /// Marks this assignment as a continuation of the given head slot.
    pub fn as_continuation_of(mut self, head_id: impl Into<String>) -> Self {
        self.continuation_of = Some(head_id.into());
        self
    }

    /// Deterministic slot identifier.
    pub fn slot_id(class_id: &str, course_id: &str, day: Day, period_index: u32) -> String {
        format!("{class_id}:{course_id}:{}:{period_index}", day.code())
    }

    /// Whether this slot is the head of its occurrence.
    #[inline]
    pub fn is_head(&self) -> bool {
        self.continuation_of.is_none()
    }
}

/// A complete assignment set for a weekly timetable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Timetable {
    /// All slot assignments.
    pub assignments: Vec<Assignment>,
}

impl Timetable {
    /// Creates an empty timetable.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a timetable from an existing assignment set.
    pub fn from_assignments(assignments: Vec<Assignment>) -> Self {
        Self { assignments }
    }

    /// Adds an assignment.
    pub fn add(&mut self, assignment: Assignment) {
        self.assignments.push(assignment);
    }

    /// Number of occupied slots.
    pub fn assignment_count(&self) -> usize {
        self.assignments.len()
    }

    /// Finds a slot by ID.
    pub fn slot(&self, slot_id: &str) -> Option<&Assignment> {
        self.assignments.iter().find(|a| a.id == slot_id)
    }

    /// All slots bound to a teacher.
    pub fn for_teacher(&self, teacher_id: &str) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.teacher_id == teacher_id)
            .collect()
    }

    /// All slots attended by a class.
    pub fn for_class(&self, class_id: &str) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.class_id == class_id)
            .collect()
    }

    /// All slots held in a room.
    pub fn for_room(&self, room_id: &str) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.room_id == room_id)
            .collect()
    }

    /// Replaces a class's entire assignment set.
    ///
    /// Regeneration is wholesale per class: every existing slot of the
    /// class is removed before the new ones are appended.
    pub fn replace_class(&mut self, class_id: &str, new_assignments: Vec<Assignment>) {
        self.assignments.retain(|a| a.class_id != class_id);
        self.assignments.extend(new_assignments);
    }
}
