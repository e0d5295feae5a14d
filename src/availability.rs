//! Slot occupancy index.
//!
//! Tracks which (teacher, day, period), (room, day, period), and
//! (class, day, period) triples are already occupied, giving the
//! scheduler and change validator O(1) membership tests. The index is
//! an explicit owned structure; callers serialize mutation (one writer
//! at a time) and `occupy`/`release` must be called symmetrically so
//! no phantom occupancy leaks.

use std::collections::{HashMap, HashSet};

use crate::models::{Assignment, Day};

type OccupancyKey = (String, Day, u32);

/// Occupancy state for an in-progress or existing assignment set.
#[derive(Debug, Clone, Default)]
pub struct AvailabilityIndex {
    teachers: HashSet<OccupancyKey>,
    rooms: HashSet<OccupancyKey>,
    classes: HashSet<OccupancyKey>,
    /// Scheduled slot count per teacher, for capacity checks and
    /// utilization-biased selection.
    teacher_loads: HashMap<String, u32>,
}

impl AvailabilityIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an index over an existing assignment set.
    pub fn from_assignments<'a, I>(assignments: I) -> Self
    where
        I: IntoIterator<Item = &'a Assignment>,
    {
        let mut index = Self::new();
        for a in assignments {
            index.occupy(a);
        }
        index
    }

    /// Whether the teacher is free at (day, period).
    pub fn teacher_free(&self, teacher_id: &str, day: Day, period_index: u32) -> bool {
        !self
            .teachers
            .contains(&(teacher_id.to_string(), day, period_index))
    }

    /// Whether the room is free at (day, period).
    pub fn room_free(&self, room_id: &str, day: Day, period_index: u32) -> bool {
        !self
            .rooms
            .contains(&(room_id.to_string(), day, period_index))
    }

    /// Whether the class is free at (day, period).
    pub fn class_free(&self, class_id: &str, day: Day, period_index: u32) -> bool {
        !self
            .classes
            .contains(&(class_id.to_string(), day, period_index))
    }

    /// Composite test: true iff none of the given occupancy keys are
    /// present. `None` for teacher or room skips that dimension.
    pub fn is_free(
        &self,
        day: Day,
        period_index: u32,
        teacher_id: Option<&str>,
        room_id: Option<&str>,
        class_id: &str,
    ) -> bool {
        teacher_id.map_or(true, |t| self.teacher_free(t, day, period_index))
            && room_id.map_or(true, |r| self.room_free(r, day, period_index))
            && self.class_free(class_id, day, period_index)
    }

    /// Marks an assignment's three occupancy keys as taken.
    pub fn occupy(&mut self, assignment: &Assignment) {
        let (day, period) = (assignment.day, assignment.period_index);
        self.teachers
            .insert((assignment.teacher_id.clone(), day, period));
        self.rooms.insert((assignment.room_id.clone(), day, period));
        self.classes
            .insert((assignment.class_id.clone(), day, period));
        *self
            .teacher_loads
            .entry(assignment.teacher_id.clone())
            .or_insert(0) += 1;
    }

    /// Releases an assignment's occupancy keys.
    ///
    /// Must mirror a prior `occupy` of the same assignment.
    pub fn release(&mut self, assignment: &Assignment) {
        let (day, period) = (assignment.day, assignment.period_index);
        self.teachers
            .remove(&(assignment.teacher_id.clone(), day, period));
        self.rooms.remove(&(assignment.room_id.clone(), day, period));
        self.classes
            .remove(&(assignment.class_id.clone(), day, period));
        if let Some(load) = self.teacher_loads.get_mut(&assignment.teacher_id) {
            *load = load.saturating_sub(1);
        }
    }

    /// Current scheduled slot count for a teacher.
    pub fn teacher_load(&self, teacher_id: &str) -> u32 {
        self.teacher_loads.get(teacher_id).copied().unwrap_or(0)
    }

    /// Total occupied slot count.
    pub fn occupied_count(&self) -> usize {
        self.classes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Assignment {
        Assignment::new("9B", "C1", "T1", "R1", Day::Monday, 1)
    }

    #[test]
    fn test_occupy_and_release_symmetry() {
        let mut index = AvailabilityIndex::new();
        let a = sample();

        assert!(index.is_free(Day::Monday, 1, Some("T1"), Some("R1"), "9B"));
        index.occupy(&a);
        assert!(!index.teacher_free("T1", Day::Monday, 1));
        assert!(!index.room_free("R1", Day::Monday, 1));
        assert!(!index.class_free("9B", Day::Monday, 1));
        assert_eq!(index.teacher_load("T1"), 1);

        index.release(&a);
        assert!(index.is_free(Day::Monday, 1, Some("T1"), Some("R1"), "9B"));
        assert_eq!(index.teacher_load("T1"), 0);
        assert_eq!(index.occupied_count(), 0);
    }

    #[test]
    fn test_dimensions_independent() {
        let mut index = AvailabilityIndex::new();
        index.occupy(&sample());

        // Same teacher, different period
        assert!(index.teacher_free("T1", Day::Monday, 2));
        // Same period, different teacher
        assert!(index.teacher_free("T2", Day::Monday, 1));
        // Same period, different day
        assert!(index.teacher_free("T1", Day::Tuesday, 1));
    }

    #[test]
    fn test_optional_dimensions_skipped() {
        let mut index = AvailabilityIndex::new();
        index.occupy(&sample());

        // Teacher busy, but the query only asks about the room and class
        assert!(!index.is_free(Day::Monday, 1, Some("T1"), None, "9A"));
        assert!(index.is_free(Day::Monday, 1, None, Some("R2"), "9A"));
    }

    #[test]
    fn test_from_assignments() {
        let a = sample();
        let b = Assignment::new("9A", "C2", "T1", "R2", Day::Tuesday, 3);
        let index = AvailabilityIndex::from_assignments([&a, &b]);

        assert_eq!(index.occupied_count(), 2);
        assert_eq!(index.teacher_load("T1"), 2);
        assert!(!index.room_free("R2", Day::Tuesday, 3));
    }

    #[test]
    fn test_release_unknown_is_harmless() {
        let mut index = AvailabilityIndex::new();
        index.release(&sample());
        assert_eq!(index.teacher_load("T1"), 0);
        assert_eq!(index.occupied_count(), 0);
    }
}
