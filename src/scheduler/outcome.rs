//! Scheduling result types.
//!
//! The scheduler never fails on under-met frequency targets; it reports
//! the gap per (class, course) instead. Callers inspect fill counts to
//! decide whether to accept a partial schedule or retry generation.

use serde::{Deserialize, Serialize};

use crate::models::Assignment;

/// Occurrences placed vs. target for one (class, course) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseFill {
    /// Class the course was scheduled for.
    pub class_id: String,
    /// Scheduled course.
    pub course_id: String,
    /// Target weekly occurrence count.
    pub target: u32,
    /// Occurrences actually placed.
    pub placed: u32,
}

impl CourseFill {
    /// Gap between target and placed occurrences.
    #[inline]
    pub fn shortfall(&self) -> u32 {
        self.target.saturating_sub(self.placed)
    }

    /// Whether the weekly frequency target was reached.
    #[inline]
    pub fn is_filled(&self) -> bool {
        self.placed >= self.target
    }
}

/// Result of a scheduling pass: the produced assignment set plus the
/// per-course fill report.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScheduleOutcome {
    /// Slot assignments created by this pass.
    pub assignments: Vec<Assignment>,
    /// Fill counts, one entry per scheduled (class, course) pair,
    /// in scheduling order.
    pub fill: Vec<CourseFill>,
}

impl ScheduleOutcome {
    /// Creates an empty outcome (degenerate-input result).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether no slot was placed.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Total occurrences placed across all courses.
    pub fn placed_total(&self) -> u32 {
        self.fill.iter().map(|f| f.placed).sum()
    }

    /// Total occurrence shortfall across all courses.
    pub fn shortfall_total(&self) -> u32 {
        self.fill.iter().map(|f| f.shortfall()).sum()
    }

    /// Fill entry for a specific (class, course) pair.
    pub fn fill_for(&self, class_id: &str, course_id: &str) -> Option<&CourseFill> {
        self.fill
            .iter()
            .find(|f| f.class_id == class_id && f.course_id == course_id)
    }
}
