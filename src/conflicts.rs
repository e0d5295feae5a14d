//! Conflict detection over an assignment set.
//!
//! Re-derives the three occupancy invariants (teacher, room, class ×
//! day × period) independently of how the assignments were produced,
//! so externally edited sets are auditable too. Detection is pure:
//! a conflict is the detector's normal output, never an error.
//!
//! Any double-booking is a hard violation; the report's overall
//! severity escalates with the conflict count.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{Assignment, Day};

/// Kind of occupancy violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConflictKind {
    /// One teacher in two places at the same (day, period).
    TeacherDoubleBooked,
    /// One room hosting two sessions at the same (day, period).
    RoomDoubleBooked,
    /// One class attending two sessions at the same (day, period).
    ClassDoubleBooked,
}

/// Severity scale, also used for the report-level bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    None,
    Low,
    Medium,
    High,
}

/// One double-booking instance: an occupancy key shared by two or more
/// assignments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conflict {
    /// Violation kind.
    pub kind: ConflictKind,
    /// The double-booked entity (teacher, room, or class ID).
    pub entity_id: String,
    /// Day of the shared key.
    pub day: Day,
    /// Period of the shared key.
    pub period_index: u32,
    /// IDs of every assignment sharing the key.
    pub slot_ids: Vec<String>,
    /// Always [`Severity::High`]: occupancy violations are never soft.
    pub severity: Severity,
    /// Human-readable description.
    pub description: String,
    /// Suggested resolution actions.
    pub suggestions: Vec<String>,
}

impl Conflict {
    fn new(
        kind: ConflictKind,
        entity_id: &str,
        day: Day,
        period_index: u32,
        slot_ids: Vec<String>,
    ) -> Self {
        let (noun, suggestions) = match kind {
            ConflictKind::TeacherDoubleBooked => (
                "Teacher",
                vec![
                    "Reschedule one of the sessions to a free period".to_string(),
                    "Assign a substitute teacher to one session".to_string(),
                ],
            ),
            ConflictKind::RoomDoubleBooked => (
                "Room",
                vec![
                    "Move one session to another free room".to_string(),
                    "Reschedule one of the sessions to a free period".to_string(),
                ],
            ),
            ConflictKind::ClassDoubleBooked => (
                "Class",
                vec!["Reschedule one of the class's sessions".to_string()],
            ),
        };
        let description = format!(
            "{noun} {entity_id} is booked for {} sessions on {day}, period {period_index}",
            slot_ids.len()
        );
        Self {
            kind,
            entity_id: entity_id.to_string(),
            day,
            period_index,
            slot_ids,
            severity: Severity::High,
            description,
            suggestions,
        }
    }
}

/// Result of a conflict audit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictReport {
    /// All detected conflicts, in deterministic order (teacher, room,
    /// then class violations; each sorted by entity, day, period).
    pub conflicts: Vec<Conflict>,
    /// Number of conflict instances.
    pub total_conflicts: usize,
    /// Report-level severity bucket.
    pub overall_severity: Severity,
}

impl ConflictReport {
    /// Whether any conflict was found.
    pub fn has_conflicts(&self) -> bool {
        self.total_conflicts > 0
    }
}

/// Audits an assignment set for double-bookings.
///
/// Groups assignments by each of the three occupancy keys; every group
/// with more than one member is one conflict instance. Assignments with
/// an empty entity ID are skipped from that conflict class only
/// (malformed input is not fatal).
pub fn detect_conflicts(assignments: &[Assignment]) -> ConflictReport {
    let mut conflicts = Vec::new();

    collect(
        assignments,
        ConflictKind::TeacherDoubleBooked,
        |a| &a.teacher_id,
        &mut conflicts,
    );
    collect(
        assignments,
        ConflictKind::RoomDoubleBooked,
        |a| &a.room_id,
        &mut conflicts,
    );
    collect(
        assignments,
        ConflictKind::ClassDoubleBooked,
        |a| &a.class_id,
        &mut conflicts,
    );

    let total_conflicts = conflicts.len();
    ConflictReport {
        conflicts,
        total_conflicts,
        overall_severity: overall_severity(total_conflicts),
    }
}

fn collect<'a, F>(
    assignments: &'a [Assignment],
    kind: ConflictKind,
    entity: F,
    out: &mut Vec<Conflict>,
) where
    F: Fn(&'a Assignment) -> &'a str,
{
    // BTreeMap keeps group order deterministic across runs.
    let mut groups: BTreeMap<(&str, Day, u32), Vec<&Assignment>> = BTreeMap::new();
    for a in assignments {
        let id = entity(a);
        if id.is_empty() {
            continue;
        }
        groups
            .entry((id, a.day, a.period_index))
            .or_default()
            .push(a);
    }

    for ((id, day, period_index), members) in groups {
        if members.len() > 1 {
            let slot_ids = members.iter().map(|a| a.id.clone()).collect();
            out.push(Conflict::new(kind, id, day, period_index, slot_ids));
        }
    }
}

fn overall_severity(total: usize) -> Severity {
    match total {
        0 => Severity::None,
        1..=4 => Severity::Low,
        5..=14 => Severity::Medium,
        _ => Severity::High,
    }
}
