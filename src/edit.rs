//! Single-slot change validation.
//!
//! Answers "would this manual edit create a conflict?" for a proposed
//! teacher and/or room change on one slot, without re-running the
//! scheduler. The check has no side effects; the caller applies an
//! accepted edit itself (an `occupy`/`release` pair on its index).

use thiserror::Error;

use crate::availability::AvailabilityIndex;
use crate::models::Assignment;

/// Failure local to a change-validation call.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChangeError {
    /// The edited slot is not in the supplied assignment set.
    #[error("Slot not found: {0}")]
    SlotNotFound(String),
}

/// Whether retargeting `slot_id` to the proposed teacher and/or room
/// would double-book either at the slot's (day, period).
///
/// The edited slot itself is excluded from the occupancy check, so a
/// no-op proposal (the teacher or room already bound to that exact
/// slot) reports no conflict. `true` means the edit conflicts with a
/// *different* assignment and should be rejected.
pub fn validate_change(
    assignments: &[Assignment],
    slot_id: &str,
    new_teacher: Option<&str>,
    new_room: Option<&str>,
) -> Result<bool, ChangeError> {
    let target = assignments
        .iter()
        .find(|a| a.id == slot_id)
        .ok_or_else(|| ChangeError::SlotNotFound(slot_id.to_string()))?;

    let index =
        AvailabilityIndex::from_assignments(assignments.iter().filter(|a| a.id != slot_id));

    let teacher_conflict = new_teacher
        .map_or(false, |t| !index.teacher_free(t, target.day, target.period_index));
    let room_conflict =
        new_room.map_or(false, |r| !index.room_free(r, target.day, target.period_index));

    Ok(teacher_conflict || room_conflict)
}
