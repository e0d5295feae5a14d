//! Room model.
//!
//! Rooms are the physical side of a slot assignment. The type
//! classification separates general classrooms from laboratories so
//! the scheduler can steer lab-requiring courses toward suitable rooms.

use serde::{Deserialize, Serialize};

/// A room that can host a teaching session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    /// Unique room identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Seating capacity.
    pub capacity: u32,
    /// Room classification.
    pub room_type: RoomType,
}

/// Room type classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomType {
    /// General-purpose classroom.
    Classroom,
    /// Laboratory (computer lab, science lab).
    Laboratory,
    /// Domain-specific type (gym, auditorium, ...).
    Custom(String),
}

impl Room {
    /// Creates a new classroom.
    pub fn new(id: impl Into<String>, room_type: RoomType) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            capacity: 0,
            room_type,
        }
    }

    /// Creates a general classroom.
    pub fn classroom(id: impl Into<String>) -> Self {
        Self::new(id, RoomType::Classroom)
    }

    /// Creates a laboratory.
    pub fn laboratory(id: impl Into<String>) -> Self {
        Self::new(id, RoomType::Laboratory)
    }

    /// Sets the room name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the seating capacity.
    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Whether this room is suitable for lab sessions.
    ///
    /// True for `Laboratory` rooms, and for any room whose name signals
    /// a lab (catalogs imported from external systems often carry the
    /// distinction only in the name).
    pub fn is_lab(&self) -> bool {
        self.room_type == RoomType::Laboratory || self.name.to_lowercase().contains("lab")
    }
}
