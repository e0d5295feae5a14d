//! Course model.
//!
//! A course is a recurring teaching subject with a target number of
//! weekly occurrences. `duration_periods > 1` marks a block course
//! whose single occurrence spans contiguous periods (a double period).

use serde::{Deserialize, Serialize};

/// A course taught to a class.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    /// Unique course identifier.
    pub id: String,
    /// Human-readable name (matched against teacher subjects).
    pub name: String,
    /// Short course code (e.g. "MATH101").
    pub code: String,
    /// Target number of weekly occurrences. Best-effort, not a hard
    /// guarantee; shortfalls are reported via fill counts.
    pub weekly_frequency: u32,
    /// Contiguous periods one occurrence spans (1 = single period).
    pub duration_periods: u32,
}

impl Course {
    /// Creates a new single-period course with weekly frequency 1.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            code: String::new(),
            weekly_frequency: 1,
            duration_periods: 1,
        }
    }

    /// Sets the course code.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Sets the target weekly occurrence count.
    pub fn with_frequency(mut self, weekly_frequency: u32) -> Self {
        self.weekly_frequency = weekly_frequency;
        self
    }

    /// Sets the block length in contiguous periods.
    pub fn with_duration(mut self, duration_periods: u32) -> Self {
        self.duration_periods = duration_periods;
        self
    }

    /// Whether one occurrence spans more than one period.
    #[inline]
    pub fn is_block(&self) -> bool {
        self.duration_periods > 1
    }

    /// Total weekly slot demand (occurrences × block length).
    pub fn weekly_slots(&self) -> u32 {
        self.weekly_frequency * self.duration_periods
    }
}
