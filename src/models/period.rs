//! Teaching period model.
//!
//! A period is one discrete time slot within a day. The external grid
//! (bell schedule) is the source of truth; the core only needs an
//! identifier and an ordinal index. Ordering by `index` defines
//! adjacency for multi-period session blocks.

use serde::{Deserialize, Serialize};

/// One ordinal time slot within a day (e.g. 1st period .. 8th period).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    /// Unique period identifier.
    pub id: String,
    /// Ordinal position within the day. Consecutive indices are
    /// adjacent in time.
    pub index: u32,
}

impl Period {
    /// Creates a new period.
    pub fn new(id: impl Into<String>, index: u32) -> Self {
        Self {
            id: id.into(),
            index,
        }
    }

    /// Builds a daily grid of `count` periods indexed `1..=count`.
    pub fn daily_grid(count: u32) -> Vec<Period> {
        (1..=count).map(|i| Period::new(format!("P{i}"), i)).collect()
    }
}
