//! Slot allocation.
//!
//! Provides the randomized greedy allocator and its result types.
//!
//! # Algorithm
//!
//! `GreedyScheduler` places each course's weekly occurrences with
//! bounded random (day, period) draws against a shared occupancy index.
//! It is best-effort: under-met frequency targets come back as
//! fill-count shortfalls for the caller to inspect, never as errors.

mod greedy;
mod outcome;

pub use greedy::{GreedyScheduler, ScheduleRequest};
pub use outcome::{CourseFill, ScheduleOutcome};
