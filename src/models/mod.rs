//! Timetabling domain models.
//!
//! Core data types for the weekly scheduling grid: the read-only
//! catalogs (teachers, rooms, courses, classes, periods) supplied by
//! the outer CRUD layer, and the mutable output type (`Assignment`)
//! produced by the scheduler.
//!
//! # Catalog vs. output
//!
//! | Read-only input | Mutable output |
//! |-----------------|----------------|
//! | `Teacher`, `Room`, `Course`, `ClassGroup`, `Period`, `Day` | `Assignment`, `Timetable` |
//!
//! Catalogs are externally fetched snapshots; they are passed as
//! explicit parameters to every core function, never held as shared
//! state.

mod assignment;
mod class_group;
mod course;
mod day;
mod period;
mod room;
mod teacher;

pub use assignment::{Assignment, Timetable};
pub use class_group::ClassGroup;
pub use course::Course;
pub use day::Day;
pub use period::Period;
pub use room::{Room, RoomType};
pub use teacher::Teacher;
