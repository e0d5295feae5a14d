//! Weekly timetable scheduling core.
//!
//! Assigns recurring teaching sessions (a course taught to a class) to
//! a weekly grid of (day × period) slots, each bound to exactly one
//! teacher and one room, respecting hard occupancy constraints and
//! improving soft objectives such as workload balance and room
//! suitability.
//!
//! # Modules
//!
//! - **`models`**: Domain types — catalogs (`Teacher`, `Room`, `Course`,
//!   `ClassGroup`, `Period`, `Day`) and the output (`Assignment`,
//!   `Timetable`)
//! - **`availability`**: O(1) occupancy index over the three conflict
//!   dimensions (teacher, room, class)
//! - **`qualification`**: Pluggable teacher-to-course matching rules
//! - **`scheduler`**: Randomized greedy slot allocator with per-course
//!   fill reporting
//! - **`conflicts`**: Double-booking audit over any assignment set
//! - **`workload`**: Teacher utilization analysis and recommendations
//! - **`edit`**: Single-slot change validation for manual edits
//! - **`validation`**: Catalog integrity checks
//!
//! # Architecture
//!
//! This crate is the computational core of a timetabling system.
//! Catalog snapshots come in as explicit parameters, plain data
//! structures go out; persistence, HTTP, notification, and export
//! layers are outer collaborators. Scheduling is single-threaded and
//! synchronous per invocation — placement decisions depend on the
//! cumulative occupancy state, so writers serialize on one
//! `AvailabilityIndex`; read-only audits over a snapshot are safe to
//! run concurrently.

pub mod availability;
pub mod conflicts;
pub mod edit;
pub mod models;
pub mod qualification;
pub mod scheduler;
pub mod validation;
pub mod workload;
