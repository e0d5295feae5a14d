//! Teacher workload analysis.
//!
//! Computes scheduled-hours-vs-capacity utilization from an assignment
//! set (one slot = one hour by convention), classifies the load, and
//! breaks it down per day and per course. Feeds the scheduler's
//! utilization-biased teacher selection and stands alone for reporting.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total weekly hours | Slot count for the teacher |
//! | Workload percentage | hours ÷ weekly capacity × 100 |
//! | Gaps | Idle periods between two scheduled periods of a day |
//! | Longest run | Longest consecutive-period stretch in a day |

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{Assignment, Day, Teacher};

/// Load classification, first matching threshold wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkloadStatus {
    /// Above 120% of capacity.
    SeverelyOverloaded,
    /// Above 100% of capacity.
    Overloaded,
    /// Below 80% of capacity.
    Underutilized,
    /// Between 80% and 100% of capacity.
    Optimal,
}

/// One weekday's load profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayLoad {
    /// The weekday.
    pub day: Day,
    /// Scheduled hours on this day.
    pub hours: u32,
    /// Idle periods strictly between the first and last scheduled
    /// period of the day.
    pub gaps: u32,
    /// Longest consecutive-hours run.
    pub longest_run: u32,
}

/// Advisory recommendation derived from the workload status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Suggested action.
    pub message: String,
    /// Placeholder estimate of the balance improvement (percent).
    pub expected_improvement_pct: u32,
}

/// A teacher's workload profile over one weekly assignment set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkloadAnalysis {
    /// Analyzed teacher.
    pub teacher_id: String,
    /// Scheduled slot count (one slot = one hour).
    pub total_weekly_hours: u32,
    /// Declared weekly capacity.
    pub weekly_capacity: u32,
    /// hours ÷ capacity × 100. Zero-capacity teachers report 0 here
    /// and classify through `status` instead.
    pub workload_percentage: f64,
    /// Load classification.
    pub status: WorkloadStatus,
    /// Per-weekday breakdown, in grid order.
    pub daily: Vec<DayLoad>,
    /// Weekly hours contributed by each assigned course.
    pub course_hours: HashMap<String, u32>,
    /// Advisory recommendations for the status.
    pub recommendations: Vec<Recommendation>,
}

/// Analyzes one teacher's workload over an assignment set.
pub fn analyze_workload(teacher: &Teacher, assignments: &[Assignment]) -> WorkloadAnalysis {
    let own: Vec<&Assignment> = assignments
        .iter()
        .filter(|a| a.teacher_id == teacher.id)
        .collect();
    let total_weekly_hours = own.len() as u32;

    let workload_percentage = if teacher.weekly_capacity == 0 {
        0.0
    } else {
        total_weekly_hours as f64 * 100.0 / teacher.weekly_capacity as f64
    };

    let status = if teacher.weekly_capacity == 0 {
        // No declared capacity: any scheduled hour is an overload.
        if total_weekly_hours > 0 {
            WorkloadStatus::SeverelyOverloaded
        } else {
            WorkloadStatus::Underutilized
        }
    } else {
        classify(workload_percentage)
    };

    let daily = Day::WEEKDAYS
        .iter()
        .map(|&day| day_load(day, &own))
        .collect();

    let mut course_hours: HashMap<String, u32> = HashMap::new();
    for a in &own {
        *course_hours.entry(a.course_id.clone()).or_insert(0) += 1;
    }

    WorkloadAnalysis {
        teacher_id: teacher.id.clone(),
        total_weekly_hours,
        weekly_capacity: teacher.weekly_capacity,
        workload_percentage,
        status,
        daily,
        course_hours,
        recommendations: recommendations(status),
    }
}

fn classify(percentage: f64) -> WorkloadStatus {
    if percentage > 120.0 {
        WorkloadStatus::SeverelyOverloaded
    } else if percentage > 100.0 {
        WorkloadStatus::Overloaded
    } else if percentage < 80.0 {
        WorkloadStatus::Underutilized
    } else {
        WorkloadStatus::Optimal
    }
}

fn day_load(day: Day, own: &[&Assignment]) -> DayLoad {
    let mut periods: Vec<u32> = own
        .iter()
        .filter(|a| a.day == day)
        .map(|a| a.period_index)
        .collect();
    periods.sort_unstable();
    periods.dedup();

    let hours = periods.len() as u32;
    let (gaps, longest_run) = if periods.is_empty() {
        (0, 0)
    } else {
        let span = periods[periods.len() - 1] - periods[0] + 1;
        let gaps = span - hours;

        let mut longest = 1u32;
        let mut run = 1u32;
        for pair in periods.windows(2) {
            if pair[1] == pair[0] + 1 {
                run += 1;
                longest = longest.max(run);
            } else {
                run = 1;
            }
        }
        (gaps, longest)
    };

    DayLoad {
        day,
        hours,
        gaps,
        longest_run,
    }
}

fn recommendations(status: WorkloadStatus) -> Vec<Recommendation> {
    match status {
        WorkloadStatus::SeverelyOverloaded => vec![Recommendation {
            message: "Reduce weekly load by reassigning courses to less utilized teachers"
                .to_string(),
            expected_improvement_pct: 20,
        }],
        WorkloadStatus::Overloaded => vec![Recommendation {
            message: "Reduce weekly load toward declared capacity".to_string(),
            expected_improvement_pct: 10,
        }],
        WorkloadStatus::Underutilized => vec![Recommendation {
            message: "Increase weekly load to make better use of available capacity"
                .to_string(),
            expected_improvement_pct: 10,
        }],
        WorkloadStatus::Optimal => vec![Recommendation {
            message: "Compact daily schedules to reduce idle gaps".to_string(),
            expected_improvement_pct: 5,
        }],
    }
}
