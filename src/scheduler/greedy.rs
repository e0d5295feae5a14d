//! Randomized greedy slot allocator.
//!
//! # Algorithm
//!
//! For each course of a class, in course-list order:
//!
//! 1. Pick a teacher once per course: qualified candidates (per the
//!    configured [`QualificationRule`]) biased toward the lowest
//!    current utilization; a uniformly random teacher when none
//!    qualifies.
//! 2. Attempt up to `3 × weekly_frequency` random (day, period) draws
//!    over the five weekdays and the first six periods of the day,
//!    stopping once the weekly frequency is reached. A draw is rejected
//!    when the class or teacher key is occupied, or the teacher has
//!    reached weekly capacity.
//! 3. Pick a room free at the drawn slot, preferring labs for
//!    lab-requiring courses, otherwise uniformly at random.
//! 4. Block courses extend into the immediately following period
//!    indices with the same teacher, room, and class; an unavailable
//!    continuation rolls the whole occurrence back.
//!
//! Under-met frequency targets are reported as fill-count shortfalls,
//! never raised as errors. Bounded retries make this a best-effort
//! heuristic, not an exact solver.
//!
//! # Determinism
//!
//! Identical catalogs and an identical seed produce an identical
//! assignment set: every draw comes from the seeded generator and every
//! candidate enumeration runs over catalog `Vec`s in input order.

use std::collections::HashSet;

use log::{debug, info, trace};
use rand::rngs::SmallRng;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::{Rng, SeedableRng};

use super::{CourseFill, ScheduleOutcome};
use crate::availability::AvailabilityIndex;
use crate::models::{Assignment, ClassGroup, Course, Day, Period, Room, Teacher};
use crate::qualification::{QualificationRule, SubjectNameMatch};

/// Draw attempts per requested occurrence.
const ATTEMPTS_PER_OCCURRENCE: u32 = 3;

/// Draws are restricted to the first N periods of each day, a mild
/// earliness preference.
const MORNING_PERIOD_COUNT: usize = 6;

/// Course-name keywords that call for a lab room.
const LAB_SUBJECTS: [&str; 3] = ["computer", "science", "chemistry"];

/// Input container for one class's scheduling pass.
#[derive(Debug, Clone)]
pub struct ScheduleRequest {
    /// Class to schedule, with its course list.
    pub class_group: ClassGroup,
    /// Teacher catalog snapshot.
    pub teachers: Vec<Teacher>,
    /// Room catalog snapshot.
    pub rooms: Vec<Room>,
    /// Daily period grid.
    pub periods: Vec<Period>,
    /// Assignments already on the timetable. Entries for other classes
    /// constrain teacher and room occupancy; entries for the requested
    /// class are ignored (regeneration replaces them wholesale).
    pub existing: Vec<Assignment>,
    /// RNG seed. `None` draws a fresh seed from the OS.
    pub seed: Option<u64>,
}

impl ScheduleRequest {
    /// Creates a request over empty existing state.
    pub fn new(
        class_group: ClassGroup,
        teachers: Vec<Teacher>,
        rooms: Vec<Room>,
        periods: Vec<Period>,
    ) -> Self {
        Self {
            class_group,
            teachers,
            rooms,
            periods,
            existing: Vec::new(),
            seed: None,
        }
    }

    /// Sets the pre-existing assignment set.
    pub fn with_existing(mut self, existing: Vec<Assignment>) -> Self {
        self.existing = existing;
        self
    }

    /// Sets the RNG seed for a reproducible run.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Randomized greedy scheduler.
///
/// # Example
///
/// ```
/// use timegrid::models::{ClassGroup, Course, Period, Room, Teacher};
/// use timegrid::scheduler::{GreedyScheduler, ScheduleRequest};
///
/// let class = ClassGroup::new("9B")
///     .with_course(Course::new("C1", "Mathematics").with_frequency(3));
/// let teachers = vec![Teacher::new("T1").with_subject("Mathematics").with_capacity(10)];
/// let rooms = vec![Room::classroom("R1")];
/// let request = ScheduleRequest::new(class, teachers, rooms, Period::daily_grid(6))
///     .with_seed(7);
///
/// let outcome = GreedyScheduler::new().schedule(&request);
/// assert_eq!(outcome.fill[0].target, 3);
/// ```
#[derive(Debug)]
pub struct GreedyScheduler {
    qualification: Box<dyn QualificationRule>,
}

impl GreedyScheduler {
    /// Creates a scheduler with the default subject-name matching rule.
    pub fn new() -> Self {
        Self {
            qualification: Box::new(SubjectNameMatch),
        }
    }

    /// Swaps the teacher-qualification predicate.
    pub fn with_qualification_rule<R: QualificationRule + 'static>(mut self, rule: R) -> Self {
        self.qualification = Box::new(rule);
        self
    }

    /// Schedules one class, replacing any prior assignment set it had.
    ///
    /// Returns the new assignments for the class plus per-course fill
    /// counts. Empty catalogs (no teachers, rooms, or periods) produce
    /// an empty outcome without placement.
    pub fn schedule(&self, request: &ScheduleRequest) -> ScheduleOutcome {
        if request.teachers.is_empty() || request.rooms.is_empty() || request.periods.is_empty()
        {
            info!(
                "empty catalog (teachers={}, rooms={}, periods={}); nothing to place",
                request.teachers.len(),
                request.rooms.len(),
                request.periods.len()
            );
            return ScheduleOutcome::empty();
        }

        let mut rng = Self::make_rng(request.seed);
        // Prior slots of this class are dropped: regeneration is wholesale.
        let mut index = AvailabilityIndex::from_assignments(
            request
                .existing
                .iter()
                .filter(|a| a.class_id != request.class_group.id),
        );

        self.schedule_class(
            &mut rng,
            &mut index,
            &request.class_group,
            &request.teachers,
            &request.rooms,
            &request.periods,
        )
    }

    /// Schedules a whole timetable: every class against one shared
    /// occupancy index, in class-list order.
    pub fn schedule_all(
        &self,
        classes: &[ClassGroup],
        teachers: &[Teacher],
        rooms: &[Room],
        periods: &[Period],
        seed: Option<u64>,
    ) -> ScheduleOutcome {
        if classes.is_empty() || teachers.is_empty() || rooms.is_empty() || periods.is_empty() {
            info!("empty catalog; nothing to place");
            return ScheduleOutcome::empty();
        }

        let mut rng = Self::make_rng(seed);
        let mut index = AvailabilityIndex::new();
        let mut outcome = ScheduleOutcome::default();

        for class in classes {
            let class_outcome =
                self.schedule_class(&mut rng, &mut index, class, teachers, rooms, periods);
            outcome.assignments.extend(class_outcome.assignments);
            outcome.fill.extend(class_outcome.fill);
        }

        outcome
    }

    fn make_rng(seed: Option<u64>) -> SmallRng {
        match seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        }
    }

    fn schedule_class(
        &self,
        rng: &mut SmallRng,
        index: &mut AvailabilityIndex,
        class: &ClassGroup,
        teachers: &[Teacher],
        rooms: &[Room],
        periods: &[Period],
    ) -> ScheduleOutcome {
        info!(
            "scheduling class {} ({} courses)",
            class.id,
            class.courses.len()
        );

        // Draws come from the earliest periods of the day, in index order.
        let mut sorted: Vec<&Period> = periods.iter().collect();
        sorted.sort_by_key(|p| p.index);
        let draw_pool: Vec<&Period> =
            sorted.iter().take(MORNING_PERIOD_COUNT).copied().collect();
        // Full grid, for continuation-period existence checks.
        let grid_indices: HashSet<u32> = periods.iter().map(|p| p.index).collect();

        let mut outcome = ScheduleOutcome::default();
        for course in &class.courses {
            let (slots, fill) = self.schedule_course(
                rng,
                index,
                class,
                course,
                teachers,
                rooms,
                &draw_pool,
                &grid_indices,
            );
            outcome.assignments.extend(slots);
            outcome.fill.push(fill);
        }

        info!(
            "class {}: placed {} occurrences, shortfall {}",
            class.id,
            outcome.placed_total(),
            outcome.shortfall_total()
        );
        outcome
    }

    #[allow(clippy::too_many_arguments)]
    fn schedule_course(
        &self,
        rng: &mut SmallRng,
        index: &mut AvailabilityIndex,
        class: &ClassGroup,
        course: &Course,
        teachers: &[Teacher],
        rooms: &[Room],
        draw_pool: &[&Period],
        grid_indices: &HashSet<u32>,
    ) -> (Vec<Assignment>, CourseFill) {
        let teacher = self.select_teacher(rng, index, teachers, course);
        debug!(
            "course {} ({}) → teacher {}",
            course.id, course.name, teacher.id
        );

        let mut slots = Vec::new();
        let mut placed = 0u32;
        let max_attempts = ATTEMPTS_PER_OCCURRENCE * course.weekly_frequency;

        for attempt in 0..max_attempts {
            if placed >= course.weekly_frequency {
                break;
            }
            // The course keeps one teacher, so a full teacher stays full
            // for every later draw.
            if index.teacher_load(&teacher.id) >= teacher.weekly_capacity {
                debug!(
                    "teacher {} at capacity ({}); course {} stops at {placed}",
                    teacher.id, teacher.weekly_capacity, course.id
                );
                break;
            }

            let day = Day::WEEKDAYS[rng.random_range(0..Day::WEEKDAYS.len())];
            let period = draw_pool[rng.random_range(0..draw_pool.len())];

            if !index.class_free(&class.id, day, period.index)
                || !index.teacher_free(&teacher.id, day, period.index)
            {
                trace!(
                    "draw {attempt}: {day} p{} occupied for class {} / teacher {}",
                    period.index,
                    class.id,
                    teacher.id
                );
                continue;
            }

            let Some(room) = self.pick_room(rng, index, rooms, course, day, period.index) else {
                trace!("draw {attempt}: no free room at {day} p{}", period.index);
                continue;
            };

            let head = Assignment::new(
                &class.id,
                &course.id,
                &teacher.id,
                &room.id,
                day,
                period.index,
            );
            index.occupy(&head);

            if course.is_block() {
                match self.extend_block(index, &head, course, grid_indices) {
                    Some(block) => {
                        placed += 1;
                        slots.extend(block);
                    }
                    None => {
                        trace!(
                            "draw {attempt}: block of {} broken at {day} p{}; rolled back",
                            course.duration_periods,
                            period.index
                        );
                    }
                }
            } else {
                placed += 1;
                slots.push(head);
            }
        }

        if placed < course.weekly_frequency {
            debug!(
                "course {} under target: {placed}/{}",
                course.id, course.weekly_frequency
            );
        }

        let fill = CourseFill {
            class_id: class.id.clone(),
            course_id: course.id.clone(),
            target: course.weekly_frequency,
            placed,
        };
        (slots, fill)
    }

    /// Extends a just-placed head into its continuation periods.
    ///
    /// Returns the full block (head first) on success. On any
    /// unavailable continuation the head and every partial continuation
    /// are released and `None` is returned: block occurrences place
    /// atomically.
    fn extend_block(
        &self,
        index: &mut AvailabilityIndex,
        head: &Assignment,
        course: &Course,
        grid_indices: &HashSet<u32>,
    ) -> Option<Vec<Assignment>> {
        let mut block = vec![head.clone()];

        for offset in 1..course.duration_periods {
            let cont_index = head.period_index + offset;
            let available = grid_indices.contains(&cont_index)
                && index.is_free(
                    head.day,
                    cont_index,
                    Some(&head.teacher_id),
                    Some(&head.room_id),
                    &head.class_id,
                );
            if !available {
                for slot in &block {
                    index.release(slot);
                }
                return None;
            }

            let cont = Assignment::new(
                &head.class_id,
                &head.course_id,
                &head.teacher_id,
                &head.room_id,
                head.day,
                cont_index,
            )
            .as_continuation_of(&head.id);
            index.occupy(&cont);
            block.push(cont);
        }

        Some(block)
    }

    /// Picks the course's teacher, once per course.
    ///
    /// Qualified candidates are ordered by current utilization
    /// (scheduled count ÷ capacity) with random tie-breaking, so the
    /// least-loaded qualified teacher wins. With no qualified candidate
    /// the pick is uniformly random over the full catalog.
    fn select_teacher<'a>(
        &self,
        rng: &mut SmallRng,
        index: &AvailabilityIndex,
        teachers: &'a [Teacher],
        course: &Course,
    ) -> &'a Teacher {
        let mut qualified: Vec<&Teacher> = teachers
            .iter()
            .filter(|t| self.qualification.qualifies(t, course))
            .collect();

        if qualified.is_empty() {
            debug!(
                "no teacher qualifies for course {} ({}); random fallback",
                course.id, course.name
            );
            return teachers.choose(rng).unwrap_or(&teachers[0]);
        }

        qualified.shuffle(rng);
        qualified.sort_by(|a, b| {
            Self::utilization(index, a)
                .partial_cmp(&Self::utilization(index, b))
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        qualified[0]
    }

    fn utilization(index: &AvailabilityIndex, teacher: &Teacher) -> f64 {
        if teacher.weekly_capacity == 0 {
            return f64::MAX;
        }
        index.teacher_load(&teacher.id) as f64 / teacher.weekly_capacity as f64
    }

    /// Picks a room free at (day, period).
    ///
    /// Lab-requiring courses prefer lab rooms when one is free;
    /// otherwise the pick is uniform over all free rooms. `None` means
    /// the draw must be abandoned.
    fn pick_room<'a>(
        &self,
        rng: &mut SmallRng,
        index: &AvailabilityIndex,
        rooms: &'a [Room],
        course: &Course,
        day: Day,
        period_index: u32,
    ) -> Option<&'a Room> {
        let free: Vec<&Room> = rooms
            .iter()
            .filter(|r| index.room_free(&r.id, day, period_index))
            .collect();
        if free.is_empty() {
            return None;
        }

        if Self::needs_lab(&course.name) {
            let labs: Vec<&Room> = free.iter().copied().filter(|r| r.is_lab()).collect();
            if let Some(lab) = labs.choose(rng).copied() {
                return Some(lab);
            }
        }

        free.choose(rng).copied()
    }

    fn needs_lab(course_name: &str) -> bool {
        let name = course_name.to_lowercase();
        LAB_SUBJECTS.iter().any(|keyword| name.contains(keyword))
    }
}

impl Default for GreedyScheduler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conflicts::detect_conflicts;

    fn make_teacher(id: &str, subject: &str, capacity: u32) -> Teacher {
        Teacher::new(id)
            .with_name(format!("Teacher {id}"))
            .with_subject(subject)
            .with_capacity(capacity)
    }

    fn make_class(id: &str, courses: Vec<Course>) -> ClassGroup {
        let mut class = ClassGroup::new(id).with_name(id);
        for course in courses {
            class = class.with_course(course);
        }
        class
    }

    fn occupancy_keys(assignments: &[Assignment]) -> Vec<(String, Day, u32)> {
        assignments
            .iter()
            .map(|a| (a.teacher_id.clone(), a.day, a.period_index))
            .collect()
    }

    #[test]
    fn test_single_course_fills_target() {
        // 5 periods × 5 days, one qualified teacher with capacity 5,
        // frequency 5 → all five occurrences place.
        let class = make_class("9B", vec![Course::new("C1", "Mathematics").with_frequency(5)]);
        let request = ScheduleRequest::new(
            class,
            vec![make_teacher("T1", "Mathematics", 5)],
            vec![Room::classroom("R1")],
            Period::daily_grid(5),
        )
        .with_seed(42);

        let outcome = GreedyScheduler::new().schedule(&request);
        assert_eq!(outcome.fill[0].placed, 5);
        assert_eq!(outcome.fill[0].shortfall(), 0);
        assert_eq!(outcome.assignments.len(), 5);
        // Teacher occupancy never exceeds capacity
        assert!(outcome
            .assignments
            .iter()
            .all(|a| a.teacher_id == "T1"));
    }

    #[test]
    fn test_capacity_limits_placement() {
        // Same grid, capacity 3 → at most 3 occurrences, shortfall 2,
        // and the capped set is conflict-free.
        let class = make_class("9B", vec![Course::new("C1", "Mathematics").with_frequency(5)]);
        let request = ScheduleRequest::new(
            class,
            vec![make_teacher("T1", "Mathematics", 3)],
            vec![Room::classroom("R1")],
            Period::daily_grid(5),
        )
        .with_seed(42);

        let outcome = GreedyScheduler::new().schedule(&request);
        assert_eq!(outcome.fill[0].placed, 3);
        assert_eq!(outcome.fill[0].shortfall(), 2);

        let report = detect_conflicts(&outcome.assignments);
        assert_eq!(report.total_conflicts, 0);
    }

    #[test]
    fn test_shared_teacher_across_classes() {
        // Two classes, one qualified teacher: occupancy is shared, so
        // no (teacher, day, period) key repeats across both classes.
        let course = || Course::new("C1", "Physics").with_frequency(3);
        let classes = vec![
            make_class("9A", vec![course()]),
            make_class("9B", vec![course()]),
        ];
        let teachers = vec![make_teacher("T1", "Physics", 10)];
        let rooms = vec![Room::classroom("R1"), Room::classroom("R2")];

        let outcome = GreedyScheduler::new().schedule_all(
            &classes,
            &teachers,
            &rooms,
            &Period::daily_grid(5),
            Some(7),
        );

        let keys = occupancy_keys(&outcome.assignments);
        let unique: HashSet<_> = keys.iter().cloned().collect();
        assert_eq!(keys.len(), unique.len(), "teacher double-booked");
        assert!(outcome.assignments.len() <= 10);
        assert_eq!(detect_conflicts(&outcome.assignments).total_conflicts, 0);
    }

    #[test]
    fn test_block_rolls_back_without_contiguous_period() {
        // Grid with a single period: a double-period block can never
        // extend, so the head must be released. The second course then
        // reuses the freed slots.
        let class = make_class(
            "9B",
            vec![
                Course::new("C1", "History").with_frequency(1).with_duration(2),
                Course::new("C2", "Geography").with_frequency(1),
            ],
        );
        let request = ScheduleRequest::new(
            class,
            vec![make_teacher("T1", "History", 25).with_subject("Geography")],
            vec![Room::classroom("R1")],
            vec![Period::new("P5", 5)],
        )
        .with_seed(3);

        let outcome = GreedyScheduler::new().schedule(&request);
        assert_eq!(outcome.fill[0].placed, 0, "block must not place");
        assert_eq!(outcome.fill[0].shortfall(), 1);
        // No orphaned head: every remaining assignment belongs to C2.
        assert!(outcome.assignments.iter().all(|a| a.course_id == "C2"));
        assert_eq!(outcome.fill[1].placed, 1);
    }

    #[test]
    fn test_block_rolls_back_when_continuation_occupied() {
        // The teacher is busy at period 2 on every day (other class),
        // so a double period starting at 1 loses its continuation and a
        // head at 2 has no period 3. Nothing may remain placed.
        let blockers: Vec<Assignment> = Day::WEEKDAYS
            .iter()
            .map(|&day| Assignment::new("8A", "C9", "T1", "R9", day, 2))
            .collect();

        let class = make_class(
            "9B",
            vec![Course::new("C1", "History").with_frequency(2).with_duration(2)],
        );
        let request = ScheduleRequest::new(
            class,
            vec![make_teacher("T1", "History", 25)],
            vec![Room::classroom("R1")],
            Period::daily_grid(2),
        )
        .with_existing(blockers)
        .with_seed(17);

        let outcome = GreedyScheduler::new().schedule(&request);
        assert_eq!(outcome.fill[0].placed, 0);
        assert!(outcome.assignments.is_empty(), "no orphaned fragment");
    }

    #[test]
    fn test_block_places_contiguously() {
        let class = make_class(
            "9B",
            vec![Course::new("C1", "Chemistry").with_frequency(2).with_duration(2)],
        );
        let request = ScheduleRequest::new(
            class,
            vec![make_teacher("T1", "Chemistry", 20)],
            vec![Room::laboratory("L1")],
            Period::daily_grid(4),
        )
        .with_seed(11);

        let outcome = GreedyScheduler::new().schedule(&request);
        let heads: Vec<&Assignment> =
            outcome.assignments.iter().filter(|a| a.is_head()).collect();
        let conts: Vec<&Assignment> =
            outcome.assignments.iter().filter(|a| !a.is_head()).collect();
        assert_eq!(heads.len(), outcome.fill[0].placed as usize);
        assert_eq!(conts.len(), heads.len());

        for cont in conts {
            let head = outcome
                .assignments
                .iter()
                .find(|a| Some(&a.id) == cont.continuation_of.as_ref())
                .expect("continuation references its head");
            assert_eq!(cont.day, head.day);
            assert_eq!(cont.period_index, head.period_index + 1);
            assert_eq!(cont.teacher_id, head.teacher_id);
            assert_eq!(cont.room_id, head.room_id);
            assert_eq!(cont.class_id, head.class_id);
        }
    }

    #[test]
    fn test_seeded_runs_are_identical() {
        let class = make_class(
            "9B",
            vec![
                Course::new("C1", "Mathematics").with_frequency(4),
                Course::new("C2", "Computer Science").with_frequency(2),
            ],
        );
        let teachers = vec![
            make_teacher("T1", "Mathematics", 10),
            make_teacher("T2", "Computer Science", 10),
        ];
        let rooms = vec![
            Room::classroom("R1"),
            Room::laboratory("L1").with_name("Computer Lab"),
        ];
        let request = ScheduleRequest::new(class, teachers, rooms, Period::daily_grid(6))
            .with_seed(1234);

        let scheduler = GreedyScheduler::new();
        let first = scheduler.schedule(&request);
        let second = scheduler.schedule(&request);
        assert_eq!(first.assignments, second.assignments);
        assert_eq!(first.fill, second.fill);
    }

    #[test]
    fn test_lab_course_prefers_lab_room() {
        let class = make_class(
            "9B",
            vec![Course::new("C1", "Computer Programming").with_frequency(3)],
        );
        let request = ScheduleRequest::new(
            class,
            vec![make_teacher("T1", "Computer Programming", 10)],
            vec![
                Room::classroom("R1").with_name("Main 101"),
                Room::laboratory("L1").with_name("Computer Lab"),
            ],
            Period::daily_grid(5),
        )
        .with_seed(5);

        let outcome = GreedyScheduler::new().schedule(&request);
        assert!(!outcome.assignments.is_empty());
        // A lab is always free here, so every occurrence lands in it.
        assert!(outcome.assignments.iter().all(|a| a.room_id == "L1"));
    }

    #[test]
    fn test_unqualified_fallback_uses_catalog_teacher() {
        let class = make_class("9B", vec![Course::new("C1", "Latin").with_frequency(2)]);
        let teachers = vec![
            make_teacher("T1", "Mathematics", 10),
            make_teacher("T2", "Physics", 10),
        ];
        let request = ScheduleRequest::new(
            class,
            teachers,
            vec![Room::classroom("R1")],
            Period::daily_grid(5),
        )
        .with_seed(9);

        let outcome = GreedyScheduler::new().schedule(&request);
        assert!(!outcome.assignments.is_empty());
        let teacher_id = &outcome.assignments[0].teacher_id;
        assert!(teacher_id == "T1" || teacher_id == "T2");
        // One teacher per course
        assert!(outcome
            .assignments
            .iter()
            .all(|a| a.teacher_id == *teacher_id));
    }

    #[test]
    fn test_selection_biased_to_least_loaded_teacher() {
        // T1 already carries five slots from another class; T2 is idle.
        // The utilization bias must pick T2.
        let other_class_slots: Vec<Assignment> = (1..=5)
            .map(|p| Assignment::new("8A", "C9", "T1", "R9", Day::Monday, p))
            .collect();

        let class = make_class("9B", vec![Course::new("C1", "Mathematics").with_frequency(2)]);
        let request = ScheduleRequest::new(
            class,
            vec![
                make_teacher("T1", "Mathematics", 10),
                make_teacher("T2", "Mathematics", 10),
            ],
            vec![Room::classroom("R1")],
            Period::daily_grid(5),
        )
        .with_existing(other_class_slots)
        .with_seed(21);

        let outcome = GreedyScheduler::new().schedule(&request);
        assert!(!outcome.assignments.is_empty());
        assert!(outcome.assignments.iter().all(|a| a.teacher_id == "T2"));
    }

    #[test]
    fn test_existing_class_slots_are_replaced() {
        // Prior slots of the same class do not constrain regeneration.
        let prior = vec![Assignment::new("9B", "C0", "T1", "R1", Day::Monday, 1)];
        let class = make_class("9B", vec![Course::new("C1", "Mathematics").with_frequency(5)]);
        let request = ScheduleRequest::new(
            class,
            vec![make_teacher("T1", "Mathematics", 25)],
            vec![Room::classroom("R1")],
            Period::daily_grid(5),
        )
        .with_existing(prior)
        .with_seed(42);

        let outcome = GreedyScheduler::new().schedule(&request);
        assert_eq!(outcome.fill[0].placed, 5);
    }

    #[test]
    fn test_empty_catalogs_return_empty_outcome() {
        let class = make_class("9B", vec![Course::new("C1", "Mathematics")]);
        let scheduler = GreedyScheduler::new();

        let no_teachers = ScheduleRequest::new(
            class.clone(),
            Vec::new(),
            vec![Room::classroom("R1")],
            Period::daily_grid(5),
        );
        assert!(scheduler.schedule(&no_teachers).is_empty());

        let no_rooms = ScheduleRequest::new(
            class.clone(),
            vec![make_teacher("T1", "Mathematics", 10)],
            Vec::new(),
            Period::daily_grid(5),
        );
        assert!(scheduler.schedule(&no_rooms).is_empty());

        let no_periods = ScheduleRequest::new(
            class,
            vec![make_teacher("T1", "Mathematics", 10)],
            vec![Room::classroom("R1")],
            Vec::new(),
        );
        assert!(scheduler.schedule(&no_periods).is_empty());
    }

    #[test]
    fn test_draws_stay_in_first_six_periods() {
        let class = make_class("9B", vec![Course::new("C1", "Mathematics").with_frequency(8)]);
        let request = ScheduleRequest::new(
            class,
            vec![make_teacher("T1", "Mathematics", 40)],
            vec![Room::classroom("R1")],
            Period::daily_grid(8),
        )
        .with_seed(13);

        let outcome = GreedyScheduler::new().schedule(&request);
        assert!(outcome.assignments.iter().all(|a| a.period_index <= 6));
    }

    #[test]
    fn test_occupancy_invariants_on_dense_schedule() {
        // Several classes and courses: no key repeats in any dimension.
        let classes: Vec<ClassGroup> = (0..3)
            .map(|i| {
                make_class(
                    &format!("C{i}"),
                    vec![
                        Course::new(format!("M{i}"), "Mathematics").with_frequency(4),
                        Course::new(format!("S{i}"), "Science").with_frequency(3),
                    ],
                )
            })
            .collect();
        let teachers = vec![
            make_teacher("T1", "Mathematics", 15),
            make_teacher("T2", "Science", 15),
            make_teacher("T3", "Mathematics", 15),
        ];
        let rooms = vec![
            Room::classroom("R1"),
            Room::classroom("R2"),
            Room::laboratory("L1"),
        ];

        let outcome = GreedyScheduler::new().schedule_all(
            &classes,
            &teachers,
            &rooms,
            &Period::daily_grid(6),
            Some(99),
        );

        assert!(!outcome.assignments.is_empty());
        assert_eq!(detect_conflicts(&outcome.assignments).total_conflicts, 0);
    }
}
