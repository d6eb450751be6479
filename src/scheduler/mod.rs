//! Conflict-checking scheduler and greedy course recommendation.
//!
//! The scheduler owns two append-only course lists: `selected` (the
//! commitment already made) and `available` (the candidate pool under
//! evaluation). Conflicts are always checked against `selected` only —
//! the candidate pool is **not** internally conflict-free, and two
//! never-selected candidates may legitimately overlap each other. Callers
//! vetting a basket of candidates against itself should use
//! [`has_internal_conflict`].
//!
//! # Algorithm
//!
//! `recommend` is a deterministic greedy heuristic, not an optimizer:
//! score every non-conflicting candidate, stable-sort descending, and
//! accept in order until the course cap is hit or the accumulated credit
//! has met the minimum.

use std::collections::HashSet;

use crate::models::Course;

/// Weekdays in the scheduling grid (Monday–Friday).
pub const GRID_DAYS: u8 = 5;
/// Class periods per day.
pub const GRID_PERIODS: u8 = 12;

/// Greedy score weight on credit value.
const CREDIT_WEIGHT: f64 = 10.0;
/// Greedy score weight on free-slot utilization.
const SLOT_USAGE_WEIGHT: f64 = 20.0;
/// Greedy score bonus per slot falling on a preferred day.
const PREFERRED_DAY_WEIGHT: f64 = 5.0;

/// Parameters for [`Scheduler::recommend`].
#[derive(Debug, Clone, Default)]
pub struct RecommendRequest {
    /// Stop accepting once accumulated credit meets this value (0 = no
    /// credit stop). Acceptance is checked before each course, so the
    /// minimum is met, not necessarily exceeded after the final course.
    pub min_credits: f64,
    /// Maximum number of courses to accept. `None` = unlimited.
    pub max_courses: Option<usize>,
    /// Days (1–7) whose slots earn a scoring bonus.
    pub preferred_days: Option<Vec<u8>>,
}

impl RecommendRequest {
    /// Creates a request with no limits and no day preference.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the minimum credit stop.
    pub fn with_min_credits(mut self, min_credits: f64) -> Self {
        self.min_credits = min_credits;
        self
    }

    /// Sets the course cap.
    pub fn with_max_courses(mut self, max_courses: usize) -> Self {
        self.max_courses = Some(max_courses);
        self
    }

    /// Sets the preferred days.
    pub fn with_preferred_days(mut self, days: Vec<u8>) -> Self {
        self.preferred_days = Some(days);
        self
    }
}

/// Session-scoped course scheduler.
///
/// State accumulates monotonically: courses are appended for the lifetime
/// of a session and never removed. Not designed for concurrent mutation;
/// embed one instance per session.
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    selected: Vec<Course>,
    available: Vec<Course>,
}

impl Scheduler {
    /// Creates an empty scheduler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a course to the committed schedule. No dedup.
    pub fn add_selected(&mut self, course: Course) {
        self.selected.push(course);
    }

    /// Appends a course to the candidate pool. No dedup, no conflict check.
    pub fn add_available(&mut self, course: Course) {
        self.available.push(course);
    }

    /// Committed courses, in insertion order.
    pub fn selected(&self) -> &[Course] {
        &self.selected
    }

    /// Candidate courses, in insertion order.
    pub fn available(&self) -> &[Course] {
        &self.available
    }

    /// Total credit across committed courses.
    pub fn total_selected_credits(&self) -> f64 {
        self.selected.iter().map(|c| c.credit).sum()
    }

    /// Every committed course that conflicts with `course`, in `selected`
    /// order. Empty means no conflict. Candidates are never checked
    /// against each other.
    pub fn check_conflicts(&self, course: &Course) -> Vec<&Course> {
        self.selected
            .iter()
            .filter(|selected| course.conflicts_with(selected))
            .collect()
    }

    /// The `(day, period)` cells not covered by any committed course.
    ///
    /// The universe is the 60-cell weekday grid (days 1–5 × periods 1–12);
    /// weekend slots of committed courses are ignored. Recomputed from
    /// scratch on every call.
    pub fn available_slots(&self) -> HashSet<(u8, u8)> {
        let mut free: HashSet<(u8, u8)> = (1..=GRID_DAYS)
            .flat_map(|day| (1..=GRID_PERIODS).map(move |slot| (day, slot)))
            .collect();

        for course in &self.selected {
            for cell in course.cells() {
                free.remove(&cell);
            }
        }

        free
    }

    /// Greedy recommendation over the candidate pool.
    ///
    /// Candidates conflicting with the committed schedule are dropped.
    /// The rest are scored (`10×credit + 20×slot_usage + 5×preferred-day
    /// slots`), stable-sorted by score descending (ties keep pool order),
    /// and accepted in order until the course cap is reached or the
    /// accumulated credit has met `min_credits`.
    pub fn recommend(&self, request: &RecommendRequest) -> Vec<Course> {
        let free = self.available_slots();

        let mut scored: Vec<(f64, &Course)> = Vec::new();
        for course in &self.available {
            if !self.check_conflicts(course).is_empty() {
                continue;
            }

            let mut score = course.credit * CREDIT_WEIGHT;
            score += slot_usage(course, &free) * SLOT_USAGE_WEIGHT;

            if let Some(days) = &request.preferred_days {
                let preferred = course
                    .slots
                    .iter()
                    .filter(|slot| days.contains(&slot.day))
                    .count();
                score += preferred as f64 * PREFERRED_DAY_WEIGHT;
            }

            scored.push((score, course));
        }

        // Stable sort: equal scores keep candidate-pool order.
        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));

        let mut recommended = Vec::new();
        let mut current_credits = 0.0;

        for (score, course) in scored {
            if let Some(max) = request.max_courses {
                if recommended.len() >= max {
                    break;
                }
            }
            if request.min_credits > 0.0 && current_credits >= request.min_credits {
                break;
            }

            tracing::debug!(course = %course.name, score, "accepting recommendation");
            current_credits += course.credit;
            recommended.push(course.clone());
        }

        recommended
    }

    /// Projects the committed schedule onto a 12×5 grid of course names.
    ///
    /// Rows are periods 1–12, columns are Monday–Friday; empty cells hold
    /// an empty string. Weekend slots are skipped. Later-added courses
    /// overwrite earlier occupants of a cell — conflicts must have been
    /// prevented at selection time.
    pub fn schedule_matrix(&self) -> Vec<Vec<String>> {
        let mut matrix =
            vec![vec![String::new(); GRID_DAYS as usize]; GRID_PERIODS as usize];

        for course in &self.selected {
            for slot in &course.slots {
                if !(1..=GRID_DAYS).contains(&slot.day) {
                    continue;
                }
                for period in slot.start_slot..=slot.end_slot {
                    matrix[period as usize - 1][slot.day as usize - 1] = course.name.clone();
                }
            }
        }

        matrix
    }
}

/// Fraction of a course's distinct cells that fall on free cells.
///
/// Set semantics: a cell covered by several of the course's own slots
/// counts once. A course with no slots has usage 0 (not a division error).
pub fn slot_usage(course: &Course, free: &HashSet<(u8, u8)>) -> f64 {
    let cells: HashSet<(u8, u8)> = course.cells().collect();
    if cells.is_empty() {
        return 0.0;
    }
    let usable = cells.iter().filter(|cell| free.contains(cell)).count();
    usable as f64 / cells.len() as f64
}

/// Whether any two courses in the set conflict with each other.
///
/// Pairwise check over a tentative basket; this is the caller's tool for
/// vetting candidates against each other, which the scheduler itself
/// deliberately never does.
pub fn has_internal_conflict(courses: &[Course]) -> bool {
    for (i, a) in courses.iter().enumerate() {
        for b in &courses[i + 1..] {
            if a.conflicts_with(b) {
                return true;
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CourseCategory;

    fn make_course(name: &str, credit: f64, time_text: &str) -> Course {
        Course::new(name, credit, time_text, CourseCategory::Required)
    }

    #[test]
    fn test_check_conflicts_returns_selected_order() {
        let mut scheduler = Scheduler::new();
        scheduler.add_selected(make_course("甲", 3.0, "周一1-2节"));
        scheduler.add_selected(make_course("乙", 3.0, "周二1-2节"));
        scheduler.add_selected(make_course("丙", 3.0, "周一2-3节"));

        let candidate = make_course("新课", 3.0, "周一1-3节");
        let conflicts = scheduler.check_conflicts(&candidate);
        let names: Vec<&str> = conflicts.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["甲", "丙"]);
    }

    #[test]
    fn test_conflict_is_pairwise_not_transitive() {
        // A and B overlap each other but neither overlaps C.
        let a = make_course("A", 3.0, "周一1-2节");
        let b = make_course("B", 3.0, "周一2-3节");
        let c = make_course("C", 3.0, "周五1-2节");

        let mut scheduler = Scheduler::new();
        scheduler.add_selected(c);

        assert!(scheduler.check_conflicts(&a).is_empty());
        assert!(scheduler.check_conflicts(&b).is_empty());
        assert!(a.conflicts_with(&b));
        // The pool is not internally conflict-free; the basket check is.
        assert!(has_internal_conflict(&[a, b]));
    }

    #[test]
    fn test_available_slots_full_universe() {
        let scheduler = Scheduler::new();
        assert_eq!(scheduler.available_slots().len(), 60);
    }

    #[test]
    fn test_available_slots_capacity_invariant() {
        let mut scheduler = Scheduler::new();
        // Two overlapping selected courses: union is periods 1-3 on Monday
        // (3 cells), not 5 — set semantics, no double subtraction.
        scheduler.add_selected(make_course("甲", 3.0, "周一1-2节"));
        scheduler.add_selected(make_course("乙", 3.0, "周一2-3节"));

        let free = scheduler.available_slots();
        assert_eq!(free.len(), 60 - 3);
        assert!(!free.contains(&(1, 1)));
        assert!(!free.contains(&(1, 2)));
        assert!(!free.contains(&(1, 3)));
        assert!(free.contains(&(1, 4)));
    }

    #[test]
    fn test_weekend_slots_do_not_reduce_capacity() {
        let mut scheduler = Scheduler::new();
        scheduler.add_selected(make_course("周末课", 2.0, "周六1-4节"));
        assert_eq!(scheduler.available_slots().len(), 60);
    }

    #[test]
    fn test_recommend_skips_conflicting_candidates() {
        let mut scheduler = Scheduler::new();
        scheduler.add_selected(make_course("已选", 3.0, "周一1-2节"));
        scheduler.add_available(make_course("冲突课", 5.0, "周一2-3节"));
        scheduler.add_available(make_course("空闲课", 2.0, "周二1-2节"));

        let result = scheduler.recommend(&RecommendRequest::new());
        let names: Vec<&str> = result.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["空闲课"]);
    }

    #[test]
    fn test_recommend_greedy_credit_stop() {
        // Credits [3,3,3] with min_credits=5: first acceptance brings 3,
        // second brings 6 >= 5, the check before the third stops the loop.
        let mut scheduler = Scheduler::new();
        scheduler.add_available(make_course("一", 3.0, "周一1-2节"));
        scheduler.add_available(make_course("二", 3.0, "周二1-2节"));
        scheduler.add_available(make_course("三", 3.0, "周三1-2节"));

        let request = RecommendRequest::new()
            .with_min_credits(5.0)
            .with_max_courses(10);
        let result = scheduler.recommend(&request);
        assert_eq!(result.len(), 2);
        assert_eq!(result.iter().map(|c| c.credit).sum::<f64>(), 6.0);
    }

    #[test]
    fn test_recommend_max_courses_cap() {
        let mut scheduler = Scheduler::new();
        for (name, day) in [("一", "周一"), ("二", "周二"), ("三", "周三")] {
            scheduler.add_available(make_course(name, 3.0, &format!("{day}1-2节")));
        }

        let request = RecommendRequest::new().with_max_courses(2);
        assert_eq!(scheduler.recommend(&request).len(), 2);
    }

    #[test]
    fn test_recommend_prefers_higher_credit() {
        let mut scheduler = Scheduler::new();
        scheduler.add_available(make_course("小课", 1.0, "周一1-2节"));
        scheduler.add_available(make_course("大课", 4.0, "周二1-2节"));

        let request = RecommendRequest::new().with_max_courses(1);
        let result = scheduler.recommend(&request);
        assert_eq!(result[0].name, "大课");
    }

    #[test]
    fn test_recommend_preferred_days_bonus() {
        // Same credit and full slot usage; the Friday bonus decides.
        let mut scheduler = Scheduler::new();
        scheduler.add_available(make_course("周一课", 3.0, "周一1-2节"));
        scheduler.add_available(make_course("周五课", 3.0, "周五1-2节"));

        let request = RecommendRequest::new()
            .with_max_courses(1)
            .with_preferred_days(vec![5]);
        let result = scheduler.recommend(&request);
        assert_eq!(result[0].name, "周五课");
    }

    #[test]
    fn test_recommend_tie_keeps_pool_order() {
        let mut scheduler = Scheduler::new();
        // Identical scores: insertion order must be preserved.
        scheduler.add_available(make_course("先加", 3.0, "周一1-2节"));
        scheduler.add_available(make_course("后加", 3.0, "周二1-2节"));

        let result = scheduler.recommend(&RecommendRequest::new());
        let names: Vec<&str> = result.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["先加", "后加"]);
    }

    #[test]
    fn test_recommend_slotless_course_scores_without_panic() {
        let mut scheduler = Scheduler::new();
        scheduler.add_available(make_course("无时间课", 2.0, ""));

        let result = scheduler.recommend(&RecommendRequest::new());
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_schedule_matrix_projection_and_overwrite() {
        let mut scheduler = Scheduler::new();
        scheduler.add_selected(make_course("早课", 3.0, "周一1-2节"));
        scheduler.add_selected(make_course("晚加课", 3.0, "周一2节"));
        scheduler.add_selected(make_course("周末课", 2.0, "周日1-2节"));

        let matrix = scheduler.schedule_matrix();
        assert_eq!(matrix.len(), 12);
        assert_eq!(matrix[0].len(), 5);
        assert_eq!(matrix[0][0], "早课");
        // Later-added course overwrites the shared cell.
        assert_eq!(matrix[1][0], "晚加课");
        // Weekend slots never land in the weekday grid.
        assert!(matrix.iter().flatten().all(|cell| cell != "周末课"));
    }

    #[test]
    fn test_schedule_matrix_tolerates_out_of_range_time_text() {
        // Periods outside 1-12 are rejected at parse time, so a course
        // declared with them carries no slots and cannot index past the
        // grid edge.
        let mut scheduler = Scheduler::new();
        scheduler.add_selected(make_course("越界课", 3.0, "周一11-13节"));
        scheduler.add_selected(make_course("零节课", 2.0, "周一0节"));

        let matrix = scheduler.schedule_matrix();
        assert!(matrix.iter().flatten().all(|cell| cell.is_empty()));
        assert_eq!(scheduler.available_slots().len(), 60);
    }

    #[test]
    fn test_slot_usage_counts_overlapping_own_slots_once() {
        // Fragments overlap on cell (1,2): distinct cells are 1-3 on
        // Monday. With (1,2) occupied, usage is 2/3, not 2/4.
        let mut scheduler = Scheduler::new();
        scheduler.add_selected(make_course("已选", 1.0, "周一2节"));

        let course = make_course("重叠课", 3.0, "周一1-2节,周一2-3节");
        let usage = slot_usage(&course, &scheduler.available_slots());
        assert!((usage - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_slot_usage_empty_course_is_zero() {
        let scheduler = Scheduler::new();
        let course = make_course("无时间课", 2.0, "");
        assert_eq!(slot_usage(&course, &scheduler.available_slots()), 0.0);
    }

    #[test]
    fn test_total_selected_credits() {
        let mut scheduler = Scheduler::new();
        scheduler.add_selected(make_course("甲", 3.0, "周一1-2节"));
        scheduler.add_selected(make_course("乙", 2.5, "周二1-2节"));
        assert_eq!(scheduler.total_selected_credits(), 5.5);
    }
}
