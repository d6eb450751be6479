//! Course scheduling and recommendation engine.
//!
//! Helps a student assemble a conflict-free set of courses and ranks
//! candidates against a personal preference profile. The engine covers
//! the weekly time-slot model, conflict detection, free-capacity
//! bookkeeping, and the multi-criteria scoring that drives course and
//! teacher recommendations. Spreadsheet ingestion, dialog flow, and
//! report generation are collaborators outside this crate.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `TimeSlot`, `Course`, `StudentProfile`,
//!   `RatingRecord`, `WorkloadLevel`
//! - **`rating`**: The injected `RatingSource` seam and per-course
//!   aggregation (`RatingSummary`, workload classification)
//! - **`scheduler`**: Conflict checks, the 60-cell weekday capacity grid,
//!   greedy recommendation, and the schedule matrix
//! - **`recommender`**: Profile-driven course ranking with reasons, the
//!   workload analysis, and the per-course teacher ranking
//!
//! # Design notes
//!
//! Everything is fail-soft: unparseable time text, missing rating fields,
//! and empty state resolve to defined defaults (empty slot lists, zero
//! aggregates, `Unknown`/no-data statuses) — the engine defines no error
//! type. All operations are synchronous and deterministic; embed one
//! `Scheduler` per session and serialize access in concurrent hosts.
//!
//! # Example
//!
//! ```
//! use course_advisor::models::{Course, CourseCategory, StudentProfile};
//! use course_advisor::rating::RatingTable;
//! use course_advisor::recommender::CourseRecommender;
//! use course_advisor::scheduler::Scheduler;
//!
//! let mut scheduler = Scheduler::new();
//! scheduler.add_selected(Course::new(
//!     "高等数学",
//!     4.0,
//!     "周一1-2节,周三3-4节",
//!     CourseCategory::Required,
//! ));
//!
//! let ratings = RatingTable::new();
//! let recommender = CourseRecommender::new(&scheduler, &ratings)
//!     .with_profile(StudentProfile::new("2023级", "计算机科学"));
//!
//! let candidates = vec![Course::new(
//!     "音乐欣赏",
//!     2.0,
//!     "周二5-6节",
//!     CourseCategory::General,
//! )];
//! let ranked = recommender.recommend(&candidates, 5, 0.0);
//! assert_eq!(ranked.len(), 1);
//! ```

pub mod models;
pub mod rating;
pub mod recommender;
pub mod scheduler;
