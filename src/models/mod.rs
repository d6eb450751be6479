//! Course-planning domain models.
//!
//! Core data types for the scheduling and recommendation engine:
//! time slots, course records, the student preference profile, and
//! external rating records. All types are immutable once constructed
//! and serde-serializable for consumers that persist or display them.

mod course;
mod profile;
mod rating;
mod timeslot;

pub use course::{Course, CourseCategory};
pub use profile::{AssessmentPreference, StudentProfile, TeachingStyle, WorkloadPreference};
pub use rating::{
    RatingRecord, WorkloadLevel, WORKLOAD_HIGH_THRESHOLD, WORKLOAD_MEDIUM_THRESHOLD,
};
pub use timeslot::TimeSlot;
