//! Course record model.
//!
//! A course is an academic offering with a credit value, a raw weekly
//! time text, and the time slots derived from it. Slot derivation is
//! fail-soft: unparseable time text leaves the slot list empty and the
//! course simply never conflicts with anything.

use serde::{Deserialize, Serialize};

use super::TimeSlot;

/// Category of an academic offering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CourseCategory {
    /// Mandatory for the student's program.
    Required,
    /// Program elective.
    Elective,
    /// General-education course (interest-matched during recommendation).
    General,
}

/// An academic offering.
///
/// Immutable once constructed; `slots` is derived from `time_text` at
/// construction time and never re-parsed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    /// Course name.
    pub name: String,
    /// Credit value.
    pub credit: f64,
    /// Raw weekly time text (e.g. `"周一1-2节,周三3-4节"`).
    pub time_text: String,
    /// Classroom or building.
    pub location: String,
    /// Instructor name.
    pub teacher: String,
    /// Course category.
    pub category: CourseCategory,
    /// Time slots parsed from `time_text`.
    pub slots: Vec<TimeSlot>,
}

impl Course {
    /// Creates a course, deriving its time slots from `time_text`.
    ///
    /// Never fails: a non-empty time text that parses to no slots is
    /// logged as a warning and the course carries an empty slot list.
    pub fn new(
        name: impl Into<String>,
        credit: f64,
        time_text: impl Into<String>,
        category: CourseCategory,
    ) -> Self {
        let name = name.into();
        let time_text = time_text.into();
        let slots = TimeSlot::parse_time_text(&time_text);
        if slots.is_empty() && !time_text.is_empty() {
            tracing::warn!(course = %name, time_text = %time_text, "unparseable time text, course has no slots");
        }
        Self {
            name,
            credit,
            time_text,
            location: String::new(),
            teacher: String::new(),
            category,
            slots,
        }
    }

    /// Sets the location.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Sets the instructor.
    pub fn with_teacher(mut self, teacher: impl Into<String>) -> Self {
        self.teacher = teacher.into();
        self
    }

    /// Whether any slot of this course overlaps any slot of `other`.
    ///
    /// Pairwise only — conflict is not transitive.
    pub fn conflicts_with(&self, other: &Course) -> bool {
        self.slots
            .iter()
            .any(|mine| other.slots.iter().any(|theirs| mine.overlaps(theirs)))
    }

    /// Individual `(day, period)` cells covered by this course.
    pub fn cells(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        self.slots.iter().flat_map(|slot| slot.cells())
    }
}
