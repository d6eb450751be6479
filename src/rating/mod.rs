//! Rating store access and aggregation.
//!
//! The engine never reads the review store directly; it goes through the
//! [`RatingSource`] trait so sessions can be wired to a spreadsheet-backed
//! store in production and to [`RatingTable`] fixtures in tests. A course
//! unknown to the source yields an empty record list, never an error.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{RatingRecord, WorkloadLevel};

/// Provider of rating records, keyed by course name.
///
/// Implementations must be total: querying an unknown course returns an
/// empty vec. Any upstream failure (unreachable store, bad rows) must be
/// translated to an empty result before it reaches the engine.
pub trait RatingSource {
    /// All rating records for the named course, zero or more.
    fn ratings_for(&self, course_name: &str) -> Vec<RatingRecord>;
}

/// In-memory rating store.
///
/// The standard fixture implementation of [`RatingSource`]; also usable as
/// a cache for records ingested from a spreadsheet by a collaborator.
#[derive(Debug, Clone, Default)]
pub struct RatingTable {
    records: HashMap<String, Vec<RatingRecord>>,
}

impl RatingTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a record for a course (builder form).
    pub fn with_record(mut self, course_name: impl Into<String>, record: RatingRecord) -> Self {
        self.add_record(course_name, record);
        self
    }

    /// Adds a record for a course.
    pub fn add_record(&mut self, course_name: impl Into<String>, record: RatingRecord) {
        self.records.entry(course_name.into()).or_default().push(record);
    }

    /// Number of courses with at least one record.
    pub fn course_count(&self) -> usize {
        self.records.len()
    }
}

impl RatingSource for RatingTable {
    fn ratings_for(&self, course_name: &str) -> Vec<RatingRecord> {
        self.records.get(course_name).cloned().unwrap_or_default()
    }
}

/// Per-course aggregate statistics over all rating records.
///
/// Each field is the mean over records where that field is present;
/// a field with no present values (or an empty record set) is 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RatingSummary {
    /// Mean content quality, 0–10.
    pub content_score: f64,
    /// Mean workload, 0–100.
    pub workload_score: f64,
    /// Mean assessment score.
    pub assessment_score: f64,
    /// Mean review count.
    pub review_count: f64,
}

impl RatingSummary {
    /// Aggregates a record set into per-field means.
    pub fn from_records(records: &[RatingRecord]) -> Self {
        Self {
            content_score: mean_of(records, |r| r.content_score),
            workload_score: mean_of(records, |r| r.workload),
            assessment_score: mean_of(records, |r| r.assessment),
            review_count: mean_of(records, |r| r.review_count),
        }
    }
}

/// Mean of a field over the records where it is present; 0 with no samples.
fn mean_of(records: &[RatingRecord], field: impl Fn(&RatingRecord) -> Option<f64>) -> f64 {
    let values: Vec<f64> = records.iter().filter_map(field).collect();
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

/// Workload classification for one course.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkloadInfo {
    /// Qualitative band; `Unknown` without numeric samples.
    pub level: WorkloadLevel,
    /// Mean workload score, when any record carried one.
    pub score: Option<f64>,
    /// Display string for the band.
    pub description: String,
    /// Number of records contributing a numeric workload.
    pub sample_count: usize,
}

/// Classifies a course's workload from its rating records.
///
/// Averages the workload values that are present and maps the mean through
/// the fixed 50/80 thresholds. No samples means `Unknown`, not an error.
pub fn workload_info(records: &[RatingRecord]) -> WorkloadInfo {
    let samples: Vec<f64> = records.iter().filter_map(|r| r.workload).collect();

    if samples.is_empty() {
        return WorkloadInfo {
            level: WorkloadLevel::Unknown,
            score: None,
            description: "No workload data available".to_string(),
            sample_count: 0,
        };
    }

    let avg = samples.iter().sum::<f64>() / samples.len() as f64;
    let level = WorkloadLevel::from_score(avg);
    let description = match level {
        WorkloadLevel::High => "Heavy workload",
        WorkloadLevel::Medium => "Moderate workload",
        WorkloadLevel::Low => "Light workload",
        WorkloadLevel::Unknown => unreachable!("numeric samples always classify"),
    };

    WorkloadInfo {
        level,
        score: Some(avg),
        description: description.to_string(),
        sample_count: samples.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_record(teacher: &str, workload: Option<f64>) -> RatingRecord {
        let record = RatingRecord::new(teacher);
        match workload {
            Some(w) => record.with_workload(w),
            None => record,
        }
    }

    #[test]
    fn test_unknown_course_yields_empty() {
        let table = RatingTable::new();
        assert!(table.ratings_for("不存在的课").is_empty());
    }

    #[test]
    fn test_summary_means_present_fields_only() {
        let records = vec![
            RatingRecord::new("甲")
                .with_content_score(8.0)
                .with_workload(40.0),
            RatingRecord::new("乙").with_content_score(6.0),
            RatingRecord::new("丙").with_workload(80.0).with_review_count(20.0),
        ];

        let summary = RatingSummary::from_records(&records);
        assert_eq!(summary.content_score, 7.0);
        assert_eq!(summary.workload_score, 60.0);
        assert_eq!(summary.review_count, 20.0);
        // No assessment values anywhere → 0.
        assert_eq!(summary.assessment_score, 0.0);
    }

    #[test]
    fn test_summary_of_empty_records_is_all_zero() {
        assert_eq!(RatingSummary::from_records(&[]), RatingSummary::default());
    }

    #[test]
    fn test_workload_info_classification() {
        let high = workload_info(&[make_record("甲", Some(85.0))]);
        assert_eq!(high.level, WorkloadLevel::High);
        assert_eq!(high.score, Some(85.0));
        assert_eq!(high.sample_count, 1);

        let medium = workload_info(&[make_record("甲", Some(40.0)), make_record("乙", Some(60.0))]);
        assert_eq!(medium.level, WorkloadLevel::Medium);
        assert_eq!(medium.score, Some(50.0));
        assert_eq!(medium.sample_count, 2);
    }

    #[test]
    fn test_workload_info_no_samples_is_unknown() {
        let info = workload_info(&[make_record("甲", None)]);
        assert_eq!(info.level, WorkloadLevel::Unknown);
        assert_eq!(info.score, None);
        assert_eq!(info.sample_count, 0);

        let empty = workload_info(&[]);
        assert_eq!(empty.level, WorkloadLevel::Unknown);
    }

    #[test]
    fn test_table_builder() {
        let table = RatingTable::new()
            .with_record("高等数学", RatingRecord::new("甲").with_workload(70.0))
            .with_record("高等数学", RatingRecord::new("乙").with_workload(90.0))
            .with_record("大学语文", RatingRecord::new("丙"));

        assert_eq!(table.course_count(), 2);
        assert_eq!(table.ratings_for("高等数学").len(), 2);
        assert_eq!(table.ratings_for("大学语文").len(), 1);
    }
}
