//! Rating record model and workload classification.
//!
//! Rating records come from an external review store, one per course per
//! teacher. Fields are optional because the upstream spreadsheet routinely
//! has blank or non-numeric cells; a missing field is data to classify
//! around, never an error.

use serde::{Deserialize, Serialize};

/// Workload classification thresholds (on the 0–100 workload scale).
pub const WORKLOAD_HIGH_THRESHOLD: f64 = 80.0;
pub const WORKLOAD_MEDIUM_THRESHOLD: f64 = 50.0;

/// One review-store row for a course/teacher pair.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RatingRecord {
    /// Instructor name. Empty when the upstream row lacks one.
    pub teacher: String,
    /// Content quality, 0–10.
    pub content_score: Option<f64>,
    /// Workload, 0–100.
    pub workload: Option<f64>,
    /// Assessment-style score.
    pub assessment: Option<f64>,
    /// Average overall score.
    pub average_score: Option<f64>,
    /// Number of reviews behind this row.
    pub review_count: Option<f64>,
}

impl RatingRecord {
    /// Creates a record for the given teacher with all fields unset.
    pub fn new(teacher: impl Into<String>) -> Self {
        Self {
            teacher: teacher.into(),
            ..Default::default()
        }
    }

    /// Sets the content quality score (0–10).
    pub fn with_content_score(mut self, score: f64) -> Self {
        self.content_score = Some(score);
        self
    }

    /// Sets the workload score (0–100).
    pub fn with_workload(mut self, workload: f64) -> Self {
        self.workload = Some(workload);
        self
    }

    /// Sets the assessment score.
    pub fn with_assessment(mut self, assessment: f64) -> Self {
        self.assessment = Some(assessment);
        self
    }

    /// Sets the average overall score.
    pub fn with_average_score(mut self, score: f64) -> Self {
        self.average_score = Some(score);
        self
    }

    /// Sets the review count.
    pub fn with_review_count(mut self, count: f64) -> Self {
        self.review_count = Some(count);
        self
    }
}

/// Qualitative workload band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkloadLevel {
    Low,
    Medium,
    High,
    /// No numeric workload data available.
    Unknown,
}

impl WorkloadLevel {
    /// Classifies a numeric workload score: `>= 80` high, `>= 50` medium,
    /// otherwise low.
    pub fn from_score(score: f64) -> Self {
        if score >= WORKLOAD_HIGH_THRESHOLD {
            WorkloadLevel::High
        } else if score >= WORKLOAD_MEDIUM_THRESHOLD {
            WorkloadLevel::Medium
        } else {
            WorkloadLevel::Low
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_builder() {
        let record = RatingRecord::new("李老师")
            .with_content_score(8.5)
            .with_workload(60.0)
            .with_review_count(12.0);

        assert_eq!(record.teacher, "李老师");
        assert_eq!(record.content_score, Some(8.5));
        assert_eq!(record.workload, Some(60.0));
        assert_eq!(record.assessment, None);
    }

    #[test]
    fn test_workload_level_boundaries() {
        assert_eq!(WorkloadLevel::from_score(80.0), WorkloadLevel::High);
        assert_eq!(WorkloadLevel::from_score(50.0), WorkloadLevel::Medium);
        assert_eq!(WorkloadLevel::from_score(49.999), WorkloadLevel::Low);
        assert_eq!(WorkloadLevel::from_score(0.0), WorkloadLevel::Low);
        assert_eq!(WorkloadLevel::from_score(100.0), WorkloadLevel::High);
    }
}
