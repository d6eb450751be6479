//! Instructor ranking for a course.
//!
//! A narrower scorer than the course recommender: for one course name it
//! groups rating records by teacher, computes a weighted composite per
//! teacher, and reports the best one. Missing data is a status, never an
//! error.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::RatingRecord;
use crate::rating::RatingSource;

/// Composite weight on the average overall score.
const AVERAGE_SCORE_WEIGHT: f64 = 0.6;
/// Composite weight on the content score.
const CONTENT_SCORE_WEIGHT: f64 = 0.3;
/// Composite weight on the normalized review volume.
const REVIEW_VOLUME_WEIGHT: f64 = 0.1;

/// Per-teacher score breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeacherScore {
    /// Weighted composite: `average*0.6 + content*0.3 +
    /// min(review_count/10, 1)*10*0.1`.
    pub composite: f64,
    /// Average overall score.
    pub average_score: f64,
    /// Content quality score.
    pub content_score: f64,
    /// Review count behind the record.
    pub review_count: f64,
    /// Workload score, when the record carried one.
    pub workload: Option<f64>,
}

/// Outcome of ranking the instructors of one course.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TeacherRecommendation {
    /// The rating store has no records for this course.
    NoData,
    /// Records exist but none carries a usable teacher and score fields.
    NoValidData,
    /// A best teacher was found.
    Recommended {
        /// Teacher with the highest composite.
        teacher: String,
        /// Score breakdown for the recommended teacher.
        score: TeacherScore,
        /// Composite breakdown for every scored teacher.
        all_teachers: HashMap<String, TeacherScore>,
    },
}

impl TeacherRecommendation {
    /// The recommended teacher's name, if one was found.
    pub fn recommended_teacher(&self) -> Option<&str> {
        match self {
            TeacherRecommendation::Recommended { teacher, .. } => Some(teacher),
            _ => None,
        }
    }
}

/// Ranks the instructors of a course by weighted composite score.
pub struct TeacherRecommender<'a> {
    ratings: &'a dyn RatingSource,
}

impl<'a> TeacherRecommender<'a> {
    /// Creates a recommender over the given rating source.
    pub fn new(ratings: &'a dyn RatingSource) -> Self {
        Self { ratings }
    }

    /// Recommends the best-rated teacher for one course.
    ///
    /// Records with an empty teacher name or with any composite input
    /// (average score, content score, review count) missing are skipped.
    /// When a teacher has several usable records, the last one wins.
    /// Composite ties break toward the lexicographically smaller name so
    /// the result is deterministic.
    pub fn recommend_for(&self, course_name: &str) -> TeacherRecommendation {
        let records = self.ratings.ratings_for(course_name);
        if records.is_empty() {
            return TeacherRecommendation::NoData;
        }

        let mut teacher_scores: HashMap<String, TeacherScore> = HashMap::new();
        for record in &records {
            if let Some((teacher, score)) = score_record(record) {
                teacher_scores.insert(teacher.to_string(), score);
            }
        }

        if teacher_scores.is_empty() {
            tracing::debug!(course = course_name, "records present but none scorable");
            return TeacherRecommendation::NoValidData;
        }

        let Some((teacher, score)) = teacher_scores
            .iter()
            .max_by(|(name_a, a), (name_b, b)| {
                a.composite
                    .partial_cmp(&b.composite)
                    .unwrap_or(std::cmp::Ordering::Equal)
                    .then_with(|| name_b.cmp(name_a))
            })
            .map(|(name, score)| (name.clone(), score.clone()))
        else {
            return TeacherRecommendation::NoValidData;
        };

        TeacherRecommendation::Recommended {
            teacher,
            score,
            all_teachers: teacher_scores,
        }
    }

    /// Recommends teachers for several courses, independently per course.
    ///
    /// Output order follows input order.
    pub fn recommend_many(&self, course_names: &[&str]) -> Vec<(String, TeacherRecommendation)> {
        course_names
            .iter()
            .map(|name| (name.to_string(), self.recommend_for(name)))
            .collect()
    }
}

/// Scores one record; `None` when the teacher or a composite input is missing.
fn score_record(record: &RatingRecord) -> Option<(&str, TeacherScore)> {
    if record.teacher.is_empty() {
        return None;
    }
    let average_score = record.average_score?;
    let content_score = record.content_score?;
    let review_count = record.review_count?;

    let normalized_reviews = (review_count / 10.0).min(1.0) * 10.0;
    let composite = average_score * AVERAGE_SCORE_WEIGHT
        + content_score * CONTENT_SCORE_WEIGHT
        + normalized_reviews * REVIEW_VOLUME_WEIGHT;

    Some((
        record.teacher.as_str(),
        TeacherScore {
            composite,
            average_score,
            content_score,
            review_count,
            workload: record.workload,
        },
    ))
}
