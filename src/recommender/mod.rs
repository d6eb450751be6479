//! Profile-driven course recommendation.
//!
//! Combines scheduler state, rating-store aggregates, and the student's
//! preference profile into a 0–100 match score per course, a ranked
//! recommendation list with human-readable reasons, and an aggregate
//! workload classification for a course set.
//!
//! # Scoring
//!
//! Five additive components: workload fit (0–30), content quality (0–20),
//! review volume (0–10), free-slot utilization (0–20), and category
//! weight (0–20). Reasons are derived from the same feature values that
//! produced the score, so explanation and ranking can never disagree.

mod teacher;

pub use teacher::{TeacherRecommendation, TeacherRecommender, TeacherScore};

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{Course, CourseCategory, StudentProfile, WorkloadLevel, WorkloadPreference};
use crate::rating::{workload_info, RatingSource, RatingSummary};
use crate::scheduler::{slot_usage, Scheduler};

/// Workload band edges used for reason generation (0–100 scale).
const WORKLOAD_BAND_LOW: f64 = 30.0;
const WORKLOAD_BAND_HIGH: f64 = 70.0;

/// Content-score thresholds for quality reasons (0–10 scale).
const CONTENT_EXCELLENT: f64 = 8.0;
const CONTENT_GOOD: f64 = 7.0;

/// Slot-utilization threshold for the scheduling-fit reason.
const GOOD_FIT_USAGE: f64 = 0.8;

/// A scored, explained course recommendation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationEntry {
    /// The recommended course.
    pub course: Course,
    /// Match score, 0–100.
    pub score: f64,
    /// Ready-to-display justifications, derived from the scored features.
    pub reasons: Vec<String>,
}

/// Aggregate workload classification for a set of courses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkloadAnalysis {
    /// Overall band, from the mean of courses with numeric workload data.
    pub level: WorkloadLevel,
    /// Display string for the overall band.
    pub description: String,
    /// Count of courses per band. Empty for empty input.
    pub distribution: HashMap<WorkloadLevel, usize>,
}

/// Profile-driven course recommender.
///
/// Borrows the session scheduler for conflict and capacity queries and an
/// injected [`RatingSource`] for review aggregates. Holds at most one
/// active [`StudentProfile`]; every recommendation path returns an empty
/// or zero result until one is set.
pub struct CourseRecommender<'a> {
    scheduler: &'a Scheduler,
    ratings: &'a dyn RatingSource,
    profile: Option<StudentProfile>,
}

impl<'a> CourseRecommender<'a> {
    /// Creates a recommender with no active profile.
    pub fn new(scheduler: &'a Scheduler, ratings: &'a dyn RatingSource) -> Self {
        Self {
            scheduler,
            ratings,
            profile: None,
        }
    }

    /// Sets the active student profile.
    pub fn set_profile(&mut self, profile: StudentProfile) {
        self.profile = Some(profile);
    }

    /// Sets the active profile (builder form).
    pub fn with_profile(mut self, profile: StudentProfile) -> Self {
        self.profile = Some(profile);
        self
    }

    /// The active profile, if any.
    pub fn profile(&self) -> Option<&StudentProfile> {
        self.profile.as_ref()
    }

    /// Aggregated rating features for a course. All-zero when the rating
    /// store has no records for it.
    pub fn course_features(&self, course: &Course) -> RatingSummary {
        RatingSummary::from_records(&self.ratings.ratings_for(&course.name))
    }

    /// Match score between a course and the active profile, in `[0, 100]`.
    ///
    /// Returns 0 when no profile is set.
    pub fn score(&self, course: &Course) -> f64 {
        let Some(profile) = &self.profile else {
            return 0.0;
        };

        let features = self.course_features(course);
        let mut score = 0.0;

        // Workload fit (0-30).
        let workload = features.workload_score;
        score += match profile.preferred_workload {
            WorkloadPreference::Low => (30.0 - workload / 100.0 * 30.0).max(0.0),
            WorkloadPreference::Medium => 30.0 - (50.0 - workload).abs() / 100.0 * 30.0,
            WorkloadPreference::High => (workload / 100.0 * 30.0).min(30.0),
        };

        // Content quality (0-20).
        score += features.content_score / 10.0 * 20.0;

        // Review volume (0-10).
        score += (features.review_count / 10.0).min(10.0);

        // Free-slot utilization (0-20).
        let free = self.scheduler.available_slots();
        score += slot_usage(course, &free) * 20.0;

        // Category weight (0-20).
        score += match course.category {
            CourseCategory::General => {
                if profile.matched_interest(&course.name).is_some() {
                    20.0
                } else {
                    10.0
                }
            }
            CourseCategory::Required | CourseCategory::Elective => 15.0,
        };

        score
    }

    /// Ranks candidates against the active profile.
    ///
    /// Candidates conflicting with the committed schedule are dropped, the
    /// rest are stable-sorted by score descending (ties keep input order),
    /// and accepted greedily up to `top_k` courses, stopping early once
    /// accumulated credit meets `min_credits` (0 disables the credit stop).
    /// Returns an empty vec when no profile is set.
    pub fn recommend(
        &self,
        candidates: &[Course],
        top_k: usize,
        min_credits: f64,
    ) -> Vec<RecommendationEntry> {
        if self.profile.is_none() {
            return Vec::new();
        }

        let mut scored: Vec<(f64, &Course)> = candidates
            .iter()
            .filter(|course| self.scheduler.check_conflicts(course).is_empty())
            .map(|course| (self.score(course), course))
            .collect();

        // Stable sort: equal scores keep candidate order.
        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));

        let mut recommended = Vec::new();
        let mut current_credits = 0.0;

        for (score, course) in scored {
            if recommended.len() >= top_k {
                break;
            }
            if min_credits > 0.0 && current_credits >= min_credits {
                break;
            }

            recommended.push(RecommendationEntry {
                course: course.clone(),
                score,
                reasons: self.reasons_for(course),
            });
            current_credits += course.credit;
        }

        recommended
    }

    /// Builds display reasons from the same features that drive `score`.
    fn reasons_for(&self, course: &Course) -> Vec<String> {
        let Some(profile) = &self.profile else {
            return Vec::new();
        };

        let features = self.course_features(course);
        let mut reasons = Vec::new();

        // Workload band phrase, only when it matches the preference.
        let workload = features.workload_score;
        match profile.preferred_workload {
            WorkloadPreference::Low if workload < WORKLOAD_BAND_LOW => {
                reasons.push("Light workload, a good fit for your study pace".to_string());
            }
            WorkloadPreference::Medium
                if (WORKLOAD_BAND_LOW..=WORKLOAD_BAND_HIGH).contains(&workload) =>
            {
                reasons.push("Moderate workload, matches your study plan".to_string());
            }
            WorkloadPreference::High if workload > WORKLOAD_BAND_HIGH => {
                reasons.push("Heavy workload, room to fully invest yourself".to_string());
            }
            _ => {}
        }

        if features.content_score >= CONTENT_EXCELLENT {
            reasons.push("Excellent content ratings from past students".to_string());
        } else if features.content_score >= CONTENT_GOOD {
            reasons.push("Good content ratings from past students".to_string());
        }

        let free = self.scheduler.available_slots();
        if slot_usage(course, &free) > GOOD_FIT_USAGE {
            reasons.push("Fits cleanly into your open schedule".to_string());
        }

        if course.category == CourseCategory::General {
            if let Some(interest) = profile.matched_interest(&course.name) {
                reasons.push(format!("Related to your interest in {interest}"));
            }
        }

        reasons
    }

    /// Classifies the aggregate workload of a course set.
    ///
    /// Each course is banded via its rating records and tallied into a
    /// distribution; the overall level comes from the mean over courses
    /// with numeric workload data only. Empty input yields `Unknown`
    /// with an empty distribution.
    pub fn workload_analysis(&self, courses: &[Course]) -> WorkloadAnalysis {
        if courses.is_empty() {
            return WorkloadAnalysis {
                level: WorkloadLevel::Unknown,
                description: "No course workload information available".to_string(),
                distribution: HashMap::new(),
            };
        }

        let mut distribution: HashMap<WorkloadLevel, usize> = HashMap::from([
            (WorkloadLevel::Low, 0),
            (WorkloadLevel::Medium, 0),
            (WorkloadLevel::High, 0),
            (WorkloadLevel::Unknown, 0),
        ]);
        let mut samples = Vec::new();

        for course in courses {
            let info = workload_info(&self.ratings.ratings_for(&course.name));
            *distribution.entry(info.level).or_insert(0) += 1;
            if let Some(score) = info.score {
                samples.push(score);
            }
        }

        let (level, description) = if samples.is_empty() {
            (
                WorkloadLevel::Unknown,
                "Not enough workload data to assess this course set",
            )
        } else {
            let avg = samples.iter().sum::<f64>() / samples.len() as f64;
            match WorkloadLevel::from_score(avg) {
                WorkloadLevel::High => (
                    WorkloadLevel::High,
                    "Heavy overall workload, plan your time carefully",
                ),
                WorkloadLevel::Medium => (
                    WorkloadLevel::Medium,
                    "Moderate overall workload, a balanced selection",
                ),
                _ => (
                    WorkloadLevel::Low,
                    "Light overall workload, consider adding a course",
                ),
            }
        };

        WorkloadAnalysis {
            level,
            description: description.to_string(),
            distribution,
        }
    }
}
