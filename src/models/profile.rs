//! Student preference profile.
//!
//! The profile is set once before a recommendation pass and treated as
//! immutable for its duration. Recommendation logic invoked with no
//! profile yields empty results rather than an error.

use serde::{Deserialize, Serialize};

/// Preferred weekly workload band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkloadPreference {
    Low,
    Medium,
    High,
}

/// Preferred assessment style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentPreference {
    Exam,
    Project,
    Mixed,
}

/// Preferred teaching style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeachingStyle {
    Theoretical,
    Practical,
    Balanced,
}

/// A student's preference profile for course recommendation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentProfile {
    /// Year of study (free-form, e.g. "2023级").
    pub year: String,
    /// Major or program name.
    pub major: String,
    /// Interest keywords, matched as case-insensitive substrings of
    /// general-education course names.
    pub interests: Vec<String>,
    /// Preferred workload band.
    pub preferred_workload: WorkloadPreference,
    /// Preferred assessment style.
    pub preferred_assessment: AssessmentPreference,
    /// Preferred teaching style.
    pub preferred_teaching_style: TeachingStyle,
}

impl StudentProfile {
    /// Creates a profile with the given year and major and neutral defaults.
    pub fn new(year: impl Into<String>, major: impl Into<String>) -> Self {
        Self {
            year: year.into(),
            major: major.into(),
            interests: Vec::new(),
            preferred_workload: WorkloadPreference::Medium,
            preferred_assessment: AssessmentPreference::Mixed,
            preferred_teaching_style: TeachingStyle::Balanced,
        }
    }

    /// Adds an interest keyword.
    pub fn with_interest(mut self, interest: impl Into<String>) -> Self {
        self.interests.push(interest.into());
        self
    }

    /// Sets the preferred workload band.
    pub fn with_workload(mut self, preference: WorkloadPreference) -> Self {
        self.preferred_workload = preference;
        self
    }

    /// Sets the preferred assessment style.
    pub fn with_assessment(mut self, preference: AssessmentPreference) -> Self {
        self.preferred_assessment = preference;
        self
    }

    /// Sets the preferred teaching style.
    pub fn with_teaching_style(mut self, style: TeachingStyle) -> Self {
        self.preferred_teaching_style = style;
        self
    }

    /// Whether any interest keyword appears in `course_name`,
    /// case-insensitively. Returns the matched keyword.
    pub fn matched_interest(&self, course_name: &str) -> Option<&str> {
        let name = course_name.to_lowercase();
        self.interests
            .iter()
            .find(|interest| name.contains(&interest.to_lowercase()))
            .map(String::as_str)
    }
}
