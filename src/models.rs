//! Data models for the instructor dashboard.
//!
//! This module contains the records read from the local store
//! (lectures, students, the signed-in user) and the derived
//! structures handed to the presentation layer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Revenue earned per enrolled student, in whole currency units.
pub const REVENUE_PER_STUDENT: u64 = 10;

/// Identifier of a stored record.
///
/// The browser side writes ids as numbers for students and as strings
/// for lectures, so both forms are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{}", n),
            RecordId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for RecordId {
    fn from(n: i64) -> Self {
        RecordId::Number(n)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        RecordId::Text(s.to_string())
    }
}

/// Publication status of a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CourseStatus {
    #[default]
    Published,
    Draft,
    Archived,
}

impl fmt::Display for CourseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CourseStatus::Published => write!(f, "published"),
            CourseStatus::Draft => write!(f, "draft"),
            CourseStatus::Archived => write!(f, "archived"),
        }
    }
}

/// Kind of lecture material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LectureType {
    #[default]
    Video,
    Pdf,
    Quiz,
}

impl fmt::Display for LectureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LectureType::Video => write!(f, "video"),
            LectureType::Pdf => write!(f, "pdf"),
            LectureType::Quiz => write!(f, "quiz"),
        }
    }
}

/// A course shown on the dashboard.
///
/// `students`, `lectures` and `revenue` are derived from the stored
/// collections by the aggregator and are never set anywhere else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Course identifier.
    pub id: u32,
    /// Course title.
    pub title: String,
    /// Subject category.
    pub category: String,
    /// Publication status.
    pub status: CourseStatus,
    /// Average rating (0.0 - 5.0).
    pub rating: f32,
    /// Date the course was last updated, already formatted for display.
    pub last_updated: String,
    /// Number of enrolled students (derived).
    pub students: usize,
    /// Number of uploaded lectures (derived).
    pub lectures: usize,
    /// Revenue from enrollments (derived).
    pub revenue: u64,
}

impl Course {
    /// Creates a course with all derived fields zeroed.
    pub fn new(
        id: u32,
        title: impl Into<String>,
        category: impl Into<String>,
        status: CourseStatus,
        rating: f32,
        last_updated: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            category: category.into(),
            status,
            rating,
            last_updated: last_updated.into(),
            students: 0,
            lectures: 0,
            revenue: 0,
        }
    }
}

/// A lecture record as persisted under `courseLectures`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredLecture {
    pub id: RecordId,
    pub title: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub upload_date: String,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<LectureType>,
}

/// A lecture prepared for display, with synthesized engagement numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lecture {
    pub id: RecordId,
    pub title: String,
    pub duration: String,
    pub upload_date: String,
    /// Synthesized view count; not backed by real tracking data.
    pub views: u32,
    /// Synthesized completion count; not backed by real tracking data.
    pub students_completed: u32,
    pub kind: LectureType,
}

/// An enrolled student as persisted under `enrolledStudents`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub email: String,
    /// Course progress in percent (0 - 100).
    pub progress: f64,
    #[serde(default)]
    pub last_active: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
}

impl Student {
    /// Progress clamped into the displayable 0 - 100 range.
    pub fn progress_percent(&self) -> f64 {
        self.progress.clamp(0.0, 100.0)
    }
}

/// The signed-in user as persisted under `user`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    #[serde(default)]
    pub email: String,
}
