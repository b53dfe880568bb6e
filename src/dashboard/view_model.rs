//! Presentation-ready dashboard data.

use crate::models::{Course, CourseStatus, Lecture, Student, UserProfile};
use serde::{Deserialize, Serialize};

/// Name shown when no user profile is stored.
pub const DEFAULT_INSTRUCTOR_NAME: &str = "Instructor";

/// Headline totals across all courses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Overview {
    pub total_courses: usize,
    pub published_courses: usize,
    pub total_students: usize,
    pub total_lectures: usize,
    pub total_revenue: u64,
}

impl Overview {
    /// Sum the derived fields of every course.
    pub fn from_courses(courses: &[Course]) -> Self {
        Self {
            total_courses: courses.len(),
            published_courses: courses
                .iter()
                .filter(|c| c.status == CourseStatus::Published)
                .count(),
            total_students: courses.iter().map(|c| c.students).sum(),
            total_lectures: courses.iter().map(|c| c.lectures).sum(),
            total_revenue: courses.iter().map(|c| c.revenue).sum(),
        }
    }
}

/// Everything the dashboard renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardViewModel {
    /// Greeting name, falling back to [`DEFAULT_INSTRUCTOR_NAME`].
    pub instructor: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserProfile>,
    pub overview: Overview,
    pub courses: Vec<Course>,
    pub recent_lectures: Vec<Lecture>,
    pub top_students: Vec<Student>,
}

/// Caps applied to the ranked lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListLimits {
    pub recent_lectures: usize,
    pub top_students: usize,
}

impl Default for ListLimits {
    fn default() -> Self {
        Self {
            recent_lectures: 4,
            top_students: 4,
        }
    }
}

impl DashboardViewModel {
    /// Assemble the view model from aggregated data.
    ///
    /// `courses` must already carry their derived statistics and
    /// `top_students` must already be ranked.
    pub fn build(
        user: Option<UserProfile>,
        courses: Vec<Course>,
        mut recent_lectures: Vec<Lecture>,
        mut top_students: Vec<Student>,
        limits: ListLimits,
    ) -> Self {
        recent_lectures.truncate(limits.recent_lectures);
        top_students.truncate(limits.top_students);

        let instructor = user
            .as_ref()
            .map(|u| u.name.trim())
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_INSTRUCTOR_NAME)
            .to_string();

        Self {
            instructor,
            user,
            overview: Overview::from_courses(&courses),
            courses,
            recent_lectures,
            top_students,
        }
    }
}
