//! Course statistics and ranked views.
//!
//! This module turns the raw stored collections into the derived
//! numbers shown on the dashboard: per-course counts and revenue, the
//! most recent lectures and the students furthest along.

use crate::models::{Course, Lecture, StoredLecture, Student, REVENUE_PER_STUDENT};
use rand::Rng;

/// Upper bound (exclusive) for synthesized lecture views.
pub const MAX_SYNTHETIC_VIEWS: u32 = 100;
/// Upper bound (exclusive) for synthesized lecture completions.
pub const MAX_SYNTHETIC_COMPLETIONS: u32 = 80;

/// Statistics derived from the stored collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CourseStats {
    pub lecture_count: usize,
    pub student_count: usize,
    pub revenue: u64,
}

/// Count lectures and students and derive revenue from enrollments.
pub fn compute_course_stats(lectures: &[StoredLecture], students: &[Student]) -> CourseStats {
    CourseStats {
        lecture_count: lectures.len(),
        student_count: students.len(),
        revenue: revenue_for(students.len()),
    }
}

/// Revenue earned by `student_count` enrollments.
pub fn revenue_for(student_count: usize) -> u64 {
    student_count as u64 * REVENUE_PER_STUDENT
}

/// Apply the same statistics to every course in the set.
///
/// Stored lectures and students are not partitioned per course, so each
/// course is credited with the full collections.
pub fn apply_course_stats(courses: &[Course], stats: CourseStats) -> Vec<Course> {
    courses
        .iter()
        .map(|course| Course {
            lectures: stats.lecture_count,
            students: stats.student_count,
            revenue: stats.revenue,
            ..course.clone()
        })
        .collect()
}

/// Get the top N students by progress.
///
/// Students with equal progress keep their stored order.
pub fn top_students(students: &[Student], n: usize) -> Vec<Student> {
    let mut sorted: Vec<Student> = students.to_vec();
    // `sort_by` is stable, which preserves insertion order on ties.
    sorted.sort_by(|a, b| b.progress.total_cmp(&a.progress));
    sorted.truncate(n);
    sorted
}

/// Supplies engagement numbers for a lecture.
///
/// No tracking pipeline exists yet, so the production source is random.
pub trait EngagementSource {
    fn views(&mut self, lecture: &StoredLecture) -> u32;
    fn completions(&mut self, lecture: &StoredLecture) -> u32;
}

/// Placeholder engagement backed by a random number generator.
#[derive(Debug)]
pub struct RandomEngagement<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomEngagement<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> EngagementSource for RandomEngagement<R> {
    fn views(&mut self, _lecture: &StoredLecture) -> u32 {
        self.rng.gen_range(0..MAX_SYNTHETIC_VIEWS)
    }

    fn completions(&mut self, _lecture: &StoredLecture) -> u32 {
        self.rng.gen_range(0..MAX_SYNTHETIC_COMPLETIONS)
    }
}

/// Take the first N lectures in stored order and attach engagement numbers.
pub fn recent_lectures<E: EngagementSource + ?Sized>(
    lectures: &[StoredLecture],
    n: usize,
    engagement: &mut E,
) -> Vec<Lecture> {
    lectures
        .iter()
        .take(n)
        .map(|stored| Lecture {
            id: stored.id.clone(),
            title: stored.title.clone(),
            duration: stored.duration.clone(),
            upload_date: stored.upload_date.clone(),
            views: engagement.views(stored),
            students_completed: engagement.completions(stored),
            kind: stored.kind.unwrap_or_default(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CourseStatus, LectureType, RecordId};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    struct FixedEngagement;

    impl EngagementSource for FixedEngagement {
        fn views(&mut self, _lecture: &StoredLecture) -> u32 {
            7
        }

        fn completions(&mut self, _lecture: &StoredLecture) -> u32 {
            3
        }
    }

    fn create_test_student(id: i64, progress: f64) -> Student {
        Student {
            id: RecordId::Number(id),
            name: format!("Student {}", id),
            email: format!("s{}@example.com", id),
            progress,
            last_active: "today".to_string(),
            grade: None,
        }
    }

    fn create_test_lecture(id: &str) -> StoredLecture {
        StoredLecture {
            id: id.into(),
            title: format!("Lecture {}", id),
            duration: "10:00".to_string(),
            upload_date: "1/1/2025".to_string(),
            kind: None,
        }
    }

    fn ids(students: &[Student]) -> Vec<RecordId> {
        students.iter().map(|s| s.id.clone()).collect()
    }

    #[test]
    fn test_compute_course_stats() {
        let lectures = vec![create_test_lecture("a"), create_test_lecture("b")];
        let students = vec![
            create_test_student(1, 10.0),
            create_test_student(2, 20.0),
            create_test_student(3, 30.0),
        ];

        let stats = compute_course_stats(&lectures, &students);

        assert_eq!(stats.lecture_count, 2);
        assert_eq!(stats.student_count, 3);
        assert_eq!(stats.revenue, 30);
    }

    #[test]
    fn test_revenue_is_ten_per_student() {
        for count in [0usize, 1, 7, 250] {
            assert_eq!(revenue_for(count), count as u64 * 10);
        }
        assert_eq!(compute_course_stats(&[], &[]), CourseStats::default());
    }

    #[test]
    fn test_apply_course_stats_to_every_course() {
        let courses = vec![
            Course::new(1, "One", "CS", CourseStatus::Published, 5.0, "today"),
            Course::new(2, "Two", "Math", CourseStatus::Draft, 4.0, "today"),
        ];
        let stats = CourseStats {
            lecture_count: 4,
            student_count: 2,
            revenue: 20,
        };

        let updated = apply_course_stats(&courses, stats);

        assert_eq!(updated.len(), 2);
        for course in &updated {
            assert_eq!(course.lectures, 4);
            assert_eq!(course.students, 2);
            assert_eq!(course.revenue, 20);
        }
        assert_eq!(updated[1].title, "Two");
        assert_eq!(updated[1].status, CourseStatus::Draft);
    }

    #[test]
    fn test_top_students_is_stable() {
        let students = vec![
            create_test_student(1, 50.0),
            create_test_student(2, 90.0),
            create_test_student(3, 90.0),
        ];

        let top = top_students(&students, 2);

        assert_eq!(ids(&top), vec![RecordId::Number(2), RecordId::Number(3)]);
    }

    #[test]
    fn test_top_students_keeps_order_among_many_ties() {
        let students: Vec<Student> = (1..=6).map(|id| create_test_student(id, 75.0)).collect();

        let top = top_students(&students, 4);

        assert_eq!(
            ids(&top),
            (1..=4).map(RecordId::Number).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_top_students_fewer_than_n() {
        let students = vec![create_test_student(1, 10.0), create_test_student(2, 60.0)];
        let top = top_students(&students, 4);
        assert_eq!(ids(&top), vec![RecordId::Number(2), RecordId::Number(1)]);
        assert!(top_students(&[], 4).is_empty());
    }

    #[test]
    fn test_recent_lectures_keeps_stored_order() {
        let lectures: Vec<StoredLecture> = ["z", "a", "m", "b", "c"]
            .iter()
            .map(|id| create_test_lecture(id))
            .collect();

        let recent = recent_lectures(&lectures, 4, &mut FixedEngagement);

        let titles: Vec<_> = recent.iter().map(|l| l.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Lecture z", "Lecture a", "Lecture m", "Lecture b"]
        );
        assert!(recent.iter().all(|l| l.views == 7 && l.students_completed == 3));
    }

    #[test]
    fn test_recent_lectures_fewer_than_n() {
        let lectures = vec![create_test_lecture("1"), create_test_lecture("2")];
        let recent = recent_lectures(&lectures, 4, &mut FixedEngagement);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].id, RecordId::from("1"));
        assert_eq!(recent[1].id, RecordId::from("2"));
    }

    #[test]
    fn test_recent_lectures_type_defaults_to_video() {
        let mut quiz = create_test_lecture("q");
        quiz.kind = Some(LectureType::Quiz);
        let lectures = vec![create_test_lecture("v"), quiz];

        let recent = recent_lectures(&lectures, 4, &mut FixedEngagement);

        assert_eq!(recent[0].kind, LectureType::Video);
        assert_eq!(recent[1].kind, LectureType::Quiz);
    }

    #[test]
    fn test_random_engagement_stays_in_range() {
        let lectures: Vec<StoredLecture> =
            (0..50).map(|i| create_test_lecture(&i.to_string())).collect();
        let mut engagement = RandomEngagement::new(StdRng::seed_from_u64(42));

        let recent = recent_lectures(&lectures, lectures.len(), &mut engagement);

        assert_eq!(recent.len(), 50);
        for lecture in &recent {
            assert!(lecture.views < MAX_SYNTHETIC_VIEWS);
            assert!(lecture.students_completed < MAX_SYNTHETIC_COMPLETIONS);
        }
    }
}
