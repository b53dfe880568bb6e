//! Instructor dashboard assembly.
//!
//! [`load_dashboard`] runs one full load: read the store, aggregate,
//! and build the view model.

pub mod session;
pub mod view_model;

pub use session::{logout_and_persist, ActiveView, LoggingNavigator, Page, Session};
pub use view_model::{DashboardViewModel, ListLimits, Overview};

use crate::analysis::{
    apply_course_stats, compute_course_stats, recent_lectures, top_students, EngagementSource,
};
use crate::models::Course;
use crate::store::{KeyValueStore, StoreReader};
use tracing::debug;

/// Build the dashboard for `courses` from the contents of `store`.
pub fn load_dashboard<S, E>(
    store: &S,
    courses: &[Course],
    limits: ListLimits,
    engagement: &mut E,
) -> DashboardViewModel
where
    S: KeyValueStore + ?Sized,
    E: EngagementSource + ?Sized,
{
    let reader = StoreReader::new(store);
    let user = reader.read_user();
    let lectures = reader.read_lectures();
    let students = reader.read_students();

    debug!(
        "Read {} lectures and {} students from store",
        lectures.len(),
        students.len()
    );

    let stats = compute_course_stats(&lectures, &students);
    let courses = apply_course_stats(courses, stats);
    let recent = recent_lectures(&lectures, limits.recent_lectures, engagement);
    let top = top_students(&students, limits.top_students);

    let view_model = DashboardViewModel::build(user, courses, recent, top, limits);

    debug!(
        "Dashboard totals: {} courses, {} students, {} lectures, revenue {}",
        view_model.overview.total_courses,
        view_model.overview.total_students,
        view_model.overview.total_lectures,
        view_model.overview.total_revenue
    );

    view_model
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::RandomEngagement;
    use crate::models::{CourseStatus, RecordId};
    use crate::store::{MemoryStore, LECTURES_KEY, STUDENTS_KEY, USER_KEY};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn catalogue() -> Vec<Course> {
        vec![Course::new(
            1,
            "Introduction to Computer Technology",
            "Computer Science",
            CourseStatus::Published,
            5.0,
            "1/1/2025",
        )]
    }

    fn engagement() -> RandomEngagement<StdRng> {
        RandomEngagement::new(StdRng::seed_from_u64(7))
    }

    fn populated_store() -> MemoryStore {
        MemoryStore::new()
            .with(USER_KEY, r#"{"name":"Grace","email":"grace@example.com"}"#)
            .with(
                LECTURES_KEY,
                r#"[
                    {"id":"1","title":"Binary","duration":"10:00","uploadDate":"1/2/2025"},
                    {"id":"2","title":"Logic Gates","duration":"12:00","uploadDate":"1/3/2025"},
                    {"id":"3","title":"CPUs","duration":"15:00","uploadDate":"1/4/2025"},
                    {"id":"4","title":"Memory","duration":"9:00","uploadDate":"1/5/2025"},
                    {"id":"5","title":"Networks","duration":"20:00","uploadDate":"1/6/2025"}
                ]"#,
            )
            .with(
                STUDENTS_KEY,
                r#"[
                    {"id":1,"name":"Ada","email":"ada@example.com","progress":50,"lastActive":"today"},
                    {"id":2,"name":"Alan","email":"alan@example.com","progress":90,"lastActive":"today"},
                    {"id":3,"name":"Barbara","email":"barbara@example.com","progress":90,"lastActive":"today","grade":"A"}
                ]"#,
            )
    }

    #[test]
    fn test_load_populated_store() {
        let store = populated_store();

        let vm = load_dashboard(&store, &catalogue(), ListLimits::default(), &mut engagement());

        assert_eq!(vm.instructor, "Grace");
        assert_eq!(vm.overview.total_courses, 1);
        assert_eq!(vm.overview.published_courses, 1);
        assert_eq!(vm.overview.total_students, 3);
        assert_eq!(vm.overview.total_lectures, 5);
        assert_eq!(vm.overview.total_revenue, 30);
        assert_eq!(vm.recent_lectures.len(), 4);
        assert_eq!(vm.recent_lectures[0].title, "Binary");
        assert_eq!(
            vm.top_students.iter().map(|s| s.id.clone()).collect::<Vec<_>>(),
            vec![RecordId::Number(2), RecordId::Number(3), RecordId::Number(1)]
        );
    }

    #[test]
    fn test_total_students_matches_course_sum() {
        let store = populated_store();
        let mut courses = catalogue();
        courses.push(Course::new(2, "Second", "Math", CourseStatus::Draft, 4.0, "today"));

        let vm = load_dashboard(&store, &courses, ListLimits::default(), &mut engagement());

        let sum: usize = vm.courses.iter().map(|c| c.students).sum();
        assert_eq!(vm.overview.total_students, sum);
        assert_eq!(vm.overview.total_students, 6);
        assert_eq!(vm.overview.published_courses, 1);
        for course in &vm.courses {
            assert_eq!(course.revenue, course.students as u64 * 10);
        }
    }

    #[test]
    fn test_empty_store() {
        let store = MemoryStore::new();

        let vm = load_dashboard(&store, &catalogue(), ListLimits::default(), &mut engagement());

        assert_eq!(vm.instructor, "Instructor");
        assert_eq!(vm.overview.total_courses, 1);
        assert_eq!(vm.overview.total_students, 0);
        assert_eq!(vm.overview.total_lectures, 0);
        assert_eq!(vm.overview.total_revenue, 0);
        assert!(vm.recent_lectures.is_empty());
        assert!(vm.top_students.is_empty());
    }

    #[test]
    fn test_malformed_students_match_empty_store() {
        let empty = load_dashboard(
            &MemoryStore::new(),
            &catalogue(),
            ListLimits::default(),
            &mut engagement(),
        );
        let malformed = load_dashboard(
            &MemoryStore::new().with(STUDENTS_KEY, "{{ definitely not json"),
            &catalogue(),
            ListLimits::default(),
            &mut engagement(),
        );

        assert_eq!(empty, malformed);
    }

    #[test]
    fn test_repeated_loads_have_same_totals() {
        let store = populated_store();

        let first = load_dashboard(&store, &catalogue(), ListLimits::default(), &mut engagement());
        let second = load_dashboard(
            &store,
            &catalogue(),
            ListLimits::default(),
            &mut RandomEngagement::new(StdRng::seed_from_u64(99)),
        );

        assert_eq!(first.overview, second.overview);
        assert_eq!(first.top_students, second.top_students);
    }

    #[test]
    fn test_custom_limits() {
        let store = populated_store();
        let limits = ListLimits {
            recent_lectures: 2,
            top_students: 1,
        };

        let vm = load_dashboard(&store, &catalogue(), limits, &mut engagement());

        assert_eq!(vm.recent_lectures.len(), 2);
        assert_eq!(vm.top_students.len(), 1);
        assert_eq!(vm.top_students[0].name, "Alan");
        // Counts are independent of the display limits.
        assert_eq!(vm.overview.total_lectures, 5);
    }
}
