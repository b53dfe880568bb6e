//! Dashboard rendering.
//!
//! This module renders the dashboard view model as Markdown, one
//! section per [`ActiveView`], or as JSON.

use crate::dashboard::{ActiveView, DashboardViewModel, Overview, Page, Session};
use crate::models::{Course, Lecture, Student};
use anyhow::Result;

/// Placeholder shown when no lectures are stored.
pub const NO_LECTURES: &str = "No lectures uploaded yet";
/// Placeholder shown when no students are stored.
pub const NO_STUDENTS: &str = "No students enrolled yet";

/// Render the section selected in `session`.
pub fn generate_markdown(view_model: &DashboardViewModel, session: &Session) -> String {
    let mut output = String::new();

    output.push_str(&generate_header(view_model, session));

    match session.active_view() {
        ActiveView::Overview => output.push_str(&generate_overview(view_model)),
        ActiveView::Courses => output.push_str(&generate_courses_section(&view_model.courses)),
        ActiveView::Lectures => {
            output.push_str(&generate_lectures_section(&view_model.recent_lectures))
        }
        ActiveView::Students => {
            output.push_str(&generate_students_section(&view_model.top_students))
        }
    }

    output
}

/// Navigation bar, profile menu and sidebar.
fn generate_header(view_model: &DashboardViewModel, session: &Session) -> String {
    let mut header = String::new();

    header.push_str(&format!("**CourseDash** | {}\n\n", view_model.instructor));

    if session.profile_menu_open() {
        if let Some(ref user) = view_model.user {
            header.push_str(&format!("> {} <{}>\n>\n", user.name, user.email));
        }
        header.push_str("> Sign out\n\n");
    }

    let tabs: Vec<String> = ActiveView::ALL
        .iter()
        .map(|view| {
            if *view == session.active_view() {
                format!("**{}**", view.label())
            } else {
                view.label().to_string()
            }
        })
        .collect();
    header.push_str(&tabs.join(" | "));
    header.push_str("\n\n");

    header
}

fn generate_overview(view_model: &DashboardViewModel) -> String {
    let mut section = String::new();

    section.push_str("# Dashboard Overview\n\n");
    section.push_str(&format!(
        "Welcome back, {}! Here's what's happening with your courses.\n\n",
        view_model.instructor
    ));

    section.push_str(&generate_totals_table(&view_model.overview));

    section.push_str("## My Courses\n\n");
    for course in &view_model.courses {
        section.push_str(&generate_course_summary(course));
    }

    section.push_str("## Recent Lectures\n\n");
    if view_model.recent_lectures.is_empty() {
        section.push_str(&format!("_{}_\n\n", NO_LECTURES));
    } else {
        for lecture in &view_model.recent_lectures {
            section.push_str(&format!(
                "- **{}** ({}) - {} views, uploaded {}\n",
                lecture.title, lecture.duration, lecture.views, lecture.upload_date
            ));
        }
        section.push('\n');
    }

    section.push_str("## Top Students\n\n");
    if view_model.top_students.is_empty() {
        section.push_str(&format!("_{}_\n\n", NO_STUDENTS));
    } else {
        for student in &view_model.top_students {
            section.push_str(&format!(
                "- **{}** <{}> - {}% (active {})\n",
                student.name,
                student.email,
                student.progress_percent(),
                student.last_active
            ));
        }
        section.push('\n');
    }

    section
}

fn generate_totals_table(overview: &Overview) -> String {
    let mut table = String::new();

    table.push_str("| Total Courses | Total Students | Lectures | Total Revenue |\n");
    table.push_str("|:---:|:---:|:---:|:---:|\n");
    table.push_str(&format!(
        "| {} | {} | {} | ${} |\n",
        overview.total_courses,
        overview.total_students,
        overview.total_lectures,
        overview.total_revenue
    ));
    table.push_str(&format!(
        "| {} Published | Active enrollments | Total uploaded | From enrollments |\n\n",
        overview.published_courses
    ));

    table
}

/// Compact course card used on the overview.
fn generate_course_summary(course: &Course) -> String {
    format!(
        "### {}\n\n*{}* | `{}` | updated {}\n\n{} students | {} lectures | rating {:.1}\n\n",
        course.title,
        course.category,
        course.status,
        course.last_updated,
        course.students,
        course.lectures,
        course.rating
    )
}

fn generate_courses_section(courses: &[Course]) -> String {
    let mut section = String::new();

    section.push_str("# My Courses\n\n");

    for course in courses {
        section.push_str(&format!("## {}\n\n", course.title));
        section.push_str(&format!("*{}* | `{}`\n\n", course.category, course.status));
        section.push_str("| Students | Lectures | Rating | Revenue |\n");
        section.push_str("|:---:|:---:|:---:|:---:|\n");
        section.push_str(&format!(
            "| {} | {} | {:.1} | ${} |\n\n",
            course.students, course.lectures, course.rating, course.revenue
        ));
        section.push_str(&format!(
            "Manage course: `{}`\n\n",
            Page::CourseManagement.id()
        ));
    }

    section.push_str(&format!(
        "Create new course: `{}`\n",
        Page::CourseManagement.id()
    ));

    section
}

fn generate_lectures_section(lectures: &[Lecture]) -> String {
    let mut section = String::new();

    section.push_str("# Lectures\n\n");

    if lectures.is_empty() {
        section.push_str(&format!("_{}_\n\n", NO_LECTURES));
        section.push_str(&format!(
            "Upload your first lecture: `{}`\n",
            Page::CourseManagement.id()
        ));
        return section;
    }

    section.push_str("| Title | Type | Duration | Uploaded | Views | Completed |\n");
    section.push_str("|:---|:---:|:---:|:---:|:---:|:---:|\n");
    for lecture in lectures {
        section.push_str(&format!(
            "| {} | {} | {} | {} | {} | {} |\n",
            lecture.title,
            lecture.kind,
            lecture.duration,
            lecture.upload_date,
            lecture.views,
            lecture.students_completed
        ));
    }
    section.push('\n');

    section
}

fn generate_students_section(students: &[Student]) -> String {
    let mut section = String::new();

    section.push_str("# Students\n\n");

    if students.is_empty() {
        section.push_str(&format!("_{}_\n", NO_STUDENTS));
        return section;
    }

    section.push_str("| Name | Email | Progress | Last Active | Grade |\n");
    section.push_str("|:---|:---|:---:|:---:|:---:|\n");
    for student in students {
        section.push_str(&format!(
            "| {} | {} | {}% | {} | {} |\n",
            student.name,
            student.email,
            student.progress_percent(),
            student.last_active,
            student.grade.as_deref().unwrap_or("-")
        ));
    }
    section.push('\n');

    section
}

/// Serialize the full view model as pretty JSON.
pub fn generate_json(view_model: &DashboardViewModel) -> Result<String> {
    serde_json::to_string_pretty(view_model).map_err(Into::into)
}
