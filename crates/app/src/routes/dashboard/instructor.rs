use client::DashboardOutcome;
use dioxus::prelude::*;
use shared_types::{format_score, CourseRecord, InstructorDashboard as InstructorData, LoadState};
use shared_ui::{
    Badge, BadgeVariant, Card, CardContent, CardDescription, CardHeader, CardTitle, DataTable,
    DataTableBody, DataTableCell, DataTableColumn, DataTableEmpty, DataTableHeader, DataTableRow,
    DetailItem, DetailList, PageHeader, PageSubtitle, PageTitle, StatCard, StatGrid,
};

use super::{use_follow_up, AccessDenied, DashboardError, DashboardLoading, Screen};
use crate::format_helpers::{credits_label, major_text, score_text, text_or_dash};
use crate::{use_portal, Portal};

/// Open the dashboard for whoever the store holds right now. Reading the
/// store does not subscribe, so signing out does not re-run the fetch.
async fn load(portal: &Portal) -> DashboardOutcome<InstructorData> {
    let session = portal.auth.current_session();
    portal.dashboards.open_instructor(session.as_ref()).await
}

/// Courses taught by the signed-in instructor with their students' grades.
#[component]
pub fn InstructorDashboard() -> Element {
    let portal = use_portal();

    let mut outcome = use_resource(move || {
        let portal = portal.clone();
        async move { load(&portal).await }
    });
    use_follow_up(outcome);

    let screen = Screen::of(Option::as_ref(&*outcome.read()));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        match screen {
            Screen::Redirecting | Screen::Data(LoadState::Loading) => rsx! { DashboardLoading {} },
            Screen::Denied(message) => rsx! { AccessDenied { message } },
            Screen::Data(LoadState::Failed(error)) => rsx! {
                DashboardError {
                    error,
                    on_retry: move |_| outcome.restart(),
                }
            },
            Screen::Data(LoadState::Loaded(data)) => rsx! { InstructorView { data } },
        }
    }
}

#[component]
fn InstructorView(data: InstructorData) -> Element {
    let summary = data.summary();
    let name = text_or_dash(data.instructor.full_name.as_deref());

    rsx! {
        div { class: "dashboard-page",
            PageHeader {
                PageTitle { "Instructor Dashboard" }
                PageSubtitle { "Welcome back, {name}" }
            }

            StatGrid {
                StatCard { label: "Total Courses", value: summary.total_courses.to_string() }
                StatCard { label: "Total Students", value: summary.total_students.to_string() }
                StatCard { label: "Total Credits", value: summary.total_credits.to_string() }
                StatCard { label: "Average Score", value: format_score(summary.average_score) }
            }

            Card { class: "dashboard-section",
                CardHeader { CardTitle { "Profile" } }
                CardContent {
                    DetailList {
                        DetailItem { label: "Name", value: name.clone() }
                        DetailItem { label: "Email", value: text_or_dash(data.instructor.email.as_deref()) }
                        DetailItem { label: "Major", value: major_text(data.instructor.major.as_deref()) }
                    }
                }
            }

            if data.courses.is_empty() {
                Card { class: "dashboard-section",
                    CardContent {
                        DataTableEmpty { "You are not teaching any courses yet." }
                    }
                }
            }
            for (index, course) in data.courses.iter().enumerate() {
                CourseCard { key: "{index}", course: course.clone() }
            }
        }
    }
}

#[component]
fn CourseCard(course: CourseRecord) -> Element {
    let title = match (course.code.trim(), course.name.trim()) {
        ("", name) => name.to_string(),
        (code, "") => code.to_string(),
        (code, name) => format!("{code} - {name}"),
    };
    let mut details = vec![credits_label(course.credits)];
    if !course.semester.trim().is_empty() {
        details.push(format!("Semester {}", course.semester.trim()));
    }
    details.push(format!("{} students", course.student_count()));
    let details = details.join(" | ");
    let average = format_score(course.average_final_grade());

    rsx! {
        Card { class: "dashboard-section",
            CardHeader {
                CardTitle { "{title}" }
                CardDescription { "{details}" }
            }
            CardContent {
                if course.grades.is_empty() {
                    DataTableEmpty { "No students enrolled." }
                } else {
                    DataTable {
                        DataTableHeader {
                            DataTableColumn { "Student" }
                            DataTableColumn { "Assignment" }
                            DataTableColumn { "Midterm" }
                            DataTableColumn { "Final" }
                            DataTableColumn { "Final Grade" }
                            DataTableColumn { "Letter" }
                        }
                        DataTableBody {
                            for (index, grade) in course.grades.iter().enumerate() {
                                DataTableRow { key: "{index}",
                                    DataTableCell { {text_or_dash(grade.student_name.as_deref())} }
                                    DataTableCell { {score_text(grade.assignment_score.as_ref())} }
                                    DataTableCell { {score_text(grade.midterm_score.as_ref())} }
                                    DataTableCell { {score_text(grade.final_score.as_ref())} }
                                    DataTableCell { {score_text(grade.final_grade.as_ref())} }
                                    DataTableCell {
                                        Badge {
                                            variant: BadgeVariant::Outline,
                                            class: grade.tier().css_class().to_string(),
                                            {text_or_dash(grade.letter_grade.as_deref())}
                                        }
                                    }
                                }
                            }
                        }
                    }
                    p { class: "dashboard-course-average", "Course average: {average}" }
                }
            }
        }
    }
}
