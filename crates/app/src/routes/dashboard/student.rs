use client::DashboardOutcome;
use dioxus::prelude::*;
use shared_types::{format_score, LoadState, StudentDashboard as StudentData};
use shared_ui::{
    Badge, BadgeVariant, Card, CardContent, CardHeader, CardTitle, DataTable, DataTableBody,
    DataTableCell, DataTableColumn, DataTableEmpty, DataTableHeader, DataTableRow, DetailItem,
    DetailList, PageHeader, PageSubtitle, PageTitle, StatCard, StatGrid,
};

use super::{use_follow_up, AccessDenied, DashboardError, DashboardLoading, Screen};
use crate::format_helpers::{credits_label, major_text, score_text, text_or_dash};
use crate::{use_portal, Portal};

/// Open the dashboard for whoever the store holds right now. Reading the
/// store does not subscribe, so signing out does not re-run the fetch.
async fn load(portal: &Portal) -> DashboardOutcome<StudentData> {
    let session = portal.auth.current_session();
    portal.dashboards.open_student(session.as_ref()).await
}

/// Grades, GPA and credits of the signed-in student.
#[component]
pub fn StudentDashboard() -> Element {
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
            Screen::Data(LoadState::Loaded(data)) => rsx! { StudentView { data } },
        }
    }
}

#[component]
fn StudentView(data: StudentData) -> Element {
    let summary = data.summary();
    let name = text_or_dash(data.student.name.as_deref());

    rsx! {
        div { class: "dashboard-page",
            PageHeader {
                PageTitle { "Student Dashboard" }
                PageSubtitle { "Welcome back, {name}" }
            }

            StatGrid {
                StatCard { label: "GPA", value: format_score(summary.gpa), hint: "average final grade" }
                StatCard { label: "Total Courses", value: summary.total_courses.to_string() }
                StatCard { label: "Total Credits", value: summary.total_credits.to_string() }
            }

            Card { class: "dashboard-section",
                CardHeader { CardTitle { "Profile" } }
                CardContent {
                    DetailList {
                        DetailItem { label: "Name", value: name.clone() }
                        DetailItem { label: "Email", value: text_or_dash(data.student.email.as_deref()) }
                        DetailItem { label: "Major", value: major_text(data.student.major.as_deref()) }
                    }
                }
            }

            Card { class: "dashboard-section",
                CardHeader { CardTitle { "Grades" } }
                CardContent {
                    if data.grades.is_empty() {
                        DataTableEmpty { "No grades recorded yet." }
                    } else {
                        DataTable {
                            DataTableHeader {
                                DataTableColumn { "Code" }
                                DataTableColumn { "Course" }
                                DataTableColumn { "Credits" }
                                DataTableColumn { "Instructor" }
                                DataTableColumn { "Assignment" }
                                DataTableColumn { "Midterm" }
                                DataTableColumn { "Final" }
                                DataTableColumn { "Final Grade" }
                                DataTableColumn { "Letter" }
                                DataTableColumn { "Points" }
                            }
                            DataTableBody {
                                for (index, grade) in data.grades.iter().enumerate() {
                                    DataTableRow { key: "{index}",
                                        DataTableCell { {text_or_dash(grade.course_code.as_deref())} }
                                        DataTableCell { {text_or_dash(grade.course_name.as_deref())} }
                                        DataTableCell { {credits_label(grade.course_credits)} }
                                        DataTableCell { {text_or_dash(grade.instructor_name.as_deref())} }
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
                                        DataTableCell { {format_score(grade.grade_point_value())} }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
