use axum::{http::StatusCode, Router};
use client::{
    dashboard::{INSTRUCTOR_DASHBOARD_PATH, STUDENT_DASHBOARD_PATH},
    guard, DashboardOutcome, GuardDecision,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{format_score, AppErrorKind, AppPath, SessionRecord, UserRole};

use crate::common::{self, MockBackend};

fn session(email: &str, role: UserRole) -> SessionRecord {
    SessionRecord {
        email: email.into(),
        role,
        token: "tok".into(),
        full_name: None,
        major: None,
    }
}

fn student_body() -> serde_json::Value {
    json!({
        "student": {
            "name": "Sari",
            "email": "sari+1@student.prasetiyamulya.ac.id",
            "major": "business_mathematics",
        },
        "statistics": { "total_courses": 3, "gpa": 3.2, "total_credits": 9 },
        "grades": [
            { "id": 1, "course_code": "MAT101", "course_name": "Calculus", "course_credits": 3,
              "final_grade": "3.5", "letter_grade": "A-" },
            { "id": 2, "course_code": "MAT102", "course_name": "Algebra", "course_credits": 3,
              "final_grade": "invalid", "letter_grade": "B" },
            { "id": 3, "course_code": "MAT103", "course_name": "Statistics", "course_credits": 2,
              "final_grade": "4.0", "letter_grade": "A" },
        ],
    })
}

#[tokio::test]
async fn no_session_redirects_without_fetching() {
    let backend = MockBackend::start(Router::new().route(
        STUDENT_DASHBOARD_PATH,
        common::reply(StatusCode::OK, student_body()),
    ))
    .await;

    let outcome = backend.dashboards().open_student(None).await;

    assert_eq!(outcome, DashboardOutcome::RedirectToLogin);
    assert_eq!(backend.request_count(), 0);
    assert_eq!(
        guard::protected(None, None),
        GuardDecision::Redirect(AppPath::Login)
    );
}

#[tokio::test]
async fn student_on_instructor_dashboard_is_denied_without_fetching() {
    let backend = MockBackend::start(Router::new().route(
        INSTRUCTOR_DASHBOARD_PATH,
        common::reply(StatusCode::OK, json!({ "courses": [] })),
    ))
    .await;
    let student = session("s@student.prasetiyamulya.ac.id", UserRole::Student);

    let outcome = backend.dashboards().open_instructor(Some(&student)).await;

    assert_eq!(
        outcome,
        DashboardOutcome::AccessDenied {
            message: "Access denied: This dashboard is only for instructors.".into(),
            redirect: AppPath::StudentDashboard,
        }
    );
    assert_eq!(backend.request_count(), 0);
    assert_eq!(
        guard::protected(Some(&student), Some(UserRole::Instructor)),
        GuardDecision::Redirect(AppPath::Login)
    );
}

#[tokio::test]
async fn student_dashboard_is_fetched_for_the_session_email() {
    let backend = MockBackend::start(Router::new().route(
        STUDENT_DASHBOARD_PATH,
        common::reply(StatusCode::OK, student_body()),
    ))
    .await;
    let student = session("sari+1@student.prasetiyamulya.ac.id", UserRole::Student);

    let outcome = backend.dashboards().open_student(Some(&student)).await;

    let requests = backend.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(
        requests[0].uri,
        "/api/dashboard/student/?email=sari%2B1%40student.prasetiyamulya.ac.id"
    );

    let DashboardOutcome::Loaded(data) = outcome else {
        panic!("expected a loaded dashboard, got {outcome:?}");
    };
    let summary = data.summary();
    assert_eq!(summary.gpa, Some(3.75));
    assert_eq!(format_score(summary.gpa), "3.75");
    assert_eq!(summary.total_courses, 3);
    assert_eq!(summary.total_credits, 8);
    assert_eq!(data.student.name.as_deref(), Some("Sari"));
}

#[tokio::test]
async fn student_without_grades_shows_no_gpa() {
    let backend = MockBackend::start(Router::new().route(
        STUDENT_DASHBOARD_PATH,
        common::reply(StatusCode::OK, json!({ "student": {}, "grades": "n/a" })),
    ))
    .await;
    let student = session("s@student.prasetiyamulya.ac.id", UserRole::Student);

    let data = backend.dashboards().student(&student.email).await.unwrap();

    assert!(data.grades.is_empty());
    assert_eq!(format_score(data.summary().gpa), "N/A");
}

#[tokio::test]
async fn instructor_dashboard_aggregates_courses() {
    let backend = MockBackend::start(Router::new().route(
        INSTRUCTOR_DASHBOARD_PATH,
        common::reply(
            StatusCode::OK,
            json!({
                "instructor": { "full_name": "Dr. Ani", "email": "ani@prasetiyamulya.ac.id" },
                "courses": [
                    { "name": "Calculus", "code": "MAT101", "credits": 3, "semester": 1,
                      "grades": [ { "final_grade": 80 }, { "final_grade": "90.00" } ] },
                    { "name": "Ethics", "code": "GEN200", "credits": 2, "semester": "2",
                      "grades": [] },
                ],
            }),
        ),
    ))
    .await;
    let instructor = session("ani@prasetiyamulya.ac.id", UserRole::Instructor);

    let outcome = backend.dashboards().open_instructor(Some(&instructor)).await;

    let DashboardOutcome::Loaded(data) = outcome else {
        panic!("expected a loaded dashboard, got {outcome:?}");
    };
    let summary = data.summary();
    assert_eq!(summary.total_courses, 2);
    assert_eq!(summary.total_students, 2);
    assert_eq!(summary.total_credits, 5);
    assert_eq!(summary.average_score, Some(85.0));
    assert_eq!(data.courses[0].semester, "1");
    assert_eq!(data.courses[1].average_final_grade(), None);
    assert_eq!(
        backend.requests()[0].uri,
        "/api/dashboard/instructor/?email=ani%40prasetiyamulya.ac.id"
    );
}

#[tokio::test]
async fn expired_token_surfaces_as_unauthorized() {
    let backend = MockBackend::start(Router::new().route(
        STUDENT_DASHBOARD_PATH,
        common::reply(
            StatusCode::UNAUTHORIZED,
            json!({ "detail": "Authentication credentials were not provided." }),
        ),
    ))
    .await;
    let student = session("s@student.prasetiyamulya.ac.id", UserRole::Student);

    let outcome = backend.dashboards().open_student(Some(&student)).await;

    let DashboardOutcome::Failed(err) = outcome else {
        panic!("expected a failure, got {outcome:?}");
    };
    assert!(err.is_unauthorized());
    assert_eq!(err.user_message(), "Authentication credentials were not provided.");
}

#[tokio::test]
async fn undecodable_dashboard_is_a_decode_failure() {
    let backend = MockBackend::start(Router::new().route(
        STUDENT_DASHBOARD_PATH,
        common::reply(StatusCode::OK, json!({ "student": "not an object" })),
    ))
    .await;

    let err = backend
        .dashboards()
        .student("s@student.prasetiyamulya.ac.id")
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Decode);
}
