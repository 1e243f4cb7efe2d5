use axum::{http::StatusCode, Router};
use client::{
    auth::LOGIN_PATH,
    forms::{after_login, submit_login},
    guard, GuardDecision,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{AppErrorKind, AppPath, LoginForm, UserRole};

use crate::common::{self, MockBackend};

fn form(email: &str, password: &str) -> LoginForm {
    LoginForm {
        email: email.into(),
        password: password.into(),
    }
}

async fn backend_answering(status: StatusCode, body: serde_json::Value) -> MockBackend {
    MockBackend::start(Router::new().route(LOGIN_PATH, common::reply(status, body))).await
}

#[tokio::test]
async fn valid_login_calls_once_and_stores_session() {
    let backend = backend_answering(
        StatusCode::OK,
        json!({
            "email": "a@student.prasetiyamulya.ac.id",
            "role": "student",
            "access_token": "tok",
            "full_name": "Ann Lee",
        }),
    )
    .await;
    let auth = backend.auth();

    let session = submit_login(&auth, &form(" a@student.prasetiyamulya.ac.id ", "pw"))
        .await
        .unwrap();

    let requests = backend.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].uri, LOGIN_PATH);
    assert_eq!(
        requests[0].body,
        Some(json!({ "email": "a@student.prasetiyamulya.ac.id", "password": "pw" }))
    );
    assert_eq!(session.role, UserRole::Student);
    assert_eq!(auth.current_session(), Some(session.clone()));
    assert_eq!(after_login(&session), AppPath::StudentDashboard);
}

#[tokio::test]
async fn malformed_email_never_reaches_backend() {
    let backend = backend_answering(StatusCode::OK, json!({ "access_token": "tok" })).await;
    let auth = backend.auth();

    let err = submit_login(&auth, &form("not-an-email", "pw")).await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Validation);
    assert_eq!(err.user_message(), "Enter a valid email address");
    assert_eq!(backend.request_count(), 0);
    assert_eq!(auth.current_session(), None);
}

#[tokio::test]
async fn empty_password_never_reaches_backend() {
    let backend = backend_answering(StatusCode::OK, json!({ "access_token": "tok" })).await;

    let err = submit_login(&backend.auth(), &form("a@b.com", "")).await.unwrap_err();

    assert_eq!(err.user_message(), "Password is required");
    assert_eq!(backend.request_count(), 0);
}

#[tokio::test]
async fn synonym_role_is_stored_normalized() {
    let backend = backend_answering(
        StatusCode::OK,
        json!({ "email": "a@b.com", "role": "Dosen", "access_token": "tok" }),
    )
    .await;
    let auth = backend.auth();

    submit_login(&auth, &form("a@b.com", "pw")).await.unwrap();

    let stored = auth.current_session().unwrap();
    assert_eq!(stored.role, UserRole::Instructor);
    assert_eq!(stored.token, "tok");
    assert_eq!(
        guard::public(Some(&stored)),
        GuardDecision::Redirect(AppPath::InstructorDashboard)
    );
    assert_eq!(AppPath::InstructorDashboard.as_str(), "/dashboard/instructor");
}

#[tokio::test]
async fn nested_token_shape_is_accepted() {
    let backend = backend_answering(
        StatusCode::OK,
        json!({ "role": "mahasiswa", "token": { "access": "nested", "refresh": "r" } }),
    )
    .await;
    let auth = backend.auth();

    let session = submit_login(&auth, &form("me@b.com", "pw")).await.unwrap();

    assert_eq!(session.token, "nested");
    assert_eq!(session.email, "me@b.com");
    assert_eq!(session.role, UserRole::Student);
}

#[tokio::test]
async fn rejected_credentials_show_backend_detail() {
    let backend = backend_answering(
        StatusCode::UNAUTHORIZED,
        json!({ "detail": "Invalid email or password" }),
    )
    .await;
    let auth = backend.auth();

    let err = submit_login(&auth, &form("a@b.com", "wrong")).await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Backend);
    assert!(err.is_unauthorized());
    assert_eq!(err.user_message(), "Invalid email or password");
    assert_eq!(auth.current_session(), None);
}

#[tokio::test]
async fn response_without_token_stores_nothing() {
    let backend =
        backend_answering(StatusCode::OK, json!({ "email": "a@b.com", "role": "student" })).await;
    let auth = backend.auth();

    let err = submit_login(&auth, &form("a@b.com", "pw")).await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Decode);
    assert_eq!(backend.request_count(), 1);
    assert_eq!(auth.current_session(), None);
}

#[tokio::test]
async fn second_login_replaces_the_session() {
    let backend = backend_answering(
        StatusCode::OK,
        json!({ "role": "instructor", "access_token": "second" }),
    )
    .await;
    let auth = backend.auth();

    submit_login(&auth, &form("first@b.com", "pw")).await.unwrap();
    submit_login(&auth, &form("second@b.com", "pw")).await.unwrap();

    let stored = auth.current_session().unwrap();
    assert_eq!(stored.email, "second@b.com");
    assert_eq!(backend.request_count(), 2);
}
