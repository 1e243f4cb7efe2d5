use axum::{http::StatusCode, Router};
use client::{
    auth::REGISTER_PATH,
    forms::{after_registration, submit_registration},
};
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{AppErrorKind, AppPath, RegisterForm, UserRole};

use crate::common::{self, MockBackend};

fn form(email: &str) -> RegisterForm {
    RegisterForm {
        email: email.into(),
        full_name: "  Budi Santoso ".into(),
        major: "business_mathematics".into(),
        role: UserRole::Instructor,
        password: "secret123".into(),
        password_confirmation: "secret123".into(),
    }
}

#[tokio::test]
async fn registration_sends_normalized_body() {
    let backend = MockBackend::start(
        Router::new().route(REGISTER_PATH, common::reply(StatusCode::CREATED, json!({}))),
    )
    .await;
    let auth = backend.auth();

    let user = submit_registration(&auth, &form(" Budi.S@Prasetiyamulya.ac.id "))
        .await
        .unwrap();

    let requests = backend.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "POST");
    assert_eq!(
        requests[0].body,
        Some(json!({
            "username": "budi.s",
            "email": "budi.s@prasetiyamulya.ac.id",
            "full_name": "Budi Santoso",
            "major": "business_mathematics",
            "role": "instructor",
            "password": "secret123",
            "password_confirmation": "secret123",
        }))
    );
    assert_eq!(user.username, "budi.s");
    assert_eq!(user.role, UserRole::Instructor);
    assert_eq!(after_registration(), AppPath::Login);
    // Registering does not sign the user in.
    assert_eq!(auth.current_session(), None);
}

#[tokio::test]
async fn echoed_account_is_returned() {
    let backend = MockBackend::start(Router::new().route(
        REGISTER_PATH,
        common::reply(
            StatusCode::CREATED,
            json!({
                "email": "s@student.prasetiyamulya.ac.id",
                "username": "s",
                "full_name": "S",
                "major": "business_mathematics",
                "role": "Mahasiswa",
            }),
        ),
    ))
    .await;

    let user = submit_registration(&backend.auth(), &form("s@student.prasetiyamulya.ac.id"))
        .await
        .unwrap();

    assert_eq!(user.role, UserRole::Student);
    assert_eq!(user.full_name.as_deref(), Some("S"));
}

#[tokio::test]
async fn field_errors_are_labelled() {
    let backend = MockBackend::start(Router::new().route(
        REGISTER_PATH,
        common::reply(
            StatusCode::BAD_REQUEST,
            json!({ "email": ["already registered"] }),
        ),
    ))
    .await;

    let err = submit_registration(&backend.auth(), &form("a@prasetiyamulya.ac.id"))
        .await
        .unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Backend);
    assert_eq!(err.status, Some(400));
    assert_eq!(err.user_message(), "Email: already registered");
}

#[tokio::test]
async fn foreign_domain_never_reaches_backend() {
    let backend = MockBackend::start(
        Router::new().route(REGISTER_PATH, common::reply(StatusCode::CREATED, json!({}))),
    )
    .await;

    let err = submit_registration(&backend.auth(), &form("a@gmail.com"))
        .await
        .unwrap_err();

    assert!(err.is_validation());
    assert_eq!(
        err.user_message(),
        "Email must use the @student.prasetiyamulya.ac.id or @prasetiyamulya.ac.id domain"
    );
    assert_eq!(backend.request_count(), 0);
}

#[tokio::test]
async fn mismatched_confirmation_never_reaches_backend() {
    let backend = MockBackend::start(
        Router::new().route(REGISTER_PATH, common::reply(StatusCode::CREATED, json!({}))),
    )
    .await;
    let draft = RegisterForm {
        password_confirmation: "secret124".into(),
        ..form("a@prasetiyamulya.ac.id")
    };

    let err = submit_registration(&backend.auth(), &draft).await.unwrap_err();

    assert_eq!(err.user_message(), "Password confirmation doesn't match");
    assert_eq!(backend.request_count(), 0);
}
