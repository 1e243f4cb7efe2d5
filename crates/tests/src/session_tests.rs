use std::sync::Arc;

use axum::{http::StatusCode, Router};
use client::{
    auth::LOGIN_PATH,
    guard,
    session::SESSION_KEY,
    storage::{FileStore, MemoryStore},
    AuthService, GuardDecision, HttpClient, KeyValueStore, SessionStore,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{AppPath, UserRole};

use crate::common::{self, MockBackend};

#[tokio::test]
async fn logout_forgets_the_session() {
    let backend = MockBackend::start(Router::new().route(
        LOGIN_PATH,
        common::reply(StatusCode::OK, json!({ "role": "student", "access_token": "tok" })),
    ))
    .await;
    let auth = backend.auth();
    auth.login("a@b.com", "pw").await.unwrap();
    assert!(auth.current_session().is_some());

    auth.logout();

    assert_eq!(auth.current_session(), None);
    assert_eq!(
        guard::protected(auth.current_session().as_ref(), Some(UserRole::Student)),
        GuardDecision::Redirect(AppPath::Login)
    );
    assert_eq!(guard::public(auth.current_session().as_ref()), GuardDecision::Render);
}

#[test]
fn logout_without_backend_never_fails() {
    let auth = AuthService::new(HttpClient::new(common::UNREACHABLE, None), SessionStore::in_memory());
    auth.logout();
    auth.logout();
    assert_eq!(auth.current_session(), None);
}

#[test]
fn corrupt_stored_session_reads_as_signed_out() {
    let store = Arc::new(MemoryStore::new());
    store.set(SESSION_KEY, "[1, 2").unwrap();
    let auth = AuthService::new(
        HttpClient::new(common::UNREACHABLE, None),
        SessionStore::new(store, SESSION_KEY),
    );

    assert_eq!(auth.current_session(), None);
    assert_eq!(
        guard::protected(auth.current_session().as_ref(), None),
        GuardDecision::Redirect(AppPath::Login)
    );
}

#[tokio::test]
async fn file_backed_session_survives_a_restart() {
    let dir = std::env::temp_dir().join(format!("portal-session-{}", std::process::id()));
    let backend = MockBackend::start(Router::new().route(
        LOGIN_PATH,
        common::reply(StatusCode::OK, json!({ "role": "dosen", "access_token": "tok" })),
    ))
    .await;

    let first = AuthService::new(
        backend.http(),
        SessionStore::new(Arc::new(FileStore::new(&dir)), SESSION_KEY),
    );
    first.login("lecturer@prasetiyamulya.ac.id", "pw").await.unwrap();

    let second = AuthService::new(
        backend.http(),
        SessionStore::new(Arc::new(FileStore::new(&dir)), SESSION_KEY),
    );
    let restored = second.current_session().unwrap();
    assert_eq!(restored.role, UserRole::Instructor);
    assert_eq!(restored.email, "lecturer@prasetiyamulya.ac.id");

    second.logout();
    assert_eq!(first.current_session(), None);
    let _ = std::fs::remove_dir_all(&dir);
}
