use std::time::Duration;

use axum::{http::StatusCode, Router};
use client::HttpClient;
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::AppErrorKind;

use crate::common::{self, MockBackend};

#[tokio::test]
async fn json_body_and_content_type_are_sent() {
    let backend = MockBackend::start(
        Router::new().route("/echo", common::reply(StatusCode::OK, json!({ "ok": true }))),
    )
    .await;

    let body = backend.http().post("/echo", &json!({ "a": 1 })).await.unwrap();

    assert_eq!(body, json!({ "ok": true }));
    let requests = backend.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].content_type.as_deref(), Some("application/json"));
    assert_eq!(requests[0].body, Some(json!({ "a": 1 })));
}

#[tokio::test]
async fn get_also_sends_json_content_type() {
    let backend = MockBackend::start(
        Router::new().route("/ping", common::reply(StatusCode::OK, json!({}))),
    )
    .await;

    backend.http().get("/ping").await.unwrap();

    assert_eq!(
        backend.requests()[0].content_type.as_deref(),
        Some("application/json")
    );
}

#[tokio::test]
async fn empty_success_body_is_an_empty_object() {
    let backend =
        MockBackend::start(Router::new().route("/empty", common::reply_text(StatusCode::OK, ""))).await;

    assert_eq!(backend.http().get("/empty").await.unwrap(), json!({}));
}

#[tokio::test]
async fn non_json_success_body_is_wrapped_as_message() {
    let backend =
        MockBackend::start(Router::new().route("/text", common::reply_text(StatusCode::OK, "pong"))).await;

    assert_eq!(
        backend.http().get("/text").await.unwrap(),
        json!({ "message": "pong" })
    );
}

#[tokio::test]
async fn empty_error_body_reports_status_reason() {
    let backend = MockBackend::start(
        Router::new().route("/down", common::reply_text(StatusCode::SERVICE_UNAVAILABLE, "")),
    )
    .await;

    let err = backend.http().get("/down").await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Backend);
    assert_eq!(err.status, Some(503));
    assert_eq!(err.user_message(), "Service Unavailable");
}

#[tokio::test]
async fn html_error_page_becomes_the_message() {
    let backend = MockBackend::start(
        Router::new().route(
            "/boom",
            common::reply_text(StatusCode::INTERNAL_SERVER_ERROR, "<h1>Server Error</h1>"),
        ),
    )
    .await;

    let err = backend.http().get("/boom").await.unwrap_err();

    assert_eq!(err.status, Some(500));
    assert_eq!(err.user_message(), "<h1>Server Error</h1>");
}

#[tokio::test]
async fn typed_payload_follows_priority_order() {
    let backend = MockBackend::start(Router::new().route(
        "/invalid",
        common::reply(
            StatusCode::BAD_REQUEST,
            json!({ "detail": "Bad request", "non_field_errors": ["Invalid credentials"] }),
        ),
    ))
    .await;

    let err = backend.http().get("/invalid").await.unwrap_err();

    assert_eq!(err.user_message(), "Invalid credentials");
    let payload = err.payload.unwrap();
    assert_eq!(payload.detail.as_deref(), Some("Bad request"));
}

#[tokio::test]
async fn slow_backend_times_out() {
    let backend = MockBackend::start(Router::new().route(
        "/slow",
        common::reply_after(Duration::from_secs(2), json!({})),
    ))
    .await;
    let http = HttpClient::new(&backend.base_url, Some(Duration::from_millis(200)));

    let err = http.get("/slow").await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Timeout);
    assert_eq!(backend.request_count(), 1);
}

#[tokio::test]
async fn unreachable_backend_is_a_network_error() {
    let http = HttpClient::new(common::UNREACHABLE, Some(Duration::from_secs(2)));

    let err = http.get("/anything").await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Network);
}
