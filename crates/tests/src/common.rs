use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    body::{to_bytes, Body},
    extract::{Request, State},
    http::{header::CONTENT_TYPE, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{any, MethodRouter},
    Json, Router,
};
use client::{AuthService, DashboardService, HttpClient, SessionStore};
use serde_json::Value;

/// A base URL nothing listens on (the discard port).
pub const UNREACHABLE: &str = "http://127.0.0.1:9";

/// One request as seen by the mock backend.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    /// Path and query string.
    pub uri: String,
    pub content_type: Option<String>,
    pub body: Option<Value>,
}

type RequestLog = Arc<Mutex<Vec<Recorded>>>;

/// In-process stand-in for the university backend or the weather provider,
/// listening on an ephemeral port and recording every request it receives.
pub struct MockBackend {
    pub base_url: String,
    log: RequestLog,
}

impl MockBackend {
    pub async fn start(routes: Router) -> Self {
        let log = RequestLog::default();
        let app = routes.layer(middleware::from_fn_with_state(log.clone(), record));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock backend");
        let addr = listener.local_addr().expect("Mock backend has no address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Mock backend stopped");
        });

        Self {
            base_url: format!("http://{addr}"),
            log,
        }
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.log.lock().expect("request log poisoned").clone()
    }

    pub fn request_count(&self) -> usize {
        self.log.lock().expect("request log poisoned").len()
    }

    pub fn http(&self) -> HttpClient {
        HttpClient::new(&self.base_url, Some(Duration::from_secs(5)))
    }

    /// Auth service over this backend with a fresh in-memory session store.
    pub fn auth(&self) -> AuthService {
        AuthService::new(self.http(), SessionStore::in_memory())
    }

    pub fn dashboards(&self) -> DashboardService {
        DashboardService::new(self.http())
    }
}

async fn record(State(log): State<RequestLog>, req: Request, next: Next) -> Response {
    let (parts, body) = req.into_parts();
    let bytes = to_bytes(body, usize::MAX).await.unwrap_or_default();
    log.lock().expect("request log poisoned").push(Recorded {
        method: parts.method.to_string(),
        uri: parts.uri.to_string(),
        content_type: parts
            .headers
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: serde_json::from_slice(&bytes).ok(),
    });
    next.run(Request::from_parts(parts, Body::from(bytes))).await
}

/// Route answering every method with `status` and a JSON body.
pub fn reply(status: StatusCode, body: Value) -> MethodRouter {
    any(move || {
        let body = body.clone();
        async move { (status, Json(body)).into_response() }
    })
}

/// Route answering every method with `status` and a raw text body.
pub fn reply_text(status: StatusCode, body: &'static str) -> MethodRouter {
    any(move || async move { (status, body).into_response() })
}

/// Route that answers only after `delay`.
pub fn reply_after(delay: Duration, body: Value) -> MethodRouter {
    any(move || {
        let body = body.clone();
        async move {
            tokio::time::sleep(delay).await;
            Json(body).into_response()
        }
    })
}
