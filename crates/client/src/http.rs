use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Method;
use serde::Serialize;
use serde_json::{json, Value};
use shared_types::{ApiConfig, AppError, ErrorPayload};

/// JSON client bound to one base URL.
///
/// Every call resolves to the parsed response body or an [`AppError`];
/// nothing is retried.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    base_url: String,
    timeout: Option<Duration>,
}

impl HttpClient {
    /// `timeout = None` sends requests without a deadline.
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout,
        }
    }

    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(&config.base_url, config.timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Absolute URL of `path`.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}/{path}", self.base_url)
        }
    }

    pub async fn get(&self, path: &str) -> Result<Value, AppError> {
        self.request(Method::GET, path, None).await
    }

    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Value, AppError> {
        let body = serde_json::to_value(body)
            .map_err(|e| AppError::decode(format!("Failed to encode request body: {e}")))?;
        self.request(Method::POST, path, Some(&body)).await
    }

    /// Send one request and normalize the outcome.
    ///
    /// The body is read as text: empty text becomes `{}`, text that is not
    /// JSON becomes `{"message": <text>}`. A non-2xx status becomes a
    /// backend error carrying the typed payload, or the status reason when
    /// the body was empty.
    #[tracing::instrument(skip(self, body), fields(base = %self.base_url))]
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Value, AppError> {
        let url = self.url(path);
        let mut request = self
            .client
            .request(method, &url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json");
        if let Some(body) = body {
            request = request.json(body);
        }
        #[cfg(not(target_arch = "wasm32"))]
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await.map_err(transport_error)?;
        let status = response.status();
        let text = response.text().await.map_err(transport_error)?;
        let parsed = parse_body(&text);

        if !status.is_success() {
            let payload = if text.trim().is_empty() {
                ErrorPayload::from_message(status.canonical_reason().unwrap_or("Request failed"))
            } else {
                ErrorPayload::from_value(&parsed)
            };
            tracing::warn!(status = status.as_u16(), "request failed");
            return Err(AppError::backend(status.as_u16(), payload));
        }

        tracing::debug!(status = status.as_u16(), "request completed");
        Ok(parsed)
    }
}

/// Parse a response body, tolerating empty and non-JSON text.
pub fn parse_body(text: &str) -> Value {
    if text.trim().is_empty() {
        return json!({});
    }
    serde_json::from_str(text).unwrap_or_else(|_| json!({ "message": text }))
}

fn transport_error(err: reqwest::Error) -> AppError {
    if err.is_timeout() {
        AppError::timeout("The server took too long to respond")
    } else {
        AppError::network(format!("Could not reach the server: {err}"))
    }
}
