use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Categorization of client-side errors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppErrorKind {
    /// Client-side validation failed; the request never left the client.
    Validation,
    /// The request could not complete (DNS, connection refused, ...).
    Network,
    /// The request exceeded the configured timeout.
    Timeout,
    /// The backend answered with a non-2xx status.
    Backend,
    /// The session's role does not match the view's required role.
    Authorization,
    /// A response or stored blob could not be decoded.
    Decode,
    /// The key-value store rejected a write.
    Storage,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::Validation => write!(f, "ValidationError"),
            AppErrorKind::Network => write!(f, "NetworkError"),
            AppErrorKind::Timeout => write!(f, "TimeoutError"),
            AppErrorKind::Backend => write!(f, "BackendError"),
            AppErrorKind::Authorization => write!(f, "AuthorizationError"),
            AppErrorKind::Decode => write!(f, "DecodeError"),
            AppErrorKind::Storage => write!(f, "StorageError"),
        }
    }
}

/// One field's validation messages as reported by the backend,
/// e.g. `{"email": ["already registered"]}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldError {
    pub field: String,
    pub messages: Vec<String>,
}

impl FieldError {
    /// Human label for the field: first letter upper-cased, underscores
    /// replaced by spaces (`password_confirmation` → `Password confirmation`).
    pub fn label(&self) -> String {
        let spaced = self.field.replace('_', " ");
        let mut chars = spaced.chars();
        match chars.next() {
            None => String::new(),
            Some(c) => c.to_uppercase().collect::<String>() + chars.as_str(),
        }
    }
}

/// Keys of a backend error body that are never treated as field errors.
const RESERVED_KEYS: &[&str] = &[
    "detail",
    "message",
    "error",
    "non_field_errors",
    "code",
    "messages",
    "status_code",
];

/// Typed view of a backend error body.
///
/// The backend reports errors in several shapes (`{"detail": ..}`,
/// `{"non_field_errors": [..]}`, `{"email": [..]}`, `{"message": ..}`,
/// `{"error": ..}`). They are all folded into this struct once, and
/// [`ErrorPayload::user_message`] picks the message to show using a single
/// priority order:
///
/// 1. field errors, `"<Field>: <messages>"` joined with `" | "`
/// 2. non-field errors joined with a space
/// 3. `detail`
/// 4. `message` (or its alias `error`)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ErrorPayload {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub field_errors: Vec<FieldError>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub non_field_errors: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorPayload {
    /// Payload carrying only a generic message.
    pub fn from_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::default()
        }
    }

    /// Fold an arbitrary JSON error body into the typed payload.
    ///
    /// A bare JSON string becomes the generic message. Field keys are taken
    /// in the map's iteration order.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::String(s) => Self::from_message(s.clone()),
            Value::Object(map) => {
                let mut payload = Self {
                    detail: map.get("detail").and_then(text_of),
                    message: map
                        .get("message")
                        .and_then(text_of)
                        .or_else(|| map.get("error").and_then(text_of)),
                    non_field_errors: map
                        .get("non_field_errors")
                        .map(messages_of)
                        .unwrap_or_default(),
                    ..Self::default()
                };
                for (key, val) in map {
                    if RESERVED_KEYS.contains(&key.as_str()) {
                        continue;
                    }
                    let messages = messages_of(val);
                    if !messages.is_empty() {
                        payload.field_errors.push(FieldError {
                            field: key.clone(),
                            messages,
                        });
                    }
                }
                payload
            }
            _ => Self::default(),
        }
    }

    /// True when nothing displayable was found.
    pub fn is_empty(&self) -> bool {
        self.field_errors.is_empty()
            && self.non_field_errors.is_empty()
            && self.detail.is_none()
            && self.message.is_none()
    }

    /// The most specific message available, if any.
    pub fn user_message(&self) -> Option<String> {
        if !self.field_errors.is_empty() {
            let parts: Vec<String> = self
                .field_errors
                .iter()
                .map(|fe| format!("{}: {}", fe.label(), fe.messages.join(" ")))
                .collect();
            return Some(parts.join(" | "));
        }
        if !self.non_field_errors.is_empty() {
            return Some(self.non_field_errors.join(" "));
        }
        self.detail.clone().or_else(|| self.message.clone())
    }

    /// [`Self::user_message`] with a fallback for empty payloads.
    pub fn message_or(&self, fallback: &str) -> String {
        self.user_message().unwrap_or_else(|| fallback.to_string())
    }
}

/// A string, or a number rendered as text.
fn text_of(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// A string or a list of strings; anything else yields nothing.
fn messages_of(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items.iter().filter_map(text_of).collect(),
        other => text_of(other).into_iter().collect(),
    }
}

/// Structured error shared by the client services and the UI.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
    /// HTTP status for [`AppErrorKind::Backend`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<ErrorPayload>,
}

impl AppError {
    fn new(kind: AppErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status: None,
            payload: None,
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Validation, message)
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Network, message)
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Timeout, message)
    }

    pub fn authorization(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Authorization, message)
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Decode, message)
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Storage, message)
    }

    /// A non-2xx response. `message` is the payload's best message, or
    /// `"HTTP <status>"` when the payload has none.
    pub fn backend(status: u16, payload: ErrorPayload) -> Self {
        let message = payload.message_or(&format!("HTTP {status}"));
        Self {
            kind: AppErrorKind::Backend,
            message,
            status: Some(status),
            payload: Some(payload),
        }
    }

    /// Message suitable for inline display.
    pub fn user_message(&self) -> String {
        self.payload
            .as_ref()
            .and_then(ErrorPayload::user_message)
            .unwrap_or_else(|| self.message.clone())
    }

    pub fn is_validation(&self) -> bool {
        self.kind == AppErrorKind::Validation
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status == Some(401)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}
