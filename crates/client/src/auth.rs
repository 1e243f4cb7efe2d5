use shared_types::{AppError, LoginRequest, RegisterRequest, RegisteredUser, SessionRecord};

use crate::http::HttpClient;
use crate::session::SessionStore;

pub const LOGIN_PATH: &str = "/api/auth/login/";
pub const REGISTER_PATH: &str = "/api/auth/register/";

/// Login, registration and logout against the university backend.
#[derive(Debug, Clone)]
pub struct AuthService {
    http: HttpClient,
    sessions: SessionStore,
}

impl AuthService {
    pub fn new(http: HttpClient, sessions: SessionStore) -> Self {
        Self { http, sessions }
    }

    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    /// Sign in and persist the normalized session before returning it.
    #[tracing::instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> Result<SessionRecord, AppError> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let body = self.http.post(LOGIN_PATH, &request).await?;
        let session = SessionRecord::from_login_response(&body, email)?;
        self.sessions.save(&session)?;
        tracing::info!(role = %session.role, "signed in");
        Ok(session)
    }

    /// Create an account. The request is normalized first (lower-cased email,
    /// trimmed name, username from the email local-part).
    #[tracing::instrument(skip_all, fields(email = %request.email, role = %request.role))]
    pub async fn register(&self, request: RegisterRequest) -> Result<RegisteredUser, AppError> {
        let request = request.normalized();
        let body = self.http.post(REGISTER_PATH, &request).await?;
        let user = serde_json::from_value(body).unwrap_or_else(|_| RegisteredUser {
            email: request.email.clone(),
            username: request.username.clone(),
            full_name: Some(request.full_name.clone()),
            major: Some(request.major.clone()),
            role: request.role,
        });
        tracing::info!(username = %user.username, "registered");
        Ok(user)
    }

    /// Forget the signed-in user. Never fails.
    pub fn logout(&self) {
        self.sessions.clear();
        tracing::info!("signed out");
    }

    /// The signed-in user, if a readable session is stored.
    pub fn current_session(&self) -> Option<SessionRecord> {
        self.sessions.load()
    }
}
