//! Submit flows of the login and registration forms: validate the draft,
//! then call the auth service. A draft that fails validation never reaches
//! the network.

use shared_types::{AppError, AppPath, LoginForm, RegisterForm, RegisteredUser, SessionRecord};

use crate::auth::AuthService;

pub const LOGIN_SUCCESS: &str = "Login successful! Redirecting...";
pub const REGISTER_SUCCESS: &str = "Registration successful! Redirecting to login...";

pub async fn submit_login(auth: &AuthService, form: &LoginForm) -> Result<SessionRecord, AppError> {
    let request = form.validate_request()?;
    auth.login(&request.email, &request.password).await
}

pub async fn submit_registration(
    auth: &AuthService,
    form: &RegisterForm,
) -> Result<RegisteredUser, AppError> {
    let request = form.validate_request()?;
    auth.register(request).await
}

/// Screen shown after a successful login.
pub fn after_login(session: &SessionRecord) -> AppPath {
    session.role.dashboard_path()
}

/// Screen shown after a successful registration.
pub fn after_registration() -> AppPath {
    AppPath::Login
}
