//! Form drafts bound to the login and registration inputs.
//!
//! Drafts are validated with `validator`; when several checks fail, the
//! message shown is picked by a fixed priority table so the user always
//! sees the same first problem for the same input.

use std::borrow::Cow;

use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::AppError;
use crate::models::UserRole;
use crate::requests::{LoginRequest, RegisterRequest, ALLOWED_EMAIL_DOMAINS};

/// Draft of the login form.
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct LoginForm {
    #[validate(
        custom(function = "required"),
        email(message = "Enter a valid email address")
    )]
    pub email: String,
    #[validate(custom(function = "required"))]
    pub password: String,
}

const LOGIN_CHECKS: &[Check] = &[
    ("email", "required", "Email is required"),
    ("email", "email", "Enter a valid email address"),
    ("password", "required", "Password is required"),
];

impl LoginForm {
    /// Validate the draft and build the request body.
    pub fn validate_request(&self) -> Result<LoginRequest, AppError> {
        let draft = Self {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        };
        draft
            .validate()
            .map_err(|errors| first_failure(&errors, LOGIN_CHECKS))?;
        Ok(LoginRequest {
            email: draft.email,
            password: draft.password,
        })
    }
}

/// Draft of the registration form.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct RegisterForm {
    #[validate(
        custom(function = "registrable_email"),
        email(message = "Enter a valid email address")
    )]
    pub email: String,
    #[validate(custom(function = "required"))]
    pub full_name: String,
    #[validate(custom(function = "required"))]
    pub major: String,
    pub role: UserRole,
    #[validate(
        custom(function = "required"),
        length(min = 8, message = "Password must be at least 8 characters"),
        must_match(other = "password_confirmation", message = "Password confirmation doesn't match")
    )]
    pub password: String,
    pub password_confirmation: String,
}

impl Default for RegisterForm {
    fn default() -> Self {
        Self {
            email: String::new(),
            full_name: String::new(),
            major: String::new(),
            role: UserRole::Student,
            password: String::new(),
            password_confirmation: String::new(),
        }
    }
}

const REGISTER_CHECKS: &[Check] = &[
    ("email", "required", "Email is required"),
    ("full_name", "required", "Full name is required"),
    ("major", "required", "Major is required"),
    ("password", "required", "Password is required"),
    ("email", "email", "Enter a valid email address"),
    (
        "email",
        "domain",
        "Email must use the @student.prasetiyamulya.ac.id or @prasetiyamulya.ac.id domain",
    ),
    ("password", "length", "Password must be at least 8 characters"),
    ("password", "must_match", "Password confirmation doesn't match"),
];

impl RegisterForm {
    /// Validate the draft and build the normalized request body.
    pub fn validate_request(&self) -> Result<RegisterRequest, AppError> {
        let draft = Self {
            email: self.email.trim().to_string(),
            full_name: self.full_name.trim().to_string(),
            ..self.clone()
        };
        draft
            .validate()
            .map_err(|errors| first_failure(&errors, REGISTER_CHECKS))?;
        Ok(RegisterRequest {
            username: String::new(),
            email: draft.email,
            full_name: draft.full_name,
            major: draft.major,
            role: draft.role,
            password: draft.password,
            password_confirmation: draft.password_confirmation,
        }
        .normalized())
    }
}

/// `(field, code, fallback message)` in reporting order.
type Check = (&'static str, &'static str, &'static str);

/// Turn the validator's error map into one validation error: the first
/// entry of `checks` that actually failed wins.
fn first_failure(errors: &ValidationErrors, checks: &[Check]) -> AppError {
    let field_errors = errors.field_errors();
    checks
        .iter()
        .find_map(|(field, code, fallback)| {
            let errs = field_errors
                .iter()
                .find(|(name, _)| &***name == *field)
                .map(|(_, errs)| *errs)?;
            let err = errs.iter().find(|e| e.code == *code)?;
            Some(
                err.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| fallback.to_string()),
            )
        })
        .map(AppError::validation)
        .unwrap_or_else(|| AppError::validation("Please check the form"))
}

fn required(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

/// Blank is reported as `required`, anything outside the campus domains
/// as `domain`.
fn registrable_email(email: &str) -> Result<(), ValidationError> {
    required(email)?;
    let email = email.trim().to_lowercase();
    if ALLOWED_EMAIL_DOMAINS.iter().any(|d| email.ends_with(d)) {
        return Ok(());
    }
    Err(ValidationError::new("domain").with_message(Cow::Borrowed(
        "Email must use the @student.prasetiyamulya.ac.id or @prasetiyamulya.ac.id domain",
    )))
}
