use serde::{Deserialize, Serialize};

use crate::models::UserRole;

/// Programs of study offered at registration, as `(value, label)`.
pub const MAJOR_OPTIONS: &[(&str, &str)] = &[
    (
        "artificial_intelligence_and_robotics",
        "Artificial Intelligence and Robotics (AIR)",
    ),
    ("business_mathematics", "Business Mathematics (BM)"),
    (
        "digital_business_technology",
        "Digital Business Technology (DBT)",
    ),
    (
        "product_design_engineering",
        "Product Design Engineering (PDE)",
    ),
    ("food_business_technology", "Food Business Technology (FBT)"),
];

/// Roles a visitor may pick when registering.
pub const ROLE_OPTIONS: &[UserRole] = &[UserRole::Student, UserRole::Instructor];

/// Email domains accepted at registration.
pub const ALLOWED_EMAIL_DOMAINS: &[&str] =
    &["@student.prasetiyamulya.ac.id", "@prasetiyamulya.ac.id"];

/// Shortest password accepted at registration.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Label for a major value, or the raw value when it is not in the list.
pub fn major_label(value: &str) -> &str {
    MAJOR_OPTIONS
        .iter()
        .find(|(v, _)| *v == value)
        .map(|(_, label)| *label)
        .unwrap_or(value)
}

/// Body of `POST /api/auth/login/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of `POST /api/auth/register/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegisterRequest {
    #[serde(default)]
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub major: String,
    pub role: UserRole,
    pub password: String,
    pub password_confirmation: String,
}

impl RegisterRequest {
    /// Canonical form sent to the backend: email trimmed and lower-cased,
    /// full name trimmed, username derived from the email local-part when
    /// it was left blank.
    pub fn normalized(mut self) -> Self {
        self.email = self.email.trim().to_lowercase();
        self.full_name = self.full_name.trim().to_string();
        if self.username.trim().is_empty() {
            self.username = username_from_email(&self.email);
        }
        self
    }
}

/// Lower-cased local-part of an email address.
pub fn username_from_email(email: &str) -> String {
    email
        .trim()
        .split('@')
        .next()
        .unwrap_or_default()
        .to_lowercase()
}
