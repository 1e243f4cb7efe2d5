use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

use crate::error::AppError;

/// Portal user role.
///
/// - `Student`: sees the student dashboard (own grades).
/// - `Instructor`: sees the instructor dashboard (taught courses).
/// - `Admin`: recognized but has no dashboard of its own.
/// - `Unknown`: anything the backend sent that is not recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UserRole {
    Student,
    Instructor,
    Admin,
    #[default]
    Unknown,
}

impl UserRole {
    /// Map a raw backend role string onto the enum.
    ///
    /// Case and surrounding whitespace are ignored. The Indonesian synonyms
    /// `mahasiswa` (student) and `dosen` (lecturer) are accepted.
    pub fn normalize(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "student" | "mahasiswa" => UserRole::Student,
            "instructor" | "dosen" => UserRole::Instructor,
            "admin" => UserRole::Admin,
            _ => UserRole::Unknown,
        }
    }

    /// Lowercase string for storage and request bodies.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Student => "student",
            UserRole::Instructor => "instructor",
            UserRole::Admin => "admin",
            UserRole::Unknown => "unknown",
        }
    }

    /// Human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            UserRole::Student => "Student",
            UserRole::Instructor => "Instructor",
            UserRole::Admin => "Administrator",
            UserRole::Unknown => "Unknown",
        }
    }

    /// The single dashboard this role may reach. Roles without a dashboard
    /// fall back to the root path.
    pub fn dashboard_path(&self) -> AppPath {
        match self {
            UserRole::Student => AppPath::StudentDashboard,
            UserRole::Instructor => AppPath::InstructorDashboard,
            UserRole::Admin | UserRole::Unknown => AppPath::Root,
        }
    }

    /// True for roles that own a dashboard.
    pub fn has_dashboard(&self) -> bool {
        matches!(self, UserRole::Student | UserRole::Instructor)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for UserRole {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for UserRole {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.map(|r| UserRole::normalize(&r)).unwrap_or_default())
    }
}

/// Client-side routes of the portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppPath {
    Root,
    Login,
    Register,
    StudentDashboard,
    InstructorDashboard,
    Weather,
}

impl AppPath {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppPath::Root => "/",
            AppPath::Login => "/login",
            AppPath::Register => "/register",
            AppPath::StudentDashboard => "/dashboard/student",
            AppPath::InstructorDashboard => "/dashboard/instructor",
            AppPath::Weather => "/weather",
        }
    }
}

impl fmt::Display for AppPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The normalized, persisted representation of the signed-in user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionRecord {
    pub email: String,
    #[serde(default)]
    pub role: UserRole,
    pub token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub major: Option<String>,
}

impl SessionRecord {
    /// Build a session from a login response body.
    ///
    /// The token is looked up as `access_token`, then `token.access`, then
    /// `access`, then a plain string `token`. A missing `email` falls back to
    /// the address the user signed in with.
    pub fn from_login_response(body: &Value, submitted_email: &str) -> Result<Self, AppError> {
        let token = string_at(body, &["access_token"])
            .or_else(|| string_at(body, &["token", "access"]))
            .or_else(|| string_at(body, &["access"]))
            .or_else(|| string_at(body, &["token"]))
            .ok_or_else(|| AppError::decode("Login response did not contain an access token"))?;

        let email = string_at(body, &["email"]).unwrap_or_else(|| submitted_email.trim().to_string());
        if email.is_empty() {
            return Err(AppError::decode("Login response did not contain an email"));
        }

        Ok(Self {
            email,
            role: string_at(body, &["role"])
                .map(|r| UserRole::normalize(&r))
                .unwrap_or_default(),
            token,
            full_name: string_at(body, &["full_name"]),
            major: string_at(body, &["major"]),
        })
    }

    /// Name to greet the user with.
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(&self.email)
    }
}

/// Non-empty string found by following `path` through nested objects.
fn string_at(body: &Value, path: &[&str]) -> Option<String> {
    let mut current = body;
    for key in path {
        current = current.get(key)?;
    }
    current
        .as_str()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Account echoed back by the register endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegisteredUser {
    pub email: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub major: Option<String>,
    #[serde(default)]
    pub role: UserRole,
}
