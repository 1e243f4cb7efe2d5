use serde::de::DeserializeOwned;
use shared_types::{
    AppError, AppPath, InstructorDashboard, SessionRecord, StudentDashboard, UserRole,
};

use crate::http::HttpClient;

pub const STUDENT_DASHBOARD_PATH: &str = "/api/dashboard/student/";
pub const INSTRUCTOR_DASHBOARD_PATH: &str = "/api/dashboard/instructor/";

/// Who may open a dashboard, decided before anything is fetched.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardAccess<'a> {
    RedirectToLogin,
    Denied { message: String, redirect: AppPath },
    Granted(&'a SessionRecord),
}

/// Result of opening a dashboard.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardOutcome<T> {
    RedirectToLogin,
    AccessDenied { message: String, redirect: AppPath },
    Loaded(T),
    Failed(AppError),
}

/// Decide whether `session` may see the dashboard owned by `role`.
pub fn access(session: Option<&SessionRecord>, role: UserRole) -> DashboardAccess<'_> {
    match session {
        None => DashboardAccess::RedirectToLogin,
        Some(s) if s.role != role => {
            tracing::warn!(role = %s.role, required = %role, "dashboard access denied");
            DashboardAccess::Denied {
                message: access_denied_message(role),
                redirect: s.role.dashboard_path(),
            }
        }
        Some(s) => DashboardAccess::Granted(s),
    }
}

pub fn access_denied_message(role: UserRole) -> String {
    let audience = match role {
        UserRole::Instructor => "instructors",
        UserRole::Student => "students",
        UserRole::Admin => "administrators",
        UserRole::Unknown => "authorized users",
    };
    format!("Access denied: This dashboard is only for {audience}.")
}

/// Read-only dashboard queries.
#[derive(Debug, Clone)]
pub struct DashboardService {
    http: HttpClient,
}

impl DashboardService {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    #[tracing::instrument(skip(self))]
    pub async fn student(&self, email: &str) -> Result<StudentDashboard, AppError> {
        self.fetch(STUDENT_DASHBOARD_PATH, email).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn instructor(&self, email: &str) -> Result<InstructorDashboard, AppError> {
        self.fetch(INSTRUCTOR_DASHBOARD_PATH, email).await
    }

    /// Check access, then fetch the student dashboard. Nothing is requested
    /// unless access is granted.
    pub async fn open_student(
        &self,
        session: Option<&SessionRecord>,
    ) -> DashboardOutcome<StudentDashboard> {
        match access(session, UserRole::Student) {
            DashboardAccess::RedirectToLogin => DashboardOutcome::RedirectToLogin,
            DashboardAccess::Denied { message, redirect } => {
                DashboardOutcome::AccessDenied { message, redirect }
            }
            DashboardAccess::Granted(s) => match self.student(&s.email).await {
                Ok(data) => DashboardOutcome::Loaded(data),
                Err(e) => DashboardOutcome::Failed(e),
            },
        }
    }

    /// Check access, then fetch the instructor dashboard.
    pub async fn open_instructor(
        &self,
        session: Option<&SessionRecord>,
    ) -> DashboardOutcome<InstructorDashboard> {
        match access(session, UserRole::Instructor) {
            DashboardAccess::RedirectToLogin => DashboardOutcome::RedirectToLogin,
            DashboardAccess::Denied { message, redirect } => {
                DashboardOutcome::AccessDenied { message, redirect }
            }
            DashboardAccess::Granted(s) => match self.instructor(&s.email).await {
                Ok(data) => DashboardOutcome::Loaded(data),
                Err(e) => DashboardOutcome::Failed(e),
            },
        }
    }

    async fn fetch<T: DeserializeOwned>(&self, path: &str, email: &str) -> Result<T, AppError> {
        let body = self.http.get(&dashboard_query(path, email)).await?;
        serde_json::from_value(body)
            .map_err(|e| AppError::decode(format!("Invalid dashboard response: {e}")))
    }
}

/// `path?email=<urlencoded>`.
pub fn dashboard_query(path: &str, email: &str) -> String {
    format!("{path}?email={}", urlencoding::encode(email))
}
