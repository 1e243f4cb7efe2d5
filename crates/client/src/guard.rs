//! Route guard decisions. Pure functions over the current session; the UI
//! re-evaluates them on every render.

use shared_types::{AppPath, SessionRecord, UserRole};

/// What a guarded route should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    Redirect(AppPath),
}

/// Guard for signed-in routes. Without a session, or with a session whose
/// role differs from `required_role`, the visitor is sent to login.
pub fn protected(session: Option<&SessionRecord>, required_role: Option<UserRole>) -> GuardDecision {
    match (session, required_role) {
        (None, _) => GuardDecision::Redirect(AppPath::Login),
        (Some(s), Some(role)) if s.role != role => GuardDecision::Redirect(AppPath::Login),
        (Some(_), _) => GuardDecision::Render,
    }
}

/// Guard for login and register: users who own a dashboard are sent there.
/// Roles without a dashboard stay on the page, which keeps `/` and the
/// public pages from redirecting into each other.
pub fn public(session: Option<&SessionRecord>) -> GuardDecision {
    match session {
        Some(s) if s.role.has_dashboard() => GuardDecision::Redirect(s.role.dashboard_path()),
        _ => GuardDecision::Render,
    }
}

/// Where the root path leads.
pub fn root() -> AppPath {
    AppPath::Login
}
