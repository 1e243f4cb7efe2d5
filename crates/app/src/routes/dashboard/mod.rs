pub mod instructor;
pub mod student;

use client::DashboardOutcome;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdRefreshCw, LdShieldAlert};
use dioxus_free_icons::Icon;
use shared_types::{AppError, AppPath, LoadState};
use shared_ui::{
    Alert, AlertVariant, Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader,
    CardTitle, Spinner,
};
use std::time::Duration;

use crate::auth::use_logout;
use crate::routes::Route;
use crate::{timer, use_portal};

/// What a dashboard page shows for the current state of its fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen<T> {
    /// Leaving the page; nothing to show.
    Redirecting,
    Denied(String),
    Data(LoadState<T>),
}

impl<T: Clone> Screen<T> {
    /// `None` means the fetch has not finished yet.
    pub fn of(outcome: Option<&DashboardOutcome<T>>) -> Self {
        match outcome {
            None => Screen::Data(LoadState::Loading),
            Some(DashboardOutcome::RedirectToLogin) => Screen::Redirecting,
            Some(DashboardOutcome::AccessDenied { message, .. }) => Screen::Denied(message.clone()),
            Some(DashboardOutcome::Loaded(data)) => Screen::Data(LoadState::Loaded(data.clone())),
            Some(DashboardOutcome::Failed(err)) => Screen::Data(LoadState::Failed(err.clone())),
        }
    }
}

/// Where a finished fetch sends the user, and after how long.
pub fn follow_up<T>(
    outcome: &DashboardOutcome<T>,
    delay: Duration,
) -> Option<(AppPath, Duration)> {
    match outcome {
        DashboardOutcome::RedirectToLogin => Some((AppPath::Login, Duration::ZERO)),
        DashboardOutcome::AccessDenied { redirect, .. } => Some((*redirect, delay)),
        DashboardOutcome::Failed(err) if err.is_unauthorized() => Some((AppPath::Login, delay)),
        DashboardOutcome::Loaded(_) | DashboardOutcome::Failed(_) => None,
    }
}

/// Schedule the navigation a finished fetch calls for. Leaving towards the
/// login page also ends the session, otherwise the login page would send the
/// user straight back.
pub fn use_follow_up<T: 'static>(outcome: Resource<DashboardOutcome<T>>) {
    let portal = use_portal();
    let logout = use_logout();

    use_effect(move || {
        let delay = portal.ui.access_denied_redirect();
        let next = match &*outcome.read() {
            Some(o) => follow_up(o, delay),
            None => None,
        };
        let Some((path, delay)) = next else {
            return;
        };
        let mut logout = logout.clone();
        spawn(async move {
            timer::sleep(delay).await;
            if path == AppPath::Login {
                logout();
            }
            navigator().replace(Route::from(path));
        });
    });
}

/// Full-page loading indicator.
#[component]
pub fn DashboardLoading() -> Element {
    rsx! {
        div { class: "dashboard-page",
            Spinner { message: "Loading dashboard..." }
        }
    }
}

/// Shown to a signed-in user who opened someone else's dashboard.
#[component]
pub fn AccessDenied(message: String) -> Element {
    rsx! {
        div { class: "dashboard-page",
            Card { class: "dashboard-notice",
                CardHeader {
                    div { class: "dashboard-notice-icon",
                        Icon::<LdShieldAlert> { icon: LdShieldAlert, width: 24, height: 24 }
                    }
                    CardTitle { "Access denied" }
                }
                CardContent {
                    Alert { variant: AlertVariant::Error, "{message}" }
                    p { class: "dashboard-notice-hint", "Taking you to your own dashboard..." }
                }
            }
        }
    }
}

/// Failed fetch with Retry and Back to login.
#[component]
pub fn DashboardError(error: AppError, on_retry: EventHandler<MouseEvent>) -> Element {
    let mut logout = use_logout();
    let message = error.user_message();

    rsx! {
        div { class: "dashboard-page",
            Card { class: "dashboard-notice",
                CardHeader {
                    CardTitle { "Error" }
                    CardDescription { "Failed to load dashboard data." }
                }
                CardContent {
                    Alert { variant: AlertVariant::Error, "{message}" }
                    if error.is_unauthorized() {
                        p { class: "dashboard-notice-hint", "Your session has expired. Redirecting to login..." }
                    }
                    div { class: "dashboard-actions",
                        Button {
                            variant: ButtonVariant::Primary,
                            onclick: move |evt: MouseEvent| on_retry.call(evt),
                            Icon::<LdRefreshCw> { icon: LdRefreshCw, width: 16, height: 16 }
                            "Retry"
                        }
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_: MouseEvent| {
                                logout();
                                navigator().replace(Route::Login {});
                            },
                            "Back to login"
                        }
                    }
                }
            }
        }
    }
}
