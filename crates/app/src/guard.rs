use client::guard::{self, GuardDecision};
use dioxus::prelude::*;
use shared_types::UserRole;

use crate::auth::use_session;
use crate::routes::Route;

/// Decision for a signed-in-only route, taken from the stored session.
pub fn use_protected(role: Option<UserRole>) -> GuardDecision {
    guard::protected(use_session().as_ref(), role)
}

/// Decision for the login and register pages, taken from the stored session.
pub fn use_public() -> GuardDecision {
    guard::public(use_session().as_ref())
}

/// Renders `children` only for a signed-in user, optionally of one role.
/// Anyone else is sent to the login page.
#[component]
pub fn ProtectedRoute(role: Option<UserRole>, children: Element) -> Element {
    match use_protected(role) {
        GuardDecision::Render => rsx! { {children} },
        GuardDecision::Redirect(path) => {
            navigator().replace(Route::from(path));
            rsx! {
                div { class: "auth-guard-loading",
                    p { "Redirecting to login..." }
                }
            }
        }
    }
}

/// Renders `children` for visitors; a signed-in student or instructor is
/// sent to their dashboard instead.
#[component]
pub fn PublicRoute(children: Element) -> Element {
    match use_public() {
        GuardDecision::Render => rsx! { {children} },
        GuardDecision::Redirect(path) => {
            navigator().replace(Route::from(path));
            rsx! {
                div { class: "auth-guard-loading",
                    p { "Redirecting to your dashboard..." }
                }
            }
        }
    }
}
