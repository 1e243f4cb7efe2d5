use dioxus::prelude::*;
use shared_types::{AppPath, SessionRecord};

use crate::auth::use_session;
use crate::routes::Route;

/// The signed-in user's dashboard, if their role has one.
fn own_dashboard(session: Option<&SessionRecord>) -> Option<AppPath> {
    session
        .filter(|s| s.role.has_dashboard())
        .map(|s| s.role.dashboard_path())
}

#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let missing = format!("/{}", route.join("/"));
    let session = use_session();
    let dashboard = own_dashboard(session.as_ref());

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        main { class: "not-found-page",
            section { class: "not-found-card",
                p { class: "not-found-code", "404" }
                h1 { class: "not-found-title", "Nothing here" }
                p { class: "not-found-message",
                    "No portal page lives at "
                    code { "{missing}" }
                    "."
                }
                nav { class: "not-found-links",
                    Link { to: Route::Login {}, class: "not-found-link", "Back to login" }
                    if let Some(path) = dashboard {
                        Link { to: Route::from(path), class: "not-found-link", "Go to your dashboard" }
                    }
                }
            }
        }
    }
}
