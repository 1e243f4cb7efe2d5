use client::{AuthService, DashboardService, HttpClient, SessionStore, WeatherService};
use dioxus::prelude::*;
use shared_types::{AppConfig, UiConfig};

mod auth;
mod format_helpers;
mod guard;
mod routes;
mod timer;
use auth::AuthState;
use routes::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Services shared by every route, built once from the loaded configuration.
#[derive(Clone)]
pub struct Portal {
    pub auth: AuthService,
    pub dashboards: DashboardService,
    pub weather: WeatherService,
    pub ui: UiConfig,
}

impl Portal {
    pub fn from_config(config: &AppConfig) -> Self {
        let store = client::storage::default_store(&config.session);
        let sessions = SessionStore::new(store, config.session.storage_key.clone());
        Self::new(config, sessions)
    }

    pub fn new(config: &AppConfig, sessions: SessionStore) -> Self {
        let http = HttpClient::from_config(&config.api);
        Self {
            auth: AuthService::new(http.clone(), sessions),
            dashboards: DashboardService::new(http),
            weather: WeatherService::from_config(&config.weather),
            ui: config.ui,
        }
    }
}

/// Services over an in-memory store holding `session`.
#[cfg(test)]
pub(crate) fn portal_with(session: Option<&shared_types::SessionRecord>) -> Portal {
    let sessions = SessionStore::in_memory();
    if let Some(session) = session {
        sessions.save(session).expect("in-memory save");
    }
    Portal::new(&AppConfig::default(), sessions)
}

/// Hook to access the shared services.
pub fn use_portal() -> Portal {
    use_context::<Portal>()
}

/// Detect the client platform from compile-time feature flags.
pub fn client_platform() -> &'static str {
    if cfg!(feature = "web") {
        "web"
    } else if cfg!(feature = "desktop") {
        "desktop"
    } else if cfg!(feature = "mobile") {
        "mobile"
    } else {
        "unknown"
    }
}

fn main() {
    dioxus::logger::initialize_default();
    tracing::info!(platform = client_platform(), "starting portal");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let portal = use_context_provider(|| Portal::from_config(client::config::load_config()));

    // Guards read the store itself; this signal only tells them when to re-render.
    use_context_provider(|| AuthState::new(portal.auth.current_session()));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}
