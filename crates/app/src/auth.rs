use dioxus::prelude::*;
use shared_types::SessionRecord;

use crate::use_portal;

/// Change notifier for the persisted session.
///
/// The session store stays the source of truth: every change goes through
/// [`AuthService`](client::AuthService) first and is then mirrored here.
/// Components read the store through [`use_session`]; the signal only
/// decides when they re-render.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub session: Signal<Option<SessionRecord>>,
}

impl AuthState {
    pub fn new(initial: Option<SessionRecord>) -> Self {
        Self {
            session: Signal::new(initial),
        }
    }

    pub fn set_session(&mut self, session: SessionRecord) {
        self.session.set(Some(session));
    }

    pub fn clear_session(&mut self) {
        self.session.set(None);
    }

    /// Subscribe the calling component to session changes.
    pub fn track(&self) {
        let _ = self.session.read();
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// The stored session, read from the store on every render.
pub fn use_session() -> Option<SessionRecord> {
    let portal = use_portal();
    use_auth().track();
    portal.auth.current_session()
}

/// Hook returning a callback that clears the stored session and the
/// reactive mirror together.
pub fn use_logout() -> impl FnMut() + Clone {
    let portal = use_portal();
    let mut auth = use_auth();
    move || {
        portal.auth.logout();
        auth.clear_session();
    }
}
