use std::sync::Arc;

use shared_types::{AppError, SessionRecord};

use crate::storage::{KeyValueStore, MemoryStore};

/// Default storage key of the session record.
pub const SESSION_KEY: &str = "user";

/// Holds at most one [`SessionRecord`], serialized as a single JSON value
/// under a single key of the underlying store.
#[derive(Clone)]
pub struct SessionStore {
    store: Arc<dyn KeyValueStore>,
    key: String,
}

impl SessionStore {
    pub fn new(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Session store over a fresh [`MemoryStore`].
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()), SESSION_KEY)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// The stored session. Missing, unreadable and corrupt data all read as
    /// "no session"; the latter two are logged.
    pub fn load(&self) -> Option<SessionRecord> {
        let raw = match self.store.get(&self.key) {
            Ok(raw) => raw?,
            Err(e) => {
                tracing::warn!(error = %e, "session store unreadable");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!(error = %e, key = %self.key, "discarding corrupt session");
                None
            }
        }
    }

    /// Persist `record`, replacing any previous session.
    pub fn save(&self, record: &SessionRecord) -> Result<(), AppError> {
        let raw = serde_json::to_string(record)
            .map_err(|e| AppError::decode(format!("Failed to encode session: {e}")))?;
        self.store.set(&self.key, &raw)
    }

    /// Remove the session. Failures are logged, never returned.
    pub fn clear(&self) {
        if let Err(e) = self.store.remove(&self.key) {
            tracing::warn!(error = %e, "failed to clear session");
        }
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore").field("key", &self.key).finish()
    }
}
