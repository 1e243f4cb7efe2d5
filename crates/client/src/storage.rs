use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use shared_types::{AppError, SessionConfig};

// ── Trait ────────────────────────────────────────────────────────────

/// Persistent string key-value storage holding the client's state.
pub trait KeyValueStore: Send + Sync {
    /// Value stored under `key`, `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>, AppError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), AppError>;

    /// Delete `key`. Deleting an absent key succeeds.
    fn remove(&self, key: &str) -> Result<(), AppError>;
}

/// The platform's default store: `localStorage` in the browser, one file
/// per key under `storage_dir` elsewhere.
pub fn default_store(config: &SessionConfig) -> Arc<dyn KeyValueStore> {
    #[cfg(target_arch = "wasm32")]
    {
        let _ = config;
        Arc::new(BrowserStore)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Arc::new(FileStore::new(&config.storage_dir))
    }
}

// ── In-memory implementation ────────────────────────────────────────

/// Ephemeral store; contents are lost when it is dropped.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, AppError> {
        self.entries
            .lock()
            .map_err(|_| AppError::storage("memory store lock poisoned"))
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.entries()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.entries()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), AppError> {
        self.entries()?.remove(key);
        Ok(())
    }
}

// ── File implementation ─────────────────────────────────────────────

/// Desktop store: each key is a `<key>.json` file in one directory.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileStore {
    pub fn new(dir: impl Into<std::path::PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self, key: &str) -> std::path::PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        match std::fs::read_to_string(self.path(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::storage(format!("Failed to read {key}: {e}"))),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        std::fs::create_dir_all(&self.dir)
            .and_then(|_| std::fs::write(self.path(key), value))
            .map_err(|e| AppError::storage(format!("Failed to write {key}: {e}")))
    }

    fn remove(&self, key: &str) -> Result<(), AppError> {
        match std::fs::remove_file(self.path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::storage(format!("Failed to remove {key}: {e}"))),
        }
    }
}

// ── Browser implementation ──────────────────────────────────────────

/// Web store backed by `window.localStorage`.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStore;

#[cfg(target_arch = "wasm32")]
impl BrowserStore {
    fn storage() -> Result<web_sys::Storage, AppError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or_else(|| AppError::storage("localStorage is not available"))
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Self::storage()?
            .get_item(key)
            .map_err(|_| AppError::storage(format!("Failed to read {key}")))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|_| AppError::storage(format!("Failed to write {key}")))
    }

    fn remove(&self, key: &str) -> Result<(), AppError> {
        Self::storage()?
            .remove_item(key)
            .map_err(|_| AppError::storage(format!("Failed to remove {key}")))
    }
}
