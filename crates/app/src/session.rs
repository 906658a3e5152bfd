//! Access to the locally persisted session record.
//!
//! The login flow (outside this front-end) writes the signed-in user as JSON
//! under a single key. The dashboard only ever reads and removes it.

use shared_types::{AppError, UserRecord};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Key/value store holding the serialized user record.
pub trait SessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError>;

    /// Removal is best effort; failures are logged by the implementation.
    fn remove(&self, key: &str);
}

/// Read the signed-in user, treating every failure as "nobody signed in".
pub fn load_session_user(store: &dyn SessionStore, key: &str) -> Option<UserRecord> {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(err) => {
            tracing::debug!(%err, key, "session store unavailable");
            return None;
        }
    };

    match UserRecord::from_session_value(&raw) {
        Ok(user) => user,
        Err(err) => {
            tracing::debug!(%err, key, "ignoring unusable session record");
            None
        }
    }
}

/// The store for the platform we were compiled for.
pub fn platform_store() -> Rc<dyn SessionStore> {
    #[cfg(target_arch = "wasm32")]
    {
        Rc::new(LocalStorageSessionStore)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        match FileSessionStore::in_data_dir() {
            Some(store) => Rc::new(store),
            None => {
                tracing::warn!("no platform data directory, session will not persist");
                Rc::new(MemorySessionStore::new())
            }
        }
    }
}

/// In-process store. Used when nothing durable is available, and in tests.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let store = Self::new();
        store.insert(key, value);
        store
    }

    pub fn insert(&self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.borrow_mut().insert(key.into(), value.into());
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Browser `localStorage`.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageSessionStore;

#[cfg(target_arch = "wasm32")]
impl LocalStorageSessionStore {
    fn storage() -> Result<web_sys::Storage, AppError> {
        let window =
            web_sys::window().ok_or_else(|| AppError::session_unavailable("no window"))?;
        window
            .local_storage()
            .map_err(|e| AppError::session_unavailable(format!("{e:?}")))?
            .ok_or_else(|| AppError::session_unavailable("localStorage disabled"))
    }
}

#[cfg(target_arch = "wasm32")]
impl SessionStore for LocalStorageSessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| AppError::session_unavailable(format!("{e:?}")))
    }

    fn remove(&self, key: &str) {
        let result = Self::storage().and_then(|storage| {
            storage
                .remove_item(key)
                .map_err(|e| AppError::session_unavailable(format!("{e:?}")))
        });
        if let Err(err) = result {
            tracing::warn!(%err, key, "failed to remove session entry");
        }
    }
}

/// One file per key under the platform data directory (desktop builds).
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    dir: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileSessionStore {
    const APP_DIR: &'static str = "transport-hub";

    pub fn new(dir: impl Into<std::path::PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn in_data_dir() -> Option<Self> {
        dirs::data_dir().map(|dir| Self::new(dir.join(Self::APP_DIR)))
    }

    fn path(&self, key: &str) -> std::path::PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl SessionStore for FileSessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        match std::fs::read_to_string(self.path(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::session_unavailable(e.to_string())),
        }
    }

    fn remove(&self, key: &str) {
        match std::fs::remove_file(self.path(key)) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => tracing::warn!(error = %e, key, "failed to remove session entry"),
        }
    }
}
