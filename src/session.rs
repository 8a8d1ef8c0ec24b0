//! Persisted session token service.
//!
//! ARCHITECTURE
//! ============
//! The bearer token is the only state that outlives a view. It lives in a
//! key/value [`TokenStorage`] under [`TOKEN_KEY`], and every reader and writer
//! goes through one [`SessionService`] instead of touching storage directly.
//! Writers publish the new value on a `watch` channel so navigation chrome and
//! other views can react without polling.
//!
//! TRADE-OFFS
//! ==========
//! Another process sharing the same file is only observed on
//! [`SessionService::refresh`]; consistency across processes is best effort.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::watch;

/// Storage key shared with the backend-facing auth flow.
pub const TOKEN_KEY: &str = "access_token";

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("session storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("session storage is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Minimal string key/value store, shaped after browser local storage.
pub trait TokenStorage: Send + Sync {
    /// Read a value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, SessionError>;

    /// Write a value, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be written.
    fn set_item(&self, key: &str, value: &str) -> Result<(), SessionError>;

    /// Remove a value. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be written.
    fn remove_item(&self, key: &str) -> Result<(), SessionError>;
}

// =============================================================================
// MEMORY STORAGE
// =============================================================================

/// Process-lifetime storage.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, SessionError> {
        let items = self.items.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), SessionError> {
        let mut items = self.items.lock().unwrap_or_else(PoisonError::into_inner);
        items.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), SessionError> {
        let mut items = self.items.lock().unwrap_or_else(PoisonError::into_inner);
        items.remove(key);
        Ok(())
    }
}

// =============================================================================
// FILE STORAGE
// =============================================================================

/// JSON-object file storage; the desktop analogue of local storage.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStorage {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), lock: Mutex::new(()) }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> Result<BTreeMap<String, String>, SessionError> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(e.into()),
        };
        if text.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&text)?)
    }

    fn write_map(&self, map: &BTreeMap<String, String>) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, serde_json::to_vec_pretty(map)?)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl TokenStorage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, SessionError> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(self.read_map()?.remove(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), SessionError> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut map = self.read_map()?;
        map.insert(key.to_owned(), value.to_owned());
        self.write_map(&map)
    }

    fn remove_item(&self, key: &str) -> Result<(), SessionError> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut map = self.read_map()?;
        if map.remove(key).is_none() {
            return Ok(());
        }
        self.write_map(&map)
    }
}

// =============================================================================
// SESSION SERVICE
// =============================================================================

/// Shared handle to the persisted session token.
///
/// Cloning is cheap; all clones observe the same storage and channel.
#[derive(Clone)]
pub struct SessionService {
    inner: Arc<SessionInner>,
}

struct SessionInner {
    storage: Arc<dyn TokenStorage>,
    changes: watch::Sender<Option<String>>,
}

impl SessionService {
    #[must_use]
    pub fn new(storage: Arc<dyn TokenStorage>) -> Self {
        let initial = read_token(storage.as_ref());
        let (changes, _) = watch::channel(initial);
        Self { inner: Arc::new(SessionInner { storage, changes }) }
    }

    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::new()))
    }

    /// Current token, read from storage on every call.
    ///
    /// Unreadable storage counts as signed out.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        read_token(self.inner.storage.as_ref())
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Persist a freshly issued token and notify subscribers.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage write fails; subscribers are not
    /// notified in that case.
    pub fn set_token(&self, token: &str) -> Result<(), SessionError> {
        self.inner.storage.set_item(TOKEN_KEY, token)?;
        self.inner.changes.send_replace(Some(token.to_owned()));
        tracing::info!("session token stored");
        Ok(())
    }

    /// Remove the token and notify subscribers.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage write fails.
    pub fn clear(&self) -> Result<(), SessionError> {
        self.inner.storage.remove_item(TOKEN_KEY)?;
        self.inner.changes.send_replace(None);
        tracing::info!("session token cleared");
        Ok(())
    }

    /// Receiver that yields the token every time it changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Option<String>> {
        self.inner.changes.subscribe()
    }

    /// Re-read storage and notify subscribers if someone else changed it.
    pub fn refresh(&self) -> Option<String> {
        let current = self.token();
        self.inner.changes.send_if_modified(|seen| {
            if *seen == current {
                return false;
            }
            seen.clone_from(&current);
            true
        });
        current
    }
}

impl std::fmt::Debug for SessionService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionService")
            .field("authenticated", &self.is_authenticated())
            .finish_non_exhaustive()
    }
}

fn read_token(storage: &dyn TokenStorage) -> Option<String> {
    match storage.get_item(TOKEN_KEY) {
        Ok(token) => token.filter(|t| !t.is_empty()),
        Err(error) => {
            tracing::warn!(%error, "session storage unreadable; treating as signed out");
            None
        }
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
