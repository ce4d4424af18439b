//! Persistent token storage
//!
//! [`TokenStore`] is the durability backing of the session: one string under
//! one key. Backend failures never reach the caller; they are logged and the
//! session carries on in memory only.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use thiserror::Error;

/// Storage backend errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// The backend cannot be reached (no window, storage disabled, ...)
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// The backend rejected the operation (quota, security policy, ...)
    #[error("storage operation failed: {0}")]
    Backend(String),
}

/// Origin-scoped durable key-value store
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// In-memory backend. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with one entry
    pub fn with_item(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .items
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

/// `window.localStorage` backend
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

#[cfg(target_arch = "wasm32")]
impl BrowserStorage {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        let window =
            web_sys::window().ok_or_else(|| StorageError::Unavailable("no window".into()))?;
        window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(format!("{e:?}")))?
            .ok_or_else(|| StorageError::Unavailable("localStorage disabled".into()))
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| StorageError::Backend(format!("{e:?}")))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Backend(format!("{e:?}")))
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        Self::storage()?
            .remove_item(key)
            .map_err(|e| StorageError::Backend(format!("{e:?}")))
    }
}

/// Single-key token store over a [`KeyValueStore`]
#[derive(Clone)]
pub struct TokenStore {
    backend: Rc<dyn KeyValueStore>,
    key: String,
}

impl TokenStore {
    pub fn new(backend: Rc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn get(&self) -> Option<String> {
        match self.backend.get_item(&self.key) {
            Ok(token) => token,
            Err(error) => {
                tracing::warn!(%error, "could not read stored token");
                None
            }
        }
    }

    pub fn set(&self, token: &str) {
        if let Err(error) = self.backend.set_item(&self.key, token) {
            tracing::warn!(%error, "could not persist token; session is memory-only");
        }
    }

    pub fn clear(&self) {
        if let Err(error) = self.backend.remove_item(&self.key) {
            tracing::warn!(%error, "could not remove stored token");
        }
    }
}

impl std::fmt::Debug for TokenStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenStore")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memory_store() -> TokenStore {
        TokenStore::new(Rc::new(MemoryStore::new()), "authToken")
    }

    #[test]
    fn test_set_then_get_round_trip() {
        let store = memory_store();
        store.set("abc123");
        assert_eq!(store.get().as_deref(), Some("abc123"));
    }

    #[test]
    fn test_clear_removes_token() {
        let store = memory_store();
        store.set("abc123");
        store.clear();
        assert_eq!(store.get(), None);
        // Clearing an empty store is fine
        store.clear();
        assert_eq!(store.get(), None);
    }

    #[test]
    fn test_memory_store_clones_share_state() {
        let backend = MemoryStore::with_item("authToken", "abc123");
        let store = TokenStore::new(Rc::new(backend.clone()), "authToken");
        store.set("def456");
        assert_eq!(
            backend.get_item("authToken").unwrap().as_deref(),
            Some("def456")
        );
    }

    #[test]
    fn test_unavailable_backend_degrades_to_noop() {
        let mut backend = MockKeyValueStore::new();
        backend
            .expect_get_item()
            .returning(|_| Err(StorageError::Unavailable("disabled".into())));
        backend
            .expect_set_item()
            .times(1)
            .returning(|_, _| Err(StorageError::Backend("quota exceeded".into())));
        backend
            .expect_remove_item()
            .times(1)
            .returning(|_| Err(StorageError::Backend("denied".into())));

        let store = TokenStore::new(Rc::new(backend), "authToken");
        store.set("abc123");
        assert_eq!(store.get(), None);
        store.clear();
    }
}
