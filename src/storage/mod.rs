//! Persistent key-value facade over browser `localStorage`.
//!
//! Keys are restricted to [`StorageKey`], values are stored as JSON.
//! Reads are fail-soft: anything that goes wrong (storage disabled,
//! malformed JSON) is logged and surfaces as `None`. Writes log failures
//! too but also hand the error back so callers can be strict if they want.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

/// Logical storage keys. Each maps to a fixed physical key string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    /// User's chosen UI language
    Language,
    /// Session token issued at login
    AuthToken,
}

impl StorageKey {
    pub const ALL: [StorageKey; 2] = [StorageKey::Language, StorageKey::AuthToken];

    /// Physical key used in the backing store
    pub const fn as_str(self) -> &'static str {
        match self {
            StorageKey::Language => "language",
            StorageKey::AuthToken => "auth-token",
        }
    }
}

impl std::fmt::Display for StorageKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage is not available")]
    Unavailable,
    #[error("storage quota exceeded writing {key} ({needed} bytes, {limit} allowed)")]
    QuotaExceeded {
        key: String,
        needed: usize,
        limit: usize,
    },
    #[error("storage backend error: {0}")]
    Backend(String),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Raw string storage, shaped like the Web Storage API.
pub trait StorageBackend {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// In-memory backend used during SSR and in tests.
///
/// An optional byte limit mimics the browser's quota so write failures can
/// be exercised without a browser.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
    limit: Option<usize>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(limit: usize) -> Self {
        Self {
            items: RefCell::new(HashMap::new()),
            limit: Some(limit),
        }
    }

    fn used_bytes_excluding(&self, key: &str) -> usize {
        self.items
            .borrow()
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }
}

impl StorageBackend for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if let Some(limit) = self.limit {
            let needed = self.used_bytes_excluding(key) + key.len() + value.len();
            if needed > limit {
                return Err(StorageError::QuotaExceeded {
                    key: key.to_string(),
                    needed,
                    limit,
                });
            }
        }
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

/// `window.localStorage` backend (WASM only).
#[cfg(target_arch = "wasm32")]
pub struct BrowserStorage {
    storage: web_sys::Storage,
}

#[cfg(target_arch = "wasm32")]
impl BrowserStorage {
    /// Returns `None` when there is no window or storage is disabled.
    pub fn open() -> Option<Self> {
        let storage = web_sys::window()?.local_storage().ok().flatten()?;
        Some(Self { storage })
    }
}

#[cfg(target_arch = "wasm32")]
fn js_error(err: wasm_bindgen::JsValue) -> StorageError {
    StorageError::Backend(format!("{:?}", err))
}

#[cfg(target_arch = "wasm32")]
impl StorageBackend for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage.get_item(key).map_err(js_error)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage.set_item(key, value).map_err(js_error)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.storage.remove_item(key).map_err(js_error)
    }
}

/// Pick the platform backend: `localStorage` in the browser, memory elsewhere.
pub fn default_backend() -> Rc<dyn StorageBackend> {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(storage) = BrowserStorage::open() {
            return Rc::new(storage);
        }
        warn!("localStorage unavailable, falling back to in-memory storage");
    }
    Rc::new(MemoryStorage::new())
}

/// Typed JSON facade over a [`StorageBackend`].
#[derive(Clone)]
pub struct KeyValueStore {
    backend: Rc<dyn StorageBackend>,
}

impl KeyValueStore {
    pub fn new(backend: Rc<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// Read and decode `key`. Missing, unreadable or malformed values are `None`.
    pub fn get<T: DeserializeOwned>(&self, key: StorageKey) -> Option<T> {
        match self.try_get(key) {
            Ok(value) => value,
            Err(e) => {
                warn!("Failed to read {} from storage: {}", key, e);
                None
            }
        }
    }

    /// Strict read for callers that need to tell "absent" from "broken".
    pub fn try_get<T: DeserializeOwned>(
        &self,
        key: StorageKey,
    ) -> Result<Option<T>, StorageError> {
        let Some(raw) = self.backend.get_item(key.as_str())? else {
            return Ok(None);
        };
        Ok(Some(serde_json::from_str(&raw)?))
    }

    /// Encode and write `value`. Failures are logged; the result is returned
    /// for callers that care.
    pub fn set<T: Serialize + ?Sized>(
        &self,
        key: StorageKey,
        value: &T,
    ) -> Result<(), StorageError> {
        let result = serde_json::to_string(value)
            .map_err(StorageError::from)
            .and_then(|raw| self.backend.set_item(key.as_str(), &raw));
        match &result {
            Ok(()) => debug!("Stored {}", key),
            Err(e) => warn!("Failed to write {} to storage: {}", key, e),
        }
        result
    }

    pub fn remove(&self, key: StorageKey) -> Result<(), StorageError> {
        let result = self.backend.remove_item(key.as_str());
        if let Err(e) = &result {
            warn!("Failed to remove {} from storage: {}", key, e);
        }
        result
    }

    /// Cheap presence check, no JSON decoding.
    pub fn contains(&self, key: StorageKey) -> bool {
        matches!(self.backend.get_item(key.as_str()), Ok(Some(_)))
    }
}
