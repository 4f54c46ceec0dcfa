//! Auth session: the token in storage is the source of truth.

use tracing::info;

use super::Store;
use crate::storage::{KeyValueStore, StorageError, StorageKey};

/// Session token persistence plus an observable "signed in" flag.
///
/// [`SessionStore::is_authenticated`] reads storage directly so it is always
/// current; the flag only exists so components can re-render on change.
#[derive(Clone)]
pub struct SessionStore {
    storage: KeyValueStore,
    flag: Store<bool>,
}

impl SessionStore {
    pub fn new(storage: KeyValueStore) -> Self {
        let signed_in = storage.contains(StorageKey::AuthToken);
        Self {
            storage,
            flag: Store::new("session", signed_in),
        }
    }

    pub fn token(&self) -> Option<String> {
        self.storage.get(StorageKey::AuthToken)
    }

    pub fn is_authenticated(&self) -> bool {
        self.storage.contains(StorageKey::AuthToken)
    }

    pub fn sign_in(&self, token: &str) -> Result<(), StorageError> {
        self.storage.set(StorageKey::AuthToken, token)?;
        info!("Session started");
        self.flag.set(true);
        Ok(())
    }

    pub fn sign_out(&self) {
        // Even if removal fails the UI treats the session as over
        let _ = self.storage.remove(StorageKey::AuthToken);
        info!("Session ended");
        self.flag.set(false);
    }

    pub fn flag(&self) -> &Store<bool> {
        &self.flag
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStorage, StorageBackend};
    use std::rc::Rc;

    #[test]
    fn test_initial_state_follows_storage() {
        let backend = Rc::new(MemoryStorage::new());
        backend.set_item("auth-token", "\"tok\"").unwrap();

        let session = SessionStore::new(KeyValueStore::new(backend));
        assert!(session.is_authenticated());
        assert!(session.flag().get());
        assert_eq!(session.token().as_deref(), Some("tok"));
    }

    #[test]
    fn test_sign_in_and_out() {
        let session = SessionStore::new(KeyValueStore::new(Rc::new(MemoryStorage::new())));
        assert!(!session.is_authenticated());

        session.sign_in("abc").unwrap();
        assert!(session.is_authenticated());
        assert!(session.flag().get());

        session.sign_out();
        assert!(!session.is_authenticated());
        assert!(!session.flag().get());
        assert_eq!(session.token(), None);
    }

    #[test]
    fn test_failed_sign_in_keeps_signed_out() {
        let session = SessionStore::new(KeyValueStore::new(Rc::new(MemoryStorage::with_limit(4))));
        assert!(session.sign_in("token").is_err());
        assert!(!session.is_authenticated());
        assert!(!session.flag().get());
    }
}
