use serde::{Deserialize, Serialize};

use super::{Store, SubscriptionId};

/// The currently known user.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub username: String,
    // Carried as received from the login form; never logged.
    #[serde(default)]
    pub password: String,
}

impl std::fmt::Debug for UserProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserProfile")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Clone)]
pub struct UserStore {
    user: Store<Option<UserProfile>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self {
            user: Store::new("user", None),
        }
    }

    pub fn get(&self) -> Option<UserProfile> {
        self.user.get()
    }

    pub fn set(&self, user: UserProfile) {
        self.user.set(Some(user));
    }

    pub fn clear(&self) {
        self.user.set(None);
    }

    pub fn store(&self) -> &Store<Option<UserProfile>> {
        &self.user
    }

    pub fn subscribe(&self, subscriber: impl Fn(&Option<UserProfile>) + 'static) -> SubscriptionId {
        self.user.subscribe(subscriber)
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}
