//! Session persistence contract.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser keeps tokens in `sessionStorage`, the CLI in a JSON file. Both
//! expose the same flat string key/value surface, so [`SessionStore`] is
//! modelled on the Web Storage API: reads are optional, writes are
//! best-effort and `clear` drops everything.

use std::cell::RefCell;
use std::collections::HashMap;

/// Storage key for the bearer token.
pub const ACCESS_TOKEN_KEY: &str = "accessToken";
/// Storage key for the refresh token.
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";
/// Storage key for the display username.
pub const USERNAME_KEY: &str = "username";

/// Flat string storage for session state.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn clear(&self);
}

impl<S: SessionStore + ?Sized> SessionStore for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value);
    }

    fn clear(&self) {
        (**self).clear();
    }
}

/// Snapshot of a logged-in session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub username: Option<String>,
}

impl Session {
    /// Read the session from `store`. Returns `None` without an access token.
    pub fn load(store: &impl SessionStore) -> Option<Self> {
        let access_token = store.get(ACCESS_TOKEN_KEY).filter(|t| !t.is_empty())?;
        Some(Self {
            access_token,
            refresh_token: store.get(REFRESH_TOKEN_KEY).filter(|t| !t.is_empty()),
            username: store.get(USERNAME_KEY),
        })
    }

    /// Write every present field into `store`.
    pub fn save(&self, store: &impl SessionStore) {
        store.set(ACCESS_TOKEN_KEY, &self.access_token);
        if let Some(refresh) = &self.refresh_token {
            store.set(REFRESH_TOKEN_KEY, refresh);
        }
        if let Some(username) = &self.username {
            store.set(USERNAME_KEY, username);
        }
    }
}

/// In-process store; used by tests and as a scratch store for one-shot tools.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn clear(&self) {
        self.entries.borrow_mut().clear();
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;
