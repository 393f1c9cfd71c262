//! Auth-session state for the current browser tab.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and the header to coordinate login redirects and
//! username display. Tokens themselves stay in session storage; this state only
//! mirrors whether a session exists.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use todo_api::{Session, SessionStore};

/// Authentication state tracking the signed-in username.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub username: Option<String>,
    pub authenticated: bool,
}

impl AuthState {
    /// Mirror whatever session `store` currently holds.
    pub fn from_store(store: &impl SessionStore) -> Self {
        match Session::load(store) {
            Some(session) => Self { username: session.username, authenticated: true },
            None => Self::default(),
        }
    }

    /// State after a successful login.
    pub fn signed_in(username: &str) -> Self {
        Self { username: Some(username.to_owned()), authenticated: true }
    }

    /// Name shown in the header.
    pub fn display_name(&self) -> String {
        self.username.clone().unwrap_or_default()
    }
}
