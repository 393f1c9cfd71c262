//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical unauthenticated redirect behavior.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::app::{LOGIN_ROUTE, TODOS_ROUTE};
use crate::state::auth::AuthState;

/// Whether a protected route should bounce to login.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.authenticated
}

/// Whether the login route should skip straight to the list.
pub fn should_skip_login(state: &AuthState) -> bool {
    state.authenticated
}

/// Redirect to the login route whenever no session is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate(LOGIN_ROUTE, NavigateOptions::default());
        }
    });
}

/// Redirect an already signed-in tab from login to the list.
pub fn install_signed_in_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_skip_login(&auth.get()) {
            navigate(TODOS_ROUTE, NavigateOptions::default());
        }
    });
}
