//! REST API calls made by pages.
//!
//! Every call builds a [`WebClient`] on demand: the transport only carries the
//! base URL and the store is a handle to `sessionStorage`, so there is no
//! shared client to keep alive.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics. Failures that require a new
//! login (refresh rejected, or a final 401) reload the app on the login route,
//! except for the profile fetch, which only logs. Everything else is logged
//! and left to the page to display.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use leptos::logging::warn;
use todo_api::{ApiError, AuthClient, Config, Todo, Upload};

use super::transport::GlooTransport;
use crate::util::navigation;
use crate::util::session_storage::BrowserSessionStore;

/// Browser REST client.
pub type WebClient = AuthClient<GlooTransport, BrowserSessionStore>;

/// Shown for any failed login attempt.
pub const LOGIN_FAILED_MESSAGE: &str = "Invalid username or password";
/// Shown when a profile photo upload fails.
pub const UPLOAD_FAILED_MESSAGE: &str =
    "Profile upload failed. Make sure your backend is running and the URL is correct.";

/// API config; the base can be overridden at build time with `TODO_API_BASE`.
pub fn config() -> Config {
    Config::from_override(option_env!("TODO_API_BASE"))
}

pub fn web_client() -> WebClient {
    AuthClient::new(GlooTransport::new(config()), BrowserSessionStore)
}

fn report(context: &str, err: &ApiError) {
    settle_failure(context, err, true);
}

/// Log a failed call; with `redirect`, also end the session when it needs a
/// new login. Returns whether the user was sent to login.
fn settle_failure(context: &str, err: &ApiError, redirect: bool) -> bool {
    warn!("{context}: {err}");
    if !redirect || !err.needs_login() {
        return false;
    }
    // Login redirects any tab that still holds tokens.
    logout();
    navigation::redirect_if_unauthenticated(err)
}

/// Log in and persist the session.
///
/// # Errors
///
/// Returns [`LOGIN_FAILED_MESSAGE`] for every failure.
pub async fn login(username: &str, password: &str) -> Result<(), &'static str> {
    web_client().login(username, password).await.map(|_| ()).map_err(|err| {
        warn!("login failed: {err}");
        LOGIN_FAILED_MESSAGE
    })
}

/// Clear the session.
pub fn logout() {
    web_client().logout();
}

/// Fetch the full todo list.
///
/// # Errors
///
/// Returns the underlying [`ApiError`] after logging it.
pub async fn fetch_todos() -> Result<Vec<Todo>, ApiError> {
    web_client().list_todos().await.inspect_err(|err| report("Error fetching todos", err))
}

/// Fetch the profile image, resolved against the page origin.
///
/// Failures are only logged; the list fetch owns the login redirect.
pub async fn fetch_profile_image() -> Option<String> {
    match web_client().fetch_profile().await {
        Ok(profile) => profile.profile_image.map(|url| navigation::absolute_image_url(&url)),
        Err(err) => {
            settle_failure("Error loading profile", &err, false);
            None
        }
    }
}

/// Create a todo, then refetch the list.
///
/// # Errors
///
/// Returns the underlying [`ApiError`] after logging it.
pub async fn add_todo(title: &str) -> Result<Vec<Todo>, ApiError> {
    web_client().add_and_reload(title).await.inspect_err(|err| report("Error adding todo", err))
}

/// Flip a todo's completion, then refetch the list.
///
/// # Errors
///
/// Returns the underlying [`ApiError`] after logging it.
pub async fn toggle_todo(id: i64, current: bool) -> Result<Vec<Todo>, ApiError> {
    web_client()
        .toggle_and_reload(id, current)
        .await
        .inspect_err(|err| report("Error updating todo", err))
}

/// Delete a todo, then refetch the list.
///
/// # Errors
///
/// Returns the underlying [`ApiError`] after logging it.
pub async fn delete_todo(id: i64) -> Result<Vec<Todo>, ApiError> {
    web_client().delete_and_reload(id).await.inspect_err(|err| report("Error deleting todo", err))
}

/// Upload a profile photo and return the new resolved image URL.
///
/// # Errors
///
/// Returns [`UPLOAD_FAILED_MESSAGE`] for any failure, including a response
/// without an image URL.
pub async fn upload_photo(upload: Upload) -> Result<String, &'static str> {
    match web_client().upload_profile_image(upload).await {
        Ok(profile) => profile
            .profile_image
            .map(|url| navigation::absolute_image_url(&url))
            .ok_or(UPLOAD_FAILED_MESSAGE),
        Err(err) => {
            report("Upload failed", &err);
            Err(UPLOAD_FAILED_MESSAGE)
        }
    }
}
