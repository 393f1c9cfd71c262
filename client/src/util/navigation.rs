//! Hard navigation helpers for auth failures.
//!
//! A failed token refresh leaves the in-memory app state stale, so the login
//! redirect reloads the page instead of using the client router.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

/// Page origin such as `http://localhost:3000`; empty outside the browser.
pub fn origin() -> String {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "csr"))]
    {
        String::new()
    }
}

/// Reload the app on the login route.
pub fn redirect_to_login() {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(crate::app::LOGIN_ROUTE);
        }
    }
}

/// Resolve a profile image URL against the current page origin.
pub fn absolute_image_url(url: &str) -> String {
    todo_api::resolve_image_url(&origin(), url)
}

/// Route a failed login-gated call: `true` when the user was sent to login.
pub fn redirect_if_unauthenticated(err: &todo_api::ApiError) -> bool {
    if err.needs_login() {
        redirect_to_login();
        return true;
    }
    false
}
