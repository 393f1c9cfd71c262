//! Error type for the authenticated request pipeline.
//!
//! ERROR HANDLING
//! ==============
//! Transports flatten their platform errors into strings so the core stays
//! free of `reqwest`/`gloo-net` types. Callers branch on
//! [`ApiError::needs_login`] to decide whether to send the user back to the
//! login screen.

/// Errors returned by [`crate::AuthClient`] and the endpoint helpers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("request failed: {0}")]
    Transport(String),
    /// The server answered with a non-success status.
    #[error("server returned {status}: {body}")]
    Status { status: u16, body: String },
    /// The response body did not match the expected schema.
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
    /// The refresh token was rejected; the stored session has been cleared.
    #[error("session expired; log in again")]
    SessionExpired,
    /// Login was rejected.
    #[error("invalid username or password")]
    InvalidCredentials,
    /// A todo title was blank after trimming.
    #[error("todo title is empty")]
    EmptyTitle,
    /// No todo with this id exists in the current list.
    #[error("todo {0} not found")]
    TodoNotFound(i64),
}

impl ApiError {
    /// Whether the user must log in again before retrying.
    #[must_use]
    pub fn needs_login(&self) -> bool {
        match self {
            Self::SessionExpired => true,
            Self::Status { status, .. } => *status == 401,
            _ => false,
        }
    }

    /// HTTP status for server errors, if any.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;
