//! Authenticated request pipeline.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`AuthClient::send`] is the only path protected endpoints take. It reads
//! the bearer token from the session store on every call, so a token written
//! by a refresh in one request is visible to the next.
//!
//! RETRY POLICY
//! ============
//! A 401 triggers at most one refresh and one replay per request. The replay
//! is sent straight to the transport, so a second 401 is final and can never
//! start another refresh. The refresh call itself and login also bypass the
//! interceptor.

use log::{debug, warn};

use crate::error::ApiError;
use crate::request::{ApiRequest, ApiResponse};
use crate::session::{ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, Session, SessionStore, USERNAME_KEY};
use crate::transport::Transport;
use crate::types::{AccessToken, Credentials, RefreshRequest, TokenPair};

/// Token endpoint; exchanges credentials for an access/refresh pair.
pub const TOKEN_PATH: &str = "/token/";
/// Refresh endpoint; exchanges a refresh token for a new access token.
pub const TOKEN_REFRESH_PATH: &str = "/token/refresh/";

/// REST client that owns the session and the refresh-once policy.
#[derive(Debug)]
pub struct AuthClient<T, S> {
    transport: T,
    store: S,
}

impl<T: Transport, S: SessionStore> AuthClient<T, S> {
    pub fn new(transport: T, store: S) -> Self {
        Self { transport, store }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Current session, if an access token is stored.
    pub fn session(&self) -> Option<Session> {
        Session::load(&self.store)
    }

    pub fn username(&self) -> Option<String> {
        self.store.get(USERNAME_KEY)
    }

    pub fn is_authenticated(&self) -> bool {
        self.session().is_some()
    }

    /// Exchange credentials for tokens and store them with the username.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidCredentials`] for any non-success answer or
    /// malformed token payload, and [`ApiError::Transport`] when the server is
    /// unreachable.
    pub async fn login(&self, username: &str, password: &str) -> Result<Session, ApiError> {
        let request = ApiRequest::post_json(TOKEN_PATH, &Credentials { username, password })?;
        let response = self.transport.send(&request, None).await?;
        if !response.is_success() {
            debug!("login rejected with status {}", response.status);
            return Err(ApiError::InvalidCredentials);
        }
        let tokens: TokenPair = response.json().map_err(|_| ApiError::InvalidCredentials)?;
        let session = Session {
            access_token: tokens.access,
            refresh_token: Some(tokens.refresh),
            username: Some(username.to_owned()),
        };
        session.save(&self.store);
        Ok(session)
    }

    /// Drop every stored session value.
    pub fn logout(&self) {
        self.store.clear();
    }

    /// Send a protected request, refreshing the access token once on 401.
    ///
    /// # Errors
    ///
    /// - [`ApiError::SessionExpired`] when the refresh call fails; the store
    ///   has been cleared and the caller should show the login screen.
    /// - [`ApiError::Status`] for any other non-success answer, including a
    ///   401 on the replayed request.
    /// - [`ApiError::Transport`] when no response was received.
    pub async fn send(&self, request: &ApiRequest) -> Result<ApiResponse, ApiError> {
        let bearer = self.store.get(ACCESS_TOKEN_KEY).filter(|t| !t.is_empty());
        let response = self.transport.send(request, bearer.as_deref()).await?;
        if !response.is_unauthorized() {
            return response.error_for_status();
        }

        let Some(refresh_token) = self.store.get(REFRESH_TOKEN_KEY).filter(|t| !t.is_empty()) else {
            return response.error_for_status();
        };

        let access = match self.refresh(&refresh_token).await {
            Ok(access) => access,
            Err(err) => {
                debug!("token refresh failed: {err}");
                warn!("Session expired. Please log in again.");
                self.store.clear();
                return Err(ApiError::SessionExpired);
            }
        };
        self.store.set(ACCESS_TOKEN_KEY, &access);

        debug!("replaying {} {} with refreshed token", request.method.as_str(), request.path);
        self.transport
            .send(request, Some(&access))
            .await?
            .error_for_status()
    }

    async fn refresh(&self, refresh_token: &str) -> Result<String, ApiError> {
        let request = ApiRequest::post_json(TOKEN_REFRESH_PATH, &RefreshRequest { refresh: refresh_token })?;
        let response = self.transport.send(&request, None).await?.error_for_status()?;
        let token: AccessToken = response.json()?;
        if token.access.is_empty() {
            return Err(ApiError::Transport("refresh returned an empty access token".to_owned()));
        }
        Ok(token.access)
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;
