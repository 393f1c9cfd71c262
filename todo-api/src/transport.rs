//! Pluggable HTTP transport.

use async_trait::async_trait;

use crate::error::ApiError;
use crate::request::{ApiRequest, ApiResponse};

/// Sends one request and returns whatever the server answered.
///
/// Implementations must not interpret status codes; 4xx/5xx come back as
/// `Ok(ApiResponse)`. Only failures that produced no response map to
/// [`ApiError::Transport`]. Futures are not `Send` so browser fetch
/// promises can back an implementation.
#[async_trait(?Send)]
pub trait Transport {
    /// Send `request`, adding `Authorization: Bearer <bearer>` when given.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] when no HTTP response was received.
    async fn send(&self, request: &ApiRequest, bearer: Option<&str>) -> Result<ApiResponse, ApiError>;
}

#[async_trait(?Send)]
impl<T: Transport + ?Sized> Transport for &T {
    async fn send(&self, request: &ApiRequest, bearer: Option<&str>) -> Result<ApiResponse, ApiError> {
        (**self).send(request, bearer).await
    }
}

/// Header value for a bearer token.
#[must_use]
pub fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}
