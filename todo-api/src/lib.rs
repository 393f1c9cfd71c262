//! Shared REST client core for the todo app.
//!
//! This crate owns the wire types, the session-storage contract and the
//! authenticated request pipeline used by both `client` (browser) and `cli`
//! (native). It has no opinion about how bytes move: callers plug in a
//! [`Transport`] and a [`SessionStore`] for their platform.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every request goes through [`AuthClient::send`], which attaches the stored
//! bearer token and performs at most one silent refresh on a 401 before
//! replaying the request.

pub mod client;
pub mod config;
pub mod error;
pub mod request;
pub mod session;
pub mod todos;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use client::AuthClient;
pub use config::Config;
pub use error::ApiError;
pub use request::{ApiRequest, ApiResponse, Method, RequestBody, Upload};
pub use session::{MemoryStore, Session, SessionStore};
pub use todos::{PLACEHOLDER_AVATAR, resolve_image_url};
pub use transport::Transport;
pub use types::{Profile, Todo};
