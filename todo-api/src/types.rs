//! Wire DTOs for the REST API.
//!
//! DESIGN
//! ======
//! Field names mirror the server's JSON exactly so serde needs no renames.
//! Request payloads borrow their strings; responses own theirs.

use serde::{Deserialize, Serialize};

/// A todo item as returned by `GET /todos/`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub complete: bool,
}

/// The current user's profile as returned by `/profile/`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Absolute or origin-relative image URL; `None` when no photo is set.
    #[serde(default)]
    pub profile_image: Option<String>,
}

/// Login response from `POST /token/`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

/// Refresh response from `POST /token/refresh/`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AccessToken {
    pub access: String,
}

/// Login request body.
#[derive(Debug, Serialize)]
pub struct Credentials<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Refresh request body.
#[derive(Debug, Serialize)]
pub struct RefreshRequest<'a> {
    pub refresh: &'a str,
}

/// Create-todo request body.
#[derive(Debug, Serialize)]
pub struct NewTodo<'a> {
    pub title: &'a str,
}

/// Partial update for a todo.
#[derive(Debug, Serialize)]
pub struct TodoPatch {
    pub complete: bool,
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
