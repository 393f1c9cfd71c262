//! Todo and profile endpoints on top of [`AuthClient`].
//!
//! DESIGN
//! ======
//! The todo list is a read-through cache: after a successful mutation the
//! `*_and_reload` helpers refetch the whole list instead of patching the local
//! copy. A failed mutation returns its error and skips the refetch.

use crate::client::AuthClient;
use crate::error::ApiError;
use crate::request::{ApiRequest, Upload};
use crate::session::SessionStore;
use crate::transport::Transport;
use crate::types::{NewTodo, Profile, Todo, TodoPatch};

pub const TODOS_PATH: &str = "/todos/";
pub const PROFILE_PATH: &str = "/profile/";
/// Multipart field the profile endpoint reads the image from.
pub const PROFILE_IMAGE_FIELD: &str = "profile_image";
/// Shown when the profile has no image.
pub const PLACEHOLDER_AVATAR: &str = "https://semantic-ui.com/images/wireframe/square-image.png";

#[must_use]
pub fn todo_path(id: i64) -> String {
    format!("/todos/{id}/")
}

/// Trimmed title, or `None` when nothing would be left to submit.
#[must_use]
pub fn normalize_title(title: &str) -> Option<&str> {
    let trimmed = title.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Make a profile image URL absolute.
///
/// URLs that already start with `http` are returned unchanged; anything else
/// is treated as origin-relative (e.g. `/media/avatars/a.png`).
#[must_use]
pub fn resolve_image_url(origin: &str, url: &str) -> String {
    if url.starts_with("http") {
        return url.to_owned();
    }
    let origin = origin.trim_end_matches('/');
    if url.starts_with('/') { format!("{origin}{url}") } else { format!("{origin}/{url}") }
}

impl<T: Transport, S: SessionStore> AuthClient<T, S> {
    /// # Errors
    ///
    /// See [`AuthClient::send`]; also [`ApiError::Decode`] for a malformed list.
    pub async fn list_todos(&self) -> Result<Vec<Todo>, ApiError> {
        self.send(&ApiRequest::get(TODOS_PATH)).await?.json()
    }

    /// Create a todo. Blank titles are rejected before any request is made.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::EmptyTitle`] for blank input, otherwise see
    /// [`AuthClient::send`].
    pub async fn create_todo(&self, title: &str) -> Result<(), ApiError> {
        if normalize_title(title).is_none() {
            return Err(ApiError::EmptyTitle);
        }
        let request = ApiRequest::post_json(TODOS_PATH, &NewTodo { title })?;
        self.send(&request).await?;
        Ok(())
    }

    /// Flip completion: sends `complete = !current`.
    ///
    /// # Errors
    ///
    /// See [`AuthClient::send`].
    pub async fn toggle_todo(&self, id: i64, current: bool) -> Result<(), ApiError> {
        let request = ApiRequest::patch_json(todo_path(id), &TodoPatch { complete: !current })?;
        self.send(&request).await?;
        Ok(())
    }

    /// # Errors
    ///
    /// See [`AuthClient::send`].
    pub async fn delete_todo(&self, id: i64) -> Result<(), ApiError> {
        self.send(&ApiRequest::delete(todo_path(id))).await?;
        Ok(())
    }

    /// # Errors
    ///
    /// Same as [`AuthClient::create_todo`] followed by [`AuthClient::list_todos`].
    pub async fn add_and_reload(&self, title: &str) -> Result<Vec<Todo>, ApiError> {
        self.create_todo(title).await?;
        self.list_todos().await
    }

    /// # Errors
    ///
    /// Same as [`AuthClient::toggle_todo`] followed by [`AuthClient::list_todos`].
    pub async fn toggle_and_reload(&self, id: i64, current: bool) -> Result<Vec<Todo>, ApiError> {
        self.toggle_todo(id, current).await?;
        self.list_todos().await
    }

    /// # Errors
    ///
    /// Same as [`AuthClient::delete_todo`] followed by [`AuthClient::list_todos`].
    pub async fn delete_and_reload(&self, id: i64) -> Result<Vec<Todo>, ApiError> {
        self.delete_todo(id).await?;
        self.list_todos().await
    }

    /// # Errors
    ///
    /// See [`AuthClient::send`].
    pub async fn fetch_profile(&self) -> Result<Profile, ApiError> {
        self.send(&ApiRequest::get(PROFILE_PATH)).await?.json()
    }

    /// Upload a new profile image as `multipart/form-data`.
    ///
    /// # Errors
    ///
    /// See [`AuthClient::send`].
    pub async fn upload_profile_image(&self, mut upload: Upload) -> Result<Profile, ApiError> {
        PROFILE_IMAGE_FIELD.clone_into(&mut upload.field);
        self.send(&ApiRequest::patch_multipart(PROFILE_PATH, upload)).await?.json()
    }
}

#[cfg(test)]
#[path = "todos_test.rs"]
mod todos_test;
