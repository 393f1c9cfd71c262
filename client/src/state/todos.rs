//! Todo-list state for the list page.
//!
//! DESIGN
//! ======
//! `items` is a read-through cache of the server list. Pages replace it
//! wholesale with the refetched list after each mutation; nothing here edits
//! individual items.

#[cfg(test)]
#[path = "todos_test.rs"]
mod todos_test;

use todo_api::{PLACEHOLDER_AVATAR, Todo};

/// Shared list state backed by REST calls.
#[derive(Clone, Debug, Default)]
pub struct TodosState {
    pub items: Vec<Todo>,
    pub loading: bool,
    pub error: Option<String>,
    /// Resolved profile image URL, if the user has one.
    pub profile_image: Option<String>,
}

impl TodosState {
    /// Replace the cached list with a fresh server copy.
    pub fn replace(&mut self, items: Vec<Todo>) {
        self.items = items;
        self.loading = false;
        self.error = None;
    }

    /// Image shown in the header avatar.
    pub fn avatar_src(&self) -> String {
        self.profile_image.clone().unwrap_or_else(|| PLACEHOLDER_AVATAR.to_owned())
    }
}

/// Heading for the item at zero-based `index`, e.g. `"1 | Buy milk"`.
pub fn item_heading(index: usize, title: &str) -> String {
    format!("{} | {title}", index + 1)
}

/// Completion badge text.
pub fn status_label(complete: bool) -> &'static str {
    if complete { "Completed" } else { "Not Complete" }
}

/// Badge modifier class.
pub fn status_class(complete: bool) -> &'static str {
    if complete { "ui green label" } else { "ui gray label" }
}
