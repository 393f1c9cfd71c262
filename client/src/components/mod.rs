//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the list page chrome and items while reading/writing
//! shared state from Leptos context providers.

pub mod profile_menu;
pub mod todo_form;
pub mod todo_item;
