//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `todos`) so pages and components can
//! depend on small focused models.

pub mod auth;
pub mod todos;
