//! # client
//!
//! Leptos + WASM frontend for the todo app.
//!
//! This crate contains pages, components, application state and the browser
//! adapters (`gloo-net` transport, `sessionStorage` session store) that plug
//! into the shared `todo-api` request pipeline.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
