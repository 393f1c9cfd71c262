//! Networking modules for the REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` moves bytes with `gloo-net`, `api` wires it to the browser
//! session store and exposes the calls pages make.

pub mod api;
pub mod transport;
