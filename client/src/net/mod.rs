//! Networking modules for the contact relay.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the browser-side HTTP call and `types` defines the wire
//! schema shared with the server's `/api/contact` handler.

pub mod api;
pub mod types;
