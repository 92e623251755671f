//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`chat`, `contact`) so components depend on small
//! focused models that can be tested without a browser.

pub mod chat;
pub mod contact;
