//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `browser` isolates clock, timezone, randomness, and window access so pages
//! and state modules stay testable without a DOM.

pub mod browser;
