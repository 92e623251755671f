//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page composes section components; the navbar, footer, and chat
//! widget live in the app shell around them.

pub mod contact;
pub mod home;
pub mod not_found;
pub mod work;
