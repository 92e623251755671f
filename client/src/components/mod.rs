//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome and sections; the chat widget and contact
//! form read/write their state modules and leave effects to the host.

pub mod chat_widget;
pub mod contact_form;
pub mod footer;
pub mod navbar;
pub mod sections;
