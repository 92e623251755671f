//! Scripted studio assistant for the marketing site chat widget.
//!
//! This crate has no browser or server dependencies. It owns the keyword
//! intent table, the append-only message log, and the conversation state
//! machine that decides when bot messages appear. Timers are not run here:
//! the controller hands [`controller::Effect`]s to its host (the Leptos
//! widget) and the host calls back into [`controller::Conversation::fire`]
//! when a timer elapses.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`intent`] | Ordered keyword rules and the pure resolver |
//! | [`controller`] | Conversation state machine (open/closed, typing, timers) |
//! | [`message`] | Message entity and the append-only log |
//! | [`script`] | Knowledge base answers, greeting, quick replies, links |

pub mod controller;
pub mod intent;
pub mod message;
pub mod script;

pub use controller::{Conversation, ConversationConfig, Effect, EscapeAction, TimerId};
pub use intent::{Intent, Resolution, Resolver, resolve};
pub use message::{Message, MessageId, MessageLog, Sender};
