//! Chat widget state and the browser host for its timers.
//!
//! DESIGN
//! ======
//! `ChatState` wraps a `chat::Conversation` so it can live in an `RwSignal`
//! context. The conversation never touches the clock itself; it hands back
//! `Effect`s, and [`dispatch`] routes each one to an [`EffectHost`].
//!
//! In the browser, [`BrowserHost`] arms a `gloo_timers` `Timeout` per
//! `Effect::Schedule` and keeps it in a [`TimerBook`]. Dropping a `Timeout`
//! clears the underlying `setTimeout`, so `Effect::Cancel` and teardown are
//! both "remove from the book". Timeouts that already fired are forgotten on
//! the next task, never from inside their own callback.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use std::collections::BTreeMap;
use std::time::Duration;

use chat::{Conversation, ConversationConfig, Effect, EscapeAction, MessageId, TimerId};
use leptos::prelude::*;

use crate::util::browser;

/// Reactive wrapper around one conversation.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub conversation: Conversation,
}

impl ChatState {
    /// `seed` drives reply jitter. Use [`browser::random_seed`] in production.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self { conversation: Conversation::new(ConversationConfig::default(), seed) }
    }

    /// The send button is live only with text to send and no reply pending.
    #[must_use]
    pub fn can_send(&self) -> bool {
        !self.conversation.is_typing() && !self.conversation.draft().trim().is_empty()
    }

    /// Chips and the input are locked while the assistant is typing.
    #[must_use]
    pub fn input_locked(&self) -> bool {
        self.conversation.is_typing()
    }
}

// =============================================================================
// EFFECT HOST
// =============================================================================

/// Side effects a conversation asks its host to perform.
pub trait EffectHost {
    fn arm(&mut self, timer: TimerId, delay: Duration);
    fn disarm(&mut self, timer: TimerId);
    fn navigate(&mut self, path: &str);
    fn open_external(&mut self, url: &str);
}

/// Route every effect to the host, in order.
pub fn dispatch(host: &mut impl EffectHost, effects: Vec<Effect>) {
    for effect in effects {
        match effect {
            Effect::Schedule { timer, delay } => host.arm(timer, delay),
            Effect::Cancel(timer) => host.disarm(timer),
            Effect::GoToContact => host.navigate(chat::script::CONTACT_ROUTE),
            Effect::OpenExternal(url) => host.open_external(&url),
        }
    }
}

// =============================================================================
// TIMER BOOK
// =============================================================================

/// Handle that keeps an armed browser timeout alive.
#[cfg(feature = "hydrate")]
pub type TimerHandle = gloo_timers::callback::Timeout;

/// Without `hydrate` nothing is ever armed: the server renders the widget
/// but never runs its timers.
#[cfg(not(feature = "hydrate"))]
pub type TimerHandle = ();

/// Live timer handles keyed by conversation timer id. Removing a handle
/// drops it, which cancels a `Timeout` that has not fired yet.
pub struct TimerBook<H = TimerHandle> {
    live: BTreeMap<TimerId, H>,
}

impl<H> Default for TimerBook<H> {
    fn default() -> Self {
        Self { live: BTreeMap::new() }
    }
}

impl TimerBook {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(feature = "hydrate")]
    pub fn arm(&mut self, timer: TimerId, delay: Duration, on_elapsed: impl FnOnce() + 'static) {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        self.insert(timer, gloo_timers::callback::Timeout::new(millis, on_elapsed));
    }

    #[cfg(not(feature = "hydrate"))]
    pub fn arm(&mut self, _timer: TimerId, _delay: Duration, _on_elapsed: impl FnOnce() + 'static) {}
}

impl<H> TimerBook<H> {
    /// Track `handle` under `timer`. A handle already stored there is dropped.
    pub fn insert(&mut self, timer: TimerId, handle: H) {
        self.live.insert(timer, handle);
    }

    /// Drop the handle for `timer`. Returns whether one was live.
    pub fn disarm(&mut self, timer: TimerId) -> bool {
        self.live.remove(&timer).is_some()
    }

    pub fn clear(&mut self) {
        self.live.clear();
    }

    #[must_use]
    pub fn contains(&self, timer: TimerId) -> bool {
        self.live.contains_key(&timer)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.live.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }
}

// =============================================================================
// BROWSER HOST
// =============================================================================

pub type Navigate = Box<dyn Fn(&str)>;

/// Signal handles needed to run a conversation's effects in the page.
#[derive(Clone, Copy)]
pub struct BrowserHost {
    chat: RwSignal<ChatState>,
    timers: StoredValue<TimerBook, LocalStorage>,
    navigate: StoredValue<Navigate, LocalStorage>,
}

impl BrowserHost {
    #[must_use]
    pub fn new(
        chat: RwSignal<ChatState>,
        timers: StoredValue<TimerBook, LocalStorage>,
        navigate: StoredValue<Navigate, LocalStorage>,
    ) -> Self {
        Self { chat, timers, navigate }
    }

    /// Run `f` against the conversation and dispatch whatever it asks for.
    pub fn apply(mut self, f: impl FnOnce(&mut Conversation) -> Vec<Effect>) {
        let effects = self.chat.try_update(|s| f(&mut s.conversation)).unwrap_or_default();
        dispatch(&mut self, effects);
    }

    pub fn mount(self) {
        self.apply(Conversation::mount);
    }

    /// Cancel everything the conversation still has outstanding, then drop
    /// any timeouts left in the book.
    pub fn unmount(self) {
        self.apply(Conversation::unmount);
        self.timers.try_update_value(TimerBook::clear);
    }

    pub fn toggle(self) {
        self.chat.update(|s| {
            s.conversation.toggle_open();
        });
    }

    pub fn close(self) {
        self.chat.update(|s| s.conversation.close());
    }

    pub fn set_draft(self, text: String) {
        self.chat.update(|s| s.conversation.set_draft(text));
    }

    pub fn submit_draft(self) {
        let now = browser::now_ms();
        self.apply(|c| c.submit_draft(now));
    }

    pub fn quick_reply(self, label: &str) {
        let now = browser::now_ms();
        self.apply(|c| c.select_quick_reply(label, now));
    }

    pub fn trigger(self, message: MessageId, action: EscapeAction) {
        self.apply(|c| c.trigger_action(message, action));
    }

    fn fire(self, timer: TimerId) {
        let now = browser::now_ms();
        self.chat.try_update(|s| {
            s.conversation.fire(timer, now);
        });
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            self.timers.try_update_value(|book| {
                book.disarm(timer);
            });
        });
    }
}

impl EffectHost for BrowserHost {
    fn arm(&mut self, timer: TimerId, delay: Duration) {
        let host = *self;
        self.timers
            .try_update_value(|book| book.arm(timer, delay, move || host.fire(timer)));
    }

    fn disarm(&mut self, timer: TimerId) {
        self.timers.try_update_value(|book| {
            book.disarm(timer);
        });
    }

    fn navigate(&mut self, path: &str) {
        self.navigate.try_with_value(|navigate| navigate(path));
    }

    fn open_external(&mut self, url: &str) {
        browser::open_external(url);
    }
}
