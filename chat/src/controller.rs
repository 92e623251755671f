//! Conversation controller: the chat widget's state machine.
//!
//! DESIGN
//! ======
//! The controller never sleeps or spawns. Anything deferred (the one-shot
//! greeting, each staged bot reply) is returned as an [`Effect::Schedule`]
//! carrying a [`TimerId`]; the host arms a real timer and calls
//! [`Conversation::fire`] when it elapses. Teardown returns
//! [`Effect::Cancel`] for every outstanding timer and flips the session to
//! [`Lifecycle::TornDown`], after which late `fire` calls are ignored. A
//! timer that slips through host cancellation therefore cannot write to a
//! dead session.
//!
//! States: `closed <-> open` (visibility) and `idle <-> typing` (a reply is
//! pending). The two are independent: closing the widget does not cancel a
//! pending reply, it still lands in the log.
//!
//! Several replies may be pending at once if the host lets the user submit
//! while typing. Each has its own timer and lands in timer order; the widget
//! reports `typing` until the last one fires.

use std::collections::BTreeMap;
use std::time::Duration;

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::intent::{Resolution, Resolver};
use crate::message::{Message, MessageId, MessageLog};
use crate::script;

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

const DEFAULT_GREETING_DELAY: Duration = Duration::from_secs(5);
const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(800);
const DEFAULT_REPLY_JITTER: Duration = Duration::from_millis(400);

/// Tunables for one chat session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConversationConfig {
    pub greeting: String,
    pub greeting_delay: Duration,
    /// Minimum simulated typing time before a reply appears.
    pub reply_delay: Duration,
    /// Upper bound (exclusive) of the random extra added to `reply_delay`.
    pub reply_jitter: Duration,
    pub quick_replies: Vec<String>,
    pub external_chat_url: String,
}

impl Default for ConversationConfig {
    fn default() -> Self {
        Self {
            greeting: script::GREETING.to_owned(),
            greeting_delay: DEFAULT_GREETING_DELAY,
            reply_delay: DEFAULT_REPLY_DELAY,
            reply_jitter: DEFAULT_REPLY_JITTER,
            quick_replies: script::QUICK_REPLIES.iter().map(|s| (*s).to_owned()).collect(),
            external_chat_url: script::EXTERNAL_CHAT_URL.to_owned(),
        }
    }
}

/// Handle for a deferred callback the host must arm.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

/// Work the host carries out on the controller's behalf.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Arm a one-shot timer; call [`Conversation::fire`] with `timer` when it elapses.
    Schedule { timer: TimerId, delay: Duration },
    /// Disarm a timer previously scheduled.
    Cancel(TimerId),
    /// Route to the contact page.
    GoToContact,
    /// Open a link in a new browsing context.
    OpenExternal(String),
}

/// Follow-up actions offered on bot messages flagged `has_action`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EscapeAction {
    ContactForm,
    ExternalChat,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Lifecycle {
    #[default]
    Created,
    Mounted,
    TornDown,
}

#[derive(Clone, Debug)]
enum Pending {
    Greeting,
    Reply(Resolution),
}

/// One mounted chat widget's state: log, visibility, draft, pending timers.
#[derive(Clone, Debug)]
pub struct Conversation {
    config: ConversationConfig,
    resolver: Resolver,
    log: MessageLog,
    draft: String,
    open: bool,
    lifecycle: Lifecycle,
    timers: BTreeMap<TimerId, Pending>,
    next_timer: u64,
    rng: StdRng,
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new(ConversationConfig::default(), 0)
    }
}

impl Conversation {
    /// `seed` drives the reply jitter; pass something random in production.
    #[must_use]
    pub fn new(config: ConversationConfig, seed: u64) -> Self {
        Self {
            config,
            resolver: Resolver::default(),
            log: MessageLog::new(),
            draft: String::new(),
            open: false,
            lifecycle: Lifecycle::Created,
            timers: BTreeMap::new(),
            next_timer: 0,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    #[must_use]
    pub fn with_resolver(mut self, resolver: Resolver) -> Self {
        self.resolver = resolver;
        self
    }

    // --- Lifecycle ---

    /// Start the session: arms the greeting timer. Only the first call does anything.
    pub fn mount(&mut self) -> Vec<Effect> {
        if self.lifecycle != Lifecycle::Created {
            return Vec::new();
        }
        self.lifecycle = Lifecycle::Mounted;
        let delay = self.config.greeting_delay;
        let timer = self.schedule(Pending::Greeting);
        debug!("chat: mounted, greeting in {}ms", delay.as_millis());
        vec![Effect::Schedule { timer, delay }]
    }

    /// End the session: cancels all outstanding timers. Terminal.
    pub fn unmount(&mut self) -> Vec<Effect> {
        if self.lifecycle == Lifecycle::TornDown {
            return Vec::new();
        }
        self.lifecycle = Lifecycle::TornDown;
        let cancelled = std::mem::take(&mut self.timers);
        debug!("chat: torn down, cancelling {} timer(s)", cancelled.len());
        cancelled.into_keys().map(Effect::Cancel).collect()
    }

    /// Deliver an elapsed timer. Returns the appended message, if any.
    pub fn fire(&mut self, timer: TimerId, now_ms: f64) -> Option<&Message> {
        if self.lifecycle == Lifecycle::TornDown {
            return None;
        }
        match self.timers.remove(&timer)? {
            Pending::Greeting => {
                if !self.log.is_empty() {
                    return None;
                }
                let greeting = self.config.greeting.clone();
                Some(self.log.push_bot(greeting, now_ms, false))
            }
            Pending::Reply(resolution) => Some(self.log.push_bot(resolution.text, now_ms, resolution.has_action)),
        }
    }

    // --- Visibility ---

    /// Flip visibility; returns the new state.
    pub fn toggle_open(&mut self) -> bool {
        if self.lifecycle != Lifecycle::TornDown {
            self.open = !self.open;
        }
        self.open
    }

    pub fn open(&mut self) {
        if self.lifecycle != Lifecycle::TornDown {
            self.open = true;
        }
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    // --- Input ---

    pub fn set_draft(&mut self, text: impl Into<String>) {
        if self.lifecycle != Lifecycle::TornDown {
            self.draft = text.into();
        }
    }

    /// Submit the input buffer. Blank drafts are left untouched.
    pub fn submit_draft(&mut self, now_ms: f64) -> Vec<Effect> {
        if self.draft.trim().is_empty() {
            return Vec::new();
        }
        let text = self.draft.clone();
        self.send(&text, now_ms)
    }

    /// Quick-reply chips submit their label exactly as if it were typed.
    pub fn select_quick_reply(&mut self, label: &str, now_ms: f64) -> Vec<Effect> {
        self.send(label, now_ms)
    }

    /// Append the user's message and stage the bot's reply.
    ///
    /// Whitespace-only text is rejected silently: no message, no typing state,
    /// no resolver call. Accepted text is logged as given, untrimmed.
    pub fn send(&mut self, text: &str, now_ms: f64) -> Vec<Effect> {
        if self.lifecycle == Lifecycle::TornDown || text.trim().is_empty() {
            return Vec::new();
        }

        self.log.push_user(text, now_ms);
        self.draft.clear();

        let resolution = self.resolver.resolve(text);
        let delay = self.reply_delay();
        let timer = self.schedule(Pending::Reply(resolution));
        vec![Effect::Schedule { timer, delay }]
    }

    /// Run a follow-up action from a bot message.
    ///
    /// Ignored unless `message_id` names a bot message with `has_action`.
    pub fn trigger_action(&mut self, message_id: MessageId, action: EscapeAction) -> Vec<Effect> {
        if self.lifecycle == Lifecycle::TornDown {
            return Vec::new();
        }
        let offers_actions = self
            .log
            .get(message_id)
            .is_some_and(|m| m.is_bot() && m.has_action);
        if !offers_actions {
            return Vec::new();
        }

        match action {
            EscapeAction::ContactForm => {
                self.open = false;
                vec![Effect::GoToContact]
            }
            EscapeAction::ExternalChat => vec![Effect::OpenExternal(self.config.external_chat_url.clone())],
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn messages(&self) -> &[Message] {
        self.log.as_slice()
    }

    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// True while at least one staged reply has not landed.
    #[must_use]
    pub fn is_typing(&self) -> bool {
        self.pending_replies() > 0
    }

    #[must_use]
    pub fn pending_replies(&self) -> usize {
        self.timers
            .values()
            .filter(|p| matches!(p, Pending::Reply(_)))
            .count()
    }

    #[must_use]
    pub fn quick_replies(&self) -> &[String] {
        &self.config.quick_replies
    }

    #[must_use]
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    // --- Internals ---

    fn schedule(&mut self, pending: Pending) -> TimerId {
        let timer = TimerId(self.next_timer);
        self.next_timer += 1;
        self.timers.insert(timer, pending);
        timer
    }

    fn reply_delay(&mut self) -> Duration {
        let jitter_ms = u64::try_from(self.config.reply_jitter.as_millis()).unwrap_or(u64::MAX);
        if jitter_ms == 0 {
            return self.config.reply_delay;
        }
        self.config.reply_delay + Duration::from_millis(self.rng.random_range(0..jitter_ms))
    }
}
