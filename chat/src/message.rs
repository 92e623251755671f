//! Conversation messages and the append-only log that owns them.

use std::fmt;

use serde::{Deserialize, Serialize};
use time::{OffsetDateTime, UtcOffset};

#[cfg(test)]
#[path = "message_test.rs"]
mod message_test;

/// Who authored a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// Log-assigned identifier. Ids increase with creation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MessageId(u64);

impl MessageId {
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "msg-{}", self.0)
    }
}

/// A single entry in the conversation log.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub text: String,
    pub sender: Sender,
    /// Milliseconds since the Unix epoch. Display only.
    pub timestamp_ms: f64,
    /// Offer the contact-form and external-chat actions. Bot messages only.
    pub has_action: bool,
}

impl Message {
    #[must_use]
    pub fn is_bot(&self) -> bool {
        self.sender == Sender::Bot
    }

    /// Wall-clock `HH:MM` in the viewer's offset (minutes east of UTC).
    #[must_use]
    pub fn display_time(&self, utc_offset_minutes: i32) -> String {
        format_clock(self.timestamp_ms, utc_offset_minutes).unwrap_or_else(|| "--:--".to_owned())
    }
}

#[allow(clippy::cast_possible_truncation)]
fn format_clock(timestamp_ms: f64, utc_offset_minutes: i32) -> Option<String> {
    if !timestamp_ms.is_finite() {
        return None;
    }
    let nanos = (timestamp_ms * 1_000_000.0) as i128;
    let offset = UtcOffset::from_whole_seconds(utc_offset_minutes.checked_mul(60)?).ok()?;
    let local = OffsetDateTime::from_unix_timestamp_nanos(nanos).ok()?.checked_to_offset(offset)?;
    Some(format!("{:02}:{:02}", local.hour(), local.minute()))
}

// =============================================================================
// LOG
// =============================================================================

/// Ordered, append-only message sequence. Entries are never edited or removed.
#[derive(Clone, Debug, Default)]
pub struct MessageLog {
    entries: Vec<Message>,
    next_id: u64,
}

impl MessageLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a user message. User messages never carry actions.
    pub fn push_user(&mut self, text: impl Into<String>, timestamp_ms: f64) -> &Message {
        self.push(text.into(), Sender::User, timestamp_ms, false)
    }

    pub fn push_bot(&mut self, text: impl Into<String>, timestamp_ms: f64, has_action: bool) -> &Message {
        self.push(text.into(), Sender::Bot, timestamp_ms, has_action)
    }

    fn push(&mut self, text: String, sender: Sender, timestamp_ms: f64, has_action: bool) -> &Message {
        let id = MessageId(self.next_id);
        self.next_id += 1;
        let index = self.entries.len();
        self.entries.push(Message { id, text, sender, timestamp_ms, has_action });
        &self.entries[index]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Message] {
        &self.entries
    }

    #[must_use]
    pub fn get(&self, id: MessageId) -> Option<&Message> {
        match self.entries.binary_search_by_key(&id, |m| m.id) {
            Ok(index) => self.entries.get(index),
            Err(_) => None,
        }
    }

    #[must_use]
    pub fn last(&self) -> Option<&Message> {
        self.entries.last()
    }
}
