//! Transcript Turns
//!
//! Message format shared between the widget state machine and the chat
//! service boundary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Author of a transcript turn
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Visitor input
    User,
    /// Assistant reply (backend-supplied or the fixed fallback)
    Assistant,
}

impl Role {
    /// Lowercase wire name, as the chat API expects it
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single turn in a chat transcript
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Message {
    /// Author role
    pub role: Role,

    /// Text content
    pub content: String,

    /// When the turn was appended; shown beside the bubble, never sent on
    /// the wire
    #[serde(skip_serializing, default = "Utc::now")]
    pub sent_at: DateTime<Utc>,
}

impl Message {
    /// Create a new turn
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            sent_at: Utc::now(),
        }
    }

    /// Create a user turn
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    /// Create an assistant turn
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }
}

/// Ordered, append-only turn history for one widget session.
///
/// Insertion order is meaningful: the whole transcript is resent on every
/// outbound call. Nothing is persisted; the transcript lives and dies with
/// the mounted widget.
#[derive(Clone, Debug, Default)]
pub struct Transcript {
    turns: Vec<Message>,
}

impl Transcript {
    /// Empty transcript
    pub fn new() -> Self {
        Self::default()
    }

    /// Transcript opened by a single assistant greeting
    pub fn seeded(greeting: impl Into<String>) -> Self {
        let mut transcript = Self::new();
        transcript.push(Message::assistant(greeting));
        transcript
    }

    /// Append a turn
    pub fn push(&mut self, turn: Message) {
        self.turns.push(turn);
    }

    /// All turns, oldest first
    pub fn turns(&self) -> &[Message] {
        &self.turns
    }

    /// The most recent turn
    pub fn last(&self) -> Option<&Message> {
        self.turns.last()
    }

    /// Number of turns
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

impl IntoIterator for Transcript {
    type Item = Message;
    type IntoIter = std::vec::IntoIter<Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.turns.into_iter()
    }
}
