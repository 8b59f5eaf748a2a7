//! Chat domain entities

use serde::{Deserialize, Serialize};

/// Role of a message in a conversation.
///
/// Serialized as the lowercase tags `"system"`, `"user"` and `"assistant"`,
/// the same strings used in the session blob and on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl Role {
    /// The lowercase tag for this role.
    pub fn as_tag(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }

    /// Map a stored role tag back to a [`Role`].
    ///
    /// Returns `None` for any tag outside the three known roles. Callers
    /// drop such records instead of failing the whole conversation, so a
    /// blob written by a newer revision degrades to a shorter history.
    pub fn from_tag(tag: &str) -> Option<Role> {
        match tag {
            "system" => Some(Role::System),
            "user" => Some(Role::User),
            "assistant" => Some(Role::Assistant),
            _ => None,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_tag())
    }
}

/// A message in a conversation (Entity). Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// The ordered message sequence of one visitor session (Entity).
///
/// Insertion order is chronological order and is preserved through
/// serialization round-trips. If the conversation is non-empty its first
/// message is the single system preamble inserted at the start of the very
/// first turn. Turns append; existing messages are never mutated in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    /// An empty conversation, as seen by a session with no history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a conversation from already-ordered messages (e.g. a decoded
    /// session blob).
    pub fn from_messages(messages: Vec<Message>) -> Self {
        Self { messages }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Append a message at the end of the sequence.
    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// The most recent message, if any.
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn into_messages(self) -> Vec<Message> {
        self.messages
    }
}
