//! Conversation store port
//!
//! Defines how conversation state is read from and written to the opaque
//! per-session storage collaborator.

use async_trait::async_trait;
use shopchat_domain::{Conversation, SessionId};
use thiserror::Error;

/// Errors that can occur while persisting a conversation.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to encode conversation: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Session backend error: {0}")]
    Backend(String),
}

/// Persistence boundary for per-session conversation state.
///
/// Owns no network I/O; serialization happens at this boundary.
#[async_trait]
pub trait ConversationStore: Send + Sync {
    /// Load the conversation for a session.
    ///
    /// Fails open: a missing blob, an unreadable blob, or a backend failure
    /// all yield an empty conversation rather than an error. The caller can
    /// therefore treat every session as having (possibly empty) history.
    async fn load(&self, session: &SessionId) -> Conversation;

    /// Serialize the full sequence and overwrite the session's blob.
    ///
    /// Atomic from the caller's perspective: a subsequent `load` observes
    /// either the previous sequence or the new one, never a partial write.
    async fn save(&self, session: &SessionId, conversation: &Conversation)
    -> Result<(), StoreError>;

    /// Remove the session's blob entirely; a subsequent `load` returns an
    /// empty conversation.
    async fn clear(&self, session: &SessionId) -> Result<(), StoreError>;
}
