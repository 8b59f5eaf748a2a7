//! Reset Chat use case.
//!
//! Removes the session's conversation blob entirely; the next turn starts a
//! fresh conversation with a new preamble.

use crate::ports::chat_log::{ChatEvent, ChatLog, NoChatLog};
use crate::ports::conversation_store::{ConversationStore, StoreError};
use shopchat_domain::SessionId;
use std::sync::Arc;
use tracing::info;

pub struct ResetChatUseCase {
    store: Arc<dyn ConversationStore>,
    chat_log: Arc<dyn ChatLog>,
}

impl ResetChatUseCase {
    pub fn new(store: Arc<dyn ConversationStore>) -> Self {
        Self {
            store,
            chat_log: Arc::new(NoChatLog),
        }
    }

    /// Record reset events on a transcript log.
    pub fn with_chat_log(mut self, chat_log: Arc<dyn ChatLog>) -> Self {
        self.chat_log = chat_log;
        self
    }

    pub async fn execute(&self, session: &SessionId) -> Result<(), StoreError> {
        self.store.clear(session).await?;
        info!("Chat history cleared");

        self.chat_log.record(ChatEvent::new(
            "reset",
            serde_json::json!({ "session": session.as_str() }),
        ));

        Ok(())
    }
}
