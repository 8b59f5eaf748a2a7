//! View History use case.
//!
//! Returns the current ordered message sequence for rendering. Performs no
//! mutation.

use crate::ports::conversation_store::ConversationStore;
use shopchat_domain::{Conversation, SessionId};
use std::sync::Arc;

pub struct ViewHistoryUseCase {
    store: Arc<dyn ConversationStore>,
}

impl ViewHistoryUseCase {
    pub fn new(store: Arc<dyn ConversationStore>) -> Self {
        Self { store }
    }

    /// Load the conversation for rendering. A session without history (or
    /// with an unreadable blob) reads as empty.
    pub async fn execute(&self, session: &SessionId) -> Conversation {
        self.store.load(session).await
    }
}
