//! Conversation store adapter over an opaque session backend.

use crate::session::backend::SessionBackend;
use crate::session::codec;
use async_trait::async_trait;
use shopchat_application::ports::conversation_store::{ConversationStore, StoreError};
use shopchat_domain::{Conversation, SessionId};
use tracing::warn;

/// `ConversationStore` adapter that serializes conversations as JSON blobs
/// in a [`SessionBackend`].
///
/// Loading fails open: any backend or decode failure reads as an empty
/// conversation, so a corrupted blob costs a visitor their history, never
/// their session.
pub struct BlobConversationStore<B: SessionBackend> {
    backend: B,
}

impl<B: SessionBackend> BlobConversationStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }
}

#[async_trait]
impl<B: SessionBackend> ConversationStore for BlobConversationStore<B> {
    async fn load(&self, session: &SessionId) -> Conversation {
        let blob = match self.backend.get(session.as_str()).await {
            Ok(Some(blob)) => blob,
            Ok(None) => return Conversation::new(),
            Err(error) => {
                warn!("Session backend read failed for {}: {}", session, error);
                return Conversation::new();
            }
        };

        match codec::decode(&blob) {
            Ok(conversation) => conversation,
            Err(error) => {
                warn!(
                    "Discarding unreadable conversation blob for {}: {}",
                    session, error
                );
                Conversation::new()
            }
        }
    }

    async fn save(
        &self,
        session: &SessionId,
        conversation: &Conversation,
    ) -> Result<(), StoreError> {
        let blob = codec::encode(conversation)?;
        self.backend
            .put(session.as_str(), blob)
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))
    }

    async fn clear(&self, session: &SessionId) -> Result<(), StoreError> {
        self.backend
            .remove(session.as_str())
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::backend::InMemorySessionBackend;
    use shopchat_domain::Message;

    fn store() -> BlobConversationStore<InMemorySessionBackend> {
        BlobConversationStore::new(InMemorySessionBackend::new())
    }

    fn sample_conversation() -> Conversation {
        let mut conversation = Conversation::new();
        conversation.push(Message::system("preamble"));
        conversation.push(Message::user("hello"));
        conversation.push(Message::assistant("hi there"));
        conversation
    }

    #[tokio::test]
    async fn load_of_unknown_session_is_empty() {
        assert!(store().load(&SessionId::from("nobody")).await.is_empty());
    }

    #[tokio::test]
    async fn save_then_load_roundtrips() {
        let store = store();
        let session = SessionId::from("s1");
        let conversation = sample_conversation();

        store.save(&session, &conversation).await.unwrap();
        assert_eq!(store.load(&session).await, conversation);

        // Saving what was just loaded changes nothing
        let loaded = store.load(&session).await;
        store.save(&session, &loaded).await.unwrap();
        assert_eq!(store.load(&session).await, conversation);
    }

    #[tokio::test]
    async fn save_overwrites_previous_history() {
        let store = store();
        let session = SessionId::from("s1");

        store.save(&session, &sample_conversation()).await.unwrap();

        let mut shorter = Conversation::new();
        shorter.push(Message::system("fresh"));
        store.save(&session, &shorter).await.unwrap();

        assert_eq!(store.load(&session).await, shorter);
    }

    #[tokio::test]
    async fn clear_then_load_is_empty() {
        let store = store();
        let session = SessionId::from("s1");

        store.save(&session, &sample_conversation()).await.unwrap();
        store.clear(&session).await.unwrap();

        assert!(store.load(&session).await.is_empty());
    }

    #[tokio::test]
    async fn corrupted_blob_reads_as_no_history() {
        let backend = InMemorySessionBackend::new();
        backend.put("s1", b"{{{ not json".to_vec()).await.unwrap();

        let store = BlobConversationStore::new(backend);
        assert!(store.load(&SessionId::from("s1")).await.is_empty());
    }

    #[tokio::test]
    async fn sessions_do_not_share_history() {
        let store = store();
        store
            .save(&SessionId::from("a"), &sample_conversation())
            .await
            .unwrap();

        assert!(store.load(&SessionId::from("b")).await.is_empty());
    }
}
