//! Send Message use case.
//!
//! Orchestrates one chat turn: load the conversation, append the user
//! message (and the preamble on a first turn), invoke the completion
//! gateway, fold the outcome back in as assistant text, persist.
//!
//! Every gateway outcome is final for the turn: failures become
//! assistant-visible text, never an aborted turn.

use crate::ports::chat_log::{ChatEvent, ChatLog, NoChatLog};
use crate::ports::completion_gateway::{CompletionError, CompletionGateway, TokenUsage};
use crate::ports::conversation_store::{ConversationStore, StoreError};
use shopchat_domain::util::preview;
use shopchat_domain::{Conversation, SessionId, SHOPPING_ASSISTANT_PREAMBLE, begin_turn, record_reply};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Fixed reply rendered while connection settings are missing. Shown as
/// ordinary assistant text so the conversation flow never aborts.
pub const UNAVAILABLE_REPLY: &str =
    "The AI assistant is currently unavailable. Please try again later.";

/// Outcome of a turn.
#[derive(Debug)]
pub enum TurnOutcome {
    /// Empty or whitespace-only input; no state changed.
    Ignored,
    /// The turn completed; the last message is the assistant reply.
    Replied { conversation: Conversation },
}

/// Per-session mutual exclusion for the load-append-save window.
///
/// Two concurrent turns for the same session would otherwise race and the
/// later save would silently discard the other's messages. Lock entries
/// live for the life of the process.
#[derive(Default)]
struct TurnLocks {
    inner: std::sync::Mutex<HashMap<SessionId, Arc<tokio::sync::Mutex<()>>>>,
}

impl TurnLocks {
    fn for_session(&self, session: &SessionId) -> Arc<tokio::sync::Mutex<()>> {
        let mut locks = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        locks
            .entry(session.clone())
            .or_insert_with(|| Arc::new(tokio::sync::Mutex::new(())))
            .clone()
    }
}

/// Use case for handling one incoming chat turn.
pub struct SendMessageUseCase {
    store: Arc<dyn ConversationStore>,
    gateway: Arc<dyn CompletionGateway>,
    chat_log: Arc<dyn ChatLog>,
    preamble: String,
    turn_locks: TurnLocks,
}

impl SendMessageUseCase {
    pub fn new(store: Arc<dyn ConversationStore>, gateway: Arc<dyn CompletionGateway>) -> Self {
        Self {
            store,
            gateway,
            chat_log: Arc::new(NoChatLog),
            preamble: SHOPPING_ASSISTANT_PREAMBLE.to_string(),
            turn_locks: TurnLocks::default(),
        }
    }

    /// Replace the built-in system preamble.
    pub fn with_preamble(mut self, preamble: impl Into<String>) -> Self {
        self.preamble = preamble.into();
        self
    }

    /// Record turn events on a transcript log.
    pub fn with_chat_log(mut self, chat_log: Arc<dyn ChatLog>) -> Self {
        self.chat_log = chat_log;
        self
    }

    /// Execute one turn for `session`.
    ///
    /// Empty or whitespace-only input returns [`TurnOutcome::Ignored`]
    /// without touching the store. Otherwise the conversation grows by
    /// exactly two messages (three on a first turn) and is persisted before
    /// returning.
    pub async fn execute(
        &self,
        session: &SessionId,
        user_message: &str,
    ) -> Result<TurnOutcome, StoreError> {
        if user_message.trim().is_empty() {
            debug!("Ignoring empty chat message for session {}", session);
            return Ok(TurnOutcome::Ignored);
        }

        info!("User sent chat message: {}", preview(user_message, 50));

        let lock = self.turn_locks.for_session(session);
        let _turn = lock.lock().await;

        let mut conversation = self.store.load(session).await;
        begin_turn(&mut conversation, &self.preamble, user_message);

        let (reply, usage) = match self.gateway.complete(conversation.messages()).await {
            Ok(completion) => (completion.text, completion.usage),
            Err(error) => {
                warn!("Completion failed for session {}: {}", session, error);
                (render_failure(&error), None)
            }
        };

        record_reply(&mut conversation, reply.as_str());
        self.store.save(session, &conversation).await?;

        self.chat_log.record(ChatEvent::new(
            "turn",
            serde_json::json!({
                "session": session.as_str(),
                "messages": conversation.len(),
                "reply_bytes": reply.len(),
                "total_tokens": usage.map(|u: TokenUsage| u.total_tokens),
            }),
        ));

        Ok(TurnOutcome::Replied { conversation })
    }
}

/// Default rendering of a completion failure as assistant text.
///
/// The unconfigured state gets the fixed unavailable-service reply; every
/// other failure embeds its cause after a stable prefix.
fn render_failure(error: &CompletionError) -> String {
    match error {
        CompletionError::Unconfigured => UNAVAILABLE_REPLY.to_string(),
        other => format!("Error: Unable to get a response from the AI model. {}", other),
    }
}
