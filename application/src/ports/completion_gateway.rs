//! Completion gateway port
//!
//! Defines the interface for invoking the remote chat-completion endpoint.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use shopchat_domain::Message;
use thiserror::Error;

/// Errors that can occur during a completion call.
///
/// Callers are expected to render these as assistant-visible text rather
/// than abort the turn; see the send-message use case for the default
/// rendering.
#[derive(Error, Debug)]
pub enum CompletionError {
    /// Required connection settings were absent at construction. This state
    /// is permanent for the process; every call short-circuits here.
    #[error("completion endpoint or API key is not configured")]
    Unconfigured,

    #[error("request failed: {0}")]
    Transport(String),

    #[error("model endpoint returned HTTP {status}: {message}")]
    Api { status: u16, message: String },

    #[error("malformed completion response: {0}")]
    Malformed(String),
}

/// Token accounting reported by the completion endpoint.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TokenUsage {
    #[serde(default)]
    pub prompt_tokens: u32,
    #[serde(default)]
    pub completion_tokens: u32,
    #[serde(default)]
    pub total_tokens: u32,
}

/// A successful completion: generated text plus optional usage metadata.
#[derive(Debug, Clone)]
pub struct Completion {
    pub text: String,
    pub usage: Option<TokenUsage>,
}

impl Completion {
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            usage: None,
        }
    }
}

/// Gateway to the external chat-completion API.
///
/// Implementations own the network I/O and configuration validation. Each
/// call is independent and stateless: no retry, no backoff, no shared
/// call-to-call state. Cancellation is the caller's concern (drop the
/// future); the gateway imposes no timeout of its own.
#[async_trait]
pub trait CompletionGateway: Send + Sync {
    /// Send the full role-tagged history and return the generated text.
    ///
    /// `history` may be empty; whether that is meaningful is up to the
    /// caller.
    async fn complete(&self, history: &[Message]) -> Result<Completion, CompletionError>;
}
