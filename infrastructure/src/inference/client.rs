//! HTTP client for the chat-completions endpoint.

use crate::inference::protocol;
use async_trait::async_trait;
use shopchat_application::ports::completion_gateway::{
    Completion, CompletionError, CompletionGateway,
};
use shopchat_domain::Message;
use shopchat_domain::util::preview;
use tracing::{debug, info, warn};

/// Model identifier used when configuration names none.
pub const DEFAULT_MODEL: &str = "Phi-4";

/// API version pinned for every request.
const API_VERSION: &str = "2024-05-01-preview";

/// Cap on how much of a non-JSON error body ends up in the error message.
const ERROR_BODY_PREVIEW_CHARS: usize = 200;

/// Connection settings for the completion endpoint. Loaded once at startup
/// and immutable for the process lifetime.
#[derive(Debug, Clone, Default)]
pub struct InferenceConfig {
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
    pub model: Option<String>,
}

enum State {
    /// Endpoint or API key was absent at construction. Permanent for the
    /// process; no HTTP client is held.
    Unconfigured,
    Ready {
        http: reqwest::Client,
        url: String,
        api_key: String,
    },
}

/// `CompletionGateway` adapter for an Azure AI Inference style
/// chat-completions endpoint.
///
/// Each call is independent: one request, no retry, no backoff. Timeouts
/// are the caller's policy (drop the future to cancel).
pub struct InferenceClient {
    state: State,
    model: String,
}

impl InferenceClient {
    /// Build a client from connection settings.
    ///
    /// Missing (or blank) endpoint or API key puts the client into the
    /// permanent unconfigured state instead of failing construction; a
    /// missing model falls back to [`DEFAULT_MODEL`].
    pub fn new(config: InferenceConfig) -> Self {
        let model = config
            .model
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let endpoint = config.endpoint.filter(|e| !e.trim().is_empty());
        let api_key = config.api_key.filter(|k| !k.trim().is_empty());

        let state = match (endpoint, api_key) {
            (Some(endpoint), Some(api_key)) => State::Ready {
                http: reqwest::Client::new(),
                url: format!("{}/chat/completions", endpoint.trim_end_matches('/')),
                api_key,
            },
            _ => {
                warn!(
                    "Completion endpoint or API key not configured; every chat reply will report the assistant as unavailable"
                );
                State::Unconfigured
            }
        };

        Self { state, model }
    }

    pub fn is_configured(&self) -> bool {
        matches!(self.state, State::Ready { .. })
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl CompletionGateway for InferenceClient {
    async fn complete(&self, history: &[Message]) -> Result<Completion, CompletionError> {
        let State::Ready { http, url, api_key } = &self.state else {
            return Err(CompletionError::Unconfigured);
        };

        let request = protocol::ChatRequest {
            model: self.model.clone(),
            messages: protocol::request_messages(history),
        };
        debug!(
            "Requesting completion from {} with {} messages",
            self.model,
            request.messages.len()
        );

        let response = http
            .post(url)
            .query(&[("api-version", API_VERSION)])
            .header("api-key", api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| CompletionError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = protocol::extract_error_message(&body)
                .unwrap_or_else(|| preview(&body, ERROR_BODY_PREVIEW_CHARS));
            return Err(CompletionError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: protocol::ChatResponse = response
            .json()
            .await
            .map_err(|e| CompletionError::Malformed(e.to_string()))?;

        let choice = parsed
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| CompletionError::Malformed("response contained no choices".to_string()))?;
        let text = choice.message.content.ok_or_else(|| {
            CompletionError::Malformed("first choice carried no message content".to_string())
        })?;

        if let Some(usage) = parsed.usage {
            info!(
                "Received response from {} ({} tokens used)",
                self.model, usage.total_tokens
            );
        }

        Ok(Completion {
            text,
            usage: parsed.usage,
        })
    }
}
