//! Chat-completions endpoint adapter.
//!
//! - [`client::InferenceClient`] — the `CompletionGateway` port adapter
//! - [`protocol`] — serde shapes of the chat-completions REST dialect

pub mod client;
pub mod protocol;
