//! Infrastructure layer for shopchat
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer: session-blob persistence, the chat-completions HTTP
//! client, configuration file loading, and the JSONL transcript log.

pub mod config;
pub mod inference;
pub mod logging;
pub mod session;

// Re-export commonly used types
pub use config::{ConfigLoader, FileChatConfig, FileConfig, FileInferenceConfig};
pub use inference::client::{InferenceClient, InferenceConfig};
pub use logging::JsonlChatLog;
pub use session::backend::{BackendError, InMemorySessionBackend, SessionBackend};
pub use session::store::BlobConversationStore;
