//! Application layer for shopchat
//!
//! This crate contains the use cases and port definitions of the storefront
//! chat assistant. It depends only on the domain layer; adapters for the
//! ports live in the infrastructure layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    chat_log::{ChatEvent, ChatLog, NoChatLog},
    completion_gateway::{Completion, CompletionError, CompletionGateway, TokenUsage},
    conversation_store::{ConversationStore, StoreError},
};
pub use use_cases::reset_chat::ResetChatUseCase;
pub use use_cases::send_message::{SendMessageUseCase, TurnOutcome, UNAVAILABLE_REPLY};
pub use use_cases::view_history::ViewHistoryUseCase;
