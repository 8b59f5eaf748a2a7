//! Structured transcript logging

pub mod jsonl;

pub use jsonl::JsonlChatLog;
