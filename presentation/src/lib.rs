//! Presentation layer for shopchat
//!
//! This crate contains the CLI argument surface, the interactive chat REPL
//! and the console transcript formatter.

pub mod chat;
pub mod cli;
pub mod transcript;

// Re-export commonly used types
pub use chat::repl::ChatRepl;
pub use cli::commands::Cli;
pub use transcript::TranscriptFormatter;
