//! Use cases
//!
//! One module per external trigger: [`send_message`] (a chat turn),
//! [`view_history`] (read-only rendering), [`reset_chat`] (clearing a
//! session's conversation).

pub mod reset_chat;
pub mod send_message;
pub mod view_history;
