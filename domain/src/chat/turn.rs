//! Turn-construction rules.
//!
//! A turn grows a conversation by exactly two messages (the user message
//! and the assistant reply), or three when the conversation was empty and
//! the system preamble is inserted first. The rules operate on explicit
//! state so they can be exercised without a session store or network.

use crate::chat::entities::{Conversation, Message};

/// Open a turn by appending the visitor's message.
///
/// Returns `false` without touching the conversation when `user_text` is
/// empty or whitespace-only. Otherwise inserts the system preamble if the
/// conversation has no history yet, then appends the user message with
/// `user_text` as-is (no trimming beyond the emptiness check).
pub fn begin_turn(conversation: &mut Conversation, preamble: &str, user_text: &str) -> bool {
    if user_text.trim().is_empty() {
        return false;
    }

    if conversation.is_empty() {
        conversation.push(Message::system(preamble));
    }

    conversation.push(Message::user(user_text));
    true
}

/// Close the turn by appending the assistant reply.
///
/// The reply is stored verbatim; callers pass either generated model text or
/// the rendered failure text, both of which read as ordinary assistant
/// content.
pub fn record_reply(conversation: &mut Conversation, reply: impl Into<String>) {
    conversation.push(Message::assistant(reply));
}
