//! Console rendering of a conversation.

use colored::Colorize;
use shopchat_domain::{Conversation, Message, Role};

/// Formats conversations and replies for the terminal.
pub struct TranscriptFormatter;

impl TranscriptFormatter {
    /// Render the full conversation, one labelled line per message.
    pub fn format(conversation: &Conversation) -> String {
        if conversation.is_empty() {
            return "No conversation yet. Say something!".to_string();
        }

        conversation
            .messages()
            .iter()
            .map(Self::format_message)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Render a single assistant reply line.
    pub fn format_reply(text: &str) -> String {
        format!("{} {}", "assistant:".cyan().bold(), text)
    }

    fn format_message(message: &Message) -> String {
        let label = match message.role {
            Role::System => "system:".dimmed(),
            Role::User => "you:".green().bold(),
            Role::Assistant => "assistant:".cyan().bold(),
        };
        format!("{} {}", label, message.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_conversation_has_placeholder() {
        let rendered = TranscriptFormatter::format(&Conversation::new());
        assert!(rendered.contains("No conversation yet"));
    }

    #[test]
    fn each_message_gets_its_own_labelled_line() {
        colored::control::set_override(false);

        let mut conversation = Conversation::new();
        conversation.push(Message::system("be brief"));
        conversation.push(Message::user("hats?"));
        conversation.push(Message::assistant("aisle two"));

        let rendered = TranscriptFormatter::format(&conversation);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "system: be brief");
        assert_eq!(lines[1], "you: hats?");
        assert_eq!(lines[2], "assistant: aisle two");
    }

    #[test]
    fn reply_line_carries_assistant_label() {
        colored::control::set_override(false);
        assert_eq!(
            TranscriptFormatter::format_reply("We do!"),
            "assistant: We do!"
        );
    }
}
