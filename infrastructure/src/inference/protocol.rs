//! Wire types for the chat-completions REST dialect.
//!
//! Request: `POST {endpoint}/chat/completions` with
//! `{"model": ..., "messages": [{"role": ..., "content": ...}, ...]}`.
//! Response: `choices[0].message.content` plus optional `usage` counters.

use serde::{Deserialize, Serialize};
use shopchat_application::ports::completion_gateway::TokenUsage;
use shopchat_domain::Message;

#[derive(Debug, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatRequestMessage>,
}

#[derive(Debug, Serialize)]
pub struct ChatRequestMessage {
    pub role: &'static str,
    pub content: String,
}

/// Translate history into role-tagged request messages, in order.
pub fn request_messages(history: &[Message]) -> Vec<ChatRequestMessage> {
    history
        .iter()
        .map(|message| ChatRequestMessage {
            role: message.role.as_tag(),
            content: message.content.clone(),
        })
        .collect()
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
    #[serde(default)]
    pub usage: Option<TokenUsage>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

/// Error body shape `{"error": {"message": ...}}` used by the endpoint.
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    #[serde(default)]
    message: String,
}

/// Pull the endpoint's error message out of a failure body, if it is the
/// structured shape. Callers fall back to the raw body otherwise.
pub fn extract_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .map(|r| r.error.message)
        .filter(|m| !m.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopchat_domain::Role;

    #[test]
    fn request_serializes_role_tagged_messages_in_order() {
        let history = vec![
            Message::system("be brief"),
            Message::user("hats?"),
            Message::assistant("aisle two"),
            Message::user("thanks"),
        ];
        let request = ChatRequest {
            model: "Phi-4".to_string(),
            messages: request_messages(&history),
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "Phi-4");
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["messages"][1]["role"], "user");
        assert_eq!(value["messages"][2]["role"], "assistant");
        assert_eq!(value["messages"][3]["content"], "thanks");
    }

    #[test]
    fn every_role_maps_to_a_wire_tag() {
        for role in [Role::System, Role::User, Role::Assistant] {
            let messages = request_messages(&[Message {
                role,
                content: "x".to_string(),
            }]);
            assert_eq!(messages[0].role, role.as_tag());
        }
    }

    #[test]
    fn response_parses_content_and_usage() {
        let body = r#"{
            "id": "cmpl-123",
            "model": "Phi-4",
            "choices": [
                {"index": 0, "finish_reason": "stop",
                 "message": {"role": "assistant", "content": "We do!"}}
            ],
            "usage": {"prompt_tokens": 40, "completion_tokens": 8, "total_tokens": 48}
        }"#;

        let response: ChatResponse = serde_json::from_str(body).unwrap();
        assert_eq!(
            response.choices[0].message.content.as_deref(),
            Some("We do!")
        );
        assert_eq!(response.usage.unwrap().total_tokens, 48);
    }

    #[test]
    fn response_without_usage_still_parses() {
        let body = r#"{"choices":[{"message":{"content":"hi"}}]}"#;
        let response: ChatResponse = serde_json::from_str(body).unwrap();
        assert!(response.usage.is_none());
    }

    #[test]
    fn error_message_extraction() {
        let body = r#"{"error":{"code":"401","message":"invalid api key"}}"#;
        assert_eq!(
            extract_error_message(body).as_deref(),
            Some("invalid api key")
        );

        assert_eq!(extract_error_message("plain text failure"), None);
        assert_eq!(extract_error_message(r#"{"error":{"message":""}}"#), None);
    }
}
