//! JSON codec for the session blob.
//!
//! A blob is one JSON array of `{role, content}` records, e.g.
//! `[{"role":"system","content":"..."},{"role":"user","content":"..."}]`.
//! Role and content round-trip losslessly and array order is chronological
//! order.

use serde::{Deserialize, Serialize};
use shopchat_domain::{Conversation, Message, Role};
use tracing::warn;

/// Raw record shape as stored in the blob. Roles stay free-form strings
/// here so one unrecognized tag cannot fail the whole document.
#[derive(Debug, Serialize, Deserialize)]
struct StoredMessage {
    role: String,
    content: String,
}

/// Serialize the full message sequence to a blob.
pub fn encode(conversation: &Conversation) -> Result<Vec<u8>, serde_json::Error> {
    let records: Vec<StoredMessage> = conversation
        .messages()
        .iter()
        .map(|message| StoredMessage {
            role: message.role.as_tag().to_string(),
            content: message.content.clone(),
        })
        .collect();
    serde_json::to_vec(&records)
}

/// Deserialize a blob back into a conversation.
///
/// Records with an unknown role tag are dropped (with a warning) rather
/// than rejected; a structurally malformed document is an error, which the
/// store layer treats as "no history".
pub fn decode(blob: &[u8]) -> Result<Conversation, serde_json::Error> {
    let records: Vec<StoredMessage> = serde_json::from_slice(blob)?;

    let mut messages = Vec::with_capacity(records.len());
    for record in records {
        match Role::from_tag(&record.role) {
            Some(role) => messages.push(Message {
                role,
                content: record.content,
            }),
            None => warn!(
                "Dropping stored message with unknown role tag '{}'",
                record.role
            ),
        }
    }

    Ok(Conversation::from_messages(messages))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_conversation() -> Conversation {
        let mut conversation = Conversation::new();
        conversation.push(Message::system("preamble"));
        conversation.push(Message::user("Do you sell shoes?"));
        conversation.push(Message::assistant("We do!"));
        conversation
    }

    #[test]
    fn encode_decode_roundtrip_preserves_everything() {
        let conversation = sample_conversation();
        let blob = encode(&conversation).unwrap();
        let decoded = decode(&blob).unwrap();
        assert_eq!(decoded, conversation);
    }

    #[test]
    fn blob_is_a_json_array_of_role_content_records() {
        let blob = encode(&sample_conversation()).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&blob).unwrap();

        assert_eq!(value[0]["role"], "system");
        assert_eq!(value[1]["role"], "user");
        assert_eq!(value[1]["content"], "Do you sell shoes?");
        assert_eq!(value[2]["role"], "assistant");
    }

    #[test]
    fn unknown_role_records_are_dropped() {
        let blob = br#"[
            {"role":"system","content":"preamble"},
            {"role":"tool","content":"ignored"},
            {"role":"user","content":"hello"}
        ]"#;

        let decoded = decode(blob).unwrap();
        assert_eq!(decoded.len(), 2);
        assert_eq!(decoded.messages()[0].role, Role::System);
        assert_eq!(decoded.messages()[1].role, Role::User);
    }

    #[test]
    fn malformed_document_is_an_error() {
        assert!(decode(b"not json").is_err());
        assert!(decode(b"{\"role\":\"user\"}").is_err());
    }

    #[test]
    fn empty_array_decodes_to_empty_conversation() {
        assert!(decode(b"[]").unwrap().is_empty());
    }
}
