//! Session identifier value object

use serde::{Deserialize, Serialize};

/// Opaque identifier scoping one visitor's conversation state (Value Object).
///
/// The identifier's lifecycle (creation, expiry) belongs to the surrounding
/// session machinery; the core only uses it as a storage key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(String);

impl SessionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SessionId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for SessionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_id_display_matches_inner() {
        let id = SessionId::new("visitor-42");
        assert_eq!(id.to_string(), "visitor-42");
        assert_eq!(id.as_str(), "visitor-42");
    }

    #[test]
    fn session_ids_compare_by_value() {
        assert_eq!(SessionId::from("a"), SessionId::new("a"));
        assert_ne!(SessionId::from("a"), SessionId::from("b"));
    }
}
