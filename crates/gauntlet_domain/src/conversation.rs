use derive_more::derive::Display;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Groups pieces into one logical conversation. Callers may supply any
/// string; pieces constructed without one get a freshly generated value so a
/// single-piece conversation needs no caller bookkeeping.
#[derive(Clone, Debug, Display, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct ConversationId(String);

impl ConversationId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn new(value: impl ToString) -> Self {
        Self(value.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for ConversationId {
    fn from(value: String) -> Self {
        ConversationId::new(value)
    }
}

impl From<&str> for ConversationId {
    fn from(value: &str) -> Self {
        ConversationId::new(value)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::{assert_eq, assert_ne};

    use super::*;

    #[test]
    fn test_generate_is_unique() {
        let actual = ConversationId::generate();
        let expected = ConversationId::generate();
        assert_ne!(actual, expected);
    }

    #[test]
    fn test_caller_supplied_value_is_kept() {
        let fixture = ConversationId::new("session-42");
        assert_eq!(fixture.as_str(), "session-42");
    }
}
