use derive_more::derive::Display;
use serde::{Deserialize, Serialize};

/// Who produced a piece of a conversation turn.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq, Serialize, Display)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_role_serializes_snake_case() {
        let actual = serde_json::to_string(&Role::Assistant).unwrap();
        let expected = "\"assistant\"";
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_role_round_trip() {
        let fixture = "\"user\"";
        let actual: Role = serde_json::from_str(fixture).unwrap();
        let expected = Role::User;
        assert_eq!(actual, expected);
    }
}
