use crate::{CoreError, MessageType};

use std::str::FromStr;

use proptest::prelude::*;

#[test]
fn test_message_type_as_str() {
    assert_eq!(MessageType::Emission.as_str(), "emission");
    assert_eq!(MessageType::Activity.as_str(), "activity");
    assert_eq!(MessageType::Alert.as_str(), "alert");
    assert_eq!(MessageType::Compliance.as_str(), "compliance");
    assert_eq!(MessageType::Heartbeat.as_str(), "heartbeat");
}

#[test]
fn test_message_type_from_str_trims_whitespace() {
    assert_eq!(
        MessageType::from_str(" alert ").unwrap(),
        MessageType::Alert
    );
}

#[test]
fn test_message_type_from_str_invalid() {
    let result = MessageType::from_str("billing");
    assert!(matches!(
        result,
        Err(CoreError::InvalidMessageType { .. })
    ));
}

#[test]
fn test_subscribable_types_exclude_heartbeat() {
    assert_eq!(MessageType::SUBSCRIBABLE.len(), 4);
    assert!(!MessageType::SUBSCRIBABLE.iter().any(|t| t.is_heartbeat()));
}

#[test]
fn test_message_type_serializes_lowercase() {
    let json = serde_json::to_string(&MessageType::Compliance).unwrap();
    assert_eq!(json, "\"compliance\"");
}

proptest! {
    #[test]
    fn given_known_type_when_display_then_parses_back(index in 0usize..5) {
        let all = [
            MessageType::Emission,
            MessageType::Activity,
            MessageType::Alert,
            MessageType::Compliance,
            MessageType::Heartbeat,
        ];
        let message_type = all[index];
        prop_assert_eq!(MessageType::from_str(&message_type.to_string()).unwrap(), message_type);
    }

    #[test]
    fn given_unknown_word_when_parsed_then_fails(word in "[a-z]{3,12}") {
        let known = ["emission", "activity", "alert", "compliance", "heartbeat"];
        if !known.contains(&word.as_str()) {
            prop_assert!(MessageType::from_str(&word).is_err());
        }
    }
}
