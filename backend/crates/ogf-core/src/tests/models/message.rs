use crate::{EmissionPayload, Message, MessageType};

use googletest::prelude::*;

#[test]
fn test_message_new_assigns_identity_and_tenant() {
    let payload = EmissionPayload::new(2, 150.5, "utility_bill");

    let message = Message::new(MessageType::Emission, "acme", &payload).unwrap();

    assert_that!(message.tenant_id(), eq("acme"));
    assert_that!(message.message_type(), eq(MessageType::Emission));
    assert_that!(message.id().is_empty(), eq(false));
}

#[test]
fn test_messages_get_distinct_ids() {
    let a = Message::heartbeat("acme");
    let b = Message::heartbeat("acme");

    assert_ne!(a.id(), b.id());
}

#[test]
fn test_encode_produces_wire_envelope() {
    let payload = EmissionPayload::new(2, 150.5, "utility_bill");
    let message = Message::new(MessageType::Emission, "acme", &payload).unwrap();

    let frame = message.encode().unwrap();
    let value: serde_json::Value = serde_json::from_slice(&frame).unwrap();

    assert_eq!(value["id"], message.id());
    assert_eq!(value["type"], "emission");
    assert_eq!(value["tenantId"], "acme");
    assert_eq!(value["payload"]["emissionsKgCo2e"], 150.5);
    assert!(value["timestamp"].is_string());
}

#[test]
fn test_heartbeat_encodes_null_payload() {
    let message = Message::heartbeat("acme");

    let frame = message.encode().unwrap();
    let value: serde_json::Value = serde_json::from_slice(&frame).unwrap();

    assert_eq!(value["type"], "heartbeat");
    assert!(value["payload"].is_null());
    assert!(message.payload().is_none());
}

#[test]
fn test_encoded_message_decodes_back() {
    let payload = EmissionPayload::new(3, 12.0, "travel");
    let message = Message::new(MessageType::Emission, "acme", &payload).unwrap();

    let frame = message.encode().unwrap();
    let decoded: Message = serde_json::from_slice(&frame).unwrap();

    assert_that!(decoded.id(), eq(message.id()));
    assert_that!(decoded.timestamp(), eq(message.timestamp()));
    let decoded_payload: EmissionPayload =
        serde_json::from_str(decoded.payload().unwrap().get()).unwrap();
    assert_eq!(decoded_payload, payload);
}
