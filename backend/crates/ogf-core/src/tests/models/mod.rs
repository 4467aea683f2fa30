mod alert_severity;
mod message;
mod message_type;
mod payloads;
