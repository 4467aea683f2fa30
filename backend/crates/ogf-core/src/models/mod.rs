pub mod activity_payload;
pub mod alert_payload;
pub mod alert_severity;
pub mod compliance_payload;
pub mod emission_payload;
pub mod message;
pub mod message_type;
