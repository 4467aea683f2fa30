pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result as CoreResult};
pub use models::activity_payload::ActivityPayload;
pub use models::alert_payload::AlertPayload;
pub use models::alert_severity::AlertSeverity;
pub use models::compliance_payload::CompliancePayload;
pub use models::emission_payload::EmissionPayload;
pub use models::message::Message;
pub use models::message_type::MessageType;
