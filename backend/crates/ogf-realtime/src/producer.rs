use crate::{Hub, Result as RealtimeResult};

use ogf_core::{
    ActivityPayload, AlertPayload, CompliancePayload, EmissionPayload, Message, MessageType,
};
use serde::Serialize;

/// Typed publishing helpers used by the emissions engine, ingestion pipeline,
/// alerting and compliance services.
///
/// Each returns an error only when the payload cannot be serialized. Delivery
/// is best effort: a saturated intake queue drops the message and meters it.
impl Hub {
    pub fn broadcast_emission(
        &self,
        tenant_id: &str,
        payload: EmissionPayload,
    ) -> RealtimeResult<()> {
        self.publish(MessageType::Emission, tenant_id, &payload)
    }

    pub fn broadcast_activity(
        &self,
        tenant_id: &str,
        payload: ActivityPayload,
    ) -> RealtimeResult<()> {
        self.publish(MessageType::Activity, tenant_id, &payload)
    }

    pub fn broadcast_alert(&self, tenant_id: &str, payload: AlertPayload) -> RealtimeResult<()> {
        self.publish(MessageType::Alert, tenant_id, &payload)
    }

    pub fn broadcast_compliance(
        &self,
        tenant_id: &str,
        payload: CompliancePayload,
    ) -> RealtimeResult<()> {
        self.publish(MessageType::Compliance, tenant_id, &payload)
    }

    #[track_caller]
    fn publish<T: Serialize>(
        &self,
        message_type: MessageType,
        tenant_id: &str,
        payload: &T,
    ) -> RealtimeResult<()> {
        let message = Message::new(message_type, tenant_id, payload)?;
        self.broadcast(message);
        Ok(())
    }
}
