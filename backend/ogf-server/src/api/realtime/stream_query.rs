use crate::{ApiError, ApiResult};

use ogf_core::MessageType;
use ogf_realtime::ClientSubscriptions;
use serde::Deserialize;

/// Query string accepted by the realtime endpoints
#[derive(Debug, Default, Deserialize)]
pub struct StreamQuery {
    /// Comma separated message types, e.g. `types=emission,alert`
    pub types: Option<String>,
}

impl StreamQuery {
    /// `None` keeps the default subscriptions. A present but empty list is
    /// rejected: a client subscribed to nothing would only see heartbeats.
    pub fn subscription_types(&self) -> ApiResult<Option<Vec<MessageType>>> {
        let Some(list) = self.types.as_deref() else {
            return Ok(None);
        };

        let types = ClientSubscriptions::parse_types(list)?;
        if types.is_empty() {
            return Err(ApiError::bad_request("types must name at least one message type"));
        }

        Ok(Some(types))
    }
}
