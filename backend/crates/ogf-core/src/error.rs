use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid message type: {value} {location}")]
    InvalidMessageType {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid alert severity: {value} {location}")]
    InvalidAlertSeverity {
        value: String,
        location: ErrorLocation,
    },

    #[error("Payload serialization failed: {source} {location}")]
    Serialization {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
