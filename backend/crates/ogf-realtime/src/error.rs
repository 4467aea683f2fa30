use std::panic::Location;

use error_location::ErrorLocation;
use ogf_core::CoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RealtimeError {
    #[error("Hub is not running {location}")]
    HubStopped { location: ErrorLocation },

    #[error("Message encoding failed: {source} {location}")]
    Encode {
        #[source]
        source: CoreError,
        location: ErrorLocation,
    },

    #[error("Invalid subscription: {message} {location}")]
    InvalidSubscription {
        message: String,
        location: ErrorLocation,
    },
}

impl RealtimeError {
    #[track_caller]
    pub(crate) fn hub_stopped() -> Self {
        Self::HubStopped {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Stable code for clients and logs
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::HubStopped { .. } => "HUB_STOPPED",
            Self::Encode { .. } => "ENCODE_ERROR",
            Self::InvalidSubscription { .. } => "INVALID_SUBSCRIPTION",
        }
    }
}

impl From<CoreError> for RealtimeError {
    #[track_caller]
    fn from(source: CoreError) -> Self {
        Self::Encode {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, RealtimeError>;
