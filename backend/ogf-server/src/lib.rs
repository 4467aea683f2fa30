pub mod admin;
pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

pub use api::{
    error::{ApiError, Result as ApiResult},
    extractors::client_identity::ClientIdentity,
    realtime::{
        metrics::RealtimeMetricsResponse,
        stream_query::StreamQuery,
        subscription_request::{SubscriptionAction, SubscriptionRequest},
        websocket::WebSocketSession,
    },
};
pub use app_state::AppState;
pub use error::{Result as ServerErrorResult, ServerError};
pub use routes::build_router;
