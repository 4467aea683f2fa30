pub mod metrics;
pub mod sse;
pub mod stream_query;
pub mod subscription_request;
pub mod websocket;

use crate::{ApiError, ApiResult, AppState, ClientIdentity};

use ogf_realtime::{ClientReceiver, ClientRegistration};

/// Register a client for `identity`, enforcing the connection limit and
/// applying any subscription narrowing from the query string.
pub(crate) async fn open_client(
    state: &AppState,
    identity: ClientIdentity,
    query: &stream_query::StreamQuery,
) -> ApiResult<(ClientRegistration, ClientReceiver)> {
    let types = query.subscription_types()?;

    let connected = state.hub.total_client_count().await;
    if connected >= state.max_connections {
        return Err(ApiError::unavailable(
            "CONNECTION_LIMIT",
            format!("Connection limit reached ({})", state.max_connections),
        ));
    }

    let (registration, receiver) = ClientRegistration::open(
        &state.hub,
        identity.tenant_id,
        identity.user_id,
        types.as_deref(),
    )
    .await?;

    Ok((registration, receiver))
}
