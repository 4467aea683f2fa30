use super::{open_client, stream_query::StreamQuery};
use crate::{ApiResult, AppState, ClientIdentity};

use ogf_realtime::{ClientReceiver, ClientRegistration};

use std::convert::Infallible;

use axum::{
    extract::{Query, State},
    http::{HeaderName, header},
    response::{
        IntoResponse, Response,
        sse::{Event, Sse},
    },
};
use futures::{Stream, StreamExt, stream};
use serde_json::json;

const X_ACCEL_BUFFERING: HeaderName = HeaderName::from_static("x-accel-buffering");

/// GET /api/v1/realtime/stream - Server-Sent Events transport
///
/// Emits `event: connected` with the client id, then one `event: message`
/// per envelope. The client is unregistered when the stream is dropped,
/// whether the peer went away or the hub closed the queue.
pub async fn stream_handler(
    State(state): State<AppState>,
    identity: ClientIdentity,
    Query(query): Query<StreamQuery>,
) -> ApiResult<Response> {
    let (registration, receiver) = open_client(&state, identity, &query).await?;

    log::info!(
        "SSE stream opened: client={} tenant={}",
        registration.client().id(),
        registration.client().tenant_id()
    );

    let sse = Sse::new(event_stream(registration, receiver));

    Ok((
        [
            (header::CACHE_CONTROL, "no-cache"),
            (X_ACCEL_BUFFERING, "no"),
        ],
        sse,
    )
        .into_response())
}

fn event_stream(
    registration: ClientRegistration,
    receiver: ClientReceiver,
) -> impl Stream<Item = Result<Event, Infallible>> + Send + 'static {
    let connected = Event::default()
        .event("connected")
        .data(json!({ "clientId": registration.client().id().to_string() }).to_string());

    // The registration lives in the stream state so dropping the stream
    // detaches the client.
    let frames = stream::unfold(
        (registration, receiver),
        |(registration, mut receiver)| async move {
            let frame = receiver.recv().await?;
            let event = Event::default()
                .event("message")
                .data(String::from_utf8_lossy(&frame));
            Some((event, (registration, receiver)))
        },
    );

    stream::once(async move { connected })
        .chain(frames)
        .map(Ok)
}
