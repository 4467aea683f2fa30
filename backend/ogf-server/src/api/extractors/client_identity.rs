//! Identity of a realtime subscriber, as resolved by the upstream auth layer

use crate::{ApiError, AppState};

use std::future::Future;

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, request::Parts},
};

pub const TENANT_HEADER: &str = "x-tenant-id";
pub const USER_HEADER: &str = "x-user-id";

const ANONYMOUS_USER: &str = "anonymous";

/// Tenant and user a connection belongs to.
///
/// The tenant header is mandatory; a request without it is rejected with 401
/// before any client is created. The user header is informational.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientIdentity {
    pub tenant_id: String,
    pub user_id: String,
}

impl ClientIdentity {
    #[track_caller]
    pub fn from_headers(headers: &HeaderMap) -> Result<Self, ApiError> {
        let tenant_id = header_value(headers, TENANT_HEADER)
            .ok_or_else(|| ApiError::unauthorized("Missing X-Tenant-ID header"))?;

        let user_id = header_value(headers, USER_HEADER).unwrap_or(ANONYMOUS_USER);

        Ok(Self {
            tenant_id: tenant_id.to_string(),
            user_id: user_id.to_string(),
        })
    }
}

fn header_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

impl FromRequestParts<AppState> for ClientIdentity {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        let identity = Self::from_headers(&parts.headers);
        async move { identity }
    }
}
