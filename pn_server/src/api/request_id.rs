//! Request ID propagation.
//!
//! Every response carries an `x-request-id` header. A client-supplied ID is
//! echoed back; otherwise a fresh UUID is issued. Handlers can extract the ID
//! as [`RequestId`] to tag their own log lines.

use axum::{
    extract::{FromRequestParts, Request},
    http::{HeaderMap, HeaderValue, StatusCode, request::Parts},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use uuid::Uuid;

/// Header name for request ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Client-supplied ID if it is a usable header value, otherwise a new UUID
fn request_id_from(headers: &HeaderMap) -> String {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string())
}

/// Tag the request with an ID, log it, and echo the ID on the response.
///
/// # Example
///
/// ```no_run
/// use axum::{Router, routing::get, middleware};
/// use pn_server::api::request_id::request_id_middleware;
///
/// let app: Router = Router::new()
///     .route("/league", get(|| async { "[]" }))
///     .layer(middleware::from_fn(request_id_middleware));
/// ```
pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let request_id = request_id_from(request.headers());
    let started = Instant::now();

    tracing::info!(
        request_id = %request_id,
        method = %request.method(),
        path = %request.uri().path(),
        "Request started"
    );

    request.extensions_mut().insert(RequestId(request_id.clone()));
    let mut response = next.run(request).await;

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    tracing::info!(
        request_id = %request_id,
        status = %response.status(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Request completed"
    );

    response
}

/// The ID assigned to the current request
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestId(pub String);

impl RequestId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<S> FromRequestParts<S> for RequestId
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<RequestId>().cloned().ok_or((
            StatusCode::INTERNAL_SERVER_ERROR,
            "Request ID middleware not installed",
        ))
    }
}
