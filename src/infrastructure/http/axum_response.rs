//! Snapshotting streaming axum responses.

use axum::body::{Body, Bytes};
use axum::http::Response;

/// Default upper bound for buffered bodies (10 MiB).
pub const DEFAULT_MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Drains a streaming response body into memory.
///
/// The returned response keeps the original status, headers and extensions
/// and implements [`HttpResponse`](super::HttpResponse), so it can be handed
/// to a document. The body stream is read exactly once.
///
/// # Errors
///
/// Returns an error if reading the body fails or the body exceeds `limit` bytes.
pub async fn buffer_response(
    response: Response<Body>,
    limit: usize,
) -> Result<Response<Bytes>, axum::Error> {
    let (parts, body) = response.into_parts();
    let bytes = axum::body::to_bytes(body, limit).await?;

    tracing::debug!(status = %parts.status, bytes = bytes.len(), "Buffered response body");

    Ok(Response::from_parts(parts, bytes))
}
