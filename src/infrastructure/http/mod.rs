//! HTTP response boundary.
//!
//! Documents never talk to a transport. They consume an [`HttpResponse`]:
//! something that can report a header line and hand over its body as text.
//!
//! - [`HttpResponse`] - the trait documents consume
//! - [`StaticResponse`] - in-memory response for tests and tooling
//! - [`buffer_response`] - drains a streaming axum body into a snapshot-able response

mod axum_response;
mod response;
mod static_response;

pub use axum_response::{DEFAULT_MAX_BODY_BYTES, buffer_response};
pub use response::HttpResponse;
pub use static_response::StaticResponse;
