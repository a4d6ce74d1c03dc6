#![allow(dead_code)]

use json_document::infrastructure::http::{HttpResponse, StaticResponse};
use std::sync::Arc;
use url::Url;

/// Builds a shared response with the given `Content-Type` header and body.
pub fn create_response(content_type: &str, body: &str) -> Arc<dyn HttpResponse> {
    Arc::new(StaticResponse::new(content_type, body))
}

/// Builds an `application/json` response carrying `value` encoded as JSON.
pub fn create_json_response(value: &serde_json::Value) -> Arc<dyn HttpResponse> {
    create_response("application/json", &value.to_string())
}

pub fn test_uri(path: &str) -> Url {
    Url::parse("https://example.com/")
        .and_then(|base| base.join(path))
        .unwrap()
}
