use axum::body::{Body, Bytes};
use axum::http::{Response, header};
use json_document::domain::entities::{JsonData, JsonDocument};
use json_document::infrastructure::http::{
    DEFAULT_MAX_BODY_BYTES, HttpResponse, buffer_response,
};
use std::sync::Arc;

fn streaming_response(content_type: &str, body: &'static str) -> Response<Body> {
    Response::builder()
        .header(header::CONTENT_TYPE, content_type)
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn test_document_from_buffered_axum_response() {
    let response = streaming_response("application/hal+json", "{\"_links\":{}}");

    let buffered = buffer_response(response, DEFAULT_MAX_BODY_BYTES)
        .await
        .unwrap();
    let shared: Arc<dyn HttpResponse> = Arc::new(buffered);
    let document = JsonDocument::create_from_response(None, Arc::clone(&shared)).unwrap();

    assert_eq!(document.content_type().to_string(), "application/hal+json");
    assert!(document.data().unwrap().get("_links").unwrap().is_empty());
    assert!(Arc::ptr_eq(document.response().unwrap(), &shared));
}

#[tokio::test]
async fn test_document_from_buffered_axum_response_rejected() {
    let response = streaming_response("text/html; charset=utf-8", "<html></html>");

    let buffered = buffer_response(response, DEFAULT_MAX_BODY_BYTES)
        .await
        .unwrap();
    let err = JsonDocument::create_from_response(None, Arc::new(buffered)).unwrap_err();

    assert_eq!(err.to_string(), "Invalid content type \"text/html\"");
}

#[test]
fn test_document_from_bytes_response() {
    let response = Response::builder()
        .header(header::CONTENT_TYPE, "text/json")
        .body(Bytes::from_static(b"[true, null]"))
        .unwrap();

    let document = JsonDocument::create_from_response(None, Arc::new(response)).unwrap();

    assert_eq!(
        document.data().unwrap(),
        JsonData::Sequence(vec![JsonData::Bool(true), JsonData::Null])
    );
}
