//! The HTTP response trait consumed by documents.

use axum::http::Response;
use std::fmt;

/// A received HTTP response, seen only through what a document needs.
///
/// Implementations must be thread-safe: documents hold responses behind an
/// `Arc` and hand the same object back from
/// [`JsonDocument::response`](crate::domain::entities::JsonDocument::response).
///
/// # Implementations
///
/// - [`axum::http::Response<B>`] for any byte-like body (`Bytes`, `String`, `Vec<u8>`)
/// - [`crate::infrastructure::http::StaticResponse`] - in-memory response
pub trait HttpResponse: Send + Sync + fmt::Debug {
    /// Returns all values of the named header joined with `", "`.
    ///
    /// Header names match case-insensitively. Returns an empty string if the
    /// header is absent.
    fn header_line(&self, name: &str) -> String;

    /// Returns the full body as text, replacing invalid UTF-8 sequences.
    fn body_text(&self) -> String;
}

impl<B> HttpResponse for Response<B>
where
    B: AsRef<[u8]> + Send + Sync + fmt::Debug,
{
    fn header_line(&self, name: &str) -> String {
        self.headers()
            .get_all(name)
            .iter()
            .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn body_text(&self) -> String {
        String::from_utf8_lossy(self.body().as_ref()).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Bytes;
    use axum::http::header;

    #[test]
    fn test_header_line_present() {
        let response = Response::builder()
            .header(header::CONTENT_TYPE, "application/json")
            .body(Bytes::from_static(b"{}"))
            .unwrap();

        assert_eq!(response.header_line("Content-Type"), "application/json");
        assert_eq!(response.header_line("content-type"), "application/json");
    }

    #[test]
    fn test_header_line_absent() {
        let response = Response::builder().body(String::new()).unwrap();
        assert_eq!(response.header_line("Content-Type"), "");
    }

    #[test]
    fn test_header_line_joins_values() {
        let response = Response::builder()
            .header("Link", "<a>; rel=\"next\"")
            .header("Link", "<b>; rel=\"prev\"")
            .body(Vec::<u8>::new())
            .unwrap();

        assert_eq!(
            response.header_line("Link"),
            "<a>; rel=\"next\", <b>; rel=\"prev\""
        );
    }

    #[test]
    fn test_body_text_lossy() {
        let response = Response::builder().body(vec![b'"', 0xFF, b'"']).unwrap();
        assert_eq!(response.body_text(), "\"\u{FFFD}\"");
    }

    #[test]
    fn test_body_text_string() {
        let response = Response::builder()
            .body("\"foo\"".to_string())
            .unwrap();
        assert_eq!(response.body_text(), "\"foo\"");
    }
}
