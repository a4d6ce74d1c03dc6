//! In-memory HTTP response.

use super::HttpResponse;
use crate::domain::content_types::CONTENT_TYPE_HEADER;

/// A fully buffered response with a fixed header list and text body.
///
/// Useful for building documents from data that did not come over the wire
/// and for tests.
///
/// # Examples
///
/// ```ignore
/// let response = StaticResponse::new("application/ld+json", "\"foo\"");
/// assert_eq!(response.header_line("content-type"), "application/ld+json");
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticResponse {
    headers: Vec<(String, String)>,
    body: String,
}

impl StaticResponse {
    /// Creates a response with a `Content-Type` header and a body.
    pub fn new(content_type: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            headers: vec![(CONTENT_TYPE_HEADER.to_string(), content_type.into())],
            body: body.into(),
        }
    }

    /// Creates a response with a body and no headers.
    pub fn without_headers(body: impl Into<String>) -> Self {
        Self {
            headers: Vec::new(),
            body: body.into(),
        }
    }

    /// Returns a copy with an additional header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

impl HttpResponse for StaticResponse {
    fn header_line(&self, name: &str) -> String {
        self.headers
            .iter()
            .filter(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn body_text(&self) -> String {
        self.body.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sets_content_type() {
        let response = StaticResponse::new("application/json", "{}");

        assert_eq!(response.header_line("Content-Type"), "application/json");
        assert_eq!(response.header_line("CONTENT-TYPE"), "application/json");
        assert_eq!(response.body_text(), "{}");
    }

    #[test]
    fn test_without_headers() {
        let response = StaticResponse::without_headers("[]");
        assert_eq!(response.header_line("Content-Type"), "");
    }

    #[test]
    fn test_with_header_repeated() {
        let response = StaticResponse::without_headers("")
            .with_header("Vary", "Accept")
            .with_header("vary", "Origin");

        assert_eq!(response.header_line("Vary"), "Accept, Origin");
    }
}
