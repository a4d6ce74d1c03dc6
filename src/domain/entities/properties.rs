//! Construction input for web resources and documents.

use crate::domain::entities::MediaType;
use crate::infrastructure::http::HttpResponse;
use std::sync::Arc;
use url::Url;

/// Property bag consumed once when a document is built.
///
/// All fields are optional. When a response is present, content and content
/// type are derived from it unless set explicitly here; explicit values win
/// but the response is still retained on the document.
///
/// # Examples
///
/// ```ignore
/// let props = WebResourceProperties::new()
///     .with_uri(Url::parse("https://example.com/data.json")?)
///     .with_content("{\"foo\":\"bar\"}");
/// let document = JsonDocument::new(props)?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct WebResourceProperties {
    pub uri: Option<Url>,
    pub content: Option<String>,
    pub content_type: Option<MediaType>,
    pub response: Option<Arc<dyn HttpResponse>>,
}

impl WebResourceProperties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_uri(mut self, uri: Url) -> Self {
        self.uri = Some(uri);
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_content_type(mut self, content_type: MediaType) -> Self {
        self.content_type = Some(content_type);
        self
    }

    /// Sets the source response, taking ownership of it.
    pub fn with_response<R>(self, response: R) -> Self
    where
        R: HttpResponse + 'static,
    {
        self.with_shared_response(Arc::new(response))
    }

    /// Sets the source response from an existing shared handle.
    ///
    /// The document hands this exact handle back from `response()`.
    pub fn with_shared_response(mut self, response: Arc<dyn HttpResponse>) -> Self {
        self.response = Some(response);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::http::StaticResponse;

    #[test]
    fn test_default_is_empty() {
        let props = WebResourceProperties::new();

        assert!(props.uri.is_none());
        assert!(props.content.is_none());
        assert!(props.content_type.is_none());
        assert!(props.response.is_none());
    }

    #[test]
    fn test_builder_sets_fields() {
        let props = WebResourceProperties::new()
            .with_uri(Url::parse("https://example.com/a.json").unwrap())
            .with_content("[]")
            .with_content_type(MediaType::new("text", "json"))
            .with_response(StaticResponse::new("application/json", "{}"));

        assert_eq!(props.uri.unwrap().as_str(), "https://example.com/a.json");
        assert_eq!(props.content.as_deref(), Some("[]"));
        assert_eq!(props.content_type, Some(MediaType::new("text", "json")));
        assert!(props.response.is_some());
    }

    #[test]
    fn test_with_shared_response_keeps_handle() {
        let response: Arc<dyn HttpResponse> = Arc::new(StaticResponse::new("text/json", "1"));
        let props = WebResourceProperties::new().with_shared_response(Arc::clone(&response));

        assert!(Arc::ptr_eq(props.response.as_ref().unwrap(), &response));
    }
}
