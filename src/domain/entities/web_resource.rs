//! Generic immutable web resource.

use crate::domain::content_types::{CONTENT_TYPE_HEADER, ContentTypeRuleSet};
use crate::domain::entities::{MediaType, WebResourceProperties};
use crate::error::DocumentError;
use crate::infrastructure::http::HttpResponse;
use std::sync::Arc;
use url::Url;

/// A URI, a content snapshot, its declared media type and the response it
/// came from, if any.
///
/// Instances never change. The `with_*` methods return modified copies; the
/// response is shared by handle and its body is only read when a resource is
/// resolved from it.
#[derive(Debug, Clone)]
pub struct WebResource {
    uri: Option<Url>,
    content: String,
    content_type: MediaType,
    response: Option<Arc<dyn HttpResponse>>,
}

impl WebResource {
    /// Resolves properties into a resource validated against `rules`.
    ///
    /// # Resolution
    ///
    /// 1. Content type: explicit value, else the response's `Content-Type`
    ///    header, else the rule set default
    /// 2. The content type is validated before any body is read
    /// 3. Content: explicit value, else a snapshot of the response body,
    ///    else empty
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::MediaTypeParse`] if the response header cannot
    /// be parsed and [`DocumentError::InvalidContentType`] if the resolved type
    /// is not accepted.
    pub fn resolve(
        properties: WebResourceProperties,
        rules: &ContentTypeRuleSet,
    ) -> Result<Self, DocumentError> {
        let WebResourceProperties {
            uri,
            content,
            content_type,
            response,
        } = properties;

        let content_type = match (content_type, &response) {
            (Some(content_type), _) => content_type,
            (None, Some(response)) => {
                MediaType::parse(&response.header_line(CONTENT_TYPE_HEADER))?
            }
            (None, None) => rules.default_media_type(),
        };
        let content_type = rules.validate(content_type)?;

        let content = match (content, &response) {
            (Some(content), _) => content,
            (None, Some(response)) => response.body_text(),
            (None, None) => String::new(),
        };

        Ok(Self {
            uri,
            content,
            content_type,
            response,
        })
    }

    pub fn uri(&self) -> Option<&Url> {
        self.uri.as_ref()
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn content_type(&self) -> &MediaType {
        &self.content_type
    }

    pub fn response(&self) -> Option<&Arc<dyn HttpResponse>> {
        self.response.as_ref()
    }

    pub fn with_uri(&self, uri: Option<Url>) -> Self {
        Self {
            uri,
            ..self.clone()
        }
    }

    pub fn with_content(&self, content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..self.clone()
        }
    }

    /// Returns a copy with a new content type, validated against `rules`.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::InvalidContentType`] if `rules` rejects it.
    pub fn with_content_type(
        &self,
        content_type: MediaType,
        rules: &ContentTypeRuleSet,
    ) -> Result<Self, DocumentError> {
        let content_type = rules.validate(content_type)?;
        Ok(Self {
            content_type,
            ..self.clone()
        })
    }

    /// Returns a copy rebuilt from `response`, keeping the URI.
    ///
    /// Content and content type are derived from the response exactly as in
    /// [`WebResource::resolve`].
    ///
    /// # Errors
    ///
    /// See [`WebResource::resolve`].
    pub fn with_response(
        &self,
        response: Arc<dyn HttpResponse>,
        rules: &ContentTypeRuleSet,
    ) -> Result<Self, DocumentError> {
        let mut properties = WebResourceProperties::new().with_shared_response(response);
        properties.uri = self.uri.clone();
        Self::resolve(properties, rules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::http::StaticResponse;

    fn json_rules() -> Arc<ContentTypeRuleSet> {
        ContentTypeRuleSet::json()
    }

    #[test]
    fn test_resolve_defaults() {
        let resource = WebResource::resolve(WebResourceProperties::new(), &json_rules()).unwrap();

        assert!(resource.uri().is_none());
        assert_eq!(resource.content(), "");
        assert_eq!(resource.content_type().to_string(), "application/json");
        assert!(resource.response().is_none());
    }

    #[test]
    fn test_resolve_from_response() {
        let props = WebResourceProperties::new()
            .with_response(StaticResponse::new("text/javascript; charset=utf-8", "[1]"));
        let resource = WebResource::resolve(props, &json_rules()).unwrap();

        assert_eq!(resource.content(), "[1]");
        assert_eq!(resource.content_type().to_string(), "text/javascript");
        assert_eq!(resource.content_type().parameter("charset"), Some("utf-8"));
        assert!(resource.response().is_some());
    }

    #[test]
    fn test_resolve_explicit_values_override_response() {
        let props = WebResourceProperties::new()
            .with_response(StaticResponse::new("text/plain", "not json"))
            .with_content("{}")
            .with_content_type(MediaType::new("application", "json"));
        let resource = WebResource::resolve(props, &json_rules()).unwrap();

        assert_eq!(resource.content(), "{}");
        assert_eq!(resource.content_type().to_string(), "application/json");
        assert!(resource.response().is_some());
    }

    #[test]
    fn test_resolve_response_without_content_type_header() {
        let props =
            WebResourceProperties::new().with_response(StaticResponse::without_headers("{}"));
        let result = WebResource::resolve(props, &json_rules());

        assert!(matches!(
            result.unwrap_err(),
            DocumentError::MediaTypeParse { .. }
        ));
    }

    #[test]
    fn test_with_content_type_rejected() {
        let resource = WebResource::resolve(WebResourceProperties::new(), &json_rules()).unwrap();
        let result = resource.with_content_type(MediaType::new("text", "html"), &json_rules());

        assert!(result.is_err());
        assert_eq!(resource.content_type().to_string(), "application/json");
    }

    #[test]
    fn test_with_response_keeps_uri() {
        let uri = Url::parse("https://example.com/doc").unwrap();
        let resource = WebResource::resolve(
            WebResourceProperties::new().with_uri(uri.clone()),
            &json_rules(),
        )
        .unwrap();

        let updated = resource
            .with_response(
                Arc::new(StaticResponse::new("application/ld+json", "{}")),
                &json_rules(),
            )
            .unwrap();

        assert_eq!(updated.uri(), Some(&uri));
        assert_eq!(updated.content(), "{}");
        assert_eq!(updated.content_type().to_string(), "application/ld+json");
    }
}
