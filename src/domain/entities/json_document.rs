//! Immutable JSON document.

use crate::domain::content_types::ContentTypeRuleSet;
use crate::domain::entities::{JsonData, MediaType, WebResource, WebResourceProperties};
use crate::error::{DecodeError, DocumentError};
use crate::infrastructure::http::HttpResponse;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use url::Url;

/// A web resource whose content type is one the JSON rule set accepts.
///
/// Every instance is valid when it becomes observable: construction and the
/// validating setters ([`set_content_type`], [`set_response`]) fail instead of
/// producing a document with a rejected media type. Setters never modify the
/// receiver; they return a new document.
///
/// [`set_content_type`]: JsonDocument::set_content_type
/// [`set_response`]: JsonDocument::set_response
///
/// # Examples
///
/// ```ignore
/// let document = JsonDocument::create_from_content(None, "{\"foo\":\"bar\"}", None)?;
/// assert_eq!(document.content_type().to_string(), "application/json");
///
/// let ld = document.set_content_type(MediaType::new("application", "ld+json"))?;
/// assert_eq!(document.content_type().to_string(), "application/json");
/// assert_eq!(ld.content_type().to_string(), "application/ld+json");
/// ```
#[derive(Debug, Clone)]
pub struct JsonDocument {
    resource: WebResource,
    rules: Arc<ContentTypeRuleSet>,
}

impl JsonDocument {
    /// Builds a document validated against the JSON rule set.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::InvalidContentType`] if the resolved media type
    /// is rejected, or [`DocumentError::MediaTypeParse`] if a response header
    /// cannot be parsed.
    pub fn new(properties: WebResourceProperties) -> Result<Self, DocumentError> {
        Self::with_rules(properties, ContentTypeRuleSet::json())
    }

    /// Builds a document validated against a custom rule set.
    ///
    /// Documents derived through setters keep validating against `rules`.
    ///
    /// # Errors
    ///
    /// See [`JsonDocument::new`].
    pub fn with_rules(
        properties: WebResourceProperties,
        rules: Arc<ContentTypeRuleSet>,
    ) -> Result<Self, DocumentError> {
        let resource = WebResource::resolve(properties, &rules)?;

        tracing::debug!(
            content_type = %resource.content_type(),
            uri = resource.uri().map(Url::as_str),
            from_response = resource.response().is_some(),
            "Created JSON document"
        );

        Ok(Self { resource, rules })
    }

    /// Builds a document from literal content.
    ///
    /// Without a content type, `application/json` is assumed.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::InvalidContentType`] if `content_type` is rejected.
    pub fn create_from_content(
        uri: Option<Url>,
        content: impl Into<String>,
        content_type: Option<MediaType>,
    ) -> Result<Self, DocumentError> {
        Self::new(WebResourceProperties {
            uri,
            content: Some(content.into()),
            content_type,
            response: None,
        })
    }

    /// Builds a document from an HTTP response.
    ///
    /// The media type is read from the `Content-Type` header and the body is
    /// snapshotted once; the response is retained and returned by identity
    /// from [`JsonDocument::response`].
    ///
    /// # Errors
    ///
    /// See [`JsonDocument::new`].
    pub fn create_from_response(
        uri: Option<Url>,
        response: Arc<dyn HttpResponse>,
    ) -> Result<Self, DocumentError> {
        Self::new(WebResourceProperties {
            uri,
            content: None,
            content_type: None,
            response: Some(response),
        })
    }

    pub fn uri(&self) -> Option<&Url> {
        self.resource.uri()
    }

    pub fn content(&self) -> &str {
        self.resource.content()
    }

    pub fn content_type(&self) -> &MediaType {
        self.resource.content_type()
    }

    /// The response this document, or one it was derived from, was built from.
    pub fn response(&self) -> Option<&Arc<dyn HttpResponse>> {
        self.resource.response()
    }

    /// The rule set this document validates content types against.
    pub fn rules(&self) -> &ContentTypeRuleSet {
        &self.rules
    }

    /// Returns a copy with a different URI.
    pub fn set_uri(&self, uri: Option<Url>) -> Self {
        self.derive(self.resource.with_uri(uri))
    }

    /// Returns a copy with a different content type.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::InvalidContentType`] if the rule set rejects
    /// `content_type`; the receiver is unaffected.
    pub fn set_content_type(&self, content_type: MediaType) -> Result<Self, DocumentError> {
        let resource = self.resource.with_content_type(content_type, &self.rules)?;
        tracing::debug!(content_type = %resource.content_type(), "Changed document content type");
        Ok(self.derive(resource))
    }

    /// Returns a copy with different content.
    ///
    /// The declared content type is metadata and is not checked against the
    /// new payload.
    pub fn set_content(&self, content: impl Into<String>) -> Self {
        self.derive(self.resource.with_content(content))
    }

    /// Returns a copy rebuilt from `response`, keeping the URI.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::InvalidContentType`] or
    /// [`DocumentError::MediaTypeParse`] for an unacceptable response header;
    /// the receiver is unaffected.
    pub fn set_response(&self, response: Arc<dyn HttpResponse>) -> Result<Self, DocumentError> {
        let resource = self.resource.with_response(response, &self.rules)?;
        tracing::debug!(content_type = %resource.content_type(), "Replaced document response");
        Ok(self.derive(resource))
    }

    /// Decodes the content into [`JsonData`].
    ///
    /// Content is decoded on every call. Empty or whitespace-only content
    /// decodes to [`JsonData::Null`].
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] if the content is not valid JSON.
    pub fn data(&self) -> Result<JsonData, DecodeError> {
        self.content_object().map(JsonData::from)
    }

    /// Decodes the content into a raw [`serde_json::Value`].
    ///
    /// Unlike [`JsonDocument::data`], objects and arrays stay distinct.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] if the content is not valid JSON.
    pub fn content_object(&self) -> Result<Value, DecodeError> {
        if self.content().trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(self.content())?)
    }

    /// Deserializes the content into `T`.
    ///
    /// Empty content is treated as `null`, as in [`JsonDocument::data`].
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] if the content is not valid JSON or does not
    /// match `T`.
    pub fn data_as<T: DeserializeOwned>(&self) -> Result<T, DecodeError> {
        Ok(serde_json::from_value(self.content_object()?)?)
    }

    fn derive(&self, resource: WebResource) -> Self {
        Self {
            resource,
            rules: Arc::clone(&self.rules),
        }
    }
}
