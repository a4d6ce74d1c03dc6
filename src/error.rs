//! Error types raised by document construction, mutation and decoding.
//!
//! Content-type problems and JSON decoding problems are kept apart on purpose:
//! a [`DocumentError`] means the caller supplied metadata the document cannot
//! accept, while a [`DecodeError`] only says the payload is not valid JSON.

use crate::domain::entities::MediaType;

/// Stable code of [`DocumentError::InvalidContentType`] for programmatic matching.
pub const INVALID_CONTENT_TYPE_CODE: i32 = 2;

/// Stable code of [`DocumentError::MediaTypeParse`].
pub const MEDIA_TYPE_PARSE_CODE: i32 = 3;

/// Stable code of [`DocumentError::InvalidPattern`].
pub const INVALID_PATTERN_CODE: i32 = 4;

/// Stable code of [`DocumentError::InvalidRuleSet`].
pub const INVALID_RULE_SET_CODE: i32 = 5;

/// Errors raised while building or mutating a document.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DocumentError {
    /// The resolved media type is not accepted by the document's rule set.
    #[error("Invalid content type \"{content_type}\"")]
    InvalidContentType { content_type: MediaType },

    /// A `Content-Type` header value could not be parsed.
    #[error("Invalid media type \"{header}\": {reason}")]
    MediaTypeParse { header: String, reason: String },

    /// A content-type pattern failed to compile.
    #[error("Invalid content type pattern \"{pattern}\": {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// A content-type rule set has no literals or rejects its own default.
    #[error("Invalid content type rule set: {reason}")]
    InvalidRuleSet { reason: String },
}

impl DocumentError {
    pub fn invalid_content_type(content_type: MediaType) -> Self {
        Self::InvalidContentType { content_type }
    }

    pub fn media_type_parse(header: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MediaTypeParse {
            header: header.into(),
            reason: reason.into(),
        }
    }

    pub fn invalid_rule_set(reason: impl Into<String>) -> Self {
        Self::InvalidRuleSet {
            reason: reason.into(),
        }
    }

    /// Returns the stable numeric code for this error kind.
    pub fn code(&self) -> i32 {
        match self {
            Self::InvalidContentType { .. } => INVALID_CONTENT_TYPE_CODE,
            Self::MediaTypeParse { .. } => MEDIA_TYPE_PARSE_CODE,
            Self::InvalidPattern { .. } => INVALID_PATTERN_CODE,
            Self::InvalidRuleSet { .. } => INVALID_RULE_SET_CODE,
        }
    }

    /// Returns the rejected media type for [`DocumentError::InvalidContentType`].
    pub fn content_type(&self) -> Option<&MediaType> {
        match self {
            Self::InvalidContentType { content_type } => Some(content_type),
            _ => None,
        }
    }
}

/// Raised when document content is not valid JSON text.
#[derive(Debug, thiserror::Error)]
#[error("Failed to decode JSON content: {source}")]
pub struct DecodeError {
    #[from]
    source: serde_json::Error,
}

impl DecodeError {
    /// One-based line of the decode failure.
    pub fn line(&self) -> usize {
        self.source.line()
    }

    /// One-based column of the decode failure.
    pub fn column(&self) -> usize {
        self.source.column()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_content_type_message() {
        let err = DocumentError::invalid_content_type(MediaType::new("image", "jpg"));

        assert_eq!(err.to_string(), "Invalid content type \"image/jpg\"");
        assert_eq!(err.code(), INVALID_CONTENT_TYPE_CODE);
        assert_eq!(err.content_type(), Some(&MediaType::new("image", "jpg")));
    }

    #[test]
    fn test_media_type_parse_has_no_content_type() {
        let err = DocumentError::media_type_parse("", "empty header");

        assert_eq!(err.code(), MEDIA_TYPE_PARSE_CODE);
        assert!(err.content_type().is_none());
        assert!(err.to_string().contains("empty header"));
    }

    #[test]
    fn test_decode_error_position() {
        let source = serde_json::from_str::<serde_json::Value>("{\n  \"a\": }").unwrap_err();
        let err = DecodeError::from(source);

        assert_eq!(err.line(), 2);
        assert!(err.column() > 0);
        assert!(err.to_string().starts_with("Failed to decode JSON content"));
    }
}
