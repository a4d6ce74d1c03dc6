//! Media type value identifying a content format.

use crate::error::DocumentError;
use crate::utils::media_type_parser::parse_media_type;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// A `type/subtype` pair with optional parameters.
///
/// Equality and hashing only consider `type` and `subtype`, so
/// `application/json; charset=utf-8` equals `application/json`.
/// [`Display`](fmt::Display) renders the bare `type/subtype` form used for
/// content-type acceptance.
#[derive(Debug, Clone)]
pub struct MediaType {
    type_: String,
    subtype: String,
    parameters: Vec<(String, String)>,
}

impl MediaType {
    /// Creates a media type without parameters.
    pub fn new(type_: impl Into<String>, subtype: impl Into<String>) -> Self {
        Self {
            type_: type_.into(),
            subtype: subtype.into(),
            parameters: Vec::new(),
        }
    }

    /// Returns a copy with an additional parameter.
    pub fn with_parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.push((name.into(), value.into()));
        self
    }

    /// Parses a `Content-Type` header value.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::MediaTypeParse`] for empty or malformed values.
    pub fn parse(header: &str) -> Result<Self, DocumentError> {
        parse_media_type(header)
    }

    pub fn type_(&self) -> &str {
        &self.type_
    }

    pub fn subtype(&self) -> &str {
        &self.subtype
    }

    pub fn parameters(&self) -> &[(String, String)] {
        &self.parameters
    }

    /// Looks up a parameter value by case-insensitive name.
    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.parameters
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// The `type/subtype` string without parameters.
    pub fn essence(&self) -> String {
        format!("{}/{}", self.type_, self.subtype)
    }

    /// Renders the full header value, parameters included.
    pub fn header_value(&self) -> String {
        let mut value = self.essence();
        for (name, param) in &self.parameters {
            value.push_str("; ");
            value.push_str(name);
            value.push('=');
            value.push_str(param);
        }
        value
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.type_, self.subtype)
    }
}

impl PartialEq for MediaType {
    fn eq(&self, other: &Self) -> bool {
        self.type_ == other.type_ && self.subtype == other.subtype
    }
}

impl Eq for MediaType {}

impl Hash for MediaType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_.hash(state);
        self.subtype.hash(state);
    }
}

impl FromStr for MediaType {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_renders_type_and_subtype() {
        let media_type = MediaType::new("application", "ld+json");
        assert_eq!(media_type.to_string(), "application/ld+json");
        assert_eq!(media_type.essence(), "application/ld+json");
    }

    #[test]
    fn test_equality_ignores_parameters() {
        let plain = MediaType::new("application", "json");
        let with_charset = MediaType::new("application", "json").with_parameter("charset", "utf-8");

        assert_eq!(plain, with_charset);
        assert_ne!(plain, MediaType::new("text", "json"));
    }

    #[test]
    fn test_header_value_includes_parameters() {
        let media_type = MediaType::new("application", "json").with_parameter("charset", "utf-8");

        assert_eq!(media_type.header_value(), "application/json; charset=utf-8");
        assert_eq!(media_type.to_string(), "application/json");
        assert_eq!(media_type.parameter("CHARSET"), Some("utf-8"));
        assert_eq!(media_type.parameter("boundary"), None);
    }

    #[test]
    fn test_from_str() {
        let media_type: MediaType = "text/json".parse().unwrap();
        assert_eq!(media_type.type_(), "text");
        assert_eq!(media_type.subtype(), "json");
    }
}
