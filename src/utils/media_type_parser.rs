//! `Content-Type` header parsing.
//!
//! Splits a header value such as `application/ld+json; charset="UTF-8"` into a
//! lower-cased [`MediaType`] with its parameters. Only the syntax needed to
//! identify a document format is handled; no registry lookup is done.

use crate::domain::entities::MediaType;
use crate::error::DocumentError;
use regex::Regex;
use std::sync::LazyLock;

/// RFC 7230 token characters for type, subtype and parameter names.
static ESSENCE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([!#$%&'*+.^_`|~0-9A-Za-z-]+)/([!#$%&'*+.^_`|~0-9A-Za-z-]+)$")
        .expect("media type essence regex is valid")
});

static PARAMETER_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[!#$%&'*+.^_`|~0-9A-Za-z-]+$").expect("parameter name regex is valid")
});

/// Parses a header value into a [`MediaType`].
///
/// Type and subtype are lower-cased; parameter names are lower-cased and quoted
/// parameter values are unquoted. Parameters without a `=` are skipped.
///
/// # Errors
///
/// Returns [`DocumentError::MediaTypeParse`] if the value is empty or the
/// `type/subtype` part is malformed.
///
/// # Examples
///
/// ```ignore
/// let media_type = parse_media_type("Application/JSON; charset=utf-8").unwrap();
/// assert_eq!(media_type.to_string(), "application/json");
/// assert_eq!(media_type.parameter("charset"), Some("utf-8"));
/// ```
pub fn parse_media_type(header: &str) -> Result<MediaType, DocumentError> {
    let mut parts = header.split(';');
    let essence = parts.next().unwrap_or_default().trim();

    if essence.is_empty() {
        return Err(DocumentError::media_type_parse(header, "empty media type"));
    }

    let captures = ESSENCE_REGEX
        .captures(essence)
        .ok_or_else(|| DocumentError::media_type_parse(header, "expected \"type/subtype\""))?;

    let mut media_type = MediaType::new(
        captures[1].to_ascii_lowercase(),
        captures[2].to_ascii_lowercase(),
    );

    for parameter in parts {
        let Some((name, value)) = parameter.split_once('=') else {
            continue;
        };

        let name = name.trim();
        if !PARAMETER_NAME_REGEX.is_match(name) {
            return Err(DocumentError::media_type_parse(
                header,
                format!("invalid parameter name \"{name}\""),
            ));
        }

        let value = value.trim();
        let value = value
            .strip_prefix('"')
            .and_then(|v| v.strip_suffix('"'))
            .unwrap_or(value);

        media_type = media_type.with_parameter(name.to_ascii_lowercase(), value);
    }

    Ok(media_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let media_type = parse_media_type("application/json").unwrap();
        assert_eq!(media_type.type_(), "application");
        assert_eq!(media_type.subtype(), "json");
        assert!(media_type.parameters().is_empty());
    }

    #[test]
    fn test_parse_suffix_subtype() {
        let media_type = parse_media_type("application/ld+json").unwrap();
        assert_eq!(media_type.to_string(), "application/ld+json");
    }

    #[test]
    fn test_parse_lowercases() {
        let media_type = parse_media_type("Application/JSON").unwrap();
        assert_eq!(media_type.to_string(), "application/json");
    }

    #[test]
    fn test_parse_with_parameters() {
        let media_type =
            parse_media_type("application/json; charset=\"UTF-8\"; Profile=compact").unwrap();

        assert_eq!(media_type.to_string(), "application/json");
        assert_eq!(media_type.parameter("charset"), Some("UTF-8"));
        assert_eq!(media_type.parameter("profile"), Some("compact"));
    }

    #[test]
    fn test_parse_surrounding_whitespace() {
        let media_type = parse_media_type("  text/json ;charset=utf-8 ").unwrap();
        assert_eq!(media_type.to_string(), "text/json");
        assert_eq!(media_type.parameter("charset"), Some("utf-8"));
    }

    #[test]
    fn test_parse_skips_valueless_parameter() {
        let media_type = parse_media_type("text/javascript; ;").unwrap();
        assert!(media_type.parameters().is_empty());
    }

    #[test]
    fn test_parse_empty() {
        let result = parse_media_type("");
        assert!(matches!(
            result.unwrap_err(),
            DocumentError::MediaTypeParse { .. }
        ));
    }

    #[test]
    fn test_parse_missing_subtype() {
        assert!(parse_media_type("application").is_err());
        assert!(parse_media_type("application/").is_err());
        assert!(parse_media_type("/json").is_err());
    }

    #[test]
    fn test_parse_extra_slash() {
        assert!(parse_media_type("application/json/extra").is_err());
    }

    #[test]
    fn test_parse_invalid_parameter_name() {
        assert!(parse_media_type("application/json; bad name=1").is_err());
    }
}
