//! Content-type acceptance rules.
//!
//! A [`ContentTypeRuleSet`] is plain data: a list of literal media type
//! strings plus anchored regex patterns. One predicate, [`accepts`], consumes
//! both, so the acceptance policy for a document kind lives in one place.
//!
//! [`accepts`]: ContentTypeRuleSet::accepts

use crate::domain::entities::MediaType;
use crate::error::DocumentError;
use regex::Regex;
use std::sync::{Arc, LazyLock};

pub const APPLICATION_JSON_CONTENT_TYPE: &str = "application/json";
pub const TEXT_JAVASCRIPT_CONTENT_TYPE: &str = "text/javascript";
pub const APPLICATION_LD_PLUS_JSON_CONTENT_TYPE: &str = "application/ld+json";
pub const TEXT_JSON_CONTENT_TYPE: &str = "text/json";

/// Matches `application/<lowercase letters>+json` profile media types.
pub const APPLICATION_JSON_SUB_CONTENT_TYPE_PATTERN: &str = r"^application/[a-z]+\+json$";

/// Name of the header the media type is read from.
pub const CONTENT_TYPE_HEADER: &str = "Content-Type";

/// Literal media types modelled by JSON documents, in declaration order.
const MODELLED_CONTENT_TYPE_STRINGS: &[&str] = &[
    APPLICATION_JSON_CONTENT_TYPE,
    TEXT_JAVASCRIPT_CONTENT_TYPE,
    APPLICATION_LD_PLUS_JSON_CONTENT_TYPE,
    TEXT_JSON_CONTENT_TYPE,
];

static JSON_RULE_SET: LazyLock<Arc<ContentTypeRuleSet>> = LazyLock::new(|| {
    let patterns = vec![
        Regex::new(APPLICATION_JSON_SUB_CONTENT_TYPE_PATTERN)
            .expect("JSON sub content type pattern is valid"),
    ];

    Arc::new(ContentTypeRuleSet {
        literals: MODELLED_CONTENT_TYPE_STRINGS
            .iter()
            .map(|s| s.to_string())
            .collect(),
        patterns,
        default_media_type: MediaType::new("application", "json"),
    })
});

/// The set of media types a document kind accepts.
#[derive(Debug, Clone)]
pub struct ContentTypeRuleSet {
    literals: Vec<String>,
    patterns: Vec<Regex>,
    default_media_type: MediaType,
}

impl ContentTypeRuleSet {
    /// Creates a rule set with the given literals and no patterns.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::InvalidRuleSet`] if `literals` is empty or does
    /// not accept `default_media_type`.
    pub fn new<I, S>(literals: I, default_media_type: MediaType) -> Result<Self, DocumentError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut rule_set = Self {
            literals: Vec::new(),
            patterns: Vec::new(),
            default_media_type,
        };
        for literal in literals {
            rule_set = rule_set.with_literal(literal);
        }

        if rule_set.literals.is_empty() {
            return Err(DocumentError::invalid_rule_set("no literal media types"));
        }
        if !rule_set.accepts(&rule_set.default_media_type) {
            return Err(DocumentError::invalid_rule_set(format!(
                "default media type \"{}\" is not accepted",
                rule_set.default_media_type
            )));
        }

        Ok(rule_set)
    }

    /// Returns the shared rule set for JSON documents.
    pub fn json() -> Arc<ContentTypeRuleSet> {
        Arc::clone(&JSON_RULE_SET)
    }

    /// Modelled literal media type strings for JSON documents.
    pub fn modelled_content_type_strings() -> &'static [&'static str] {
        MODELLED_CONTENT_TYPE_STRINGS
    }

    /// Returns a copy that also accepts `literal`.
    ///
    /// The literal is lower-cased; duplicates are ignored.
    pub fn with_literal(mut self, literal: impl Into<String>) -> Self {
        let literal = literal.into().trim().to_ascii_lowercase();
        if !self.literals.contains(&literal) {
            self.literals.push(literal);
        }
        self
    }

    /// Returns a copy that also accepts every media type matching `pattern`.
    ///
    /// Patterns are anchored to the whole `type/subtype` string.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::InvalidPattern`] if the pattern fails to compile.
    pub fn with_pattern(mut self, pattern: &str) -> Result<Self, DocumentError> {
        let anchored = anchor(pattern);
        let regex = Regex::new(&anchored).map_err(|e| DocumentError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?;
        self.patterns.push(regex);
        Ok(self)
    }

    /// Returns true if the media type's `type/subtype` string is a literal
    /// member of the set or matches any pattern.
    pub fn accepts(&self, media_type: &MediaType) -> bool {
        let essence = media_type.essence();

        self.literals.iter().any(|literal| *literal == essence)
            || self.patterns.iter().any(|pattern| pattern.is_match(&essence))
    }

    /// Checks a media type, returning it unchanged if accepted.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::InvalidContentType`] carrying the rejected type.
    pub fn validate(&self, media_type: MediaType) -> Result<MediaType, DocumentError> {
        if self.accepts(&media_type) {
            Ok(media_type)
        } else {
            tracing::debug!(content_type = %media_type, "Rejected content type");
            Err(DocumentError::invalid_content_type(media_type))
        }
    }

    /// Media type used when none is supplied at construction.
    pub fn default_media_type(&self) -> MediaType {
        self.default_media_type.clone()
    }

    pub fn literals(&self) -> &[String] {
        &self.literals
    }

    /// Pattern sources, in insertion order.
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(Regex::as_str)
    }
}

fn anchor(pattern: &str) -> String {
    format!("^(?:{pattern})$")
}
