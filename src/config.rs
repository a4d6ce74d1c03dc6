//! Configuration loaded from environment variables.
//!
//! Configuration is read once, validated, and then used to build the content
//! type rule set and the logging setup.
//!
//! ## Optional Variables
//!
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `JSON_DOCUMENT_EXTRA_CONTENT_TYPES` - Comma-separated media types accepted
//!   in addition to the modelled ones (e.g. `application/x-ndjson`)
//! - `JSON_DOCUMENT_EXTRA_PATTERNS` - Comma-separated regex patterns for
//!   additional accepted media types (anchored to the whole `type/subtype`)
//! - `JSON_DOCUMENT_MAX_BODY_BYTES` - Upper bound for buffered response bodies
//!   (default: 10485760)
//!
//! ```bash
//! export JSON_DOCUMENT_EXTRA_CONTENT_TYPES="application/x-ndjson,application/json-seq"
//! export JSON_DOCUMENT_EXTRA_PATTERNS='application/vnd\.[a-z.]+\+json'
//! ```

use crate::domain::content_types::ContentTypeRuleSet;
use crate::domain::entities::MediaType;
use crate::infrastructure::http::DEFAULT_MAX_BODY_BYTES;
use anyhow::{Context, Result};
use std::env;
use std::sync::Arc;

/// Settings loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub log_format: String,
    /// Literal media types accepted on top of the modelled JSON types.
    pub extra_content_types: Vec<String>,
    /// Regex patterns accepted on top of the `application/*+json` pattern.
    pub extra_patterns: Vec<String>,
    pub max_body_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            extra_content_types: Vec::new(),
            extra_patterns: Vec::new(),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `JSON_DOCUMENT_MAX_BODY_BYTES` is set but is not a number.
    pub fn from_env() -> Result<Self> {
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let extra_content_types = split_list(env::var("JSON_DOCUMENT_EXTRA_CONTENT_TYPES").ok());
        let extra_patterns = split_list(env::var("JSON_DOCUMENT_EXTRA_PATTERNS").ok());

        let max_body_bytes = match env::var("JSON_DOCUMENT_MAX_BODY_BYTES") {
            Ok(v) => v
                .parse::<usize>()
                .with_context(|| format!("JSON_DOCUMENT_MAX_BODY_BYTES must be a number, got '{v}'"))?,
            Err(_) => DEFAULT_MAX_BODY_BYTES,
        };

        Ok(Self {
            log_level,
            log_format,
            extra_content_types,
            extra_patterns,
            max_body_bytes,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - an extra content type is not a `type/subtype` media type
    /// - an extra pattern does not compile
    /// - `max_body_bytes` is zero
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        for content_type in &self.extra_content_types {
            MediaType::parse(content_type).with_context(|| {
                format!("JSON_DOCUMENT_EXTRA_CONTENT_TYPES contains '{content_type}'")
            })?;
        }

        self.rule_set()?;

        if self.max_body_bytes == 0 {
            anyhow::bail!("JSON_DOCUMENT_MAX_BODY_BYTES must be greater than 0");
        }

        Ok(())
    }

    /// Builds the JSON rule set extended with the configured types and patterns.
    ///
    /// # Errors
    ///
    /// Returns an error if a configured pattern does not compile.
    pub fn rule_set(&self) -> Result<Arc<ContentTypeRuleSet>> {
        if self.extra_content_types.is_empty() && self.extra_patterns.is_empty() {
            return Ok(ContentTypeRuleSet::json());
        }

        let mut rules = ContentTypeRuleSet::json().as_ref().clone();
        for content_type in &self.extra_content_types {
            // Parameters are not part of acceptance.
            let essence = content_type.split(';').next().unwrap_or_default();
            rules = rules.with_literal(essence);
        }
        for pattern in &self.extra_patterns {
            rules = rules
                .with_pattern(pattern)
                .context("JSON_DOCUMENT_EXTRA_PATTERNS contains an invalid pattern")?;
        }

        Ok(Arc::new(rules))
    }

    /// Logs a configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        if self.extra_content_types.is_empty() {
            tracing::info!("  Extra content types: none");
        } else {
            tracing::info!(
                "  Extra content types: {}",
                self.extra_content_types.join(", ")
            );
        }
        tracing::info!("  Extra patterns: {}", self.extra_patterns.len());
        tracing::info!("  Max body bytes: {}", self.max_body_bytes);
    }
}

fn split_list(value: Option<String>) -> Vec<String> {
    value
        .map(|v| {
            v.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
