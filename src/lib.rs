//! # JSON Document
//!
//! Immutable, content-type checked JSON documents built from raw content or
//! from a full HTTP response.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Media types, content-type rule sets, web
//!   resources and JSON documents
//! - **Infrastructure Layer** ([`infrastructure`]) - HTTP response abstraction
//!   and axum adapters
//! - **Utilities** ([`utils`]) - `Content-Type` header parsing
//!
//! ## Features
//!
//! - Literal and pattern based content-type acceptance (`application/*+json`)
//! - Copy-on-write setters that never modify the receiver
//! - Response body snapshot taken once, response retained by identity
//! - Lazy decoding into an insertion-ordered data model or any serde type
//!
//! ## Quick Start
//!
//! ```ignore
//! use json_document::prelude::*;
//!
//! let document = JsonDocument::create_from_content(None, "{\"foo\":\"bar\"}", None)?;
//! assert_eq!(document.content_type().to_string(), "application/json");
//! assert_eq!(document.data()?.get("foo").and_then(JsonData::as_str), Some("bar"));
//! ```
//!
//! ## Configuration
//!
//! Extra accepted media types and logging are configured from environment
//! variables via [`config::Config`].

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod telemetry;
pub mod utils;

pub use error::{DecodeError, DocumentError};

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::domain::content_types::ContentTypeRuleSet;
    pub use crate::domain::entities::{
        JsonData, JsonDocument, MediaType, WebResource, WebResourceProperties,
    };
    pub use crate::error::{DecodeError, DocumentError};
    pub use crate::infrastructure::http::{HttpResponse, StaticResponse};
}
