//! Domain layer: document entities and content-type acceptance.
//!
//! - [`entities`] - Media types, resources and documents
//! - [`content_types`] - Content-type rule sets and the JSON media type constants
//!
//! # Document Lifecycle
//!
//! 1. Caller builds [`entities::WebResourceProperties`] (or uses a named factory)
//! 2. Defaults are resolved, from the response if one is given
//! 3. The media type is checked by [`content_types::ContentTypeRuleSet::accepts`]
//! 4. An immutable [`entities::JsonDocument`] is returned
//! 5. Setters produce new, independently validated documents

pub mod content_types;
pub mod entities;
