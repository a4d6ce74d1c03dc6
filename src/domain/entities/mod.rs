//! Document entities.
//!
//! Documents are built by composition rather than inheritance: a generic
//! [`WebResource`] holds the URI, content snapshot, media type and source
//! response, and [`JsonDocument`] layers content-type validation and JSON
//! decoding on top of it.
//!
//! # Entity Types
//!
//! - [`MediaType`] - A `type/subtype` pair with optional parameters
//! - [`WebResourceProperties`] - Construction input for every build path
//! - [`WebResource`] - Generic immutable resource record
//! - [`JsonDocument`] - Validated JSON document
//! - [`JsonData`] - Decoded document data

pub mod json_data;
pub mod json_document;
pub mod media_type;
pub mod properties;
pub mod web_resource;

pub use json_data::JsonData;
pub use json_document::JsonDocument;
pub use media_type::MediaType;
pub use properties::WebResourceProperties;
pub use web_resource::WebResource;
