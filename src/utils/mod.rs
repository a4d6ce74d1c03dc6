//! Helper functions used across the crate.
//!
//! - [`media_type_parser`] - `Content-Type` header parsing

pub mod media_type_parser;
