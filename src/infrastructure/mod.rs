//! Infrastructure adapters for the collaborators documents depend on.
//!
//! - [`http`] - HTTP response abstraction and adapters

pub mod http;
