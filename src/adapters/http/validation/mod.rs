//! HTTP adapters for idea validation
//!
//! Exposes the validate/confirm exchange and a health probe.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use handlers::ValidationAppState;
pub use routes::routes;
