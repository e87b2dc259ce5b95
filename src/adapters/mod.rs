//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - Language model providers (Gemini, OpenAI, mock)
//! - `http` - REST API served with axum

pub mod ai;
pub mod http;

pub use ai::{provider_from_config, MockAIProvider, TimeoutAIProvider};
pub use http::{app_router, ValidationAppState};
