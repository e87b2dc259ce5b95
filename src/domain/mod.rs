//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `validation` - Startup idea, conversation status, confirmation answers, prompt templates

pub mod validation;
