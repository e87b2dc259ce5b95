//! Idea Validator - Startup idea analysis over HTTP
//!
//! Turns a founder's free-text description and five structured answers into
//! an LLM-generated analysis, then handles the confirm/clarify follow-up.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
