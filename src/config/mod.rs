//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `IDEA_VALIDATOR__` prefix and nested values use double underscores as separators.
//!
//! A handful of conventional, unprefixed variables are honoured as well:
//! `PORT` always sets the listen port, and `GEMINI_API_KEY` / `GOOGLE_API_KEY` /
//! `OPENAI_API_KEY` fill in provider keys that are not set under the prefix.
//!
//! # Example
//!
//! ```no_run
//! use idea_validator::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod ai;
mod error;
mod server;

pub use ai::{AiConfig, AiProvider};
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;
use std::env;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, logging)
    #[serde(default)]
    pub server: ServerConfig,

    /// AI provider configuration (Gemini/OpenAI)
    #[serde(default)]
    pub ai: AiConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `IDEA_VALIDATOR` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Applies the unprefixed `PORT` and API key variables
    /// 5. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `IDEA_VALIDATOR__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `IDEA_VALIDATOR__AI__PROVIDER=openai` -> `ai.provider = openai`
    /// - `PORT=8080` -> `server.port = 8080` (takes precedence)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let mut builder = config::Config::builder().add_source(
            config::Environment::default()
                .prefix("IDEA_VALIDATOR")
                .separator("__"),
        );

        // Defaults rank below every source, so prefixed keys still win.
        if let Some(key) = first_set(&["GEMINI_API_KEY", "GOOGLE_API_KEY"]) {
            builder = builder.set_default("ai.gemini_api_key", key)?;
        }
        if let Some(key) = first_set(&["OPENAI_API_KEY"]) {
            builder = builder.set_default("ai.openai_api_key", key)?;
        }

        let config = builder
            .set_override_option("server.port", first_set(&["PORT"]))?
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid, including
    /// an AI deadline that would outlive the HTTP request deadline.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.ai.validate()?;

        if self.ai.timeout_secs >= self.server.request_timeout_secs {
            return Err(ValidationError::AiTimeoutExceedsRequestTimeout {
                ai_secs: self.ai.timeout_secs,
                request_secs: self.server.request_timeout_secs,
            });
        }
        Ok(())
    }
}

fn first_set(names: &[&str]) -> Option<String> {
    names
        .iter()
        .filter_map(|name| env::var(name).ok())
        .find(|value| !value.is_empty())
}
