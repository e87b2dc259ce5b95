//! AI provider configuration

use serde::Deserialize;
use std::fmt;
use std::time::Duration;

use super::error::ValidationError;
use crate::adapters::ai::{DEFAULT_GEMINI_MODEL, DEFAULT_OPENAI_MODEL};

/// AI provider configuration
#[derive(Clone, Deserialize)]
pub struct AiConfig {
    /// Which provider serves completions
    #[serde(default)]
    pub provider: AiProvider,

    /// Model identifier; the provider's default when unset
    pub model: Option<String>,

    /// Google Gemini API key
    pub gemini_api_key: Option<String>,

    /// OpenAI API key
    pub openai_api_key: Option<String>,

    /// Override for the provider's API base URL
    pub base_url: Option<String>,

    /// Deadline for a single model call, in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Maximum tokens to generate
    pub max_tokens: Option<u32>,

    /// Sampling temperature
    pub temperature: Option<f32>,
}

/// AI provider type
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AiProvider {
    #[default]
    Gemini,
    OpenAI,
}

impl AiConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Configured model, or the selected provider's default
    pub fn model_or_default(&self) -> &str {
        match (&self.model, self.provider) {
            (Some(model), _) if !model.is_empty() => model,
            (_, AiProvider::Gemini) => DEFAULT_GEMINI_MODEL,
            (_, AiProvider::OpenAI) => DEFAULT_OPENAI_MODEL,
        }
    }

    /// API key for the selected provider, if configured and non-empty
    pub fn active_api_key(&self) -> Option<&str> {
        let key = match self.provider {
            AiProvider::Gemini => self.gemini_api_key.as_deref(),
            AiProvider::OpenAI => self.openai_api_key.as_deref(),
        };
        key.filter(|k| !k.is_empty())
    }

    /// Validate AI configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.active_api_key().is_none() {
            return Err(ValidationError::MissingRequired(match self.provider {
                AiProvider::Gemini => "GEMINI_API_KEY",
                AiProvider::OpenAI => "OPENAI_API_KEY",
            }));
        }
        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidAiTimeout);
        }
        if let Some(temp) = self.temperature {
            if !(0.0..=2.0).contains(&temp) {
                return Err(ValidationError::InvalidTemperature);
            }
        }
        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            provider: AiProvider::default(),
            model: None,
            gemini_api_key: None,
            openai_api_key: None,
            base_url: None,
            timeout_secs: default_timeout(),
            max_tokens: None,
            temperature: None,
        }
    }
}

impl fmt::Debug for AiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |key: &Option<String>| key.as_ref().map(|_| "[REDACTED]");
        f.debug_struct("AiConfig")
            .field("provider", &self.provider)
            .field("model", &self.model)
            .field("gemini_api_key", &redact(&self.gemini_api_key))
            .field("openai_api_key", &redact(&self.openai_api_key))
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .finish()
    }
}

fn default_timeout() -> u64 {
    60
}
