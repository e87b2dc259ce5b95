//! AI Provider Adapters.
//!
//! Implementations of the AIProvider port.
//!
//! ## Available Adapters
//!
//! - `GeminiProvider` - Google Gemini models (default)
//! - `OpenAIProvider` - OpenAI GPT models
//! - `TimeoutAIProvider` - Wrapper enforcing a per-call deadline
//! - `MockAIProvider` - Configurable mock for testing

mod gemini_provider;
mod mock_provider;
mod openai_provider;
mod timeout_provider;

pub use gemini_provider::{GeminiConfig, GeminiProvider, DEFAULT_GEMINI_MODEL};
pub use mock_provider::{MockAIProvider, DEFAULT_MOCK_REPLY};
pub use openai_provider::{OpenAIConfig, OpenAIProvider, DEFAULT_OPENAI_MODEL};
pub use timeout_provider::TimeoutAIProvider;

use std::sync::Arc;

use crate::config::{AiConfig, AiProvider};
use crate::ports::{AIError, AIProvider};

/// Builds the configured provider, wrapped in the per-call deadline.
pub fn provider_from_config(config: &AiConfig) -> Result<Arc<dyn AIProvider>, AIError> {
    let api_key = config
        .active_api_key()
        .ok_or(AIError::AuthenticationFailed)?
        .to_string();
    let model = config.model_or_default().to_string();

    let inner: Arc<dyn AIProvider> = match config.provider {
        AiProvider::Gemini => {
            let mut gemini = GeminiConfig::new(api_key)
                .with_model(model)
                .with_timeout(config.timeout());
            if let Some(url) = &config.base_url {
                gemini = gemini.with_base_url(url.clone());
            }
            Arc::new(GeminiProvider::new(gemini)?)
        }
        AiProvider::OpenAI => {
            let mut openai = OpenAIConfig::new(api_key)
                .with_model(model)
                .with_timeout(config.timeout());
            if let Some(url) = &config.base_url {
                openai = openai.with_base_url(url.clone());
            }
            Arc::new(OpenAIProvider::new(openai)?)
        }
    };

    Ok(Arc::new(TimeoutAIProvider::from_arc(inner, config.timeout())))
}
