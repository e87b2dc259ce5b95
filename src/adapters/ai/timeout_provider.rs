//! Timeout AI Provider - Wrapper that bounds every completion with a deadline.
//!
//! Provider HTTP clients carry their own timeouts, but those only cover the
//! transport. This wrapper bounds the whole call, whatever the inner provider
//! does, and reports expiry as [`AIError::Timeout`].
//!
//! # Example
//!
//! ```ignore
//! let provider = TimeoutAIProvider::new(GeminiProvider::new(config)?, Duration::from_secs(60));
//! ```

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

use crate::ports::{AIError, AIProvider, CompletionRequest, CompletionResponse, ProviderInfo};

/// AI provider wrapper enforcing a per-call deadline.
pub struct TimeoutAIProvider {
    inner: Arc<dyn AIProvider>,
    timeout: Duration,
}

impl TimeoutAIProvider {
    /// Wraps a provider with the given deadline.
    pub fn new(inner: impl AIProvider + 'static, timeout: Duration) -> Self {
        Self {
            inner: Arc::new(inner),
            timeout,
        }
    }

    /// Wraps an already shared provider.
    pub fn from_arc(inner: Arc<dyn AIProvider>, timeout: Duration) -> Self {
        Self { inner, timeout }
    }

    /// The configured deadline.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[async_trait]
impl AIProvider for TimeoutAIProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
        let trace_id = request.metadata.trace_id.clone();
        match tokio::time::timeout(self.timeout, self.inner.complete(request)).await {
            Ok(result) => result,
            Err(_) => {
                tracing::warn!(
                    trace_id = %trace_id,
                    timeout_ms = self.timeout.as_millis() as u64,
                    "AI provider call exceeded deadline"
                );
                Err(AIError::timeout(self.timeout))
            }
        }
    }

    fn provider_info(&self) -> ProviderInfo {
        self.inner.provider_info()
    }
}
