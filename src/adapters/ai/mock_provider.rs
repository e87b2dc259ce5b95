//! Scripted AI provider for tests.
//!
//! Every `complete` call is recorded, then answered with the next scripted
//! reply. Once the script is exhausted the provider answers with
//! [`DEFAULT_MOCK_REPLY`], so a test that only cares about call counts needs
//! no setup.
//!
//! ```ignore
//! let provider = MockAIProvider::new()
//!     .with_response("- Industry: Fintech")
//!     .with_error(AIError::unavailable("overloaded"));
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use crate::ports::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, ProviderInfo,
    TokenUsage,
};

/// Reply used once the script runs out.
pub const DEFAULT_MOCK_REPLY: &str = "Mock response";

const MOCK_MODEL: &str = "mock-model-1";

#[derive(Debug, Default)]
struct Script {
    replies: VecDeque<Result<String, AIError>>,
    calls: Vec<CompletionRequest>,
}

/// In-process stand-in for a hosted model.
///
/// Clones share one script and one call log, so a test can keep a handle
/// while the router owns another.
#[derive(Debug, Clone, Default)]
pub struct MockAIProvider {
    script: Arc<Mutex<Script>>,
    delay: Duration,
}

impl MockAIProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful reply.
    pub fn with_response(self, content: impl Into<String>) -> Self {
        self.queue(Ok(content.into()))
    }

    /// Queues a failure.
    pub fn with_error(self, error: AIError) -> Self {
        self.queue(Err(error))
    }

    /// Sleeps this long before answering each call.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn call_count(&self) -> usize {
        self.script().calls.len()
    }

    /// Requests received so far, oldest first.
    pub fn get_calls(&self) -> Vec<CompletionRequest> {
        self.script().calls.clone()
    }

    fn queue(self, reply: Result<String, AIError>) -> Self {
        self.script().replies.push_back(reply);
        self
    }

    // A panicking test must not poison the log for the assertions after it.
    fn script(&self) -> MutexGuard<'_, Script> {
        self.script
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn word_count(text: &str) -> u32 {
    u32::try_from(text.split_whitespace().count()).unwrap_or(u32::MAX)
}

#[async_trait]
impl AIProvider for MockAIProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
        let prompt_tokens = word_count(&request.prompt);
        let reply = {
            let mut script = self.script();
            script.calls.push(request);
            script.replies.pop_front()
        };

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let content = reply.unwrap_or_else(|| Ok(DEFAULT_MOCK_REPLY.to_string()))?;
        let usage = TokenUsage::new(prompt_tokens, word_count(&content));

        Ok(CompletionResponse {
            content,
            usage,
            model: MOCK_MODEL.to_string(),
            finish_reason: FinishReason::Stop,
        })
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo::new("mock", MOCK_MODEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::RequestMetadata;

    fn analysis_request() -> CompletionRequest {
        CompletionRequest::new(
            "Step 1: User Onboarding",
            RequestMetadata::new("validate", "trace-123"),
        )
    }

    #[tokio::test]
    async fn replays_script_then_falls_back_to_default() {
        let provider = MockAIProvider::new()
            .with_response("Industry: Fintech")
            .with_error(AIError::unavailable("overloaded"));

        let first = provider.complete(analysis_request()).await.unwrap();
        let second = provider.complete(analysis_request()).await.unwrap_err();
        let third = provider.complete(analysis_request()).await.unwrap();

        assert_eq!(first.content, "Industry: Fintech");
        assert_eq!(first.model, "mock-model-1");
        assert!(matches!(second, AIError::Unavailable { .. }));
        assert_eq!(third.content, DEFAULT_MOCK_REPLY);
    }

    #[tokio::test]
    async fn usage_counts_words_on_both_sides() {
        let provider = MockAIProvider::new().with_response("two words");

        let response = provider.complete(analysis_request()).await.unwrap();

        assert_eq!(response.usage, TokenUsage::new(4, 2));
    }

    #[tokio::test]
    async fn clones_share_call_log() {
        let provider = MockAIProvider::new();
        let handle = provider.clone();

        provider.complete(analysis_request()).await.unwrap();

        assert_eq!(handle.call_count(), 1);
        assert_eq!(handle.get_calls()[0].metadata.operation, "validate");
    }

    #[tokio::test]
    async fn delay_holds_the_reply_back() {
        let provider = MockAIProvider::new().with_delay(Duration::from_millis(50));

        let start = std::time::Instant::now();
        provider.complete(analysis_request()).await.unwrap();

        assert!(start.elapsed() >= Duration::from_millis(50));
    }
}
