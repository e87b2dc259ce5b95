//! ConfirmAnalysisHandler - Accept or reject a delivered analysis

use std::sync::Arc;

use crate::domain::validation::{
    clarification_prompt, ConfirmationAnswer, ConversationStatus, InvalidConfirmation,
    CONFIRMED_ACKNOWLEDGMENT, VALIDATOR_INSTRUCTIONS,
};
use crate::ports::{AIError, AIProvider, CompletionRequest, RequestMetadata};

use super::GenerationSettings;

/// Command carrying the user's answer to the confirmation question
#[derive(Debug, Clone, Default)]
pub struct ConfirmAnalysisCommand {
    /// Raw answer text; only "yes"/"no" in any case are accepted.
    pub confirmation: String,
    /// Context resent by the client. Accepted but not used in the prompt.
    pub original_data: serde_json::Value,
}

/// Result of handling a confirmation
#[derive(Debug, Clone)]
pub struct ConfirmAnalysisResult {
    pub response: String,
    pub status: ConversationStatus,
}

/// Error type for confirmation handling
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfirmAnalysisError {
    /// Confirmation was neither "yes" nor "no"
    #[error(transparent)]
    InvalidConfirmation(#[from] InvalidConfirmation),
    /// The clarification model call failed
    #[error("{0}")]
    AIProvider(String),
}

impl From<AIError> for ConfirmAnalysisError {
    fn from(err: AIError) -> Self {
        ConfirmAnalysisError::AIProvider(err.to_string())
    }
}

/// Handler for the confirm/reject step
pub struct ConfirmAnalysisHandler<P: ?Sized + AIProvider> {
    ai_provider: Arc<P>,
    settings: GenerationSettings,
}

impl<P: ?Sized + AIProvider> ConfirmAnalysisHandler<P> {
    pub fn new(ai_provider: Arc<P>, settings: GenerationSettings) -> Self {
        Self {
            ai_provider,
            settings,
        }
    }

    pub async fn handle(
        &self,
        cmd: ConfirmAnalysisCommand,
    ) -> Result<ConfirmAnalysisResult, ConfirmAnalysisError> {
        let answer = ConfirmationAnswer::parse(&cmd.confirmation).map_err(|e| {
            tracing::debug!(confirmation = %cmd.confirmation, "Rejected confirmation value");
            e
        })?;

        let result = match answer {
            ConfirmationAnswer::Yes => ConfirmAnalysisResult {
                response: CONFIRMED_ACKNOWLEDGMENT.to_string(),
                status: ConversationStatus::Confirmed,
            },
            ConfirmationAnswer::No => ConfirmAnalysisResult {
                response: self.request_clarification().await?,
                status: ConversationStatus::NeedsClarification,
            },
        };

        tracing::debug!(status = %result.status, "Confirmation handled");
        Ok(result)
    }

    /// Asks the model for clarification questions.
    async fn request_clarification(&self) -> Result<String, ConfirmAnalysisError> {
        let metadata = RequestMetadata::generate("clarify");
        tracing::info!(
            trace_id = %metadata.trace_id,
            "Analysis rejected, requesting clarification"
        );

        let request = self
            .settings
            .apply(CompletionRequest::new(clarification_prompt(), metadata.clone()))
            .with_system_prompt(VALIDATOR_INSTRUCTIONS);

        let response = self.ai_provider.complete(request).await.map_err(|e| {
            tracing::error!(
                trace_id = %metadata.trace_id,
                error = %e,
                "Clarification request failed"
            );
            ConfirmAnalysisError::from(e)
        })?;

        tracing::info!(
            trace_id = %metadata.trace_id,
            response_len = response.content.len(),
            total_tokens = response.usage.total_tokens,
            "Clarification questions generated"
        );

        Ok(response.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockAIProvider;

    fn command(confirmation: &str) -> ConfirmAnalysisCommand {
        ConfirmAnalysisCommand {
            confirmation: confirmation.to_string(),
            original_data: serde_json::json!({ "problem": "Expenses" }),
        }
    }

    fn handler(provider: &Arc<MockAIProvider>) -> ConfirmAnalysisHandler<MockAIProvider> {
        ConfirmAnalysisHandler::new(provider.clone(), GenerationSettings::default())
    }

    #[tokio::test]
    async fn test_yes_in_any_case_confirms_without_model_call() {
        let provider = Arc::new(MockAIProvider::new());
        let handler = handler(&provider);

        for raw in ["YES", "Yes", "yes"] {
            let result = handler.handle(command(raw)).await.unwrap();
            assert_eq!(result.status, ConversationStatus::Confirmed);
            assert_eq!(result.response, "Great! Proceeding to next steps...");
        }

        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn test_no_requests_clarification_exactly_once() {
        let provider = Arc::new(
            MockAIProvider::new().with_response("1. How large is your market?\n2. ..."),
        );
        let handler = handler(&provider);

        let result = handler.handle(command("No")).await.unwrap();

        assert_eq!(result.status, ConversationStatus::NeedsClarification);
        assert_eq!(result.response, "1. How large is your market?\n2. ...");

        let calls = provider.get_calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].prompt, clarification_prompt());
        assert_eq!(calls[0].metadata.operation, "clarify");
    }

    #[tokio::test]
    async fn test_clarification_prompt_ignores_original_data() {
        let provider = Arc::new(MockAIProvider::new());
        let handler = handler(&provider);

        handler.handle(command("no")).await.unwrap();

        assert!(!provider.get_calls()[0].prompt.contains("Expenses"));
    }

    #[tokio::test]
    async fn test_invalid_values_are_rejected_without_model_call() {
        let provider = Arc::new(MockAIProvider::new());
        let handler = handler(&provider);

        for raw in ["", "maybe", "y"] {
            let err = handler.handle(command(raw)).await.unwrap_err();
            assert!(matches!(err, ConfirmAnalysisError::InvalidConfirmation(_)));
            assert_eq!(err.to_string(), "Invalid confirmation");
        }

        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn test_clarification_failure_surfaces_provider_error() {
        let provider = Arc::new(MockAIProvider::new().with_error(AIError::AuthenticationFailed));
        let handler = handler(&provider);

        let err = handler.handle(command("no")).await.unwrap_err();

        assert!(matches!(err, ConfirmAnalysisError::AIProvider(_)));
        assert_eq!(err.to_string(), "authentication failed");
    }
}
