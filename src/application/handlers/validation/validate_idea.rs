//! ValidateIdeaHandler - Analyze a submitted startup idea

use std::sync::Arc;

use crate::domain::validation::{
    analysis_prompt, ConversationStatus, StartupIdea, VALIDATOR_INSTRUCTIONS,
};
use crate::ports::{AIError, AIProvider, CompletionRequest, RequestMetadata};

use super::GenerationSettings;

/// Command to validate a startup idea
#[derive(Debug, Clone)]
pub struct ValidateIdeaCommand {
    pub idea: StartupIdea,
}

/// Result of validating an idea
#[derive(Debug, Clone)]
pub struct ValidateIdeaResult {
    /// Model output, verbatim.
    pub analysis: String,
    /// Always `NeedsConfirmation`.
    pub status: ConversationStatus,
    /// The submitted idea, echoed so the client can resend it.
    pub original_data: StartupIdea,
}

/// Error type for idea validation
#[derive(Debug, Clone, thiserror::Error)]
pub enum ValidateIdeaError {
    /// The model call failed
    #[error("{0}")]
    AIProvider(String),
}

impl From<AIError> for ValidateIdeaError {
    fn from(err: AIError) -> Self {
        ValidateIdeaError::AIProvider(err.to_string())
    }
}

/// Handler for validating startup ideas
pub struct ValidateIdeaHandler<P: ?Sized + AIProvider> {
    ai_provider: Arc<P>,
    settings: GenerationSettings,
}

impl<P: ?Sized + AIProvider> ValidateIdeaHandler<P> {
    pub fn new(ai_provider: Arc<P>, settings: GenerationSettings) -> Self {
        Self {
            ai_provider,
            settings,
        }
    }

    pub async fn handle(
        &self,
        cmd: ValidateIdeaCommand,
    ) -> Result<ValidateIdeaResult, ValidateIdeaError> {
        let metadata = RequestMetadata::generate("validate");
        tracing::info!(
            trace_id = %metadata.trace_id,
            answered = cmd.idea.answered_count(),
            has_user_input = !cmd.idea.user_input.is_empty(),
            "Validating startup idea"
        );

        let request = self
            .settings
            .apply(CompletionRequest::new(analysis_prompt(&cmd.idea), metadata.clone()))
            .with_system_prompt(VALIDATOR_INSTRUCTIONS);

        let response = self.ai_provider.complete(request).await.map_err(|e| {
            tracing::error!(trace_id = %metadata.trace_id, error = %e, "Idea analysis failed");
            ValidateIdeaError::from(e)
        })?;

        tracing::info!(
            trace_id = %metadata.trace_id,
            model = %response.model,
            response_len = response.content.len(),
            total_tokens = response.usage.total_tokens,
            "Idea analysis completed"
        );

        Ok(ValidateIdeaResult {
            analysis: response.content,
            status: ConversationStatus::NeedsConfirmation,
            original_data: cmd.idea,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockAIProvider;

    fn test_idea() -> StartupIdea {
        StartupIdea {
            problem: "No easy way to track expenses".to_string(),
            solution: "Mobile app with AI categorization".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_validate_returns_model_output_verbatim() {
        let provider = Arc::new(MockAIProvider::new().with_response("- Industry: Fintech\n..."));
        let handler = ValidateIdeaHandler::new(provider.clone(), GenerationSettings::default());

        let result = handler
            .handle(ValidateIdeaCommand { idea: test_idea() })
            .await
            .unwrap();

        assert_eq!(result.analysis, "- Industry: Fintech\n...");
        assert_eq!(result.status, ConversationStatus::NeedsConfirmation);
        assert_eq!(result.original_data, test_idea());
    }

    #[tokio::test]
    async fn test_validate_sends_analysis_prompt_with_instructions() {
        let provider = Arc::new(MockAIProvider::new().with_response("ok"));
        let handler = ValidateIdeaHandler::new(provider.clone(), GenerationSettings::default());

        handler
            .handle(ValidateIdeaCommand { idea: test_idea() })
            .await
            .unwrap();

        let calls = provider.get_calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].prompt, analysis_prompt(&test_idea()));
        assert_eq!(calls[0].system_prompt.as_deref(), Some(VALIDATOR_INSTRUCTIONS));
        assert_eq!(calls[0].metadata.operation, "validate");
    }

    #[tokio::test]
    async fn test_validate_applies_generation_settings() {
        let provider = Arc::new(MockAIProvider::new());
        let settings = GenerationSettings {
            max_tokens: Some(1024),
            temperature: Some(0.2),
        };
        let handler = ValidateIdeaHandler::new(provider.clone(), settings);

        handler
            .handle(ValidateIdeaCommand {
                idea: StartupIdea::default(),
            })
            .await
            .unwrap();

        let call = &provider.get_calls()[0];
        assert_eq!(call.max_tokens, Some(1024));
        assert_eq!(call.temperature, Some(0.2));
    }

    #[tokio::test]
    async fn test_validate_accepts_empty_idea() {
        let provider = Arc::new(MockAIProvider::new().with_response("analysis"));
        let handler = ValidateIdeaHandler::new(provider, GenerationSettings::default());

        let result = handler
            .handle(ValidateIdeaCommand {
                idea: StartupIdea::default(),
            })
            .await
            .unwrap();

        assert_eq!(result.original_data, StartupIdea::default());
    }

    #[tokio::test]
    async fn test_validate_surfaces_provider_error_description() {
        let provider =
            Arc::new(MockAIProvider::new().with_error(AIError::network("connection reset")));
        let handler = ValidateIdeaHandler::new(provider, GenerationSettings::default());

        let err = handler
            .handle(ValidateIdeaCommand { idea: test_idea() })
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "network error: connection reset");
    }
}
