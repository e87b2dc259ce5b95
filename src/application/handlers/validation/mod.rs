//! Idea Validation Command Handlers
//!
//! The two-step validation exchange. Neither handler keeps state: the
//! returned status and the echoed idea are all the client carries forward.
//!
//! ## Commands
//! - `ValidateIdea` - Analyze a startup idea and ask for confirmation
//! - `ConfirmAnalysis` - Accept the analysis or get clarification questions

mod confirm_analysis;
mod validate_idea;

pub use confirm_analysis::{
    ConfirmAnalysisCommand, ConfirmAnalysisError, ConfirmAnalysisHandler, ConfirmAnalysisResult,
};
pub use validate_idea::{
    ValidateIdeaCommand, ValidateIdeaError, ValidateIdeaHandler, ValidateIdeaResult,
};

use crate::ports::CompletionRequest;

/// Sampling parameters applied to every completion request.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GenerationSettings {
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
}

impl GenerationSettings {
    /// Copies the configured parameters onto a request.
    pub fn apply(&self, mut request: CompletionRequest) -> CompletionRequest {
        if let Some(max) = self.max_tokens {
            request = request.with_max_tokens(max);
        }
        if let Some(temp) = self.temperature {
            request = request.with_temperature(temp);
        }
        request
    }
}
