//! Idea validation domain.
//!
//! Holds the submitted idea, the conversational status returned to the
//! client, the confirmation answer, and the prompt templates.

mod confirmation;
mod idea;
pub mod prompts;
mod status;

pub use confirmation::{ConfirmationAnswer, InvalidConfirmation, CONFIRMED_ACKNOWLEDGMENT};
pub use idea::StartupIdea;
pub use prompts::{
    analysis_prompt, clarification_prompt, CONFIRMATION_QUESTION, VALIDATOR_INSTRUCTIONS,
};
pub use status::ConversationStatus;
