//! Prompt templates for idea validation.
//!
//! Two prompts are sent to the model: the analysis prompt built from the
//! user's answers, and a fixed clarification prompt used when the user
//! rejects the analysis. Both are pure; the same input always yields the
//! same text.

use super::idea::StartupIdea;

/// Question the model must close every analysis with.
pub const CONFIRMATION_QUESTION: &str = "Is this understanding correct? (Yes/No)";

/// System instructions describing the validator persona.
pub const VALIDATOR_INSTRUCTIONS: &str = r#"You are an AI startup validation assistant specialized in both onboarding and idea expansion. Your tasks:

Step 1: User Onboarding & Industry Detection: Given a user input prompt, identify the industry, target market, and business category. Determine potential business models for a startup in the detected industry. Generate a personalized onboarding response for a business in that sector and suggest startup funding options specific to the detected industry.

Step 2: Idea Submission & Expansion: Based on the user's answers to the following key questions, generate a detailed analysis of the startup idea:
1. What specific problem does your business aim to solve? (Describe the challenge your target audience faces.)
2. Who are your target customers, and what makes them the right audience for your solution? (Describe your ideal users, their demographics, and pain points.)
3. How does your solution work, and what makes it unique from existing alternatives? (Explain your approach, unique value proposition, or key differentiators.)
4. What key resources or technologies power your business idea? (Mention any AI models, frameworks, or strategies involved.)
5. What are your main revenue streams or business model assumptions? (Describe how you plan to monetize or sustain your business.)

Using these responses, extract the core problem, solution, and target audience; provide a one-paragraph market opportunity analysis; rewrite the business idea in a structured, investor-friendly format; and expand it into a detailed business concept with key features and differentiators.

Additionally, if present in the initial user input, extract and clearly indicate the following details: industry, target market cap, expected revenue.

Format your response using bullet points and conclude with: 'Is this understanding correct? (Yes/No)'"#;

const CLARIFICATION_PROMPT: &str = r#"User rejected the analysis of their startup idea.
Ask 2-3 specific clarification questions focusing on:
- Market size assumptions
- Technical implementation unclear points
- Revenue model uncertainties"#;

/// Builds the analysis prompt for a submitted idea.
///
/// The five answers always appear, numbered in canonical order, even when
/// empty. The prompt ends with [`CONFIRMATION_QUESTION`] in double quotes.
pub fn analysis_prompt(idea: &StartupIdea) -> String {
    let answers = idea
        .answers()
        .iter()
        .enumerate()
        .map(|(i, (label, answer))| format!("{}. {}: {}", i + 1, label, answer))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Analyze the following startup input.\n\n\
        Step 1: User Onboarding & Industry Detection:\n\
        User Input: {user_input}\n\
        - Identify the industry, target market, and business category.\n\
        - Determine potential business models for a startup in the detected industry.\n\
        - Generate a personalized onboarding response for a business in that sector.\n\
        - Suggest startup funding options specific to the detected industry.\n\n\
        Step 2: Idea Submission & Expansion:\n\
        User Responses:\n\
        {answers}\n\n\
        Based on the above responses:\n\
        - Extract the problem, solution, and target audience.\n\
        - Provide a one-paragraph market opportunity analysis.\n\
        - Rewrite the business idea in a structured, investor-friendly format.\n\
        - Expand the business idea into a detailed business concept with key features and differentiators.\n\n\
        Additionally, if present in the user input, extract and indicate:\n\
        - Industry\n\
        - Target Market Cap\n\
        - Expected Revenue\n\n\
        Format your response with bullet points and conclude with: \"{question}\"",
        user_input = idea.user_input,
        answers = answers,
        question = CONFIRMATION_QUESTION,
    )
}

/// Returns the clarification prompt used after the user rejects an analysis.
///
/// Carries no user fields.
pub fn clarification_prompt() -> &'static str {
    CLARIFICATION_PROMPT
}
