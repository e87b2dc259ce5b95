//! StartupIdea - the free-text answers a founder submits for validation.

use serde::{Deserialize, Serialize};

/// A startup idea as described by the user.
///
/// Every field is opaque user text and defaults to empty. Nothing is
/// validated for content or length; the model is expected to cope with gaps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StartupIdea {
    /// Free-form pitch, possibly mentioning industry, market cap, or revenue.
    pub user_input: String,
    /// What specific problem the business aims to solve.
    pub problem: String,
    /// Who the target customers are and why they fit.
    pub target_customers: String,
    /// How the solution works and what makes it unique.
    pub solution: String,
    /// Key resources or technologies powering the idea.
    pub key_resources: String,
    /// Main revenue streams or business model assumptions.
    pub revenue_streams: String,
}

impl StartupIdea {
    /// The five question answers in canonical order, paired with their labels.
    pub fn answers(&self) -> [(&'static str, &str); 5] {
        [
            ("Problem", self.problem.as_str()),
            ("Target Customers", self.target_customers.as_str()),
            ("Solution", self.solution.as_str()),
            ("Key Resources", self.key_resources.as_str()),
            ("Revenue Streams", self.revenue_streams.as_str()),
        ]
    }

    /// Number of the five questions that received a non-empty answer.
    pub fn answered_count(&self) -> usize {
        self.answers()
            .iter()
            .filter(|(_, answer)| !answer.is_empty())
            .count()
    }
}
