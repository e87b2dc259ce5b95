//! ConversationStatus enum telling the caller which branch a response represents.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Conversational branch of a validation exchange.
///
/// The service keeps no state between calls; this value plus the echoed
/// `original_data` is everything the client needs to continue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversationStatus {
    /// Analysis delivered, waiting for the user to accept or reject it.
    NeedsConfirmation,
    /// User accepted the analysis.
    Confirmed,
    /// User rejected the analysis; clarification questions follow.
    NeedsClarification,
}

impl ConversationStatus {
    /// Wire representation of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConversationStatus::NeedsConfirmation => "needs_confirmation",
            ConversationStatus::Confirmed => "confirmed",
            ConversationStatus::NeedsClarification => "needs_clarification",
        }
    }
}

impl fmt::Display for ConversationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
