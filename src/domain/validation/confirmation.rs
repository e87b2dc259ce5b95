//! User's answer to "Is this understanding correct?".

use thiserror::Error;

/// Fixed acknowledgment returned when the user accepts the analysis.
pub const CONFIRMED_ACKNOWLEDGMENT: &str = "Great! Proceeding to next steps...";

/// A parsed confirmation answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfirmationAnswer {
    Yes,
    No,
}

/// The confirmation text was neither "yes" nor "no".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid confirmation")]
pub struct InvalidConfirmation;

impl ConfirmationAnswer {
    /// Parses raw confirmation text, ignoring ASCII case only.
    ///
    /// Surrounding whitespace is significant: `" yes"` is rejected.
    pub fn parse(raw: &str) -> Result<Self, InvalidConfirmation> {
        if raw.eq_ignore_ascii_case("yes") {
            Ok(ConfirmationAnswer::Yes)
        } else if raw.eq_ignore_ascii_case("no") {
            Ok(ConfirmationAnswer::No)
        } else {
            Err(InvalidConfirmation)
        }
    }
}
