//! Error types for draws and link tokens.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors that can occur while drawing assignments.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DrawError {
    /// Fewer than two participants.
    #[error("Need at least 2 participants, got {count}")]
    InsufficientParticipants { count: usize },

    /// Constraint set is internally inconsistent.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No valid draw found within the attempt ceiling.
    #[error(
        "Could not find valid assignments with the given constraints after {attempts} attempts. \
         Try removing some constraints."
    )]
    SearchExhausted { attempts: usize },
}

/// Errors that can occur while decoding a link token.
///
/// All variants surface to participants as the same "invalid link" message;
/// the variant only matters for diagnostics.
#[derive(Error, Debug)]
pub enum TokenError {
    /// Token is not URL-safe base64.
    #[error("Invalid link: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Decoded bytes are not UTF-8 JSON of the expected shape.
    #[error("Invalid link: {0}")]
    Json(#[from] serde_json::Error),

    /// JSON is well-formed but not a draw configuration.
    #[error("Invalid link: {0}")]
    InvalidState(String),
}

impl TokenError {
    /// Message shown to someone opening a broken link.
    pub fn user_message(&self) -> &'static str {
        "This link appears to be invalid or corrupted. Please ask the organizer for a new link."
    }
}
