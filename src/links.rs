//! Shareable links.
//!
//! A draw is distributed as one personal link per participant
//! (`<base>?d=<token>`) plus one organizer link that reproduces the whole
//! configuration (`<base>?state=<token>`). Tokens come from [`crate::codec`].

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::codec::{decode_assignment, encode_assignment, encode_state, try_decode_state};
use crate::error::TokenError;
use crate::models::{Assignment, AssignmentPayload, DisplayOptions, SantaState};

/// Query parameter carrying a personal assignment token.
pub const ASSIGNMENT_PARAM: &str = "d";

/// Query parameter carrying a configuration token.
pub const STATE_PARAM: &str = "state";

/// A personal link for one participant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedLink {
    /// Participant the link belongs to (the giver).
    pub participant: String,
    /// Full link.
    pub url: String,
    /// Token embedded in the link.
    pub token: String,
}

/// Builds one personal link per assignment, in assignment order.
///
/// Every payload carries the same `options`.
pub fn generate_links(
    assignments: &[Assignment],
    base_url: &str,
    options: &DisplayOptions,
) -> Result<Vec<GeneratedLink>, TokenError> {
    assignments
        .iter()
        .map(|a| -> Result<GeneratedLink, TokenError> {
            let payload =
                AssignmentPayload::new(&a.giver, &a.receiver).with_options(options.clone());
            let token = encode_assignment(&payload)?;
            Ok(GeneratedLink {
                participant: a.giver.clone(),
                url: format!("{base_url}?{ASSIGNMENT_PARAM}={token}"),
                token,
            })
        })
        .collect()
}

/// Builds the organizer's reproducibility link.
pub fn state_url(base_url: &str, state: &SantaState) -> Result<String, TokenError> {
    let token = encode_state(state)?;
    Ok(format!("{base_url}?{STATE_PARAM}={token}"))
}

/// Decodes a personal link token for display.
///
/// # Errors
/// Any [`TokenError`]; show [`TokenError::user_message`] to the participant.
pub fn reveal_assignment(token: &str) -> Result<AssignmentPayload, TokenError> {
    decode_assignment(token).inspect_err(|e| debug!(error = %e, "Rejecting assignment token"))
}

/// What a link asks the app to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    /// Participant view for an (undecoded) assignment token.
    Reveal(String),
    /// Organizer view, pre-filled when the state token was usable.
    Organizer(Option<SantaState>),
    /// Organizer view with an empty form.
    Fresh,
}

impl LinkTarget {
    /// Routes a query string (`"?d=..."`, `"state=..."`) or a full URL.
    ///
    /// `d` wins over `state`. An unusable state token still opens the
    /// organizer view, just without pre-filled data.
    pub fn from_query(query: &str) -> Self {
        let query = query.split_once('?').map_or(query, |(_, q)| q);
        let query = query.split_once('#').map_or(query, |(q, _)| q);

        let param = |name: &str| {
            query
                .split('&')
                .filter_map(|pair| pair.split_once('='))
                .find(|(key, value)| *key == name && !value.is_empty())
                .map(|(_, value)| value)
        };

        if let Some(token) = param(ASSIGNMENT_PARAM) {
            LinkTarget::Reveal(token.to_string())
        } else if let Some(token) = param(STATE_PARAM) {
            LinkTarget::Organizer(try_decode_state(token))
        } else {
            LinkTarget::Fresh
        }
    }
}
