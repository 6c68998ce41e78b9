//! Link token codec.
//!
//! A token is the payload's JSON, UTF-8 encoded, then URL-safe base64
//! encoded without padding. This is obfuscation, not encryption: anyone
//! holding a token can decode it.
//!
//! # Format
//!
//! ```text
//! payload ──serde_json──▶ UTF-8 bytes ──base64url (no '=')──▶ token
//! ```
//!
//! Decoding accepts tokens with or without trailing `=` padding, and with
//! non-zero bits after the last decoded byte.

use base64::alphabet;
use base64::engine::general_purpose::GeneralPurposeConfig;
use base64::engine::{DecodePaddingMode, GeneralPurpose};
use base64::Engine;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::error::TokenError;
use crate::models::{AssignmentPayload, SantaState};

/// URL-safe alphabet, unpadded output, padding- and trailing-bit-tolerant input.
const TOKEN_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Encodes raw bytes as URL-safe base64 without padding.
pub fn base64url_encode(data: &[u8]) -> String {
    TOKEN_ENGINE.encode(data)
}

/// Decodes URL-safe base64, with or without padding.
pub fn base64url_decode(token: &str) -> Result<Vec<u8>, TokenError> {
    Ok(TOKEN_ENGINE.decode(token)?)
}

/// Encodes any serializable payload as a token.
pub fn encode_payload<T: Serialize>(payload: &T) -> Result<String, TokenError> {
    let json = serde_json::to_vec(payload)?;
    Ok(base64url_encode(&json))
}

/// Decodes a token into a payload.
pub fn decode_payload<T: DeserializeOwned>(token: &str) -> Result<T, TokenError> {
    let bytes = base64url_decode(token)?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Encodes a personal assignment payload.
pub fn encode_assignment(payload: &AssignmentPayload) -> Result<String, TokenError> {
    encode_payload(payload)
}

/// Decodes a personal assignment payload.
pub fn decode_assignment(token: &str) -> Result<AssignmentPayload, TokenError> {
    decode_payload(token)
}

/// Encodes a full draw configuration.
pub fn encode_state(state: &SantaState) -> Result<String, TokenError> {
    encode_payload(state)
}

/// Decodes and structurally validates a draw configuration.
///
/// # Errors
/// [`TokenError::InvalidState`] if the JSON is well-formed but fails
/// [`is_valid_state`].
pub fn decode_state(token: &str) -> Result<SantaState, TokenError> {
    let value: Value = decode_payload(token)?;
    if !is_valid_state(&value) {
        return Err(TokenError::InvalidState(
            "expected seed, participants and constraints".into(),
        ));
    }
    Ok(serde_json::from_value(value)?)
}

/// Decodes a state token, returning `None` for anything unusable.
///
/// Never fails: a broken state link means "start a fresh draw".
pub fn try_decode_state(token: &str) -> Option<SantaState> {
    match decode_state(token) {
        Ok(state) => Some(state),
        Err(e) => {
            debug!(error = %e, "Discarding state token");
            None
        }
    }
}

/// Checks the structure of a decoded configuration.
///
/// Accepts an object whose `seed` is a string, `participants` an array of
/// strings, and `constraints` an array of `{type: "must"|"exclude", from,
/// to}` objects with string endpoints. Optional fields are not inspected;
/// a wrong-typed one decodes as unset rather than rejecting the state.
pub fn is_valid_state(value: &Value) -> bool {
    let Some(obj) = value.as_object() else {
        return false;
    };

    let seed_ok = obj.get("seed").is_some_and(Value::is_string);
    let participants_ok = obj
        .get("participants")
        .and_then(Value::as_array)
        .is_some_and(|list| list.iter().all(Value::is_string));
    let constraints_ok = obj
        .get("constraints")
        .and_then(Value::as_array)
        .is_some_and(|list| list.iter().all(is_valid_constraint));

    seed_ok && participants_ok && constraints_ok
}

fn is_valid_constraint(value: &Value) -> bool {
    let Some(c) = value.as_object() else {
        return false;
    };
    matches!(
        c.get("type").and_then(Value::as_str),
        Some("must") | Some("exclude")
    ) && c.get("from").is_some_and(Value::is_string)
        && c.get("to").is_some_and(Value::is_string)
}
