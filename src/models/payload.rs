//! Link payloads.
//!
//! Two shapes travel through link tokens: a personal [`AssignmentPayload`]
//! (`?d=`) and the full [`SantaState`] (`?state=`). Field names are part of
//! the link format; optional fields are omitted when unset.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use super::Constraint;

/// Presentation options carried alongside a draw.
///
/// A wrong-typed option in a decoded link reads as unset, so one bad field
/// never discards the rest of the payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayOptions {
    /// Organizer's note shown to every participant.
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub notes: Option<String>,
    /// Theme name (see [`Theme`](super::Theme)).
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub theme: Option<String>,
    /// Whether the reveal page shows falling snow.
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub snow_enabled: Option<bool>,
}

/// Deserializes an optional field, mapping any wrong-typed value to `None`.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

impl DisplayOptions {
    /// Creates empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the organizer's note. Empty notes are dropped.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        let notes = notes.into();
        self.notes = (!notes.is_empty()).then_some(notes);
        self
    }

    /// Sets the theme name. Empty names are dropped.
    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        let theme = theme.into();
        self.theme = (!theme.is_empty()).then_some(theme);
        self
    }

    /// Sets the snow flag.
    pub fn with_snow(mut self, enabled: bool) -> Self {
        self.snow_enabled = Some(enabled);
        self
    }

    /// Whether no option is set.
    pub fn is_empty(&self) -> bool {
        self.notes.is_none() && self.theme.is_none() && self.snow_enabled.is_none()
    }
}

/// Payload of a personal link: who gives to whom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentPayload {
    /// Participant opening the link.
    pub giver: String,
    /// Participant they give to.
    pub receiver: String,
    /// Presentation options.
    #[serde(flatten)]
    pub options: DisplayOptions,
}

impl AssignmentPayload {
    /// Creates a payload without options.
    pub fn new(giver: impl Into<String>, receiver: impl Into<String>) -> Self {
        Self {
            giver: giver.into(),
            receiver: receiver.into(),
            options: DisplayOptions::default(),
        }
    }

    /// Sets presentation options.
    pub fn with_options(mut self, options: DisplayOptions) -> Self {
        self.options = options;
        self
    }
}

/// Full draw configuration, enough to reproduce the draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SantaState {
    /// Seed text.
    pub seed: String,
    /// Participants in draw order.
    pub participants: Vec<String>,
    /// Constraints supplied to the draw.
    pub constraints: Vec<Constraint>,
    /// Presentation options.
    #[serde(flatten)]
    pub options: DisplayOptions,
}

impl SantaState {
    /// Creates a state without constraints or options.
    pub fn new(seed: impl Into<String>, participants: Vec<String>) -> Self {
        Self {
            seed: seed.into(),
            participants,
            constraints: Vec::new(),
            options: DisplayOptions::default(),
        }
    }

    /// Sets the constraints.
    pub fn with_constraints(mut self, constraints: Vec<Constraint>) -> Self {
        self.constraints = constraints;
        self
    }

    /// Sets presentation options.
    pub fn with_options(mut self, options: DisplayOptions) -> Self {
        self.options = options;
        self
    }
}
