//! Named reveal-page themes.
//!
//! Payloads carry the theme as a free string so links keep working when a
//! theme is renamed or removed; [`Theme::from_name`] resolves it.

use serde::{Deserialize, Serialize};

/// A reveal-page color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Theme {
    /// Green, gold and red.
    #[default]
    Classic,
    /// Navy and ice.
    WinterBlue,
    /// Black and gold.
    ElegantGold,
    /// Berry and frost.
    BerryFrost,
}

impl Theme {
    /// All themes, in menu order.
    pub const ALL: [Theme; 4] = [
        Theme::Classic,
        Theme::WinterBlue,
        Theme::ElegantGold,
        Theme::BerryFrost,
    ];

    /// Identifier stored in payloads.
    pub fn name(self) -> &'static str {
        match self {
            Theme::Classic => "classic",
            Theme::WinterBlue => "winterBlue",
            Theme::ElegantGold => "elegantGold",
            Theme::BerryFrost => "berryFrost",
        }
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Theme::Classic => "Classic Christmas",
            Theme::WinterBlue => "Winter Blue",
            Theme::ElegantGold => "Elegant Gold",
            Theme::BerryFrost => "Berry Frost",
        }
    }

    /// Resolves a payload theme name, falling back to [`Theme::Classic`].
    pub fn from_name(name: Option<&str>) -> Self {
        name.and_then(|n| Self::ALL.into_iter().find(|t| t.name() == n))
            .unwrap_or_default()
    }
}
