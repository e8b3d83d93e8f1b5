use std::fmt;

use serde::{Deserialize, Serialize};

/// How a player character bends. Purely cosmetic: a style only changes the
/// text shown when the character performs bending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BendingStyle {
    /// Fallback style for any label without a dedicated variant.
    #[default]
    Default,
    /// Air bending.
    Air,
}

impl BendingStyle {
    /// Match a free-form bending label (case-insensitive).
    ///
    /// Returns `None` for labels with no dedicated style; callers fall back
    /// to [`BendingStyle::Default`].
    pub fn parse(label: &str) -> Option<Self> {
        match label.to_lowercase().as_str() {
            "air" => Some(Self::Air),
            _ => None,
        }
    }

    /// The line shown when a character with this style performs bending.
    pub fn flourish(self) -> &'static str {
        match self {
            Self::Default => "Performing Default Bending!",
            Self::Air => "Performing Air Bending!",
        }
    }
}

impl fmt::Display for BendingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => write!(f, "default"),
            Self::Air => write!(f, "air"),
        }
    }
}
