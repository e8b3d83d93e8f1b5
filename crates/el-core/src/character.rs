//! The character model.
//!
//! A single type covers both the player and opponents. Only the player
//! carries a bending style; opponents carry a label but cannot bend.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::bending::BendingStyle;

/// Display name given to every generated opponent.
pub const OPPONENT_NAME: &str = "Opponent";

/// A participant in the world: the player or a one-off opponent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    name: String,
    nation: Option<String>,
    bending_type: String,
    bending: Option<BendingStyle>,
    power_points: i64,
}

impl Character {
    /// Create a player character with a bending style.
    pub fn player(
        name: impl Into<String>,
        nation: impl Into<String>,
        bending_type: impl Into<String>,
        bending: BendingStyle,
        power_points: i64,
    ) -> Self {
        Self {
            name: name.into(),
            nation: Some(nation.into()),
            bending_type: bending_type.into(),
            bending: Some(bending),
            power_points,
        }
    }

    /// Create an opponent: fixed name, unknown nation, no bending style.
    pub fn opponent(bending_type: impl Into<String>, power_points: i64) -> Self {
        Self {
            name: OPPONENT_NAME.to_string(),
            nation: None,
            bending_type: bending_type.into(),
            bending: None,
            power_points,
        }
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Nation label, or `None` when unknown.
    pub fn nation(&self) -> Option<&str> {
        self.nation.as_deref()
    }

    /// The bending label as entered.
    pub fn bending_type(&self) -> &str {
        &self.bending_type
    }

    /// The bending style, if this character can bend.
    pub fn bending(&self) -> Option<BendingStyle> {
        self.bending
    }

    /// Current power points. Signed and unbounded.
    pub fn power_points(&self) -> i64 {
        self.power_points
    }

    /// Add `delta` to power points. No clamping: the result may be negative,
    /// and it wraps at the `i64` bounds so a delta can always be undone.
    pub fn apply_delta(&mut self, delta: i64) {
        self.power_points = self.power_points.wrapping_add(delta);
    }

    /// Perform bending, returning the line to show. `None` for opponents.
    pub fn perform_bending(&self) -> Option<&'static str> {
        self.bending.map(BendingStyle::flourish)
    }
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} of {} ({}, {} power)",
            self.name,
            self.nation().unwrap_or("Unknown"),
            self.bending_type,
            self.power_points
        )
    }
}
