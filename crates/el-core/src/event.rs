use std::fmt;

use serde::{Deserialize, Serialize};

/// The four world events a turn can draw from, in display casing.
///
/// Each entry must have a matching arm in [`crate::effect::effect_for`];
/// a description missing there resolves to a zero delta.
pub const EVENT_CATALOG: [&str; 4] = [
    "A festival is happening in the Water Tribe!",
    "Political tension rises in the Earth Kingdom.",
    "Fire Nation discovers a new bending technique.",
    "Air Nomads organize a peaceful meditation event.",
];

/// Something that happens in the world during a turn.
///
/// An event is identified by its description text alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldEvent {
    /// Human-readable description, matched case-insensitively by the effect table.
    pub description: String,
}

impl WorldEvent {
    /// Create an event from any description.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }

    /// Create the catalog event at `index`, or `None` when out of range.
    pub fn from_catalog(index: usize) -> Option<Self> {
        EVENT_CATALOG.get(index).map(|d| Self::new(*d))
    }

    /// The power delta this event applies.
    pub fn effect(&self) -> i64 {
        crate::effect::effect_for(&self.description)
    }
}

impl fmt::Display for WorldEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description)
    }
}
