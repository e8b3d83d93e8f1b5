//! Core types for Elemental: characters, bending styles, and world events.
//!
//! This crate holds the data model the turn engine mutates. Nothing here
//! touches randomness or I/O, and no operation can fail: an unknown event
//! description has no effect and an unknown bending label falls back to the
//! default style.

/// Bending styles and their display flourishes.
pub mod bending;
/// The character model shared by the player and opponents.
pub mod character;
/// The effect table mapping event descriptions to power deltas.
pub mod effect;
/// World events and the fixed event catalog.
pub mod event;

/// Re-export bending types.
pub use bending::BendingStyle;
/// Re-export the character model.
pub use character::{Character, OPPONENT_NAME};
/// Re-export the effect lookup.
pub use effect::effect_for;
/// Re-export event types.
pub use event::{EVENT_CATALOG, WorldEvent};
