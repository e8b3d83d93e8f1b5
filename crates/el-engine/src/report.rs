//! Display data handed from the engine to the shell.

use serde::{Deserialize, Serialize};

use el_core::WorldEvent;

use crate::battle::Battle;

/// Something the shell should show the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Report {
    /// A world event was drawn and its effect applied.
    Event {
        /// 1-based turn number.
        turn: u32,
        /// The event that happened.
        event: WorldEvent,
        /// Power change it caused.
        delta: i64,
        /// Player power afterwards.
        power: i64,
    },
    /// The player connected with the spirits.
    SpiritConnection {
        /// Modifier drawn.
        modifier: i64,
        /// Player power afterwards.
        power: i64,
    },
    /// A battle was fought.
    Battle(Battle),
    /// The player chose not to fight this turn.
    NoBattle,
}
