//! Configuration for a game run.

use std::ops::RangeInclusive;

use crate::error::{EngineError, EngineResult};

/// Tunable ranges for a run, passed explicitly to the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Initial power for a newly created player.
    pub player_power: RangeInclusive<i64>,
    /// Power drawn for each generated opponent.
    pub opponent_power: RangeInclusive<i64>,
    /// Modifier applied by a spirit connection.
    pub spirit_range: RangeInclusive<i64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            player_power: 50..=100,
            opponent_power: 40..=130,
            spirit_range: -5..=5,
        }
    }
}

impl EngineConfig {
    /// Set the initial player power range.
    pub fn with_player_power(mut self, range: RangeInclusive<i64>) -> Self {
        self.player_power = range;
        self
    }

    /// Set the opponent power range.
    pub fn with_opponent_power(mut self, range: RangeInclusive<i64>) -> Self {
        self.opponent_power = range;
        self
    }

    /// Set the spirit connection modifier range.
    pub fn with_spirit_range(mut self, range: RangeInclusive<i64>) -> Self {
        self.spirit_range = range;
        self
    }

    /// Check that every range can be sampled.
    pub fn validate(&self) -> EngineResult<()> {
        check_range("player power", &self.player_power)?;
        check_range("opponent power", &self.opponent_power)?;
        check_range("spirit modifier", &self.spirit_range)
    }
}

pub(crate) fn check_range(name: &'static str, range: &RangeInclusive<i64>) -> EngineResult<()> {
    if range.is_empty() {
        return Err(EngineError::EmptyRange {
            name,
            min: *range.start(),
            max: *range.end(),
        });
    }
    Ok(())
}
