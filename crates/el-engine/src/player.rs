//! Player character creation.

use el_core::{BendingStyle, Character};

use crate::config::{EngineConfig, check_range};
use crate::error::EngineResult;
use crate::roller::Roller;

/// Free-form creation parameters supplied by the shell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterRequest {
    /// Display name.
    pub name: String,
    /// Nation label. Informational only.
    pub nation: String,
    /// Bending label. `"air"` (any case) selects air bending.
    pub bending_type: String,
}

impl CharacterRequest {
    /// Create a request from its three labels.
    pub fn new(
        name: impl Into<String>,
        nation: impl Into<String>,
        bending_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            nation: nation.into(),
            bending_type: bending_type.into(),
        }
    }
}

/// A newly created player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerCreation {
    /// The player character.
    pub character: Character,
    /// True when the bending label was not recognized and the default style
    /// was used instead.
    pub used_fallback: bool,
}

/// Create the player with power drawn from `config.player_power`.
pub fn create_player(
    request: CharacterRequest,
    roller: &mut impl Roller,
    config: &EngineConfig,
) -> EngineResult<PlayerCreation> {
    check_range("player power", &config.player_power)?;

    let parsed = BendingStyle::parse(&request.bending_type);
    let used_fallback = parsed.is_none();
    let power = roller.roll(config.player_power.clone());

    tracing::debug!(
        name = %request.name,
        bending = %request.bending_type,
        power,
        used_fallback,
        "player created"
    );

    Ok(PlayerCreation {
        character: Character::player(
            request.name,
            request.nation,
            request.bending_type,
            parsed.unwrap_or_default(),
            power,
        ),
        used_fallback,
    })
}
