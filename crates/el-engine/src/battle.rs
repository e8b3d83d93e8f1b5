//! Battle resolution.
//!
//! A battle is a single power comparison. Nothing is mutated; the opponent
//! is dropped with the [`Battle`] record once the shell has shown it.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use el_core::Character;

/// Result of comparing two characters, from the first one's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The first character has more power.
    FirstWins,
    /// The second character has more power.
    SecondWins,
    /// Both have exactly the same power.
    Tie,
}

impl Outcome {
    /// The same outcome seen from the other side.
    pub fn mirrored(self) -> Self {
        match self {
            Self::FirstWins => Self::SecondWins,
            Self::SecondWins => Self::FirstWins,
            Self::Tie => Self::Tie,
        }
    }
}

/// Compare power points. Higher power wins; equal power ties.
pub fn resolve(a: &Character, b: &Character) -> Outcome {
    match a.power_points().cmp(&b.power_points()) {
        Ordering::Greater => Outcome::FirstWins,
        Ordering::Less => Outcome::SecondWins,
        Ordering::Equal => Outcome::Tie,
    }
}

/// A resolved battle between the player and an opponent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Battle {
    /// The player as they stood when the battle was fought.
    pub player: Character,
    /// The opponent, discarded after this battle.
    pub opponent: Character,
    /// Outcome with the player as the first character.
    pub outcome: Outcome,
    /// What the player's bending looked like, if they can bend.
    pub flourish: Option<String>,
}

impl Battle {
    /// Fight a battle between `player` and `opponent`.
    pub fn fight(player: &Character, opponent: Character) -> Self {
        Self {
            player: player.clone(),
            outcome: resolve(player, &opponent),
            flourish: player.perform_bending().map(str::to_string),
            opponent,
        }
    }

    /// Name of the winner, or `None` on a tie.
    pub fn winner(&self) -> Option<&str> {
        match self.outcome {
            Outcome::FirstWins => Some(self.player.name()),
            Outcome::SecondWins => Some(self.opponent.name()),
            Outcome::Tie => None,
        }
    }

    /// One-line verdict, e.g. `"Aang wins!"` or `"It's a tie!"`.
    pub fn verdict(&self) -> String {
        match self.winner() {
            Some(name) => format!("{name} wins!"),
            None => "It's a tie!".to_string(),
        }
    }
}
