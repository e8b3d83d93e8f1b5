//! Opponent generation.

use std::ops::RangeInclusive;

use el_core::Character;

use crate::roller::Roller;

/// Create a fresh opponent carrying `bending_type`, with power drawn from `power`.
pub fn create_opponent(
    bending_type: &str,
    roller: &mut impl Roller,
    power: RangeInclusive<i64>,
) -> Character {
    Character::opponent(bending_type, roller.roll(power))
}
