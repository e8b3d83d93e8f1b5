//! Spirit connection: a small random nudge to a character's power.

use std::ops::RangeInclusive;

use el_core::Character;

use crate::roller::Roller;

/// Draw a modifier from `range`, add it to the character's power, and return it.
pub fn apply_connection(
    character: &mut Character,
    roller: &mut impl Roller,
    range: RangeInclusive<i64>,
) -> i64 {
    let modifier = roller.roll(range);
    character.apply_delta(modifier);
    modifier
}
