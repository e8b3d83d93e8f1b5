//! Random world event generation.

use el_core::{EVENT_CATALOG, WorldEvent};

use crate::roller::Roller;

/// Draw one event uniformly from the catalog. Each call is independent.
pub fn draw_event(roller: &mut impl Roller) -> WorldEvent {
    let index = roller.pick(EVENT_CATALOG.len());
    WorldEvent::new(EVENT_CATALOG[index])
}
