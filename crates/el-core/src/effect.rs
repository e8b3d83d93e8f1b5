//! Power deltas keyed by event description.
//!
//! Lookup is an exact, case-insensitive match on the full description. The
//! table is keyed by text rather than by catalog index, so an event whose
//! description drifts from these strings silently applies no change.

/// Power delta for an event description. Unrecognized descriptions yield 0.
pub fn effect_for(description: &str) -> i64 {
    match description.to_lowercase().as_str() {
        "a festival is happening in the water tribe!" => 10,
        "political tension rises in the earth kingdom." => -5,
        "fire nation discovers a new bending technique." => 8,
        "air nomads organize a peaceful meditation event." => 7,
        _ => 0,
    }
}
