pub mod events;
pub mod play;
