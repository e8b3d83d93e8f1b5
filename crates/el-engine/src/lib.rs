//! Turn resolution engine for Elemental.
//!
//! Draws random world events, applies their power effects to the player,
//! runs the optional spirit connection, and resolves one-shot battles against
//! freshly generated opponents. All input and output goes through the
//! [`Shell`] trait, so the engine never touches a terminal itself.

pub mod battle;
pub mod config;
pub mod engine;
pub mod error;
pub mod events;
pub mod opponent;
pub mod player;
pub mod report;
pub mod roller;
pub mod shell;
pub mod spirit;

pub use battle::{Battle, Outcome, resolve};
pub use config::EngineConfig;
pub use engine::{Flow, TurnEngine, TurnState};
pub use error::{EngineError, EngineResult};
pub use events::draw_event;
pub use opponent::create_opponent;
pub use player::{CharacterRequest, PlayerCreation, create_player};
pub use report::Report;
pub use roller::{Roller, RngRoller};
pub use shell::{Answer, Shell};
pub use spirit::apply_connection;
