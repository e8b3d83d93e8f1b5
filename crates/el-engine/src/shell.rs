//! The boundary between the engine and whatever drives it.

use crate::report::Report;

/// A player's answer to a yes/no prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    /// "yes" in any letter case.
    Yes,
    /// "no" in any letter case.
    No,
    /// Anything else. Neither branch of the prompt is taken.
    Other,
}

impl Answer {
    /// Classify an already-trimmed response.
    pub fn parse(input: &str) -> Self {
        if input.eq_ignore_ascii_case("yes") {
            Self::Yes
        } else if input.eq_ignore_ascii_case("no") {
            Self::No
        } else {
            Self::Other
        }
    }
}

/// Supplies player input to the engine and receives display data from it.
///
/// The engine calls these in turn order; a shell error aborts the current
/// turn and is returned unchanged from [`crate::TurnEngine::play_turn`].
pub trait Shell {
    /// Error raised by the shell's own I/O.
    type Error;

    /// Show something that just happened.
    fn report(&mut self, report: &Report) -> Result<(), Self::Error>;

    /// Ask whether to connect with the spirits. Answering `No` ends the run.
    fn spirit_answer(&mut self) -> Result<Answer, Self::Error>;

    /// Ask whether to fight a battle this turn.
    fn battle_answer(&mut self) -> Result<Answer, Self::Error>;

    /// Ask which kind of bender to fight. Passed through verbatim.
    fn opponent_bending(&mut self) -> Result<String, Self::Error>;
}
