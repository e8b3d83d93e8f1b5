//! The turn engine.
//!
//! One turn runs through a fixed sequence of states:
//!
//! ```text
//! AwaitingEvent -> SpiritPrompt -> BattlePrompt -> AwaitingEvent
//!                       |
//!                       +-- "no" --> Stopped
//! ```
//!
//! Declining the spirit connection ends the whole run, so no battle is
//! offered on that turn. Any answer other than "yes" or "no" at the spirit
//! prompt skips the connection and carries on to the battle prompt.

use el_core::Character;

use crate::battle::Battle;
use crate::config::EngineConfig;
use crate::error::EngineResult;
use crate::events::draw_event;
use crate::opponent::create_opponent;
use crate::report::Report;
use crate::roller::Roller;
use crate::shell::{Answer, Shell};
use crate::spirit::apply_connection;

/// Where the engine is within a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    /// Ready to draw the next world event.
    AwaitingEvent,
    /// Event applied; waiting on the spirit connection answer.
    SpiritPrompt,
    /// Waiting on the battle answer.
    BattlePrompt,
    /// The run is over.
    Stopped,
}

/// Whether the run goes on after a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Play another turn.
    Continue,
    /// The run has ended.
    Stop,
}

/// Owns the player for the whole run and plays turns against a [`Shell`].
#[derive(Debug)]
pub struct TurnEngine<R> {
    player: Character,
    roller: R,
    config: EngineConfig,
    state: TurnState,
    turn: u32,
}

impl<R: Roller> TurnEngine<R> {
    /// Start a run for `player`. Fails only on an invalid configuration.
    pub fn new(player: Character, roller: R, config: EngineConfig) -> EngineResult<Self> {
        config.validate()?;
        tracing::info!(player = %player.name(), power = player.power_points(), "run started");
        Ok(Self {
            player,
            roller,
            config,
            state: TurnState::AwaitingEvent,
            turn: 0,
        })
    }

    /// The player character.
    pub fn player(&self) -> &Character {
        &self.player
    }

    /// Current state.
    pub fn state(&self) -> TurnState {
        self.state
    }

    /// Number of events drawn so far.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Whether the run has ended.
    pub fn is_stopped(&self) -> bool {
        self.state == TurnState::Stopped
    }

    /// End the run and hand back the player.
    pub fn into_player(self) -> Character {
        self.player
    }

    /// Play one full turn. Returns [`Flow::Stop`] once the run has ended,
    /// without drawing anything further.
    ///
    /// A shell error abandons the rest of the turn: whatever was already
    /// applied stays applied, and the engine goes back to
    /// [`TurnState::AwaitingEvent`] so the next call starts a fresh turn.
    pub fn play_turn<S: Shell>(&mut self, shell: &mut S) -> Result<Flow, S::Error> {
        if self.is_stopped() {
            return Ok(Flow::Stop);
        }

        let result = self.resolve_turn(shell);
        if result.is_err() {
            tracing::debug!(turn = self.turn, state = ?self.state, "turn abandoned");
            self.state = TurnState::AwaitingEvent;
        }
        result
    }

    fn resolve_turn<S: Shell>(&mut self, shell: &mut S) -> Result<Flow, S::Error> {
        let report = self.apply_event();
        shell.report(&report)?;

        match shell.spirit_answer()? {
            Answer::Yes => {
                let report = self.connect_spirits();
                shell.report(&report)?;
            }
            Answer::No => {
                self.state = TurnState::Stopped;
                tracing::info!(
                    turns = self.turn,
                    power = self.player.power_points(),
                    "run stopped"
                );
                return Ok(Flow::Stop);
            }
            Answer::Other => tracing::debug!("spirit answer not recognized, skipping"),
        }
        self.state = TurnState::BattlePrompt;

        let report = match shell.battle_answer()? {
            Answer::Yes => {
                let label = shell.opponent_bending()?;
                Report::Battle(self.battle(&label))
            }
            Answer::No | Answer::Other => Report::NoBattle,
        };
        shell.report(&report)?;

        self.state = TurnState::AwaitingEvent;
        Ok(Flow::Continue)
    }

    /// Play turns until the run stops. Returns the number of turns played.
    pub fn run<S: Shell>(&mut self, shell: &mut S) -> Result<u32, S::Error> {
        while self.play_turn(shell)? == Flow::Continue {}
        Ok(self.turn)
    }

    fn apply_event(&mut self) -> Report {
        let event = draw_event(&mut self.roller);
        let delta = event.effect();
        self.player.apply_delta(delta);
        self.turn += 1;
        self.state = TurnState::SpiritPrompt;

        tracing::debug!(
            turn = self.turn,
            event = %event,
            delta,
            power = self.player.power_points(),
            "event applied"
        );

        Report::Event {
            turn: self.turn,
            event,
            delta,
            power: self.player.power_points(),
        }
    }

    fn connect_spirits(&mut self) -> Report {
        let modifier = apply_connection(
            &mut self.player,
            &mut self.roller,
            self.config.spirit_range.clone(),
        );
        tracing::debug!(modifier, power = self.player.power_points(), "spirit connection");
        Report::SpiritConnection {
            modifier,
            power: self.player.power_points(),
        }
    }

    fn battle(&mut self, label: &str) -> Battle {
        let opponent = create_opponent(label, &mut self.roller, self.config.opponent_power.clone());
        let battle = Battle::fight(&self.player, opponent);
        tracing::debug!(
            opponent = %battle.opponent.bending_type(),
            opponent_power = battle.opponent.power_points(),
            power = self.player.power_points(),
            outcome = ?battle.outcome,
            "battle resolved"
        );
        battle
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::convert::Infallible;

    use super::*;
    use crate::battle::Outcome;
    use crate::error::EngineError;
    use crate::roller::RngRoller;
    use crate::roller::testing::ScriptedRoller;
    use el_core::BendingStyle;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    /// Answers prompts from a queue and records everything it was shown.
    #[derive(Default)]
    struct ScriptedShell {
        spirit: VecDeque<Answer>,
        battle: VecDeque<Answer>,
        opponents: VecDeque<String>,
        reports: Vec<Report>,
        battle_prompts: usize,
    }

    impl ScriptedShell {
        fn new(spirit: &[Answer], battle: &[Answer], opponents: &[&str]) -> Self {
            Self {
                spirit: spirit.iter().copied().collect(),
                battle: battle.iter().copied().collect(),
                opponents: opponents.iter().map(|s| s.to_string()).collect(),
                ..Self::default()
            }
        }

        fn battles(&self) -> Vec<&Battle> {
            self.reports
                .iter()
                .filter_map(|r| match r {
                    Report::Battle(b) => Some(b),
                    _ => None,
                })
                .collect()
        }
    }

    impl Shell for ScriptedShell {
        type Error = Infallible;

        fn report(&mut self, report: &Report) -> Result<(), Infallible> {
            self.reports.push(report.clone());
            Ok(())
        }

        fn spirit_answer(&mut self) -> Result<Answer, Infallible> {
            Ok(self.spirit.pop_front().unwrap_or(Answer::No))
        }

        fn battle_answer(&mut self) -> Result<Answer, Infallible> {
            self.battle_prompts += 1;
            Ok(self.battle.pop_front().unwrap_or(Answer::No))
        }

        fn opponent_bending(&mut self) -> Result<String, Infallible> {
            Ok(self.opponents.pop_front().unwrap_or_default())
        }
    }

    /// A shell whose I/O has gone away.
    struct BrokenShell;

    impl Shell for BrokenShell {
        type Error = &'static str;

        fn report(&mut self, _: &Report) -> Result<(), &'static str> {
            Ok(())
        }

        fn spirit_answer(&mut self) -> Result<Answer, &'static str> {
            Err("stdin closed")
        }

        fn battle_answer(&mut self) -> Result<Answer, &'static str> {
            Err("stdin closed")
        }

        fn opponent_bending(&mut self) -> Result<String, &'static str> {
            Err("stdin closed")
        }
    }

    fn player(power: i64) -> Character {
        Character::player("Aang", "Air", "air", BendingStyle::Air, power)
    }

    fn engine(power: i64, picks: &[usize], rolls: &[i64]) -> TurnEngine<ScriptedRoller> {
        TurnEngine::new(
            player(power),
            ScriptedRoller::new(picks, rolls),
            EngineConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn festival_event_adds_ten() {
        let mut engine = engine(60, &[0], &[]);
        let mut shell = ScriptedShell::new(&[Answer::No], &[], &[]);

        engine.play_turn(&mut shell).unwrap();

        assert_eq!(engine.player().power_points(), 70);
        assert_eq!(
            shell.reports[0],
            Report::Event {
                turn: 1,
                event: el_core::WorldEvent::new("A festival is happening in the Water Tribe!"),
                delta: 10,
                power: 70,
            }
        );
    }

    #[test]
    fn declining_spirits_stops_without_battle() {
        let mut engine = engine(75, &[1], &[]);
        let mut shell = ScriptedShell::new(&[Answer::No], &[Answer::Yes], &["Fire Mage"]);

        assert_eq!(engine.play_turn(&mut shell).unwrap(), Flow::Stop);
        assert_eq!(engine.state(), TurnState::Stopped);
        assert_eq!(engine.player().power_points(), 70);
        assert_eq!(shell.battle_prompts, 0);
        assert!(shell.battles().is_empty());
        assert_eq!(shell.reports.len(), 1);

        // Further turns do nothing.
        assert_eq!(engine.play_turn(&mut shell).unwrap(), Flow::Stop);
        assert_eq!(engine.turn(), 1);
        assert_eq!(shell.reports.len(), 1);
    }

    #[test]
    fn equal_power_battle_ties() {
        // 63 + 7 (meditation) = 70, spirit modifier 0, opponent drawn at 70.
        let mut engine = engine(63, &[3], &[0, 70]);
        let mut shell = ScriptedShell::new(&[Answer::Yes], &[Answer::Yes], &["Fire Mage"]);

        assert_eq!(engine.play_turn(&mut shell).unwrap(), Flow::Continue);

        assert_eq!(
            shell.reports[1],
            Report::SpiritConnection {
                modifier: 0,
                power: 70
            }
        );
        let battles = shell.battles();
        assert_eq!(battles.len(), 1);
        assert_eq!(battles[0].outcome, Outcome::Tie);
        assert_eq!(battles[0].opponent.power_points(), 70);
        assert_eq!(battles[0].opponent.bending_type(), "Fire Mage");
        assert_eq!(engine.state(), TurnState::AwaitingEvent);
    }

    #[test]
    fn stronger_player_wins() {
        // 90 + 10 (festival) = 100; spirit answer unrecognized, so no modifier.
        let mut engine = engine(90, &[0], &[40]);
        let mut shell = ScriptedShell::new(&[Answer::Other], &[Answer::Yes], &["Earth Mage"]);

        engine.play_turn(&mut shell).unwrap();

        let battles = shell.battles();
        assert_eq!(battles[0].player.power_points(), 100);
        assert_eq!(battles[0].opponent.power_points(), 40);
        assert_eq!(battles[0].outcome, Outcome::FirstWins);
        assert_eq!(battles[0].verdict(), "Aang wins!");
    }

    #[test]
    fn unrecognized_spirit_answer_skips_connection() {
        let mut engine = engine(50, &[2], &[]);
        let mut shell = ScriptedShell::new(&[Answer::Other], &[Answer::No], &[]);

        assert_eq!(engine.play_turn(&mut shell).unwrap(), Flow::Continue);
        assert_eq!(engine.player().power_points(), 58);
        assert_eq!(shell.battle_prompts, 1);
        assert!(
            !shell
                .reports
                .iter()
                .any(|r| matches!(r, Report::SpiritConnection { .. }))
        );
        assert_eq!(shell.reports.last(), Some(&Report::NoBattle));
    }

    #[test]
    fn unrecognized_battle_answer_means_no_battle() {
        let mut engine = engine(50, &[2], &[]);
        let mut shell = ScriptedShell::new(&[Answer::Other], &[Answer::Other], &["Air Mage"]);

        engine.play_turn(&mut shell).unwrap();
        assert_eq!(shell.reports.last(), Some(&Report::NoBattle));
        assert_eq!(shell.opponents.len(), 1);
    }

    #[test]
    fn battle_leaves_player_untouched() {
        let mut engine = engine(80, &[2], &[3, 130]);
        let mut shell = ScriptedShell::new(&[Answer::Yes], &[Answer::Yes], &["Water Mage"]);

        engine.play_turn(&mut shell).unwrap();
        assert_eq!(engine.player().power_points(), 91);
        assert_eq!(shell.battles()[0].outcome, Outcome::SecondWins);
    }

    #[test]
    fn run_until_declined() {
        let mut engine = engine(60, &[0, 1, 2], &[5, 101]);
        let mut shell = ScriptedShell::new(
            &[Answer::Yes, Answer::Other, Answer::No],
            &[Answer::Yes, Answer::No],
            &["Air Mage"],
        );

        assert_eq!(engine.run(&mut shell).unwrap(), 3);
        assert!(engine.is_stopped());
        // 60 + 10 + 5 - 5 + 8
        assert_eq!(engine.into_player().power_points(), 78);
        assert_eq!(shell.battle_prompts, 2);
    }

    #[test]
    fn shell_errors_propagate() {
        let mut engine = engine(60, &[0], &[]);
        assert_eq!(engine.play_turn(&mut BrokenShell), Err("stdin closed"));
        assert_eq!(engine.state(), TurnState::AwaitingEvent);
        assert_eq!(engine.turn(), 1);
        assert_eq!(engine.player().power_points(), 70);
    }

    #[test]
    fn turn_after_shell_error_starts_fresh() {
        // Festival applied, then the shell fails; the retry draws the next event.
        let mut engine = engine(60, &[0, 1], &[]);
        assert!(engine.play_turn(&mut BrokenShell).is_err());

        let mut shell = ScriptedShell::new(&[Answer::Other], &[Answer::No], &[]);
        assert_eq!(engine.play_turn(&mut shell).unwrap(), Flow::Continue);
        assert_eq!(engine.turn(), 2);
        assert_eq!(engine.player().power_points(), 65);
        assert_eq!(engine.state(), TurnState::AwaitingEvent);
        assert!(matches!(shell.reports[0], Report::Event { turn: 2, delta: -5, .. }));
    }

    #[test]
    fn invalid_config_rejected() {
        #[allow(clippy::reversed_empty_ranges)]
        let config = EngineConfig::default().with_spirit_range(5..=-5);
        let err = TurnEngine::new(player(60), ScriptedRoller::default(), config).unwrap_err();
        assert!(matches!(err, EngineError::EmptyRange { .. }));
    }

    #[test]
    fn long_random_run_keeps_bounds() {
        let mut engine = TurnEngine::new(
            player(75),
            RngRoller::new(StdRng::seed_from_u64(21)),
            EngineConfig::default(),
        )
        .unwrap();
        let turns = 200;
        let mut shell = ScriptedShell::new(
            &vec![Answer::Yes; turns - 1],
            &vec![Answer::Yes; turns - 1],
            &vec!["Fire Mage"; turns - 1],
        );

        assert_eq!(engine.run(&mut shell).unwrap(), turns as u32);
        for battle in shell.battles() {
            assert!((40..=130).contains(&battle.opponent.power_points()));
        }
        assert_eq!(shell.battles().len(), turns - 1);
    }
}
