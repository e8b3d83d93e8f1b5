use std::fmt::Display;
use std::io::{self, BufRead, ErrorKind, Write};

use colored::Colorize;

use el_core::Character;
use el_engine::{
    Answer, Battle, CharacterRequest, EngineConfig, Outcome, Report, RngRoller, Roller, Shell,
    TurnEngine, create_player,
};

/// Creation answers given on the command line instead of at the prompt.
#[derive(Debug, Default)]
pub struct Prefill {
    pub name: Option<String>,
    pub nation: Option<String>,
    pub bending: Option<String>,
}

pub fn run(prefill: Prefill) -> Result<(), String> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = ConsoleShell::new(stdin.lock(), stdout.lock());
    play(
        &mut shell,
        prefill,
        RngRoller::from_entropy(),
        EngineConfig::default(),
    )
}

/// Create the player, then play turns until the run stops or input runs out.
fn play<R: BufRead, W: Write>(
    shell: &mut ConsoleShell<R, W>,
    prefill: Prefill,
    mut roller: impl Roller,
    config: EngineConfig,
) -> Result<(), String> {
    let Some(request) = until_eof(shell.character_request(prefill))? else {
        return Ok(());
    };

    let created = create_player(request, &mut roller, &config)
        .map_err(|e| format!("failed to create character: {e}"))?;
    if created.used_fallback {
        shell
            .say("Invalid bending type. Default bending strategy will be used.".yellow())
            .map_err(|e| e.to_string())?;
    }
    shell
        .character_card(&created.character)
        .map_err(|e| e.to_string())?;

    let mut engine = TurnEngine::new(created.character, roller, config)
        .map_err(|e| format!("failed to start game: {e}"))?;
    let closed = until_eof(engine.run(shell))?.is_none();

    let turns = engine.turn();
    let player = engine.into_player();
    shell.farewell(&player, turns, closed).map_err(|e| e.to_string())
}

/// Treat end of input as a normal way to leave the game.
fn until_eof<T>(result: io::Result<T>) -> Result<Option<T>, String> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.kind() == ErrorKind::UnexpectedEof => {
            tracing::debug!("input closed");
            Ok(None)
        }
        Err(e) => Err(e.to_string()),
    }
}

/// Line-oriented console shell over any reader/writer pair.
pub struct ConsoleShell<R, W> {
    input: R,
    output: W,
    line: Vec<u8>,
}

impl<R: BufRead, W: Write> ConsoleShell<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            line: Vec::new(),
        }
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.output
    }

    fn say(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    /// Ask a question and return the trimmed reply. Bytes that are not valid
    /// UTF-8 are replaced rather than rejected.
    fn prompt(&mut self, question: &str) -> io::Result<String> {
        self.say(question)?;
        self.output.flush()?;

        self.line.clear();
        if self.input.read_until(b'\n', &mut self.line)? == 0 {
            return Err(io::Error::new(ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(String::from_utf8_lossy(&self.line).trim().to_string())
    }

    fn character_request(&mut self, prefill: Prefill) -> io::Result<CharacterRequest> {
        let name = match prefill.name {
            Some(name) => name,
            None => self.prompt("Enter character name:")?,
        };
        let nation = match prefill.nation {
            Some(nation) => nation,
            None => self.prompt("Select nation (Air, Water, Earth, Fire):")?,
        };
        let bending = match prefill.bending {
            Some(bending) => bending,
            None => self.prompt("Select bending type:")?,
        };
        Ok(CharacterRequest::new(name, nation, bending))
    }

    fn character_card(&mut self, character: &Character) -> io::Result<()> {
        self.say("==== Character Info ====".bold())?;
        self.say(format!("Name: {}", character.name()))?;
        self.say(format!("Nation: {}", character.nation().unwrap_or("Unknown")))?;
        self.say(format!("Bending Type: {}", character.bending_type()))?;
        self.say(format!("Power Points: {}", character.power_points()))?;
        self.say("========================".bold())
    }

    fn battle(&mut self, battle: &Battle) -> io::Result<()> {
        self.say(format!(
            "Battle between {} and {}!",
            battle.player.name(),
            battle.opponent.name()
        ))?;
        if let Some(flourish) = &battle.flourish {
            self.say(flourish.italic())?;
        }
        self.say("Battle Result:")?;
        for side in [&battle.player, &battle.opponent] {
            self.say(format!("{} Power Points: {}", side.name(), side.power_points()))?;
        }
        let verdict = battle.verdict();
        let verdict = match battle.outcome {
            Outcome::FirstWins => verdict.green().bold(),
            Outcome::SecondWins => verdict.red().bold(),
            Outcome::Tie => verdict.yellow().bold(),
        };
        self.say(verdict)
    }

    fn farewell(&mut self, player: &Character, turns: u32, input_closed: bool) -> io::Result<()> {
        self.say("")?;
        if input_closed {
            self.say("Input closed.".dimmed())?;
        }
        self.say(format!(
            "Your journey ends after {turns} turn{}.",
            if turns == 1 { "" } else { "s" }
        ))?;
        self.character_card(player)
    }
}

impl<R: BufRead, W: Write> Shell for ConsoleShell<R, W> {
    type Error = io::Error;

    fn report(&mut self, report: &Report) -> io::Result<()> {
        match report {
            Report::Event {
                turn,
                event,
                delta,
                power,
            } => {
                self.say("")?;
                self.say(format!("Turn {turn}").bold().underline())?;
                self.say(format!("Event: {event}"))?;
                self.say(format!(
                    "Power points updated based on the event. ({delta:+}, now {power})"
                ))
            }
            Report::SpiritConnection { modifier, power } => {
                self.say("Connecting with Spirits through the Avatar!".cyan())?;
                self.say(format!("Power points modified by: {modifier} (now {power})"))
            }
            Report::Battle(battle) => self.battle(battle),
            Report::NoBattle => self.say("You decided not to engage in a battle."),
        }
    }

    fn spirit_answer(&mut self) -> io::Result<Answer> {
        self.prompt("Do you want to connect with spirits through the avatar? (yes/no)")
            .map(|reply| Answer::parse(&reply))
    }

    fn battle_answer(&mut self) -> io::Result<Answer> {
        self.prompt("Do you want to engage in a battle? (yes/no)")
            .map(|reply| Answer::parse(&reply))
    }

    fn opponent_bending(&mut self) -> io::Result<String> {
        self.prompt("Choose your opponent (Air Mage, Water Mage, Earth Mage, Fire Mage):")
    }
}
