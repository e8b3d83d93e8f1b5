//! Console frontend for Elemental, a turn-based bending adventure.

mod commands;

use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "elemental",
    about = "Elemental: random world events, spirit connections, and one-shot battles",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log engine decisions to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a character and play until you decline the spirits (default)
    Play {
        /// Character name (prompted if omitted)
        #[arg(long)]
        name: Option<String>,

        /// Nation, e.g. Air, Water, Earth, Fire (prompted if omitted)
        #[arg(long)]
        nation: Option<String>,

        /// Bending type; "air" has its own style (prompted if omitted)
        #[arg(long)]
        bending: Option<String>,
    },

    /// List the world events and their power effects
    Events {
        /// Print as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        None => commands::play::run(commands::play::Prefill::default()),
        Some(Commands::Play {
            name,
            nation,
            bending,
        }) => commands::play::run(commands::play::Prefill {
            name,
            nation,
            bending,
        }),
        Some(Commands::Events { json }) => commands::events::run(json),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
