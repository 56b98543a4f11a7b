//! Character Guesser - CLI
//!
//! Guess-the-character deduction game with TUI and CLI modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use swordle::{
    catalog::Catalog,
    commands::{run_play, run_simulation, run_suggest},
    interactive::{App, run_tui},
    output::print_simulation_summary,
    suggest::MatchMode,
};

#[derive(Parser)]
#[command(
    name = "swordle",
    about = "Guess the secret character in six tries, one attribute at a time",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dataset: 'embedded' (default) or path to a JSON dataset file
    #[arg(short, long, global = true, default_value = "embedded")]
    dataset: String,

    /// Autocomplete matching: 'prefix' (default) or 'substring'
    #[arg(short, long, global = true, default_value = "prefix")]
    matching: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (no TUI)
    Simple,

    /// Play many random games and report win statistics
    Simulate {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "1000")]
        games: usize,
    },

    /// Query the autocomplete index
    Suggest {
        /// Name prefix or substring to look up
        query: String,
    },
}

/// Load the catalog selected by the -d flag
///
/// "embedded" uses the dataset bundled into the binary; anything else is
/// treated as a path to a JSON dataset file.
fn load_catalog(dataset: &str) -> Result<Catalog> {
    match dataset {
        "embedded" => Catalog::embedded().context("bundled dataset failed to load"),
        path => {
            Catalog::from_file(path).with_context(|| format!("failed to load dataset {path}"))
        }
    }
}

/// Parse the autocomplete mode flag
///
/// Defaults to prefix matching for unrecognized names.
fn parse_matching(name: &str) -> MatchMode {
    match name {
        "substring" | "contains" => MatchMode::Substring,
        _ => MatchMode::Prefix,
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let catalog = load_catalog(&cli.dataset)?;
    let matching = parse_matching(&cli.matching);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let app = App::new(&catalog, matching)?;
            run_tui(app)
        }
        Commands::Simple => run_play(&catalog, matching).map_err(|e| anyhow::anyhow!(e)),
        Commands::Simulate { games } => {
            println!("Playing {games} random games...");
            let summary = run_simulation(&catalog, games)?;
            print_simulation_summary(&summary);
            Ok(())
        }
        Commands::Suggest { query } => {
            run_suggest(&catalog, &query, matching);
            Ok(())
        }
    }
}
