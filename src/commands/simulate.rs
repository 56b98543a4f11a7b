//! Bulk game simulation
//!
//! Plays many games with a uniform-random no-repeat guesser to sanity-check
//! the engine and measure how often blind guessing wins. Games run in
//! parallel across all cores.

use crate::catalog::{CatalogError, CharacterProvider};
use crate::game::{MAX_GUESSES, Session, Status};
use crate::output::SimulationSummary;
use indicatif::{ProgressBar, ProgressStyle};
use rand::seq::SliceRandom;
use rayon::prelude::*;

/// Play `games` random games against random targets
///
/// Each game draws a fresh target and guesses distinct random names until
/// the session ends. Returns aggregate win statistics.
///
/// # Errors
///
/// Returns the catalog error if no target can be drawn at all (empty
/// catalog), checked once up front so the parallel loop cannot fail.
pub fn run_simulation<P: CharacterProvider + Sync>(
    provider: &P,
    games: usize,
) -> Result<SimulationSummary, CatalogError> {
    // Fail fast before spinning up workers
    provider.pick_random()?;

    let names: Vec<String> = provider
        .all_names()
        .into_iter()
        .map(str::to_string)
        .collect();

    let progress = ProgressBar::new(games as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let outcomes: Vec<Option<usize>> = (0..games)
        .into_par_iter()
        .map(|_| {
            let result = play_one(provider, &names);
            progress.inc(1);
            result
        })
        .collect();

    progress.finish_and_clear();

    let mut distribution = [0usize; MAX_GUESSES + 1];
    let mut wins = 0;
    let mut winning_guesses = 0;
    for outcome in outcomes.into_iter().flatten() {
        wins += 1;
        winning_guesses += outcome;
        distribution[outcome] += 1;
    }

    let average_guesses_to_win = if wins > 0 {
        Some(winning_guesses as f64 / wins as f64)
    } else {
        None
    };

    Ok(SimulationSummary {
        games,
        wins,
        distribution,
        average_guesses_to_win,
    })
}

/// Play one game with shuffled distinct guesses; `Some(turns)` on a win
fn play_one<P: CharacterProvider>(provider: &P, names: &[String]) -> Option<usize> {
    let mut session = Session::new(provider).ok()?;

    let mut order: Vec<&String> = names.iter().collect();
    order.shuffle(&mut rand::rng());

    for name in order {
        if session.status().is_over() {
            break;
        }
        // Every catalog name resolves; a rejection here means game over
        if session.submit_guess(name).is_err() {
            break;
        }
    }

    match session.status() {
        Status::Won => Some(session.history().len()),
        _ => None,
    }
}
