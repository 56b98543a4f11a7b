//! Display functions for game output

use super::formatters::{column_width, format_cell, pad_to};
use crate::game::{Attribute, GuessRecord, MAX_GUESSES, Status};
use colored::Colorize;

/// Print the grid header: one column label per tracked attribute
pub fn print_attribute_header(attributes: &[Attribute]) {
    let labels: Vec<String> = attributes
        .iter()
        .map(|&a| pad_to(a.label(), column_width(a)))
        .collect();
    println!("   {}", labels.join(" ").bold());

    let total: usize = attributes
        .iter()
        .map(|&a| column_width(a) + 1)
        .sum::<usize>()
        .saturating_sub(1);
    println!("   {}", "─".repeat(total).cyan());
}

/// Print one guess as a colored grid row
pub fn print_guess_row(record: &GuessRecord) {
    let cells: Vec<String> = record.row.cells.iter().map(format_cell).collect();
    println!("{}. {}", record.turn, cells.join(" "));
}

/// Print the end-of-game banner, revealing the target
pub fn print_session_result(status: Status, target_name: &str, guesses_used: usize) {
    match status {
        Status::Won => {
            println!("\n{}", "═".repeat(60).bright_cyan());
            println!(
                "{}",
                format!(
                    " 🎉 Got it in {guesses_used} {}! The character was {target_name}. ",
                    if guesses_used == 1 { "guess" } else { "guesses" }
                )
                .bright_green()
                .bold()
            );
            println!("{}", "═".repeat(60).bright_cyan());
        }
        Status::Lost => {
            println!("\n{}", "═".repeat(60).bright_cyan());
            println!(
                "{}",
                format!(
                    " ❌ Out of guesses ({MAX_GUESSES}). The character was {target_name}. "
                )
                .red()
                .bold()
            );
            println!("{}", "═".repeat(60).bright_cyan());
        }
        Status::InProgress => {}
    }
}

/// Result of a bulk simulation run
pub struct SimulationSummary {
    pub games: usize,
    pub wins: usize,
    /// wins by number of guesses used (index 1..=6)
    pub distribution: [usize; MAX_GUESSES + 1],
    pub average_guesses_to_win: Option<f64>,
}

/// Print win-rate and guess-distribution statistics
pub fn print_simulation_summary(summary: &SimulationSummary) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let win_rate = if summary.games == 0 {
        0.0
    } else {
        summary.wins as f64 / summary.games as f64 * 100.0
    };

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", summary.games);
    println!(
        "   Games won:        {} ({})",
        summary.wins,
        format!("{win_rate:.1}%").bright_yellow().bold()
    );
    if let Some(avg) = summary.average_guesses_to_win {
        println!("   Avg guesses/win:  {avg:.2}");
    }

    println!("\n📈 {}", "Winning-guess distribution:".bright_cyan().bold());
    for guess_count in 1..=MAX_GUESSES {
        let count = summary.distribution[guess_count];
        let pct = if summary.games == 0 {
            0.0
        } else {
            count as f64 / summary.games as f64 * 100.0
        };
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░".repeat(40_usize.saturating_sub(bar_width)).bright_black()
        );
        println!("   {guess_count}: {bar} {count:5} ({pct:5.1}%)");
    }
}
