//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI: type a name, get a colored grid row
//! back, six attempts to find the target.

use crate::catalog::CharacterProvider;
use crate::game::{GuessError, Session};
use crate::output::{print_attribute_header, print_guess_row, print_session_result};
use crate::suggest::{MatchMode, NameIndex};
use std::io::{self, Write};

/// How many suggestions to show after a failed lookup
const SUGGESTION_LIMIT: usize = 5;

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if the catalog cannot provide a target or on an I/O
/// error reading user input.
pub fn run_play<P: CharacterProvider>(provider: &P, mode: MatchMode) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║          Character Guesser - Interactive Mode                ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("I picked a secret character from the catalog. Name it in six tries!");
    println!("After each guess, every attribute is colored:");
    println!("  - green  = exact match");
    println!("  - yellow = close (nearby height/year, shared films or worlds)");
    println!("  - dim    = miss; ↑/↓ point toward the target's value\n");
    println!("Commands: 'quit' to exit, 'new' for a new game\n");

    let index = NameIndex::new(provider.all_names(), mode);
    let mut session = Session::new(provider).map_err(|e| e.to_string())?;
    print_attribute_header(session.attributes());

    loop {
        let input = get_user_input(&format!("Guess ({} left)", session.remaining()))?;

        match input.to_lowercase().as_str() {
            "" => continue,
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                session = Session::new(provider).map_err(|e| e.to_string())?;
                println!("\n🔄 New game started!\n");
                print_attribute_header(session.attributes());
                continue;
            }
            _ => {}
        }

        match session.submit_guess(&input) {
            Ok(record) => print_guess_row(record),
            Err(GuessError::UnknownCharacter(name)) => {
                println!("❌ Character not found: {name}. Try again!");
                let suggestions = index.suggest(&input);
                if !suggestions.is_empty() {
                    println!(
                        "   Did you mean: {}?",
                        suggestions
                            .iter()
                            .take(SUGGESTION_LIMIT)
                            .copied()
                            .collect::<Vec<_>>()
                            .join(", ")
                    );
                }
                continue;
            }
            Err(GuessError::GameOver) => continue,
        }

        if session.status().is_over() {
            print_session_result(
                session.status(),
                session.target_name(),
                session.history().len(),
            );

            match get_user_input("Play again? (yes/no)")?.to_lowercase().as_str() {
                "yes" | "y" => {
                    session = Session::new(provider).map_err(|e| e.to_string())?;
                    println!("\n🔄 New game started!\n");
                    print_attribute_header(session.attributes());
                }
                _ => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
