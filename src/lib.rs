//! Character Guesser
//!
//! A guess-the-character deduction game: name the secret character in six
//! tries, guided by per-attribute feedback (exact / close / miss, with
//! directional hints for height and birth year).
//!
//! # Quick Start
//!
//! ```rust
//! use swordle::catalog::Catalog;
//! use swordle::game::{Session, Status};
//!
//! let catalog = Catalog::embedded().unwrap();
//! let target = catalog.characters()[0].clone();
//! let mut session = Session::with_target(&catalog, target);
//!
//! let record = session.submit_guess("Han Solo").unwrap();
//! println!("verdicts: {} cells", record.row.cells.len());
//! assert!(matches!(session.status(), Status::InProgress | Status::Won));
//! ```

// Core domain types
pub mod core;

// Game logic (evaluation + session)
pub mod game;

// Character data sources
pub mod catalog;

// Autocomplete
pub mod suggest;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
