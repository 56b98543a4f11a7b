//! One play-through of the guessing game
//!
//! A session owns the secret target, the append-only guess history, and the
//! derived status. Sessions are explicit values: create one per game (or
//! per test); there is no shared global state.

use super::evaluator::{Attribute, Evaluator, EvaluatorConfig, GuessRow};
use crate::catalog::{CatalogError, CharacterProvider};
use crate::core::Character;
use std::fmt;

/// Fixed attempt budget per session
pub const MAX_GUESSES: usize = 6;

/// Session status; `Won` and `Lost` are terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    InProgress,
    Won,
    Lost,
}

impl Status {
    /// Check whether the game has ended
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Why a guess was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    /// The name does not resolve to any known character; try again
    UnknownCharacter(String),
    /// The session already ended; the guess is ignored
    GameOver,
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownCharacter(name) => write!(f, "character not found: {name}"),
            Self::GameOver => write!(f, "the game is already over"),
        }
    }
}

impl std::error::Error for GuessError {}

/// One entry in the guess history
#[derive(Debug, Clone)]
pub struct GuessRecord {
    /// 1-based turn number; insertion order is display order
    pub turn: usize,
    pub row: GuessRow,
}

/// A single game: secret target, guess history, attempt budget
pub struct Session<'a, P: CharacterProvider> {
    provider: &'a P,
    evaluator: Evaluator<'a, P>,
    target: Character,
    history: Vec<GuessRecord>,
    status: Status,
}

impl<'a, P: CharacterProvider> Session<'a, P> {
    /// Start a session with a uniformly random target
    ///
    /// # Errors
    /// Returns the provider's error when no target can be drawn. A dead
    /// catalog fails session creation, before any game state exists.
    pub fn new(provider: &'a P) -> Result<Self, CatalogError> {
        let target = provider.pick_random()?.clone();
        Ok(Self::with_target(provider, target))
    }

    /// Start a session with a known target (scripted games, tests)
    #[must_use]
    pub fn with_target(provider: &'a P, target: Character) -> Self {
        Self {
            provider,
            evaluator: Evaluator::new(provider),
            target,
            history: Vec::new(),
            status: Status::InProgress,
        }
    }

    /// Replace the evaluator configuration (attribute set, policies)
    #[must_use]
    pub fn with_evaluator_config(mut self, config: EvaluatorConfig) -> Self {
        self.evaluator = Evaluator::with_config(self.provider, config);
        self
    }

    /// Submit a guess by character name
    ///
    /// Evaluates the guess, appends it to the history, and updates the
    /// session status. A correct name wins immediately; the sixth wrong
    /// guess loses.
    ///
    /// # Errors
    /// [`GuessError::GameOver`] after a terminal state and
    /// [`GuessError::UnknownCharacter`] for unresolvable names; neither
    /// changes any session state.
    pub fn submit_guess(&mut self, name: &str) -> Result<&GuessRecord, GuessError> {
        let guess = self
            .provider
            .find_by_name(name)
            .ok_or_else(|| GuessError::UnknownCharacter(name.trim().to_string()))?
            .clone();

        if self.status.is_over() {
            return Err(GuessError::GameOver);
        }

        let row = self.evaluator.evaluate(&self.target, &guess);
        let won = self.target.is_named(&guess.name);

        self.history.push(GuessRecord {
            turn: self.history.len() + 1,
            row,
        });

        self.status = if won {
            Status::Won
        } else if self.history.len() >= MAX_GUESSES {
            Status::Lost
        } else {
            Status::InProgress
        };

        // Safe: a record was just pushed
        Ok(self.history.last().expect("history is non-empty"))
    }

    /// Current status
    #[inline]
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Guess history, oldest first
    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    /// Attempts left before the session is lost
    #[must_use]
    pub fn remaining(&self) -> usize {
        MAX_GUESSES.saturating_sub(self.history.len())
    }

    /// The secret target's name, for end-of-game reveals
    #[must_use]
    pub fn target_name(&self) -> &str {
        &self.target.name
    }

    /// Tracked attributes, in grid column order
    #[must_use]
    pub fn attributes(&self) -> &[Attribute] {
        self.evaluator.attributes()
    }
}
