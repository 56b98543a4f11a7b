//! Game logic: guess evaluation and session state
//!
//! [`Evaluator`] turns a (target, guess) pair into a grid row of verdicts;
//! [`Session`] runs one play-through with a six-guess budget.

mod evaluator;
mod session;

pub use evaluator::{
    Attribute, Cell, DEFAULT_ATTRIBUTES, Evaluator, EvaluatorConfig, GuessRow,
};
pub use session::{GuessError, GuessRecord, MAX_GUESSES, Session, Status};
