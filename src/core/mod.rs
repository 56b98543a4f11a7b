//! Core domain types for the character-guessing game
//!
//! This module contains the fundamental domain types with zero I/O:
//! character records, epoch-relative years, verdicts, and the pure
//! per-attribute comparison rules.

pub mod compare;

mod character;
mod era;
mod verdict;

pub use character::{Character, Species, SpeciesRef, Work, WorkRef, WorldRef};
pub use era::Era;
pub use verdict::{Comparison, Hint, Verdict};
