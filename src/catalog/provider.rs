//! Data-provider contract
//!
//! The game core talks to character data through this trait so the concrete
//! source (bundled dataset, file on disk, remote catalog) stays swappable.
//! Provider failures surface as [`CatalogError`] and are downgraded to
//! per-attribute misses by the evaluator; they never reach the player raw.

use crate::core::{Character, Species, SpeciesRef, Work, WorkRef, WorldRef};
use std::fmt;

/// Errors from loading or querying a character catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The catalog holds no characters; a game cannot start
    Empty,
    /// A record points at a species/planet/film id the catalog does not know
    UnknownReference(String),
    /// The provider is temporarily unable to answer
    Unavailable(String),
    /// A dataset file could not be read
    Unreadable(String),
    /// A dataset file could not be parsed
    Malformed(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "catalog contains no characters"),
            Self::UnknownReference(id) => write!(f, "unknown catalog reference: {id}"),
            Self::Unavailable(why) => write!(f, "catalog unavailable: {why}"),
            Self::Unreadable(why) => write!(f, "failed to read dataset: {why}"),
            Self::Malformed(why) => write!(f, "failed to parse dataset: {why}"),
        }
    }
}

impl std::error::Error for CatalogError {}

/// Read-only source of character records and their referenced entities
///
/// All lookups are infallible-by-name or return a [`CatalogError`]; the
/// catalog itself is immutable once built.
pub trait CharacterProvider {
    /// Every known character name, in catalog order
    fn all_names(&self) -> Vec<&str>;

    /// Look a character up by name, ignoring case
    fn find_by_name(&self, name: &str) -> Option<&Character>;

    /// Draw a uniformly random character (the session target)
    ///
    /// # Errors
    /// Returns [`CatalogError::Empty`] if there is nothing to draw from.
    fn pick_random(&self) -> Result<&Character, CatalogError>;

    /// Resolve a species reference to its full record
    ///
    /// # Errors
    /// Returns [`CatalogError::UnknownReference`] for a dangling id, or
    /// [`CatalogError::Unavailable`] if the provider cannot answer now.
    fn resolve_species(&self, id: &SpeciesRef) -> Result<&Species, CatalogError>;

    /// Resolve a planet reference to its display name
    ///
    /// # Errors
    /// Same failure modes as [`Self::resolve_species`].
    fn resolve_world(&self, id: &WorldRef) -> Result<&str, CatalogError>;

    /// Resolve a film/appearance reference to its record
    ///
    /// # Errors
    /// Same failure modes as [`Self::resolve_species`].
    fn resolve_work(&self, id: &WorkRef) -> Result<&Work, CatalogError>;
}
