//! Canonical character records
//!
//! Every data source is adapted into this one schema before the game sees
//! it. Fields a source cannot provide are `None` and compare as a miss.

use super::Era;
use std::fmt;

macro_rules! reference_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(String);

        impl $name {
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Raw identifier string
            #[inline]
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

reference_id! {
    /// Identifier of a species entry in the catalog
    SpeciesRef
}

reference_id! {
    /// Identifier of a planet entry in the catalog
    WorldRef
}

reference_id! {
    /// Identifier of a film/appearance entry in the catalog
    WorkRef
}

/// One guessable character
///
/// Immutable for the lifetime of a catalog. `name` is the unique key,
/// compared case-insensitively. Reference fields point into the catalog's
/// species/planet/film tables and are resolved at evaluation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    pub name: String,
    /// Height in centimeters, when the source knows it
    pub height: Option<u16>,
    pub gender: Option<String>,
    pub birth_year: Option<Era>,
    pub species: Option<SpeciesRef>,
    pub homeworld: Option<WorldRef>,
    pub films: Vec<WorkRef>,
    pub allegiances: Vec<String>,
}

impl Character {
    /// Check whether `name` refers to this character, ignoring case
    #[must_use]
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name.trim())
    }
}

/// A species entry, resolved through the catalog
///
/// The homeworld reference backs the "same homeworld" closeness tie-break
/// when two species differ.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Species {
    pub name: String,
    pub homeworld: Option<WorldRef>,
}

/// A film/appearance entry, resolved through the catalog
///
/// `token` is the canonical comparison token (episode tag). Two sources may
/// reference the same work differently; tokens are what get compared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Work {
    pub title: String,
    pub token: String,
}
