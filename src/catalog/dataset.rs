//! Raw dataset shapes and the adapter into canonical records
//!
//! Source files disagree on casing (`name` vs `Name`), on allegiance shape
//! (list vs comma-separated string), and use `"unknown"` strings for absent
//! numerics. All of that is absorbed here; the rest of the crate only ever
//! sees [`Character`] and friends.

use crate::core::{Character, Era, SpeciesRef, WorkRef, WorldRef};
use serde::{Deserialize, Deserializer};

/// Bundled character dataset, compiled into the binary
pub const EMBEDDED_DATASET: &str = include_str!("../../data/characters.json");

#[derive(Debug, Deserialize)]
pub(crate) struct RawDataset {
    #[serde(default)]
    pub characters: Vec<RawCharacter>,
    #[serde(default)]
    pub species: Vec<RawSpecies>,
    #[serde(default)]
    pub planets: Vec<RawPlanet>,
    #[serde(default)]
    pub films: Vec<RawFilm>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawCharacter {
    #[serde(alias = "Name")]
    pub name: String,
    #[serde(default, alias = "Height")]
    pub height: Option<String>,
    #[serde(default, alias = "Gender")]
    pub gender: Option<String>,
    #[serde(default, alias = "Birth_year", alias = "birthYear")]
    pub birth_year: Option<String>,
    #[serde(default, alias = "Species")]
    pub species: Option<String>,
    #[serde(default, alias = "Homeworld")]
    pub homeworld: Option<String>,
    #[serde(default, alias = "Films")]
    pub films: Vec<String>,
    #[serde(
        default,
        alias = "Allegiance",
        alias = "allegiance",
        deserialize_with = "csv_or_list"
    )]
    pub allegiances: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawSpecies {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub homeworld: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawPlanet {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawFilm {
    pub id: String,
    pub title: String,
    /// Canonical comparison token; defaults to the id
    #[serde(default)]
    pub token: Option<String>,
}

impl RawCharacter {
    /// Adapt a raw record into the canonical schema
    ///
    /// Unparsable numerics and `"unknown"` markers become `None`; the game
    /// treats those fields as misses rather than erroring.
    pub(crate) fn into_character(self) -> Character {
        Character {
            name: self.name,
            height: self.height.as_deref().and_then(parse_height),
            gender: self.gender.filter(|g| is_known(g)),
            birth_year: self.birth_year.as_deref().and_then(Era::parse),
            species: self.species.filter(|s| is_known(s)).map(SpeciesRef::new),
            homeworld: self.homeworld.filter(|w| is_known(w)).map(WorldRef::new),
            films: self.films.into_iter().map(WorkRef::new).collect(),
            allegiances: self.allegiances,
        }
    }
}

fn is_known(value: &str) -> bool {
    let v = value.trim();
    !v.is_empty() && !v.eq_ignore_ascii_case("unknown")
}

fn parse_height(value: &str) -> Option<u16> {
    value.trim().trim_end_matches("cm").trim().parse().ok()
}

/// Accept either a list of strings or one comma-separated string
fn csv_or_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    let parsed = match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(csv) => csv
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
        OneOrMany::Many(items) => items,
    };

    Ok(parsed)
}
