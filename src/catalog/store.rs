//! In-memory character catalog
//!
//! Built once at startup from the bundled dataset or a JSON file, then
//! read-only for the life of the process.

use super::dataset::{EMBEDDED_DATASET, RawDataset};
use super::provider::{CatalogError, CharacterProvider};
use crate::core::{Character, Species, SpeciesRef, Work, WorkRef, WorldRef};
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashMap;
use std::fs;
use std::path::Path;

/// Static catalog backing the default game
pub struct Catalog {
    characters: Vec<Character>,
    /// Lowercased name → index into `characters`
    by_name: FxHashMap<String, usize>,
    species: FxHashMap<String, Species>,
    worlds: FxHashMap<String, String>,
    works: FxHashMap<String, Work>,
}

impl Catalog {
    /// Build the catalog from the dataset bundled into the binary
    ///
    /// # Errors
    /// Returns [`CatalogError::Malformed`] if the bundled dataset is broken
    /// (a packaging defect) or [`CatalogError::Empty`] if it holds no
    /// characters.
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(EMBEDDED_DATASET)
    }

    /// Load a catalog from a JSON dataset file
    ///
    /// # Errors
    /// Returns [`CatalogError::Unreadable`] on I/O failure,
    /// [`CatalogError::Malformed`] on parse failure, and
    /// [`CatalogError::Empty`] for a dataset without characters.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let text = fs::read_to_string(&path)
            .map_err(|e| CatalogError::Unreadable(format!("{}: {e}", path.as_ref().display())))?;
        Self::from_json(&text)
    }

    /// Parse a catalog from JSON text
    ///
    /// # Errors
    /// Returns [`CatalogError::Malformed`] or [`CatalogError::Empty`] as in
    /// [`Self::from_file`].
    pub fn from_json(text: &str) -> Result<Self, CatalogError> {
        let raw: RawDataset =
            serde_json::from_str(text).map_err(|e| CatalogError::Malformed(e.to_string()))?;
        Self::from_dataset(raw)
    }

    fn from_dataset(raw: RawDataset) -> Result<Self, CatalogError> {
        if raw.characters.is_empty() {
            return Err(CatalogError::Empty);
        }

        let characters: Vec<Character> = raw
            .characters
            .into_iter()
            .map(super::dataset::RawCharacter::into_character)
            .collect();

        let mut by_name = FxHashMap::default();
        for (idx, character) in characters.iter().enumerate() {
            by_name.insert(character.name.to_lowercase(), idx);
        }

        let species = raw
            .species
            .into_iter()
            .map(|s| {
                let record = Species {
                    name: s.name,
                    homeworld: s.homeworld.map(WorldRef::new),
                };
                (s.id, record)
            })
            .collect();

        let worlds = raw.planets.into_iter().map(|p| (p.id, p.name)).collect();

        let works = raw
            .films
            .into_iter()
            .map(|f| {
                let token = f.token.unwrap_or_else(|| f.id.clone());
                let record = Work {
                    title: f.title,
                    token,
                };
                (f.id, record)
            })
            .collect();

        Ok(Self {
            characters,
            by_name,
            species,
            worlds,
            works,
        })
    }

    /// Number of characters in the catalog
    #[must_use]
    pub fn len(&self) -> usize {
        self.characters.len()
    }

    /// Check whether the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    /// All character records, in catalog order
    #[must_use]
    pub fn characters(&self) -> &[Character] {
        &self.characters
    }
}

impl CharacterProvider for Catalog {
    fn all_names(&self) -> Vec<&str> {
        self.characters.iter().map(|c| c.name.as_str()).collect()
    }

    fn find_by_name(&self, name: &str) -> Option<&Character> {
        let key = name.trim().to_lowercase();
        self.by_name.get(&key).map(|&idx| &self.characters[idx])
    }

    fn pick_random(&self) -> Result<&Character, CatalogError> {
        self.characters
            .choose(&mut rand::rng())
            .ok_or(CatalogError::Empty)
    }

    fn resolve_species(&self, id: &SpeciesRef) -> Result<&Species, CatalogError> {
        self.species
            .get(id.as_str())
            .ok_or_else(|| CatalogError::UnknownReference(id.as_str().to_string()))
    }

    fn resolve_world(&self, id: &WorldRef) -> Result<&str, CatalogError> {
        self.worlds
            .get(id.as_str())
            .map(String::as_str)
            .ok_or_else(|| CatalogError::UnknownReference(id.as_str().to_string()))
    }

    fn resolve_work(&self, id: &WorkRef) -> Result<&Work, CatalogError> {
        self.works
            .get(id.as_str())
            .ok_or_else(|| CatalogError::UnknownReference(id.as_str().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalog {
        Catalog::from_json(
            r#"{
                "characters": [
                    {"name": "Luke Skywalker", "height": "172", "gender": "male",
                     "birth_year": "19BBY", "species": "human", "homeworld": "tatooine",
                     "films": ["IV", "V", "VI"], "allegiances": ["Rebel Alliance"]},
                    {"name": "Leia Organa", "height": "150", "gender": "female",
                     "birth_year": "19BBY", "species": "human", "homeworld": "alderaan",
                     "films": ["IV", "V", "VI"], "allegiances": ["Rebel Alliance"]}
                ],
                "species": [{"id": "human", "name": "Human", "homeworld": "coruscant"}],
                "planets": [
                    {"id": "tatooine", "name": "Tatooine"},
                    {"id": "alderaan", "name": "Alderaan"}
                ],
                "films": [
                    {"id": "IV", "title": "A New Hope"},
                    {"id": "V", "title": "The Empire Strikes Back"},
                    {"id": "VI", "title": "Return of the Jedi"}
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn find_by_name_ignores_case() {
        let catalog = sample();
        assert!(catalog.find_by_name("luke skywalker").is_some());
        assert!(catalog.find_by_name("LUKE SKYWALKER").is_some());
        assert!(catalog.find_by_name("  Leia Organa ").is_some());
        assert!(catalog.find_by_name("Wedge Antilles").is_none());
    }

    #[test]
    fn all_names_preserves_catalog_order() {
        let catalog = sample();
        assert_eq!(catalog.all_names(), vec!["Luke Skywalker", "Leia Organa"]);
    }

    #[test]
    fn pick_random_returns_a_known_character() {
        let catalog = sample();
        let picked = catalog.pick_random().unwrap();
        assert!(catalog.find_by_name(&picked.name).is_some());
    }

    #[test]
    fn resolves_references() {
        let catalog = sample();
        let species = catalog.resolve_species(&SpeciesRef::new("human")).unwrap();
        assert_eq!(species.name, "Human");

        let world = catalog.resolve_world(&WorldRef::new("tatooine")).unwrap();
        assert_eq!(world, "Tatooine");

        let work = catalog.resolve_work(&WorkRef::new("IV")).unwrap();
        assert_eq!(work.title, "A New Hope");
        assert_eq!(work.token, "IV");
    }

    #[test]
    fn dangling_reference_errors() {
        let catalog = sample();
        assert_eq!(
            catalog.resolve_species(&SpeciesRef::new("ewok")),
            Err(CatalogError::UnknownReference("ewok".to_string()))
        );
    }

    #[test]
    fn empty_dataset_is_fatal() {
        let result = Catalog::from_json(r#"{"characters": []}"#);
        assert_eq!(result.err(), Some(CatalogError::Empty));
    }

    #[test]
    fn malformed_dataset_is_reported() {
        let result = Catalog::from_json("not json");
        assert!(matches!(result, Err(CatalogError::Malformed(_))));
    }

    #[test]
    fn embedded_catalog_loads() {
        let catalog = Catalog::embedded().unwrap();
        assert!(catalog.len() >= 20);
        assert!(catalog.find_by_name("Luke Skywalker").is_some());
    }
}
