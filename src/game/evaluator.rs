//! Guess evaluation
//!
//! Runs every tracked attribute of a guessed character against the target,
//! resolving catalog references on the way, and produces one [`GuessRow`]
//! the presentation layer can render as a grid row.

use crate::catalog::{CatalogError, CharacterProvider};
use crate::core::compare::{
    compare_category, compare_era, compare_height, compare_name, compare_species,
    compare_token_sets,
};
use crate::core::{Character, Comparison, Species};
use rustc_hash::FxHashSet;
use std::fmt;

/// A comparable attribute of a character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Name,
    Height,
    Gender,
    Species,
    Homeworld,
    BirthYear,
    Films,
    Allegiances,
}

impl Attribute {
    /// Column label for grids and headers
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Height => "Height",
            Self::Gender => "Gender",
            Self::Species => "Species",
            Self::Homeworld => "Homeworld",
            Self::BirthYear => "Born",
            Self::Films => "Films",
            Self::Allegiances => "Allegiance",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Default tracked attributes, in display order
pub const DEFAULT_ATTRIBUTES: [Attribute; 8] = [
    Attribute::Name,
    Attribute::Height,
    Attribute::Gender,
    Attribute::Species,
    Attribute::Homeworld,
    Attribute::BirthYear,
    Attribute::Films,
    Attribute::Allegiances,
];

/// Evaluator configuration
///
/// The attribute list is ordered; it is the grid's column order. The
/// species homeworld tie-break is a policy switch rather than a hardwired
/// rule.
#[derive(Debug, Clone)]
pub struct EvaluatorConfig {
    pub attributes: Vec<Attribute>,
    pub species_world_tiebreak: bool,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            attributes: DEFAULT_ATTRIBUTES.to_vec(),
            species_world_tiebreak: true,
        }
    }
}

/// One rendered-comparison cell of a guess row
#[derive(Debug, Clone)]
pub struct Cell {
    pub attribute: Attribute,
    /// The guessed character's value, resolved to display form
    pub value: String,
    pub comparison: Comparison,
}

/// Evaluation of one guess: a cell per tracked attribute, in column order
#[derive(Debug, Clone)]
pub struct GuessRow {
    /// Name of the guessed character
    pub character: String,
    pub cells: Vec<Cell>,
}

impl GuessRow {
    /// Look up the comparison for one attribute
    #[must_use]
    pub fn comparison(&self, attribute: Attribute) -> Option<Comparison> {
        self.cells
            .iter()
            .find(|c| c.attribute == attribute)
            .map(|c| c.comparison)
    }
}

/// Outcome of resolving an optional catalog reference
enum Resolution<T> {
    Value(T),
    Absent,
    Unavailable,
}

impl<T> Resolution<T> {
    fn as_option(&self) -> Option<&T> {
        match self {
            Self::Value(v) => Some(v),
            _ => None,
        }
    }

    const fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable)
    }
}

/// Resolve an optional reference through a provider call
///
/// Absent references stay absent; any provider error degrades to
/// `Unavailable`, which the caller turns into an unresolved cell. This is
/// the single funnel for every reference lookup during evaluation.
fn resolve_ref<T>(lookup: Option<Result<T, CatalogError>>) -> Resolution<T> {
    match lookup {
        None => Resolution::Absent,
        Some(Ok(value)) => Resolution::Value(value),
        Some(Err(_)) => Resolution::Unavailable,
    }
}

/// Evaluates guesses against a fixed target through a data provider
pub struct Evaluator<'a, P: CharacterProvider> {
    provider: &'a P,
    config: EvaluatorConfig,
}

impl<'a, P: CharacterProvider> Evaluator<'a, P> {
    /// Evaluator with the default attribute set and policies
    #[must_use]
    pub fn new(provider: &'a P) -> Self {
        Self::with_config(provider, EvaluatorConfig::default())
    }

    #[must_use]
    pub const fn with_config(provider: &'a P, config: EvaluatorConfig) -> Self {
        Self { provider, config }
    }

    /// Tracked attributes, in column order
    #[must_use]
    pub fn attributes(&self) -> &[Attribute] {
        &self.config.attributes
    }

    /// Compare `guess` to `target` across all tracked attributes
    ///
    /// Reference-resolution failures degrade the affected attribute to an
    /// unresolved miss; the remaining attributes still evaluate.
    #[must_use]
    pub fn evaluate(&self, target: &Character, guess: &Character) -> GuessRow {
        let cells = self
            .config
            .attributes
            .iter()
            .map(|&attribute| self.evaluate_attribute(attribute, target, guess))
            .collect();

        GuessRow {
            character: guess.name.clone(),
            cells,
        }
    }

    fn evaluate_attribute(
        &self,
        attribute: Attribute,
        target: &Character,
        guess: &Character,
    ) -> Cell {
        let (value, comparison) = match attribute {
            Attribute::Name => (guess.name.clone(), compare_name(&target.name, &guess.name)),
            Attribute::Height => (
                guess
                    .height
                    .map_or_else(|| "unknown".to_string(), |h| format!("{h}cm")),
                compare_height(target.height, guess.height),
            ),
            Attribute::Gender => (
                guess.gender.clone().unwrap_or_else(|| "unknown".to_string()),
                compare_category(target.gender.as_deref(), guess.gender.as_deref()),
            ),
            Attribute::BirthYear => (
                guess
                    .birth_year
                    .map_or_else(|| "unknown".to_string(), |era| era.to_string()),
                compare_era(target.birth_year, guess.birth_year),
            ),
            Attribute::Species => self.species_cell(target, guess),
            Attribute::Homeworld => self.homeworld_cell(target, guess),
            Attribute::Films => self.films_cell(target, guess),
            Attribute::Allegiances => (
                join_or_none(&guess.allegiances),
                compare_token_sets(
                    &token_set(&target.allegiances),
                    &token_set(&guess.allegiances),
                ),
            ),
        };

        Cell {
            attribute,
            value,
            comparison,
        }
    }

    fn species_of(&self, character: &Character) -> Resolution<&Species> {
        resolve_ref(
            character
                .species
                .as_ref()
                .map(|id| self.provider.resolve_species(id)),
        )
    }

    fn species_cell(&self, target: &Character, guess: &Character) -> (String, Comparison) {
        let target_species = self.species_of(target);
        let guess_species = self.species_of(guess);

        if target_species.is_unavailable() || guess_species.is_unavailable() {
            return ("unavailable".to_string(), Comparison::unresolved());
        }

        let value = guess_species
            .as_option()
            .map_or_else(|| "unknown".to_string(), |s| s.name.clone());

        let comparison = compare_species(
            target_species.as_option().copied(),
            guess_species.as_option().copied(),
            self.config.species_world_tiebreak,
        );

        (value, comparison)
    }

    fn world_of(&self, character: &Character) -> Resolution<&str> {
        resolve_ref(
            character
                .homeworld
                .as_ref()
                .map(|id| self.provider.resolve_world(id)),
        )
    }

    fn homeworld_cell(&self, target: &Character, guess: &Character) -> (String, Comparison) {
        let target_world = self.world_of(target);
        let guess_world = self.world_of(guess);

        if target_world.is_unavailable() || guess_world.is_unavailable() {
            return ("unavailable".to_string(), Comparison::unresolved());
        }

        let value = guess_world
            .as_option()
            .map_or_else(|| "unknown".to_string(), |w| (*w).to_string());

        let comparison = compare_category(
            target_world.as_option().copied(),
            guess_world.as_option().copied(),
        );

        (value, comparison)
    }

    /// Canonical film tokens for a character, in record order
    ///
    /// A dangling reference falls back to its raw id so one bad entry does
    /// not sink the attribute; a transient provider failure does.
    fn film_tokens(&self, character: &Character) -> Result<Vec<String>, CatalogError> {
        let mut tokens = Vec::with_capacity(character.films.len());
        for film in &character.films {
            match self.provider.resolve_work(film) {
                Ok(work) => tokens.push(work.token.clone()),
                Err(CatalogError::UnknownReference(_)) => {
                    tokens.push(film.as_str().to_string());
                }
                Err(e) => return Err(e),
            }
        }
        Ok(tokens)
    }

    fn films_cell(&self, target: &Character, guess: &Character) -> (String, Comparison) {
        let (Ok(target_tokens), Ok(guess_tokens)) =
            (self.film_tokens(target), self.film_tokens(guess))
        else {
            return ("unavailable".to_string(), Comparison::unresolved());
        };

        let value = join_or_none(&guess_tokens);
        let comparison =
            compare_token_sets(&token_set(&target_tokens), &token_set(&guess_tokens));

        (value, comparison)
    }
}

fn token_set(items: &[String]) -> FxHashSet<String> {
    items.iter().cloned().collect()
}

fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "none".to_string()
    } else {
        items.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::core::{SpeciesRef, Verdict, Work, WorkRef, WorldRef};

    fn catalog() -> Catalog {
        Catalog::from_json(
            r#"{
                "characters": [
                    {"name": "Luke Skywalker", "height": "172", "gender": "male",
                     "birth_year": "19BBY", "species": "human", "homeworld": "tatooine",
                     "films": ["IV", "V", "VI"], "allegiances": ["Rebel Alliance", "Jedi Order"]},
                    {"name": "Leia Organa", "height": "150", "gender": "female",
                     "birth_year": "19BBY", "species": "human", "homeworld": "alderaan",
                     "films": ["IV", "V", "VI"], "allegiances": ["Rebel Alliance"]},
                    {"name": "Chewbacca", "height": "228", "gender": "male",
                     "birth_year": "200BBY", "species": "wookiee", "homeworld": "kashyyyk",
                     "films": ["IV", "V", "VI"], "allegiances": ["Rebel Alliance"]}
                ],
                "species": [
                    {"id": "human", "name": "Human", "homeworld": "coruscant"},
                    {"id": "wookiee", "name": "Wookiee", "homeworld": "kashyyyk"}
                ],
                "planets": [
                    {"id": "tatooine", "name": "Tatooine"},
                    {"id": "alderaan", "name": "Alderaan"},
                    {"id": "kashyyyk", "name": "Kashyyyk"}
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

    fn character<'c>(catalog: &'c Catalog, name: &str) -> &'c Character {
        catalog.find_by_name(name).unwrap()
    }

    #[test]
    fn self_comparison_is_all_exact_without_hints() {
        let catalog = catalog();
        let evaluator = Evaluator::new(&catalog);
        let luke = character(&catalog, "Luke Skywalker");

        let row = evaluator.evaluate(luke, luke);

        assert_eq!(row.cells.len(), DEFAULT_ATTRIBUTES.len());
        for cell in &row.cells {
            assert_eq!(cell.comparison.verdict, Verdict::Exact, "{}", cell.attribute);
            assert!(cell.comparison.hint.is_none(), "{}", cell.attribute);
        }
    }

    #[test]
    fn mixed_guess_produces_expected_verdicts() {
        let catalog = catalog();
        let evaluator = Evaluator::new(&catalog);
        let luke = character(&catalog, "Luke Skywalker");
        let leia = character(&catalog, "Leia Organa");

        let row = evaluator.evaluate(luke, leia);

        assert_eq!(row.character, "Leia Organa");
        assert_eq!(row.comparison(Attribute::Name).unwrap().verdict, Verdict::Miss);
        // 150 vs 172: far and below
        let height = row.comparison(Attribute::Height).unwrap();
        assert_eq!(height.verdict, Verdict::Miss);
        assert_eq!(height.hint, Some(crate::core::Hint::Lower));
        assert_eq!(
            row.comparison(Attribute::Gender).unwrap().verdict,
            Verdict::Miss
        );
        // Same species, same birth year, same films
        assert_eq!(
            row.comparison(Attribute::Species).unwrap().verdict,
            Verdict::Exact
        );
        assert_eq!(
            row.comparison(Attribute::BirthYear).unwrap().verdict,
            Verdict::Exact
        );
        assert_eq!(
            row.comparison(Attribute::Films).unwrap().verdict,
            Verdict::Exact
        );
        // Different homeworld; allegiances overlap but differ
        assert_eq!(
            row.comparison(Attribute::Homeworld).unwrap().verdict,
            Verdict::Miss
        );
        assert_eq!(
            row.comparison(Attribute::Allegiances).unwrap().verdict,
            Verdict::Close
        );
    }

    #[test]
    fn cells_follow_configured_order() {
        let catalog = catalog();
        let config = EvaluatorConfig {
            attributes: vec![Attribute::Height, Attribute::Name],
            species_world_tiebreak: true,
        };
        let evaluator = Evaluator::with_config(&catalog, config);
        let luke = character(&catalog, "Luke Skywalker");

        let row = evaluator.evaluate(luke, luke);

        assert_eq!(row.cells.len(), 2);
        assert_eq!(row.cells[0].attribute, Attribute::Height);
        assert_eq!(row.cells[1].attribute, Attribute::Name);
    }

    #[test]
    fn display_values_are_resolved() {
        let catalog = catalog();
        let evaluator = Evaluator::new(&catalog);
        let luke = character(&catalog, "Luke Skywalker");
        let chewie = character(&catalog, "Chewbacca");

        let row = evaluator.evaluate(luke, chewie);

        let by_attr = |a: Attribute| {
            row.cells
                .iter()
                .find(|c| c.attribute == a)
                .map(|c| c.value.clone())
                .unwrap()
        };
        assert_eq!(by_attr(Attribute::Height), "228cm");
        assert_eq!(by_attr(Attribute::Species), "Wookiee");
        assert_eq!(by_attr(Attribute::Homeworld), "Kashyyyk");
        assert_eq!(by_attr(Attribute::BirthYear), "200BBY");
        assert_eq!(by_attr(Attribute::Films), "IV, V, VI");
    }

    /// Provider whose reference lookups always fail transiently
    struct FlakyProvider {
        inner: Catalog,
    }

    impl CharacterProvider for FlakyProvider {
        fn all_names(&self) -> Vec<&str> {
            self.inner.all_names()
        }

        fn find_by_name(&self, name: &str) -> Option<&Character> {
            self.inner.find_by_name(name)
        }

        fn pick_random(&self) -> Result<&Character, CatalogError> {
            self.inner.pick_random()
        }

        fn resolve_species(&self, _: &SpeciesRef) -> Result<&Species, CatalogError> {
            Err(CatalogError::Unavailable("species service down".to_string()))
        }

        fn resolve_world(&self, _: &WorldRef) -> Result<&str, CatalogError> {
            Err(CatalogError::Unavailable("planet service down".to_string()))
        }

        fn resolve_work(&self, _: &WorkRef) -> Result<&Work, CatalogError> {
            Err(CatalogError::Unavailable("film service down".to_string()))
        }
    }

    #[test]
    fn provider_failure_degrades_only_reference_attributes() {
        let provider = FlakyProvider { inner: catalog() };
        let evaluator = Evaluator::new(&provider);
        let luke = provider.find_by_name("Luke Skywalker").unwrap();

        let row = evaluator.evaluate(luke, luke);

        // Reference-backed attributes degrade to unresolved misses
        for attribute in [Attribute::Species, Attribute::Homeworld, Attribute::Films] {
            let c = row.comparison(attribute).unwrap();
            assert_eq!(c, Comparison::unresolved(), "{attribute}");
        }

        // Pure attributes are untouched
        for attribute in [
            Attribute::Name,
            Attribute::Height,
            Attribute::Gender,
            Attribute::BirthYear,
            Attribute::Allegiances,
        ] {
            let c = row.comparison(attribute).unwrap();
            assert_eq!(c.verdict, Verdict::Exact, "{attribute}");
        }
    }

    #[test]
    fn dangling_film_reference_falls_back_to_raw_token() {
        let catalog = Catalog::from_json(
            r#"{
                "characters": [
                    {"name": "A", "films": ["IV", "bogus"]},
                    {"name": "B", "films": ["IV", "bogus"]},
                    {"name": "C", "films": ["V"]}
                ],
                "films": [
                    {"id": "IV", "title": "A New Hope"},
                    {"id": "V", "title": "The Empire Strikes Back"}
                ]
            }"#,
        )
        .unwrap();
        let evaluator = Evaluator::new(&catalog);

        // Both sides carry the same dangling reference: still an exact set match
        let a = catalog.find_by_name("A").unwrap();
        let b = catalog.find_by_name("B").unwrap();
        let row = evaluator.evaluate(a, b);
        assert_eq!(
            row.comparison(Attribute::Films).unwrap().verdict,
            Verdict::Exact
        );

        // Against a disjoint set the dangling entry is just a non-match
        let c = catalog.find_by_name("C").unwrap();
        let row = evaluator.evaluate(c, a);
        assert_eq!(
            row.comparison(Attribute::Films).unwrap().verdict,
            Verdict::Miss
        );
    }
}
