//! Per-attribute comparison rules
//!
//! Pure functions, one per attribute family. Each takes the target and
//! guessed values already resolved to comparable form and returns a
//! [`Comparison`]. Reference resolution happens upstream in the evaluator;
//! nothing here touches a data provider.

use super::{Comparison, Era, Hint, Species};
use rustc_hash::FxHashSet;

/// Height difference (cm) still counted as close
pub const HEIGHT_CLOSE_CM: u16 = 10;

/// Birth-year difference (years) still counted as close
pub const ERA_CLOSE_YEARS: i32 = 5;

/// Compare character names: case-insensitive full match
///
/// Names never tier to close and never carry a hint; an exact name match
/// is the win condition.
#[must_use]
pub fn compare_name(target: &str, guess: &str) -> Comparison {
    if target.eq_ignore_ascii_case(guess.trim()) {
        Comparison::exact()
    } else {
        Comparison::miss()
    }
}

/// Compare heights in centimeters
///
/// Either side unknown → miss with no hint. Otherwise exact on equality,
/// close within [`HEIGHT_CLOSE_CM`], and a direction hint whenever the
/// values differ.
#[must_use]
pub fn compare_height(target: Option<u16>, guess: Option<u16>) -> Comparison {
    let (Some(target), Some(guess)) = (target, guess) else {
        return Comparison::miss();
    };

    if target == guess {
        return Comparison::exact();
    }

    let hint = if guess > target {
        Hint::Higher
    } else {
        Hint::Lower
    };

    if target.abs_diff(guess) <= HEIGHT_CLOSE_CM {
        Comparison::close(Some(hint))
    } else {
        Comparison::miss_with(hint)
    }
}

/// Compare epoch-relative birth years
///
/// Same shape as [`compare_height`] with a [`ERA_CLOSE_YEARS`] window.
/// `Higher` means the guessed character was born more recently than the
/// target.
#[must_use]
pub fn compare_era(target: Option<Era>, guess: Option<Era>) -> Comparison {
    let (Some(target), Some(guess)) = (target, guess) else {
        return Comparison::miss();
    };

    if target == guess {
        return Comparison::exact();
    }

    let hint = if guess > target {
        Hint::Higher
    } else {
        Hint::Lower
    };

    if target.distance(guess) <= ERA_CLOSE_YEARS {
        Comparison::close(Some(hint))
    } else {
        Comparison::miss_with(hint)
    }
}

/// Compare a plain categorical attribute (gender, resolved homeworld name)
///
/// Case-sensitive equality, no close tier, no hint. Either side absent →
/// miss.
#[must_use]
pub fn compare_category(target: Option<&str>, guess: Option<&str>) -> Comparison {
    match (target, guess) {
        (Some(t), Some(g)) if t == g => Comparison::exact(),
        _ => Comparison::miss(),
    }
}

/// Compare resolved species records, with an optional homeworld tie-break
///
/// Same species name → exact. Different species sharing a homeworld →
/// close, when `world_tiebreak` is enabled. Either side absent → miss.
#[must_use]
pub fn compare_species(
    target: Option<&Species>,
    guess: Option<&Species>,
    world_tiebreak: bool,
) -> Comparison {
    let (Some(target), Some(guess)) = (target, guess) else {
        return Comparison::miss();
    };

    if target.name == guess.name {
        return Comparison::exact();
    }

    if world_tiebreak
        && let (Some(tw), Some(gw)) = (&target.homeworld, &guess.homeworld)
        && tw == gw
    {
        return Comparison::close(None);
    }

    Comparison::miss()
}

/// Compare two sets of canonical tokens (films, allegiances)
///
/// Order-independent: equal sets → exact, intersecting sets → close,
/// disjoint sets → miss. Two empty sets are trivially equal.
#[must_use]
pub fn compare_token_sets(target: &FxHashSet<String>, guess: &FxHashSet<String>) -> Comparison {
    if target == guess {
        return Comparison::exact();
    }

    if target.intersection(guess).next().is_some() {
        Comparison::close(None)
    } else {
        Comparison::miss()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Verdict, WorldRef};

    fn tokens(items: &[&str]) -> FxHashSet<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn name_match_is_case_insensitive() {
        assert!(compare_name("Luke Skywalker", "luke skywalker").is_exact());
        assert!(compare_name("Luke Skywalker", "LUKE SKYWALKER").is_exact());
        assert_eq!(
            compare_name("Luke Skywalker", "Leia Organa"),
            Comparison::miss()
        );
    }

    #[test]
    fn name_never_hints() {
        let c = compare_name("Han Solo", "Lando Calrissian");
        assert!(c.hint.is_none());
    }

    #[test]
    fn height_equal_is_exact_without_hint() {
        let c = compare_height(Some(170), Some(170));
        assert_eq!(c, Comparison::exact());
    }

    #[test]
    fn height_within_window_is_close_too_high() {
        let c = compare_height(Some(170), Some(175));
        assert_eq!(c.verdict, Verdict::Close);
        assert_eq!(c.hint, Some(Hint::Higher));
    }

    #[test]
    fn height_outside_window_is_miss_with_hint() {
        let c = compare_height(Some(170), Some(200));
        assert_eq!(c.verdict, Verdict::Miss);
        assert_eq!(c.hint, Some(Hint::Higher));

        let c = compare_height(Some(170), Some(120));
        assert_eq!(c.verdict, Verdict::Miss);
        assert_eq!(c.hint, Some(Hint::Lower));
    }

    #[test]
    fn height_boundary_is_close() {
        assert_eq!(
            compare_height(Some(170), Some(180)).verdict,
            Verdict::Close
        );
        assert_eq!(compare_height(Some(170), Some(181)).verdict, Verdict::Miss);
    }

    #[test]
    fn height_unknown_is_miss_without_hint() {
        assert_eq!(compare_height(None, Some(170)), Comparison::miss());
        assert_eq!(compare_height(Some(170), None), Comparison::miss());
        assert_eq!(compare_height(None, None), Comparison::miss());
    }

    #[test]
    fn era_equal_is_exact() {
        let year = Era::parse("19BBY");
        assert_eq!(compare_era(year, year), Comparison::exact());
    }

    #[test]
    fn era_within_window_is_close() {
        let target = Era::parse("19BBY");
        let guess = Era::parse("24BBY"); // five years older
        let c = compare_era(target, guess);
        assert_eq!(c.verdict, Verdict::Close);
        assert_eq!(c.hint, Some(Hint::Lower));
    }

    #[test]
    fn era_outside_window_is_miss_with_hint() {
        let target = Era::parse("19BBY");
        let guess = Era::parse("11ABY"); // thirty years more recent
        let c = compare_era(target, guess);
        assert_eq!(c.verdict, Verdict::Miss);
        assert_eq!(c.hint, Some(Hint::Higher));
    }

    #[test]
    fn era_unparsable_is_miss_without_hint() {
        assert_eq!(
            compare_era(Era::parse("19BBY"), Era::parse("unknown")),
            Comparison::miss()
        );
        assert_eq!(compare_era(None, None), Comparison::miss());
    }

    #[test]
    fn category_is_case_sensitive() {
        assert!(compare_category(Some("male"), Some("male")).is_exact());
        assert_eq!(
            compare_category(Some("male"), Some("Male")),
            Comparison::miss()
        );
        assert_eq!(compare_category(Some("male"), None), Comparison::miss());
    }

    #[test]
    fn species_same_name_is_exact() {
        let human = Species {
            name: "Human".to_string(),
            homeworld: Some(WorldRef::new("coruscant")),
        };
        assert!(compare_species(Some(&human), Some(&human), true).is_exact());
    }

    #[test]
    fn species_shared_homeworld_is_close() {
        let zabrak = Species {
            name: "Zabrak".to_string(),
            homeworld: Some(WorldRef::new("dathomir")),
        };
        let nightbrother = Species {
            name: "Nightbrother".to_string(),
            homeworld: Some(WorldRef::new("dathomir")),
        };
        let c = compare_species(Some(&zabrak), Some(&nightbrother), true);
        assert_eq!(c.verdict, Verdict::Close);
    }

    #[test]
    fn species_tiebreak_can_be_disabled() {
        let zabrak = Species {
            name: "Zabrak".to_string(),
            homeworld: Some(WorldRef::new("dathomir")),
        };
        let nightbrother = Species {
            name: "Nightbrother".to_string(),
            homeworld: Some(WorldRef::new("dathomir")),
        };
        let c = compare_species(Some(&zabrak), Some(&nightbrother), false);
        assert_eq!(c.verdict, Verdict::Miss);
    }

    #[test]
    fn species_without_homeworld_never_ties() {
        let droid = Species {
            name: "Droid".to_string(),
            homeworld: None,
        };
        let hutt = Species {
            name: "Hutt".to_string(),
            homeworld: Some(WorldRef::new("nal-hutta")),
        };
        assert_eq!(
            compare_species(Some(&droid), Some(&hutt), true),
            Comparison::miss()
        );
    }

    #[test]
    fn species_absent_is_miss() {
        let human = Species {
            name: "Human".to_string(),
            homeworld: None,
        };
        assert_eq!(compare_species(None, Some(&human), true), Comparison::miss());
        assert_eq!(compare_species(Some(&human), None, true), Comparison::miss());
    }

    #[test]
    fn token_sets_equal_is_exact() {
        let c = compare_token_sets(&tokens(&["IV", "V", "VI"]), &tokens(&["VI", "IV", "V"]));
        assert_eq!(c, Comparison::exact());
    }

    #[test]
    fn token_sets_overlap_is_close() {
        let c = compare_token_sets(&tokens(&["IV", "V", "VI"]), &tokens(&["IV", "I"]));
        assert_eq!(c.verdict, Verdict::Close);
    }

    #[test]
    fn token_sets_disjoint_is_miss() {
        let c = compare_token_sets(&tokens(&["IV", "V", "VI"]), &tokens(&["I", "II"]));
        assert_eq!(c, Comparison::miss());
    }

    #[test]
    fn token_sets_subset_is_close_not_exact() {
        let c = compare_token_sets(&tokens(&["IV", "V", "VI"]), &tokens(&["IV", "V"]));
        assert_eq!(c.verdict, Verdict::Close);
    }

    #[test]
    fn token_sets_both_empty_is_exact() {
        let c = compare_token_sets(&tokens(&[]), &tokens(&[]));
        assert_eq!(c, Comparison::exact());
    }

    #[test]
    fn token_sets_empty_vs_full_is_miss() {
        let c = compare_token_sets(&tokens(&["IV"]), &tokens(&[]));
        assert_eq!(c, Comparison::miss());
    }
}
