//! Autocomplete over the character name list
//!
//! The index is built once from the catalog's name list and answers
//! prefix or substring queries, case-insensitively, in original catalog
//! order. It never touches game state.

/// How a query is matched against names
///
/// Callers pick one mode explicitly; the two are never mixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// Name starts with the query
    #[default]
    Prefix,
    /// Name contains the query anywhere
    Substring,
}

/// Case-insensitive name lookup for the input dropdown
pub struct NameIndex {
    names: Vec<String>,
    /// Lowercased shadow of `names`, same order
    folded: Vec<String>,
    mode: MatchMode,
}

impl NameIndex {
    /// Build an index over `names` with the given match mode
    #[must_use]
    pub fn new<I, S>(names: I, mode: MatchMode) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let folded = names.iter().map(|n| n.to_lowercase()).collect();
        Self {
            names,
            folded,
            mode,
        }
    }

    /// Names matching `query`, in original list order
    ///
    /// An empty (or all-whitespace) query yields nothing; the caller hides
    /// the dropdown rather than listing the whole catalog.
    #[must_use]
    pub fn suggest(&self, query: &str) -> Vec<&str> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        self.folded
            .iter()
            .enumerate()
            .filter(|(_, name)| match self.mode {
                MatchMode::Prefix => name.starts_with(&needle),
                MatchMode::Substring => name.contains(&needle),
            })
            .map(|(i, _)| self.names[i].as_str())
            .collect()
    }

    /// Number of indexed names
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check whether the index is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index(mode: MatchMode) -> NameIndex {
        NameIndex::new(["Luke", "Leia", "Lando"], mode)
    }

    #[test]
    fn empty_query_yields_nothing() {
        assert!(index(MatchMode::Prefix).suggest("").is_empty());
        assert!(index(MatchMode::Substring).suggest("   ").is_empty());
    }

    #[test]
    fn prefix_mode_matches_starts_only() {
        let idx = index(MatchMode::Prefix);
        assert_eq!(idx.suggest("lu"), vec!["Luke"]);
        assert_eq!(idx.suggest("L"), vec!["Luke", "Leia", "Lando"]);
        assert!(idx.suggest("an").is_empty());
    }

    #[test]
    fn substring_mode_matches_anywhere() {
        let idx = index(MatchMode::Substring);
        assert_eq!(idx.suggest("an"), vec!["Lando"]);
        assert_eq!(idx.suggest("e"), vec!["Luke", "Leia"]);
    }

    #[test]
    fn matching_ignores_case() {
        let idx = index(MatchMode::Prefix);
        assert_eq!(idx.suggest("LU"), vec!["Luke"]);
        assert_eq!(idx.suggest("lEi"), vec!["Leia"]);
    }

    #[test]
    fn results_keep_original_order() {
        let idx = NameIndex::new(["Wedge", "Leia", "Luke"], MatchMode::Substring);
        assert_eq!(idx.suggest("e"), vec!["Wedge", "Leia", "Luke"]);
    }

    #[test]
    fn no_match_yields_empty() {
        let idx = index(MatchMode::Prefix);
        assert!(idx.suggest("zzz").is_empty());
    }
}
