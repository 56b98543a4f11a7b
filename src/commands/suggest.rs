//! One-shot autocomplete query
//!
//! Prints the names matching a query, one per line, in catalog order.

use crate::catalog::CharacterProvider;
use crate::suggest::{MatchMode, NameIndex};

/// Print all names matching `query` under the given mode
pub fn run_suggest<P: CharacterProvider>(provider: &P, query: &str, mode: MatchMode) {
    let index = NameIndex::new(provider.all_names(), mode);
    let matches = index.suggest(query);

    if matches.is_empty() {
        println!("No matching characters.");
        return;
    }

    for name in matches {
        println!("{name}");
    }
}
