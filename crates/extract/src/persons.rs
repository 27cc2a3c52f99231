//! Known-persons index and the person matcher.

use crate::error::{AssetError, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::info;

/// Immutable set of canonical two-word person names, lowercased.
#[derive(Debug, Clone)]
pub struct PersonIndex {
    names: HashSet<String>,
}

impl PersonIndex {
    /// Build the index, lowercasing entries and rejecting anything that is
    /// not exactly two words.
    pub fn new(entries: impl IntoIterator<Item = String>) -> Result<Self> {
        let mut names = HashSet::new();
        for entry in entries {
            let name = entry.to_lowercase();
            if name.split_whitespace().count() != 2 {
                return Err(AssetError::InvalidPersonEntry { entry });
            }
            names.insert(name);
        }
        Ok(Self { names })
    }

    /// Load the index from a JSON array of names.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let entries: Vec<String> = serde_json::from_str(&contents)?;
        let index = Self::new(entries)?;
        info!("Loaded {} person names from {:?}", index.len(), path);
        Ok(index)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Match adjacent token pairs against the person index.
///
/// Every consecutive pair is tested (the window slides by one token), so a
/// name can start at any position. Names longer than two words are not
/// detected; that mirrors the shape of the index itself.
pub fn identify_persons(tokens: &[String], index: &PersonIndex) -> HashSet<String> {
    tokens
        .windows(2)
        .map(|pair| pair.join(" "))
        .filter(|candidate| index.contains(candidate))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_index() -> PersonIndex {
        PersonIndex::new(
            ["tom hanks", "Meg Ryan"].iter().map(|s| s.to_string()),
        )
        .unwrap()
    }

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_pair_in_the_middle_is_found() {
        let found = identify_persons(&tokens(&["i", "like", "tom", "hanks", "movies"]), &test_index());
        assert_eq!(found, ["tom hanks".to_string()].into_iter().collect());
    }

    #[test]
    fn test_entries_are_lowercased_on_load() {
        // "Meg Ryan" was stored lowercased, so lowercase tokens match it
        let found = identify_persons(&tokens(&["meg", "ryan"]), &test_index());
        assert!(found.contains("meg ryan"));
    }

    #[test]
    fn test_every_consecutive_pair_is_tested() {
        // "hanks tom" is not a known name but the overlapping window still
        // catches "tom hanks" one position later
        let found = identify_persons(&tokens(&["hanks", "tom", "hanks"]), &test_index());
        assert!(found.contains("tom hanks"));
    }

    #[test]
    fn test_no_match_yields_empty_set() {
        assert!(identify_persons(&tokens(&["nobody", "here"]), &test_index()).is_empty());
        assert!(identify_persons(&tokens(&["tom"]), &test_index()).is_empty());
    }

    #[test]
    fn test_one_and_three_word_entries_are_rejected() {
        let err = PersonIndex::new(["cher".to_string()]).unwrap_err();
        assert!(matches!(err, AssetError::InvalidPersonEntry { .. }));

        let err = PersonIndex::new(["samuel l jackson".to_string()]).unwrap_err();
        assert!(matches!(err, AssetError::InvalidPersonEntry { .. }));
    }
}
