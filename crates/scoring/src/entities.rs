//! Entities extracted from a single user turn.

use std::collections::HashSet;

/// Everything the extractors found in one utterance, bundled for the
/// scoring pass.
///
/// Genres, keywords and persons are the "core" entities: they drive the
/// dialogue (the got_info gate, the answer placeholder, the information
/// factor). Languages and titles only steer scoring.
#[derive(Debug, Clone, Default)]
pub struct TurnEntities {
    /// Canonical genre names
    pub genres: HashSet<String>,
    /// Matched keyword stems
    pub keywords: HashSet<String>,
    /// Lowercased two-word person names
    pub persons: HashSet<String>,
    /// ISO-639-1 language codes
    pub languages: HashSet<String>,
    /// Lowercased movie titles
    pub titles: HashSet<String>,
}

impl TurnEntities {
    pub fn new() -> Self {
        Self::default()
    }

    /// The combined core entity set: genres, keywords and persons.
    /// Languages and titles deliberately stay out.
    pub fn combined(&self) -> HashSet<String> {
        let mut all = HashSet::new();
        all.extend(self.genres.iter().cloned());
        all.extend(self.keywords.iter().cloned());
        all.extend(self.persons.iter().cloned());
        all
    }

    /// True when no extractor found anything at all this turn
    pub fn is_empty(&self) -> bool {
        self.genres.is_empty()
            && self.keywords.is_empty()
            && self.persons.is_empty()
            && self.languages.is_empty()
            && self.titles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combined_excludes_languages_and_titles() {
        let mut entities = TurnEntities::new();
        entities.genres.insert("Horror".to_string());
        entities.persons.insert("tom hanks".to_string());
        entities.languages.insert("en".to_string());
        entities.titles.insert("alien".to_string());

        let combined = entities.combined();
        assert_eq!(combined.len(), 2);
        assert!(combined.contains("Horror"));
        assert!(combined.contains("tom hanks"));
        assert!(!combined.contains("en"));
        assert!(!combined.contains("alien"));
    }

    #[test]
    fn test_is_empty_covers_all_sets() {
        let mut entities = TurnEntities::new();
        assert!(entities.is_empty());

        entities.titles.insert("alien".to_string());
        assert!(!entities.is_empty());
        assert!(entities.combined().is_empty());
    }
}
