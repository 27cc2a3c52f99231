//! Genre/keyword taxonomy and the taxonomy matcher.
//!
//! The taxonomy maps each genre name to a set of keyword stems. One reserved
//! pseudo-genre, "extra", holds stems worth matching (movie, film, actor...)
//! that carry no genre signal of their own.

use crate::error::{AssetError, Result};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;
use tracing::info;

/// Name of the reserved pseudo-genre whose keywords contribute no genre
pub const EXTRA_CATEGORY: &str = "extra";

/// Mapping from genre name to its keyword stems.
///
/// Immutable once loaded and shared read-only across the session.
#[derive(Debug, Clone)]
pub struct Taxonomy {
    genres: HashMap<String, HashSet<String>>,
}

impl Taxonomy {
    /// Build a taxonomy, verifying that the reserved "extra" key is present.
    pub fn new(genres: HashMap<String, HashSet<String>>) -> Result<Self> {
        if !genres.contains_key(EXTRA_CATEGORY) {
            return Err(AssetError::MissingExtraCategory);
        }
        Ok(Self { genres })
    }

    /// Load the taxonomy from a JSON file of the form
    /// `{"Horror": ["ghost", ...], "extra": ["movie", ...]}`.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let genres: HashMap<String, HashSet<String>> = serde_json::from_str(&contents)?;
        let taxonomy = Self::new(genres)?;
        info!(
            "Loaded taxonomy with {} genres from {:?}",
            taxonomy.genres.len() - 1,
            path
        );
        Ok(taxonomy)
    }

    /// Iterate (genre name, keyword stems) pairs, "extra" included
    pub fn entries(&self) -> impl Iterator<Item = (&String, &HashSet<String>)> {
        self.genres.iter()
    }
}

/// Match tokens against the taxonomy.
///
/// Every token is tested against every stem of every genre; a token may
/// satisfy several genres and keywords at once. A match adds the stem to the
/// keyword set, and the genre name to the genre set unless the genre is the
/// reserved "extra" category.
///
/// Returns (matched genres, matched keyword stems); both may be empty.
pub fn identify_genre(
    tokens: &[String],
    taxonomy: &Taxonomy,
) -> (HashSet<String>, HashSet<String>) {
    let mut genres = HashSet::new();
    let mut keywords = HashSet::new();

    for token in tokens {
        for (genre, stems) in taxonomy.entries() {
            for stem in stems {
                if matches_stem(token, stem) {
                    keywords.insert(stem.clone());
                    if genre != EXTRA_CATEGORY {
                        genres.insert(genre.clone());
                    }
                }
            }
        }
    }

    (genres, keywords)
}

/// Naive English pluralization tolerance: a token matches a stem when it
/// equals the stem, the stem + "s", or the stem + "es". Irregular plurals
/// are out of scope.
fn matches_stem(token: &str, stem: &str) -> bool {
    token == stem
        || token.strip_suffix('s') == Some(stem)
        || token.strip_suffix("es") == Some(stem)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_taxonomy() -> Taxonomy {
        let mut genres = HashMap::new();
        genres.insert(
            "Horror".to_string(),
            ["ghost", "zombie", "witch"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        );
        genres.insert(
            "Comedy".to_string(),
            ["funny", "laugh"].iter().map(|s| s.to_string()).collect(),
        );
        genres.insert(
            EXTRA_CATEGORY.to_string(),
            ["fun", "movie"].iter().map(|s| s.to_string()).collect(),
        );
        Taxonomy::new(genres).unwrap()
    }

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_plural_tolerance_and_extra_suppression() {
        let (genres, keywords) = identify_genre(&tokens(&["ghosts", "fun"]), &test_taxonomy());

        // "ghosts" matches the stem "ghost"; "fun" matches only in "extra",
        // which contributes the keyword but no genre
        assert_eq!(genres, ["Horror".to_string()].into_iter().collect());
        assert_eq!(
            keywords,
            ["ghost".to_string(), "fun".to_string()].into_iter().collect()
        );
    }

    #[test]
    fn test_es_plural_matches() {
        let (genres, keywords) = identify_genre(&tokens(&["witches"]), &test_taxonomy());
        assert!(genres.contains("Horror"));
        assert!(keywords.contains("witch"));
    }

    #[test]
    fn test_no_match_yields_empty_sets() {
        let (genres, keywords) = identify_genre(&tokens(&["quiet", "evening"]), &test_taxonomy());
        assert!(genres.is_empty());
        assert!(keywords.is_empty());
    }

    #[test]
    fn test_token_can_satisfy_multiple_genres() {
        let mut raw = HashMap::new();
        raw.insert(
            "Horror".to_string(),
            ["dark"].iter().map(|s| s.to_string()).collect(),
        );
        raw.insert(
            "Thriller".to_string(),
            ["dark"].iter().map(|s| s.to_string()).collect(),
        );
        raw.insert(EXTRA_CATEGORY.to_string(), HashSet::new());
        let taxonomy = Taxonomy::new(raw).unwrap();

        let (genres, keywords) = identify_genre(&tokens(&["dark"]), &taxonomy);
        assert_eq!(genres.len(), 2);
        assert_eq!(keywords.len(), 1);
    }

    #[test]
    fn test_missing_extra_category_is_fatal() {
        let mut raw: HashMap<String, HashSet<String>> = HashMap::new();
        raw.insert("Horror".to_string(), HashSet::new());

        assert!(matches!(
            Taxonomy::new(raw),
            Err(AssetError::MissingExtraCategory)
        ));
    }

    #[test]
    fn test_stem_suffix_rules() {
        assert!(matches_stem("ghost", "ghost"));
        assert!(matches_stem("ghosts", "ghost"));
        assert!(matches_stem("ghostes", "ghost"));
        assert!(!matches_stem("ghostly", "ghost"));
        // The token carries the suffix, not the stem
        assert!(!matches_stem("ghost", "ghosts"));
    }
}
