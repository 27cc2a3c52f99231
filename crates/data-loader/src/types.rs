//! Core domain types for the movie corpus.
//!
//! This module defines the fundamental data structures used throughout the system.
//! Key Rust concepts demonstrated here:
//! - Type aliases for domain clarity (MovieId)
//! - Raw vs. derived representations of the same record
//! - Encapsulation: private fields with accessor methods
//! - Derive macros for common traits
//! - HashSet for O(1) membership tests during scoring

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a movie, kept as the string the dataset uses
pub type MovieId = String;

// =============================================================================
// Raw Record Types
// =============================================================================

/// One name-bearing entry of a nested record field (cast, crew, genre, keyword).
///
/// The dataset stores these as JSON objects with varying secondary keys
/// ("character" for cast, "job" for crew, nothing for genres/keywords), so the
/// secondary key is normalized into an optional `role`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamedEntity {
    pub name: String,
    /// Character name for cast entries, job title for crew entries
    #[serde(default, alias = "character", alias = "job")]
    pub role: Option<String>,
}

/// A movie exactly as assembled from the dataset files.
///
/// This is the serializable shape: the parser produces it, the on-disk cache
/// stores it, and [`MovieRecord::from_data`] turns it into the working record.
///
/// Rust concept: keeping the raw struct separate from the working record lets
/// serde derive stay on an all-public struct while the working record keeps
/// its fields private.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieData {
    pub id: MovieId,
    pub title: String,
    pub original_title: String,
    /// ISO-639-1 language code (e.g. "en")
    pub original_language: String,
    pub overview: String,
    pub release_date: String,
    pub runtime: f32,
    pub vote_average: f32,
    pub vote_count: u32,
    pub genres: Vec<NamedEntity>,
    pub cast: Vec<NamedEntity>,
    pub crew: Vec<NamedEntity>,
    pub keywords: Vec<NamedEntity>,
}

// =============================================================================
// MovieRecord - One Row of the Working Corpus
// =============================================================================

/// A movie record ready for scoring.
///
/// Everything except `likeness` is immutable after construction. The derived
/// name sets are computed once from the nested entries so that every scoring
/// pass gets O(1) membership tests instead of re-walking the entry lists.
///
/// Rust concept: all fields are private; the only mutation the rest of the
/// system can perform is [`MovieRecord::punctuate`], which keeps the score
/// monotonically non-decreasing.
#[derive(Debug, Clone)]
pub struct MovieRecord {
    data: MovieData,

    // Derived projections, computed once at corpus build
    genre_names: HashSet<String>,
    cast_names: HashSet<String>,
    crew_names: HashSet<String>,
    keyword_names: HashSet<String>,
    title_lower: String,
    original_title_lower: String,
    overview_lower: String,

    /// Accumulated relevance score for the current session
    likeness: f32,
}

impl MovieRecord {
    /// Build a working record from its raw data.
    ///
    /// Genre names keep their canonical casing (the taxonomy uses them as-is);
    /// cast, crew and keyword names are lowercased because they are matched
    /// against lowercased tokens.
    pub fn from_data(data: MovieData) -> Self {
        let genre_names = data.genres.iter().map(|e| e.name.clone()).collect();
        let cast_names = lowercased_names(&data.cast);
        let crew_names = lowercased_names(&data.crew);
        let keyword_names = lowercased_names(&data.keywords);
        let title_lower = data.title.to_lowercase();
        let original_title_lower = data.original_title.to_lowercase();
        let overview_lower = data.overview.to_lowercase();

        Self {
            data,
            genre_names,
            cast_names,
            crew_names,
            keyword_names,
            title_lower,
            original_title_lower,
            overview_lower,
            likeness: 0.0,
        }
    }

    // Getters - Note: These return references (&T) not owned values (T)

    pub fn id(&self) -> &str {
        &self.data.id
    }

    pub fn title(&self) -> &str {
        &self.data.title
    }

    pub fn original_title(&self) -> &str {
        &self.data.original_title
    }

    pub fn original_language(&self) -> &str {
        &self.data.original_language
    }

    pub fn overview(&self) -> &str {
        &self.data.overview
    }

    pub fn release_date(&self) -> &str {
        &self.data.release_date
    }

    pub fn runtime(&self) -> f32 {
        self.data.runtime
    }

    pub fn vote_average(&self) -> f32 {
        self.data.vote_average
    }

    pub fn vote_count(&self) -> u32 {
        self.data.vote_count
    }

    /// Genre names with canonical casing
    pub fn genres(&self) -> &HashSet<String> {
        &self.genre_names
    }

    /// Lowercased cast member names
    pub fn cast(&self) -> &HashSet<String> {
        &self.cast_names
    }

    /// Lowercased crew member names
    pub fn crew(&self) -> &HashSet<String> {
        &self.crew_names
    }

    /// Lowercased keyword names
    pub fn keywords(&self) -> &HashSet<String> {
        &self.keyword_names
    }

    pub fn title_lower(&self) -> &str {
        &self.title_lower
    }

    pub fn original_title_lower(&self) -> &str {
        &self.original_title_lower
    }

    pub fn overview_lower(&self) -> &str {
        &self.overview_lower
    }

    /// The raw data this record was built from (used by the cache writer)
    pub fn data(&self) -> &MovieData {
        &self.data
    }

    /// Current accumulated relevance score
    pub fn likeness(&self) -> f32 {
        self.likeness
    }

    /// Add `weight` to this record's likeness.
    ///
    /// Negative weights are ignored so that the score never decreases
    /// within a session.
    pub fn punctuate(&mut self, weight: f32) {
        self.likeness += weight.max(0.0);
    }

    /// Set the confidence-adjusted starting score at corpus build time.
    pub(crate) fn set_prior(&mut self, prior: f32) {
        self.likeness = prior.max(0.0);
    }
}

fn lowercased_names(entries: &[NamedEntity]) -> HashSet<String> {
    entries.iter().map(|e| e.name.to_lowercase()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_data() -> MovieData {
        MovieData {
            id: "11".to_string(),
            title: "Star Wars".to_string(),
            original_title: "Star Wars".to_string(),
            original_language: "en".to_string(),
            overview: "Princess Leia is captured and held hostage.".to_string(),
            release_date: "1977-05-25".to_string(),
            runtime: 121.0,
            vote_average: 8.1,
            vote_count: 6778,
            genres: vec![NamedEntity {
                name: "Adventure".to_string(),
                role: None,
            }],
            cast: vec![NamedEntity {
                name: "Mark Hamill".to_string(),
                role: Some("Luke Skywalker".to_string()),
            }],
            crew: vec![NamedEntity {
                name: "George Lucas".to_string(),
                role: Some("Director".to_string()),
            }],
            keywords: vec![NamedEntity {
                name: "Android".to_string(),
                role: None,
            }],
        }
    }

    #[test]
    fn test_derived_sets_are_lowercased() {
        let record = MovieRecord::from_data(sample_data());

        // Genres keep canonical casing, people and keywords are lowercased
        assert!(record.genres().contains("Adventure"));
        assert!(record.cast().contains("mark hamill"));
        assert!(record.crew().contains("george lucas"));
        assert!(record.keywords().contains("android"));
        assert_eq!(record.overview_lower(), record.overview().to_lowercase());
    }

    #[test]
    fn test_punctuate_accumulates() {
        let mut record = MovieRecord::from_data(sample_data());
        assert_eq!(record.likeness(), 0.0);

        record.punctuate(0.5);
        record.punctuate(1.5);
        assert_eq!(record.likeness(), 2.0);
    }

    #[test]
    fn test_punctuate_never_decreases() {
        let mut record = MovieRecord::from_data(sample_data());
        record.punctuate(1.0);
        record.punctuate(-5.0);
        assert_eq!(record.likeness(), 1.0);
    }

    #[test]
    fn test_entity_role_aliases() {
        // Cast entries use "character", crew entries use "job"
        let cast: NamedEntity =
            serde_json::from_str(r#"{"name": "Mark Hamill", "character": "Luke Skywalker"}"#)
                .unwrap();
        assert_eq!(cast.role.as_deref(), Some("Luke Skywalker"));

        let crew: NamedEntity =
            serde_json::from_str(r#"{"name": "George Lucas", "job": "Director"}"#).unwrap();
        assert_eq!(crew.role.as_deref(), Some("Director"));

        let genre: NamedEntity = serde_json::from_str(r#"{"id": 12, "name": "Adventure"}"#).unwrap();
        assert!(genre.role.is_none());
    }
}
