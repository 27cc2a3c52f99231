//! Corpus assembly and the initial likeness prior.
//!
//! This module builds the Corpus from parsed data:
//! - Join the three dataset files by movie id
//! - Deduplicate ids (first occurrence wins)
//! - Compute the confidence-adjusted starting score for every record
//!
//! Rust concepts you'll learn:
//! - Using Rayon's join for parallel parsing
//! - HashMap joins between datasets
//! - Two-pass statistics (corpus means, then per-record assignment)

use crate::error::Result;
use crate::parser;
use crate::types::{MovieData, MovieRecord};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use tracing::{info, warn};

/// Fraction of the mean vote count a record needs to be "sufficiently voted"
const SUFFICIENT_VOTES_FACTOR: f32 = 2.0 / 3.0;

/// The ordered, in-memory collection of movie records.
///
/// Built once at startup and owned by a single session for its lifetime;
/// no record is added or removed after construction. Insertion order is
/// preserved because the top-N selector uses it to break score ties.
#[derive(Debug)]
pub struct Corpus {
    records: Vec<MovieRecord>,
    /// Position of each id in `records` for O(1) lookup
    id_index: HashMap<String, usize>,
}

impl Corpus {
    /// Build a corpus from raw records.
    ///
    /// Steps:
    /// 1. Drop duplicate ids (first occurrence wins, later ones logged)
    /// 2. Convert each raw record into a working record with derived sets
    /// 3. Assign every record its initial likeness prior
    pub fn from_data(data: Vec<MovieData>) -> Self {
        let mut records: Vec<MovieRecord> = Vec::with_capacity(data.len());
        let mut id_index: HashMap<String, usize> = HashMap::with_capacity(data.len());

        for entry in data {
            if id_index.contains_key(&entry.id) {
                warn!("Duplicate movie id {}, keeping first occurrence", entry.id);
                continue;
            }
            id_index.insert(entry.id.clone(), records.len());
            records.push(MovieRecord::from_data(entry));
        }

        let mut corpus = Self { records, id_index };
        corpus.assign_priors();
        corpus
    }

    /// Load the full dataset from a directory and assemble the corpus.
    ///
    /// This is the main entry point for building the corpus from scratch.
    pub fn assemble(data_dir: &Path) -> Result<Self> {
        info!("Assembling movie corpus from {:?}", data_dir);

        // 1. Construct paths to the three CSV files
        let metadata_path = data_dir.join("movies_metadata.csv");
        let credits_path = data_dir.join("credits.csv");
        let keywords_path = data_dir.join("keywords.csv");

        // 2. Parse all three files IN PARALLEL using Rayon
        // Rayon's `join` runs two closures in parallel
        // We nest joins to get three-way parallelism
        let ((metadata, credits), keywords) = rayon::join(
            || {
                rayon::join(
                    || parser::parse_metadata(&metadata_path),
                    || parser::parse_credits(&credits_path),
                )
            },
            || parser::parse_keywords(&keywords_path),
        );

        // Handle errors from parallel parsing
        // The ? operator works because all return Result<T>
        let metadata = metadata?;
        let mut credits = credits?;
        let mut keywords = keywords?;

        info!(
            "Parsed {} metadata rows, {} credit rows, {} keyword rows",
            metadata.len(),
            credits.len(),
            keywords.len()
        );

        // 3. Join credits and keywords onto the metadata rows by id.
        // A metadata row without companion rows keeps empty lists.
        let data: Vec<MovieData> = metadata
            .into_iter()
            .map(|mut record| {
                if let Some((cast, crew)) = credits.remove(&record.id) {
                    record.cast = cast;
                    record.crew = crew;
                }
                if let Some(entries) = keywords.remove(&record.id) {
                    record.keywords = entries;
                }
                record
            })
            .collect();

        let corpus = Self::from_data(data);
        info!("Corpus assembled with {} movies", corpus.len());
        Ok(corpus)
    }

    /// Assign every record its starting likeness.
    ///
    /// A record whose vote count exceeds two-thirds of the corpus mean keeps
    /// its own vote average; anything below that gets the mean vote average
    /// of the sufficiently-voted records, so sparsely-voted movies start from
    /// the crowd's baseline instead of their own noisy score.
    fn assign_priors(&mut self) {
        if self.records.is_empty() {
            return;
        }

        let count = self.records.len() as f32;
        let mean_votes: f32 = self
            .records
            .iter()
            .map(|r| r.vote_count() as f32)
            .sum::<f32>()
            / count;
        let threshold = mean_votes * SUFFICIENT_VOTES_FACTOR;

        let trusted: Vec<f32> = self
            .records
            .iter()
            .filter(|r| r.vote_count() as f32 > threshold)
            .map(|r| r.vote_average())
            .collect();

        // When nothing clears the threshold (e.g. every count is zero),
        // fall back to the plain mean vote average.
        let baseline = if !trusted.is_empty() {
            trusted.iter().sum::<f32>() / trusted.len() as f32
        } else {
            self.records.iter().map(|r| r.vote_average()).sum::<f32>() / count
        };

        for record in &mut self.records {
            let prior = if record.vote_count() as f32 > threshold {
                record.vote_average()
            } else {
                baseline
            };
            record.set_prior(prior);
        }
    }

    // Getters - the scoring engine iterates records, the CLI looks them up

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in insertion order
    pub fn records(&self) -> &[MovieRecord] {
        &self.records
    }

    /// Mutable view for the scoring passes
    pub fn records_mut(&mut self) -> &mut [MovieRecord] {
        &mut self.records
    }

    /// Look up a record by id
    pub fn get(&self, id: &str) -> Option<&MovieRecord> {
        self.id_index.get(id).map(|&pos| &self.records[pos])
    }

    /// Lowercased titles and original titles, for title-mention extraction
    pub fn title_set(&self) -> HashSet<String> {
        let mut titles = HashSet::with_capacity(self.records.len());
        for record in &self.records {
            titles.insert(record.title_lower().to_string());
            titles.insert(record.original_title_lower().to_string());
        }
        titles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NamedEntity;
    use std::fs;
    use tempfile::TempDir;

    fn movie(id: &str, vote_average: f32, vote_count: u32) -> MovieData {
        MovieData {
            id: id.to_string(),
            title: format!("Movie {}", id),
            original_title: format!("Movie {}", id),
            original_language: "en".to_string(),
            overview: "An overview.".to_string(),
            release_date: "2000-01-01".to_string(),
            runtime: 90.0,
            vote_average,
            vote_count,
            genres: vec![NamedEntity {
                name: "Drama".to_string(),
                role: None,
            }],
            cast: Vec::new(),
            crew: Vec::new(),
            keywords: Vec::new(),
        }
    }

    #[test]
    fn test_sufficiently_voted_record_keeps_own_average() {
        // Mean vote count = 300, threshold = 200
        let corpus = Corpus::from_data(vec![
            movie("1", 8.0, 500),
            movie("2", 6.0, 350),
            movie("3", 2.0, 50),
        ]);

        assert_eq!(corpus.get("1").unwrap().likeness(), 8.0);
        assert_eq!(corpus.get("2").unwrap().likeness(), 6.0);
    }

    #[test]
    fn test_sparsely_voted_record_gets_trusted_mean() {
        // Record 3 is far below the threshold, so it starts from the mean
        // vote average of records 1 and 2 (7.0), not its own 2.0
        let corpus = Corpus::from_data(vec![
            movie("1", 8.0, 500),
            movie("2", 6.0, 350),
            movie("3", 2.0, 50),
        ]);

        assert_eq!(corpus.get("3").unwrap().likeness(), 7.0);
    }

    #[test]
    fn test_prior_falls_back_to_plain_mean() {
        // No votes anywhere: nothing clears the threshold
        let corpus = Corpus::from_data(vec![movie("1", 4.0, 0), movie("2", 6.0, 0)]);

        assert_eq!(corpus.get("1").unwrap().likeness(), 5.0);
        assert_eq!(corpus.get("2").unwrap().likeness(), 5.0);
    }

    #[test]
    fn test_duplicate_ids_first_wins() {
        let corpus = Corpus::from_data(vec![movie("1", 8.0, 100), movie("1", 3.0, 100)]);

        assert_eq!(corpus.len(), 1);
        assert_eq!(corpus.get("1").unwrap().vote_average(), 8.0);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let corpus = Corpus::from_data(vec![
            movie("9", 5.0, 100),
            movie("4", 5.0, 100),
            movie("7", 5.0, 100),
        ]);

        let ids: Vec<&str> = corpus.records().iter().map(|r| r.id()).collect();
        assert_eq!(ids, vec!["9", "4", "7"]);
    }

    #[test]
    fn test_assemble_joins_companion_files() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("movies_metadata.csv"),
            r#"id,title,original_title,original_language,overview,release_date,runtime,vote_average,vote_count,genres
11,Star Wars,Star Wars,en,A galaxy far away.,1977-05-25,121.0,8.1,6778,"[{""id"": 12, ""name"": ""Adventure""}]"
12,Lonely Movie,Lonely Movie,en,No companions.,1980-01-01,100.0,5.5,4000,[]
"#,
        )
        .unwrap();
        fs::write(
            dir.path().join("credits.csv"),
            r#"id,cast,crew
11,"[{""name"": ""Mark Hamill"", ""character"": ""Luke Skywalker""}]","[{""name"": ""George Lucas"", ""job"": ""Director""}]"
"#,
        )
        .unwrap();
        fs::write(
            dir.path().join("keywords.csv"),
            r#"id,keywords
11,"[{""id"": 803, ""name"": ""android""}]"
"#,
        )
        .unwrap();

        let corpus = Corpus::assemble(dir.path()).unwrap();
        assert_eq!(corpus.len(), 2);

        let star_wars = corpus.get("11").unwrap();
        assert!(star_wars.cast().contains("mark hamill"));
        assert!(star_wars.crew().contains("george lucas"));
        assert!(star_wars.keywords().contains("android"));

        // A metadata row without companion rows keeps empty sets
        let lonely = corpus.get("12").unwrap();
        assert!(lonely.cast().is_empty());
        assert!(lonely.keywords().is_empty());
    }

    #[test]
    fn test_title_set_is_lowercased() {
        let corpus = Corpus::from_data(vec![movie("1", 5.0, 100)]);
        assert!(corpus.title_set().contains("movie 1"));
    }
}
