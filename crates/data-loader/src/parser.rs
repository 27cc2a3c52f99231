//! Parser for the movie dataset files.
//!
//! This module handles parsing the three CSV exports:
//! - movies_metadata.csv: id,title,original_title,original_language,overview,release_date,runtime,vote_average,vote_count,genres
//! - credits.csv: id,cast,crew
//! - keywords.csv: id,keywords
//!
//! The nested columns (genres, cast, crew, keywords) hold JSON arrays of
//! name-bearing objects; they are decoded with serde_json after the CSV layer
//! has split the row. Cleaning and JSON normalization happen upstream, so a
//! malformed row here breaks the corpus-source contract and aborts the load.
//!
//! Rust concepts you'll learn here:
//! - Deserializing CSV rows into structs with serde
//! - Error handling with the `?` operator
//! - Converting between types (parsing strings to numbers)
//! - Generic helper functions with trait bounds (FromStr)

use crate::error::{CorpusError, Result};
use crate::types::{MovieData, MovieId, NamedEntity};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

/// Raw row of movies_metadata.csv, all fields still strings.
///
/// csv + serde match the struct fields against the header row, so column
/// order in the file doesn't matter.
#[derive(Debug, Deserialize)]
struct MetadataRow {
    id: String,
    title: String,
    original_title: String,
    original_language: String,
    overview: String,
    release_date: String,
    runtime: String,
    vote_average: String,
    vote_count: String,
    genres: String,
}

/// Raw row of credits.csv
#[derive(Debug, Deserialize)]
struct CreditsRow {
    id: String,
    cast: String,
    crew: String,
}

/// Raw row of keywords.csv
#[derive(Debug, Deserialize)]
struct KeywordsRow {
    id: String,
    keywords: String,
}

/// Cast and crew lists for one movie
pub type Credits = (Vec<NamedEntity>, Vec<NamedEntity>);

/// Parse movies_metadata.csv into partial records.
///
/// The returned records have empty cast/crew/keyword lists; those are joined
/// in from the companion files by the corpus assembler.
pub fn parse_metadata(path: &Path) -> Result<Vec<MovieData>> {
    let file_name = "movies_metadata.csv";
    let mut reader = csv::Reader::from_path(path)?;
    let mut records = Vec::new();

    for (idx, row) in reader.deserialize::<MetadataRow>().enumerate() {
        // Line 1 is the header
        let line_no = idx + 2;
        let row = row?;

        if row.id.trim().is_empty() {
            return Err(CorpusError::ParseError {
                file: file_name.to_string(),
                line: line_no,
                reason: "Missing id".to_string(),
            });
        }

        let vote_average: f32 = parse_numeric(&row.vote_average, "vote_average", file_name, line_no)?;
        if vote_average < 0.0 {
            return Err(CorpusError::InvalidValue {
                field: "vote_average".to_string(),
                value: row.vote_average.clone(),
            });
        }

        let record = MovieData {
            id: row.id.trim().to_string(),
            title: row.title,
            original_title: row.original_title,
            original_language: row.original_language,
            overview: row.overview,
            release_date: row.release_date,
            runtime: parse_numeric(&row.runtime, "runtime", file_name, line_no)?,
            vote_average,
            vote_count: parse_numeric(&row.vote_count, "vote_count", file_name, line_no)?,
            genres: parse_entity_list(&row.genres, "genres", file_name, line_no)?,
            cast: Vec::new(),
            crew: Vec::new(),
            keywords: Vec::new(),
        };

        records.push(record);
    }

    Ok(records)
}

/// Parse credits.csv into a lookup from movie id to (cast, crew).
///
/// If a movie id appears twice, the first row wins.
pub fn parse_credits(path: &Path) -> Result<HashMap<MovieId, Credits>> {
    let file_name = "credits.csv";
    let mut reader = csv::Reader::from_path(path)?;
    let mut credits = HashMap::new();

    for (idx, row) in reader.deserialize::<CreditsRow>().enumerate() {
        let line_no = idx + 2;
        let row = row?;

        if row.id.trim().is_empty() {
            return Err(CorpusError::ParseError {
                file: file_name.to_string(),
                line: line_no,
                reason: "Missing id".to_string(),
            });
        }

        let cast = parse_entity_list(&row.cast, "cast", file_name, line_no)?;
        let crew = parse_entity_list(&row.crew, "crew", file_name, line_no)?;
        credits
            .entry(row.id.trim().to_string())
            .or_insert((cast, crew));
    }

    Ok(credits)
}

/// Parse keywords.csv into a lookup from movie id to keyword entries.
///
/// If a movie id appears twice, the first row wins.
pub fn parse_keywords(path: &Path) -> Result<HashMap<MovieId, Vec<NamedEntity>>> {
    let file_name = "keywords.csv";
    let mut reader = csv::Reader::from_path(path)?;
    let mut keywords = HashMap::new();

    for (idx, row) in reader.deserialize::<KeywordsRow>().enumerate() {
        let line_no = idx + 2;
        let row = row?;

        if row.id.trim().is_empty() {
            return Err(CorpusError::ParseError {
                file: file_name.to_string(),
                line: line_no,
                reason: "Missing id".to_string(),
            });
        }

        let entries = parse_entity_list(&row.keywords, "keywords", file_name, line_no)?;
        keywords.entry(row.id.trim().to_string()).or_insert(entries);
    }

    Ok(keywords)
}

/// Parse a numeric field, reporting the file and line on failure.
///
/// Rust concept: the generic bound `T: FromStr` lets one helper cover
/// f32 and u32 fields alike.
fn parse_numeric<T>(value: &str, field: &str, file: &str, line: usize) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e| CorpusError::ParseError {
        file: file.to_string(),
        line,
        reason: format!("Invalid {}: {}", field, e),
    })
}

/// Decode a nested JSON column into its entity list.
///
/// An empty column means the movie simply has no entries for that field.
fn parse_entity_list(raw: &str, field: &str, file: &str, line: usize) -> Result<Vec<NamedEntity>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(Vec::new());
    }

    serde_json::from_str(raw).map_err(|e| CorpusError::ParseError {
        file: file.to_string(),
        line,
        reason: format!("Invalid {} JSON: {}", field, e),
    })
}
