//! Shared fixtures for the scoring tests.

use data_loader::{Corpus, MovieData, NamedEntity};
use std::collections::HashSet;

fn entity(name: &str, role: Option<&str>) -> NamedEntity {
    NamedEntity {
        name: name.to_string(),
        role: role.map(|r| r.to_string()),
    }
}

/// Three movies with equal vote counts, so every prior is the record's own
/// vote average: movie 1 = 6.0, movie 2 = 7.0, movie 3 = 5.0.
pub fn test_corpus() -> Corpus {
    Corpus::from_data(vec![
        MovieData {
            id: "1".to_string(),
            title: "Ghost Story".to_string(),
            original_title: "Ghost Story".to_string(),
            original_language: "en".to_string(),
            overview: "A spirit refuses to leave an old house.".to_string(),
            release_date: "1981-12-16".to_string(),
            runtime: 110.0,
            vote_average: 6.0,
            vote_count: 100,
            genres: vec![entity("Horror", None)],
            cast: vec![entity("Tom Hanks", Some("The Visitor"))],
            crew: Vec::new(),
            keywords: vec![entity("ghost", None)],
        },
        MovieData {
            id: "2".to_string(),
            title: "Paris Nights".to_string(),
            original_title: "Les Nuits".to_string(),
            original_language: "fr".to_string(),
            overview: "Two strangers meet under the city lights.".to_string(),
            release_date: "1998-02-14".to_string(),
            runtime: 95.0,
            vote_average: 7.0,
            vote_count: 100,
            genres: vec![entity("Romance", None)],
            cast: Vec::new(),
            crew: vec![entity("Jane Doe", Some("Director"))],
            keywords: vec![entity("paris", None)],
        },
        MovieData {
            id: "3".to_string(),
            title: "Midnight Mansion".to_string(),
            original_title: "Midnight Mansion".to_string(),
            original_language: "en".to_string(),
            overview: "A family moves into a haunted mansion.".to_string(),
            release_date: "2005-10-31".to_string(),
            runtime: 102.0,
            vote_average: 5.0,
            vote_count: 100,
            genres: vec![entity("Horror", None), entity("Thriller", None)],
            cast: vec![entity("Meg Ryan", Some("The Mother"))],
            crew: Vec::new(),
            keywords: vec![entity("mansion", None)],
        },
    ])
}

pub fn set_of(values: &[&str]) -> HashSet<String> {
    values.iter().map(|v| v.to_string()).collect()
}
