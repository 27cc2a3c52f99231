//! The punctuate family: corpus-wide score increments.
//!
//! Each operation makes one full pass over the corpus and adds `weight` to
//! the likeness of every record that matches the target set, returning how
//! many records it touched. An empty target set short-circuits to 0 before
//! the pass starts, so per-turn cost stays proportional to the entities
//! actually found.
//!
//! Calls are additive and cumulative: one record may be hit by several
//! operations in a turn and again on later turns.

use data_loader::Corpus;
use std::collections::HashSet;
use tracing::debug;

/// Add `weight` to every record whose genre set intersects `genres`.
pub fn punctuate_genres(corpus: &mut Corpus, genres: &HashSet<String>, weight: f32) -> usize {
    if genres.is_empty() {
        return 0;
    }

    let mut modified = 0;
    for record in corpus.records_mut() {
        if !record.genres().is_disjoint(genres) {
            record.punctuate(weight);
            modified += 1;
        }
    }
    debug!("punctuate_genres touched {} records", modified);
    modified
}

/// Add `weight` to every record whose keyword set intersects `keywords` or
/// whose overview mentions any of them as a substring.
pub fn punctuate_keywords(corpus: &mut Corpus, keywords: &HashSet<String>, weight: f32) -> usize {
    if keywords.is_empty() {
        return 0;
    }

    let mut modified = 0;
    for record in corpus.records_mut() {
        let in_keywords = !record.keywords().is_disjoint(keywords);
        let in_overview = keywords
            .iter()
            .any(|k| record.overview_lower().contains(k.as_str()));
        if in_keywords || in_overview {
            record.punctuate(weight);
            modified += 1;
        }
    }
    debug!("punctuate_keywords touched {} records", modified);
    modified
}

/// Add `weight` to every record whose cast or crew intersects `persons`.
pub fn punctuate_persons(corpus: &mut Corpus, persons: &HashSet<String>, weight: f32) -> usize {
    if persons.is_empty() {
        return 0;
    }

    let mut modified = 0;
    for record in corpus.records_mut() {
        if !record.cast().is_disjoint(persons) || !record.crew().is_disjoint(persons) {
            record.punctuate(weight);
            modified += 1;
        }
    }
    debug!("punctuate_persons touched {} records", modified);
    modified
}

/// Add `weight` to every record whose original language is in `languages`.
pub fn punctuate_language(corpus: &mut Corpus, languages: &HashSet<String>, weight: f32) -> usize {
    if languages.is_empty() {
        return 0;
    }

    let mut modified = 0;
    for record in corpus.records_mut() {
        if languages.contains(record.original_language()) {
            record.punctuate(weight);
            modified += 1;
        }
    }
    debug!("punctuate_language touched {} records", modified);
    modified
}

/// Add `weight` to every record whose title or original title is in
/// `titles` (lowercased exact equality).
pub fn punctuate_movies(corpus: &mut Corpus, titles: &HashSet<String>, weight: f32) -> usize {
    if titles.is_empty() {
        return 0;
    }

    let mut modified = 0;
    for record in corpus.records_mut() {
        if titles.contains(record.title_lower()) || titles.contains(record.original_title_lower()) {
            record.punctuate(weight);
            modified += 1;
        }
    }
    debug!("punctuate_movies touched {} records", modified);
    modified
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{set_of, test_corpus};

    #[test]
    fn test_genre_pass_is_additive_and_local() {
        let mut corpus = test_corpus();
        let before: Vec<f32> = corpus.records().iter().map(|r| r.likeness()).collect();

        let modified = punctuate_genres(&mut corpus, &set_of(&["Horror"]), 0.5);

        // Movies 1 and 3 carry Horror; movie 2 does not
        assert_eq!(modified, 2);
        assert_eq!(corpus.get("1").unwrap().likeness(), before[0] + 0.5);
        assert_eq!(corpus.get("2").unwrap().likeness(), before[1]);
        assert_eq!(corpus.get("3").unwrap().likeness(), before[2] + 0.5);
    }

    #[test]
    fn test_empty_target_set_is_a_no_op() {
        let mut corpus = test_corpus();
        let before: Vec<f32> = corpus.records().iter().map(|r| r.likeness()).collect();

        assert_eq!(punctuate_genres(&mut corpus, &HashSet::new(), 1.0), 0);
        assert_eq!(punctuate_keywords(&mut corpus, &HashSet::new(), 1.0), 0);
        assert_eq!(punctuate_persons(&mut corpus, &HashSet::new(), 1.0), 0);
        assert_eq!(punctuate_language(&mut corpus, &HashSet::new(), 1.0), 0);
        assert_eq!(punctuate_movies(&mut corpus, &HashSet::new(), 1.0), 0);

        let after: Vec<f32> = corpus.records().iter().map(|r| r.likeness()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_keywords_match_set_or_overview() {
        let mut corpus = test_corpus();

        // "ghost" is movie 1's keyword; "haunted" only appears in movie 3's overview
        assert_eq!(punctuate_keywords(&mut corpus, &set_of(&["ghost"]), 1.0), 1);
        assert_eq!(
            punctuate_keywords(&mut corpus, &set_of(&["haunted"]), 1.0),
            1
        );
    }

    #[test]
    fn test_persons_match_cast_or_crew() {
        let mut corpus = test_corpus();

        // tom hanks acts in movie 1, jane doe directs movie 2
        assert_eq!(
            punctuate_persons(&mut corpus, &set_of(&["tom hanks"]), 1.0),
            1
        );
        assert_eq!(punctuate_persons(&mut corpus, &set_of(&["jane doe"]), 1.0), 1);
    }

    #[test]
    fn test_language_and_title_equality() {
        let mut corpus = test_corpus();

        assert_eq!(punctuate_language(&mut corpus, &set_of(&["fr"]), 1.0), 1);
        assert_eq!(
            punctuate_movies(&mut corpus, &set_of(&["ghost story"]), 1.0),
            1
        );
        // Titles match lowercased, not as typed in the record
        assert_eq!(
            punctuate_movies(&mut corpus, &set_of(&["Ghost Story"]), 1.0),
            0
        );
    }

    #[test]
    fn test_increments_accumulate_across_calls() {
        let mut corpus = test_corpus();
        let start = corpus.get("1").unwrap().likeness();

        punctuate_genres(&mut corpus, &set_of(&["Horror"]), 0.5);
        punctuate_keywords(&mut corpus, &set_of(&["ghost"]), 0.75);
        punctuate_genres(&mut corpus, &set_of(&["Horror"]), 0.5);

        assert_eq!(corpus.get("1").unwrap().likeness(), start + 1.75);
    }
}
