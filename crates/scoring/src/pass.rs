//! The ScoringPass orchestrates the per-turn punctuators.
//!
//! This module provides the ScoringPass struct that chains the individual
//! punctuators together using the builder pattern.

use crate::entities::TurnEntities;
use crate::traits::Punctuator;
use data_loader::Corpus;
use tracing::debug;

/// Runs a sequence of punctuators over the corpus once per turn.
///
/// ## Usage
/// ```ignore
/// let pass = ScoringPass::new()
///     .add_punctuator(GenrePunctuator::new(0.5))
///     .add_punctuator(KeywordPunctuator::new(0.75))
///     .add_punctuator(PersonPunctuator::new(1.5));
///
/// let touched = pass.apply(&mut corpus, &entities);
/// ```
pub struct ScoringPass {
    punctuators: Vec<Box<dyn Punctuator>>,
}

impl ScoringPass {
    /// Create a new empty ScoringPass.
    pub fn new() -> Self {
        Self {
            punctuators: Vec::new(),
        }
    }

    /// Add a punctuator to the pass (builder pattern).
    pub fn add_punctuator(mut self, punctuator: impl Punctuator + 'static) -> Self {
        self.punctuators.push(Box::new(punctuator));
        self
    }

    /// Apply every punctuator in order.
    ///
    /// Order does not change the resulting scores (all steps are additive);
    /// it only fixes the logging sequence.
    ///
    /// # Returns
    /// The total number of increments applied across all steps. A record
    /// matched by several steps counts once per step.
    pub fn apply(&self, corpus: &mut Corpus, entities: &TurnEntities) -> usize {
        let mut total = 0;
        for punctuator in &self.punctuators {
            let touched = punctuator.punctuate(corpus, entities);
            debug!("{} incremented {} records", punctuator.name(), touched);
            total += touched;
        }
        total
    }
}

impl Default for ScoringPass {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::punctuators::{GenrePunctuator, KeywordPunctuator, PersonPunctuator};
    use crate::test_support::{set_of, test_corpus};

    #[test]
    fn test_empty_pass_touches_nothing() {
        let mut corpus = test_corpus();
        let pass = ScoringPass::new();

        let mut entities = TurnEntities::new();
        entities.genres = set_of(&["Horror"]);

        assert_eq!(pass.apply(&mut corpus, &entities), 0);
    }

    #[test]
    fn test_steps_accumulate_on_one_record() {
        let mut corpus = test_corpus();
        let start = corpus.get("1").unwrap().likeness();

        let pass = ScoringPass::new()
            .add_punctuator(GenrePunctuator::new(0.5))
            .add_punctuator(KeywordPunctuator::new(0.75))
            .add_punctuator(PersonPunctuator::new(1.5));

        let mut entities = TurnEntities::new();
        entities.genres = set_of(&["Horror"]);
        entities.keywords = set_of(&["ghost"]);
        entities.persons = set_of(&["tom hanks"]);

        // Movie 1 matches all three steps: Horror genre, ghost keyword, tom hanks cast
        let total = pass.apply(&mut corpus, &entities);
        assert_eq!(total, 4); // genres touch movies 1 and 3, the others only movie 1
        assert_eq!(corpus.get("1").unwrap().likeness(), start + 0.5 + 0.75 + 1.5);
    }

    #[test]
    fn test_pass_with_empty_entities_is_a_no_op() {
        let mut corpus = test_corpus();
        let before: Vec<f32> = corpus.records().iter().map(|r| r.likeness()).collect();

        let pass = ScoringPass::new()
            .add_punctuator(GenrePunctuator::new(0.5))
            .add_punctuator(KeywordPunctuator::new(0.75));

        assert_eq!(pass.apply(&mut corpus, &TurnEntities::new()), 0);

        let after: Vec<f32> = corpus.records().iter().map(|r| r.likeness()).collect();
        assert_eq!(before, after);
    }
}
