//! Core trait for the scoring pass.
//!
//! This module defines the Punctuator trait that allows composable,
//! per-entity-type scoring steps to be applied to the corpus.

use crate::entities::TurnEntities;
use data_loader::Corpus;

/// One scoring step of a turn.
///
/// Every punctuator picks its own entity slice out of [`TurnEntities`] and
/// runs one corpus pass with its configured weight.
///
/// ## Design Note
/// - `Send + Sync` allows punctuators to be used in concurrent contexts
/// - Punctuators mutate the corpus in place; each records only additive
///   likeness increments, so steps never undo each other
pub trait Punctuator: Send + Sync {
    /// Returns the name of this punctuator (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this punctuator to the corpus.
    ///
    /// # Arguments
    /// * `corpus` - The corpus to score
    /// * `entities` - Everything extracted from the current turn
    ///
    /// # Returns
    /// The number of records whose likeness was incremented
    fn punctuate(&self, corpus: &mut Corpus, entities: &TurnEntities) -> usize;
}
