//! # Scoring Crate
//!
//! This crate accumulates per-movie relevance from the entities found in
//! each user turn, and selects the leaders at session end.
//!
//! ## Components
//!
//! - **punctuate**: the five corpus-pass operations (genres, keywords,
//!   persons, language, titles)
//! - **entities**: the per-turn entity bundle
//! - **traits / punctuators / pass**: composable per-turn scoring pipeline
//! - **selector**: top-N selection by likeness
//!
//! ## Example Usage
//!
//! ```ignore
//! use scoring::{ScoringPass, TurnEntities, top_n};
//! use scoring::punctuators::{GenrePunctuator, KeywordPunctuator};
//!
//! let pass = ScoringPass::new()
//!     .add_punctuator(GenrePunctuator::new(0.5))
//!     .add_punctuator(KeywordPunctuator::new(0.75));
//!
//! pass.apply(&mut corpus, &entities);
//! let leaders = top_n(&corpus, 5);
//! ```

// Public modules
pub mod entities;
pub mod pass;
pub mod punctuate;
pub mod punctuators;
pub mod selector;
pub mod traits;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used items for convenience
pub use entities::TurnEntities;
pub use pass::ScoringPass;
pub use punctuators::{
    GenrePunctuator, KeywordPunctuator, LanguagePunctuator, PersonPunctuator, TitlePunctuator,
};
pub use punctuate::{
    punctuate_genres, punctuate_keywords, punctuate_language, punctuate_movies, punctuate_persons,
};
pub use selector::top_n;
pub use traits::Punctuator;
