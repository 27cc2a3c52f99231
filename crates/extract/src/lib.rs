//! # Extract Crate
//!
//! This crate turns a raw user utterance into the entity sets the scoring
//! engine and the dialogue machine consume.
//!
//! ## Components
//!
//! - **tokenizer**: utterance normalization into lowercase word tokens
//! - **taxonomy**: genre/keyword taxonomy and `identify_genre`
//! - **persons**: known-persons index and `identify_persons`
//! - **languages**: language-name lookup (`identify_languages`)
//! - **titles**: known-titles index and `identify_titles`
//! - **error**: fatal asset-loading errors
//!
//! ## Example Usage
//!
//! ```ignore
//! use extract::{identify_genre, tokenize, Taxonomy};
//! use std::path::Path;
//!
//! let taxonomy = Taxonomy::from_file(Path::new("assets/taxonomy.json"))?;
//! let tokens = tokenize("I love ghost stories!");
//! let (genres, keywords) = identify_genre(&tokens, &taxonomy);
//! ```
//!
//! Per-turn extraction never fails: an utterance matching nothing just
//! yields empty sets. Errors exist only at asset-load time.

// Public modules
pub mod error;
pub mod languages;
pub mod persons;
pub mod taxonomy;
pub mod titles;
pub mod tokenizer;

// Re-export commonly used items for convenience
pub use error::{AssetError, Result};
pub use languages::identify_languages;
pub use persons::{PersonIndex, identify_persons};
pub use taxonomy::{EXTRA_CATEGORY, Taxonomy, identify_genre};
pub use titles::{TitleIndex, identify_titles};
pub use tokenizer::tokenize;
