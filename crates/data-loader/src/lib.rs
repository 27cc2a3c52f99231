//! # Data Loader Crate
//!
//! This crate assembles and caches the movie corpus used by the recommender.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (NamedEntity, MovieData, MovieRecord)
//! - **parser**: Parse the dataset CSV files into Rust structs
//! - **corpus**: Join the files, deduplicate, compute the likeness prior
//! - **cache**: On-disk cache of the assembled raw records
//! - **error**: Error types for corpus loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::Corpus;
//! use std::path::Path;
//!
//! // Load the corpus (from cache when available)
//! let corpus = Corpus::load(Path::new("data/movies"), Path::new("corpus-cache.json"))?;
//!
//! // Query data
//! let movie = corpus.get("11").unwrap();
//! println!("{} starts at likeness {:.2}", movie.title(), movie.likeness());
//! ```
//!
//! ## Learning Goals
//!
//! This crate demonstrates several key Rust concepts:
//!
//! 1. **Ownership and Borrowing**: the Corpus owns its records, methods return references
//! 2. **Error Handling**: Result<T> with a custom error enum
//! 3. **Encapsulation**: MovieRecord's score can only grow through `punctuate`
//! 4. **Serde**: CSV rows, nested JSON columns, and the cache file
//! 5. **Parallel Processing**: Rayon for parsing the dataset files

// Public modules
pub mod cache;
pub mod corpus;
pub mod error;
pub mod parser;
pub mod types;

// Re-export commonly used types for convenience
pub use corpus::Corpus;
pub use error::{CorpusError, Result};
pub use types::{MovieData, MovieId, MovieRecord, NamedEntity};
