//! Error types for the data-loader crate.
//!
//! Rust error handling concepts demonstrated:
//! - thiserror for defining custom error types
//! - Enum variants for different error cases
//! - Error messages with context
//! - Automatic `Display` and `Error` trait implementations

use thiserror::Error;

/// Errors that can occur while assembling the movie corpus
///
/// Rust concept: Using an enum for errors lets us handle different cases
/// The `#[derive(Error)]` macro from thiserror automatically implements
/// the `std::error::Error` trait and `Display` based on our `#[error(...)]` attributes
#[derive(Error, Debug)]
pub enum CorpusError {
    /// I/O error occurred while reading a file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV reader itself failed (bad quoting, unreadable file, ...)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Row in a dataset file couldn't be parsed
    ///
    /// This variant stores context about where the error occurred
    #[error("Parse error at line {line} in {file}: {reason}")]
    ParseError {
        file: String,
        line: usize,
        reason: String,
    },

    /// A data field had an invalid value
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// The on-disk corpus cache couldn't be written
    #[error("Cache error: {0}")]
    Cache(String),
}

/// Convenience type alias for Results in this crate
///
/// Rust concept: Type aliases make code more readable
/// Instead of writing `Result<T, CorpusError>` everywhere,
/// we can write `Result<T>`
pub type Result<T> = std::result::Result<T, CorpusError>;
