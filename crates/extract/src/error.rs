//! Error types for asset loading.

use thiserror::Error;

/// Errors raised while loading the taxonomy or person index.
///
/// All of these are fatal at startup: a session must refuse to start with
/// broken assets rather than fail mid-dialogue.
#[derive(Error, Debug)]
pub enum AssetError {
    /// I/O error occurred while reading an asset file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Asset file held malformed JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The taxonomy must always carry the reserved "extra" category
    #[error("Taxonomy is missing the reserved \"extra\" category")]
    MissingExtraCategory,

    /// Person entries must be exactly two words (the matcher slides a
    /// two-token window over the utterance)
    #[error("Person entry is not a two-word name: {entry:?}")]
    InvalidPersonEntry { entry: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, AssetError>;
